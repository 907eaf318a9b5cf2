use clap::Parser;

/// Serves the Kizmet Massage site.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a YAML config file. Defaults to `config.yml` next to the crate.
    #[arg(long, env = "KIZMET_CONFIG")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    kizmet_server::start(args.config.as_deref()).await
}
