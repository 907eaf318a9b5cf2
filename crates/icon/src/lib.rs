//! # `kizmet-icon`: Wordmark Icons
//!
//! Renders the stacked "K / M" wordmark used for the favicon and the Apple
//! touch icon. The wordmark is set in Fraunces Bold, fetched from a font CDN
//! at request time; when the fetch fails the icon is set in a system serif.

use resvg::{tiny_skia, usvg};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_FONT_URL: &str =
    "https://cdn.jsdelivr.net/fontsource/fonts/fraunces@latest/latin-700-normal.ttf";

const FONT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

const INK: &str = "#2d2d2d";
const SAGE: &str = "#5a725c";
const GRADIENT: [&str; 3] = ["#f0ebe4", "#e4dcd2", "#ddd4c8"];

/// Line height of each letter, relative to the font size.
const LINE_HEIGHT: f32 = 0.7;

#[derive(Error, Debug)]
pub enum IconError {
    #[error("Failed to build icon SVG: {0}")]
    Svg(String),
    #[error("Failed to rasterize icon: {0}")]
    Render(String),
    #[error("Failed to encode icon PNG: {0}")]
    Encode(String),
}

/// Size and letter placement of one icon variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconVariant {
    pub size: u32,
    pub font_size: f32,
    /// Space above the "K".
    pub k_offset: f32,
    /// Space between the "K" and the "M"; negative overlaps them.
    pub m_offset: f32,
}

impl IconVariant {
    /// The 32x32 browser favicon.
    pub const FAVICON: IconVariant = IconVariant {
        size: 32,
        font_size: 19.0,
        k_offset: 2.0,
        m_offset: -5.0,
    };

    /// The 180x180 Apple touch icon.
    pub const APPLE: IconVariant = IconVariant {
        size: 180,
        font_size: 100.0,
        k_offset: 10.0,
        m_offset: -28.0,
    };

    /// Baselines of the "K" and the "M", with the stack centered vertically.
    fn baselines(&self) -> (f32, f32) {
        let line = self.font_size * LINE_HEIGHT;
        let stack = 2.0 * line + self.k_offset + self.m_offset;
        let top = (self.size as f32 - stack) / 2.0;
        let k_baseline = top + self.k_offset + line;
        let m_baseline = k_baseline + self.m_offset + line;
        (k_baseline, m_baseline)
    }
}

/// The wordmark as SVG: a circular gradient disc with the stacked letters.
pub fn wordmark_svg(variant: &IconVariant) -> String {
    let size = variant.size;
    let half = size as f32 / 2.0;
    let (k_baseline, m_baseline) = variant.baselines();
    let letter = |baseline: f32, color: &str, glyph: char| {
        format!(
            "<text x=\"{half}\" y=\"{baseline:.2}\" text-anchor=\"middle\" font-family=\"Fraunces, serif\" font-weight=\"700\" font-size=\"{}\" fill=\"{color}\">{glyph}</text>",
            variant.font_size
        )
    };

    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">",
            "<defs><linearGradient id=\"bg\" x1=\"0.21\" y1=\"0.09\" x2=\"0.79\" y2=\"0.91\">",
            "<stop offset=\"0\" stop-color=\"{g0}\"/><stop offset=\"0.5\" stop-color=\"{g1}\"/><stop offset=\"1\" stop-color=\"{g2}\"/>",
            "</linearGradient></defs>",
            "<circle cx=\"{half}\" cy=\"{half}\" r=\"{half}\" fill=\"url(#bg)\"/>",
            "{k}{m}</svg>"
        ),
        size = size,
        half = half,
        g0 = GRADIENT[0],
        g1 = GRADIENT[1],
        g2 = GRADIENT[2],
        k = letter(k_baseline, INK, 'K'),
        m = letter(m_baseline, SAGE, 'M'),
    )
}

/// Rasterizes the wordmark to PNG. Without `font`, system fonts are used.
pub fn render_icon(variant: &IconVariant, font: Option<&[u8]>) -> Result<Vec<u8>, IconError> {
    let mut options = usvg::Options::default();
    match font {
        Some(data) => options.fontdb_mut().load_font_data(data.to_vec()),
        None => options.fontdb_mut().load_system_fonts(),
    }

    let tree = usvg::Tree::from_str(&wordmark_svg(variant), &options)
        .map_err(|e| IconError::Svg(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(variant.size, variant.size)
        .ok_or_else(|| IconError::Render(format!("invalid icon size {}", variant.size)))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| IconError::Encode(e.to_string()))
}

/// Fetches the wordmark font. Failures are logged and yield `None`.
pub async fn fetch_font(http: &reqwest::Client, url: &str) -> Option<Vec<u8>> {
    let response = match http.get(url).timeout(FONT_FETCH_TIMEOUT).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Icon font fetch failed, falling back to system serif: {e}");
            return None;
        }
    };
    if !response.status().is_success() {
        warn!(
            status = response.status().as_u16(),
            "Icon font fetch failed, falling back to system serif."
        );
        return None;
    }
    match response.bytes().await {
        Ok(bytes) => {
            debug!(bytes = bytes.len(), "Fetched icon font.");
            Some(bytes.to_vec())
        }
        Err(e) => {
            warn!("Icon font download failed, falling back to system serif: {e}");
            None
        }
    }
}

/// Fetches the font and renders an icon, off the async executor.
#[derive(Debug, Clone)]
pub struct IconRenderer {
    http: reqwest::Client,
    font_url: String,
}

impl IconRenderer {
    pub fn new(http: reqwest::Client, font_url: impl Into<String>) -> Self {
        Self {
            http,
            font_url: font_url.into(),
        }
    }

    pub fn font_url(&self) -> &str {
        &self.font_url
    }

    pub async fn render(&self, variant: IconVariant) -> Result<Vec<u8>, IconError> {
        let font = fetch_font(&self.http, &self.font_url).await;
        tokio::task::spawn_blocking(move || render_icon(&variant, font.as_deref()))
            .await
            .map_err(|e| IconError::Render(format!("render task failed: {e}")))?
    }
}
