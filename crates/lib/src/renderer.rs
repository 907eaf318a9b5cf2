//! # Site Renderer
//!
//! Fetches the documents a page needs, resolves them against their fallbacks
//! and renders the HTML. Published renders go through the render cache; draft
//! renders always read fresh content and are never stored.

use crate::{
    cache::{CachedPage, RenderCache},
    documents::{
        AboutPage, BookPage, FooterSettings, HomepageSettings, NotFoundPage, PoliciesPage, Seo,
        Service, ServicesPageSettings, SiteSettings, Testimonial,
    },
    pages::{
        about, book, current_year, policies, services, AboutView, BookView, Chrome, HomeView,
        NotFoundView, PoliciesView, ServicesView,
    },
    query::Query,
    render,
    seo::{site_url, PageMetadata, PageSeoInput},
    site::SitePath,
    source::{fetch_collection, fetch_document, ContentClients, ContentSource, RequestContext},
    structured_data,
};
use futures::join;
use serde_json::Value;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Ok,
    NotFound,
}

/// A rendered response body plus the caching facts the HTTP layer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub status: PageStatus,
    pub html: String,
    pub etag: String,
    /// Whether shared caches may store the response.
    pub cacheable: bool,
    /// Whether the body came from the render cache.
    pub cache_hit: bool,
}

#[derive(Debug, Clone)]
pub struct SiteRenderer {
    clients: ContentClients,
    cache: Box<dyn RenderCache>,
}

/// The site settings and footer shown on every page.
struct Shell {
    site: Option<SiteSettings>,
    chrome: Chrome,
}

impl Shell {
    fn new(site: Option<SiteSettings>, footer: Option<FooterSettings>) -> Self {
        let chrome = Chrome::resolve(site.clone(), footer, current_year());
        Self { site, chrome }
    }

    fn metadata(&self, page: PageSeoInput<'_>) -> PageMetadata {
        PageMetadata::build(self.site.as_ref(), page)
    }

    fn document(&self, meta: &PageMetadata, extra_json_ld: Vec<Value>, main: &str) -> String {
        let mut json_ld = vec![structured_data::site_graph(self.site.as_ref())];
        json_ld.extend(extra_json_ld);
        render::document(meta, &json_ld, &self.chrome, main)
    }
}

impl SiteRenderer {
    pub fn new(clients: ContentClients, cache: Box<dyn RenderCache>) -> Self {
        Self { clients, cache }
    }

    pub fn clients(&self) -> &ContentClients {
        &self.clients
    }

    pub fn cache(&self) -> &dyn RenderCache {
        self.cache.as_ref()
    }

    /// Renders the page at `path`. Unknown paths render the 404 page, which
    /// is never cached.
    pub async fn render(&self, path: &str, ctx: &RequestContext) -> RenderedPage {
        let Some(page) = SitePath::parse(path) else {
            debug!(path = %path, "No page at path; rendering 404.");
            let html = self.render_not_found(path, ctx).await;
            let CachedPage { html, etag } = CachedPage::new(html);
            return RenderedPage {
                status: PageStatus::NotFound,
                html,
                etag,
                cacheable: false,
                cache_hit: false,
            };
        };

        if ctx.draft_mode {
            let CachedPage { html, etag } = CachedPage::new(self.render_page(page, ctx).await);
            return RenderedPage {
                status: PageStatus::Ok,
                html,
                etag,
                cacheable: false,
                cache_hit: false,
            };
        }

        if let Some(CachedPage { html, etag }) = self.cache.get(page).await {
            return RenderedPage {
                status: PageStatus::Ok,
                html,
                etag,
                cacheable: true,
                cache_hit: true,
            };
        }

        let rendered = CachedPage::new(self.render_page(page, ctx).await);
        self.cache.insert(page, rendered.clone()).await;
        info!(path = %page, "Rendered and cached page.");
        RenderedPage {
            status: PageStatus::Ok,
            html: rendered.html,
            etag: rendered.etag,
            cacheable: true,
            cache_hit: false,
        }
    }

    /// Renders a page from fresh content, bypassing the cache.
    pub async fn render_page(&self, page: SitePath, ctx: &RequestContext) -> String {
        let source = self.clients.for_request(ctx);
        match page {
            SitePath::Home => render_home(source).await,
            SitePath::About => render_about(source).await,
            SitePath::Services => render_services(source).await,
            SitePath::Book => render_book(source).await,
            SitePath::Policies => render_policies(source).await,
        }
    }

    pub async fn render_not_found(&self, path: &str, ctx: &RequestContext) -> String {
        let source = self.clients.for_request(ctx);
        let (site_query, footer_query, page_query) = (
            Query::site_settings(),
            Query::footer_settings(),
            Query::not_found_page(),
        );
        let (site, footer, page) = join!(
            fetch_document::<SiteSettings>(source, &site_query),
            fetch_document::<FooterSettings>(source, &footer_query),
            fetch_document::<NotFoundPage>(source, &page_query),
        );

        let shell = Shell::new(site, footer);
        let view = NotFoundView::resolve(page);
        let no_index = Seo {
            no_index: Some(true),
            ..Default::default()
        };
        let meta = shell.metadata(PageSeoInput {
            title: Some(view.message.as_str()),
            description: None,
            seo: Some(&no_index),
            path,
        });
        shell.document(&meta, Vec::new(), &render::not_found(&view))
    }
}

/// Blank CMS strings count as absent, so page defaults still apply.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

async fn render_home(source: &dyn ContentSource) -> String {
    let (site_query, footer_query, page_query, services_query, about_query, testimonials_query) = (
        Query::site_settings(),
        Query::footer_settings(),
        Query::homepage_settings(),
        Query::featured_services(),
        Query::about_page(),
        Query::featured_testimonials(),
    );
    let (site, footer, homepage, featured, about, testimonials) = join!(
        fetch_document::<SiteSettings>(source, &site_query),
        fetch_document::<FooterSettings>(source, &footer_query),
        fetch_document::<HomepageSettings>(source, &page_query),
        fetch_collection::<Service>(source, &services_query),
        fetch_document::<AboutPage>(source, &about_query),
        fetch_collection::<Testimonial>(source, &testimonials_query),
    );

    let shell = Shell::new(site, footer);
    let cms_description = homepage
        .as_ref()
        .and_then(|homepage| homepage.hero_subheadline.clone());
    let view = HomeView::resolve(homepage, featured, about, testimonials);
    let meta = shell.metadata(PageSeoInput {
        title: None,
        description: cms_description.as_deref(),
        seo: view.seo.as_ref(),
        path: SitePath::Home.as_str(),
    });
    shell.document(&meta, Vec::new(), &render::home(&view))
}

async fn render_about(source: &dyn ContentSource) -> String {
    let (site_query, footer_query, page_query) = (
        Query::site_settings(),
        Query::footer_settings(),
        Query::about_page(),
    );
    let (site, footer, page) = join!(
        fetch_document::<SiteSettings>(source, &site_query),
        fetch_document::<FooterSettings>(source, &footer_query),
        fetch_document::<AboutPage>(source, &page_query),
    );

    let shell = Shell::new(site, footer);
    let view = AboutView::resolve(page);
    let meta = shell.metadata(PageSeoInput {
        title: Some("About"),
        description: Some(about::META_DESCRIPTION),
        seo: view.seo.as_ref(),
        path: SitePath::About.as_str(),
    });
    shell.document(&meta, Vec::new(), &render::about(&view))
}

async fn render_services(source: &dyn ContentSource) -> String {
    let (site_query, footer_query, page_query, services_query) = (
        Query::site_settings(),
        Query::footer_settings(),
        Query::services_page_settings(),
        Query::all_services(),
    );
    let (site, footer, settings, all_services) = join!(
        fetch_document::<SiteSettings>(source, &site_query),
        fetch_document::<FooterSettings>(source, &footer_query),
        fetch_document::<ServicesPageSettings>(source, &page_query),
        fetch_collection::<Service>(source, &services_query),
    );

    let shell = Shell::new(site, footer);
    let cms_title = settings
        .as_ref()
        .and_then(|settings| non_blank(settings.title.as_deref()))
        .map(str::to_string);
    let cms_description = settings
        .as_ref()
        .and_then(|settings| non_blank(settings.description.as_deref()))
        .map(str::to_string);
    let view = ServicesView::resolve(settings, all_services);
    let meta = shell.metadata(PageSeoInput {
        title: Some(cms_title.as_deref().unwrap_or(services::META_TITLE)),
        description: Some(cms_description.as_deref().unwrap_or(services::META_DESCRIPTION)),
        seo: view.seo.as_ref(),
        path: SitePath::Services.as_str(),
    });

    let site_url = site_url(shell.site.as_ref());
    let service_entries = view
        .services
        .iter()
        .map(|service| structured_data::service(service, &site_url))
        .collect();
    shell.document(&meta, service_entries, &render::services(&view))
}

async fn render_book(source: &dyn ContentSource) -> String {
    let (site_query, footer_query, page_query, services_query) = (
        Query::site_settings(),
        Query::footer_settings(),
        Query::book_page(),
        Query::all_services(),
    );
    let (site, footer, page, all_services) = join!(
        fetch_document::<SiteSettings>(source, &site_query),
        fetch_document::<FooterSettings>(source, &footer_query),
        fetch_document::<BookPage>(source, &page_query),
        fetch_collection::<Service>(source, &services_query),
    );

    let shell = Shell::new(site, footer);
    let cms_description = page
        .as_ref()
        .and_then(|page| non_blank(page.description.as_deref()))
        .map(str::to_string);
    let booking_url = shell
        .site
        .as_ref()
        .and_then(|site| site.booking_url.clone());
    let view = BookView::resolve(
        page,
        all_services,
        booking_url.as_deref(),
        shell.chrome.contact.clone(),
    );
    let meta = shell.metadata(PageSeoInput {
        title: Some(book::META_TITLE),
        description: Some(cms_description.as_deref().unwrap_or(book::META_DESCRIPTION)),
        seo: view.seo.as_ref(),
        path: SitePath::Book.as_str(),
    });
    shell.document(&meta, Vec::new(), &render::book(&view))
}

async fn render_policies(source: &dyn ContentSource) -> String {
    let (site_query, footer_query, page_query) = (
        Query::site_settings(),
        Query::footer_settings(),
        Query::policies_page(),
    );
    let (site, footer, page) = join!(
        fetch_document::<SiteSettings>(source, &site_query),
        fetch_document::<FooterSettings>(source, &footer_query),
        fetch_document::<PoliciesPage>(source, &page_query),
    );

    let shell = Shell::new(site, footer);
    let view = PoliciesView::resolve(page, shell.chrome.contact.clone());
    let meta = shell.metadata(PageSeoInput {
        title: Some("Policies"),
        description: Some(policies::META_DESCRIPTION),
        seo: view.seo.as_ref(),
        path: SitePath::Policies.as_str(),
    });
    shell.document(&meta, Vec::new(), &render::policies(&view))
}
