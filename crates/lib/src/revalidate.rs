//! # Webhook Revalidation
//!
//! Maps a changed document type to the pages that display it and drops those
//! pages from the render cache.

use crate::{cache::RenderCache, documents::DocumentType, errors::CacheError, site::SitePath};
use tracing::info;

/// The pages that display a document type. Unknown types map to the home
/// page so that an unexpected edit still refreshes something visible.
pub fn paths_for(document_type: &DocumentType) -> &'static [SitePath] {
    match document_type {
        DocumentType::HomepageSettings => &[SitePath::Home],
        DocumentType::AboutPage => &[SitePath::About],
        DocumentType::ServicesPageSettings => &[SitePath::Services],
        DocumentType::Service => &[SitePath::Services, SitePath::Book, SitePath::Home],
        DocumentType::PoliciesPage => &[SitePath::Policies],
        DocumentType::BookPage => &[SitePath::Book],
        DocumentType::Testimonial => &[SitePath::Home],
        // Chrome documents appear on every page.
        DocumentType::SiteSettings | DocumentType::FooterSettings => &SitePath::ALL,
        DocumentType::NotFoundPage | DocumentType::Other(_) => &[SitePath::Home],
    }
}

/// Invalidates every page affected by a change to `document_type` and returns
/// the invalidated paths in table order.
pub async fn revalidate(
    cache: &dyn RenderCache,
    document_type: &DocumentType,
) -> Result<Vec<&'static str>, CacheError> {
    let paths = paths_for(document_type);
    for path in paths {
        cache.invalidate(*path).await?;
    }
    info!(document_type = %document_type, count = paths.len(), "Revalidated pages.");
    Ok(paths.iter().map(SitePath::as_str).collect())
}
