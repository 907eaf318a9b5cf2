//! # Page Metadata
//!
//! Derives the `<head>` metadata of a page. Each value is chosen by
//! precedence: the page's own SEO block, then content from the page itself,
//! then the site-wide SEO settings, then hardcoded defaults.

use crate::{
    coalesce::Coalesce,
    documents::{ImageRef, Seo, SiteSettings},
};
use serde::Serialize;

pub const DEFAULT_SITE_URL: &str = "https://kizmetmassage.com";
pub const DEFAULT_SITE_NAME: &str = "Kizmet Massage";
pub const DEFAULT_DESCRIPTION: &str = "Professional therapeutic massage services in Port Angeles, WA.";

/// Social share images are cropped to the Open Graph card size.
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

/// The canonical site URL, without a trailing slash.
pub fn site_url(settings: Option<&SiteSettings>) -> String {
    present(
        settings
            .and_then(|settings| settings.seo.as_ref())
            .and_then(|seo| seo.site_url.as_deref()),
    )
    .unwrap_or(DEFAULT_SITE_URL)
    .trim_end_matches('/')
    .to_string()
}

pub fn site_name(settings: Option<&SiteSettings>) -> String {
    present(settings.and_then(|settings| settings.brand_name.as_deref()))
        .unwrap_or(DEFAULT_SITE_NAME)
        .to_string()
}

/// A cropped share-card URL for an image asset.
pub fn og_image_url(image: &ImageRef) -> Option<String> {
    image.url().map(|url| {
        let separator = if url.contains('?') { '&' } else { '?' };
        format!("{url}{separator}w={OG_IMAGE_WIDTH}&h={OG_IMAGE_HEIGHT}&fit=crop&q=90")
    })
}

/// What a page contributes to its own metadata.
#[derive(Debug, Clone, Default)]
pub struct PageSeoInput<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub seo: Option<&'a Seo>,
    /// Absolute path of the page, e.g. `/about`.
    pub path: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetadata {
    /// The `<title>`, with the site template applied on non-home pages.
    pub document_title: String,
    /// The bare title used for Open Graph and Twitter cards.
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub og_image_url: String,
    pub site_name: String,
    pub twitter_creator: Option<String>,
    /// `Some("noindex, nofollow")` when the page opts out of indexing.
    pub robots: Option<&'static str>,
}

impl PageMetadata {
    pub fn build(settings: Option<&SiteSettings>, page: PageSeoInput<'_>) -> Self {
        let site_seo = settings.and_then(|settings| settings.seo.as_ref());
        let site_name = site_name(settings);
        let site_url = site_url(settings);

        let page_seo_title = present(page.seo.and_then(|seo| seo.meta_title.as_deref()));
        let title = page_seo_title
            .or(present(page.title))
            .or(present(site_seo.and_then(|seo| seo.meta_title.as_deref())))
            .unwrap_or(site_name.as_str())
            .to_string();

        let description = present(page.seo.and_then(|seo| seo.meta_description.as_deref()))
            .or(present(page.description))
            .or(present(site_seo.and_then(|seo| seo.meta_description.as_deref())))
            .unwrap_or(DEFAULT_DESCRIPTION)
            .to_string();

        let og_image_url = page
            .seo
            .and_then(|seo| seo.og_image.as_ref())
            .and_then(og_image_url)
            .or_else(|| {
                site_seo
                    .and_then(|seo| seo.social_image.as_ref())
                    .and_then(og_image_url)
            })
            .unwrap_or_else(|| format!("{site_url}/og-default.jpg"));

        let is_home = page.path.is_empty() || page.path == "/";
        let canonical_url = if is_home {
            site_url.clone()
        } else {
            format!("{site_url}{}", page.path)
        };

        let document_title = if is_home {
            title.clone()
        } else {
            format!("{title} | {site_name}")
        };

        let twitter_creator = site_seo
            .and_then(|seo| seo.twitter_handle.clone())
            .filter(|handle| !handle.is_absent())
            .map(|handle| format!("@{}", handle.trim_start_matches('@')));

        let robots = page
            .seo
            .and_then(|seo| seo.no_index)
            .filter(|no_index| *no_index)
            .map(|_| "noindex, nofollow");

        Self {
            document_title,
            title,
            description,
            canonical_url,
            og_image_url,
            site_name,
            twitter_creator,
            robots,
        }
    }
}
