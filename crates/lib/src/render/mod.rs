//! # HTML Rendering
//!
//! Turns resolved view-models into complete HTML documents. Every interpolated
//! value passes through [`escape`]; JSON-LD goes through
//! [`crate::structured_data::to_script_json`].

mod pages;

pub use pages::{about, book, home, not_found, policies, services};

use crate::{pages::Chrome, seo::PageMetadata, structured_data::to_script_json};
use serde_json::Value;
use std::borrow::Cow;

/// Escapes HTML special characters. Borrows when nothing needs escaping.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['<', '>', '&', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

fn meta_tag(attr: &str, key: &str, content: &str) -> String {
    format!(
        "<meta {attr}=\"{}\" content=\"{}\">\n",
        escape(key),
        escape(content)
    )
}

fn head(meta: &PageMetadata, json_ld: &[Value]) -> String {
    let mut head = String::new();
    head.push_str("<meta charset=\"utf-8\">\n");
    head.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    head.push_str(&format!("<title>{}</title>\n", escape(&meta.document_title)));
    head.push_str(&meta_tag("name", "description", &meta.description));
    if let Some(robots) = meta.robots {
        head.push_str(&meta_tag("name", "robots", robots));
    }
    head.push_str(&format!(
        "<link rel=\"canonical\" href=\"{}\">\n",
        escape(&meta.canonical_url)
    ));
    head.push_str("<link rel=\"icon\" href=\"/icon\" type=\"image/png\">\n");
    head.push_str("<link rel=\"apple-touch-icon\" href=\"/apple-icon\">\n");

    head.push_str(&meta_tag("property", "og:type", "website"));
    head.push_str(&meta_tag("property", "og:site_name", &meta.site_name));
    head.push_str(&meta_tag("property", "og:title", &meta.title));
    head.push_str(&meta_tag("property", "og:description", &meta.description));
    head.push_str(&meta_tag("property", "og:url", &meta.canonical_url));
    head.push_str(&meta_tag("property", "og:image", &meta.og_image_url));
    head.push_str(&meta_tag("property", "og:image:width", "1200"));
    head.push_str(&meta_tag("property", "og:image:height", "630"));
    head.push_str(&meta_tag("property", "og:locale", "en_US"));

    head.push_str(&meta_tag("name", "twitter:card", "summary_large_image"));
    head.push_str(&meta_tag("name", "twitter:title", &meta.title));
    head.push_str(&meta_tag("name", "twitter:description", &meta.description));
    head.push_str(&meta_tag("name", "twitter:image", &meta.og_image_url));
    if let Some(creator) = &meta.twitter_creator {
        head.push_str(&meta_tag("name", "twitter:creator", creator));
    }

    for entry in json_ld {
        head.push_str(&format!(
            "<script type=\"application/ld+json\">{}</script>\n",
            to_script_json(entry)
        ));
    }
    head
}

fn navigation(chrome: &Chrome) -> String {
    let mut nav = String::from("<header class=\"site-header\">\n<nav>\n");
    nav.push_str(&format!(
        "<a class=\"brand\" href=\"/\"><span class=\"brand-name\">{}</span> <span class=\"brand-tagline\">{}</span></a>\n<ul>\n",
        escape(&chrome.brand_name),
        escape(&chrome.tagline)
    ));
    for link in &chrome.nav_links {
        let class = if link.highlight { " class=\"highlight\"" } else { "" };
        nav.push_str(&format!(
            "<li><a href=\"{}\"{class}>{}</a></li>\n",
            link.path,
            escape(link.label)
        ));
    }
    nav.push_str("</ul>\n</nav>\n</header>\n");
    nav
}

fn footer(chrome: &Chrome) -> String {
    let footer = &chrome.footer;
    let contact = &chrome.contact;
    let mut html = String::from("<footer class=\"site-footer\">\n");
    html.push_str(&format!(
        "<section><h2>{}</h2><p>{}</p></section>\n",
        escape(&footer.brand_name),
        escape(&footer.brand_description)
    ));
    html.push_str(&format!(
        "<section><h3>Visit</h3><address>{}<br>{}</address><p>{}</p></section>\n",
        escape(&footer.street),
        escape(&footer.locality),
        escape(&footer.therapist_name)
    ));
    html.push_str(&format!(
        "<section><h3>Contact</h3><p><a href=\"mailto:{email}\">{email}</a></p><p><a href=\"{href}\">{phone}</a></p></section>\n",
        email = escape(&contact.email),
        href = escape(&contact.phone_href),
        phone = escape(&contact.phone)
    ));
    html.push_str(&format!(
        "<p class=\"copyright\">{}</p>\n</footer>\n",
        escape(&footer.copyright)
    ));
    html
}

/// Wraps a page body in the full document: head metadata, JSON-LD,
/// navigation and footer.
pub fn document(meta: &PageMetadata, json_ld: &[Value], chrome: &Chrome, main: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n{}</head>\n<body>\n{}<main>\n{}</main>\n{}</body>\n</html>\n",
        head(meta, json_ld),
        navigation(chrome),
        main,
        footer(chrome)
    )
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(
            escape("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }
}
