//! Navigation, footer and contact details shared by every page.

use super::{apply_year, phone_digits, some, text};
use crate::{
    coalesce::{resolve, Coalesce},
    documents::{Address, FooterSettings, SiteSettings},
};
use serde::Serialize;

pub const FALLBACK_EMAIL: &str = "hello@kizmetwellness.com";
pub const FALLBACK_PHONE: &str = "(555) 123-4567";
pub const FALLBACK_PHONE_HREF: &str = "tel:+15551234567";

/// Site settings fallback used for visible chrome. SEO and structured data
/// read the raw settings instead, so placeholder contact details never leak
/// into search metadata.
pub fn site_fallback() -> SiteSettings {
    SiteSettings {
        brand_name: some("Kizmet"),
        tagline: some("Massage and Wellness"),
        phone: some(FALLBACK_PHONE),
        email: some(FALLBACK_EMAIL),
        address: Some(Address {
            street: some("105 1/2 E 1st St"),
            city: some("Port Angeles"),
            state: some("WA"),
            zip: None,
        }),
        ..Default::default()
    }
}

pub fn footer_fallback() -> FooterSettings {
    FooterSettings {
        brand_description: some(
            "Massage & Wellness. Nurturing your body and mind through the healing power of touch.",
        ),
        therapist_name: some("Destiny"),
        copyright_text: some("© {year} Kizmet Massage & Wellness. All rights reserved."),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub highlight: bool,
}

const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        path: "/about",
        label: "About",
        highlight: false,
    },
    NavLink {
        path: "/policies",
        label: "What to Know",
        highlight: false,
    },
    NavLink {
        path: "/services",
        label: "Services",
        highlight: true,
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactView {
    pub email: String,
    pub phone: String,
    pub phone_href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterView {
    pub brand_name: String,
    pub brand_description: String,
    pub street: String,
    pub locality: String,
    pub therapist_name: String,
    pub copyright: String,
}

/// Resolved navigation, footer and contact block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chrome {
    pub brand_name: String,
    pub tagline: String,
    pub nav_links: Vec<NavLink>,
    pub contact: ContactView,
    pub footer: FooterView,
}

impl Chrome {
    pub fn resolve(
        site: Option<SiteSettings>,
        footer: Option<FooterSettings>,
        year: i32,
    ) -> Self {
        let has_phone = site
            .as_ref()
            .is_some_and(|site| !site.phone.is_absent());
        let site = resolve(site, site_fallback());
        let footer = resolve(footer, footer_fallback());
        let address = site.address.unwrap_or_default();

        let locality = [address.city, address.state]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        let brand_name = text(site.brand_name);
        let phone = text(site.phone);

        Self {
            tagline: text(site.tagline),
            nav_links: NAV_LINKS.to_vec(),
            contact: ContactView {
                email: text(site.email),
                phone_href: if has_phone {
                    format!("tel:{}", phone_digits(&phone))
                } else {
                    FALLBACK_PHONE_HREF.to_string()
                },
                phone,
            },
            footer: FooterView {
                brand_name: brand_name.clone(),
                brand_description: text(footer.brand_description),
                street: text(address.street),
                locality,
                therapist_name: text(footer.therapist_name),
                copyright: apply_year(&text(footer.copyright_text), year),
            },
            brand_name,
        }
    }
}
