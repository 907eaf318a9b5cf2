//! # CMS Document Model
//!
//! Plain data types mirroring the documents stored in the content store. Every
//! field is optional: editors can leave anything blank, and a singleton that was
//! never created deserializes as `None` at the query layer.

use crate::{coalesce_atomic, coalesce_fields};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every document type the site knows about.
///
/// Unknown type names from the store are preserved in [`DocumentType::Other`]
/// so that webhook handling can degrade gracefully instead of rejecting them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentType {
    SiteSettings,
    FooterSettings,
    HomepageSettings,
    AboutPage,
    ServicesPageSettings,
    PoliciesPage,
    BookPage,
    NotFoundPage,
    Service,
    Testimonial,
    Other(String),
}

impl DocumentType {
    /// The `_type` name used by the content store.
    pub fn as_str(&self) -> &str {
        match self {
            DocumentType::SiteSettings => "siteSettings",
            DocumentType::FooterSettings => "footerSettings",
            DocumentType::HomepageSettings => "homepageSettings",
            DocumentType::AboutPage => "aboutPage",
            DocumentType::ServicesPageSettings => "servicesPageSettings",
            DocumentType::PoliciesPage => "policiesPage",
            DocumentType::BookPage => "bookPage",
            DocumentType::NotFoundPage => "notFoundPage",
            DocumentType::Service => "service",
            DocumentType::Testimonial => "testimonial",
            DocumentType::Other(name) => name,
        }
    }

    /// Singleton types live under a fixed document id equal to the type name.
    pub fn singleton_id(&self) -> Option<&str> {
        match self {
            DocumentType::Service | DocumentType::Testimonial | DocumentType::Other(_) => None,
            _ => Some(self.as_str()),
        }
    }
}

impl FromStr for DocumentType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "siteSettings" => DocumentType::SiteSettings,
            "footerSettings" => DocumentType::FooterSettings,
            "homepageSettings" => DocumentType::HomepageSettings,
            "aboutPage" => DocumentType::AboutPage,
            // Older webhook configurations still send the pre-rename type.
            "servicesPageSettings" | "servicesPage" => DocumentType::ServicesPageSettings,
            "policiesPage" => DocumentType::PoliciesPage,
            "bookPage" => DocumentType::BookPage,
            "notFoundPage" => DocumentType::NotFoundPage,
            "service" => DocumentType::Service,
            "testimonial" => DocumentType::Testimonial,
            other => DocumentType::Other(other.to_string()),
        })
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Projections return `null` for missing fields; treat that like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// --- Shared objects ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// An image field after the query has dereferenced its asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub asset: Option<AssetRef>,
}

impl ImageRef {
    pub fn url(&self) -> Option<&str> {
        self.asset
            .as_ref()
            .and_then(|asset| asset.url.as_deref())
            .filter(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slug {
    #[serde(default)]
    pub current: Option<String>,
}

coalesce_atomic!(ImageRef, Slug);

/// Per-page SEO override block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seo {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub og_image: Option<ImageRef>,
    pub no_index: Option<bool>,
}

coalesce_fields!(Seo {
    meta_title,
    meta_description,
    og_image,
    no_index
});

// --- Site settings ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

coalesce_fields!(Address {
    street,
    city,
    state,
    zip
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSeo {
    pub site_url: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub social_image: Option<ImageRef>,
    pub twitter_handle: Option<String>,
    pub instagram_handle: Option<String>,
    pub facebook_url: Option<String>,
}

coalesce_fields!(SiteSeo {
    site_url,
    meta_title,
    meta_description,
    social_image,
    twitter_handle,
    instagram_handle,
    facebook_url
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessHours {
    #[serde(default, deserialize_with = "null_as_default")]
    pub days: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub opens: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub closes: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinates {
    #[serde(default, deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub longitude: f64,
}

coalesce_atomic!(GeoCoordinates);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessInfo {
    pub business_type: Option<String>,
    pub price_range: Option<String>,
    pub business_hours: Option<Vec<BusinessHours>>,
    pub geo_coordinates: Option<GeoCoordinates>,
    pub google_maps_url: Option<String>,
    pub google_place_id: Option<String>,
}

coalesce_fields!(BusinessInfo {
    business_type,
    price_range,
    business_hours,
    geo_coordinates,
    google_maps_url,
    google_place_id
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    pub brand_name: Option<String>,
    pub tagline: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<Address>,
    pub booking_url: Option<String>,
    pub seo: Option<SiteSeo>,
    pub business_info: Option<BusinessInfo>,
}

coalesce_fields!(SiteSettings {
    brand_name,
    tagline,
    phone,
    email,
    address,
    booking_url,
    seo,
    business_info
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterSettings {
    pub brand_description: Option<String>,
    pub therapist_name: Option<String>,
    pub copyright_text: Option<String>,
}

coalesce_fields!(FooterSettings {
    brand_description,
    therapist_name,
    copyright_text
});

// --- Page singletons ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomepageSettings {
    pub hero_headline: Option<String>,
    pub hero_subheadline: Option<String>,
    pub hero_cta: Option<String>,
    pub hero_cta_link: Option<String>,
    pub hero_secondary_cta: Option<String>,
    pub hero_secondary_cta_link: Option<String>,
    pub hero_image: Option<ImageRef>,
    pub services_heading: Option<String>,
    pub services_description: Option<String>,
    pub about_preview_eyebrow: Option<String>,
    pub about_preview_quote: Option<String>,
    pub about_preview_attribution_name: Option<String>,
    pub about_preview_attribution_title: Option<String>,
    pub about_preview_cta_text: Option<String>,
    pub about_preview_cta_link: Option<String>,
    pub testimonials_enabled: Option<bool>,
    pub testimonials_eyebrow: Option<String>,
    pub testimonials_title: Option<String>,
    pub testimonials_subtitle: Option<String>,
    pub cta_headline: Option<String>,
    pub cta_description: Option<String>,
    pub cta_button_text: Option<String>,
    pub cta_button_link: Option<String>,
    pub seo: Option<Seo>,
}

coalesce_fields!(HomepageSettings {
    hero_headline,
    hero_subheadline,
    hero_cta,
    hero_cta_link,
    hero_secondary_cta,
    hero_secondary_cta_link,
    hero_image,
    services_heading,
    services_description,
    about_preview_eyebrow,
    about_preview_quote,
    about_preview_attribution_name,
    about_preview_attribution_title,
    about_preview_cta_text,
    about_preview_cta_link,
    testimonials_enabled,
    testimonials_eyebrow,
    testimonials_title,
    testimonials_subtitle,
    cta_headline,
    cta_description,
    cta_button_text,
    cta_button_link,
    seo
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JourneyStep {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutPage {
    pub eyebrow: Option<String>,
    pub headline: Option<String>,
    pub intro: Option<String>,
    pub hero_image: Option<ImageRef>,
    pub quote_text: Option<String>,
    pub quote_attribution: Option<String>,
    pub bio_title: Option<String>,
    pub credentials: Option<Vec<String>>,
    pub bio_paragraphs: Option<Vec<String>>,
    pub journey_title: Option<String>,
    pub journey_intro: Option<String>,
    pub journey_steps: Option<Vec<JourneyStep>>,
    pub cta_headline: Option<String>,
    pub cta_button_text: Option<String>,
    pub cta_button_link: Option<String>,
    pub seo: Option<Seo>,
}

coalesce_fields!(AboutPage {
    eyebrow,
    headline,
    intro,
    hero_image,
    quote_text,
    quote_attribution,
    bio_title,
    credentials,
    bio_paragraphs,
    journey_title,
    journey_intro,
    journey_steps,
    cta_headline,
    cta_button_text,
    cta_button_link,
    seo
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicesPageSettings {
    pub eyebrow: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub section_title: Option<String>,
    pub book_button_text: Option<String>,
    pub cta_heading: Option<String>,
    pub cta_description: Option<String>,
    pub cta_button_text: Option<String>,
    pub cta_button_link: Option<String>,
    pub seo: Option<Seo>,
}

coalesce_fields!(ServicesPageSettings {
    eyebrow,
    title,
    description,
    section_title,
    book_button_text,
    cta_heading,
    cta_description,
    cta_button_text,
    cta_button_link,
    seo
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyGroup {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PoliciesPage {
    pub eyebrow: Option<String>,
    pub page_title: Option<String>,
    pub page_description: Option<String>,
    pub policies: Option<Vec<PolicyGroup>>,
    pub questions_heading: Option<String>,
    pub questions_description: Option<String>,
    pub seo: Option<Seo>,
}

coalesce_fields!(PoliciesPage {
    eyebrow,
    page_title,
    page_description,
    policies,
    questions_heading,
    questions_description,
    seo
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookPage {
    pub eyebrow: Option<String>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub seo: Option<Seo>,
}

coalesce_fields!(BookPage {
    eyebrow,
    headline,
    description,
    seo
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotFoundPage {
    pub heading: Option<String>,
    pub message: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
}

coalesce_fields!(NotFoundPage {
    heading,
    message,
    button_text,
    button_link
});

// --- Collections ---

/// A bookable service. `order` drives display order; ties keep store order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub slug: Option<Slug>,
    pub duration: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub extended_description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub techniques: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub best_for: Vec<String>,
    pub featured: Option<bool>,
    pub order: Option<i64>,
    pub booking_url: Option<String>,
    pub seo: Option<Seo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub author_name: String,
    pub author_location: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub quote: String,
    pub featured: Option<bool>,
    pub order: Option<i64>,
}

/// Collection documents that carry an explicit display order.
pub trait Ordered {
    fn order(&self) -> Option<i64>;
}

impl Ordered for Service {
    fn order(&self) -> Option<i64> {
        self.order
    }
}

impl Ordered for Testimonial {
    fn order(&self) -> Option<i64> {
        self.order
    }
}

/// Sorts ascending by `order`; missing orders go last and ties keep their
/// original position.
pub fn sort_by_order<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(|item| (item.order().is_none(), item.order().unwrap_or_default()));
}
