//! # JSON-LD Structured Data
//!
//! Schema.org entities describing the business, the website and its services.
//! Optional sections are only emitted when the underlying settings carry a
//! value, so search engines never see empty placeholders.

use crate::{
    documents::{Service, SiteSettings},
    seo::{site_name, site_url},
};
use serde_json::{json, Map, Value};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";
pub const DEFAULT_BUSINESS_TYPE: &str = "HealthAndBeautyBusiness";
pub const COUNTRY: &str = "US";
pub const CURRENCY: &str = "USD";

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.trim().is_empty())
}

fn business_id(site_url: &str) -> String {
    format!("{site_url}/#localbusiness")
}

/// The `LocalBusiness` entity (or the more specific type configured in the
/// business info).
pub fn local_business(settings: Option<&SiteSettings>) -> Value {
    let site_url = site_url(settings);
    let seo = settings.and_then(|settings| settings.seo.as_ref());
    let info = settings.and_then(|settings| settings.business_info.as_ref());

    let business_type = info
        .and_then(|info| present(&info.business_type))
        .unwrap_or(DEFAULT_BUSINESS_TYPE);

    let mut schema = Map::new();
    schema.insert("@context".into(), json!(SCHEMA_CONTEXT));
    schema.insert("@type".into(), json!(business_type));
    schema.insert("@id".into(), json!(business_id(&site_url)));
    schema.insert("name".into(), json!(site_name(settings)));
    schema.insert("url".into(), json!(site_url));

    if let Some(description) = seo.and_then(|seo| present(&seo.meta_description)) {
        schema.insert("description".into(), json!(description));
    }
    if let Some(phone) = settings.and_then(|settings| present(&settings.phone)) {
        schema.insert("telephone".into(), json!(phone));
    }
    if let Some(email) = settings.and_then(|settings| present(&settings.email)) {
        schema.insert("email".into(), json!(email));
    }

    if let Some(address) = settings.and_then(|settings| settings.address.as_ref()) {
        let mut postal = Map::new();
        postal.insert("@type".into(), json!("PostalAddress"));
        for (key, value) in [
            ("streetAddress", &address.street),
            ("addressLocality", &address.city),
            ("addressRegion", &address.state),
            ("postalCode", &address.zip),
        ] {
            if let Some(value) = present(value) {
                postal.insert(key.into(), json!(value));
            }
        }
        postal.insert("addressCountry".into(), json!(COUNTRY));
        schema.insert("address".into(), Value::Object(postal));
    }

    if let Some(geo) = info.and_then(|info| info.geo_coordinates) {
        schema.insert(
            "geo".into(),
            json!({
                "@type": "GeoCoordinates",
                "latitude": geo.latitude,
                "longitude": geo.longitude,
            }),
        );
    }

    if let Some(hours) = info
        .and_then(|info| info.business_hours.as_ref())
        .filter(|hours| !hours.is_empty())
    {
        let specs: Vec<Value> = hours
            .iter()
            .map(|hours| {
                json!({
                    "@type": "OpeningHoursSpecification",
                    "dayOfWeek": hours.days,
                    "opens": hours.opens,
                    "closes": hours.closes,
                })
            })
            .collect();
        schema.insert("openingHoursSpecification".into(), Value::Array(specs));
    }

    if let Some(price_range) = info.and_then(|info| present(&info.price_range)) {
        schema.insert("priceRange".into(), json!(price_range));
    }

    let mut same_as = Vec::new();
    if let Some(handle) = seo.and_then(|seo| present(&seo.twitter_handle)) {
        same_as.push(format!("https://twitter.com/{handle}"));
    }
    if let Some(handle) = seo.and_then(|seo| present(&seo.instagram_handle)) {
        same_as.push(format!("https://instagram.com/{handle}"));
    }
    if let Some(url) = seo.and_then(|seo| present(&seo.facebook_url)) {
        same_as.push(url.to_string());
    }
    if !same_as.is_empty() {
        schema.insert("sameAs".into(), json!(same_as));
    }

    Value::Object(schema)
}

/// The `WebSite` entity, published by the local business.
pub fn website(settings: Option<&SiteSettings>) -> Value {
    let site_url = site_url(settings);
    let mut schema = Map::new();
    schema.insert("@context".into(), json!(SCHEMA_CONTEXT));
    schema.insert("@type".into(), json!("WebSite"));
    schema.insert("@id".into(), json!(format!("{site_url}/#website")));
    schema.insert("name".into(), json!(site_name(settings)));
    schema.insert("url".into(), json!(site_url));
    if let Some(description) = settings
        .and_then(|settings| settings.seo.as_ref())
        .and_then(|seo| present(&seo.meta_description))
    {
        schema.insert("description".into(), json!(description));
    }
    schema.insert("publisher".into(), json!({ "@id": business_id(&site_url) }));
    Value::Object(schema)
}

/// The site-wide graph embedded on every page.
pub fn site_graph(settings: Option<&SiteSettings>) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@graph": [local_business(settings), website(settings)],
    })
}

/// Keeps only the digits and decimal point of a display price: `"$100"`
/// becomes `"100"`.
pub fn price_value(price: &str) -> String {
    price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// A `Service` entity offered by the local business.
pub fn service(service: &Service, site_url: &str) -> Value {
    let mut schema = Map::new();
    schema.insert("@context".into(), json!(SCHEMA_CONTEXT));
    schema.insert("@type".into(), json!("Service"));
    schema.insert("name".into(), json!(service.name));
    schema.insert(
        "provider".into(),
        json!({ "@type": "LocalBusiness", "@id": business_id(site_url) }),
    );
    if let Some(description) = present(&service.description) {
        schema.insert("description".into(), json!(description));
    }
    if let Some(price) = present(&service.price) {
        schema.insert(
            "offers".into(),
            json!({
                "@type": "Offer",
                "price": price_value(price),
                "priceCurrency": CURRENCY,
            }),
        );
    }
    Value::Object(schema)
}

/// Serializes JSON-LD for embedding in a `<script>` element. `<` is escaped
/// so that content can never close the script early.
pub fn to_script_json(value: &Value) -> String {
    value.to_string().replace('<', "\\u003c")
}
