//! # Structured Data Tests
//!
//! Verifies the JSON-LD entities emitted for the business, website and
//! services.

use kizmet::{
    documents::{Service, SiteSettings},
    structured_data::{local_business, price_value, service, site_graph, website},
};
use kizmet_test_utils::fixtures;
use serde_json::json;

fn settings() -> SiteSettings {
    serde_json::from_value(fixtures::site_settings()).unwrap()
}

#[test]
fn test_minimal_business_without_settings() {
    let schema = local_business(None);
    assert_eq!(
        schema,
        json!({
            "@context": "https://schema.org",
            "@type": "HealthAndBeautyBusiness",
            "@id": "https://kizmetmassage.com/#localbusiness",
            "name": "Kizmet Massage",
            "url": "https://kizmetmassage.com",
        })
    );
}

#[test]
fn test_full_business_from_settings() {
    let schema = local_business(Some(&settings()));

    assert_eq!(schema["@type"], "DaySpa");
    assert_eq!(schema["@id"], "https://kizmet.test/#localbusiness");
    assert_eq!(schema["telephone"], "(360) 555-0100");
    assert_eq!(schema["address"]["postalCode"], "98362");
    assert_eq!(schema["address"]["addressCountry"], "US");
    assert_eq!(schema["geo"]["latitude"], 48.118);
    assert_eq!(schema["openingHoursSpecification"][0]["dayOfWeek"][1], "Tuesday");
    assert_eq!(schema["priceRange"], "$$");
    assert_eq!(schema["sameAs"], json!(["https://twitter.com/kizmet"]));
}

#[test]
fn test_website_is_published_by_the_business() {
    let schema = website(Some(&settings()));
    assert_eq!(schema["@id"], "https://kizmet.test/#website");
    assert_eq!(schema["publisher"]["@id"], "https://kizmet.test/#localbusiness");
    assert_eq!(schema["description"], "Massage in Port Angeles.");

    let graph = site_graph(None);
    assert_eq!(graph["@graph"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_service_offer_price_is_numeric() {
    assert_eq!(price_value("$100"), "100");
    assert_eq!(price_value("$60 / $100"), "60100");
    assert_eq!(price_value("$99.50"), "99.50");

    let entry = service(
        &Service {
            name: "60 Minute Session".into(),
            price: Some("$100".into()),
            ..Default::default()
        },
        "https://kizmet.test",
    );
    assert_eq!(entry["offers"]["price"], "100");
    assert_eq!(entry["offers"]["priceCurrency"], "USD");
    assert_eq!(entry["provider"]["@id"], "https://kizmet.test/#localbusiness");
    assert!(entry.get("description").is_none());
}
