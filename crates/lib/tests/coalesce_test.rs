//! # Coalescing Tests
//!
//! Verifies the field-by-field fallback rules shared by every CMS document.

use kizmet::{
    coalesce::{resolve, Coalesce},
    documents::{Address, PoliciesPage, PolicyGroup, SiteSettings},
};

fn policy(title: &str) -> PolicyGroup {
    PolicyGroup {
        title: title.to_string(),
        items: vec!["item".to_string()],
    }
}

#[test]
fn test_blank_strings_fall_back() {
    let cms = Some("   ".to_string());
    assert_eq!(cms.coalesce(Some("Kizmet".into())), Some("Kizmet".into()));

    let empty = Some(String::new());
    assert_eq!(empty.coalesce(None), None);
}

#[test]
fn test_partial_nested_object_keeps_present_fields() {
    // --- 1. Arrange ---
    let cms = SiteSettings {
        address: Some(Address {
            street: Some("22 Lincoln St".into()),
            city: None,
            state: Some("".into()),
            zip: None,
        }),
        ..Default::default()
    };
    let fallback = SiteSettings {
        brand_name: Some("Kizmet".into()),
        address: Some(Address {
            street: Some("105 1/2 E 1st St".into()),
            city: Some("Port Angeles".into()),
            state: Some("WA".into()),
            zip: None,
        }),
        ..Default::default()
    };

    // --- 2. Act ---
    let resolved = resolve(Some(cms), fallback);

    // --- 3. Assert ---
    let address = resolved.address.unwrap();
    assert_eq!(address.street.as_deref(), Some("22 Lincoln St"));
    assert_eq!(address.city.as_deref(), Some("Port Angeles"));
    assert_eq!(address.state.as_deref(), Some("WA"));
    assert_eq!(address.zip, None);
    assert_eq!(resolved.brand_name.as_deref(), Some("Kizmet"));
}

#[test]
fn test_non_empty_list_replaces_fallback_entirely() {
    let cms = PoliciesPage {
        policies: Some(vec![policy("Only One")]),
        ..Default::default()
    };
    let fallback = PoliciesPage {
        policies: Some(vec![policy("A"), policy("B"), policy("C")]),
        ..Default::default()
    };

    let resolved = resolve(Some(cms), fallback);
    let titles: Vec<_> = resolved
        .policies
        .unwrap()
        .into_iter()
        .map(|group| group.title)
        .collect();
    assert_eq!(titles, vec!["Only One"]);
}

#[test]
fn test_empty_list_uses_fallback() {
    let cms = PoliciesPage {
        policies: Some(Vec::new()),
        ..Default::default()
    };
    let fallback = PoliciesPage {
        policies: Some(vec![policy("A"), policy("B")]),
        ..Default::default()
    };

    let resolved = resolve(Some(cms), fallback);
    assert_eq!(resolved.policies.unwrap().len(), 2);
}

#[test]
fn test_missing_document_equals_all_absent_document() {
    let fallback = SiteSettings {
        brand_name: Some("Kizmet".into()),
        tagline: Some("Massage and Wellness".into()),
        ..Default::default()
    };
    assert_eq!(
        resolve(None, fallback.clone()),
        resolve(Some(SiteSettings::default()), fallback)
    );
}

#[test]
fn test_booleans_are_kept_when_present() {
    assert_eq!(Some(false).coalesce(Some(true)), Some(false));
    assert_eq!(None::<bool>.coalesce(Some(true)), Some(true));
}
