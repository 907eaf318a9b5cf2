//! # Page Resolution Tests
//!
//! Resolves each page view-model against an empty content store and against
//! partial CMS data, checking that every visible field is filled.

use kizmet::{
    documents::{FooterSettings, HomepageSettings, Service, SiteSettings, Testimonial},
    pages::{
        about, apply_year, book::BookingWidget, chrome, current_year, home, services, AboutView,
        BookView, Chrome, HomeView, NotFoundView, PoliciesView, ServicesView,
    },
};
use serde_json::Value;

/// Walks a serialized view and collects the paths of blank strings.
fn blank_fields(value: &Value, path: &str, out: &mut Vec<String>) {
    match value {
        Value::String(s) if s.trim().is_empty() => out.push(path.to_string()),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                blank_fields(item, &format!("{path}[{i}]"), out);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                blank_fields(item, &format!("{path}.{key}"), out);
            }
        }
        _ => {}
    }
}

fn assert_no_blanks<T: serde::Serialize>(view: &T, name: &str) {
    let value = serde_json::to_value(view).unwrap();
    let mut blanks = Vec::new();
    blank_fields(&value, name, &mut blanks);
    assert!(blanks.is_empty(), "Blank fields in {name}: {blanks:?}");
}

fn service(name: &str, price: &str) -> Service {
    Service {
        name: name.to_string(),
        price: Some(price.to_string()),
        duration: Some("60 min".to_string()),
        description: Some("desc".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_empty_store_renders_no_blank_fields() {
    let chrome = Chrome::resolve(None, None, 2030);
    assert_no_blanks(&chrome, "chrome");
    assert_no_blanks(&HomeView::resolve(None, Vec::new(), None, Vec::new()), "home");
    assert_no_blanks(&AboutView::resolve(None), "about");
    assert_no_blanks(&ServicesView::resolve(None, Vec::new()), "services");
    assert_no_blanks(
        &BookView::resolve(None, Vec::new(), None, chrome.contact.clone()),
        "book",
    );
    assert_no_blanks(
        &PoliciesView::resolve(None, chrome.contact.clone()),
        "policies",
    );
    assert_no_blanks(&NotFoundView::resolve(None), "not_found");
}

#[test]
fn test_empty_services_use_full_fallback_collection() {
    let view = ServicesView::resolve(None, Vec::new());
    assert_eq!(view.services, services::fallback_services());
    assert_eq!(view.services.len(), 3);
    assert_eq!(view.services[1].name, "60 Minute Session");
    assert_eq!(view.services[1].price.as_deref(), Some("$100"));

    let home = HomeView::resolve(None, Vec::new(), None, Vec::new());
    assert_eq!(home.services, home::preview_services());
}

#[test]
fn test_cms_services_replace_fallback_atomically() {
    let view = ServicesView::resolve(None, vec![service("Cupping", "$80")]);
    assert_eq!(view.services.len(), 1);
    assert_eq!(view.services[0].name, "Cupping");
}

#[test]
fn test_testimonials_hidden_when_empty_or_disabled() {
    let quote = Testimonial {
        author_name: "Sarah M.".into(),
        quote: "Lovely".into(),
        ..Default::default()
    };

    let empty = HomeView::resolve(None, Vec::new(), None, Vec::new());
    assert!(empty.testimonials.is_none());

    let disabled = HomeView::resolve(
        Some(HomepageSettings {
            testimonials_enabled: Some(false),
            ..Default::default()
        }),
        Vec::new(),
        None,
        vec![quote.clone()],
    );
    assert!(disabled.testimonials.is_none());

    let shown = HomeView::resolve(None, Vec::new(), None, vec![quote]);
    let section = shown.testimonials.expect("section should be shown");
    assert_eq!(section.title, "What Clients Say");
    assert_eq!(section.items[0].initials, "SM");
}

#[test]
fn test_copyright_year_is_substituted_for_any_template() {
    let year = current_year();
    let fallback = Chrome::resolve(None, None, year);
    assert_eq!(
        fallback.footer.copyright,
        format!("© {year} Kizmet Massage & Wellness. All rights reserved.")
    );

    let custom = Chrome::resolve(
        None,
        Some(FooterSettings {
            copyright_text: Some("Copyright {year} Destiny ({year})".into()),
            ..Default::default()
        }),
        2031,
    );
    assert_eq!(custom.footer.copyright, "Copyright 2031 Destiny (2031)");
    assert_eq!(apply_year("no token", 2031), "no token");
}

#[test]
fn test_contact_fallbacks_and_tel_link() {
    let fallback = Chrome::resolve(None, None, 2030);
    assert_eq!(fallback.contact.email, chrome::FALLBACK_EMAIL);
    assert_eq!(fallback.contact.phone, chrome::FALLBACK_PHONE);
    assert_eq!(fallback.contact.phone_href, "tel:+15551234567");

    let cms = Chrome::resolve(
        Some(SiteSettings {
            phone: Some("(360) 555-0100".into()),
            ..Default::default()
        }),
        None,
        2030,
    );
    assert_eq!(cms.contact.phone_href, "tel:3605550100");
    assert_eq!(cms.footer.locality, "Port Angeles, WA");
}

#[test]
fn test_booking_widget_selection() {
    let contact = Chrome::resolve(None, None, 2030).contact;

    let form = BookView::resolve(None, Vec::new(), None, contact.clone());
    match form.widget {
        BookingWidget::RequestForm {
            service_options,
            time_slots,
        } => {
            assert_eq!(
                service_options,
                vec![
                    "30 Minute Session - $60",
                    "60 Minute Session - $100",
                    "90 Minute Session - $145"
                ]
            );
            assert_eq!(time_slots.first(), Some(&"9:00 AM"));
            assert_eq!(time_slots.last(), Some(&"5:00 PM"));
        }
        other => panic!("Expected the request form, got {other:?}"),
    }

    let embed = BookView::resolve(
        None,
        Vec::new(),
        Some("https://cal.com/kizmet/massage"),
        contact,
    );
    assert_eq!(
        embed.widget,
        BookingWidget::Embed {
            cal_link: "kizmet/massage".into()
        }
    );
}

#[test]
fn test_about_fallback_content() {
    let view = AboutView::resolve(None);
    assert_eq!(view.headline, "Healing Hands, Open Heart");
    assert_eq!(view.credentials.len(), 5);
    assert_eq!(view.journey_steps.len(), 3);
    assert_eq!(about::fallback().bio_paragraphs.map(|p| p.len()), Some(3));
}
