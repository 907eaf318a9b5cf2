use super::{some, text};
use crate::{
    coalesce::{resolve, Coalesce},
    documents::{Seo, Service, ServicesPageSettings},
};
use serde::Serialize;

pub const META_TITLE: &str = "Services & Pricing";
pub const META_DESCRIPTION: &str =
    "Explore our massage therapy services: 30, 60, and 90-minute sessions tailored to your wellness needs.";

pub fn fallback() -> ServicesPageSettings {
    ServicesPageSettings {
        eyebrow: some("What I Offer"),
        title: some("Services & Pricing"),
        description: some(
            "Every massage is customized to your individual needs. Let me know your goals and I'll create the perfect treatment for you.",
        ),
        section_title: some("Massage Sessions"),
        book_button_text: some("Book"),
        cta_heading: some("Ready to Feel Your Best?"),
        cta_description: some(
            "Not sure which session length is right for you? I'm happy to help you choose.",
        ),
        cta_button_text: some("Book Your Session"),
        cta_button_link: some("/book"),
        seo: None,
    }
}

fn session(name: &str, duration: &str, price: &str, description: &str) -> Service {
    Service {
        name: name.to_string(),
        duration: some(duration),
        price: some(price),
        description: some(description),
        ..Default::default()
    }
}

/// The session-length menu used by the services and booking pages when the
/// store has no services.
pub fn fallback_services() -> Vec<Service> {
    vec![
        session(
            "30 Minute Session",
            "30 min",
            "$60",
            "A focused session perfect for targeting a specific area of concern. Great for a quick tune-up or when you're short on time.",
        ),
        session(
            "60 Minute Session",
            "60 min",
            "$100",
            "The most popular choice. Enough time for a full-body massage or to thoroughly address multiple areas of tension and discomfort.",
        ),
        session(
            "90 Minute Session",
            "90 min",
            "$145",
            "The ultimate relaxation experience. Allows time for comprehensive full-body work with extra attention to problem areas.",
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicesView {
    pub eyebrow: String,
    pub title: String,
    pub description: String,
    pub section_title: String,
    pub book_button_text: String,
    pub services: Vec<Service>,
    pub cta_heading: String,
    pub cta_description: String,
    pub cta_button_text: String,
    pub cta_button_link: String,
    pub seo: Option<Seo>,
}

impl ServicesView {
    pub fn resolve(settings: Option<ServicesPageSettings>, services: Vec<Service>) -> Self {
        let page = resolve(settings, fallback());
        Self {
            eyebrow: text(page.eyebrow),
            title: text(page.title),
            description: text(page.description),
            section_title: text(page.section_title),
            book_button_text: text(page.book_button_text),
            services: services.coalesce(fallback_services()),
            cta_heading: text(page.cta_heading),
            cta_description: text(page.cta_description),
            cta_button_text: text(page.cta_button_text),
            cta_button_link: text(page.cta_button_link),
            seo: page.seo,
        }
    }
}
