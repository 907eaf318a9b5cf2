use super::{some, strings, text};
use crate::{
    coalesce::resolve,
    documents::{AboutPage, JourneyStep, Seo},
};
use serde::Serialize;

pub const META_DESCRIPTION: &str = "Meet Destiny, a third-generation healer bringing family wisdom and modern therapeutic techniques to Kizmet Massage & Wellness.";

fn step(title: &str, description: &str) -> JourneyStep {
    JourneyStep {
        title: title.to_string(),
        description: description.to_string(),
    }
}

pub fn fallback() -> AboutPage {
    AboutPage {
        eyebrow: some("About Destiny"),
        headline: some("Healing Hands, Open Heart"),
        intro: some(
            "I grew up watching my grandmother's hands work magic on aching muscles and tired spirits. Now I'm carrying that tradition forward, blending generations of natural healing wisdom with modern therapeutic techniques.",
        ),
        hero_image: None,
        quote_text: some(
            "In my family, healing was never something you learned from a textbook. It was passed down through touch, through presence, through care.",
        ),
        quote_attribution: some("Destiny, Founder of Kizmet"),
        bio_title: some("My Roots"),
        credentials: Some(strings(&[
            "Licensed Massage Therapist",
            "Third-Generation Healer",
            "Deep Tissue Certified",
            "Swedish Massage Trained",
            "Prenatal Massage Certified",
        ])),
        bio_paragraphs: Some(strings(&[
            "Healing has always been the family business. My grandmother was the person everyone in our community called when their backs went out or their shoulders seized up. My mother inherited those same intuitive hands. I spent my childhood learning by watching, absorbing techniques that no school could teach.",
            "When I decided to make this my profession, formal training gave me the language and anatomy to understand what my hands already knew. The Pacific Northwest School of Massage helped me bridge generations of folk wisdom with evidence-based practice.",
            "Kizmet is the culmination of that journey, a place where heritage meets technique, where the old ways inform the new. Every session carries the weight of my grandmother's knowledge and the precision of modern therapeutic methods.",
        ])),
        journey_title: some("What a Session Looks Like"),
        journey_intro: some(
            "No two bodies are the same, but every session follows a rhythm that honors both tradition and your individual needs.",
        ),
        journey_steps: Some(vec![
            step(
                "We Connect",
                "I want to hear what brought you in, not just the pain, but the life around it. Then my hands find what words sometimes can't.",
            ),
            step(
                "We Work",
                "Drawing from deep tissue, Swedish, and techniques passed down through my family, whatever serves you best.",
            ),
            step(
                "You Leave Transformed",
                "Not just relaxed. More aware of your body, with tools to continue the work at home.",
            ),
        ]),
        cta_headline: some("Ready to Begin Your Journey?"),
        cta_button_text: some("Book Your Session"),
        cta_button_link: some("/book"),
        seo: None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutView {
    pub eyebrow: String,
    pub headline: String,
    pub intro: String,
    pub image_url: Option<String>,
    pub quote_text: String,
    pub quote_attribution: String,
    pub bio_title: String,
    pub credentials: Vec<String>,
    pub bio_paragraphs: Vec<String>,
    pub journey_title: String,
    pub journey_intro: String,
    pub journey_steps: Vec<JourneyStep>,
    pub cta_headline: String,
    pub cta_button_text: String,
    pub cta_button_link: String,
    pub seo: Option<Seo>,
}

impl AboutView {
    pub fn resolve(about: Option<AboutPage>) -> Self {
        let page = resolve(about, fallback());
        Self {
            eyebrow: text(page.eyebrow),
            headline: text(page.headline),
            intro: text(page.intro),
            image_url: page
                .hero_image
                .as_ref()
                .and_then(|image| image.url())
                .map(str::to_string),
            quote_text: text(page.quote_text),
            quote_attribution: text(page.quote_attribution),
            bio_title: text(page.bio_title),
            credentials: page.credentials.unwrap_or_default(),
            bio_paragraphs: page.bio_paragraphs.unwrap_or_default(),
            journey_title: text(page.journey_title),
            journey_intro: text(page.journey_intro),
            journey_steps: page.journey_steps.unwrap_or_default(),
            cta_headline: text(page.cta_headline),
            cta_button_text: text(page.cta_button_text),
            cta_button_link: text(page.cta_button_link),
            seo: page.seo,
        }
    }
}
