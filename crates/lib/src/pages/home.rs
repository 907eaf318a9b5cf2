use super::{some, text};
use crate::{
    coalesce::{resolve, Coalesce},
    documents::{AboutPage, HomepageSettings, Seo, Service, Testimonial},
};
use serde::Serialize;

/// Served when the homepage has no hero image of its own.
pub const HERO_IMAGE_FALLBACK: &str = "/images/hero-spa.jpg";

pub fn fallback() -> HomepageSettings {
    HomepageSettings {
        hero_headline: some("Kizmet"),
        hero_subheadline: some(
            "Destiny Pugh offers therapeutic massage in Port Angeles. Reconnect with your body and find your balance.",
        ),
        hero_cta: some("Book Your Session"),
        hero_cta_link: some("/book"),
        hero_secondary_cta: some("View Services"),
        hero_secondary_cta_link: some("/services"),
        hero_image: None,
        services_heading: some("Signature Services"),
        services_description: some("Each session is tailored to your individual needs"),
        about_preview_eyebrow: some("Meet Your Therapist"),
        about_preview_quote: some(
            "In my family, healing was never something you learned from a textbook. It was passed down through touch, through presence, through care.",
        ),
        about_preview_attribution_name: some("Destiny"),
        about_preview_attribution_title: some("Third-Generation Healer"),
        about_preview_cta_text: some("Read My Story"),
        about_preview_cta_link: some("/about"),
        testimonials_enabled: Some(true),
        testimonials_eyebrow: some("Kind Words"),
        testimonials_title: some("What Clients Say"),
        testimonials_subtitle: some(
            "Real experiences from people who've found relief and relaxation",
        ),
        cta_headline: some("Ready to Begin Your Wellness Journey?"),
        cta_description: some(
            "Book your first session today and experience the transformative power of therapeutic massage.",
        ),
        cta_button_text: some("Book Your Appointment"),
        cta_button_link: some("/book"),
        seo: None,
    }
}

fn preview_service(name: &str, description: &str) -> Service {
    Service {
        name: name.to_string(),
        duration: some("30 / 60 / 90 min"),
        price: some("$60 / $100 / $145"),
        description: some(description),
        ..Default::default()
    }
}

/// The three signature services shown on the homepage when no featured
/// services are published.
pub fn preview_services() -> Vec<Service> {
    vec![
        preview_service(
            "Relaxation Massage",
            "Classic relaxation massage using long, flowing strokes to ease tension and promote circulation.",
        ),
        preview_service(
            "Deep Tissue",
            "Targeted pressure to release chronic muscle tension and knots in deeper layers of tissue.",
        ),
        preview_service(
            "Therapeutic Massage",
            "Customized treatment focused on your specific areas of concern for relief and recovery.",
        ),
    ]
}

/// Initials for a testimonial avatar: `"Sarah M."` becomes `"SM"`.
pub fn initials(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '.')
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub cta_link: String,
    pub secondary_cta_text: String,
    pub secondary_cta_link: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutPreviewView {
    pub eyebrow: String,
    pub quote: String,
    pub attribution_name: String,
    pub attribution_title: String,
    pub cta_text: String,
    pub cta_link: String,
    /// Borrowed from the about page's hero image; a placeholder block otherwise.
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestimonialView {
    pub author_name: String,
    pub author_location: Option<String>,
    pub quote: String,
    pub initials: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestimonialsView {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub items: Vec<TestimonialView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CtaView {
    pub headline: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub hero: HeroView,
    pub services_heading: String,
    pub services_description: String,
    pub services: Vec<Service>,
    pub about_preview: AboutPreviewView,
    /// `None` hides the section entirely.
    pub testimonials: Option<TestimonialsView>,
    pub cta: CtaView,
    pub seo: Option<Seo>,
}

impl HomeView {
    pub fn resolve(
        homepage: Option<HomepageSettings>,
        featured_services: Vec<Service>,
        about: Option<AboutPage>,
        testimonials: Vec<Testimonial>,
    ) -> Self {
        let page = resolve(homepage, fallback());

        let hero_image = page
            .hero_image
            .as_ref()
            .and_then(|image| image.url())
            .unwrap_or(HERO_IMAGE_FALLBACK)
            .to_string();

        let about_image = about
            .as_ref()
            .and_then(|about| about.hero_image.as_ref())
            .and_then(|image| image.url())
            .map(str::to_string);

        let testimonials = if page.testimonials_enabled == Some(false) || testimonials.is_empty() {
            None
        } else {
            Some(TestimonialsView {
                eyebrow: text(page.testimonials_eyebrow),
                title: text(page.testimonials_title),
                subtitle: text(page.testimonials_subtitle),
                items: testimonials
                    .into_iter()
                    .map(|testimonial| TestimonialView {
                        initials: initials(&testimonial.author_name),
                        author_name: testimonial.author_name,
                        author_location: testimonial
                            .author_location
                            .filter(|location| !location.is_absent()),
                        quote: testimonial.quote,
                    })
                    .collect(),
            })
        };

        Self {
            hero: HeroView {
                headline: text(page.hero_headline),
                subheadline: text(page.hero_subheadline),
                cta_text: text(page.hero_cta),
                cta_link: text(page.hero_cta_link),
                secondary_cta_text: text(page.hero_secondary_cta),
                secondary_cta_link: text(page.hero_secondary_cta_link),
                image_url: hero_image,
            },
            services_heading: text(page.services_heading),
            services_description: text(page.services_description),
            services: featured_services.coalesce(preview_services()),
            about_preview: AboutPreviewView {
                eyebrow: text(page.about_preview_eyebrow),
                quote: text(page.about_preview_quote),
                attribution_name: text(page.about_preview_attribution_name),
                attribution_title: text(page.about_preview_attribution_title),
                cta_text: text(page.about_preview_cta_text),
                cta_link: text(page.about_preview_cta_link),
                image_url: about_image,
            },
            testimonials,
            cta: CtaView {
                headline: text(page.cta_headline),
                description: text(page.cta_description),
                button_text: text(page.cta_button_text),
                button_link: text(page.cta_button_link),
            },
            seo: page.seo,
        }
    }

    /// The text used as the page description when no SEO override exists.
    pub fn description(&self) -> &str {
        &self.hero.subheadline
    }
}
