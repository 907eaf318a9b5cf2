use super::{services::fallback_services, some, text, ContactView};
use crate::{
    coalesce::{resolve, Coalesce},
    documents::{BookPage, Seo, Service},
};
use serde::Serialize;
use url::Url;

pub const META_TITLE: &str = "Book an Appointment";
pub const META_DESCRIPTION: &str = "Schedule your massage therapy session at Kizmet Massage.";

/// Hourly request slots offered by the booking form.
pub const TIME_SLOTS: [&str; 9] = [
    "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
    "5:00 PM",
];

pub fn fallback() -> BookPage {
    BookPage {
        eyebrow: some("Schedule Your Visit"),
        headline: some("Book an Appointment"),
        description: some(
            "Fill out the form below and I'll get back to you within 24 hours to confirm your booking.",
        ),
        seo: None,
    }
}

/// `"<name> - <price>"`, as listed in the booking form.
pub fn service_option(service: &Service) -> String {
    format!(
        "{} - {}",
        service.name,
        service.price.as_deref().unwrap_or_default()
    )
}

/// Derives the scheduling widget link (`user/event`) from a booking URL.
///
/// Full URLs contribute their path; bare links are used as-is. Returns `None`
/// when nothing usable remains.
pub fn cal_link(booking_url: &str) -> Option<String> {
    let booking_url = booking_url.trim();
    let path = match Url::parse(booking_url) {
        Ok(url) => url.path().to_string(),
        Err(_) => booking_url.to_string(),
    };
    let link = path.trim_matches('/');
    (!link.is_empty()).then(|| link.to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BookingWidget {
    /// Inline scheduling widget.
    Embed { cal_link: String },
    /// Request form with service options and preferred-time slots.
    RequestForm {
        service_options: Vec<String>,
        time_slots: Vec<&'static str>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookView {
    pub eyebrow: String,
    pub headline: String,
    pub description: String,
    pub widget: BookingWidget,
    pub contact: ContactView,
    pub seo: Option<Seo>,
}

impl BookView {
    pub fn resolve(
        book: Option<BookPage>,
        services: Vec<Service>,
        booking_url: Option<&str>,
        contact: ContactView,
    ) -> Self {
        let page = resolve(book, fallback());

        let widget = match booking_url.and_then(cal_link) {
            Some(cal_link) => BookingWidget::Embed { cal_link },
            None => BookingWidget::RequestForm {
                service_options: services
                    .coalesce(fallback_services())
                    .iter()
                    .map(service_option)
                    .collect(),
                time_slots: TIME_SLOTS.to_vec(),
            },
        };

        Self {
            eyebrow: text(page.eyebrow),
            headline: text(page.headline),
            description: text(page.description),
            widget,
            contact,
            seo: page.seo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::cal_link;

    #[test]
    fn test_cal_link_from_url() {
        assert_eq!(
            cal_link("https://cal.com/kizmet/60min").as_deref(),
            Some("kizmet/60min")
        );
        assert_eq!(cal_link("kizmet/intro").as_deref(), Some("kizmet/intro"));
        assert_eq!(cal_link("https://cal.com/"), None);
        assert_eq!(cal_link("  "), None);
    }
}
