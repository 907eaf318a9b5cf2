//! # Page View-Models
//!
//! Each page module owns the hardcoded fallback document for its singleton and
//! resolves CMS data into a view-model whose fields are all concrete. The
//! renderer only ever sees resolved views, so an empty content store still
//! produces a complete site.

pub mod about;
pub mod book;
pub mod chrome;
pub mod home;
pub mod not_found;
pub mod policies;
pub mod services;

pub use about::AboutView;
pub use book::BookView;
pub use chrome::{Chrome, ContactView, FooterView, NavLink};
pub use home::HomeView;
pub use not_found::NotFoundView;
pub use policies::PoliciesView;
pub use services::ServicesView;

use chrono::Datelike;

/// The token replaced with the current year in copyright templates.
pub const YEAR_TOKEN: &str = "{year}";

/// Unwraps a field that the fallback document guarantees is present.
pub(crate) fn text(value: Option<String>) -> String {
    value.unwrap_or_default()
}

pub(crate) fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

pub(crate) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// The current calendar year on the server clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Substitutes every `{year}` token. Runs after fallback resolution, so CMS
/// and default templates are treated identically.
pub fn apply_year(template: &str, year: i32) -> String {
    template.replace(YEAR_TOKEN, &year.to_string())
}

/// Digits-only form of a phone number, for `tel:` links.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}
