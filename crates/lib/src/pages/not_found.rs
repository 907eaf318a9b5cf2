use super::{some, text};
use crate::{coalesce::resolve, documents::NotFoundPage};
use serde::Serialize;

pub fn fallback() -> NotFoundPage {
    NotFoundPage {
        heading: some("404"),
        message: some("Page not found"),
        button_text: some("Return Home"),
        button_link: some("/"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotFoundView {
    pub heading: String,
    pub message: String,
    pub button_text: String,
    pub button_link: String,
}

impl NotFoundView {
    pub fn resolve(page: Option<NotFoundPage>) -> Self {
        let page = resolve(page, fallback());
        Self {
            heading: text(page.heading),
            message: text(page.message),
            button_text: text(page.button_text),
            button_link: text(page.button_link),
        }
    }
}
