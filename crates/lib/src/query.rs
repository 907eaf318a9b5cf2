//! # Content Query Expressions
//!
//! A small structured builder for read queries against the content store. A
//! [`Query`] is rendered to GROQ with [`Query::to_groq`]; the parameters travel
//! separately so values are never spliced into the query text.

use crate::documents::DocumentType;
use serde_json::Value;
use std::collections::BTreeMap;

/// How many documents a query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Every matching document, as an array.
    All,
    /// The first matching document, or `null`.
    First,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// A read-only query against the content store.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub document_type: DocumentType,
    pub filter: Option<String>,
    pub selector: Selector,
    pub order: Option<(String, Direction)>,
    pub projection: Option<String>,
    pub params: BTreeMap<String, Value>,
}

const IMAGE_PROJECTION: &str = "{ asset-> { _id, url }, hotspot, crop }";

fn seo_projection() -> String {
    format!("seo {{ metaTitle, metaDescription, ogImage {IMAGE_PROJECTION}, noIndex }}")
}

impl Query {
    /// Selects every document of the given type.
    pub fn all(document_type: DocumentType) -> Self {
        Self {
            document_type,
            filter: None,
            selector: Selector::All,
            order: None,
            projection: None,
            params: BTreeMap::new(),
        }
    }

    /// Selects the first document of the given type.
    pub fn first(document_type: DocumentType) -> Self {
        Self {
            selector: Selector::First,
            ..Self::all(document_type)
        }
    }

    /// Adds an extra GROQ filter clause, joined with `&&`.
    pub fn filter(mut self, clause: impl Into<String>) -> Self {
        let clause = clause.into();
        self.filter = Some(match self.filter.take() {
            Some(existing) => format!("{existing} && {clause}"),
            None => clause,
        });
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order = Some((field.into(), direction));
        self
    }

    /// Sets the projection body (without the surrounding braces).
    pub fn project(mut self, projection: impl Into<String>) -> Self {
        self.projection = Some(projection.into());
        self
    }

    /// Binds a `$name` parameter referenced from a filter clause.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Renders the query as a GROQ expression.
    pub fn to_groq(&self) -> String {
        let mut groq = format!("*[_type == \"{}\"", self.document_type.as_str());
        if let Some(filter) = &self.filter {
            groq.push_str(" && ");
            groq.push_str(filter);
        }
        groq.push(']');
        if let Some((field, direction)) = &self.order {
            let direction = match direction {
                Direction::Asc => "asc",
                Direction::Desc => "desc",
            };
            groq.push_str(&format!(" | order({field} {direction})"));
        }
        if self.selector == Selector::First {
            groq.push_str("[0]");
        }
        if let Some(projection) = &self.projection {
            groq.push_str(&format!(" {{ {projection} }}"));
        }
        groq
    }

    // --- Named queries used by the pages ---

    pub fn site_settings() -> Self {
        Self::first(DocumentType::SiteSettings).project(format!(
            "brandName, tagline, phone, email, address, bookingUrl, \
             seo {{ siteUrl, metaTitle, metaDescription, socialImage {IMAGE_PROJECTION}, \
             twitterHandle, instagramHandle, facebookUrl }}, \
             businessInfo {{ businessType, priceRange, businessHours[] {{ days, opens, closes }}, \
             geoCoordinates {{ latitude, longitude }}, googleMapsUrl, googlePlaceId }}"
        ))
    }

    pub fn footer_settings() -> Self {
        Self::first(DocumentType::FooterSettings)
    }

    pub fn homepage_settings() -> Self {
        Self::first(DocumentType::HomepageSettings).project(format!(
            "..., heroImage {IMAGE_PROJECTION}, {}",
            seo_projection()
        ))
    }

    pub fn about_page() -> Self {
        Self::first(DocumentType::AboutPage).project(format!(
            "..., heroImage {IMAGE_PROJECTION}, {}",
            seo_projection()
        ))
    }

    pub fn services_page_settings() -> Self {
        Self::first(DocumentType::ServicesPageSettings)
            .project(format!("..., {}", seo_projection()))
    }

    pub fn policies_page() -> Self {
        Self::first(DocumentType::PoliciesPage).project(format!("..., {}", seo_projection()))
    }

    pub fn book_page() -> Self {
        Self::first(DocumentType::BookPage).project(format!("..., {}", seo_projection()))
    }

    pub fn not_found_page() -> Self {
        Self::first(DocumentType::NotFoundPage)
    }

    pub fn all_services() -> Self {
        Self::all(DocumentType::Service)
            .order_by("order", Direction::Asc)
            .project(format!(
                "_id, name, slug, duration, price, description, extendedDescription, \
                 techniques, bestFor, featured, order, bookingUrl, {}",
                seo_projection()
            ))
    }

    pub fn featured_services() -> Self {
        Self::all(DocumentType::Service)
            .filter("featured == true")
            .order_by("order", Direction::Asc)
            .project(
                "_id, name, slug, duration, price, description, extendedDescription, \
                 techniques, bestFor, bookingUrl",
            )
    }

    pub fn featured_testimonials() -> Self {
        Self::all(DocumentType::Testimonial)
            .filter("featured == true")
            .order_by("order", Direction::Asc)
            .project("_id, authorName, authorLocation, quote, featured, order")
    }
}
