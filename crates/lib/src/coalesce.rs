//! # Field-by-field fallback resolution
//!
//! Every CMS document is merged against a hardcoded fallback of the same shape.
//! The rules:
//!
//! - A scalar string counts as absent when it is blank.
//! - A list is replaced atomically, and only when the CMS list is non-empty.
//!   Items are never merged element-wise.
//! - A nested object merges field by field, so a partially filled address or
//!   SEO block still contributes the fields it has.
//!
//! Document structs opt in with [`coalesce_fields!`]. Opaque values such as
//! image references opt in with [`coalesce_atomic!`].

/// Merges a possibly-partial value against a fallback of the same shape.
pub trait Coalesce: Sized {
    /// Whether this value should be treated as missing.
    fn is_absent(&self) -> bool {
        false
    }

    /// Returns `self` where present, `fallback` otherwise.
    fn coalesce(self, fallback: Self) -> Self {
        if self.is_absent() {
            fallback
        } else {
            self
        }
    }
}

impl Coalesce for String {
    fn is_absent(&self) -> bool {
        self.trim().is_empty()
    }
}

impl<T> Coalesce for Vec<T> {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl Coalesce for bool {}
impl Coalesce for i64 {}
impl Coalesce for f64 {}

impl<T: Coalesce> Coalesce for Option<T> {
    fn is_absent(&self) -> bool {
        self.as_ref().map_or(true, Coalesce::is_absent)
    }

    fn coalesce(self, fallback: Self) -> Self {
        match (self, fallback) {
            (Some(value), Some(fallback)) => Some(value.coalesce(fallback)),
            (Some(value), None) if value.is_absent() => None,
            (Some(value), None) => Some(value),
            (None, fallback) => fallback,
        }
    }
}

/// Resolves an optional CMS document against its fallback.
///
/// A missing document behaves exactly like a document with every field absent.
pub fn resolve<T: Coalesce + Default>(cms: Option<T>, fallback: T) -> T {
    cms.unwrap_or_default().coalesce(fallback)
}

/// Implements [`Coalesce`] for a struct by merging each listed field.
///
/// Every field must be listed; a forgotten field is a compile error.
#[macro_export]
macro_rules! coalesce_fields {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::coalesce::Coalesce for $ty {
            fn coalesce(self, fallback: Self) -> Self {
                Self {
                    $($field: $crate::coalesce::Coalesce::coalesce(self.$field, fallback.$field),)*
                }
            }
        }
    };
}

/// Implements [`Coalesce`] for values that are taken whole or not at all.
#[macro_export]
macro_rules! coalesce_atomic {
    ($($ty:ty),* $(,)?) => {
        $(impl $crate::coalesce::Coalesce for $ty {})*
    };
}
