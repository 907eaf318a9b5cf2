//! # Kizmet Site
//!
//! Content model, fallback resolution, page rendering and cache revalidation
//! for the Kizmet Massage marketing site. The HTTP surface lives in the
//! `kizmet-server` crate; the content-store client lives in `kizmet-sanity`.

pub mod cache;
pub mod coalesce;
pub mod documents;
pub mod errors;
pub mod pages;
pub mod query;
pub mod render;
pub mod renderer;
pub mod revalidate;
pub mod seo;
pub mod site;
pub mod source;
pub mod structured_data;

pub use cache::{CachedPage, MokaRenderCache, RenderCache};
pub use coalesce::{resolve, Coalesce};
pub use documents::DocumentType;
pub use errors::{CacheError, ContentError};
pub use query::Query;
pub use renderer::{PageStatus, RenderedPage, SiteRenderer};
pub use revalidate::{paths_for, revalidate};
pub use site::SitePath;
pub use source::{ContentClients, ContentSource, Perspective, RequestContext};
