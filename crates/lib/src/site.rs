//! The fixed set of cacheable pages.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SitePath {
    Home,
    About,
    Services,
    Book,
    Policies,
}

impl SitePath {
    pub const ALL: [SitePath; 5] = [
        SitePath::Home,
        SitePath::About,
        SitePath::Services,
        SitePath::Policies,
        SitePath::Book,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SitePath::Home => "/",
            SitePath::About => "/about",
            SitePath::Services => "/services",
            SitePath::Book => "/book",
            SitePath::Policies => "/policies",
        }
    }

    /// Matches a request path. A single trailing slash is tolerated.
    pub fn parse(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        Self::ALL.into_iter().find(|page| page.as_str() == path)
    }
}

impl fmt::Display for SitePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
