//! The site's page routes and their path strings.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the five site pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Capabilities,
    Industries,
    Contact,
}

/// A path that does not name any registered page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no page is registered for path '{path}'")]
pub struct RouteParseError {
    pub path: String,
}

impl Route {
    /// Every page, in site order.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Capabilities,
        Route::Industries,
        Route::Contact,
    ];

    /// Pages listed in the header nav. Contact is reached through the
    /// quote button instead.
    pub const NAV: [Route; 4] = [
        Route::Home,
        Route::About,
        Route::Capabilities,
        Route::Industries,
    ];

    pub fn as_path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Capabilities => "/capabilities",
            Route::Industries => "/industries",
            Route::Contact => "/contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About Us",
            Route::Capabilities => "Capabilities",
            Route::Industries => "Industries",
            Route::Contact => "Contact",
        }
    }

    pub fn page_title(self) -> &'static str {
        match self {
            Route::Home => "Canada Sheet Metal",
            Route::About => "About Us",
            Route::Capabilities => "Capacity & Capabilities",
            Route::Industries => "Industries We Serve",
            Route::Contact => "Contact Us",
        }
    }

    /// Resolves a path string to a page. Accepts a missing leading slash
    /// and a trailing slash, so "/about", "about", and "/about/" all name
    /// the About page. Anything else is an error the caller decides how
    /// to handle.
    pub fn from_path(raw: &str) -> Result<Route, RouteParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RouteParseError {
                path: raw.to_owned(),
            });
        }
        let mut normalized = String::with_capacity(trimmed.len() + 1);
        if !trimmed.starts_with('/') {
            normalized.push('/');
        }
        normalized.push_str(trimmed);
        let normalized = if normalized.len() > 1 {
            normalized.trim_end_matches('/')
        } else {
            normalized.as_str()
        };
        Route::ALL
            .into_iter()
            .find(|route| route.as_path() == normalized)
            .ok_or_else(|| RouteParseError {
                path: raw.to_owned(),
            })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for Route {
    type Err = RouteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_round_trips_through_its_path() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.as_path()), Ok(route));
        }
    }

    #[test]
    fn paths_normalize_before_matching() {
        assert_eq!(Route::from_path("about"), Ok(Route::About));
        assert_eq!(Route::from_path("/about/"), Ok(Route::About));
        assert_eq!(Route::from_path("  /industries  "), Ok(Route::Industries));
    }

    #[test]
    fn unknown_paths_are_rejected_with_the_original_text() {
        let err = Route::from_path("/pricing").unwrap_err();
        assert_eq!(err.path, "/pricing");
        assert!(Route::from_path("").is_err());
        assert!(Route::from_path("   ").is_err());
    }

    #[test]
    fn nav_omits_contact() {
        assert!(!Route::NAV.contains(&Route::Contact));
        assert_eq!(Route::NAV.len(), Route::ALL.len() - 1);
    }

    #[test]
    fn display_matches_path() {
        assert_eq!(Route::Capabilities.to_string(), "/capabilities");
        assert_eq!("contact".parse::<Route>(), Ok(Route::Contact));
    }
}
