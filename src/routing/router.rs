//! Route lookup.
//!
//! # Responsibilities
//! - Hold the application's fixed route table
//! - Resolve a location to exactly one view
//!
//! # Design Decisions
//! - The table is a `static`: built at compile time, never mutated
//! - O(n) ordered scan, first match wins
//! - `/about` matches whole segments, ignoring ASCII case
//! - Resolution is total; the wildcard entry is always last

use crate::routing::matcher::{Matcher, PathPattern};
use crate::shell::View;

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Route identifier for logging.
    pub name: &'static str,
    pub pattern: PathPattern,
    pub view: View,
}

/// Ordered path-to-view bindings.
#[derive(Debug)]
pub struct RouteTable {
    routes: [Route; 3],
}

/// The application's route table.
pub static ROUTES: RouteTable = RouteTable {
    routes: [
        Route {
            name: "home",
            pattern: PathPattern::Exact("/"),
            view: View::Home,
        },
        Route {
            name: "about",
            pattern: PathPattern::Prefix("/about"),
            view: View::About,
        },
        Route {
            name: "fallback",
            pattern: PathPattern::Any,
            view: View::NotFound,
        },
    ],
};

impl RouteTable {
    /// Ordered entries, fallback last.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the first entry matching `path`.
    pub fn resolve(&self, path: &str) -> &Route {
        let [ordered @ .., fallback] = &self.routes;
        ordered
            .iter()
            .find(|route| route.pattern.matches(path))
            .unwrap_or(fallback)
    }
}

/// Resolve a location against the application's route table.
pub fn resolve(path: &str) -> View {
    ROUTES.resolve(path).view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_home() {
        assert_eq!(resolve("/"), View::Home);
    }

    #[test]
    fn test_about_prefix() {
        assert_eq!(resolve("/about"), View::About);
        assert_eq!(resolve("/about/team"), View::About);
        assert_eq!(resolve("/about/"), View::About);
    }

    #[test]
    fn test_about_matches_whole_segments_only() {
        assert_eq!(resolve("/aboutus"), View::NotFound);
        assert_eq!(resolve("/about-team"), View::NotFound);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(resolve("/ABOUT"), View::About);
        assert_eq!(resolve("/About/Team"), View::About);
    }

    #[test]
    fn test_everything_else_is_not_found() {
        for path in ["/404", "/home", "/abou", "/team/about", "//", "", "/aboutus"] {
            assert_eq!(resolve(path), View::NotFound, "path {:?}", path);
        }
    }

    #[test]
    fn test_fallback_is_last_and_unique() {
        let routes = ROUTES.routes();
        assert_eq!(routes.len(), 3);
        assert_eq!(routes.last().unwrap().pattern, PathPattern::Any);
        assert_eq!(
            routes.iter().filter(|r| r.pattern == PathPattern::Any).count(),
            1
        );
    }

    #[test]
    fn test_table_order() {
        let names: Vec<_> = ROUTES.routes().iter().map(|r| r.name).collect();
        assert_eq!(names, ["home", "about", "fallback"]);
    }

    #[test]
    fn test_resolve_returns_entry() {
        let route = ROUTES.resolve("/about/team");
        assert_eq!(route.name, "about");
        assert_eq!(route.pattern, PathPattern::Prefix("/about"));
    }

    #[test]
    fn test_resolution_is_stable() {
        for path in ["/", "/about", "/nope"] {
            assert_eq!(resolve(path), resolve(path));
        }
    }
}
