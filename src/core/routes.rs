//! Hash-fragment route table
//!
//! Routes are evaluated in declaration order and the first match wins.
//! A table is validated when it is built: a route whose paths are all
//! taken by an earlier route can never be reached and is rejected.

use std::fmt;

/// Server path where the application shell is mounted
pub const UI_MOUNT_PATH: &str = "/demo";

/// Top-level pages the shell can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    Antd,
    NotFound,
}

impl Page {
    /// Label shown in the navigation bar
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Login => "Login",
            Page::Antd => "Antd Demo",
            Page::NotFound => "Not Found",
        }
    }

    /// Fragment link that navigates to this page
    pub fn href(&self) -> Option<&'static str> {
        match self {
            Page::Home => Some("#/"),
            Page::Login => Some("#/login"),
            Page::Antd => Some("#/antd"),
            Page::NotFound => None,
        }
    }
}

/// Errors raised while building a route table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("route table is empty")]
    Empty,

    #[error("route `{later}` is unreachable: `{earlier}` is declared before it and matches it")]
    Shadowed { earlier: String, later: String },
}

/// A single routing rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pattern: String,
    pub exact: bool,
    pub page: Page,
}

impl Route {
    /// Route matching only the literal pattern
    pub fn exact(pattern: &str, page: Page) -> Self {
        Self {
            pattern: normalize_path(pattern),
            exact: true,
            page,
        }
    }

    /// Route matching the pattern and every path below it
    pub fn prefix(pattern: &str, page: Page) -> Self {
        Self {
            pattern: normalize_path(pattern),
            exact: false,
            page,
        }
    }

    /// Check whether every path this route matches is already taken by `self`
    ///
    /// A prefix route covers everything at or below its pattern; an exact
    /// route only covers a later exact route with the same pattern.
    pub fn covers(&self, later: &Route) -> bool {
        self.matches(&later.pattern) && (!self.exact || later.exact)
    }

    /// Check whether a normalized path is matched by this route
    pub fn matches(&self, path: &str) -> bool {
        if self.exact {
            return path == self.pattern;
        }
        if self.pattern == "/" {
            return true;
        }
        path == self.pattern
            || path
                .strip_prefix(self.pattern.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exact {
            write!(f, "{} (exact)", self.pattern)
        } else {
            write!(f, "{}", self.pattern)
        }
    }
}

/// Ordered, validated sequence of routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table, rejecting any route shadowed by an earlier one
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        if routes.is_empty() {
            return Err(RouteTableError::Empty);
        }

        for (i, later) in routes.iter().enumerate() {
            if let Some(earlier) = routes[..i].iter().find(|r| r.covers(later)) {
                return Err(RouteTableError::Shadowed {
                    earlier: earlier.to_string(),
                    later: later.to_string(),
                });
            }
        }

        Ok(Self { routes })
    }

    /// Home matched exactly at `/`, declared first
    pub fn exact_home() -> Self {
        Self {
            routes: vec![
                Route::exact("/", Page::Home),
                Route::prefix("/login", Page::Login),
                Route::prefix("/antd", Page::Antd),
            ],
        }
    }

    /// Home as a catch-all, declared last
    pub fn catch_all_home() -> Self {
        Self {
            routes: vec![
                Route::prefix("/login", Page::Login),
                Route::prefix("/antd", Page::Antd),
                Route::prefix("/", Page::Home),
            ],
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve a path to the page to render; unmatched paths yield `NotFound`
    pub fn resolve(&self, path: &str) -> Page {
        let path = normalize_path(path);
        self.routes
            .iter()
            .find(|route| route.matches(&path))
            .map(|route| route.page)
            .unwrap_or(Page::NotFound)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::exact_home()
    }
}

/// Normalize a path: leading `/`, no trailing `/` except for the root,
/// query string dropped
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Extract the routed path from a location hash such as `#/login`
pub fn path_from_hash(hash: &str) -> String {
    normalize_path(hash.strip_prefix('#').unwrap_or(hash))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defined_paths_resolve_to_their_pages() {
        let table = RouteTable::default();

        assert_eq!(table.resolve("/"), Page::Home);
        assert_eq!(table.resolve("/login"), Page::Login);
        assert_eq!(table.resolve("/antd"), Page::Antd);
    }

    #[test]
    fn test_catch_all_home_keeps_specific_routes_reachable() {
        let table = RouteTable::catch_all_home();

        assert_eq!(table.resolve("/login"), Page::Login);
        assert_eq!(table.resolve("/antd"), Page::Antd);
        assert_eq!(table.resolve("/"), Page::Home);
        // Catch-all absorbs everything else
        assert_eq!(table.resolve("/anything/else"), Page::Home);
    }

    #[test]
    fn test_builtin_tables_pass_validation() {
        for table in [RouteTable::exact_home(), RouteTable::catch_all_home()] {
            let rebuilt = RouteTable::new(table.routes().to_vec());
            assert_eq!(rebuilt, Ok(table));
        }
    }

    #[test]
    fn test_catch_all_must_be_last() {
        let result = RouteTable::new(vec![
            Route::prefix("/", Page::Home),
            Route::prefix("/login", Page::Login),
            Route::prefix("/antd", Page::Antd),
        ]);

        assert_eq!(
            result,
            Err(RouteTableError::Shadowed {
                earlier: "/".to_string(),
                later: "/login".to_string(),
            })
        );
    }

    #[test]
    fn test_exact_root_does_not_shadow() {
        let result = RouteTable::new(vec![
            Route::exact("/", Page::Home),
            Route::prefix("/login", Page::Login),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_duplicate_route_is_rejected() {
        let result = RouteTable::new(vec![
            Route::exact("/login", Page::Login),
            Route::exact("/login", Page::Antd),
        ]);
        assert!(matches!(result, Err(RouteTableError::Shadowed { .. })));

        let result = RouteTable::new(vec![
            Route::prefix("/login", Page::Login),
            Route::exact("/login", Page::Antd),
        ]);
        assert!(matches!(result, Err(RouteTableError::Shadowed { .. })));
    }

    #[test]
    fn test_exact_route_before_prefix_keeps_subpaths_reachable() {
        let table = RouteTable::new(vec![
            Route::exact("/login", Page::Login),
            Route::prefix("/login", Page::Antd),
        ])
        .unwrap();

        assert_eq!(table.resolve("/login"), Page::Login);
        assert_eq!(table.resolve("/login/reset"), Page::Antd);
    }

    #[test]
    fn test_prefix_route_covers_nested_routes() {
        let parent = Route::prefix("/login", Page::Login);

        assert!(parent.covers(&Route::prefix("/login/reset", Page::Antd)));
        assert!(parent.covers(&Route::exact("/login", Page::Antd)));
        assert!(!parent.covers(&Route::prefix("/antd", Page::Antd)));
        assert!(!Route::exact("/", Page::Home).covers(&Route::prefix("/", Page::Home)));
    }

    #[test]
    fn test_empty_table_is_rejected() {
        assert_eq!(RouteTable::new(Vec::new()), Err(RouteTableError::Empty));
    }

    #[test]
    fn test_unknown_path_resolves_to_not_found() {
        let table = RouteTable::exact_home();

        assert_eq!(table.resolve("/missing"), Page::NotFound);
        // Exact root must not act as a prefix
        assert_eq!(table.resolve("/home"), Page::NotFound);
    }

    #[test]
    fn test_prefix_match_is_segment_aware() {
        let route = Route::prefix("/login", Page::Login);

        assert!(route.matches("/login"));
        assert!(route.matches("/login/reset"));
        assert!(!route.matches("/loginx"));
        assert!(!route.matches("/"));
    }

    #[test]
    fn test_exact_route_matches_literal_only() {
        let route = Route::exact("/antd", Page::Antd);

        assert!(route.matches("/antd"));
        assert!(!route.matches("/antd/child"));
    }

    #[test]
    fn test_trailing_slash_and_query_are_ignored() {
        let table = RouteTable::default();

        assert_eq!(table.resolve("/login/"), Page::Login);
        assert_eq!(table.resolve("/antd?tab=1"), Page::Antd);
        assert_eq!(table.resolve(""), Page::Home);
    }

    #[test]
    fn test_path_from_hash() {
        assert_eq!(path_from_hash("#/login"), "/login");
        assert_eq!(path_from_hash("#/antd/"), "/antd");
        assert_eq!(path_from_hash("#login"), "/login");
        assert_eq!(path_from_hash("#"), "/");
        assert_eq!(path_from_hash(""), "/");
        assert_eq!(path_from_hash("#/?from=nav"), "/");
    }

    #[test]
    fn test_page_links_round_trip_through_table() {
        let table = RouteTable::default();

        for page in [Page::Home, Page::Login, Page::Antd] {
            let href = page.href().unwrap();
            assert_eq!(table.resolve(&path_from_hash(href)), page);
        }
        assert!(Page::NotFound.href().is_none());
    }

    #[test]
    fn test_shadowed_error_message() {
        let err = RouteTableError::Shadowed {
            earlier: "/".to_string(),
            later: "/antd".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "route `/antd` is unreachable: `/` is declared before it and matches it"
        );
    }
}
