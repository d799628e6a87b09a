//! Route definitions and the ordered route table.
//!
//! A [`Route`] pairs a [`RoutePattern`] with what to do when it matches:
//! show a page, or redirect to the root page. [`RouteTable`] tests routes in
//! registration order and the first match wins, so the catch-all goes last.
//!
//! ```
//! use page_navigator::{PageName, RouteAction, RouteTable};
//!
//! let table = RouteTable::standard();
//! let found = table.resolve("models.html").unwrap();
//! assert_eq!(found.route.action(), RouteAction::Show(PageName::Models));
//!
//! let fallback = table.resolve("retired/page.html").unwrap();
//! assert_eq!(fallback.route.action(), RouteAction::RedirectHome);
//! ```

use crate::error::Result;
use crate::matching::RoutePattern;
use crate::page::{check_coverage, PageName};
use crate::params::RouteParams;
use crate::{debug_log, info_log};
use std::sync::Arc;

/// What a matched route does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAction {
    /// Publish the page on the bus and render it in the main view.
    Show(PageName),
    /// Navigate to the root fragment instead of rendering anything.
    RedirectHome,
}

/// A single `(pattern, action)` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: RoutePattern,
    action: RouteAction,
}

impl Route {
    /// A route that shows `page`.
    pub fn page(pattern: &str, page: PageName) -> Self {
        Self {
            pattern: RoutePattern::parse(pattern),
            action: RouteAction::Show(page),
        }
    }

    /// A route that redirects to the root page.
    pub fn redirect_home(pattern: &str) -> Self {
        Self {
            pattern: RoutePattern::parse(pattern),
            action: RouteAction::RedirectHome,
        }
    }

    /// The route's pattern.
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// The route's action.
    pub fn action(&self) -> RouteAction {
        self.action
    }

    /// Handler name used in logs (`home`, `views`, `home_redirect`, ...).
    pub fn name(&self) -> &'static str {
        match self.action {
            RouteAction::Show(page) => page.as_str(),
            RouteAction::RedirectHome => "home_redirect",
        }
    }

    /// Match a normalized fragment against this route.
    pub fn matches(&self, fragment: &str) -> Option<RouteParams> {
        self.pattern.matches(fragment)
    }
}

/// A successful lookup in a [`RouteTable`].
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// Registration index of the matched route.
    pub index: usize,
    /// The matched route.
    pub route: Arc<Route>,
    /// Captured parameters.
    pub params: RouteParams,
}

/// Routes in registration order.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Arc<Route>>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The application's routes: one per page, then the catch-all redirect.
    pub fn standard() -> Self {
        Self::new()
            .route(Route::page("", PageName::Home))
            .route(Route::page("setup.html", PageName::Setup))
            .route(Route::page("views.html", PageName::Views))
            .route(Route::page("models.html", PageName::Models))
            .route(Route::page("events.html", PageName::Events))
            .route(Route::redirect_home("*path"))
    }

    /// Builder form of [`add`](Self::add).
    pub fn route(mut self, route: Route) -> Self {
        self.add(route);
        self
    }

    /// Register a route after all existing ones.
    pub fn add(&mut self, route: Route) {
        info_log!(
            "Registered route '{}' -> {}",
            route.pattern(),
            route.name()
        );
        self.routes.push(Arc::new(route));
    }

    /// All routes, in registration order.
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    /// Route at a registration index.
    pub fn get(&self, index: usize) -> Option<&Arc<Route>> {
        self.routes.get(index)
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// `true` if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// `true` if some route matches every fragment.
    pub fn has_catch_all(&self) -> bool {
        self.routes.iter().any(|route| route.pattern().is_catch_all())
    }

    /// First route, in registration order, that matches `fragment`.
    pub fn resolve(&self, fragment: &str) -> Option<RouteMatch> {
        let found = self
            .routes
            .iter()
            .enumerate()
            .find_map(|(index, route)| {
                route.matches(fragment).map(|params| RouteMatch {
                    index,
                    route: Arc::clone(route),
                    params,
                })
            });
        if let Some(found) = &found {
            debug_log!(
                "Fragment '{}' matched route #{} '{}'",
                fragment,
                found.index,
                found.route.pattern()
            );
        }
        found
    }

    /// Pages this table can show.
    pub fn pages(&self) -> impl Iterator<Item = PageName> + '_ {
        self.routes.iter().filter_map(|route| match route.action() {
            RouteAction::Show(page) => Some(page),
            RouteAction::RedirectHome => None,
        })
    }

    /// Reject the table unless every page has a route.
    pub fn validate(&self) -> Result<()> {
        check_coverage("route table", self.pages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavigatorError;

    #[test]
    fn test_standard_table_resolves_every_page() {
        let table = RouteTable::standard();
        let cases = [
            ("", PageName::Home),
            ("setup.html", PageName::Setup),
            ("views.html", PageName::Views),
            ("models.html", PageName::Models),
            ("events.html", PageName::Events),
        ];
        for (fragment, page) in cases {
            let found = table.resolve(fragment).unwrap();
            assert_eq!(found.route.action(), RouteAction::Show(page), "{fragment}");
        }
        assert!(table.validate().is_ok());
        assert!(table.has_catch_all());
    }

    #[test]
    fn test_unknown_fragments_hit_the_catch_all() {
        let table = RouteTable::standard();
        for fragment in ["home.html", "index.html", "setup", "a/b/c"] {
            let found = table.resolve(fragment).unwrap();
            assert_eq!(found.route.action(), RouteAction::RedirectHome);
            assert_eq!(found.index, 5);
            assert_eq!(found.params.get("path"), Some(&fragment.to_string()));
        }
    }

    #[test]
    fn test_registration_order_decides() {
        // A catch-all registered first shadows everything after it.
        let table = RouteTable::new()
            .route(Route::redirect_home("*path"))
            .route(Route::page("views.html", PageName::Views));
        let found = table.resolve("views.html").unwrap();
        assert_eq!(found.route.action(), RouteAction::RedirectHome);
    }

    #[test]
    fn test_validate_reports_missing_page() {
        let table = RouteTable::new()
            .route(Route::page("", PageName::Home))
            .route(Route::page("setup.html", PageName::Setup));
        assert_eq!(
            table.validate(),
            Err(NavigatorError::IncompleteTable {
                table: "route table",
                missing: PageName::Views,
            })
        );
        assert!(!table.has_catch_all());
        assert!(table.resolve("views.html").is_none());
    }

    #[test]
    fn test_route_names() {
        assert_eq!(Route::page("", PageName::Home).name(), "home");
        assert_eq!(Route::redirect_home("*path").name(), "home_redirect");
    }
}
