//! The router: URL history, route resolution and the page-change pipeline.
//!
//! Showing a page always happens in the same order: the page is published
//! as a `nav` event on the bus (so the footer models update), then the main
//! view renders it. A matched catch-all instead navigates to the root
//! fragment, which pushes a second history entry.
//!
//! [`Router`] is owned by the application inside an `Rc<RefCell<_>>`.
//! Views hold a [`Navigator`], a weak handle that borrows the router only
//! for the length of one call.

#[cfg(feature = "cache")]
use crate::cache::{CacheStats, RouteCache};
use crate::error::{NavigationResult, NavigatorError, Result};
use crate::event_bus::{BusEvent, EventBus};
use crate::history::History;
use crate::matching::{fragment_for_url, normalize_fragment, normalize_root, split_query, url_for_fragment};
use crate::page::PageName;
use crate::params::QueryParams;
use crate::route::{Route, RouteAction, RouteMatch, RouteTable};
use crate::views::MainView;
use crate::{debug_log, error_log, info_log, trace_log, warn_log};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
#[cfg(feature = "cache")]
use std::sync::Arc;

/// Where the router is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterPhase {
    /// Not started, or started but no page has been shown yet.
    Idle,
    /// Showing a page.
    Active(PageName),
}

impl RouterPhase {
    pub fn page(self) -> Option<PageName> {
        match self {
            RouterPhase::Idle => None,
            RouterPhase::Active(page) => Some(page),
        }
    }
}

/// How [`Router::navigate`] treats a fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Run the matching route after updating the URL.
    pub trigger: bool,
    /// Replace the current history entry instead of pushing one.
    pub replace: bool,
}

impl NavigateOptions {
    /// Update the URL and run the route.
    pub fn trigger() -> Self {
        Self {
            trigger: true,
            replace: false,
        }
    }

    /// Same options, replacing the current history entry.
    pub fn replacing(mut self) -> Self {
        self.replace = true;
        self
    }
}

/// Settings the router is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// Path prefix every URL lives under.
    pub root: String,
    /// URL the history starts at. Defaults to the root page.
    pub initial_url: Option<String>,
    /// Entries kept by the route cache.
    pub cache_capacity: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            initial_url: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Root the application is served under.
pub const DEFAULT_ROOT: &str = "/modern-backbone/";

/// Default size of the route cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

pub struct Router {
    root: String,
    routes: RouteTable,
    history: History,
    bus: Rc<EventBus>,
    main_view: MainView,
    phase: RouterPhase,
    fragment: Option<String>,
    #[cfg(feature = "cache")]
    cache: RouteCache,
}

impl Router {
    pub fn new(config: &RouterConfig, routes: RouteTable, bus: Rc<EventBus>, main_view: MainView) -> Self {
        let root = normalize_root(&config.root);
        let initial_url = config
            .initial_url
            .clone()
            .unwrap_or_else(|| url_for_fragment(&root, ""));

        Self {
            history: History::new(initial_url),
            root,
            routes,
            bus,
            main_view,
            phase: RouterPhase::Idle,
            fragment: None,
            #[cfg(feature = "cache")]
            cache: RouteCache::with_capacity(config.cache_capacity),
        }
    }

    /// Register a route after the existing ones.
    pub fn add_route(&mut self, route: Route) {
        self.routes.add(route);
        #[cfg(feature = "cache")]
        self.cache.clear();
    }

    /// Begin routing: take the fragment from the current URL and run its
    /// route. The initial page is rendered without scrolling.
    pub fn start(&mut self) -> Result<NavigationResult> {
        if self.fragment.is_some() {
            warn_log!("Router start requested twice");
            return Err(NavigatorError::AlreadyStarted);
        }

        let fragment = fragment_for_url(self.history.current_url(), &self.root);
        info_log!(
            "Router started at '{}' (root '{}')",
            self.history.current_url(),
            self.root
        );
        self.fragment = Some(fragment.clone());
        self.load_url(&fragment)
    }

    pub fn is_started(&self) -> bool {
        self.fragment.is_some()
    }

    /// Change the current fragment.
    ///
    /// A fragment equal to the current one is a no-op returning
    /// [`NavigationResult::Unchanged`].
    pub fn navigate(&mut self, fragment: &str, options: NavigateOptions) -> Result<NavigationResult> {
        let Some(current) = self.fragment.as_deref() else {
            warn_log!("Ignoring navigation to '{}': router not started", fragment);
            return Err(NavigatorError::NotStarted);
        };

        let fragment = normalize_fragment(fragment).into_owned();
        if current == fragment {
            debug_log!("Already at '{}'", fragment);
            return Ok(NavigationResult::Unchanged { fragment });
        }

        let url = url_for_fragment(&self.root, &fragment);
        let change = if options.replace {
            self.history.replace(url)
        } else {
            self.history.push(url)
        };
        trace_log!("History {:?}: '{}' -> '{}'", change.direction, change.from, change.to);
        self.fragment = Some(fragment.clone());

        if !options.trigger {
            return Ok(NavigationResult::Silent { fragment });
        }
        self.load_url(&fragment)
    }

    /// Step back in history and run the route found there. Returns `None` at
    /// the oldest entry. Never scrolls.
    pub fn back(&mut self) -> Result<Option<NavigationResult>> {
        if !self.is_started() {
            return Err(NavigatorError::NotStarted);
        }
        match self.history.back() {
            Some(change) => self.pop_to(&change.to).map(Some),
            None => {
                warn_log!("Nothing to go back to");
                Ok(None)
            }
        }
    }

    /// Step forward in history. Returns `None` at the newest entry.
    pub fn forward(&mut self) -> Result<Option<NavigationResult>> {
        if !self.is_started() {
            return Err(NavigatorError::NotStarted);
        }
        match self.history.forward() {
            Some(change) => self.pop_to(&change.to).map(Some),
            None => {
                warn_log!("Nothing to go forward to");
                Ok(None)
            }
        }
    }

    fn pop_to(&mut self, url: &str) -> Result<NavigationResult> {
        let fragment = fragment_for_url(url, &self.root);
        self.fragment = Some(fragment.clone());
        self.load_url(&fragment)
    }

    fn load_url(&mut self, fragment: &str) -> Result<NavigationResult> {
        let (path, query) = split_query(fragment);
        let query = query.map(QueryParams::from_query_string).unwrap_or_default();
        let found = self.resolve(path).ok_or_else(|| {
            warn_log!("No route matches '{}'", fragment);
            NavigatorError::UnmatchedRoute {
                fragment: fragment.to_string(),
            }
        })?;

        match found.route.action() {
            RouteAction::RedirectHome => {
                // The redirect target is always the root fragment, so a root
                // that redirects is the only possible loop.
                if path.is_empty() {
                    error_log!("The root fragment redirects to itself");
                    return Err(NavigatorError::RedirectLoop {
                        fragment: fragment.to_string(),
                    });
                }
                debug_log!(
                    "Redirecting '{}' to the root page (captured {:?})",
                    fragment,
                    found.params.get("path")
                );
                let result = self.navigate("", NavigateOptions::trigger())?;
                Ok(result.with_redirect_from(fragment))
            }
            RouteAction::Show(page) => {
                if !query.is_empty() {
                    debug_log!("Query for '{}': {:?}", path, query);
                }
                self.bus.publish(BusEvent::Nav, &page);
                self.main_view.render(page);
                self.phase = RouterPhase::Active(page);
                info_log!("Showing '{}' for '{}'", page, fragment);
                Ok(NavigationResult::Routed {
                    fragment: fragment.to_string(),
                    page,
                    redirected_from: None,
                })
            }
        }
    }

    fn resolve(&mut self, path: &str) -> Option<RouteMatch> {
        #[cfg(feature = "cache")]
        {
            if let Some(hit) = self.cache.get(path) {
                if let Some(route) = self.routes.get(hit.index) {
                    return Some(RouteMatch {
                        index: hit.index,
                        route: Arc::clone(route),
                        params: hit.params,
                    });
                }
            }
        }

        let found = self.routes.resolve(path);

        #[cfg(feature = "cache")]
        {
            if let Some(found) = &found {
                self.cache
                    .insert(path.to_string(), found.index, found.params.clone());
            }
        }

        found
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn bus(&self) -> &Rc<EventBus> {
        &self.bus
    }

    pub fn main_view(&self) -> &MainView {
        &self.main_view
    }

    pub fn phase(&self) -> RouterPhase {
        self.phase
    }

    pub fn current_page(&self) -> Option<PageName> {
        self.phase.page()
    }

    /// Current fragment, `None` before [`start`](Self::start).
    pub fn current_fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn current_url(&self) -> &str {
        self.history.current_url()
    }

    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> &CacheStats {
        self.cache.stats()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("root", &self.root)
            .field("routes", &self.routes.len())
            .field("phase", &self.phase)
            .field("fragment", &self.fragment)
            .field("url", &self.history.current_url())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Navigator
// ============================================================================

/// Weak handle through which views drive the router.
///
/// Each call borrows the router for its own duration. A call made while
/// another navigation is running fails with
/// [`NavigatorError::NavigationInProgress`].
#[derive(Clone, Default)]
pub struct Navigator {
    router: Weak<RefCell<Router>>,
}

impl Navigator {
    pub fn new(router: Weak<RefCell<Router>>) -> Self {
        Self { router }
    }

    /// A handle bound to no router. Every call fails with
    /// [`NavigatorError::RouterDropped`].
    pub fn detached() -> Self {
        Self::default()
    }

    fn with_router<T>(&self, f: impl FnOnce(&mut Router) -> Result<T>) -> Result<T> {
        let router = self.router.upgrade().ok_or(NavigatorError::RouterDropped)?;
        let mut router = router
            .try_borrow_mut()
            .map_err(|_| NavigatorError::NavigationInProgress)?;
        f(&mut router)
    }

    pub fn navigate(&self, fragment: &str, options: NavigateOptions) -> Result<NavigationResult> {
        self.with_router(|router| router.navigate(fragment, options))
    }

    /// Navigate and run the route, pushing a history entry.
    pub fn push(&self, fragment: &str) -> Result<NavigationResult> {
        self.navigate(fragment, NavigateOptions::trigger())
    }

    /// Navigate and run the route, replacing the current history entry.
    pub fn replace(&self, fragment: &str) -> Result<NavigationResult> {
        self.navigate(fragment, NavigateOptions::trigger().replacing())
    }

    pub fn start(&self) -> Result<NavigationResult> {
        self.with_router(Router::start)
    }

    pub fn back(&self) -> Result<Option<NavigationResult>> {
        self.with_router(Router::back)
    }

    pub fn forward(&self) -> Result<Option<NavigationResult>> {
        self.with_router(Router::forward)
    }

    pub fn current_page(&self) -> Option<PageName> {
        let router = self.router.upgrade()?;
        let page = router.try_borrow().ok()?.current_page();
        page
    }

    pub fn current_url(&self) -> Option<String> {
        let router = self.router.upgrade()?;
        let url = router.try_borrow().ok()?.current_url().to_string();
        Some(url)
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("attached", &(self.router.strong_count() > 0))
            .finish()
    }
}
