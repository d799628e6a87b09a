//! Application wiring.
//!
//! [`App`] builds the whole object graph once: the event bus, the router
//! (which owns the main view), the header and the footer. Before anything is
//! built, [`check_consistency`] verifies that the route table, the template
//! table and the footer entries each cover every page.
//!
//! ```
//! use page_navigator::memory::{MemoryDocument, MemoryViewport};
//! use page_navigator::{App, AppConfig, PageName};
//!
//! let document = MemoryDocument::standard();
//! let app = App::new(AppConfig::new(), document, MemoryViewport::new()).unwrap();
//! app.start().unwrap();
//! assert_eq!(app.current_page(), Some(PageName::Home));
//!
//! app.navigator().push("events.html").unwrap();
//! assert_eq!(app.footer().items().active_target(), Some(PageName::Events));
//! ```

use crate::dom::{Document, ElementRef, Viewport};
use crate::error::{NavigationResult, NavigatorError, Result};
use crate::event_bus::EventBus;
use crate::info_log;
use crate::nav::NavItemList;
use crate::page::{check_coverage, PageName};
use crate::route::RouteTable;
use crate::router::{Navigator, Router, RouterConfig, DEFAULT_CACHE_CAPACITY, DEFAULT_ROOT};
use crate::templates::Templates;
use crate::views::{FooterView, HeaderView, MainView, Renderable, ViewContext};
use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    root: String,
    initial_url: Option<String>,
    route_cache_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            initial_url: None,
            route_cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path prefix the application is served under.
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// URL the session starts at, e.g. `/modern-backbone/views.html`.
    pub fn initial_url(mut self, url: impl Into<String>) -> Self {
        self.initial_url = Some(url.into());
        self
    }

    /// Number of resolved fragments kept by the route cache.
    pub fn route_cache_capacity(mut self, capacity: usize) -> Self {
        self.route_cache_capacity = capacity;
        self
    }

    pub fn root_path(&self) -> &str {
        &self.root
    }

    fn router_config(&self) -> RouterConfig {
        RouterConfig {
            root: self.root.clone(),
            initial_url: self.initial_url.clone(),
            cache_capacity: self.route_cache_capacity,
        }
    }
}

/// Check that the route table, the template table and the nav entries each
/// reference every page.
pub fn check_consistency(
    routes: &RouteTable,
    templates: &Templates,
    nav_targets: impl IntoIterator<Item = PageName>,
) -> Result<()> {
    routes.validate()?;
    check_coverage(templates.pages.name(), templates.pages.pages())?;
    check_coverage("nav entry list", nav_targets)
}

fn region(document: &dyn Document, name: &str) -> Result<ElementRef> {
    document
        .region(name)
        .ok_or_else(|| NavigatorError::missing_element(name))
}

/// The assembled application.
pub struct App {
    router: Rc<RefCell<Router>>,
    navigator: Navigator,
    bus: Rc<EventBus>,
    header: HeaderView,
    footer: FooterView,
}

impl App {
    /// Build the application with the standard routes, templates and
    /// footer entries.
    pub fn new(config: AppConfig, document: Rc<dyn Document>, viewport: Rc<dyn Viewport>) -> Result<Self> {
        Self::with_parts(
            config,
            document,
            viewport,
            RouteTable::standard(),
            Templates::standard(),
            NavItemList::STANDARD_ENTRIES,
        )
    }

    /// Build the application from custom parts.
    pub fn with_parts<S: Into<String>>(
        config: AppConfig,
        document: Rc<dyn Document>,
        viewport: Rc<dyn Viewport>,
        routes: RouteTable,
        templates: Templates,
        nav_entries: impl IntoIterator<Item = (S, PageName)>,
    ) -> Result<Self> {
        let nav_entries: Vec<(String, PageName)> = nav_entries
            .into_iter()
            .map(|(title, page)| (title.into(), page))
            .collect();
        check_consistency(&routes, &templates, nav_entries.iter().map(|(_, page)| *page))?;

        let header_element = region(document.as_ref(), "header")?;
        let main_element = region(document.as_ref(), "main")?;
        let footer_element = region(document.as_ref(), "footer")?;

        let bus = Rc::new(EventBus::new());
        let router_config = config.router_config();
        let router = Rc::new_cyclic(|weak: &Weak<RefCell<Router>>| {
            let cx = ViewContext::new(
                Rc::clone(&document),
                Rc::clone(&viewport),
                Navigator::new(weak.clone()),
            );
            let main_view = MainView::new(&cx, main_element, templates.pages.clone());
            RefCell::new(Router::new(&router_config, routes, Rc::clone(&bus), main_view))
        });

        let navigator = Navigator::new(Rc::downgrade(&router));
        let cx = ViewContext::new(document, viewport, navigator.clone());
        let header = HeaderView::new(&cx, header_element, Rc::clone(&templates.header));
        let items = NavItemList::from_entries(&bus, nav_entries)?;
        let footer = FooterView::new(
            &cx,
            footer_element,
            items,
            Rc::clone(&templates.footer),
            Rc::clone(&templates.nav_item),
        );

        header.render()?;
        footer.render()?;
        info_log!(
            "Application assembled under '{}' with {} route(s)",
            router.borrow().root(),
            router.borrow().routes().len()
        );

        Ok(Self {
            router,
            navigator,
            bus,
            header,
            footer,
        })
    }

    /// Begin routing from the configured initial URL.
    pub fn start(&self) -> Result<NavigationResult> {
        self.navigator.start()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn bus(&self) -> &Rc<EventBus> {
        &self.bus
    }

    pub fn header(&self) -> &HeaderView {
        &self.header
    }

    pub fn footer(&self) -> &FooterView {
        &self.footer
    }

    /// Borrow the router. Do not hold the borrow across a navigation.
    pub fn router(&self) -> Ref<'_, Router> {
        self.router.borrow()
    }

    pub fn current_page(&self) -> Option<PageName> {
        self.router.borrow().current_page()
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.footer.items().detach(&self.bus);
    }
}
