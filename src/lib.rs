//! # page-navigator
//!
//! A headless client-side page router for a small multi-page site.
//!
//! The application has five pages ([`PageName`]) and three views: a static
//! header, a main content area, and a footer with one nav link per page.
//! Navigating works like this:
//!
//! 1. A link click (or [`Navigator::push`]) changes the URL under the
//!    configured root and runs the first matching route.
//! 2. The route publishes the page as a `nav` event on the [`EventBus`].
//! 3. Every footer [`NavItem`] hears it and updates its active flag, and the
//!    bound view redraws.
//! 4. The main view renders the page's template.
//!
//! URLs that match no page are redirected to the root page.
//!
//! The DOM is abstract ([`dom::Element`], [`dom::Document`],
//! [`dom::Viewport`]); the [`memory`] module provides an in-memory
//! implementation used by the tests and the demo.
//!
//! ## Quick start
//!
//! ```
//! use page_navigator::memory::{MemoryDocument, MemoryViewport};
//! use page_navigator::{App, AppConfig, PageName};
//!
//! let document = MemoryDocument::standard();
//! let viewport = MemoryViewport::new();
//! let app = App::new(
//!     AppConfig::new().initial_url("/modern-backbone/setup.html"),
//!     document,
//!     viewport,
//! )
//! .unwrap();
//!
//! app.start().unwrap();
//! assert_eq!(app.current_page(), Some(PageName::Setup));
//!
//! let result = app.navigator().push("no-such-page.html").unwrap();
//! assert_eq!(result.page(), Some(PageName::Home));
//! assert_eq!(app.router().current_url(), "/modern-backbone");
//! ```
//!
//! ## Features
//!
//! - `log` (default): log through the `log` facade.
//! - `tracing`: log through `tracing` instead.
//! - `cache` (default): LRU cache of resolved fragments.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod app;
#[cfg(feature = "cache")]
pub mod cache;
pub mod dom;
pub mod error;
pub mod event_bus;
pub mod history;
mod logging;
pub mod matching;
pub mod memory;
pub mod nav;
pub mod page;
pub mod params;
pub mod route;
pub mod router;
pub mod templates;
pub mod views;

pub use app::{check_consistency, App, AppConfig};
pub use error::{NavigationResult, NavigatorError, Result};
pub use event_bus::{BusEvent, EventBus, ListenerId, SubscriptionId};
pub use history::{History, HistoryChange, NavigationDirection};
pub use nav::{ActiveTrackable, NavEntry, NavItem, NavItemList};
pub use page::{PageName, PageTable};
pub use params::{QueryParams, RouteParams};
pub use route::{Route, RouteAction, RouteMatch, RouteTable};
pub use router::{NavigateOptions, Navigator, Router, RouterConfig, RouterPhase};
pub use templates::Templates;
pub use views::{FooterView, HeaderView, MainView, NavItemView, Renderable, ViewContext};
