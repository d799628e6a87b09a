//! Test utilities for navigation tests
//!
//! Provides an application fixture over the in-memory DOM plus helpers to
//! click footer links and inspect what the bus delivered.

#![allow(dead_code)]

use page_navigator::dom::{ClickTarget, Element};
use page_navigator::memory::{MemoryDocument, MemoryElement, MemoryViewport};
use page_navigator::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Application root used by every fixture.
pub const ROOT: &str = "/modern-backbone/";

/// An application together with handles to its in-memory DOM.
pub struct Fixture {
    pub app: App,
    pub document: Rc<MemoryDocument>,
    pub viewport: Rc<MemoryViewport>,
    /// Every page published on the bus, oldest first.
    pub published: Rc<RefCell<Vec<PageName>>>,
}

impl Fixture {
    pub fn region(&self, name: &str) -> Rc<MemoryElement> {
        self.document
            .memory_region(name)
            .unwrap_or_else(|| panic!("region '{name}' missing"))
    }

    pub fn main_html(&self) -> String {
        self.region("main").inner_html()
    }

    pub fn current_url(&self) -> String {
        self.app.router().current_url().to_string()
    }

    pub fn take_published(&self) -> Vec<PageName> {
        self.published.borrow_mut().drain(..).collect()
    }

    /// Click the footer link at `index` (display order).
    pub fn click_nav_item(&self, index: usize) -> bool {
        let elements = self.app.footer().item_elements();
        elements[index].click().default_prevented()
    }

    /// Click the header's home link.
    pub fn click_header_link(&self) -> bool {
        self.region("header")
            .click_on(ClickTarget::new("a"))
            .default_prevented()
    }

    /// Click an in-article link pointing at `target`.
    pub fn click_article_link(&self, target: &str) -> bool {
        self.region("main")
            .click_on(
                ClickTarget::new("a")
                    .class("article-nav")
                    .data("target", target),
            )
            .default_prevented()
    }

    /// Index of every footer element carrying the `active` class.
    pub fn active_elements(&self) -> Vec<usize> {
        self.app
            .footer()
            .item_elements()
            .iter()
            .enumerate()
            .filter(|(_, element)| element.has_class("active"))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Build an application starting at the root page. Not yet started.
pub fn build_app() -> Fixture {
    build_app_at(None)
}

/// Build an application starting at `initial_url`. Not yet started.
pub fn build_app_at(initial_url: Option<&str>) -> Fixture {
    let document = MemoryDocument::standard();
    let viewport = MemoryViewport::new();
    let mut config = AppConfig::new().root(ROOT);
    if let Some(url) = initial_url {
        config = config.initial_url(url);
    }
    let app = App::new(config, document.clone(), viewport.clone()).expect("app should build");

    let published = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&published);
    app.bus()
        .subscribe(BusEvent::Nav, app.bus().new_listener(), move |page| {
            sink.borrow_mut().push(*page);
        });

    Fixture {
        app,
        document,
        viewport,
        published,
    }
}

/// Build and start an application at the root page.
pub fn started_app() -> Fixture {
    let fixture = build_app();
    fixture.app.start().expect("start should succeed");
    fixture.take_published();
    fixture
}

/// Full URL for a fragment under [`ROOT`].
pub fn url(fragment: &str) -> String {
    if fragment.is_empty() {
        ROOT.trim_end_matches('/').to_string()
    } else {
        format!("{ROOT}{fragment}")
    }
}

/// Assert exactly one footer item is active and that it targets `page`.
pub fn assert_single_active(fixture: &Fixture, page: PageName) {
    let active = fixture.app.footer().items().active_items();
    assert_eq!(active.len(), 1, "expected exactly one active nav item");
    assert_eq!(active[0].target(), page, "wrong nav item active");

    let index = PageName::ALL
        .iter()
        .position(|p| *p == page)
        .expect("page in ALL");
    assert_eq!(fixture.active_elements(), vec![index]);
}
