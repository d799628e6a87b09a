//! Footer synchronization: clicks on nav items, header and article links,
//! and the active-flag fan-out from the event bus to the bound views.

mod common;

use common::*;
use page_navigator::dom::Element;
use page_navigator::memory::{MemoryDocument, MemoryElement, MemoryViewport};
use page_navigator::templates::{self, page_template};
use page_navigator::*;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_single_active_after_each_publish() {
    let fixture = started_app();
    for page in PageName::ALL {
        fixture.app.bus().publish(BusEvent::Nav, &page);
        assert_single_active(&fixture, page);
    }
}

#[test]
fn test_initial_load_activates_home() {
    let fixture = started_app();
    assert_single_active(&fixture, PageName::Home);
}

#[test]
fn test_nav_item_click_round_trip() {
    let fixture = started_app();
    let targets = [
        (1, PageName::Setup, "setup.html"),
        (2, PageName::Views, "views.html"),
        (3, PageName::Models, "models.html"),
        (4, PageName::Events, "events.html"),
    ];

    for (expected_scrolls, (index, page, fragment)) in targets.into_iter().enumerate() {
        assert!(fixture.click_nav_item(index), "default not prevented");
        assert_eq!(fixture.current_url(), url(fragment));
        assert_eq!(fixture.take_published(), vec![page]);
        assert_eq!(fixture.main_html(), page_template(page));
        assert_single_active(&fixture, page);
        assert_eq!(fixture.viewport.scroll_count(), expected_scrolls + 1);
    }
    assert!(fixture.viewport.scrolls().iter().all(|&pos| pos == (0, 0)));
}

#[test]
fn test_home_item_click_is_redirected() {
    let fixture = started_app();
    fixture.app.navigator().push("models.html").unwrap();
    fixture.take_published();

    assert!(fixture.click_nav_item(0));
    assert_eq!(fixture.current_url(), url(""));
    assert_eq!(fixture.take_published(), vec![PageName::Home]);
    assert_single_active(&fixture, PageName::Home);
    assert_eq!(fixture.viewport.scrolls(), vec![(0, 0)]);

    let router = fixture.app.router();
    let entries = router.history().entries();
    assert_eq!(entries[entries.len() - 2], url("home.html"));
}

#[test]
fn test_click_on_active_item_still_scrolls() {
    let fixture = started_app();
    assert!(fixture.click_nav_item(2));
    assert!(fixture.click_nav_item(2));

    assert_eq!(fixture.take_published(), vec![PageName::Views]);
    assert_eq!(fixture.viewport.scroll_count(), 2);
}

#[test]
fn test_header_link_returns_home() {
    let fixture = started_app();
    fixture.app.navigator().push("events.html").unwrap();
    fixture.take_published();

    assert!(fixture.click_header_link());
    assert_eq!(fixture.current_url(), url(""));
    assert_eq!(fixture.take_published(), vec![PageName::Home]);
    assert_eq!(fixture.viewport.scrolls(), vec![(0, 0)]);
}

#[test]
fn test_article_links_walk_the_chapters() {
    let fixture = started_app();
    for (target, page) in [
        ("setup.html", PageName::Setup),
        ("views.html", PageName::Views),
        ("models.html", PageName::Models),
    ] {
        assert!(fixture.main_html().contains(&format!("data-target=\"{target}\"")));
        assert!(fixture.click_article_link(target));
        assert_eq!(fixture.app.current_page(), Some(page));
        assert_single_active(&fixture, page);
    }
    assert_eq!(fixture.viewport.scroll_count(), 3);
}

#[test]
fn test_active_change_rerenders_view_once() {
    let fixture = started_app();
    let elements = fixture.app.footer().item_elements();
    let views_item = fixture.app.footer().items().get(2).unwrap().clone();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    views_item.on_active_changed(Rc::new(move |_: &NavEntry| counter.set(counter.get() + 1)));

    let before = elements[2].inner_html();
    assert!(views_item.set_active(true));
    assert_eq!(calls.get(), 1);
    assert!(elements[2].has_class("active"));
    assert_eq!(elements[2].inner_html(), before);

    assert!(!views_item.set_active(true));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_render_count_increments_once_per_change() {
    let fixture = build_app();
    let counts = |items: &[Rc<MemoryElement>]| -> Vec<usize> {
        items.iter().map(|li| li.render_count()).collect::<Vec<_>>()
    };

    // Five items rendered once at assembly.
    let items = fixture.document.created_elements();
    assert_eq!(items.len(), 5);
    assert_eq!(counts(&items), [1, 1, 1, 1, 1]);

    // Start activated Home; every other model stayed inactive.
    fixture.app.start().unwrap();
    assert_eq!(counts(&items), [2, 1, 1, 1, 1]);

    assert!(fixture.click_nav_item(3));
    assert_eq!(counts(&items), [3, 1, 1, 2, 1]);

    fixture.app.bus().publish(BusEvent::Nav, &PageName::Models);
    assert_eq!(counts(&items), [3, 1, 1, 2, 1]);
}

#[test]
fn test_dropped_view_stops_rendering() {
    let bus = Rc::new(EventBus::new());
    let document = MemoryDocument::standard();
    let cx = ViewContext::new(document.clone(), MemoryViewport::new(), Navigator::detached());
    let item = NavItem::new("2: Views", PageName::Views, &bus);
    let view = NavItemView::new(&cx, item.clone(), Rc::new(templates::nav_item));
    view.render().unwrap();
    let li = document.created_elements().remove(0);

    bus.publish(BusEvent::Nav, &PageName::Views);
    assert_eq!(li.render_count(), 2);
    assert!(li.has_class("active"));

    drop(view);
    bus.publish(BusEvent::Nav, &PageName::Setup);
    assert_eq!(li.render_count(), 2);
    assert!(li.has_class("active"));
    assert!(!item.is_active());
}
