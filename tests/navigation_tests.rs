//! Router behavior seen through the assembled application: route dispatch,
//! catch-all redirects, history traversal and start-up rules.

mod common;

use common::*;
use page_navigator::templates::page_template;
use page_navigator::*;

const CANONICAL: [(&str, PageName); 5] = [
    ("", PageName::Home),
    ("setup.html", PageName::Setup),
    ("views.html", PageName::Views),
    ("models.html", PageName::Models),
    ("events.html", PageName::Events),
];

// ---- route dispatch ----

#[test]
fn test_each_canonical_route_publishes_once() {
    for (fragment, page) in CANONICAL {
        let fixture = build_app_at(Some(&url(fragment)));
        let result = fixture.app.start().unwrap();

        assert_eq!(result.page(), Some(page), "route for '{fragment}'");
        assert_eq!(fixture.take_published(), vec![page]);
        assert_eq!(fixture.main_html(), page_template(page));
        assert_eq!(fixture.app.current_page(), Some(page));
    }
}

#[test]
fn test_programmatic_navigation_to_each_page() {
    let fixture = started_app();
    for (fragment, page) in CANONICAL.into_iter().rev() {
        let result = fixture.app.navigator().push(fragment).unwrap();
        assert_eq!(result.page(), Some(page));
        assert_eq!(fixture.take_published(), vec![page]);
        assert_eq!(fixture.current_url(), url(fragment));
    }
}

#[test]
fn test_leading_hash_and_slashes_are_ignored() {
    let fixture = started_app();
    let result = fixture.app.navigator().push("#/models.html/").unwrap();
    assert_eq!(result.page(), Some(PageName::Models));
    assert_eq!(fixture.current_url(), url("models.html"));
}

#[test]
fn test_query_string_does_not_affect_matching() {
    let fixture = started_app();
    let result = fixture.app.navigator().push("events.html?from=footer&x=1").unwrap();
    assert_eq!(result.page(), Some(PageName::Events));
    assert_eq!(fixture.take_published(), vec![PageName::Events]);
}

// ---- catch-all ----

#[test]
fn test_non_canonical_paths_redirect_home() {
    for path in ["home.html", "about.html", "views", "chapters/5.html", "views.html/extra"] {
        let fixture = started_app();
        fixture.app.navigator().push("setup.html").unwrap();
        fixture.take_published();

        let result = fixture.app.navigator().push(path).unwrap();
        assert_eq!(result.page(), Some(PageName::Home), "redirect for '{path}'");
        assert_eq!(result.redirected_from(), Some(path));
        assert_eq!(fixture.take_published(), vec![PageName::Home]);
        assert_eq!(fixture.current_url(), url(""));
        assert_eq!(fixture.main_html(), page_template(PageName::Home));
    }
}

#[test]
fn test_initial_load_of_unknown_url_redirects() {
    let fixture = build_app_at(Some("/modern-backbone/missing.html"));
    let result = fixture.app.start().unwrap();
    assert_eq!(result.page(), Some(PageName::Home));
    assert_eq!(result.redirected_from(), Some("missing.html"));
    assert_eq!(fixture.current_url(), url(""));
    assert_eq!(fixture.viewport.scroll_count(), 0);
}

#[test]
fn test_initial_load_of_bare_root_with_query() {
    let fixture = build_app_at(Some("/modern-backbone?ref=mail"));
    let result = fixture.app.start().unwrap();
    assert_eq!(result.page(), Some(PageName::Home));
    assert_eq!(result.redirected_from(), None);
    assert_eq!(result.fragment(), "?ref=mail");
    assert_eq!(fixture.take_published(), vec![PageName::Home]);
    assert_eq!(fixture.app.router().history().len(), 1);
}

#[test]
fn test_initial_load_of_bare_root_with_hash() {
    let fixture = build_app_at(Some("/modern-backbone#top"));
    let result = fixture.app.start().unwrap();
    assert_eq!(result.page(), Some(PageName::Home));
    assert_eq!(result.redirected_from(), None);
    assert_eq!(fixture.app.router().history().len(), 1);
}

#[test]
fn test_redirect_pushes_a_history_entry() {
    let fixture = started_app();
    fixture.app.navigator().push("views.html").unwrap();
    fixture.app.navigator().push("gone.html").unwrap();

    let router = fixture.app.router();
    assert_eq!(
        router.history().entries(),
        [url(""), url("views.html"), url("gone.html"), url("")]
    );
}

// ---- history ----

#[test]
fn test_back_and_forward_reroute_without_scrolling() {
    let fixture = started_app();
    let navigator = fixture.app.navigator();
    navigator.push("setup.html").unwrap();
    navigator.push("views.html").unwrap();
    fixture.take_published();

    let back = navigator.back().unwrap().unwrap();
    assert_eq!(back.page(), Some(PageName::Setup));
    assert_eq!(fixture.current_url(), url("setup.html"));
    assert_eq!(fixture.take_published(), vec![PageName::Setup]);
    assert_single_active(&fixture, PageName::Setup);

    let back = navigator.back().unwrap().unwrap();
    assert_eq!(back.page(), Some(PageName::Home));
    assert_eq!(navigator.back().unwrap(), None);

    let forward = navigator.forward().unwrap().unwrap();
    assert_eq!(forward.page(), Some(PageName::Setup));
    assert_eq!(fixture.main_html(), page_template(PageName::Setup));

    assert_eq!(fixture.viewport.scroll_count(), 0);
}

#[test]
fn test_push_after_back_drops_forward_entries() {
    let fixture = started_app();
    let navigator = fixture.app.navigator();
    navigator.push("setup.html").unwrap();
    navigator.push("views.html").unwrap();
    navigator.back().unwrap();
    navigator.push("events.html").unwrap();

    assert_eq!(navigator.forward().unwrap(), None);
    assert_eq!(fixture.app.router().history().len(), 3);
}

// ---- no-ops and lifecycle ----

#[test]
fn test_navigating_to_current_fragment_is_a_noop() {
    let fixture = started_app();
    fixture.app.navigator().push("models.html").unwrap();
    fixture.take_published();
    let renders = fixture.region("main").render_count();

    let result = fixture.app.navigator().push("models.html").unwrap();
    assert!(result.is_unchanged());
    assert!(fixture.take_published().is_empty());
    assert_eq!(fixture.region("main").render_count(), renders);
    assert_eq!(fixture.app.router().history().len(), 2);
}

#[test]
fn test_start_twice_fails() {
    let fixture = started_app();
    assert_eq!(fixture.app.start(), Err(NavigatorError::AlreadyStarted));
    assert!(fixture.take_published().is_empty());
}

#[test]
fn test_navigate_before_start_fails() {
    let fixture = build_app();
    assert_eq!(
        fixture.app.navigator().push("views.html"),
        Err(NavigatorError::NotStarted)
    );
    assert_eq!(fixture.app.current_page(), None);
    assert_eq!(fixture.region("main").render_count(), 0);
}

#[test]
fn test_replace_does_not_grow_history() {
    let fixture = started_app();
    let result = fixture.app.navigator().replace("views.html").unwrap();
    assert_eq!(result.page(), Some(PageName::Views));
    assert_eq!(fixture.app.router().history().entries(), [url("views.html")]);
}

#[test]
fn test_custom_root() {
    let document = page_navigator::memory::MemoryDocument::standard();
    let viewport = page_navigator::memory::MemoryViewport::new();
    let app = App::new(
        AppConfig::new().root("tutorial").initial_url("/tutorial"),
        document,
        viewport,
    )
    .unwrap();
    app.start().unwrap();
    assert_eq!(app.current_page(), Some(PageName::Home));

    app.navigator().push("views.html").unwrap();
    assert_eq!(app.router().current_url(), "/tutorial/views.html");
    assert_eq!(app.navigator().current_url().as_deref(), Some("/tutorial/views.html"));
}
