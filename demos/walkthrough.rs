//! Walkthrough Demo
//!
//! Drives the application over the in-memory DOM the way a reader would:
//! follow the footer links, take a wrong turn, go back, and print what the
//! page looks like after each step. Run with `RUST_LOG=debug` to see the
//! router's log lines.

use page_navigator::dom::{ClickTarget, Element};
use page_navigator::memory::{MemoryDocument, MemoryViewport};
use page_navigator::{App, AppConfig, NavigatorError, PageName};
use std::rc::Rc;

fn main() -> Result<(), NavigatorError> {
    env_logger::init();

    let document = MemoryDocument::standard();
    let viewport = MemoryViewport::new();
    let app = App::new(AppConfig::new(), document.clone(), viewport.clone())?;

    app.start()?;
    report(&app, &viewport, "initial load");

    // Footer links, in display order
    for (index, element) in app.footer().item_elements().iter().enumerate().skip(1) {
        element.click();
        report(&app, &viewport, &format!("footer link {index}"));
    }

    // A chapter's "Previous" link
    if let Some(main) = document.memory_region("main") {
        main.click_on(
            ClickTarget::new("a")
                .class("article-nav")
                .data("target", PageName::Models.href()),
        );
    }
    report(&app, &viewport, "article link");

    let result = app.navigator().push("chapters/5.html")?;
    println!(
        "redirected from {:?} to '{}'",
        result.redirected_from(),
        result.fragment()
    );
    report(&app, &viewport, "unknown page");

    app.navigator().back()?;
    report(&app, &viewport, "back");

    if let Some(header) = document.memory_region("header") {
        header.click_on(ClickTarget::new("a"));
    }
    report(&app, &viewport, "header link");

    Ok(())
}

fn report(app: &App, viewport: &Rc<MemoryViewport>, step: &str) {
    let page = app
        .current_page()
        .map_or_else(|| "-".to_string(), |page| page.to_string());
    let active: Vec<String> = app
        .footer()
        .items()
        .active_items()
        .iter()
        .map(|item| item.title())
        .collect();
    println!(
        "{step:>14}: url={} page={page} active={active:?} scrolls={}",
        app.router().current_url(),
        viewport.scroll_count()
    );
}
