//! Views: the header, the main content area and the footer nav list.
//!
//! Each view owns one [`Element`](crate::dom::Element) and replaces its
//! markup when it renders. Views that react to clicks get a
//! [`ViewContext`], which carries the collaborators a click needs: the
//! [`Navigator`] to change the URL and the [`Viewport`] to scroll.
//!
//! Click navigation always prevents the browser's default action, asks the
//! router to navigate, and scrolls to the top. Navigation triggered any
//! other way (initial load, back/forward) does not scroll.

mod footer;
mod header;
mod main_view;

pub use footer::{FooterView, NavItemView};
pub use header::HeaderView;
pub use main_view::MainView;

use crate::dom::{Document, Viewport};
use crate::error::Result;
use crate::error_log;
use crate::router::Navigator;
use std::rc::Rc;

/// Something that draws itself into its element.
pub trait Renderable {
    /// Draw into the view's element and return the markup written.
    fn render(&self) -> Result<String>;
}

/// Collaborators shared by the views.
#[derive(Clone)]
pub struct ViewContext {
    pub document: Rc<dyn Document>,
    pub viewport: Rc<dyn Viewport>,
    pub navigator: Navigator,
}

impl ViewContext {
    pub fn new(document: Rc<dyn Document>, viewport: Rc<dyn Viewport>, navigator: Navigator) -> Self {
        Self {
            document,
            viewport,
            navigator,
        }
    }
}

/// Navigate to `fragment` and scroll to the top, as a link click does.
///
/// There is no caller to hand an error to, so failures are logged.
pub(crate) fn follow_link(navigator: &Navigator, viewport: &dyn Viewport, fragment: &str) {
    if let Err(err) = navigator.push(fragment) {
        error_log!("Navigation to '{}' failed: {}", fragment, err);
    }
    viewport.scroll_to(0, 0);
}
