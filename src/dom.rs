//! The DOM as seen by the views.
//!
//! Views never touch a concrete rendering engine. They talk to an
//! [`Element`] ("replace inner markup", "find descendant", "append child",
//! class toggling, click binding), obtain roots and new elements from a
//! [`Document`], and scroll through a [`Viewport`]. The
//! [`memory`](crate::memory) module provides in-process implementations.
//!
//! Click handlers receive a [`ClickEvent`] describing the clicked
//! [`ClickTarget`]. A handler bound with a [`Selector`] only runs when the
//! target matches it (event delegation).

use std::collections::HashMap;
use std::rc::Rc;

/// Shared handle to an element.
pub type ElementRef = Rc<dyn Element>;

/// Click callback.
pub type ClickHandler = Rc<dyn Fn(&mut ClickEvent)>;

/// The element a click landed on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub data: HashMap<String, String>,
}

impl ClickTarget {
    /// A target with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Add a CSS class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set the id attribute.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a `data-*` attribute (`key` without the `data-` prefix).
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Value of a `data-*` attribute.
    pub fn data_value(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}

/// A click in flight.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    target: ClickTarget,
    default_prevented: bool,
}

impl ClickEvent {
    /// A click on `target`.
    pub fn new(target: ClickTarget) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    /// The clicked element.
    pub fn target(&self) -> &ClickTarget {
        &self.target
    }

    /// Suppress the default action (following the link).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler suppressed the default action.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A compound selector: optional tag, optional `#id`, any number of
/// `.class`es.
///
/// ```
/// use page_navigator::dom::{ClickTarget, Selector};
///
/// let selector = Selector::parse("a.article-nav");
/// assert!(selector.matches(&ClickTarget::new("a").class("article-nav")));
/// assert!(!selector.matches(&ClickTarget::new("a")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Selector {
    /// Parse `tag`, `#id`, `.class` and combinations such as `li.active`.
    pub fn parse(selector: &str) -> Self {
        let mut parsed = Self::default();
        let mut rest = selector.trim();

        let tag_end = rest.find(['#', '.']).unwrap_or(rest.len());
        if tag_end > 0 {
            parsed.tag = Some(rest[..tag_end].to_string());
        }
        rest = &rest[tag_end..];

        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['#', '.']).unwrap_or(body.len());
            let name = body[..end].to_string();
            if marker == '#' {
                parsed.id = Some(name);
            } else {
                parsed.classes.push(name);
            }
            rest = &body[end..];
        }

        parsed
    }

    /// Check a click target against the selector.
    pub fn matches(&self, target: &ClickTarget) -> bool {
        self.tag.as_ref().map_or(true, |tag| *tag == target.tag)
            && self
                .id
                .as_ref()
                .map_or(true, |id| target.id.as_ref() == Some(id))
            && self.classes.iter().all(|class| target.classes.contains(class))
    }
}

/// A DOM element.
pub trait Element {
    /// Lowercase tag name.
    fn tag_name(&self) -> String;

    /// Replace the element's entire content with `markup`.
    fn set_inner_html(&self, markup: &str);

    /// The element's content, including appended children.
    fn inner_html(&self) -> String;

    /// The element itself serialized, including its classes.
    fn outer_html(&self) -> String;

    /// First descendant matching `selector`.
    fn find(&self, selector: &str) -> Option<ElementRef>;

    /// Append `child` after the element's current content.
    fn append_child(&self, child: ElementRef);

    /// Add a CSS class (no-op if present).
    fn add_class(&self, class: &str);

    /// Remove a CSS class (no-op if absent).
    fn remove_class(&self, class: &str);

    /// Check for a CSS class.
    fn has_class(&self, class: &str) -> bool;

    /// Bind a click handler. With a selector, the handler only runs for
    /// clicks whose target matches it.
    fn on_click(&self, selector: Option<Selector>, handler: ClickHandler);

    /// Dispatch a click on a descendant described by `target`.
    fn click_on(&self, target: ClickTarget) -> ClickEvent;

    /// Dispatch a click on the element itself.
    fn click(&self) -> ClickEvent;

    /// Add `class` when `on`, remove it otherwise.
    fn toggle_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// Source of root regions and new elements.
pub trait Document {
    /// Root element for a named region (`header`, `main`, `footer`).
    fn region(&self, name: &str) -> Option<ElementRef>;

    /// Create a detached element.
    fn create_element(&self, tag: &str) -> ElementRef;
}

/// The scrollable window.
pub trait Viewport {
    fn scroll_to(&self, x: i32, y: i32);
}
