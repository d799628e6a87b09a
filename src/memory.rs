//! In-memory DOM, used by the tests and the demo.
//!
//! [`MemoryElement`] stores markup as a string. `find("#id")` resolves to a
//! slot element when the markup contains `id="id"`; children appended to the
//! slot are spliced in right after the opening tag when the element is
//! serialized. Replacing an element's markup discards its slots and appended
//! children, the same way a real DOM drops the old subtree.
//!
//! Each element counts how many times its markup was replaced
//! ([`MemoryElement::render_count`]), which is how tests observe re-renders.

use crate::dom::{ClickEvent, ClickHandler, ClickTarget, Document, Element, ElementRef, Selector, Viewport};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// An element whose content is a markup string.
pub struct MemoryElement {
    tag: String,
    id: Option<String>,
    markup: RefCell<String>,
    classes: RefCell<Vec<String>>,
    slots: RefCell<Vec<(String, Rc<MemoryElement>)>>,
    children: RefCell<Vec<ElementRef>>,
    listeners: RefCell<Vec<(Option<Selector>, ClickHandler)>>,
    render_count: Cell<usize>,
}

impl MemoryElement {
    /// A detached element with the given tag.
    pub fn new(tag: impl Into<String>) -> Rc<Self> {
        Rc::new(Self::build(tag.into(), None))
    }

    fn build(tag: String, id: Option<String>) -> Self {
        Self {
            tag,
            id,
            markup: RefCell::new(String::new()),
            classes: RefCell::new(Vec::new()),
            slots: RefCell::new(Vec::new()),
            children: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
            render_count: Cell::new(0),
        }
    }

    /// How many times [`set_inner_html`](Element::set_inner_html) ran.
    pub fn render_count(&self) -> usize {
        self.render_count.get()
    }

    /// Classes currently on the element, in insertion order.
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }

    /// Appended children (not slot contents).
    pub fn children(&self) -> Vec<ElementRef> {
        self.children.borrow().clone()
    }

    fn self_target(&self) -> ClickTarget {
        ClickTarget {
            tag: self.tag.clone(),
            id: self.id.clone(),
            classes: self.classes.borrow().clone(),
            data: HashMap::new(),
        }
    }

    fn dispatch(&self, target: ClickTarget, delegated: bool) -> ClickEvent {
        let handlers: Vec<(Option<Selector>, ClickHandler)> = self.listeners.borrow().clone();
        let mut event = ClickEvent::new(target);
        for (selector, handler) in handlers {
            let applies = match &selector {
                Some(selector) => delegated && selector.matches(event.target()),
                None => true,
            };
            if applies {
                handler(&mut event);
            }
        }
        event
    }
}

/// Tag name of the element whose opening tag contains byte offset `at`.
fn enclosing_tag(markup: &str, at: usize) -> String {
    markup[..at]
        .rfind('<')
        .map(|open| {
            markup[open + 1..at]
                .split(|c: char| c.is_whitespace() || c == '>')
                .next()
                .unwrap_or_default()
                .to_string()
        })
        .filter(|tag| !tag.is_empty())
        .unwrap_or_else(|| "div".to_string())
}

impl Element for MemoryElement {
    fn tag_name(&self) -> String {
        self.tag.clone()
    }

    fn set_inner_html(&self, markup: &str) {
        *self.markup.borrow_mut() = markup.to_string();
        self.slots.borrow_mut().clear();
        self.children.borrow_mut().clear();
        self.render_count.set(self.render_count.get() + 1);
    }

    fn inner_html(&self) -> String {
        let mut out = self.markup.borrow().clone();
        for (id, slot) in self.slots.borrow().iter() {
            let needle = format!("id=\"{id}\"");
            let insert_at = out
                .find(&needle)
                .and_then(|pos| out[pos..].find('>').map(|close| pos + close + 1));
            if let Some(at) = insert_at {
                out.insert_str(at, &slot.inner_html());
            }
        }
        for child in self.children.borrow().iter() {
            out.push_str(&child.outer_html());
        }
        out
    }

    fn outer_html(&self) -> String {
        let classes = self.classes.borrow();
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(" class=\"{}\"", classes.join(" "))
        };
        let id_attr = self
            .id
            .as_ref()
            .map(|id| format!(" id=\"{id}\""))
            .unwrap_or_default();
        format!(
            "<{tag}{id_attr}{class_attr}>{inner}</{tag}>",
            tag = self.tag,
            inner = self.inner_html()
        )
    }

    fn find(&self, selector: &str) -> Option<ElementRef> {
        let id = Selector::parse(selector).id?;
        if let Some((_, slot)) = self.slots.borrow().iter().find(|(slot_id, _)| *slot_id == id) {
            return Some(Rc::clone(slot) as ElementRef);
        }

        let at = self.markup.borrow().find(&format!("id=\"{id}\""))?;
        let tag = enclosing_tag(&self.markup.borrow(), at);
        let slot = Rc::new(Self::build(tag, Some(id.clone())));
        self.slots.borrow_mut().push((id, Rc::clone(&slot)));
        Some(slot as ElementRef)
    }

    fn append_child(&self, child: ElementRef) {
        self.children.borrow_mut().push(child);
    }

    fn add_class(&self, class: &str) {
        let mut classes = self.classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }

    fn on_click(&self, selector: Option<Selector>, handler: ClickHandler) {
        self.listeners.borrow_mut().push((selector, handler));
    }

    fn click_on(&self, target: ClickTarget) -> ClickEvent {
        self.dispatch(target, true)
    }

    fn click(&self) -> ClickEvent {
        self.dispatch(self.self_target(), false)
    }
}

/// A document with a fixed set of named regions.
pub struct MemoryDocument {
    regions: HashMap<String, Rc<MemoryElement>>,
    created: RefCell<Vec<Rc<MemoryElement>>>,
}

impl MemoryDocument {
    /// A document with one element per region name; each region's tag is
    /// its name.
    pub fn with_regions<'a>(names: impl IntoIterator<Item = &'a str>) -> Rc<Self> {
        let regions = names
            .into_iter()
            .map(|name| (name.to_string(), MemoryElement::new(name)))
            .collect();
        Rc::new(Self {
            regions,
            created: RefCell::new(Vec::new()),
        })
    }

    /// The `header`, `main` and `footer` regions.
    pub fn standard() -> Rc<Self> {
        Self::with_regions(["header", "main", "footer"])
    }

    /// Concrete handle to a region, for inspection.
    pub fn memory_region(&self, name: &str) -> Option<Rc<MemoryElement>> {
        self.regions.get(name).cloned()
    }

    /// Every element made by `create_element`, oldest first.
    pub fn created_elements(&self) -> Vec<Rc<MemoryElement>> {
        self.created.borrow().clone()
    }
}

impl Document for MemoryDocument {
    fn region(&self, name: &str) -> Option<ElementRef> {
        self.memory_region(name).map(|el| el as ElementRef)
    }

    fn create_element(&self, tag: &str) -> ElementRef {
        let element = MemoryElement::new(tag);
        self.created.borrow_mut().push(Rc::clone(&element));
        element
    }
}

/// A viewport that records every scroll.
#[derive(Debug, Default)]
pub struct MemoryViewport {
    scrolls: RefCell<Vec<(i32, i32)>>,
}

impl MemoryViewport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Every `(x, y)` passed to `scroll_to`, oldest first.
    pub fn scrolls(&self) -> Vec<(i32, i32)> {
        self.scrolls.borrow().clone()
    }

    /// Number of scrolls so far.
    pub fn scroll_count(&self) -> usize {
        self.scrolls.borrow().len()
    }
}

impl Viewport for MemoryViewport {
    fn scroll_to(&self, x: i32, y: i32) {
        self.scrolls.borrow_mut().push((x, y));
    }
}
