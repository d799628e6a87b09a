use super::{follow_link, Renderable, ViewContext};
use crate::dom::{Element, ElementRef};
use crate::error::{NavigatorError, Result};
use crate::nav::{ActiveListener, ActiveTrackable, NavEntry, NavItem, NavItemList};
use crate::templates::{NavItemTemplate, PageTemplate};
use crate::{debug_log, trace_log};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

const NAV_LIST_SELECTOR: &str = "#nav-list";
const ACTIVE_CLASS: &str = "active";

fn draw_item(element: &dyn Element, template: &NavItemTemplate, entry: &NavEntry) {
    element.set_inner_html(&template(entry));
    element.toggle_class(ACTIVE_CLASS, entry.active);
}

/// One `<li>` in the footer, bound to a [`NavItem`].
///
/// The view redraws itself whenever the item's active flag changes, and
/// stops listening when dropped.
pub struct NavItemView {
    element: ElementRef,
    item: NavItem,
    template: NavItemTemplate,
    listener: ActiveListener,
}

impl NavItemView {
    pub fn new(cx: &ViewContext, item: NavItem, template: NavItemTemplate) -> Self {
        let element = cx.document.create_element("li");

        let navigator = cx.navigator.clone();
        let viewport = Rc::clone(&cx.viewport);
        let href = item.target().href();
        element.on_click(
            None,
            Rc::new(move |event| {
                event.prevent_default();
                follow_link(&navigator, viewport.as_ref(), &href);
            }),
        );

        let weak: Weak<dyn Element> = Rc::downgrade(&element);
        let redraw = Rc::clone(&template);
        let listener = item.on_active_changed(Rc::new(move |entry: &NavEntry| {
            if let Some(element) = weak.upgrade() {
                trace_log!("Redrawing nav item '{}'", entry.target);
                draw_item(element.as_ref(), &redraw, entry);
            }
        }));

        Self {
            element,
            item,
            template,
            listener,
        }
    }

    pub fn element(&self) -> &ElementRef {
        &self.element
    }

    pub fn item(&self) -> &NavItem {
        &self.item
    }
}

impl Renderable for NavItemView {
    fn render(&self) -> Result<String> {
        draw_item(self.element.as_ref(), &self.template, &self.item.entry());
        Ok(self.element.inner_html())
    }
}

impl Drop for NavItemView {
    fn drop(&mut self) {
        self.item.off_active_changed(self.listener);
    }
}

/// Footer holding the list of nav links.
pub struct FooterView {
    cx: ViewContext,
    element: ElementRef,
    items: NavItemList,
    shell: PageTemplate,
    nav_item: NavItemTemplate,
    views: RefCell<Vec<NavItemView>>,
}

impl FooterView {
    pub fn new(
        cx: &ViewContext,
        element: ElementRef,
        items: NavItemList,
        shell: PageTemplate,
        nav_item: NavItemTemplate,
    ) -> Self {
        Self {
            cx: cx.clone(),
            element,
            items,
            shell,
            nav_item,
            views: RefCell::new(Vec::new()),
        }
    }

    pub fn element(&self) -> &ElementRef {
        &self.element
    }

    /// The nav models, in display order.
    pub fn items(&self) -> &NavItemList {
        &self.items
    }

    /// Elements of the rendered item views, in display order.
    pub fn item_elements(&self) -> Vec<ElementRef> {
        self.views
            .borrow()
            .iter()
            .map(|view| Rc::clone(view.element()))
            .collect()
    }
}

impl Renderable for FooterView {
    /// Draw the shell, then append one item view per model to `#nav-list`.
    ///
    /// Views from an earlier render are dropped and stop listening.
    fn render(&self) -> Result<String> {
        self.element.set_inner_html(&(self.shell)());
        let list = self
            .element
            .find(NAV_LIST_SELECTOR)
            .ok_or_else(|| NavigatorError::missing_element(NAV_LIST_SELECTOR))?;

        let mut views = Vec::with_capacity(self.items.len());
        for item in self.items.iter() {
            let view = NavItemView::new(&self.cx, item.clone(), Rc::clone(&self.nav_item));
            view.render()?;
            list.append_child(Rc::clone(view.element()));
            views.push(view);
        }
        debug_log!("Footer rendered {} nav item(s)", views.len());
        self.views.replace(views);

        Ok(self.element.inner_html())
    }
}
