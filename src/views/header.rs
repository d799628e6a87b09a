use super::{follow_link, Renderable, ViewContext};
use crate::dom::{ElementRef, Selector};
use crate::error::Result;
use crate::templates::PageTemplate;
use std::rc::Rc;

/// Static page header whose link goes back to the root page.
pub struct HeaderView {
    element: ElementRef,
    template: PageTemplate,
}

impl HeaderView {
    /// Bind the header to `element`. Clicking any `a` inside it navigates
    /// to the root fragment.
    pub fn new(cx: &ViewContext, element: ElementRef, template: PageTemplate) -> Self {
        let navigator = cx.navigator.clone();
        let viewport = Rc::clone(&cx.viewport);
        element.on_click(
            Some(Selector::parse("a")),
            Rc::new(move |event| {
                event.prevent_default();
                follow_link(&navigator, viewport.as_ref(), "");
            }),
        );
        Self { element, template }
    }

    pub fn element(&self) -> &ElementRef {
        &self.element
    }
}

impl Renderable for HeaderView {
    fn render(&self) -> Result<String> {
        let markup = (self.template)();
        self.element.set_inner_html(&markup);
        Ok(markup)
    }
}
