use super::{follow_link, ViewContext};
use crate::dom::{ElementRef, Selector};
use crate::error::Result;
use crate::page::{PageName, PageTable};
use crate::templates::PageTemplate;
use crate::{debug_log, warn_log};
use std::cell::Cell;
use std::rc::Rc;

/// The content area. Shows one page template at a time.
pub struct MainView {
    element: ElementRef,
    templates: PageTable<PageTemplate>,
    current: Cell<Option<PageName>>,
}

impl MainView {
    /// Bind the view to `element`.
    ///
    /// Clicks on `a.article-nav` links inside the content navigate to the
    /// link's `data-target`.
    pub fn new(cx: &ViewContext, element: ElementRef, templates: PageTable<PageTemplate>) -> Self {
        let navigator = cx.navigator.clone();
        let viewport = Rc::clone(&cx.viewport);
        element.on_click(
            Some(Selector::parse("a.article-nav")),
            Rc::new(move |event| {
                event.prevent_default();
                match event.target().data_value("target") {
                    Some(target) => {
                        let target = target.to_string();
                        follow_link(&navigator, viewport.as_ref(), &target);
                    }
                    None => warn_log!("Article link without a data-target was clicked"),
                }
            }),
        );

        Self {
            element,
            templates,
            current: Cell::new(None),
        }
    }

    /// Replace the content with `page`'s template and return the markup.
    pub fn render(&self, page: PageName) -> String {
        let markup = (self.templates.get(page))();
        self.element.set_inner_html(&markup);
        self.current.set(Some(page));
        debug_log!("Main view now shows '{}'", page);
        markup
    }

    /// Render a page given by name.
    ///
    /// A name outside the page set fails with
    /// [`NavigatorError::UnknownPage`](crate::NavigatorError::UnknownPage)
    /// and leaves the current content in place.
    pub fn render_named(&self, name: &str) -> Result<String> {
        let page: PageName = name.parse()?;
        Ok(self.render(page))
    }

    /// Page currently shown, if any.
    pub fn current_page(&self) -> Option<PageName> {
        self.current.get()
    }

    pub fn element(&self) -> &ElementRef {
        &self.element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ClickTarget, Document, Element};
    use crate::error::NavigatorError;
    use crate::memory::{MemoryDocument, MemoryViewport};
    use crate::router::Navigator;
    use crate::templates::{page_template, Templates};

    fn main_view() -> (MainView, Rc<MemoryViewport>) {
        let document = MemoryDocument::standard();
        let viewport = MemoryViewport::new();
        let element = document.region("main").unwrap();
        let cx = ViewContext::new(document, viewport.clone(), Navigator::detached());
        (MainView::new(&cx, element, Templates::standard().pages), viewport)
    }

    #[test]
    fn test_render_each_page_matches_template() {
        let (view, _) = main_view();
        for page in PageName::ALL {
            let markup = view.render(page);
            assert_eq!(markup, page_template(page));
            assert_eq!(view.element().inner_html(), page_template(page));
            assert_eq!(view.current_page(), Some(page));
        }
    }

    #[test]
    fn test_render_named_unknown_keeps_content() {
        let (view, _) = main_view();
        view.render(PageName::Models);

        let err = view.render_named("about").unwrap_err();
        assert_eq!(err, NavigatorError::unknown_page("about"));
        assert_eq!(view.element().inner_html(), page_template(PageName::Models));
        assert_eq!(view.current_page(), Some(PageName::Models));

        assert_eq!(view.render_named("events").unwrap(), page_template(PageName::Events));
    }

    #[test]
    fn test_article_link_click_scrolls_even_without_router() {
        let (view, viewport) = main_view();
        let event = view.element().click_on(
            ClickTarget::new("a")
                .class("article-nav")
                .data("target", "views.html"),
        );
        assert!(event.default_prevented());
        assert_eq!(viewport.scrolls(), vec![(0, 0)]);
    }
}
