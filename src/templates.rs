//! Markup templates.
//!
//! Every template is a pure function returning markup. Page templates take no
//! arguments; the nav item template takes the entry it draws. [`Templates`]
//! bundles the set the application uses and lets any part be swapped out.
//!
//! Pages link to each other with `<a class="article-nav" data-target="...">`,
//! which the main view turns into in-app navigation.

use crate::nav::NavEntry;
use crate::page::{PageName, PageTable};
use std::rc::Rc;

/// A parameterless page or shell template.
pub type PageTemplate = Rc<dyn Fn() -> String>;

/// Template for a single footer nav item.
pub type NavItemTemplate = Rc<dyn Fn(&NavEntry) -> String>;

/// The full set of templates used by the views.
#[derive(Clone)]
pub struct Templates {
    pub pages: PageTable<PageTemplate>,
    pub header: PageTemplate,
    pub footer: PageTemplate,
    pub nav_item: NavItemTemplate,
}

impl Templates {
    /// The application's own templates.
    pub fn standard() -> Self {
        Self {
            pages: PageTable::from_fn("template table", |page| -> PageTemplate {
                Rc::new(move || page_template(page))
            }),
            header: Rc::new(header),
            footer: Rc::new(footer),
            nav_item: Rc::new(nav_item),
        }
    }

    /// Replace one page's template.
    pub fn with_page(mut self, page: PageName, template: impl Fn() -> String + 'static) -> Self {
        self.pages.set(page, Rc::new(template));
        self
    }

    /// Replace the nav item template.
    pub fn with_nav_item(mut self, template: impl Fn(&NavEntry) -> String + 'static) -> Self {
        self.nav_item = Rc::new(template);
        self
    }
}

impl std::fmt::Debug for Templates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Templates")
            .field("pages", &self.pages.pages().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// The standard template for `page`.
pub fn page_template(page: PageName) -> String {
    match page {
        PageName::Home => home(),
        PageName::Setup => setup(),
        PageName::Views => views(),
        PageName::Models => models(),
        PageName::Events => events(),
    }
}

fn article(title: &str, body: &str, prev: Option<PageName>, next: Option<PageName>) -> String {
    let link = |page: PageName, label: &str| {
        format!(
            "<a class=\"article-nav\" href=\"{href}\" data-target=\"{href}\">{label}</a>",
            href = page.href()
        )
    };
    let mut nav = String::new();
    if let Some(page) = prev {
        nav.push_str(&link(page, "Previous"));
    }
    if let Some(page) = next {
        nav.push_str(&link(page, "Next"));
    }
    format!("<article><h2>{title}</h2>{body}<nav class=\"article-links\">{nav}</nav></article>")
}

/// Landing page.
pub fn home() -> String {
    article(
        "Navigating without reloading",
        "<p>A router, three views and an event bus. Follow the chapters below \
         or use the links in the footer.</p>",
        None,
        Some(PageName::Setup),
    )
}

/// Chapter 1.
pub fn setup() -> String {
    article(
        "1: Set-up",
        "<p>The application is built once at start-up: the event bus, the \
         router, and the header, main and footer views. Every lookup table is \
         checked against the full list of pages before anything renders.</p>",
        Some(PageName::Home),
        Some(PageName::Views),
    )
}

/// Chapter 2.
pub fn views() -> String {
    article(
        "2: Views",
        "<p>A view owns one element and replaces its markup when it renders. \
         The main view swaps in one template per page; the footer draws one \
         item per link.</p>",
        Some(PageName::Setup),
        Some(PageName::Models),
    )
}

/// Chapter 3.
pub fn models() -> String {
    article(
        "3: Models",
        "<p>Each footer link is backed by a small model that knows whether it \
         is the active page. Changing that flag tells the bound view to redraw \
         itself.</p>",
        Some(PageName::Views),
        Some(PageName::Events),
    )
}

/// Chapter 4.
pub fn events() -> String {
    article(
        "4: Events",
        "<p>When the router shows a page it announces it on the event bus. \
         Every footer model hears the announcement and updates its flag, so \
         exactly one link ends up highlighted.</p>",
        Some(PageName::Models),
        None,
    )
}

/// Header shell.
pub fn header() -> String {
    "<h1><a href=\"/\">Page Navigator</a></h1>".to_string()
}

/// Footer shell; nav items are appended to `#nav-list`.
pub fn footer() -> String {
    "<nav><ul id=\"nav-list\"></ul></nav>".to_string()
}

/// One footer link.
pub fn nav_item(entry: &NavEntry) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        entry.target.href(),
        escape_html(&entry.title)
    )
}

/// Escape the characters that are significant in markup text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_pages_match_template_functions() {
        let templates = Templates::standard();
        for page in PageName::ALL {
            assert_eq!((templates.pages.get(page))(), page_template(page));
        }
    }

    #[test]
    fn test_chapters_link_forward() {
        assert!(home().contains("data-target=\"setup.html\""));
        assert!(events().contains("data-target=\"models.html\""));
        assert!(!events().contains("Next"));
    }

    #[test]
    fn test_footer_has_nav_list() {
        assert!(footer().contains("id=\"nav-list\""));
    }

    #[test]
    fn test_nav_item_escapes_title() {
        let entry = NavEntry::new("Q&A <draft>", PageName::Events);
        assert_eq!(
            nav_item(&entry),
            "<a href=\"events.html\">Q&amp;A &lt;draft&gt;</a>"
        );
    }

    #[test]
    fn test_overrides() {
        let templates = Templates::standard()
            .with_page(PageName::Views, || "<p>custom</p>".to_string())
            .with_nav_item(|entry| entry.title.clone());
        assert_eq!((templates.pages.get(PageName::Views))(), "<p>custom</p>");
        assert_eq!(
            (templates.nav_item)(&NavEntry::new("Home", PageName::Home)),
            "Home"
        );
    }
}
