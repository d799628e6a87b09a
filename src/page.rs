//! The closed set of pages and tables keyed by it.
//!
//! [`PageName`] drives three things that must agree: the route table, the
//! template table and the footer's nav entries. [`PageTable`] is a map that
//! refuses to exist unless it covers every page, so a missing entry is caught
//! when the table is built rather than when a user clicks.

use crate::error::{NavigatorError, Result};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// One of the application's pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageName {
    Home,
    Setup,
    Views,
    Models,
    Events,
}

impl PageName {
    /// Every page, in footer order.
    pub const ALL: [PageName; 5] = [
        PageName::Home,
        PageName::Setup,
        PageName::Views,
        PageName::Models,
        PageName::Events,
    ];

    /// Lowercase name used on the bus and in links.
    pub const fn as_str(self) -> &'static str {
        match self {
            PageName::Home => "home",
            PageName::Setup => "setup",
            PageName::Views => "views",
            PageName::Models => "models",
            PageName::Events => "events",
        }
    }

    /// Link target used by the footer, e.g. `views.html`.
    ///
    /// Home links to `home.html` too; that fragment is not a canonical route
    /// and reaches the home page through the catch-all redirect.
    pub fn href(self) -> String {
        format!("{}.html", self.as_str())
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageName {
    type Err = NavigatorError;

    fn from_str(s: &str) -> Result<Self> {
        PageName::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| NavigatorError::unknown_page(s))
    }
}

/// Check that `pages` mentions every [`PageName`].
///
/// Returns [`NavigatorError::IncompleteTable`] naming the first page (in
/// [`PageName::ALL`] order) that is missing.
pub fn check_coverage(
    table: &'static str,
    pages: impl IntoIterator<Item = PageName>,
) -> Result<()> {
    let seen: Vec<PageName> = pages.into_iter().collect();
    match PageName::ALL.into_iter().find(|page| !seen.contains(page)) {
        Some(missing) => Err(NavigatorError::IncompleteTable { table, missing }),
        None => Ok(()),
    }
}

/// A map with an entry for every [`PageName`].
///
/// # Example
///
/// ```
/// use page_navigator::{PageName, PageTable};
///
/// let titles = PageTable::from_entries(
///     "titles",
///     PageName::ALL.map(|page| (page, page.as_str().to_uppercase())),
/// )
/// .unwrap();
/// assert_eq!(titles.get(PageName::Views), "VIEWS");
///
/// let partial = PageTable::from_entries("titles", [(PageName::Home, "Home")]);
/// assert!(partial.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PageTable<T> {
    table: &'static str,
    entries: HashMap<PageName, T>,
}

impl<T> PageTable<T> {
    /// Build a table, rejecting it unless every page has an entry.
    ///
    /// Later entries for the same page overwrite earlier ones.
    pub fn from_entries(
        table: &'static str,
        entries: impl IntoIterator<Item = (PageName, T)>,
    ) -> Result<Self> {
        let entries: HashMap<PageName, T> = entries.into_iter().collect();
        check_coverage(table, entries.keys().copied())?;
        Ok(Self { table, entries })
    }

    /// Build a table by computing the entry for each page.
    pub fn from_fn(table: &'static str, mut f: impl FnMut(PageName) -> T) -> Self {
        Self {
            table,
            entries: PageName::ALL.into_iter().map(|page| (page, f(page))).collect(),
        }
    }

    /// Entry for `page`. Infallible: coverage was checked on construction.
    pub fn get(&self, page: PageName) -> &T {
        &self.entries[&page]
    }

    /// Replace the entry for `page`.
    pub fn set(&mut self, page: PageName, value: T) {
        self.entries.insert(page, value);
    }

    /// Name given to this table in errors.
    pub fn name(&self) -> &'static str {
        self.table
    }

    /// Pages covered by the table (always all of them), in [`PageName::ALL`] order.
    pub fn pages(&self) -> impl Iterator<Item = PageName> + '_ {
        PageName::ALL
            .into_iter()
            .filter(|page| self.entries.contains_key(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for page in PageName::ALL {
            assert_eq!(page.as_str().parse::<PageName>(), Ok(page));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "about".parse::<PageName>(),
            Err(NavigatorError::unknown_page("about"))
        );
        // Case matters: names on the bus are lowercase.
        assert!("Home".parse::<PageName>().is_err());
    }

    #[test]
    fn test_href() {
        assert_eq!(PageName::Setup.href(), "setup.html");
        assert_eq!(PageName::Home.href(), "home.html");
    }

    #[test]
    fn test_check_coverage_reports_first_missing() {
        let result = check_coverage(
            "route table",
            [PageName::Home, PageName::Setup, PageName::Events],
        );
        assert_eq!(
            result,
            Err(NavigatorError::IncompleteTable {
                table: "route table",
                missing: PageName::Views,
            })
        );
        assert!(check_coverage("route table", PageName::ALL).is_ok());
    }

    #[test]
    fn test_table_from_fn_and_set() {
        let mut table = PageTable::from_fn("counts", |_| 0);
        table.set(PageName::Models, 3);
        assert_eq!(*table.get(PageName::Models), 3);
        assert_eq!(*table.get(PageName::Home), 0);
        assert_eq!(table.pages().count(), 5);
        assert_eq!(table.name(), "counts");
    }
}
