//! Error and result types for navigation.
//!
//! - [`NavigatorError`]: everything that can go wrong while building the
//!   application or routing a URL.
//! - [`NavigationResult`]: the outcome of a navigation that did not fail
//!   (`Routed`, `Unchanged`, `Silent`).
//!
//! # Examples
//!
//! ```
//! use page_navigator::{NavigationResult, PageName};
//!
//! let result = NavigationResult::Routed {
//!     fragment: "views.html".into(),
//!     page: PageName::Views,
//!     redirected_from: None,
//! };
//! assert!(result.is_routed());
//! assert_eq!(result.page(), Some(PageName::Views));
//! ```

use crate::page::PageName;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = NavigatorError> = std::result::Result<T, E>;

// ============================================================================
// Navigation Result Types
// ============================================================================

/// Outcome of a successful call to [`Router::navigate`](crate::Router::navigate)
/// (and friends).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationResult {
    /// A route matched and its page was shown.
    Routed {
        /// Fragment that was finally routed (after any redirect).
        fragment: String,
        /// Page that is now active.
        page: PageName,
        /// Fragment that was redirected away from, if the catch-all fired.
        redirected_from: Option<String>,
    },
    /// The requested fragment is already the current one; nothing happened.
    Unchanged { fragment: String },
    /// The URL was updated without running the route (`trigger: false`).
    Silent { fragment: String },
}

impl NavigationResult {
    /// Check if a route handler ran.
    pub fn is_routed(&self) -> bool {
        matches!(self, NavigationResult::Routed { .. })
    }

    /// Check if the navigation was a no-op.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, NavigationResult::Unchanged { .. })
    }

    /// Page shown by this navigation, if one was.
    pub fn page(&self) -> Option<PageName> {
        match self {
            NavigationResult::Routed { page, .. } => Some(*page),
            _ => None,
        }
    }

    /// The fragment this result refers to.
    pub fn fragment(&self) -> &str {
        match self {
            NavigationResult::Routed { fragment, .. }
            | NavigationResult::Unchanged { fragment }
            | NavigationResult::Silent { fragment } => fragment,
        }
    }

    /// Fragment the catch-all redirected away from.
    pub fn redirected_from(&self) -> Option<&str> {
        match self {
            NavigationResult::Routed {
                redirected_from: Some(from),
                ..
            } => Some(from),
            _ => None,
        }
    }

    /// Record that this result came from redirecting `from`.
    pub(crate) fn with_redirect_from(self, from: &str) -> Self {
        match self {
            NavigationResult::Routed {
                fragment,
                page,
                redirected_from: None,
            } => NavigationResult::Routed {
                fragment,
                page,
                redirected_from: Some(from.to_string()),
            },
            other => other,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Everything that can fail while wiring the application or routing a URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigatorError {
    /// A page name outside the closed [`PageName`] set reached a view.
    #[error("unknown page: '{name}'")]
    UnknownPage { name: String },

    /// No registered route matched (only possible without a catch-all).
    #[error("no route matches '{fragment}'")]
    UnmatchedRoute { fragment: String },

    /// A lookup table does not cover every page.
    #[error("{table} has no entry for page '{missing}'")]
    IncompleteTable {
        table: &'static str,
        missing: PageName,
    },

    /// The root fragment itself resolved to the catch-all redirect.
    #[error("redirect loop detected navigating to '{fragment}'")]
    RedirectLoop { fragment: String },

    /// A region or descendant element could not be found.
    #[error("no element matches '{selector}'")]
    MissingElement { selector: String },

    /// [`Router::start`](crate::Router::start) was called twice.
    #[error("routing has already been started")]
    AlreadyStarted,

    /// Navigation was requested before [`Router::start`](crate::Router::start).
    #[error("routing has not been started")]
    NotStarted,

    /// A navigation was requested while another one is still running.
    #[error("router is busy with another navigation")]
    NavigationInProgress,

    /// The router behind a [`Navigator`](crate::Navigator) no longer exists.
    #[error("router has been dropped")]
    RouterDropped,
}

impl NavigatorError {
    /// Shorthand for [`NavigatorError::UnknownPage`].
    pub fn unknown_page(name: impl Into<String>) -> Self {
        Self::UnknownPage { name: name.into() }
    }

    /// Shorthand for [`NavigatorError::MissingElement`].
    pub fn missing_element(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routed_result() {
        let result = NavigationResult::Routed {
            fragment: String::new(),
            page: PageName::Home,
            redirected_from: Some("nowhere".to_string()),
        };
        assert!(result.is_routed());
        assert!(!result.is_unchanged());
        assert_eq!(result.page(), Some(PageName::Home));
        assert_eq!(result.fragment(), "");
        assert_eq!(result.redirected_from(), Some("nowhere"));
    }

    #[test]
    fn test_unchanged_result() {
        let result = NavigationResult::Unchanged {
            fragment: "setup.html".to_string(),
        };
        assert!(result.is_unchanged());
        assert_eq!(result.page(), None);
        assert_eq!(result.redirected_from(), None);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            NavigatorError::unknown_page("about").to_string(),
            "unknown page: 'about'"
        );
        let error = NavigatorError::IncompleteTable {
            table: "template table",
            missing: PageName::Models,
        };
        assert_eq!(
            error.to_string(),
            "template table has no entry for page 'models'"
        );
        assert_eq!(
            NavigatorError::missing_element("#nav-list").to_string(),
            "no element matches '#nav-list'"
        );
    }
}
