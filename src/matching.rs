//! Route patterns, fragment normalization and URL building.
//!
//! Patterns are matched against a *fragment*: the URL path with the
//! application root removed and no leading slash (`views.html`, `""` for the
//! root page).
//!
//! # Pattern syntax
//!
//! - `literal` segments must match exactly
//! - `:name` matches exactly one segment and captures it as `name`
//! - `*name` matches the rest of the fragment, possibly empty, and captures it
//!
//! ```
//! use page_navigator::matching::RoutePattern;
//!
//! let pattern = RoutePattern::parse("*path");
//! assert!(pattern.is_catch_all());
//! let params = pattern.matches("old/index.html").unwrap();
//! assert_eq!(params.get("path"), Some(&"old/index.html".to_string()));
//!
//! assert!(RoutePattern::parse("views.html").matches("views.html").is_some());
//! assert!(RoutePattern::parse("").matches("views.html").is_none());
//! ```

use crate::params::{decode_uri_component, RouteParams};
use std::borrow::Cow;
use std::fmt;

/// One segment of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
    Splat(String),
}

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern. Anything after a splat segment is ignored.
    pub fn parse(pattern: &str) -> Self {
        let mut segments = Vec::new();
        for seg in split_path(pattern) {
            if let Some(name) = extract_splat_name(seg) {
                segments.push(Segment::Splat(name.to_string()));
                break;
            } else if let Some(name) = extract_param_name(seg) {
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Literal(seg.to_string()));
            }
        }
        Self {
            source: pattern.to_string(),
            segments,
        }
    }

    /// The pattern as it was registered.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Parsed segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// `true` for a pattern consisting of a single splat, which matches
    /// every fragment.
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Splat(_)])
    }

    /// Match a normalized fragment (no query string), returning the captures.
    pub fn matches(&self, fragment: &str) -> Option<RouteParams> {
        let path_segments = split_path(fragment);
        let mut params = RouteParams::new();

        for (i, route_seg) in self.segments.iter().enumerate() {
            match route_seg {
                Segment::Splat(name) => {
                    let rest = path_segments.get(i..).unwrap_or_default().join("/");
                    params.insert(name.clone(), decode_uri_component(&rest));
                    return Some(params);
                }
                Segment::Param(name) => {
                    let value = path_segments.get(i)?;
                    params.insert(name.clone(), decode_uri_component(value));
                }
                Segment::Literal(literal) => {
                    if path_segments.get(i) != Some(&literal.as_str()) {
                        return None;
                    }
                }
            }
        }

        (path_segments.len() == self.segments.len()).then_some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.source.is_empty() {
            f.write_str("(root)")
        } else {
            f.write_str(&self.source)
        }
    }
}

/// Split a path into segments, dropping empty ones.
///
/// ```
/// use page_navigator::matching::split_path;
///
/// assert_eq!(split_path("/docs/views.html"), vec!["docs", "views.html"]);
/// assert!(split_path("/").is_empty());
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Name of a `:name` segment.
pub fn extract_param_name(segment: &str) -> Option<&str> {
    segment.strip_prefix(':').filter(|name| !name.is_empty())
}

/// Name of a `*name` segment (a bare `*` yields an empty name).
pub fn extract_splat_name(segment: &str) -> Option<&str> {
    segment.strip_prefix('*')
}

/// Normalize an application root to `/segment/` form.
///
/// ```
/// use page_navigator::matching::normalize_root;
///
/// assert_eq!(normalize_root("modern-backbone"), "/modern-backbone/");
/// assert_eq!(normalize_root("//"), "/");
/// ```
pub fn normalize_root(root: &str) -> String {
    let trimmed = root.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

/// Normalize a fragment: strip a leading `#` or slashes, trailing slashes and
/// surrounding whitespace.
///
/// ```
/// use page_navigator::matching::normalize_fragment;
///
/// assert_eq!(normalize_fragment("/views.html/"), "views.html");
/// assert_eq!(normalize_fragment("#setup.html"), "setup.html");
/// assert_eq!(normalize_fragment("views.html"), "views.html");
/// ```
pub fn normalize_fragment(fragment: &str) -> Cow<'_, str> {
    let trimmed = fragment
        .trim()
        .trim_start_matches('#')
        .trim_matches('/');

    if trimmed.len() == fragment.len() {
        Cow::Borrowed(fragment)
    } else {
        Cow::Owned(trimmed.to_string())
    }
}

/// Fragment for a full URL path under `root` (which must be normalized).
///
/// Paths outside the root are routed on their full path. A query string is
/// kept; a `#...` suffix is not part of the route.
///
/// ```
/// use page_navigator::matching::fragment_for_url;
///
/// assert_eq!(fragment_for_url("/modern-backbone/views.html", "/modern-backbone/"), "views.html");
/// assert_eq!(fragment_for_url("/modern-backbone", "/modern-backbone/"), "");
/// assert_eq!(fragment_for_url("/modern-backbone?ref=mail", "/modern-backbone/"), "?ref=mail");
/// assert_eq!(fragment_for_url("/elsewhere.html", "/modern-backbone/"), "elsewhere.html");
/// ```
pub fn fragment_for_url(url: &str, root: &str) -> String {
    let url = url.split_once('#').map_or(url, |(head, _)| head);
    let bare_root = root.trim_end_matches('/');
    let rest = match url.strip_prefix(bare_root) {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '?']) => rest,
        _ => url,
    };
    normalize_fragment(rest).into_owned()
}

/// URL path for a fragment under `root` (which must be normalized).
///
/// The root page of a non-`/` root has no trailing slash.
///
/// ```
/// use page_navigator::matching::url_for_fragment;
///
/// assert_eq!(url_for_fragment("/modern-backbone/", "setup.html"), "/modern-backbone/setup.html");
/// assert_eq!(url_for_fragment("/modern-backbone/", ""), "/modern-backbone");
/// assert_eq!(url_for_fragment("/", ""), "/");
/// ```
pub fn url_for_fragment(root: &str, fragment: &str) -> String {
    if fragment.is_empty() && root != "/" {
        root.trim_end_matches('/').to_string()
    } else {
        format!("{root}{fragment}")
    }
}

/// Split a fragment into its path and query string, dropping any `#...`
/// suffix.
///
/// ```
/// use page_navigator::matching::split_query;
///
/// assert_eq!(split_query("views.html?step=2#top"), ("views.html", Some("step=2")));
/// assert_eq!(split_query("views.html"), ("views.html", None));
/// ```
pub fn split_query(fragment: &str) -> (&str, Option<&str>) {
    let without_hash = fragment.split_once('#').map_or(fragment, |(head, _)| head);
    match without_hash.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (without_hash, None),
    }
}
