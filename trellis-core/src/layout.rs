//! View layout — where fragments live and how their names are derived.
//!
//! # Default view tree
//!
//! ```text
//! layouts/
//!   base.html.tera          -> layout "base"
//! pages/
//!   index.html.tera         -> page "index"
//!   auth/login.html.tera    -> page "auth/login"
//! shared/
//!   nav.html.tera           (appended to every composed template)
//! ```
//!
//! Composed names are `"<layoutShort>:<pageShort>"`, e.g. `base:auth/login`.
//!
//! A layout may be stored as YAML; missing keys take their defaults:
//!
//! ```yaml
//! pages_root: views/pages
//! autoescape: false
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::LayoutError;
use crate::types::{base_name, FragmentRole};

/// Roots, extensions and escaping policy for one view set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewLayout {
    pub layouts_root: String,
    pub pages_root: String,
    pub shared_root: String,
    /// Final extension a file needs to be picked up by the scanner (no dot).
    pub fragment_extension: String,
    /// Double suffix every layout/page file name must end in.
    pub name_marker: String,
    /// HTML-escape expression output in every composed template.
    pub autoescape: bool,
}

impl Default for ViewLayout {
    fn default() -> Self {
        Self {
            layouts_root: "layouts".to_string(),
            pages_root: "pages".to_string(),
            shared_root: "shared".to_string(),
            fragment_extension: "tera".to_string(),
            name_marker: ".html.tera".to_string(),
            autoescape: true,
        }
    }
}

impl ViewLayout {
    /// Load a layout from a YAML file.
    ///
    /// Returns `LayoutError::Io` if unreadable, `LayoutError::Parse`
    /// (with path + line context) if malformed.
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let contents = std::fs::read_to_string(path).map_err(|e| LayoutError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml(&contents).map_err(|e| LayoutError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit; treat it as all defaults.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    /// Root directory scanned for fragments of `role`, without trailing slash.
    pub fn root(&self, role: FragmentRole) -> &str {
        let root = match role {
            FragmentRole::Layout => &self.layouts_root,
            FragmentRole::Page => &self.pages_root,
            FragmentRole::Shared => &self.shared_root,
        };
        root.trim_end_matches('/')
    }

    /// `layouts/base.html.tera` -> `base`.
    ///
    /// Only the base name counts, so nested layouts share the flat namespace.
    /// `None` when the marker is missing or nothing precedes it.
    pub fn layout_short<'a>(&self, path: &'a str) -> Option<&'a str> {
        self.strip_marker(base_name(path))
    }

    /// `pages/auth/login.html.tera` -> `auth/login`.
    pub fn page_short<'a>(&self, path: &'a str) -> Option<&'a str> {
        let root = self.root(FragmentRole::Page);
        let rel = if root.is_empty() {
            path
        } else {
            path.strip_prefix(root)
                .and_then(|rest| rest.strip_prefix('/'))
                .unwrap_or(path)
        };
        self.strip_marker(rel)
    }

    fn strip_marker<'a>(&self, name: &'a str) -> Option<&'a str> {
        name.strip_suffix(self.name_marker.as_str())
            .filter(|stem| !stem.is_empty() && !stem.ends_with('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("layouts/base.html.tera", Some("base"))]
    #[case("layouts/nested/admin.html.tera", Some("admin"))]
    #[case("layouts/base.tera", None)]
    #[case("layouts/base.html", None)]
    #[case("layouts/.html.tera", None)]
    fn layout_short_names(#[case] path: &str, #[case] expected: Option<&str>) {
        assert_eq!(ViewLayout::default().layout_short(path), expected);
    }

    #[rstest]
    #[case("pages/index.html.tera", Some("index"))]
    #[case("pages/auth/login.html.tera", Some("auth/login"))]
    #[case("pages/a/b/c.html.tera", Some("a/b/c"))]
    #[case("pages/auth/login.txt.tera", None)]
    #[case("pages/auth/.html.tera", None)]
    fn page_short_names(#[case] path: &str, #[case] expected: Option<&str>) {
        assert_eq!(ViewLayout::default().page_short(path), expected);
    }

    #[test]
    fn page_short_respects_custom_root() {
        let layout = ViewLayout {
            pages_root: "views/pages/".to_string(),
            ..ViewLayout::default()
        };
        assert_eq!(
            layout.page_short("views/pages/auth/signup.html.tera"),
            Some("auth/signup")
        );
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let layout = ViewLayout::from_yaml("pages_root: views/pages\nautoescape: false\n").unwrap();
        assert_eq!(layout.pages_root, "views/pages");
        assert!(!layout.autoescape);
        assert_eq!(layout.layouts_root, "layouts");
        assert_eq!(layout.name_marker, ".html.tera");
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(ViewLayout::from_yaml("  \n").unwrap(), ViewLayout::default());
    }
}
