//! Domain types for fragment composition.
//!
//! Fragment paths are slash-separated strings relative to the view source root,
//! never `PathBuf`: bundled view sets have no host filesystem behind them.

use std::fmt;

// ---------------------------------------------------------------------------
// FragmentRole
// ---------------------------------------------------------------------------

/// Which of the three view roots a fragment was discovered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentRole {
    /// Outer shell; one per composed template.
    Layout,
    /// Page body; one per composed template.
    Page,
    /// Partial appended to every composed template.
    Shared,
}

impl fmt::Display for FragmentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FragmentRole::Layout => "layout",
            FragmentRole::Page => "page",
            FragmentRole::Shared => "shared",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Fragment
// ---------------------------------------------------------------------------

/// One template source file, read once during initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub path: String,
    pub role: FragmentRole,
    pub content: String,
}

impl Fragment {
    pub fn new(path: impl Into<String>, role: FragmentRole, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            role,
            content: content.into(),
        }
    }

    /// Final path component (`auth/login.html.tera` -> `login.html.tera`).
    pub fn base_name(&self) -> &str {
        base_name(&self.path)
    }
}

/// Final component of a slash-separated path.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

// ---------------------------------------------------------------------------
// NamingRule
// ---------------------------------------------------------------------------

/// The naming rule a fragment filename violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingRule {
    /// Layout base names must end in the marker with a non-empty stem.
    LayoutMarker,
    /// Page paths must end in the marker with a non-empty stem.
    PageMarker,
}

impl fmt::Display for NamingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingRule::LayoutMarker => {
                f.write_str("layout file name must end in the template marker")
            }
            NamingRule::PageMarker => f.write_str("page file name must end in the template marker"),
        }
    }
}

// ---------------------------------------------------------------------------
// TemplateName
// ---------------------------------------------------------------------------

/// Key of a composed template: `"<layoutShort>:<pageShort>"`, e.g. `base:auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateName(pub String);

impl TemplateName {
    pub fn new(layout: &str, page: &str) -> Self {
        Self(format!("{layout}:{page}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Layout half of the name, or the whole name if it has no separator.
    pub fn layout(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(l, _)| l)
    }

    /// Page half of the name; empty if the name has no separator.
    pub fn page(&self) -> &str {
        self.0.split_once(':').map_or("", |(_, p)| p)
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TemplateName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TemplateName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for TemplateName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_name_splits_on_first_colon() {
        let name = TemplateName::new("base", "auth/login");
        assert_eq!(name.as_str(), "base:auth/login");
        assert_eq!(name.layout(), "base");
        assert_eq!(name.page(), "auth/login");
    }

    #[test]
    fn template_name_without_separator() {
        let name = TemplateName::from("orphan");
        assert_eq!(name.layout(), "orphan");
        assert_eq!(name.page(), "");
    }

    #[test]
    fn fragment_base_name() {
        let f = Fragment::new("pages/auth/login.html.tera", FragmentRole::Page, "");
        assert_eq!(f.base_name(), "login.html.tera");
        assert_eq!(base_name("top.html.tera"), "top.html.tera");
    }

    #[test]
    fn role_displays_lowercase() {
        assert_eq!(FragmentRole::Layout.to_string(), "layout");
        assert_eq!(FragmentRole::Shared.to_string(), "shared");
    }
}
