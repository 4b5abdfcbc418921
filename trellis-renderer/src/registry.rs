//! Immutable, name-keyed store of composed templates.
//!
//! Only [`compose`](crate::composer::compose) can build a [`Registry`]; once
//! built there is no way to add, replace, or remove an entry. Every render
//! reads from it without locking.

use std::collections::BTreeMap;

use tera::Tera;

use trellis_core::TemplateName;

/// One layout + one page + every shared fragment, compiled as a single unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedTemplate {
    pub name: TemplateName,
    /// Concatenated source exactly as compiled.
    pub source: String,
    /// Page base file name, e.g. `login.html.tera`.
    pub label: String,
    pub layout_path: String,
    pub page_path: String,
}

/// Compiled templates keyed by `"<layout>:<page>"`.
///
/// The Tera instance holds the compiled form of every entry (under the same
/// name) plus the bound helper functions.
pub struct Registry {
    tera: Tera,
    templates: BTreeMap<String, ComposedTemplate>,
}

impl Registry {
    pub(crate) fn from_parts(tera: Tera, templates: BTreeMap<String, ComposedTemplate>) -> Self {
        Self { tera, templates }
    }

    pub fn lookup(&self, name: &str) -> Option<&ComposedTemplate> {
        self.templates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComposedTemplate> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub(crate) fn tera(&self) -> &Tera {
        &self.tera
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("templates", &self.templates.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
