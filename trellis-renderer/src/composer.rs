//! Template composer — layout × page cross product into a [`Registry`].
//!
//! # Composition
//!
//! For every layout `L` and every page `P`:
//!
//! ```text
//! name   = stripMarker(baseName(L)) ":" stripMarker(relPath(P, pages_root))
//! source = content(L) + content(P) + content(shared[0]) + … + content(shared[n])
//! ```
//!
//! Fragments are joined with no separator. Shared fragments keep scan order.
//! Any failure aborts composition; a partially built registry is never returned.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tera::Tera;

use trellis_core::{Fragment, FragmentRole, NamingRule, TemplateName, ViewLayout};

use crate::error::{io_err, InitError};
use crate::functions::FunctionMap;
use crate::registry::{ComposedTemplate, Registry};
use crate::scanner::scan;
use crate::source::ViewSource;
use crate::validate::first_unbound_function;

/// A layout or page fragment with its validated short name.
struct Named {
    short: String,
    fragment: Fragment,
}

/// Scan `source`, compose every (layout, page) pair, and compile the result.
pub fn compose(
    source: &dyn ViewSource,
    layout: &ViewLayout,
    funcs: &FunctionMap,
) -> Result<Registry, InitError> {
    let scan_role = |role| scan(source, layout.root(role), role, &layout.fragment_extension);
    let layout_paths = scan_role(FragmentRole::Layout)?;
    let page_paths = scan_role(FragmentRole::Page)?;
    let shared_paths = scan_role(FragmentRole::Shared)?;
    let shared_count = shared_paths.len();

    let layouts = named_fragments(source, layout, layout_paths, FragmentRole::Layout)?;
    let pages = named_fragments(source, layout, page_paths, FragmentRole::Page)?;
    let shared: String = read_fragments(source, shared_paths, FragmentRole::Shared)?
        .into_iter()
        .map(|f| f.content)
        .collect();

    let mut tera = Tera::default();
    if layout.autoescape {
        // Every suffix ends with "", so every composed name is escaped.
        tera.autoescape_on(vec![""]);
    } else {
        tera.autoescape_on(vec![]);
    }
    funcs.bind(&mut tera)?;

    let mut templates: BTreeMap<String, ComposedTemplate> = BTreeMap::new();
    for l in &layouts {
        for p in &pages {
            let name = TemplateName::new(&l.short, &p.short);
            let composed = ComposedTemplate {
                source: format!("{}{}{}", l.fragment.content, p.fragment.content, shared),
                label: p.fragment.base_name().to_string(),
                layout_path: l.fragment.path.clone(),
                page_path: p.fragment.path.clone(),
                name,
            };
            let slot = match templates.entry(composed.name.0.clone()) {
                Entry::Occupied(existing) => {
                    let first = existing.get();
                    return Err(InitError::DuplicateName {
                        name: composed.name.0,
                        first: format!("{} + {}", first.layout_path, first.page_path),
                        second: format!("{} + {}", composed.layout_path, composed.page_path),
                    });
                }
                Entry::Vacant(slot) => slot,
            };

            compile(&mut tera, &composed, funcs)?;
            tracing::debug!(
                name = %composed.name,
                bytes = composed.source.len(),
                "composed template"
            );
            slot.insert(composed);
        }
    }

    tracing::info!(
        layouts = layouts.len(),
        pages = pages.len(),
        shared = shared_count,
        templates = templates.len(),
        "view registry ready"
    );
    Ok(Registry::from_parts(tera, templates))
}

fn compile(
    tera: &mut Tera,
    composed: &ComposedTemplate,
    funcs: &FunctionMap,
) -> Result<(), InitError> {
    let name = composed.name.as_str();
    let compile_err = |source| InitError::Compile {
        name: name.to_string(),
        label: composed.label.clone(),
        source,
    };

    tera.add_raw_template(name, &composed.source).map_err(compile_err)?;
    let template = tera.get_template(name).map_err(compile_err)?;
    if let Some(function) = first_unbound_function(template, funcs) {
        return Err(InitError::UnboundFunction {
            name: name.to_string(),
            function,
        });
    }
    Ok(())
}

fn read_fragments(
    source: &dyn ViewSource,
    paths: Vec<String>,
    role: FragmentRole,
) -> Result<Vec<Fragment>, InitError> {
    paths
        .into_iter()
        .map(|path| {
            let content = source.read(&path).map_err(|e| io_err(&path, e))?;
            Ok(Fragment::new(path, role, content))
        })
        .collect()
}

fn named_fragments(
    source: &dyn ViewSource,
    layout: &ViewLayout,
    paths: Vec<String>,
    role: FragmentRole,
) -> Result<Vec<Named>, InitError> {
    let mut named = Vec::with_capacity(paths.len());
    for path in paths {
        let fragment = Fragment::new(path, role, String::new());
        let (short, rule) = match fragment.role {
            FragmentRole::Layout => (
                layout.layout_short(&fragment.path),
                NamingRule::LayoutMarker,
            ),
            _ => (layout.page_short(&fragment.path), NamingRule::PageMarker),
        };
        let Some(short) = short.map(str::to_string) else {
            return Err(InitError::MissingMarker {
                path: fragment.path,
                rule,
            });
        };
        named.push(Named { short, fragment });
    }
    // Names are validated for every file before any content is read.
    for n in &mut named {
        n.fragment.content = source
            .read(&n.fragment.path)
            .map_err(|e| io_err(&n.fragment.path, e))?;
    }
    Ok(named)
}
