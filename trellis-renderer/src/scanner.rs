//! Fragment scanner — recursive discovery of fragment paths under one root.

use trellis_core::types::base_name;
use trellis_core::FragmentRole;

use crate::error::{io_err, InitError};
use crate::source::ViewSource;

/// Collect every file under `root` whose final extension is `extension`.
///
/// Directories are descended into, never returned. Paths come back in
/// traversal order (entries sorted by name within each directory). Any
/// traversal error is fatal: a bundled view set cannot heal itself.
pub fn scan(
    source: &dyn ViewSource,
    root: &str,
    role: FragmentRole,
    extension: &str,
) -> Result<Vec<String>, InitError> {
    let mut out = Vec::new();
    collect_fragments(source, root.trim_matches('/'), extension, &mut out)?;
    tracing::debug!(%role, root, count = out.len(), "scanned fragment root");
    Ok(out)
}

fn collect_fragments(
    source: &dyn ViewSource,
    dir: &str,
    extension: &str,
    out: &mut Vec<String>,
) -> Result<(), InitError> {
    let entries = source.read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        if entry.is_dir {
            collect_fragments(source, &entry.path, extension, out)?;
        } else if has_extension(&entry.path, extension) {
            out.push(entry.path);
        }
    }
    Ok(())
}

fn has_extension(path: &str, extension: &str) -> bool {
    base_name(path)
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext == extension)
}
