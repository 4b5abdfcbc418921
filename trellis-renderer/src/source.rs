//! Read-only view sources the scanner walks.
//!
//! Paths are slash-separated and relative to the source root. Directory
//! listings come back sorted by name so scan order is reproducible.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::PathBuf;

/// One directory listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    /// Full path from the source root, e.g. `pages/auth/login.html.tera`.
    pub path: String,
    pub is_dir: bool,
}

/// A read-only filesystem holding view fragments.
pub trait ViewSource {
    /// List the direct children of `path`, sorted by name.
    fn read_dir(&self, path: &str) -> io::Result<Vec<ViewEntry>>;

    /// Read a file's full contents.
    fn read(&self, path: &str) -> io::Result<String>;
}

fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}

// ---------------------------------------------------------------------------
// EmbeddedSource
// ---------------------------------------------------------------------------

/// View set baked into the binary, typically from a table of `include_str!` entries:
///
/// ```rust
/// use trellis_renderer::EmbeddedSource;
///
/// const VIEWS: &[(&str, &str)] = &[
///     ("layouts/base.html.tera", "<main>{{ title }}</main>"),
///     ("pages/index.html.tera", "<p>home</p>"),
/// ];
///
/// let views = EmbeddedSource::from_static(VIEWS);
/// assert_eq!(views.len(), 2);
/// ```
///
/// Directories exist as path prefixes of stored files. An empty directory,
/// such as a `shared/` root with no partials, is declared with
/// [`with_dir`](Self::with_dir).
#[derive(Debug, Clone, Default)]
pub struct EmbeddedSource {
    files: BTreeMap<String, String>,
    dirs: BTreeSet<String>,
}

impl EmbeddedSource {
    pub fn from_static(files: &[(&str, &str)]) -> Self {
        files.iter().map(|(p, c)| (*p, *c)).collect()
    }

    /// Declare `path` as a directory even if no file lives under it.
    pub fn with_dir(mut self, path: impl Into<String>) -> Self {
        self.dirs.insert(path.into().trim_matches('/').to_string());
        self
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<P: Into<String>, C: Into<String>> FromIterator<(P, C)> for EmbeddedSource {
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        let files = iter
            .into_iter()
            .map(|(p, c)| (p.into().trim_matches('/').to_string(), c.into()))
            .collect();
        Self {
            files,
            dirs: BTreeSet::new(),
        }
    }
}

impl ViewSource for EmbeddedSource {
    fn read_dir(&self, path: &str) -> io::Result<Vec<ViewEntry>> {
        let dir = path.trim_matches('/');
        if self.files.contains_key(dir) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{dir} is not a directory"),
            ));
        }
        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{dir}/")
        };

        // Path -> is_dir. The map keeps children sorted and deduplicated.
        let mut children: BTreeMap<String, bool> = BTreeMap::new();
        let files = self.files.keys().map(|k| (k, false));
        let dirs = self.dirs.iter().map(|d| (d, true));
        for (key, is_dir) in files.chain(dirs) {
            let Some(rest) = key.strip_prefix(prefix.as_str()) else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }
            match rest.split_once('/') {
                Some((child, _)) => children.insert(join(dir, child), true),
                None => children.insert(key.clone(), is_dir),
            };
        }

        if children.is_empty() && !self.dirs.contains(dir) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no embedded directory {dir}"),
            ));
        }
        Ok(children
            .into_iter()
            .map(|(path, is_dir)| ViewEntry { path, is_dir })
            .collect())
    }

    fn read(&self, path: &str) -> io::Result<String> {
        self.files.get(path.trim_matches('/')).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no embedded file {path}"),
            )
        })
    }
}

// ---------------------------------------------------------------------------
// DirSource
// ---------------------------------------------------------------------------

/// View set read from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|c| !c.is_empty())
            .fold(self.root.clone(), |acc, c| acc.join(c))
    }
}

impl ViewSource for DirSource {
    fn read_dir(&self, path: &str) -> io::Result<Vec<ViewEntry>> {
        let dir = path.trim_matches('/');
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(self.resolve(dir))? {
            let entry = entry?;
            let name = entry.file_name().into_string().map_err(|raw| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("non UTF-8 file name {}", raw.to_string_lossy()),
                )
            })?;
            // Follows symlinks, unlike `DirEntry::metadata`.
            let meta = std::fs::metadata(entry.path())?;
            entries.push(ViewEntry {
                path: join(dir, &name),
                is_dir: meta.is_dir(),
            });
        }
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn read(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(self.resolve(path))
    }
}
