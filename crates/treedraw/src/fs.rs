#![forbid(unsafe_code)]

//! Filesystem trees.
//!
//! [`walk`] mirrors a directory hierarchy into a [`Tree`] of names so it
//! can be drawn like any other tree.

use std::fs;
use std::io;
use std::path::Path;

use crate::tree::{NodeId, Tree};

/// Options for [`walk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    /// How many directory levels below the starting path to expand.
    pub max_depth: usize,
    /// Include entries whose name starts with `.`.
    pub include_hidden: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            max_depth: 3,
            include_hidden: false,
        }
    }
}

/// Build a tree of file names rooted at `path`.
///
/// Directories are labeled with a trailing `/` and their entries are sorted
/// by name. Symbolic links are not followed. A directory that cannot be
/// read becomes a leaf; only a failure on `path` itself is an error.
pub fn walk(path: impl AsRef<Path>, options: &WalkOptions) -> io::Result<Tree<String>> {
    let path = path.as_ref();
    let meta = fs::symlink_metadata(path)?;
    let mut tree = Tree::new(label(path, meta.is_dir()));
    if meta.is_dir() {
        let root = tree.root();
        expand(&mut tree, root, path, 0, options)?;
    }
    treedraw_render::debug!(nodes = tree.len(), path = %path.display(), "walked directory");
    Ok(tree)
}

fn label(path: &Path, is_dir: bool) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    if is_dir && !name.ends_with('/') {
        format!("{name}/")
    } else {
        name
    }
}

fn expand(
    tree: &mut Tree<String>,
    node: NodeId,
    dir: &Path,
    depth: usize,
    options: &WalkOptions,
) -> io::Result<()> {
    if depth >= options.max_depth {
        return Ok(());
    }
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if hidden && !options.include_hidden {
            continue;
        }
        let is_dir = entry.file_type()?.is_dir();
        entries.push((entry.path(), is_dir));
    }
    entries.sort();

    for (path, is_dir) in entries {
        let child = tree.add_child(node, label(&path, is_dir));
        if !is_dir {
            continue;
        }
        if let Err(_err) = expand(tree, child, &path, depth + 1, options) {
            treedraw_render::warn!(
                path = %path.display(),
                error = %_err,
                "skipping unreadable directory"
            );
        }
    }
    Ok(())
}
