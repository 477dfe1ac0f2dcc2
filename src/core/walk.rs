use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, trace};

use crate::core::render::Renderer;
use crate::fs::FileSystem;
use crate::models::{FsEntry, Ownership};

/// Toggles resolved from the command line. Fixed for a whole run.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ListOptions {
    /// Include entries whose name starts with '.'
    pub show_all: bool,
    /// Render permissions, links, owner, group, size and mtime
    pub long_format: bool,
    /// Prefix each entry with depth indentation and a branch marker
    pub tree_format: bool,
    /// Sort entries by name instead of native enumeration order
    pub sort_alpha: bool,
}

/// List a directory and everything reachable below it.
///
/// Starts at depth 0. Each entry is rendered as soon as it has been stat'ed,
/// before any descent into it. Filesystem failures become diagnostics and never
/// abort the walk; only a failed write to `renderer` is returned.
pub async fn walk_dir<F: FileSystem, W: Write, E: Write>(
    fs: &F,
    dir: &Path,
    renderer: &mut Renderer<W, E>,
) -> io::Result<()> {
    walk_dir_internal(fs, dir, renderer, 0).await
}

async fn walk_dir_internal<F: FileSystem, W: Write, E: Write>(
    fs: &F,
    dir: &Path,
    renderer: &mut Renderer<W, E>,
    depth: usize,
) -> io::Result<()> {
    debug!(path = %dir.display(), depth, "reading directory");
    let options = *renderer.options();

    let mut entries = match fs.read_dir(dir).await {
        Ok(entries) => entries,
        Err(err) => {
            debug!(path = %dir.display(), error = %err, "directory unreadable");
            return renderer.diagnostic(dir, &format!("{err:#}"));
        }
    };

    if options.sort_alpha {
        entries.sort_by(|a, b| a.name_bytes().cmp(b.name_bytes()));
    }

    let visible: Vec<FsEntry> = entries
        .into_iter()
        .filter(|entry| options.show_all || !entry.is_hidden())
        .collect();

    for entry in &visible {
        trace!(path = %entry.path.display(), "stat");

        let metadata = fs.metadata(&entry.path).await.map_err(|err| {
            debug!(path = %entry.path.display(), error = %err, "stat failed");
            format!("{err:#}")
        });

        let ownership = match (&metadata, options.long_format) {
            (Ok(metadata), true) => Some(Ownership {
                user: fs.user_name(metadata.uid).await,
                group: fs.group_name(metadata.gid).await,
            }),
            _ => None,
        };

        renderer.entry(entry, depth, &metadata, ownership.as_ref())?;

        let descend =
            matches!(&metadata, Ok(metadata) if metadata.is_dir()) && !entry.is_dot_link();
        if descend {
            Box::pin(walk_dir_internal(fs, &entry.path, renderer, depth + 1)).await?;
        }
    }

    Ok(())
}
