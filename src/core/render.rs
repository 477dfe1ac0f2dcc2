use std::ffi::OsStr;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use chrono::{DateTime, TimeZone};

use crate::core::walk::ListOptions;
use crate::models::{EntryMetadata, FsEntry, Ownership, is_dir_mode};

const PLACEHOLDER: &str = "-";
const PERMISSION_BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

/// Writes entries to `out` and failures to `err` as the walk reaches them.
pub struct Renderer<W, E> {
    out: W,
    err: E,
    options: ListOptions,
}

impl<W: Write, E: Write> Renderer<W, E> {
    pub fn new(out: W, err: E, options: ListOptions) -> Self {
        Self { out, err, options }
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// One entry line. A failed stat in long format replaces the line with a diagnostic.
    pub fn entry(
        &mut self,
        entry: &FsEntry,
        depth: usize,
        metadata: &Result<EntryMetadata, String>,
        ownership: Option<&Ownership>,
    ) -> io::Result<()> {
        match (metadata, self.options.long_format) {
            (Ok(metadata), true) => {
                self.write_tree_prefix(depth)?;
                let ownership = ownership.cloned().unwrap_or_default();
                self.out
                    .write_all(&long_line(&entry.name, metadata, &ownership))?;
                self.out.write_all(b"\n")
            }
            (Err(error), true) => self.diagnostic(&entry.path, error),
            (metadata, false) => {
                self.write_tree_prefix(depth)?;
                self.out.write_all(entry.name_bytes())?;
                self.out.write_all(b"\n")?;
                if let Err(error) = metadata {
                    self.diagnostic(&entry.path, error)?;
                }
                Ok(())
            }
        }
    }

    pub fn diagnostic(&mut self, path: &Path, error: &str) -> io::Result<()> {
        self.out.flush()?;
        writeln!(self.err, "lstree: {}: {error}", path.display())
    }

    fn write_tree_prefix(&mut self, depth: usize) -> io::Result<()> {
        if self.options.tree_format {
            self.out.write_all(tree_prefix(depth).as_bytes())?;
        }
        Ok(())
    }
}

/// Two spaces per level, then the branch marker.
pub fn tree_prefix(depth: usize) -> String {
    format!("{}|-- ", "  ".repeat(depth))
}

/// `drwxr-xr-x` style rendering of `mode`. Only directories get a type letter.
pub fn permission_string(mode: u32) -> String {
    let mut rendered = String::with_capacity(10);
    rendered.push(if is_dir_mode(mode) { 'd' } else { '-' });
    for (bit, letter) in PERMISSION_BITS {
        rendered.push(if mode & bit != 0 { letter } else { '-' });
    }
    rendered
}

pub fn format_mtime<Tz: TimeZone>(modified: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    modified.format("%b %d %H:%M").to_string()
}

/// Long-format line without the trailing newline. The name is copied byte for byte.
pub fn long_line(name: &OsStr, metadata: &EntryMetadata, ownership: &Ownership) -> Vec<u8> {
    let mut line = format!(
        "{} {} {} {} {:>5} {} ",
        permission_string(metadata.mode),
        metadata.nlink,
        ownership.user.as_deref().unwrap_or(PLACEHOLDER),
        ownership.group.as_deref().unwrap_or(PLACEHOLDER),
        metadata.size,
        format_mtime(&metadata.modified),
    )
    .into_bytes();
    line.extend_from_slice(name.as_bytes());
    line
}
