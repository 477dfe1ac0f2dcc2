use std::ffi::OsString;
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;

use chrono::{DateTime, Local};

const S_IFMT: u32 = 0o170_000;
const S_IFDIR: u32 = 0o040_000;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    /// Raw name as enumerated; never lossily converted.
    pub name: OsString,
}

impl FsEntry {
    pub fn name_bytes(&self) -> &[u8] {
        self.name.as_bytes()
    }

    pub fn is_hidden(&self) -> bool {
        self.name_bytes().first() == Some(&b'.')
    }

    /// `.` and `..` are listed but never descended into.
    pub fn is_dot_link(&self) -> bool {
        self.name == "." || self.name == ".."
    }
}

/// Result of a symlink-following stat on one entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryMetadata {
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    pub modified: DateTime<Local>,
}

impl EntryMetadata {
    pub fn is_dir(&self) -> bool {
        is_dir_mode(self.mode)
    }
}

pub fn is_dir_mode(mode: u32) -> bool {
    mode & S_IFMT == S_IFDIR
}

/// Owner and group names; `None` when the id has no entry in the user or group database.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Ownership {
    pub user: Option<String>,
    pub group: Option<String>,
}
