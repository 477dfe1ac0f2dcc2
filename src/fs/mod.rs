mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::{EntryMetadata, FsEntry};

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Entries of `dir` in native enumeration order, `.` and `..` included.
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;

    /// Symlink-following stat.
    async fn metadata(&self, path: &Path) -> Result<EntryMetadata>;

    /// `None` when the uid has no passwd entry.
    async fn user_name(&self, uid: u32) -> Option<String>;

    async fn group_name(&self, gid: u32) -> Option<String>;
}
