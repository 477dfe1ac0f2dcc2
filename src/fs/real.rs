use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::os::unix::fs::MetadataExt;
use std::path::Path;
use tokio::task;

use crate::models::{EntryMetadata, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let handle = std::fs::read_dir(&dir)?;

            // std omits the self and parent links that a raw readdir yields first.
            let mut entries = vec![
                FsEntry {
                    path: dir.join("."),
                    name: ".".into(),
                },
                FsEntry {
                    path: dir.join(".."),
                    name: "..".into(),
                },
            ];
            for entry in handle {
                let entry = entry.context("enumerating entries")?;
                entries.push(FsEntry {
                    path: entry.path(),
                    name: entry.file_name(),
                });
            }
            Ok(entries)
        })
        .await?
    }

    async fn metadata(&self, path: &Path) -> Result<EntryMetadata> {
        let path = path.to_path_buf();
        task::spawn_blocking(move || {
            let metadata = std::fs::metadata(&path)?;
            Ok(EntryMetadata {
                mode: metadata.mode(),
                nlink: metadata.nlink(),
                uid: metadata.uid(),
                gid: metadata.gid(),
                size: metadata.size(),
                modified: DateTime::<Local>::from(metadata.modified()?),
            })
        })
        .await?
    }

    // passwd/group lookups may hit NSS backends, so they block like any other OS call.
    async fn user_name(&self, uid: u32) -> Option<String> {
        task::spawn_blocking(move || {
            uzers::get_user_by_uid(uid).map(|user| user.name().to_string_lossy().into_owned())
        })
        .await
        .ok()
        .flatten()
    }

    async fn group_name(&self, gid: u32) -> Option<String> {
        task::spawn_blocking(move || {
            uzers::get_group_by_gid(gid).map(|group| group.name().to_string_lossy().into_owned())
        })
        .await
        .ok()
        .flatten()
    }
}
