mod entry;

pub use entry::{EntryMetadata, FsEntry, Ownership, is_dir_mode};
