use anyhow::{Context, anyhow};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::core::walk::ListOptions;

#[derive(Parser, Debug)]
#[command(name = "lstree")]
#[command(about = "List directory contents, optionally as a recursive tree", long_about = None)]
pub struct Cli {
    /// Show all entries, including those starting with '.'
    #[arg(short = 'a')]
    pub all: bool,

    /// Use the long listing format
    #[arg(short = 'l')]
    pub long: bool,

    /// Indent entries as a recursive tree
    #[arg(short = 'R', long = "tree")]
    pub tree: bool,

    /// Sort entries alphabetically
    #[arg(short = 'b')]
    pub sort: bool,

    /// Directories to list (defaults to the directory holding this executable)
    pub paths: Vec<PathBuf>,
}

/// Where a run starts listing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Targets {
    /// No paths were given; the directory is echoed before its listing.
    ExecutableDir(PathBuf),
    /// Each path gets a `<path>:` header.
    Explicit(Vec<PathBuf>),
}

impl Cli {
    pub fn options(&self) -> ListOptions {
        ListOptions {
            show_all: self.all,
            long_format: self.long,
            tree_format: self.tree,
            sort_alpha: self.sort,
        }
    }

    pub fn targets(&self) -> anyhow::Result<Targets> {
        if !self.paths.is_empty() {
            return Ok(Targets::Explicit(self.paths.clone()));
        }

        let exe = std::env::current_exe().context("cannot resolve executable path")?;
        let dir = exe
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| anyhow!("{}: executable has no parent directory", exe.display()))?;
        Ok(Targets::ExecutableDir(dir))
    }
}
