pub mod cli;
pub mod core;
pub mod fs;
pub mod logging;
pub mod models;

use std::io::{self, Write};

use crate::cli::Targets;
use crate::core::render::Renderer;
use crate::core::walk::{ListOptions, walk_dir};
use crate::fs::FileSystem;

/// List every target in order, with the headers and separators each kind of target gets.
pub async fn list_targets<F: FileSystem, W: Write, E: Write>(
    fs: &F,
    targets: &Targets,
    options: &ListOptions,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    match targets {
        Targets::ExecutableDir(dir) => {
            writeln!(out, "{}", dir.display())?;
            walk_dir(fs, dir, &mut Renderer::new(&mut *out, &mut *err, *options)).await
        }
        Targets::Explicit(paths) => {
            for (index, path) in paths.iter().enumerate() {
                if index > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{}:", path.display())?;
                walk_dir(fs, path, &mut Renderer::new(&mut *out, &mut *err, *options)).await?;
            }
            Ok(())
        }
    }
}
