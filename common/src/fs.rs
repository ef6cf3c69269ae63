use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub trait FsExt: AsRef<Path> {
    /// Resolves the path against the current working directory. Absolute paths are returned as is.
    fn relative_to_cwd(&self) -> Result<PathBuf> {
        let cwd_dir = std::env::current_dir()?;

        Ok(cwd_dir.join(self))
    }

    /// Creates the directory a file at this path would live in.
    fn create_parent_dir(&self) -> Result<()> {
        match self.as_ref().parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory {:?}", dir)),
            _ => Ok(()),
        }
    }
}

impl FsExt for String {}

impl FsExt for &str {}

impl FsExt for PathBuf {}

impl FsExt for Path {}
