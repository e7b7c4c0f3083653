use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write calendar file: {0}")]
    WriteError(#[from] std::io::Error),
}

pub struct OutputFile {
    path: PathBuf,
}

impl OutputFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, contents: &str) -> Result<(), OutputError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}
