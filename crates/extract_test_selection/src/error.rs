// crates/extract_test_selection/src/error.rs

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The only two ways a run can fail. A missing or malformed marker is not one of them.
#[derive(Error, Debug)]
pub enum SelectionError {
    /// The pull-request body could not be opened or a line could not be read.
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or written.
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SelectionError {
    pub fn path(&self) -> &Path {
        match self {
            SelectionError::Read { path, .. } | SelectionError::Write { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, SelectionError>;
