//! Error types and process exit codes

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Process exit codes shared by every tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    Usage = 1,
    NoFile = 2,
    ShortRead = 3,
    Alloc = 4,
    Io = 5,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Error raised while reading, transforming or writing a ROM image
#[derive(Error, Debug)]
pub enum RomError {
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("short read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    #[error("image too small: need at least {needed} bytes, got {actual}")]
    TooSmall { needed: usize, actual: usize },

    #[error("could not allocate {size} bytes")]
    Alloc { size: usize },

    #[error("{message}")]
    Usage { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RomError {
    pub fn open(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn create(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Create {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn short_read(expected: usize, actual: usize) -> Self {
        Self::ShortRead { expected, actual }
    }

    pub fn too_small(needed: usize, actual: usize) -> Self {
        Self::TooSmall { needed, actual }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            RomError::Usage { .. } => ExitCode::Usage,
            RomError::Open { .. } | RomError::Create { .. } => ExitCode::NoFile,
            RomError::ShortRead { .. } | RomError::TooSmall { .. } => ExitCode::ShortRead,
            RomError::Alloc { .. } => ExitCode::Alloc,
            RomError::Io(_) => ExitCode::Io,
        }
    }
}

pub type RomResult<T> = Result<T, RomError>;
