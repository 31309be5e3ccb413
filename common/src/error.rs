//! Error types shared across the workspace.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, InventoryError>;

#[derive(Debug, Error)]
pub enum InventoryError {
    /// Any I/O failure while reading facts or materializing output. Fatal to the run.
    #[error("filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A host-fact file that does not have the expected tuple shape.
    #[error("malformed host fact {}: {reason}", .path.display())]
    MalformedFact {
        path: PathBuf,
        #[source]
        reason: FactError,
    },

    #[error("malformed inventory {}:{line}: {reason}", .path.display())]
    MalformedInventory {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A dynamic-inventory JSON document that cannot be converted.
    #[error("malformed dynamic inventory {}: {reason}", .path.display())]
    MalformedDynamic { path: PathBuf, reason: String },
}

impl InventoryError {
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// `true` for errors the fact loader recovers from by skipping the file.
    pub fn is_malformed_fact(&self) -> bool {
        matches!(self, Self::MalformedFact { .. })
    }
}

/// Reasons a host-fact tuple is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactError {
    #[error("no tuple found")]
    Empty,
    #[error("file is not valid UTF-8")]
    NotUtf8,
    #[error("expected {expected} at offset {offset}, found {found}")]
    Unexpected {
        offset: usize,
        expected: &'static str,
        found: String,
    },
    #[error("unterminated string starting at offset {0}")]
    UnterminatedString(usize),
    #[error("unexpected trailing input at offset {0}")]
    TrailingInput(usize),
    #[error("expected a 3-tuple (name, addresses, os), found {0} elements")]
    Arity(usize),
    #[error("{0} must be a string")]
    NotAString(&'static str),
    #[error("{0} must be a list of strings")]
    NotAStringList(&'static str),
    #[error("'{0}' is not a dotted-quad IPv4 address")]
    InvalidAddress(String),
    #[error("os descriptor must be [distro, release], found {0} items")]
    OsDescriptor(usize),
    #[error("'{0}' cannot be used as a directory name")]
    InvalidPathComponent(String),
    #[error("host name {0:?} cannot appear in an inventory header")]
    InvalidHostName(String),
}

/// Attaches the offending path to a raw I/O result.
pub trait IoResultExt<T> {
    fn at_path(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at_path(self, path: &Path) -> Result<T> {
        self.map_err(|source| InventoryError::filesystem(path, source))
    }
}
