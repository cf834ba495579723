//! Error types for loading art catalogs
//!
//! Rendering never fails, so the only errors in the crate come from reading
//! catalog files. Callers that want the never-fail behaviour use
//! [`crate::gallery::load_catalog`], which turns these into an empty catalog.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading an art catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error reading catalog {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog {}: {source}", path.display())]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Create a new IO error for the catalog at `path`
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create a new parse error for the catalog at `path`
    pub fn json_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::JsonError {
            path: path.into(),
            source,
        }
    }

    /// Path of the catalog that failed to load
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::IoError { path, .. } | Self::JsonError { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = CatalogError::io_error("arts.json", io_err);
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("arts.json"));
        assert!(error_msg.contains("File not found"));
        assert_eq!(error.path(), std::path::Path::new("arts.json"));
    }

    #[test]
    fn test_json_error() {
        let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let error = CatalogError::json_error("broken.json", json_err);
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Malformed catalog"));
        assert!(error_msg.contains("broken.json"));
    }
}
