//! Error types for the dummy-items crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading an item catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    /// The catalogue file could not be read.
    #[error("failed to read item catalogue at '{path}': {message}")]
    IoError {
        /// Path to the catalogue file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The catalogue JSON is malformed or missing required fields.
    #[error("invalid item catalogue JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The catalogue version is not supported.
    #[error("unsupported item catalogue version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the catalogue.
        actual: u32,
    },

    /// The catalogue lists no items.
    #[error("item catalogue contains no items")]
    EmptyItems,

    /// An item name is empty or only whitespace.
    #[error("blank item name at index {index}")]
    BlankItem {
        /// Index of the blank entry.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_formats_correctly() {
        let err = CatalogueError::IoError {
            path: PathBuf::from("/tmp/items.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read item catalogue at '/tmp/items.json': file not found"
        );
    }

    #[test]
    fn version_error_formats_correctly() {
        let err = CatalogueError::UnsupportedVersion {
            expected: 1,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "unsupported item catalogue version: expected 1, found 3"
        );
    }

    #[test]
    fn blank_item_formats_correctly() {
        let err = CatalogueError::BlankItem { index: 2 };
        assert_eq!(err.to_string(), "blank item name at index 2");
    }
}
