//! Error types for specdoc library.

use crate::model::ItemList;
use std::io;
use thiserror::Error;

/// Result type alias for specdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering a catalogue.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The output document cannot be created, written or finalized.
    #[error("Cannot write document to {path}: {reason}")]
    SinkUnavailable {
        /// Target path
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// A catalogue item has no code text after trimming.
    #[error("Malformed catalogue entry: {entity} {list}[{index}] has empty code")]
    MalformedCatalogueEntry {
        /// Name of the entity holding the item
        entity: String,
        /// List the item belongs to
        list: ItemList,
        /// 0-based position of the item in its list
        index: usize,
    },

    /// The catalogue file could not be decoded.
    #[error("Catalogue error: {0}")]
    Catalogue(String),

    /// Error building the DOCX container.
    #[error("Archive error: {0}")]
    Archive(String),

    /// Error serializing document markup.
    #[error("XML error: {0}")]
    Xml(String),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::Archive(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MalformedCatalogueEntry {
            entity: "Order".to_string(),
            list: ItemList::Fields,
            index: 2,
        };
        assert_eq!(
            err.to_string(),
            "Malformed catalogue entry: Order fields[2] has empty code"
        );

        let err = Error::SinkUnavailable {
            path: "/nope/out.docx".to_string(),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot write document to /nope/out.docx: permission denied"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_zip_error_conversion() {
        let err: Error = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, Error::Archive(_)));
    }
}
