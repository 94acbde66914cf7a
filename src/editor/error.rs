//! Editor error types

use crate::store::error::StoreError;
use thiserror::Error;

/// Errors from reading an image for a card face
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The file could not be read
    #[error("Failed to read image {name}: {reason}")]
    Read { name: String, reason: String },

    /// The file was read but holds no bytes
    #[error("Image {0} is empty")]
    Empty(String),
}

/// Errors from edit controller operations
#[derive(Error, Debug)]
pub enum EditError {
    /// Persisting or loading the deck failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No card at the given position
    #[error("No card at index {index} (deck has {len} cards)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type alias for editor operations
pub type EditResult<T> = Result<T, EditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EditError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "No card at index 4 (deck has 2 cards)");

        let err = ImageError::Empty("cat.png".to_string());
        assert_eq!(err.to_string(), "Image cat.png is empty");
    }

    #[test]
    fn test_store_error_is_transparent() {
        let err: EditError = StoreError::Unavailable("quota exceeded".to_string()).into();
        assert_eq!(err.to_string(), "Storage unavailable: quota exceeded");
    }
}
