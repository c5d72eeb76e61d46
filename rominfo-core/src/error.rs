use thiserror::Error;

/// Errors that can occur while decoding a ROM or disc image header.
///
/// Only [`RomInfoError::Io`] ever reaches the caller of a path-based parse.
/// Every other variant describes input that simply is not (or not fully)
/// the format being tried, and is folded into an empty property map.
#[derive(Debug, Error)]
pub enum RomInfoError {
    /// I/O error while reading the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data does not carry this format's signature
    #[error("Format mismatch: {0}")]
    FormatMismatch(String),

    /// A field or window extends past the end of the buffer
    #[error("Truncated input: need {needed} bytes at offset {offset:#X}, buffer has {available}")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// The data is internally inconsistent
    #[error("Malformed structure: {0}")]
    MalformedStructure(String),

    /// Recognized sub-format that is not decoded
    #[error("Unsupported variant: {0}")]
    UnsupportedVariant(String),
}

impl RomInfoError {
    pub fn mismatch(msg: impl Into<String>) -> Self {
        Self::FormatMismatch(msg.into())
    }

    pub fn truncated(offset: usize, needed: usize, available: usize) -> Self {
        Self::Truncated {
            offset,
            needed,
            available,
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedStructure(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedVariant(msg.into())
    }

    /// True for errors that must propagate instead of becoming an empty map.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
