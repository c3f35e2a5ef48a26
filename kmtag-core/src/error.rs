// Error types for kmtag
//
// Only conversions from raw numbers can fail at runtime. Mismatches between
// a tag and its payload are rejected by the compiler and never reach here.

use std::error::Error;
use std::fmt;

/// Errors raised while interpreting raw numbers as catalog values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// Number is not a declared tag identity, current or legacy.
    UnknownTag(u32),
    /// Number is not one of the category encodings.
    UnknownTagType(u32),
    /// Number is not a member of the named closed enumeration.
    UnknownEnumValue { kind: &'static str, value: u32 },
}

pub type Result<T> = std::result::Result<T, TagError>;

impl Error for TagError {}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::UnknownTag(raw) => {
                write!(f, "Unknown tag: {:#010x}", raw)
            }
            TagError::UnknownTagType(raw) => {
                write!(f, "Unknown tag type: {:#010x}", raw)
            }
            TagError::UnknownEnumValue { kind, value } => {
                write!(f, "Invalid value for {}: {}", kind, value)
            }
        }
    }
}
