//! Crate-level error types.

use std::fmt;

/// Reasons a candidate file is refused by the intake controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// The declared media type is not the accepted document type.
    UnsupportedType {
        /// Media type the file declared (may be empty).
        media_type: String,
    },
    /// The file exceeds the configured size limit. Only raised when size
    /// enforcement is switched on in [`IntakeOptions`](crate::options::IntakeOptions).
    TooLarge {
        /// Declared file size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },
    /// The platform refused to create a resource handle for the file.
    HandleCreation(String),
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedType { media_type } if media_type.is_empty() => {
                write!(f, "unsupported file type: (none declared)")
            }
            Self::UnsupportedType { media_type } => {
                write!(f, "unsupported file type: {media_type}")
            }
            Self::TooLarge { size, limit } => {
                write!(f, "file is {size} bytes, limit is {limit} bytes")
            }
            Self::HandleCreation(msg) => {
                write!(f, "could not open file: {msg}")
            }
        }
    }
}

impl std::error::Error for IntakeError {}

/// Errors produced while loading [`Options`](crate::options::Options).
#[derive(Debug)]
pub enum OptionsError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML parsing/serialization failure.
    Parse(String),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse(msg) => write!(f, "options parse error: {msg}"),
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for OptionsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_type_names_the_media_type() {
        let err = IntakeError::UnsupportedType {
            media_type: "image/png".to_owned(),
        };
        assert_eq!(err.to_string(), "unsupported file type: image/png");
    }

    #[test]
    fn unsupported_type_without_declared_type() {
        let err = IntakeError::UnsupportedType {
            media_type: String::new(),
        };
        assert_eq!(err.to_string(), "unsupported file type: (none declared)");
    }

    #[test]
    fn io_error_is_exposed_as_source() {
        use std::error::Error;

        let err = OptionsError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(err.source().is_some());
        assert!(OptionsError::Parse("bad".to_owned()).source().is_none());
    }
}
