use std::fmt;

/// Result type for anyview operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the rendering pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A requested property name did not resolve via any lookup strategy
    NotFound {
        name: String,
        available: Vec<String>,
    },
    /// A value of unexpected shape was passed where a specific shape was required
    TypeMismatch {
        expected: &'static str,
        actual: String,
    },
    /// A renderer encountered a node it cannot render
    Unsupported(String),
    /// A numeric precondition was violated (e.g. rounding below unit magnitude)
    Numeric(String),
}

impl Error {
    pub fn not_found(name: impl Into<String>, available: impl IntoIterator<Item = String>) -> Self {
        Error::NotFound {
            name: name.into(),
            available: available.into_iter().collect(),
        }
    }

    pub fn type_mismatch(expected: &'static str, actual: impl fmt::Display) -> Self {
        Error::TypeMismatch {
            expected,
            actual: actual.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound { name, available } => {
                write!(f, "{} not found (available: {})", name, available.join(", "))
            }
            Error::TypeMismatch { expected, actual } => {
                write!(f, "expected {}, got {}", expected, actual)
            }
            Error::Unsupported(what) => write!(f, "not implemented: {}", what),
            Error::Numeric(what) => write!(f, "not implemented: {}", what),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lists_available_names() {
        let err = Error::not_found("speed", ["size".to_string(), "color".to_string()]);
        assert_eq!(err.to_string(), "speed not found (available: size, color)");
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = Error::type_mismatch("mapping", "42");
        assert_eq!(err.to_string(), "expected mapping, got 42");
    }
}
