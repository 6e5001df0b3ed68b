use std::fmt;

/// Result type alias for editing sessions
pub type IniResult<T> = Result<T, IniError>;

/// Errors that can occur while reading or rewriting the backing source.
///
/// The editing core itself has a narrow failure surface: malformed lines are
/// not errors (they pass through verbatim), and `set` never fails. What
/// remains is I/O against the backing resource, plus whatever the caller's
/// own edit closure chooses to raise.
#[derive(Debug, Clone)]
pub enum IniError {
    /// File or stream I/O error
    Io {
        path: Option<String>,
        message: String,
    },

    /// Custom error with message
    Custom { message: String },
}

impl IniError {
    /// Create an I/O error tied to a path
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        IniError::Io {
            path: Some(path.into()),
            message: message.into(),
        }
    }

    /// Create a custom error
    pub fn custom(message: impl Into<String>) -> Self {
        IniError::Custom {
            message: message.into(),
        }
    }
}

impl fmt::Display for IniError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IniError::Io { path, message } => match path {
                Some(path) => write!(f, "I/O error for '{}': {}", path, message),
                None => write!(f, "I/O error: {}", message),
            },
            IniError::Custom { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for IniError {}

impl From<std::io::Error> for IniError {
    fn from(err: std::io::Error) -> Self {
        IniError::Io {
            path: None,
            message: err.to_string(),
        }
    }
}
