use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

pub const REASON_NOT_FOUND: &str = "not_found";
pub const REASON_ALREADY_LENT: &str = "already_lent";
pub const REASON_NOT_LENT: &str = "not_lent";

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    // Raised by lend and return when the isbn is unknown or the book is in the wrong
    // lending state. The reason_code tells the cases apart, the kind stays the same.
    BookNotAvailable {
        message: String,
        reason_code: Option<String>,
    },
    InvalidArgument {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn book_not_available(message: &str, reason_code: Option<&str>) -> LibraryError {
        LibraryError::BookNotAvailable { message: message.to_string(), reason_code: reason_code.map(str::to_string) }
    }

    pub fn invalid_argument(message: &str) -> LibraryError {
        LibraryError::InvalidArgument { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<&str>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code: reason_code.map(str::to_string) }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::BookNotAvailable { message, .. } => { message.as_str() }
            LibraryError::InvalidArgument { message } => { message.as_str() }
            LibraryError::Validation { message, .. } => { message.as_str() }
            LibraryError::NotFound { message } => { message.as_str() }
            LibraryError::Serialization { message } => { message.as_str() }
        }
    }

    pub fn reason_code(&self) -> Option<&str> {
        match self {
            LibraryError::BookNotAvailable { reason_code, .. } => { reason_code.as_deref() }
            LibraryError::Validation { reason_code, .. } => { reason_code.as_deref() }
            _ => { None }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::BookNotAvailable { message, reason_code } => {
                write!(f, "book not available: {} {:?}", message, reason_code)
            }
            LibraryError::InvalidArgument { message } => {
                write!(f, "invalid argument: {}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// Lending state of a single catalog entry.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    Available,
    Lent,
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Lent" => BookStatus::Lent,
            _ => BookStatus::Available,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Lent => write!(f, "Lent"),
        }
    }
}
