use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    NotAvailable {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::NotAvailable { message, .. } => { message.as_str() }
            CommandError::NotFound { message } => { message.as_str() }
            CommandError::Serialization { message } => { message.as_str() }
            CommandError::Validation { message, .. } => { message.as_str() }
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::BookNotAvailable { message, reason_code } => {
                CommandError::NotAvailable { message, reason_code }
            }
            LibraryError::InvalidArgument { message } => {
                CommandError::Validation { message, reason_code: Some("invalid_argument".to_string()) }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
        }
    }
}

// Trims form input and rejects it when nothing is left.
pub(crate) fn required_text(value: &str, message: &str, reason_code: &str) -> Result<String, CommandError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(CommandError::Validation { message: message.to_string(), reason_code: Some(reason_code.to_string()) })
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{CommandError, required_text};
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_convert_library_error() {
        let err = CommandError::from(LibraryError::book_not_available("lent", Some("already_lent")));
        assert_eq!(CommandError::NotAvailable { message: "lent".to_string(), reason_code: Some("already_lent".to_string()) }, err);
        let err = CommandError::from(LibraryError::invalid_argument("size"));
        assert!(matches!(err, CommandError::Validation { .. }));
        let err = CommandError::from(LibraryError::not_found("none"));
        assert_eq!("none", err.message());
    }

    #[tokio::test]
    async fn test_should_trim_required_text() {
        assert_eq!("1984", required_text("  1984 ", "title required", "missing_field").expect("should trim"));
        let err = required_text("   ", "title required", "missing_field").expect_err("should reject blank");
        assert_eq!("title required", err.message());
    }
}
