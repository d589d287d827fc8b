use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError, required_text};

pub(crate) struct LendBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl LendBookCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LendBookCommandRequest {
    isbn: String,
}

impl LendBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct LendBookCommandResponse {
    book: BookDto,
}

impl LendBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<LendBookCommandRequest, LendBookCommandResponse> for LendBookCommand {
    async fn execute(&self, req: LendBookCommandRequest) -> Result<LendBookCommandResponse, CommandError> {
        let isbn = required_text(&req.isbn, "ISBN is required.", "missing_field")?;
        self.checkout_service.lend(isbn.as_str())
            .await.map_err(CommandError::from).map(LendBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::domain::model::Library;
    use crate::checkout::command::lend_book_cmd::{LendBookCommand, LendBookCommandRequest};
    use crate::checkout::factory::create_checkout_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::{BookStatus, REASON_ALREADY_LENT};
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[tokio::test]
    async fn test_should_run_lend_book() {
        let mut library = Library::new();
        library.add_book(BookEntity::new("1984", "Orwell", "111"));
        let svc = create_checkout_service(&Configuration::new("test"), library.into_shared(), Arc::new(MemoryPublisher::new()));
        let cmd = LendBookCommand::new(svc);

        let res = cmd.execute(LendBookCommandRequest::new(" 111 ")).await.expect("should lend book");
        assert_eq!(BookStatus::Lent, res.book.book_status);

        let err = cmd.execute(LendBookCommandRequest::new("111")).await.expect_err("should not lend twice");
        assert_eq!(CommandError::NotAvailable {
            message: "book 111 is already lent".to_string(),
            reason_code: Some(REASON_ALREADY_LENT.to_string()),
        }, err);
    }
}
