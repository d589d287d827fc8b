use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError, required_text};

pub(crate) struct RemoveBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) isbn: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}


// Removing an unknown isbn still succeeds; `removed` tells the caller whether
// anything left the catalog.
#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {
    pub removed: bool,
    pub book: Option<BookDto>,
}

impl RemoveBookCommandResponse {
    pub fn new(book: Option<BookDto>) -> Self {
        Self {
            removed: book.is_some(),
            book,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let isbn = required_text(&req.isbn, "ISBN is required.", "missing_field")?;
        self.catalog_service.remove_book(isbn.as_str()).await
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}
