use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::CatalogView;
use crate::core::command::{Command, CommandError, required_text};

pub(crate) struct SearchBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchBooksCommandRequest {
    pub(crate) author: String,
}

impl SearchBooksCommandRequest {
    pub fn new(author: &str) -> Self {
        Self {
            author: author.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct SearchBooksCommandResponse {
    pub author: String,
    pub books: CatalogView,
}

impl SearchBooksCommandResponse {
    pub fn new(author: String, books: CatalogView) -> Self {
        Self {
            author,
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let author = required_text(&req.author, "Author is required.", "missing_field")?;
        let books = self.catalog_service.find_books_by_author(author.as_str()).await?;
        if books.is_empty() {
            return Err(CommandError::NotFound { message: "No books found by this author.".to_string() });
        }
        Ok(SearchBooksCommandResponse::new(author, CatalogView::from(books)))
    }
}
