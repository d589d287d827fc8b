use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError, required_text};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) isbn: String,
    #[serde(default)]
    pub(crate) ebook: bool,
    #[serde(default)]
    pub(crate) download_size: Option<String>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            ebook: false,
            download_size: None,
        }
    }

    pub fn new_ebook(title: &str, author: &str, isbn: &str, download_size: &str) -> Self {
        Self {
            ebook: true,
            download_size: Some(download_size.to_string()),
            ..Self::new(title, author, isbn)
        }
    }

    // A size sent for a print book is ignored, the same as clearing the field
    // when the e-book box is unticked.
    pub fn build_book(&self) -> Result<BookEntity, CommandError> {
        const REQUIRED: &str = "Title, Author, and ISBN are required.";
        let title = required_text(&self.title, REQUIRED, "missing_field")?;
        let author = required_text(&self.author, REQUIRED, "missing_field")?;
        let isbn = required_text(&self.isbn, REQUIRED, "missing_field")?;
        if !self.ebook {
            return Ok(BookEntity::new(&title, &author, &isbn));
        }
        let size = required_text(self.download_size.as_deref().unwrap_or_default(),
                                 "Download size required for eBooks.", "missing_download_size")?;
        if !size.chars().all(|c| c.is_ascii_digit()) {
            return Err(CommandError::Validation {
                message: "Download size must be a number.".to_string(),
                reason_code: Some("invalid_download_size".to_string()),
            });
        }
        BookEntity::parse_ebook(&title, &author, &isbn, &size).map_err(CommandError::from)
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        self.catalog_service.add_book(book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
