use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::{BookEntity, BookFormat};
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookDto is a serializable snapshot of a catalog entry handed out by the services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub format: BookFormat,
    pub book_status: BookStatus,
    pub display: String,
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn().to_string(),
            title: other.title().to_string(),
            author: other.author().to_string(),
            format: other.format().clone(),
            book_status: other.status(),
            display: other.describe(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
    fn status(&self) -> BookStatus {
        self.book_status
    }

    fn describe(&self) -> String {
        self.display.to_string()
    }
}
