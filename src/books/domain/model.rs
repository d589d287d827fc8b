use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

// BookFormat is the variant part of a catalog entry. Library never looks at it,
// so new formats only touch this enum and its rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookFormat {
    Print,
    Ebook { download_size_mb: u64 },
}

impl BookFormat {
    pub fn parse_download_size(size: &str) -> LibraryResult<u64> {
        let parsed: i64 = size.parse().map_err(|_| LibraryError::invalid_argument(
            format!("download size {:?} is not a whole number", size).as_str()))?;
        u64::try_from(parsed).map_err(|_| LibraryError::invalid_argument(
            format!("download size {} must not be negative", parsed).as_str()))
    }
}

impl Display for BookFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BookFormat::Print => write!(f, "Print"),
            BookFormat::Ebook { download_size_mb } => write!(f, "eBook, {} MB", download_size_mb),
        }
    }
}

// BookEntity is one catalog entry. Only the lending status changes after construction
// and only the owning Library changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntity {
    title: String,
    author: String,
    isbn: String,
    format: BookFormat,
    status: BookStatus,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self::with_format(title, author, isbn, BookFormat::Print)
    }

    pub fn ebook(title: &str, author: &str, isbn: &str, download_size_mb: u64) -> Self {
        Self::with_format(title, author, isbn, BookFormat::Ebook { download_size_mb })
    }

    /// Builds an e-book from a caller-supplied size such as `"5"`.
    ///
    /// Fails with [`LibraryError::InvalidArgument`] when the size is not a
    /// non-negative whole number.
    pub fn parse_ebook(title: &str, author: &str, isbn: &str, download_size: &str) -> LibraryResult<Self> {
        let size = BookFormat::parse_download_size(download_size)?;
        Ok(Self::ebook(title, author, isbn, size))
    }

    fn with_format(title: &str, author: &str, isbn: &str, format: BookFormat) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            format,
            status: BookStatus::Available,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn format(&self) -> &BookFormat {
        &self.format
    }

    pub fn download_size_mb(&self) -> Option<u64> {
        match self.format {
            BookFormat::Print => None,
            BookFormat::Ebook { download_size_mb } => Some(download_size_mb),
        }
    }

    pub(crate) fn mark_lent(&mut self) {
        self.status = BookStatus::Lent;
    }

    pub(crate) fn mark_available(&mut self) {
        self.status = BookStatus::Available;
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
    fn status(&self) -> BookStatus {
        self.status
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" by {} (ISBN: {})", self.title, self.author, self.isbn)?;
        match self.format {
            BookFormat::Print => Ok(()),
            BookFormat::Ebook { .. } => write!(f, " [{}]", self.format),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::{BookEntity, BookFormat};
    use crate::core::domain::Identifiable;
    use crate::core::library::{BookStatus, LibraryError};

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("1984", "Orwell", "111");
        assert_eq!("1984", book.title());
        assert_eq!("Orwell", book.author());
        assert_eq!("111", book.id());
        assert_eq!(BookStatus::Available, book.status());
        assert!(!book.is_lent());
        assert_eq!(None, book.download_size_mb());
    }

    #[tokio::test]
    async fn test_should_parse_ebook_size() {
        let book = BookEntity::parse_ebook("Dune", "Herbert", "222", "5").expect("should build ebook");
        assert_eq!(&BookFormat::Ebook { download_size_mb: 5 }, book.format());
        assert_eq!(Some(5), book.download_size_mb());
        assert_eq!(BookStatus::Available, book.status());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_ebook_size() {
        for size in ["-1", "five", "", "2.5"] {
            let res = BookEntity::parse_ebook("Dune", "Herbert", "222", size);
            assert!(matches!(res, Err(LibraryError::InvalidArgument { .. })), "size {:?}", size);
        }
    }

    #[tokio::test]
    async fn test_should_describe_books() {
        let book = BookEntity::new("1984", "Orwell", "111");
        let ebook = BookEntity::ebook("Dune", "Herbert", "222", 5);
        assert_eq!("\"1984\" by Orwell (ISBN: 111)", book.describe());
        assert_eq!("\"Dune\" by Herbert (ISBN: 222) [eBook, 5 MB]", ebook.describe());
    }

    #[tokio::test]
    async fn test_should_toggle_lending_status() {
        let mut book = BookEntity::new("1984", "Orwell", "111");
        book.mark_lent();
        assert!(book.is_lent());
        book.mark_available();
        assert_eq!(BookEntity::new("1984", "Orwell", "111"), book);
    }
}
