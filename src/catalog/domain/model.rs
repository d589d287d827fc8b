use std::slice;
use std::sync::Arc;
use tokio::sync::Mutex;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::AuthorMatch;
use crate::core::library::{LibraryError, LibraryResult, REASON_ALREADY_LENT, REASON_NOT_FOUND, REASON_NOT_LENT};

/// Library handle shared by request handlers. The lock lives here, not inside
/// [`Library`], which assumes a single owner.
pub type SharedLibrary = Arc<Mutex<Library>>;

/// Ordered in-memory catalog. Insertion order is catalog order and every
/// lending transition goes through the methods below.
///
/// Isbns are not required to be unique; lookups act on the first match.
#[derive(Debug, Default, Clone)]
pub struct Library {
    books: Vec<BookEntity>,
}

impl Library {
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    pub fn into_shared(self) -> SharedLibrary {
        Arc::new(Mutex::new(self))
    }

    /// Appends to the end of the catalog. Duplicate isbns are accepted.
    pub fn add_book(&mut self, book: BookEntity) {
        self.books.push(book);
    }

    /// Marks the first book with `isbn` as lent and returns it.
    ///
    /// Fails with [`LibraryError::BookNotAvailable`] when no book has that isbn or
    /// when the first one is already lent.
    pub fn lend_book(&mut self, isbn: &str) -> LibraryResult<&BookEntity> {
        let book = self.books.iter_mut().find(|b| b.isbn() == isbn)
            .ok_or_else(|| LibraryError::book_not_available(
                format!("no book with isbn {}", isbn).as_str(), Some(REASON_NOT_FOUND)))?;
        if book.is_lent() {
            return Err(LibraryError::book_not_available(
                format!("book {} is already lent", isbn).as_str(), Some(REASON_ALREADY_LENT)));
        }
        book.mark_lent();
        Ok(book)
    }

    /// Marks the first lent book with `isbn` as available again and returns it.
    ///
    /// An unknown isbn and a book that is not lent fail with the same
    /// [`LibraryError::BookNotAvailable`] kind; only the reason code differs.
    pub fn return_book(&mut self, isbn: &str) -> LibraryResult<&BookEntity> {
        let known = self.books.iter().any(|b| b.isbn() == isbn);
        match self.books.iter_mut().find(|b| b.isbn() == isbn && b.is_lent()) {
            Some(book) => {
                book.mark_available();
                Ok(book)
            }
            None if known => Err(LibraryError::book_not_available(
                format!("book {} is not currently lent", isbn).as_str(), Some(REASON_NOT_LENT))),
            None => Err(LibraryError::book_not_available(
                format!("no book with isbn {}", isbn).as_str(), Some(REASON_NOT_FOUND))),
        }
    }

    /// Removes the first book with `isbn` whatever its lending status.
    /// Unknown isbns are a no-op and yield `None`.
    pub fn remove_book(&mut self, isbn: &str) -> Option<BookEntity> {
        let pos = self.books.iter().position(|b| b.isbn() == isbn)?;
        Some(self.books.remove(pos))
    }

    /// Books whose author equals `author` exactly, in catalog order.
    ///
    /// The iterator is lazy and `Clone`, and the call can be repeated; neither
    /// touches the catalog.
    pub fn books_by_author<'a>(&'a self, author: &'a str) -> impl Iterator<Item = &'a BookEntity> + Clone + 'a {
        self.books_matching(author, AuthorMatch::Exact)
    }

    pub fn books_matching<'a>(&'a self, author: &'a str, policy: AuthorMatch) -> impl Iterator<Item = &'a BookEntity> + Clone + 'a {
        self.books.iter().filter(move |b| policy.matches(b.author(), author))
    }

    pub fn get(&self, isbn: &str) -> Option<&BookEntity> {
        self.books.iter().find(|b| b.isbn() == isbn)
    }

    pub fn books(&self) -> &[BookEntity] {
        &self.books
    }

    pub fn iter(&self) -> slice::Iter<'_, BookEntity> {
        self.books.iter()
    }

    pub fn available(&self) -> impl Iterator<Item = &BookEntity> + '_ {
        self.books.iter().filter(|b| !b.is_lent())
    }

    pub fn lent(&self) -> impl Iterator<Item = &BookEntity> + '_ {
        self.books.iter().filter(|b| b.is_lent())
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a BookEntity;
    type IntoIter = slice::Iter<'a, BookEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::domain::model::Library;
    use crate::core::domain::AuthorMatch;
    use crate::core::library::{BookStatus, LibraryError, REASON_ALREADY_LENT, REASON_NOT_FOUND, REASON_NOT_LENT};

    fn sample_library() -> Library {
        let mut library = Library::new();
        library.add_book(BookEntity::new("1984", "Orwell", "111"));
        library.add_book(BookEntity::ebook("Dune", "Herbert", "222", 5));
        library
    }

    fn isbns(library: &Library) -> Vec<&str> {
        library.iter().map(|b| b.isbn()).collect()
    }

    #[tokio::test]
    async fn test_should_add_books_in_order() {
        let mut library = Library::new();
        assert!(library.is_empty());
        for isbn in ["3", "1", "2", "1"] {
            library.add_book(BookEntity::new("title", "author", isbn));
        }
        assert_eq!(4, library.len());
        assert_eq!(vec!["3", "1", "2", "1"], isbns(&library));
        assert_eq!(library.books().len(), (&library).into_iter().count());
    }

    #[tokio::test]
    async fn test_should_lend_once() {
        let mut library = sample_library();
        let lent = library.lend_book("111").expect("should lend");
        assert!(lent.is_lent());
        assert_eq!(Some(BookStatus::Lent), library.get("111").map(|b| b.status()));

        let err = library.lend_book("111").expect_err("should not lend twice");
        assert!(matches!(err, LibraryError::BookNotAvailable { .. }));
        assert_eq!(Some(REASON_ALREADY_LENT), err.reason_code());
    }

    #[tokio::test]
    async fn test_should_fail_lending_unknown_isbn() {
        let mut library = sample_library();
        let err = library.lend_book("999").expect_err("should not lend unknown");
        assert_eq!(Some(REASON_NOT_FOUND), err.reason_code());
    }

    #[tokio::test]
    async fn test_should_return_only_lent_books() {
        let mut library = sample_library();
        let err = library.return_book("222").expect_err("never lent");
        assert!(matches!(err, LibraryError::BookNotAvailable { .. }));
        assert_eq!(Some(REASON_NOT_LENT), err.reason_code());

        library.lend_book("222").expect("should lend");
        library.return_book("222").expect("should return");
        let err = library.return_book("222").expect_err("should not return twice");
        assert!(matches!(err, LibraryError::BookNotAvailable { .. }));

        let err = library.return_book("999").expect_err("unknown isbn");
        assert_eq!(Some(REASON_NOT_FOUND), err.reason_code());
    }

    #[tokio::test]
    async fn test_should_round_trip_lend_and_return() {
        let mut library = sample_library();
        let before = library.get("111").cloned();
        library.lend_book("111").expect("should lend");
        library.return_book("111").expect("should return");
        assert_eq!(before.as_ref(), library.get("111"));
    }

    #[tokio::test]
    async fn test_should_act_on_first_duplicate() {
        let mut library = Library::new();
        library.add_book(BookEntity::new("first", "a", "111"));
        library.add_book(BookEntity::new("second", "a", "111"));

        assert_eq!("first", library.lend_book("111").expect("should lend").title());
        // the first copy is lent, so the second lend still fails on it
        assert!(library.lend_book("111").is_err());
        assert!(!library.books()[1].is_lent());

        let removed = library.remove_book("111").expect("should remove");
        assert_eq!("first", removed.title());
        assert_eq!(1, library.len());
    }

    #[tokio::test]
    async fn test_should_return_first_lent_duplicate() {
        let mut library = Library::new();
        library.add_book(BookEntity::new("first", "a", "111"));
        library.add_book(BookEntity::new("second", "a", "111"));
        library.lend_book("111").expect("should lend");
        library.remove_book("111");
        assert!(library.return_book("111").is_err());
        library.lend_book("111").expect("should lend second");
        assert_eq!("second", library.return_book("111").expect("should return").title());
    }

    #[tokio::test]
    async fn test_should_remove_regardless_of_status() {
        let mut library = sample_library();
        library.lend_book("111").expect("should lend");
        assert!(library.remove_book("111").is_some());
        let err = library.lend_book("111").expect_err("removed book");
        assert_eq!(Some(REASON_NOT_FOUND), err.reason_code());
        assert_eq!(vec!["222"], isbns(&library));
    }

    #[tokio::test]
    async fn test_should_ignore_removing_unknown_isbn() {
        let mut library = sample_library();
        assert!(library.remove_book("999").is_none());
        assert_eq!(vec!["111", "222"], isbns(&library));
    }

    #[tokio::test]
    async fn test_should_find_books_by_author() {
        let mut library = sample_library();
        library.add_book(BookEntity::new("Animal Farm", "Orwell", "333"));
        library.add_book(BookEntity::new("Essays", "orwell", "444"));

        let found = library.books_by_author("Orwell");
        let first: Vec<&str> = found.clone().map(|b| b.isbn()).collect();
        let second: Vec<&str> = found.map(|b| b.isbn()).collect();
        assert_eq!(vec!["111", "333"], first);
        assert_eq!(first, second);
        assert_eq!(2, library.books_by_author("Orwell").count());
        assert_eq!(0, library.books_by_author(" Orwell").count());
        assert_eq!(4, library.len());
    }

    #[tokio::test]
    async fn test_should_find_books_with_relaxed_policy() {
        let mut library = sample_library();
        library.add_book(BookEntity::new("Essays", "George Orwell", "444"));
        assert_eq!(1, library.books_matching("orwell", AuthorMatch::IgnoreCase).count());
        assert_eq!(2, library.books_matching("orwell", AuthorMatch::Contains).count());
    }

    #[tokio::test]
    async fn test_should_run_lending_scenario() {
        let mut library = sample_library();
        library.lend_book("111").expect("should lend");
        let lent: Vec<&str> = library.lent().map(|b| b.isbn()).collect();
        let available: Vec<&str> = library.available().map(|b| b.isbn()).collect();
        assert_eq!(vec!["111"], lent);
        assert_eq!(vec!["222"], available);

        assert!(library.remove_book("999").is_none());
        assert_eq!(vec!["111", "222"], isbns(&library));

        let err = library.return_book("222").expect_err("never lent");
        assert!(matches!(err, LibraryError::BookNotAvailable { .. }));
    }
}
