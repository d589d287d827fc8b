use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::SharedLibrary;
use crate::core::domain::{AuthorMatch, Configuration};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    author_match: AuthorMatch,
    library: SharedLibrary,
    events_publisher: Arc<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, library: SharedLibrary,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            author_match: config.author_match,
            library,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: BookEntity) -> LibraryResult<BookDto> {
        let dto = BookDto::from(&book);
        self.library.lock().await.add_book(book);
        info!(isbn = %dto.isbn, title = %dto.title, "book added to catalog");
        self.events_publisher.publish(&DomainEvent::added(
            "book_added", "catalog", dto.isbn.as_str(), &self.metadata(), &dto)?).await?;
        Ok(dto)
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<Option<BookDto>> {
        let removed = self.library.lock().await.remove_book(isbn);
        match removed {
            Some(book) => {
                let dto = BookDto::from(&book);
                info!(isbn, "book removed from catalog");
                self.events_publisher.publish(&DomainEvent::deleted(
                    "book_removed", "catalog", isbn, &self.metadata(), &dto)?).await?;
                Ok(Some(dto))
            }
            None => {
                debug!(isbn, "nothing to remove");
                Ok(None)
            }
        }
    }

    async fn find_books_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>> {
        let library = self.library.lock().await;
        let books: Vec<BookDto> = library.books_matching(author, self.author_match)
            .map(BookDto::from).collect();
        debug!(author, found = books.len(), policy = ?self.author_match, "searched catalog by author");
        Ok(books)
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        Ok(self.library.lock().await.iter().map(BookDto::from).collect())
    }
}
