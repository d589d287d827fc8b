use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::dto::BookDto;
use crate::catalog::domain::model::SharedLibrary;
use crate::checkout::domain::CheckoutService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

pub(crate) struct CheckoutServiceImpl {
    branch_id: String,
    library: SharedLibrary,
    events_publisher: Arc<dyn EventPublisher>,
}

impl CheckoutServiceImpl {
    pub(crate) fn new(config: &Configuration, library: SharedLibrary,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            library,
            events_publisher,
        }
    }

    async fn publish(&self, name: &str, book: &BookDto) -> LibraryResult<()> {
        let metadata = HashMap::from([
            ("branch_id".to_string(), self.branch_id.to_string()),
            ("book_status".to_string(), book.book_status.to_string()),
        ]);
        self.events_publisher.publish(&DomainEvent::updated(
            name, "checkout", book.isbn.as_str(), &metadata, book)?).await
    }
}

#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn lend(&self, isbn: &str) -> LibraryResult<BookDto> {
        let res = self.library.lock().await.lend_book(isbn).map(BookDto::from);
        let book = res.map_err(|err| {
            warn!(isbn, reason = ?err.reason_code(), "cannot lend book");
            err
        })?;
        info!(isbn, "book lent");
        self.publish("book_lent", &book).await?;
        Ok(book)
    }

    async fn returned(&self, isbn: &str) -> LibraryResult<BookDto> {
        let res = self.library.lock().await.return_book(isbn).map(BookDto::from);
        let book = res.map_err(|err| {
            warn!(isbn, reason = ?err.reason_code(), "cannot return book");
            err
        })?;
        info!(isbn, "book returned");
        self.publish("book_returned", &book).await?;
        Ok(book)
    }
}
