use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

pub mod service;

#[async_trait]
pub(crate) trait CheckoutService: Sync + Send {
    async fn lend(&self, isbn: &str) -> LibraryResult<BookDto>;
    async fn returned(&self, isbn: &str) -> LibraryResult<BookDto>;
}
