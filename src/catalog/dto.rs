use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::dto::BookDto;

// CatalogView splits a listing into what is on the shelf and what is lent out,
// each bucket kept in catalog order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub(crate) struct CatalogView {
    pub available: Vec<BookDto>,
    pub lent: Vec<BookDto>,
}

impl CatalogView {
    pub fn len(&self) -> usize {
        self.available.len() + self.lent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty() && self.lent.is_empty()
    }
}

impl From<Vec<BookDto>> for CatalogView {
    fn from(books: Vec<BookDto>) -> Self {
        let (lent, available) = books.into_iter().partition(|b| b.is_lent());
        Self { available, lent }
    }
}
