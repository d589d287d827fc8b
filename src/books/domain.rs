use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

/// Anything that can sit on a catalog shelf and describe itself.
pub trait Book: Identifiable {
    fn status(&self) -> BookStatus;

    fn is_lent(&self) -> bool {
        self.status() == BookStatus::Lent
    }

    /// Display text for listings. Always carries title, author and isbn.
    fn describe(&self) -> String;
}
