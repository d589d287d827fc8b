pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod events;
    pub mod library;
}

pub mod utils {
    pub mod logging;
}

pub mod books;
pub mod catalog;
pub mod checkout;
pub mod gateway;
