pub mod lend_book_cmd;
pub mod return_book_cmd;
