include!("../../lib.rs");
use std::net::SocketAddr;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tracing::info;
use crate::catalog::controller::{add_book, list_books, remove_book, search_books};
use crate::checkout::controller::{lend_book, return_book};
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::utils::logging::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Configuration::from_env()?;
    let addr: SocketAddr = config.bind_addr.parse()?;
    info!(branch = %config.branch_id, author_match = ?config.author_match,
          publisher = ?config.publisher, "starting catalog");
    let state = AppState::new(config);

    let app = Router::new()
        .route("/catalog", post(add_book).get(list_books))
        .route("/catalog/:isbn", delete(remove_book))
        .route("/search", get(search_books))
        .route("/checkout", post(lend_book))
        .route("/checkout/return", post(return_book))
        .with_state(state);

    info!(%addr, "listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
