use axum::{
    extract::State,
    response::Json,
};
use serde_json::Value;
use crate::checkout::command::lend_book_cmd::{LendBookCommand, LendBookCommandRequest, LendBookCommandResponse};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};
use crate::checkout::domain::CheckoutService;
use crate::checkout::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

fn build_service(state: AppState) -> Box<dyn CheckoutService> {
    factory::create_checkout_service(&state.config, state.library, state.publisher)
}

pub(crate) async fn lend_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<LendBookCommandResponse>, ServerError> {
    let req: LendBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = LendBookCommand::new(build_service(state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn return_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ReturnBookCommandResponse>, ServerError> {
    let req: ReturnBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = ReturnBookCommand::new(build_service(state)).execute(req).await?;
    Ok(Json(res))
}
