use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::model::{Library, SharedLibrary};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) library: SharedLibrary,
    pub(crate) publisher: Arc<dyn EventPublisher>,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        let publisher = create_publisher(config.publisher, config.branch_id.as_str());
        Self::with_publisher(config, publisher)
    }

    pub fn with_publisher(config: Configuration, publisher: Arc<dyn EventPublisher>) -> AppState {
        AppState {
            config,
            library: Library::new().into_shared(),
            publisher,
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::NotAvailable { .. } => StatusCode::CONFLICT,
            CommandError::NotFound { .. } => StatusCode::NOT_FOUND,
            CommandError::Serialization { .. } => StatusCode::BAD_REQUEST,
            CommandError::Validation { .. } => StatusCode::BAD_REQUEST,
        };
        (status, err.message().to_string())
    }
}
