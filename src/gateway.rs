use std::str::FromStr;
use crate::core::library::LibraryError;

pub mod events;
pub mod factory;
pub mod logs;
pub mod memory;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum GatewayPublisherVia {
    Logs,
    Memory,
}

impl FromStr for GatewayPublisherVia {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "logs" => Ok(GatewayPublisherVia::Logs),
            "memory" => Ok(GatewayPublisherVia::Memory),
            other => Err(LibraryError::validation(
                format!("unknown event publisher {}", other).as_str(), Some("config"))),
        }
    }
}
