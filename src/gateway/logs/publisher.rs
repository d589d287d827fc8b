use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every domain event as a structured log line.
#[derive(Debug)]
pub struct LogPublisher {
    channel: String,
}

impl LogPublisher {
    pub(crate) fn new(channel: &str) -> Self {
        Self {
            channel: channel.to_string(),
        }
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        info!(
            channel = %self.channel,
            event_id = %event.event_id,
            name = %event.name,
            group = %event.group,
            key = %event.key,
            kind = ?event.kind,
            created_at = %event.created_at,
            data = %event.json_data,
            "domain event"
        );
        Ok(())
    }
}
