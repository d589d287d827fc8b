use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::GatewayPublisherVia;

// Identifiable defines common traits that can be shared by catalog entries
pub trait Identifiable {
    fn id(&self) -> String;
}

/// How an author query is compared against the author stored on a book.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorMatch {
    /// Case-sensitive string equality.
    #[default]
    Exact,
    IgnoreCase,
    /// Case-insensitive substring match.
    Contains,
}

impl AuthorMatch {
    pub fn matches(&self, stored: &str, query: &str) -> bool {
        match self {
            AuthorMatch::Exact => stored == query,
            AuthorMatch::IgnoreCase => stored.to_lowercase() == query.to_lowercase(),
            AuthorMatch::Contains => stored.to_lowercase().contains(&query.to_lowercase()),
        }
    }
}

impl FromStr for AuthorMatch {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(AuthorMatch::Exact),
            "ignore_case" => Ok(AuthorMatch::IgnoreCase),
            "contains" => Ok(AuthorMatch::Contains),
            other => Err(LibraryError::validation(
                format!("unknown author match policy {}", other).as_str(), Some("config"))),
        }
    }
}

pub const ENV_BRANCH: &str = "LMS_BRANCH";
pub const ENV_AUTHOR_MATCH: &str = "LMS_AUTHOR_MATCH";
pub const ENV_PUBLISHER: &str = "LMS_PUBLISHER";
pub const ENV_BIND_ADDR: &str = "LMS_BIND_ADDR";

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct Configuration {
    pub branch_id: String,
    pub author_match: AuthorMatch,
    pub publisher: GatewayPublisherVia,
    pub bind_addr: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            author_match: AuthorMatch::Exact,
            publisher: GatewayPublisherVia::Logs,
            bind_addr: "127.0.0.1:3000".to_string(),
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Unset variables keep their defaults, malformed ones are rejected.
    pub(crate) fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let branch = lookup(ENV_BRANCH).unwrap_or_else(|| "dev".to_string());
        let mut config = Configuration::new(branch.as_str());
        if let Some(policy) = lookup(ENV_AUTHOR_MATCH) {
            config.author_match = policy.parse()?;
        }
        if let Some(via) = lookup(ENV_PUBLISHER) {
            config.publisher = via.parse()?;
        }
        if let Some(addr) = lookup(ENV_BIND_ADDR) {
            config.bind_addr = addr;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::domain::{AuthorMatch, Configuration, ENV_AUTHOR_MATCH, ENV_BRANCH, ENV_PUBLISHER};
    use crate::core::library::LibraryError;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(AuthorMatch::Exact, config.author_match);
        assert_eq!(GatewayPublisherVia::Logs, config.publisher);
    }

    #[tokio::test]
    async fn test_should_build_config_from_lookup() {
        let vars = HashMap::from([
            (ENV_BRANCH, "downtown"),
            (ENV_AUTHOR_MATCH, "contains"),
            (ENV_PUBLISHER, "memory"),
        ]);
        let config = Configuration::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
            .expect("should build config");
        assert_eq!("downtown", config.branch_id.as_str());
        assert_eq!(AuthorMatch::Contains, config.author_match);
        assert_eq!(GatewayPublisherVia::Memory, config.publisher);
        assert_eq!("127.0.0.1:3000", config.bind_addr.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_unknown_author_match() {
        let res = Configuration::from_lookup(|key| {
            if key == ENV_AUTHOR_MATCH { Some("fuzzy".to_string()) } else { None }
        });
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_match_author() {
        assert!(AuthorMatch::Exact.matches("Orwell", "Orwell"));
        assert!(!AuthorMatch::Exact.matches("Orwell", "orwell"));
        assert!(!AuthorMatch::Exact.matches("George Orwell", "Orwell"));
        assert!(AuthorMatch::IgnoreCase.matches("Orwell", "orwell"));
        assert!(!AuthorMatch::IgnoreCase.matches("George Orwell", "orwell"));
        assert!(AuthorMatch::Contains.matches("George Orwell", "orwell"));
    }
}
