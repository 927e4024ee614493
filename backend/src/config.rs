use tracing::warn;
use crate::store::DEFAULT_IDLE_MINUTES;

pub const RESULTS_PATH_KEY: &str = "RESULTS_PATH";
pub const SESSION_IDLE_MINUTES_KEY: &str = "SESSION_IDLE_MINUTES";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub results_path: Option<String>,
    pub session_idle_minutes: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            results_path: None,
            session_idle_minutes: DEFAULT_IDLE_MINUTES,
        }
    }
}

impl ServerConfig {
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Self {
        Self::from_lookup(|key| secrets.get(key))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let results_path = lookup(RESULTS_PATH_KEY).filter(|p| !p.trim().is_empty());

        let session_idle_minutes = match lookup(SESSION_IDLE_MINUTES_KEY) {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(minutes) if minutes > 0 => minutes,
                _ => {
                    warn!("Ignoring invalid {} value {:?}", SESSION_IDLE_MINUTES_KEY, raw);
                    DEFAULT_IDLE_MINUTES
                }
            },
            None => DEFAULT_IDLE_MINUTES,
        };

        Self { results_path, session_idle_minutes }
    }
}
