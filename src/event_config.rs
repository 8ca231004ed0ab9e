use crate::models::{EventConfig, ServiceError};
use std::path::PathBuf;
use std::sync::RwLock;

/// Durable store for the event configuration, backed by a JSON file with an
/// explicit load/save boundary. A missing or unreadable file yields the
/// compiled-in defaults; unknown older files merge field-by-field through
/// `#[serde(default)]`.
pub struct EventConfigStore {
    path: PathBuf,
    cached: RwLock<EventConfig>,
}

impl EventConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = Self::read_file(&path);
        Self {
            path,
            cached: RwLock::new(config),
        }
    }

    fn read_file(path: &PathBuf) -> EventConfig {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<EventConfig>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse event configuration at {}: {} - using defaults",
                        path.display(),
                        e
                    );
                    EventConfig::default()
                }
            },
            Err(_) => EventConfig::default(),
        }
    }

    /// Current configuration (cached copy).
    pub fn load(&self) -> EventConfig {
        self.cached
            .read()
            .expect("event config lock poisoned")
            .clone()
    }

    /// Re-read the configuration from disk, refreshing the cache.
    pub fn reload(&self) -> EventConfig {
        let config = Self::read_file(&self.path);
        *self.cached.write().expect("event config lock poisoned") = config.clone();
        config
    }

    /// Validate and persist a new configuration, then update the cache.
    pub fn save(&self, config: &EventConfig) -> Result<(), ServiceError> {
        config
            .validate()
            .map_err(ServiceError::ValidationError)?;

        let json = serde_json::to_string_pretty(config)
            .map_err(|e| ServiceError::InternalError(format!("Failed to encode configuration: {}", e)))?;
        std::fs::write(&self.path, json)
            .map_err(|e| ServiceError::InternalError(format!("Failed to write configuration: {}", e)))?;

        *self.cached.write().expect("event config lock poisoned") = config.clone();
        tracing::info!("Event configuration saved to {}", self.path.display());
        Ok(())
    }
}
