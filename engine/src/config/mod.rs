mod config_content_provider;
mod config_manager;
mod config_serializer;
mod engine_config;
mod error;
mod validate;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider, InMemoryConfigProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use engine_config::{EngineConfig, MAX_SELF_PLAY_GAMES, SelfPlayConfig};
pub use error::ConfigError;
pub use validate::Validate;
