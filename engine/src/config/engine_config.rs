use serde::{Deserialize, Serialize};

use super::Validate;
use crate::games::BotType;
use crate::games::tictactoe::SearchSettings;

pub const MAX_SELF_PLAY_GAMES: u32 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct SelfPlayConfig {
    pub games: u32,
    pub x_bot: BotType,
    pub o_bot: BotType,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for SelfPlayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 || self.games > MAX_SELF_PLAY_GAMES {
            return Err(format!(
                "self_play.games must be between 1 and {}, got {}",
                MAX_SELF_PLAY_GAMES, self.games
            ));
        }
        Ok(())
    }
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 1,
            x_bot: BotType::Minimax,
            o_bot: BotType::Minimax,
            seed: None,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub self_play: SelfPlayConfig,
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        self.self_play.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigContentProvider, ConfigError, ConfigManager, ConfigSerializer, InMemoryConfigProvider,
        YamlConfigSerializer,
    };

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_engine_config_{}.yaml", random_number))
    }

    fn sample_config() -> EngineConfig {
        EngineConfig {
            search: SearchSettings {
                pruning: false,
                transposition_table: true,
            },
            self_play: SelfPlayConfig {
                games: 25,
                x_bot: BotType::Random,
                o_bot: BotType::Minimax,
                seed: Some(99),
            },
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();

        assert!(config.validate().is_ok());
        assert!(config.search.pruning);
        assert!(!config.search.transposition_table);
    }

    #[test]
    fn test_zero_games_rejected() {
        let mut config = EngineConfig::default();
        config.self_play.games = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_too_many_games_rejected() {
        let mut config = EngineConfig::default();
        config.self_play.games = MAX_SELF_PLAY_GAMES + 1;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let serializer = YamlConfigSerializer;
        let config = sample_config();

        let yaml = serializer.serialize(&config).unwrap();
        let parsed: EngineConfig = serializer.deserialize(&yaml).unwrap();

        assert_eq!(parsed, config);
        assert!(yaml.contains("x_bot: random"));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let serializer = YamlConfigSerializer;

        let parsed: EngineConfig = serializer
            .deserialize("self_play:\n  games: 4\n  x_bot: minimax\n  o_bot: random\n")
            .unwrap();

        assert_eq!(parsed.search, SearchSettings::default());
        assert_eq!(parsed.self_play.games, 4);
        assert_eq!(parsed.self_play.seed, None);
    }

    #[test]
    fn test_manager_missing_content_returns_default() {
        let manager: ConfigManager<_, EngineConfig> =
            ConfigManager::new(InMemoryConfigProvider::default(), YamlConfigSerializer);

        assert_eq!(manager.get_config().unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_manager_rejects_invalid_content() {
        let provider = InMemoryConfigProvider::new(Some(
            "self_play:\n  games: 0\n  x_bot: minimax\n  o_bot: minimax\n".to_string(),
        ));
        let manager: ConfigManager<_, EngineConfig> = ConfigManager::new(provider, YamlConfigSerializer);

        assert!(matches!(manager.get_config(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_manager_rejects_malformed_yaml() {
        let provider = InMemoryConfigProvider::new(Some("search: [not, a, map".to_string()));
        let manager: ConfigManager<_, EngineConfig> = ConfigManager::new(provider, YamlConfigSerializer);

        assert!(matches!(manager.get_config(), Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_manager_set_then_get() {
        let manager: ConfigManager<_, EngineConfig> =
            ConfigManager::new(InMemoryConfigProvider::default(), YamlConfigSerializer);
        let config = sample_config();

        manager.set_config(&config).unwrap();

        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_manager_set_invalid_is_rejected() {
        let manager: ConfigManager<_, EngineConfig> =
            ConfigManager::new(InMemoryConfigProvider::default(), YamlConfigSerializer);
        let mut config = sample_config();
        config.self_play.games = 0;

        assert!(manager.set_config(&config).is_err());
        assert_eq!(manager.get_config().unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_file_config_round_trip() {
        let path = get_temp_file_path();
        let config = sample_config();

        let manager: ConfigManager<_, EngineConfig> = ConfigManager::from_yaml_file(&path);
        manager.set_config(&config).unwrap();

        let reloaded: ConfigManager<_, EngineConfig> = ConfigManager::from_yaml_file(&path);
        assert_eq!(reloaded.get_config().unwrap(), config);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_has_no_content() {
        let provider = crate::config::FileContentConfigProvider::new(get_temp_file_path());

        assert!(provider.get_config_content().unwrap().is_none());
    }
}
