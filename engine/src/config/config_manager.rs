use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, Mutex};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl AsRef<Path>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.as_ref()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Difficulty, GameMode, TicTacToeSessionSettings};
    use std::cell::RefCell;

    struct MemoryContentProvider {
        content: RefCell<Option<String>>,
    }

    impl MemoryContentProvider {
        fn new(content: Option<&str>) -> Self {
            Self {
                content: RefCell::new(content.map(str::to_string)),
            }
        }
    }

    impl ConfigContentProvider for MemoryContentProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn get_temp_file_path() -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_settings_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_missing_content_returns_default() {
        let manager: ConfigManager<_, TicTacToeSessionSettings, _> =
            ConfigManager::new(MemoryContentProvider::new(None), YamlConfigSerializer::new());

        assert_eq!(manager.get_config(), Ok(TicTacToeSessionSettings::default()));
    }

    #[test]
    fn test_missing_file_returns_default() {
        let manager: ConfigManager<_, TicTacToeSessionSettings, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");

        assert_eq!(manager.get_config(), Ok(TicTacToeSessionSettings::default()));
    }

    #[test]
    fn test_saved_config_round_trips_through_file() {
        let file_path = get_temp_file_path();
        let settings = TicTacToeSessionSettings {
            mode: GameMode::TwoPlayer,
            difficulty: Difficulty::Easy,
            think_delay_ms: 250,
            seed: Some(9),
        };

        let manager = ConfigManager::from_yaml_file(&file_path);
        manager.set_config(&settings).unwrap();

        let fresh: ConfigManager<_, TicTacToeSessionSettings, _> =
            ConfigManager::from_yaml_file(&file_path);
        assert_eq!(fresh.get_config(), Ok(settings));

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let content = "mode: VsComputer\ndifficulty: Hard\nthink_delay_ms: 999999\n";
        let manager: ConfigManager<_, TicTacToeSessionSettings, _> = ConfigManager::new(
            MemoryContentProvider::new(Some(content)),
            YamlConfigSerializer::new(),
        );

        let result = manager.get_config();

        assert!(result.unwrap_err().starts_with("Config validation error"));
    }

    #[test]
    fn test_invalid_config_cant_be_saved() {
        let manager: ConfigManager<_, TicTacToeSessionSettings, _> =
            ConfigManager::new(MemoryContentProvider::new(None), YamlConfigSerializer::new());
        let settings = TicTacToeSessionSettings {
            think_delay_ms: 999_999,
            ..TicTacToeSessionSettings::default()
        };

        assert!(manager.set_config(&settings).is_err());
        assert_eq!(manager.get_config(), Ok(TicTacToeSessionSettings::default()));
    }

    #[test]
    fn test_config_is_cached_after_first_read() {
        let provider = MemoryContentProvider::new(Some(
            "mode: TwoPlayer\ndifficulty: Easy\nthink_delay_ms: 0\n",
        ));
        let manager: ConfigManager<_, TicTacToeSessionSettings, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());

        let first = manager.get_config().unwrap();
        *manager.config_content_provider.content.borrow_mut() = None;
        let second = manager.get_config().unwrap();

        assert_eq!(first, second);
        assert_eq!(second.mode, GameMode::TwoPlayer);
    }
}
