use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_engine::games::tictactoe::TicTacToeSessionSettings;

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: TicTacToeSessionSettings,
    #[serde(default)]
    pub use_log_prefix: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigContentProvider, ConfigSerializer};
    use tictactoe_engine::games::tictactoe::{Difficulty, GameMode};

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_console_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_with_manager() {
        let config = Config {
            game: TicTacToeSessionSettings {
                mode: GameMode::VsComputer,
                difficulty: Difficulty::Hard,
                think_delay_ms: 0,
                seed: Some(3),
            },
            use_log_prefix: true,
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));

        manager.set_config(&config).unwrap();

        let reloaded = get_config_manager(Some(file_path.clone()));
        assert_eq!(reloaded.get_config(), Ok(config));

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));

        assert_eq!(manager.get_config(), Ok(Config::default()));
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            game:
              mode: VsComputer
              # difficulty is missing
              think_delay_ms: 200
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager = get_config_manager(Some(file_path.clone()));
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(&file_path);
    }
}
