use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Difficulty, TicTacToeSessionSettings};

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let content = "mode: VsComputer\ndifficulty: Impossible\nthink_delay_ms: 10\n";

        let result: Result<TicTacToeSessionSettings, String> =
            YamlConfigSerializer::new().deserialize(content);

        assert!(result.unwrap_err().starts_with("Failed to deserialize config"));
    }

    #[test]
    fn test_serialized_settings_name_variants() {
        let settings = TicTacToeSessionSettings {
            difficulty: Difficulty::Hard,
            ..TicTacToeSessionSettings::default()
        };

        let content = YamlConfigSerializer::new().serialize(&settings).unwrap();

        assert!(content.contains("difficulty: Hard"));
        assert!(content.contains("mode: VsComputer"));
    }
}
