use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

use super::types::{Mark, Sides};

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, TicTacToeSettings, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TicTacToeSettings {
    pub human_mark: Mark,
    /// Caps each live win-chance percentage at 100.
    pub clamp_win_chance: bool,
    pub analyze_history: bool,
}

impl TicTacToeSettings {
    pub fn sides(&self) -> Result<Sides, String> {
        Sides::with_human(self.human_mark)
    }
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            clamp_win_chance: false,
            analyze_history: true,
        }
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("human_mark must be X or O".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_settings_are_valid() {
        let settings = TicTacToeSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.sides().unwrap(), Sides::default());
    }

    #[test]
    fn test_empty_human_mark_is_rejected() {
        let settings = TicTacToeSettings {
            human_mark: Mark::Empty,
            ..TicTacToeSettings::default()
        };
        assert!(settings.validate().is_err());
        assert!(settings.sides().is_err());
    }

    #[test]
    fn test_settings_round_trip_through_yaml_string() {
        let settings = TicTacToeSettings {
            human_mark: Mark::O,
            clamp_win_chance: true,
            analyze_history: false,
        };
        let serializer = YamlConfigSerializer::new();
        let yaml = serializer.serialize(&settings).unwrap();
        let restored: TicTacToeSettings = serializer.deserialize(&yaml).unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let serializer = YamlConfigSerializer::new();
        let settings: TicTacToeSettings = serializer.deserialize("clamp_win_chance: true\n").unwrap();
        assert!(settings.clamp_win_chance);
        assert_eq!(settings.human_mark, Mark::X);
        assert!(settings.analyze_history);
    }

    #[test]
    fn test_missing_file_yields_default() {
        let manager = get_config_manager(&get_temp_file_path());
        assert_eq!(manager.get_config().unwrap(), TicTacToeSettings::default());
    }

    #[test]
    fn test_config_manager_writes_and_reads_file() {
        let file_path = get_temp_file_path();
        let settings = TicTacToeSettings {
            human_mark: Mark::O,
            ..TicTacToeSettings::default()
        };

        get_config_manager(&file_path).set_config(&settings).unwrap();

        let provider = FileContentConfigProvider::new(file_path.clone());
        assert!(provider.get_config_content().unwrap().is_some());

        let reloaded = get_config_manager(&file_path).get_config().unwrap();
        assert_eq!(reloaded, settings);

        std::fs::remove_file(&file_path).unwrap();
    }

    #[test]
    fn test_invalid_file_content_is_reported() {
        let file_path = get_temp_file_path();
        std::fs::write(&file_path, "human_mark: Empty\n").unwrap();

        let result = get_config_manager(&file_path).get_config();
        assert!(result.unwrap_err().starts_with("Config validation error"));

        std::fs::remove_file(&file_path).unwrap();
    }
}
