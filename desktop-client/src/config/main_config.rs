use snake_common::config::Validate;
use snake_common::games::snake::SnakeSettings;
use serde::{Deserialize, Serialize};

use super::{ConfigManager, DisplayConfig, FileContentConfigProvider, YamlConfigSerializer};

pub const CONFIG_FILE: &str = "snake_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: SnakeSettings,
    pub display: DisplayConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.display.validate()?;
        Ok(())
    }
}
