mod display_config;
mod main_config;

pub(crate) use snake_common::config::{
    ConfigManager, FileContentConfigProvider, YamlConfigSerializer,
};

pub use display_config::DisplayConfig;
pub use main_config::{CONFIG_FILE, Config, get_config_manager};
