use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::config::Validate;

use super::{
    AutoPlayConfig, ConfigManager, FileContentConfigProvider, TicTacToeConfig,
    YamlConfigSerializer,
};

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, ConsoleConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct ConsoleConfig {
    pub tictactoe: TicTacToeConfig,
    #[serde(default)]
    pub auto_play: AutoPlayConfig,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub use_log_prefix: bool,
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        self.auto_play.validate()?;
        Ok(())
    }
}
