mod auto_play_config;
mod config;
mod tictactoe_config;

pub(crate) use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use auto_play_config::AutoPlayConfig;
pub use config::{ConsoleConfig, get_config_manager, get_config_path};
pub use tictactoe_config::{GameMode, TicTacToeConfig};
