use serde::{Deserialize, Serialize};
use tictactoe_engine::config::Validate;
use tictactoe_engine::games::tictactoe::BotType;

pub const MAX_AUTO_PLAY_GAMES: u32 = 100_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct AutoPlayConfig {
    pub x_bot: BotType,
    pub o_bot: BotType,
    pub games: u32,
}

impl Validate for AutoPlayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 || self.games > MAX_AUTO_PLAY_GAMES {
            return Err(format!(
                "auto_play.games must be between 1 and {}",
                MAX_AUTO_PLAY_GAMES
            ));
        }
        Ok(())
    }
}

impl Default for AutoPlayConfig {
    fn default() -> Self {
        Self {
            x_bot: BotType::Minimax,
            o_bot: BotType::Random,
            games: 100,
        }
    }
}
