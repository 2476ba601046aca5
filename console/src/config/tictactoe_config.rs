use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tictactoe_engine::config::Validate;
use tictactoe_engine::games::tictactoe::{BotType, GameStatus, Mark};

/// `EveryonesAWinner` is played for a draw against the random bot only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    #[default]
    Standard,
    EveryonesAWinner,
}

impl GameMode {
    pub fn name(self) -> &'static str {
        match self {
            GameMode::Standard => "standard",
            GameMode::EveryonesAWinner => "everyones-a-winner",
        }
    }

    pub fn forced_bot(self) -> Option<BotType> {
        match self {
            GameMode::Standard => None,
            GameMode::EveryonesAWinner => Some(BotType::Random),
        }
    }

    pub fn describe_result(self, status: GameStatus) -> &'static str {
        match (self, status) {
            (_, GameStatus::InProgress) => "Game in progress.",
            (GameMode::Standard, GameStatus::XWon) => "X wins!",
            (GameMode::Standard, GameStatus::OWon) => "O wins!",
            (GameMode::Standard, GameStatus::Draw) => "It's a draw.",
            (GameMode::EveryonesAWinner, GameStatus::Draw) => "Everyone Wins!",
            (GameMode::EveryonesAWinner, _) => "Why is it always about winning?",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(GameMode::Standard),
            "everyones-a-winner" | "everyone" => Ok(GameMode::EveryonesAWinner),
            other => Err(format!(
                "Unknown game mode '{}', expected standard or everyones-a-winner",
                other
            )),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub bot: BotType,
    pub human_mark: Mark,
    pub ai_enabled: bool,
    #[serde(default)]
    pub mode: GameMode,
}

impl TicTacToeConfig {
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent().unwrap_or(Mark::O)
    }

    /// The strategy actually played. The mode can override `bot`.
    pub fn active_bot(&self) -> BotType {
        self.mode.forced_bot().unwrap_or(self.bot)
    }
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.human_mark.is_player() {
            return Err("human_mark must be X or O".to_string());
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            bot: BotType::WinBlockLose,
            human_mark: Mark::X,
            ai_enabled: true,
            mode: GameMode::Standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everyones_a_winner_forces_random_bot() {
        let config = TicTacToeConfig {
            bot: BotType::Minimax,
            mode: GameMode::EveryonesAWinner,
            ..TicTacToeConfig::default()
        };
        assert_eq!(config.active_bot(), BotType::Random);

        let standard = TicTacToeConfig {
            bot: BotType::Minimax,
            ..TicTacToeConfig::default()
        };
        assert_eq!(standard.active_bot(), BotType::Minimax);
    }

    #[test]
    fn test_result_messages_depend_on_mode() {
        let eaw = GameMode::EveryonesAWinner;
        assert_eq!(eaw.describe_result(GameStatus::Draw), "Everyone Wins!");
        assert_eq!(eaw.describe_result(GameStatus::XWon), "Why is it always about winning?");
        assert_eq!(eaw.describe_result(GameStatus::OWon), "Why is it always about winning?");
        assert_eq!(GameMode::Standard.describe_result(GameStatus::Draw), "It's a draw.");
        assert_eq!(GameMode::Standard.describe_result(GameStatus::OWon), "O wins!");
    }

    #[test]
    fn test_game_mode_from_str() {
        assert_eq!("Standard".parse::<GameMode>(), Ok(GameMode::Standard));
        assert_eq!("everyones-a-winner".parse::<GameMode>(), Ok(GameMode::EveryonesAWinner));
        assert_eq!("everyone".parse::<GameMode>(), Ok(GameMode::EveryonesAWinner));
        assert!("winner".parse::<GameMode>().is_err());
    }
}
