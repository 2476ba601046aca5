use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BotType {
    Random,
    WinningMove,
    #[default]
    WinBlockLose,
    Minimax,
}

impl BotType {
    /// Ordered by difficulty.
    pub const ALL: [BotType; 4] = [
        BotType::Random,
        BotType::WinningMove,
        BotType::WinBlockLose,
        BotType::Minimax,
    ];

    pub const MAX_DIFFICULTY: u8 = 3;

    pub fn from_difficulty(difficulty: u8) -> Option<BotType> {
        Self::ALL.get(usize::from(difficulty)).copied()
    }

    pub fn difficulty(self) -> u8 {
        match self {
            BotType::Random => 0,
            BotType::WinningMove => 1,
            BotType::WinBlockLose => 2,
            BotType::Minimax => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BotType::Random => "random",
            BotType::WinningMove => "winning-move",
            BotType::WinBlockLose => "win-block-lose",
            BotType::Minimax => "minimax",
        }
    }
}

impl fmt::Display for BotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if let Ok(difficulty) = normalized.parse::<u8>() {
            return BotType::from_difficulty(difficulty).ok_or_else(|| {
                format!(
                    "Difficulty {} is out of range, expected 0 to {}",
                    difficulty,
                    BotType::MAX_DIFFICULTY
                )
            });
        }
        match normalized.as_str() {
            "random" => Ok(BotType::Random),
            "winning-move" | "winning" => Ok(BotType::WinningMove),
            "win-block-lose" | "win-block" => Ok(BotType::WinBlockLose),
            "minimax" => Ok(BotType::Minimax),
            other => Err(format!(
                "Unknown bot type '{}', expected one of: random, winning-move, win-block-lose, minimax",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trip() {
        for bot in BotType::ALL {
            assert_eq!(BotType::from_difficulty(bot.difficulty()), Some(bot));
        }
        assert_eq!(BotType::from_difficulty(4), None);
    }

    #[test]
    fn test_parse_names_aliases_and_levels() {
        assert_eq!("Minimax".parse::<BotType>(), Ok(BotType::Minimax));
        assert_eq!("win-block".parse::<BotType>(), Ok(BotType::WinBlockLose));
        assert_eq!("winning".parse::<BotType>(), Ok(BotType::WinningMove));
        assert_eq!("0".parse::<BotType>(), Ok(BotType::Random));
        assert!("7".parse::<BotType>().is_err());
        assert!("perfect".parse::<BotType>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for bot in BotType::ALL {
            assert_eq!(bot.to_string().parse::<BotType>(), Ok(bot));
        }
    }

    #[test]
    fn test_default_is_win_block_lose() {
        assert_eq!(BotType::default().difficulty(), 2);
    }
}
