use std::io::{self, BufRead, Write};

use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{BOARD_SIZE, TicTacToeGameState, calculate_move};
use tictactoe_engine::log;

use crate::config::TicTacToeConfig;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Move { x: usize, y: usize },
    NewGame,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "new" | "n" => return Ok(Command::NewGame),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();
    let [x, y] = parts.as_slice() else {
        return Err("Enter a move as 'x y', or 'new' / 'quit'".to_string());
    };
    let x = x
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a coordinate", x))?;
    let y = y
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a coordinate", y))?;
    Ok(Command::Move { x, y })
}

/// Board with `x` down the side and `y` across the top, followed by the
/// winning line once there is one.
pub fn render_board(state: &TicTacToeGameState) -> String {
    let mut out = String::from(" ");
    for y in 0..BOARD_SIZE {
        out.push_str(&format!(" {}", y));
    }
    for x in 0..BOARD_SIZE {
        out.push_str(&format!("\n{}", x));
        for y in 0..BOARD_SIZE {
            let mark = state.mark_at(x, y).unwrap_or_default();
            out.push_str(&format!(" {}", mark));
        }
    }
    if let Some(line) = state.winning_line() {
        out.push_str(&format!(
            "\n{} {} {}",
            line.start(),
            line.cells[1],
            line.end()
        ));
    }
    out
}

/// Runs games until the input ends or the player quits. Computer moves are
/// made for the mark opposite `settings.human_mark` when the AI is enabled.
pub fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &TicTacToeConfig,
    rng: &mut SessionRng,
) -> io::Result<()> {
    let mut state = TicTacToeGameState::new();
    let bot = settings.active_bot();
    let computer_mark = settings.ai_enabled.then(|| settings.computer_mark());
    log!(
        "New {} game, computer plays {}",
        settings.mode,
        computer_mark.map_or("nobody".to_string(), |mark| format!("{} ({})", mark, bot))
    );
    writeln!(output, "{}", render_board(&state))?;

    loop {
        if state.is_over() {
            let result = settings.mode.describe_result(state.status());
            log!("Game over: {}", result);
            writeln!(output, "{} Type 'new' to play again or 'quit'.", result)?;
        } else {
            let player = state.turn_to_move();
            if computer_mark == Some(player) {
                if let Some(pos) = calculate_move(bot, &state, player, rng) {
                    state.apply_move(pos.x, pos.y, player);
                    log!("Computer ({}) played {} at {}", bot, player, pos);
                    writeln!(output, "Computer plays {}\n{}", pos, render_board(&state))?;
                }
                continue;
            }
            write!(output, "{} to move (x y): ", player)?;
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match parse_command(&line) {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::NewGame) => {
                state.reset();
                log!("Board reset");
                writeln!(output, "{}", render_board(&state))?;
            }
            Ok(Command::Move { x, y }) => {
                let player = state.turn_to_move();
                match state.try_apply_move(x, y, player) {
                    Ok(()) => writeln!(output, "{}", render_board(&state))?,
                    Err(e) => writeln!(output, "{}", e)?,
                }
            }
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use crate::config::GameMode;
    use tictactoe_engine::games::tictactoe::{BotType, Mark};

    fn play(script: &str, settings: &TicTacToeConfig) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let mut rng = SessionRng::new(5);
        run_interactive(&mut input, &mut output, settings, &mut rng).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn two_players() -> TicTacToeConfig {
        TicTacToeConfig {
            ai_enabled: false,
            ..TicTacToeConfig::default()
        }
    }

    fn everyones_a_winner() -> TicTacToeConfig {
        TicTacToeConfig {
            mode: GameMode::EveryonesAWinner,
            ..two_players()
        }
    }

    // X O X / X O O / O X X, no line for either side.
    const DRAW_SCRIPT: &str = "0 0\n0 1\n0 2\n1 1\n1 0\n1 2\n2 1\n2 0\n2 2\nquit\n";
    const X_WINS_SCRIPT: &str = "0 0\n1 0\n0 1\n1 1\n0 2\nquit\n";

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("1 2\n"), Ok(Command::Move { x: 1, y: 2 }));
        assert_eq!(parse_command(" 0,2 "), Ok(Command::Move { x: 0, y: 2 }));
        assert_eq!(parse_command("NEW"), Ok(Command::NewGame));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert!(parse_command("1").is_err());
        assert!(parse_command("a b").is_err());
    }

    #[test]
    fn test_render_board() {
        let state = TicTacToeGameState::from_marks(&[(0, 2, Mark::X), (1, 1, Mark::O)]);
        assert_eq!(render_board(&state), "  0 1 2\n0 - - X\n1 - O -\n2 - - -");
    }

    #[test]
    fn test_render_board_lists_winning_line() {
        let state = TicTacToeGameState::from_marks(&[
            (0, 2, Mark::X),
            (1, 0, Mark::O),
            (1, 1, Mark::X),
            (2, 2, Mark::O),
            (2, 0, Mark::X),
        ]);
        assert_eq!(
            render_board(&state),
            "  0 1 2\n0 - - X\n1 O X -\n2 X - O\n(0, 2) (1, 1) (2, 0)"
        );
    }

    #[test]
    fn test_two_player_game_reports_winner() {
        let output = play(X_WINS_SCRIPT, &two_players());
        assert!(output.contains("X wins!"), "{}", output);
    }

    #[test]
    fn test_two_player_draw_is_reported() {
        let output = play(DRAW_SCRIPT, &two_players());
        assert!(output.contains("It's a draw."), "{}", output);
    }

    #[test]
    fn test_everyones_a_winner_celebrates_draw() {
        let output = play(DRAW_SCRIPT, &everyones_a_winner());
        assert!(output.contains("Everyone Wins!"), "{}", output);
        assert!(!output.contains("It's a draw."), "{}", output);
    }

    #[test]
    fn test_everyones_a_winner_frowns_on_a_win() {
        let output = play(X_WINS_SCRIPT, &everyones_a_winner());
        assert!(output.contains("Why is it always about winning?"), "{}", output);
        assert!(!output.contains("X wins!"), "{}", output);
    }

    #[test]
    fn test_everyones_a_winner_computer_plays_randomly() {
        let settings = TicTacToeConfig {
            bot: BotType::Minimax,
            human_mark: Mark::O,
            ai_enabled: true,
            mode: GameMode::EveryonesAWinner,
        };
        let output = play("quit\n", &settings);
        let mut rng = SessionRng::new(5);
        let expected = calculate_move(BotType::Random, &TicTacToeGameState::new(), Mark::X, &mut rng)
            .unwrap();
        assert!(output.contains(&format!("Computer plays {}", expected)), "{}", output);
    }

    #[test]
    fn test_occupied_cell_is_reported() {
        let output = play("1 1\n1 1\n", &two_players());
        assert!(output.contains("Cell (1, 1) is already marked"), "{}", output);
        assert!(output.contains("O to move"), "{}", output);
    }

    #[test]
    fn test_computer_opens_when_human_plays_o() {
        let settings = TicTacToeConfig {
            bot: BotType::Minimax,
            human_mark: Mark::O,
            ai_enabled: true,
            mode: GameMode::Standard,
        };
        let output = play("quit\n", &settings);
        assert!(output.contains("Computer plays (0, 0)"), "{}", output);
        assert!(output.contains("O to move"), "{}", output);
    }

    #[test]
    fn test_computer_blocks_human() {
        let settings = TicTacToeConfig {
            bot: BotType::Minimax,
            human_mark: Mark::X,
            ai_enabled: true,
            mode: GameMode::Standard,
        };
        // Minimax answers the corner with the centre, then must block at (0,2).
        let output = play("0 0\n0 1\n", &settings);
        assert!(output.contains("Computer plays (1, 1)"), "{}", output);
        assert!(output.contains("Computer plays (0, 2)"), "{}", output);
    }
}
