use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{Mark, MatchTally, play_match};
use tictactoe_engine::log;

use crate::config::AutoPlayConfig;

pub fn run_series(settings: &AutoPlayConfig, rng: &mut SessionRng) -> MatchTally {
    log!(
        "Playing {} games: X = {}, O = {}, seed {}",
        settings.games,
        settings.x_bot,
        settings.o_bot,
        rng.seed()
    );

    let mut tally = MatchTally::new();
    for _ in 0..settings.games {
        let state = play_match(settings.x_bot, settings.o_bot, rng);
        tally.record(&state);
    }

    log!(
        "Series finished: X won {}, O won {}, {} draws",
        tally.x_wins,
        tally.o_wins,
        tally.draws
    );
    tally
}

pub fn format_tally(settings: &AutoPlayConfig, tally: &MatchTally) -> String {
    let total = f64::from(tally.total().max(1));
    let percent = |count: u32| 100.0 * f64::from(count) / total;
    format!(
        "X ({}) wins: {} ({:.1}%)\nO ({}) wins: {} ({:.1}%)\nDraws: {} ({:.1}%)",
        settings.x_bot,
        tally.wins_for(Mark::X),
        percent(tally.wins_for(Mark::X)),
        settings.o_bot,
        tally.wins_for(Mark::O),
        percent(tally.wins_for(Mark::O)),
        tally.draws,
        percent(tally.draws),
    )
}
