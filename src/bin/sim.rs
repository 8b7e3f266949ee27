use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use salvo::{init_logging, Game, Player, TurnReport, STANDARD_FLEET};
use serde::Serialize;

/// Run computer-vs-computer games and print the outcome as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed of the first game; game `i` uses `seed + i`.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: u64,
    /// Include every shot in the output.
    #[arg(long)]
    moves: bool,
}

#[derive(Serialize)]
struct GameSummary {
    seed: u64,
    winner: Option<usize>,
    shots: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<Vec<TurnReport>>,
}

#[derive(Serialize)]
struct Report {
    games: Vec<GameSummary>,
    wins: [usize; 2],
    average_shots: f64,
}

fn play_one(seed: u64, keep_moves: bool) -> anyhow::Result<GameSummary> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut p1 = Player::computer("player1", seed.wrapping_mul(2));
    let mut p2 = Player::computer("player2", seed.wrapping_mul(2).wrapping_add(1));
    p1.auto_place_fleet(&STANDARD_FLEET, &mut rng)?;
    p2.auto_place_fleet(&STANDARD_FLEET, &mut rng)?;

    let mut game = Game::new(p1, p2);
    let mut moves = Vec::new();
    while !game.is_over() {
        let report = game.fire(0, 0)?;
        if keep_moves {
            moves.push(report);
        }
    }
    Ok(GameSummary {
        seed,
        winner: game.winner(),
        shots: game.turns_played(),
        moves: keep_moves.then_some(moves),
    })
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut games = Vec::new();
    let mut wins = [0usize; 2];
    for i in 0..args.games {
        let summary = play_one(args.seed.wrapping_add(i), args.moves)?;
        if let Some(w) = summary.winner {
            wins[w] += 1;
        }
        games.push(summary);
    }
    let average_shots = if games.is_empty() {
        0.0
    } else {
        games.iter().map(|g| g.shots as f64).sum::<f64>() / games.len() as f64
    };

    let report = Report {
        games,
        wins,
        average_shots,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
