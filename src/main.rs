#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use salvo::{
    cli::{coord_to_string, parse_coord, parse_placement, render_board, render_fleet_status},
    init_logging, AttackResult, EngineError, Game, Player, PlayerKind, STANDARD_FLEET,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = "Player")]
        name: String,
    },
    /// Watch two computer players fight it out.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn computer(name: &str, seed: Option<u64>) -> Player {
    match seed {
        Some(s) => Player::computer(name, s),
        None => Player::new(name, PlayerKind::Computer),
    }
}

#[cfg(feature = "std")]
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, text: &str) -> anyhow::Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => Err(anyhow::anyhow!("input closed")),
    }
}

#[cfg(feature = "std")]
fn place_fleet_interactively(
    player: &mut Player,
    rng: &mut SmallRng,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<()> {
    println!("Place your ships: <COLUMN><ROW> <H|V>, e.g. A5 H. ENTER places the ship randomly.");
    for def in STANDARD_FLEET {
        loop {
            println!("\n{}", render_board(player.gameboard(), true));
            let line = prompt(lines, &format!("{} (length {}): ", def.name(), def.length()))?;
            if line.is_empty() {
                player.gameboard_mut().auto_place(def, rng)?;
                break;
            }
            match parse_placement(&line) {
                Ok((coord, orientation)) => match player.place_ship(def, coord.x, coord.y, orientation) {
                    Ok(_) => break,
                    Err(e) => println!("✗ {}", e),
                },
                Err(e) => println!("✗ {}", e),
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn play(seed: Option<u64>, name: String) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut human = Player::human(name);
    place_fleet_interactively(&mut human, &mut rng, &mut lines)?;
    let mut cpu = computer("Computer", seed.map(|s| s.wrapping_add(1)));
    cpu.auto_place_fleet(&STANDARD_FLEET, &mut rng)?;

    let mut game = Game::new(human, cpu);
    while !game.is_over() {
        if game.current_player().kind() == PlayerKind::Human {
            if let Some(cpu) = game.player(1) {
                println!("\nEnemy waters:\n{}", render_board(cpu.gameboard(), false));
            }
            let line = prompt(&mut lines, "Target: ")?;
            let coord = match parse_coord(&line) {
                Ok(c) => c,
                Err(e) => {
                    println!("✗ {}", e);
                    continue;
                }
            };
            match game.fire(coord.x, coord.y) {
                Ok(report) => {
                    let verdict = match (report.result, report.sunk) {
                        (AttackResult::Hit, true) => "hit and sunk!",
                        (AttackResult::Hit, false) => "hit!",
                        (AttackResult::Miss, _) => "miss.",
                    };
                    println!("{}: {}", coord_to_string(report.target), verdict);
                }
                Err(e @ EngineError::DuplicateAttack(_)) => println!("✗ {}", e),
                Err(e) => return Err(e.into()),
            }
        } else {
            let report = game.fire(0, 0)?;
            println!(
                "Computer fires at {}: {}{}",
                coord_to_string(report.target),
                report.result,
                if report.sunk { ", ship sunk" } else { "" }
            );
            if let Some(me) = game.player(0) {
                println!("\nYour waters:\n{}{}", render_board(me.gameboard(), true), render_fleet_status(me.gameboard()));
            }
        }
    }
    if let Some(winner) = game.winner().and_then(|w| game.player(w)) {
        println!("\n{} wins after {} shots.", winner.name(), game.turns_played());
    }
    Ok(())
}

#[cfg(feature = "std")]
fn auto(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut p1 = computer("Computer 1", seed);
    let mut p2 = computer("Computer 2", seed.map(|s| s.wrapping_add(1)));
    p1.auto_place_fleet(&STANDARD_FLEET, &mut rng)?;
    p2.auto_place_fleet(&STANDARD_FLEET, &mut rng)?;

    let mut game = Game::new(p1, p2);
    while !game.is_over() {
        let report = game.fire(0, 0)?;
        println!(
            "P{} -> {}: {}{}",
            report.attacker + 1,
            coord_to_string(report.target),
            report.result,
            if report.sunk { " (sunk)" } else { "" }
        );
    }
    for p in game.players() {
        println!("\n{}:\n{}{}", p.name(), render_board(p.gameboard(), true), render_fleet_status(p.gameboard()));
    }
    if let Some(winner) = game.winner().and_then(|w| game.player(w)) {
        println!("{} wins after {} shots.", winner.name(), game.turns_played());
    }
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, name } => play(seed, name),
        Commands::Auto { seed } => auto(seed),
    }
}
