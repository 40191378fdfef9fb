//! Generate a level and clear it with the engine's own hints, printing every connection made.
//!
//! Usage: cargo run -- [--level 3] [--seed 7] [--difficulty hard]
//! Set `RUST_LOG=tilelink=debug` to watch the session at work.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use unordered_pair::UnorderedPair;

use tilelink::config::Rules;
use tilelink::generator::generate;
use tilelink::level::{Level, FIRST_LEVEL, LAST_LEVEL};
use tilelink::session::{PickOutcome, Session, SessionId, Status};
use tilelink::settings::Difficulty;

#[derive(Parser, Debug)]
#[command(name = "autoplay")]
#[command(about = "Play a generated level using only hints", long_about = None)]
struct Args {
    /// Level to play
    #[arg(long, default_value_t = FIRST_LEVEL, value_parser = clap::value_parser!(u32).range(FIRST_LEVEL as i64..=LAST_LEVEL as i64))]
    level: u32,

    /// Random seed for the board
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// easy, normal, or hard
    #[arg(long, default_value_t = Difficulty::Normal)]
    difficulty: Difficulty,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let level = Level::get(args.level);
    let mut rng = StdRng::seed_from_u64(args.seed);

    let grid = match generate(level.size, &level.alphabet, &mut rng) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("cannot generate level {}: {}", level.number, err);
            std::process::exit(1);
        }
    };
    info!(level = level.number, seed = args.seed, difficulty = %args.difficulty, "generated");
    println!("{}", grid);

    let mut session = match Session::new(SessionId(1), level.number, args.difficulty, Rules::default(), grid) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("cannot start a session: {}", err);
            std::process::exit(1);
        }
    };
    let mut moves = 0;

    while let Some(UnorderedPair(a, b)) = session.hint() {
        session.pick(a);
        match session.pick(b) {
            PickOutcome::Matched { connection, points } => {
                moves += 1;
                let path = connection.points().iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                println!("{:>3}: {} ({} turns, +{})", moves, path, connection.turns(), points);
            }
            other => {
                warn!(%a, %b, ?other, "hinted pair did not match");
                break;
            }
        }
    }

    println!();
    println!("{}", session.grid());
    match session.status() {
        Status::Won => println!("cleared in {} moves, score {}", moves, session.score()),
        _ => println!(
            "stuck after {} moves with {} tiles left, score {}",
            moves,
            session.grid().remaining_tiles(),
            session.score(),
        ),
    }
}
