//! Command-line adapter: play one game and print the trace.
//!
//! ```text
//! fizzbuzz --player ann:4 --player ben:1 --seed 7
//! ```

use std::process::ExitCode;

use clap::Parser;
use fizzbuzz_pro::{
    play, GameConfig, GameRng, GameTrace, MemoryLedger, Outcome, PlayerRef, MAX_ROUNDS,
};

#[derive(Parser, Debug)]
#[command(name = "fizzbuzz", about = "Simulate a FizzBuzz elimination game")]
struct Args {
    /// Player as NAME:SKILL. Repeat for each player, in turn order.
    #[arg(short, long = "player", value_parser = parse_player, required = true)]
    players: Vec<(String, u8)>,

    /// Seed for the answer draws. Random if omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Round cap before the game is called a draw.
    #[arg(long, default_value_t = MAX_ROUNDS)]
    max_rounds: u32,

    /// First number spoken.
    #[arg(long, default_value_t = 1)]
    start: i64,

    /// Print the trace as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn parse_player(s: &str) -> Result<(String, u8), String> {
    let (name, skill) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected NAME:SKILL, got {s:?}"))?;
    let skill = skill
        .parse::<u8>()
        .map_err(|e| format!("invalid skill in {s:?}: {e}"))?;
    Ok((name.to_string(), skill))
}

fn render(trace: &GameTrace) {
    for round in &trace.rounds {
        println!("round {}", round.number);
        for mv in &round.moves {
            let name = trace.player(mv.player).map(|p| p.name.as_str()).unwrap_or("?");
            let mark = if mv.correct { "ok" } else { "OUT" };
            println!("  {:>6}  {:<12} {:<10} {}", mv.number, name, mv.answer, mark);
        }
    }
    match trace.outcome() {
        Outcome::Winner(p) => println!("{} wins after {} rounds", p.name, trace.total_rounds),
        Outcome::Draw => println!("draw after {} rounds", trace.total_rounds),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let players: Vec<PlayerRef> = args
        .players
        .into_iter()
        .enumerate()
        .map(|(i, (name, skill))| PlayerRef::new(i as u32 + 1, name, skill))
        .collect();
    let config = GameConfig::new()
        .with_max_rounds(args.max_rounds)
        .with_start_number(args.start);
    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::info!("seed {}", rng.seed());

    let mut ledger = MemoryLedger::new();
    let trace = match play(&players, &mut ledger, &config, &mut rng) {
        Ok(trace) => trace,
        Err(e) => {
            eprintln!("game could not run: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&trace) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("could not render trace: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        render(&trace);
    }
    ExitCode::SUCCESS
}
