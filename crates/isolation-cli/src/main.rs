//! Isolation 対局ランナー
//!
//! # 使用例
//!
//! ```shell
//! # alpha-beta エージェント vs ランダム、10局（先後入れ替え）
//! cargo run -p isolation-cli --release -- play \
//!   --first agent --second random --method alphabeta --games 10 --seed 1
//!
//! # 両者を TOML で設定し、棋譜を JSONL で保存
//! RUST_LOG=info cargo run -p isolation-cli --release -- play \
//!   --config match.toml --record runs/games.jsonl
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use isolation_core::{Board, Player, SearchMethod};
use log::info;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use isolation_cli::config::{MatchFile, PlayerKind, SideConfig};
use isolation_cli::contestant::{Contestant, build_contestant};
use isolation_cli::game::{GameConfig, MoveEvent, run_game};
use isolation_cli::record::{Record, Recorder};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "isolation", about = "match runner for Isolation search agents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play games between two players
    Play(PlayArgs),
}

#[derive(clap::Args, Debug)]
struct PlayArgs {
    /// Player for the first seat (default: agent)
    #[arg(long, value_enum)]
    first: Option<PlayerKind>,

    /// Player for the second seat (default: random)
    #[arg(long, value_enum)]
    second: Option<PlayerKind>,

    /// Search method for agents (minimax / alphabeta)
    #[arg(long)]
    method: Option<SearchMethod>,

    /// Fixed search depth for agents
    #[arg(long)]
    depth: Option<u32>,

    /// Use iterative deepening (true / false)
    #[arg(long)]
    iterative: Option<bool>,

    /// Stop searching when fewer than this many milliseconds remain
    #[arg(long)]
    threshold: Option<f64>,

    /// TOML file with [first] / [second] tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Time limit per move in milliseconds
    #[arg(long, default_value_t = 150)]
    time_limit_ms: u64,

    /// RNG seed (random players and openings)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of random plies before the players take over
    #[arg(long, default_value_t = 0)]
    random_openings: u32,

    /// Number of games (seats alternate every game)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    games: u32,

    /// Board width
    #[arg(long, default_value_t = 7)]
    width: usize,

    /// Board height
    #[arg(long, default_value_t = 7)]
    height: usize,

    /// Write a JSONL record of every move
    #[arg(long)]
    record: Option<PathBuf>,
}

impl PlayArgs {
    /// コマンドラインで指定された探索設定
    fn overrides(&self, player: Option<PlayerKind>) -> SideConfig {
        SideConfig {
            player,
            method: self.method,
            search_depth: self.depth,
            iterative: self.iterative,
            timer_threshold_ms: self.threshold,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Play(args) => play(&args),
    }
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

fn play(args: &PlayArgs) -> Result<()> {
    let file = match &args.config {
        Some(path) => MatchFile::load(path)?,
        None => MatchFile::default(),
    };
    let mut first = file.first.merged(&args.overrides(args.first));
    first.player = first.player.or(Some(PlayerKind::Agent));
    let mut second = file.second.merged(&args.overrides(args.second));
    second.player = second.player.or(Some(PlayerKind::Random));

    let start = Board::new(args.width, args.height)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("seed: {seed}");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    // entrants[0] は偶数局で先手、奇数局で後手
    let mut entrants: [Box<dyn Contestant>; Player::NUM] = [
        build_contestant(&first, seed.wrapping_add(1))?,
        build_contestant(&second, seed.wrapping_add(2))?,
    ];
    let names = [entrants[0].name(), entrants[1].name()];
    let game_config = GameConfig {
        time_limit: Duration::from_millis(args.time_limit_ms),
        random_openings: args.random_openings,
    };

    let mut recorder = Recorder::create(args.record.as_deref())?;
    let mut wins = [0u32; Player::NUM];

    for game in 0..args.games {
        let swapped = game % 2 == 1;
        if swapped {
            entrants.swap(0, 1);
        }
        let seats = if swapped { [1, 0] } else { [0, 1] };

        recorder.write(&Record::GameStart {
            game,
            started_at: Local::now().to_rfc3339(),
            first: &names[seats[0]],
            second: &names[seats[1]],
            width: start.width(),
            height: start.height(),
        })?;
        let mut on_move = |event: &MoveEvent| recorder.write(&Record::from_move(game, event));
        let result = run_game(start, &mut entrants, &game_config, &mut rng, &mut on_move);
        if swapped {
            entrants.swap(0, 1);
        }
        let result = result?;
        recorder.write(&Record::from_result(game, &result))?;

        let winner = seats[result.winner.index()];
        wins[winner] += 1;
        println!(
            "game {}: {} ({}) wins by {} after {} plies",
            game + 1,
            names[winner],
            result.winner,
            result.reason,
            result.plies
        );
    }
    recorder.finish()?;

    println!("games: {}", args.games);
    for (i, name) in names.iter().enumerate() {
        println!("[{}] {name}: {} wins", i + 1, wins[i]);
    }
    Ok(())
}
