//! Mastermind - CLI
//!
//! Colour code-breaking game with TUI, console, solver and session-host modes.

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use mastermind::{
    commands::{
        BenchmarkConfig, SimpleConfig, SolveConfig, run_benchmark, run_session, run_simple,
        solve_code,
    },
    core::{CodeSpace, Palette},
    game::{GameConfig, GameMode},
    output::{print_benchmark_result, print_solve_result},
    solver::Solver,
    store::LruTtl,
};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game with a candidate-elimination AI",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Palette size: 6 (R G B Y O P) or 8 (adds C W)
    #[arg(short, long, global = true, default_value = "6")]
    colors: usize,

    /// Number of pegs in a code
    #[arg(short, long, global = true, default_value = "4")]
    length: usize,

    /// Guesses allowed per player
    #[arg(short, long, global = true, default_value = "10")]
    attempts: usize,

    /// Allow a colour to appear more than once in a code
    #[arg(long, global = true)]
    allow_repeats: bool,
}

/// Who plays and with which secrets
#[derive(Args, Default)]
struct SetupArgs {
    /// Mode: `player_vs_ai`, `pvp_one_by_one`, `ai_guesses`, versus, `pvp_duel`
    #[arg(short, long)]
    mode: Option<String>,

    /// Player name, in turn order (repeatable)
    #[arg(short, long = "player")]
    players: Vec<String>,

    /// Secret code chosen by a player, in player order (repeatable)
    #[arg(short, long = "secret")]
    secrets: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        #[command(flatten)]
        setup: SetupArgs,
    },

    /// Console mode covering every game mode
    Simple {
        #[command(flatten)]
        setup: SetupArgs,
    },

    /// Let the AI crack a given secret
    Solve {
        /// The secret code, e.g. RGBY
        secret: String,

        /// Show candidate counts for every guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the AI over random secrets
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Serve games as JSON lines over stdin/stdout
    Session {
        /// Seconds a game may sit idle before it is dropped
        #[arg(long, default_value = "3600")]
        ttl_secs: u64,

        /// Maximum number of live games
        #[arg(long, default_value = "1024")]
        capacity: usize,
    },
}

impl Cli {
    fn game_config(&self, mode: GameMode, setup: SetupArgs) -> GameConfig {
        GameConfig {
            mode,
            length: self.length,
            palette_size: self.colors,
            max_attempts: self.attempts,
            players: setup.players,
            secrets: setup.secrets,
            allow_repeats: self.allow_repeats,
        }
    }

    fn code_space(&self) -> Result<CodeSpace> {
        let palette = Palette::for_size(self.colors)
            .ok_or_else(|| anyhow!("Unsupported palette size {}; use 6 or 8", self.colors))?;
        let space = CodeSpace::new(self.length, palette, self.allow_repeats)?;
        Solver::check_space(&space)?;
        Ok(space)
    }
}

fn parse_mode(key: Option<&str>) -> Result<Option<GameMode>> {
    key.map(|key| GameMode::from_key(key).ok_or_else(|| anyhow!("Unknown game mode '{key}'")))
        .transpose()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play {
        setup: SetupArgs::default(),
    });

    match command {
        Commands::Play { setup } => run_play_command(&cli, setup),
        Commands::Simple { setup } => run_simple_command(&cli, setup),
        Commands::Solve { secret, verbose } => run_solve_command(&cli, secret, verbose),
        Commands::Benchmark { count, seed } => run_benchmark_command(&cli, count, seed),
        Commands::Session { ttl_secs, capacity } => {
            let policy = LruTtl::new(capacity, Duration::from_secs(ttl_secs));
            let stdin = std::io::stdin();
            run_session(policy, stdin.lock(), std::io::stdout())
        }
    }
}

fn run_play_command(cli: &Cli, setup: SetupArgs) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let mode = parse_mode(setup.mode.as_deref())?.unwrap_or_default();
    let app = App::new(cli.game_config(mode, setup))?;
    run_tui(app)
}

fn run_simple_command(cli: &Cli, setup: SetupArgs) -> Result<()> {
    let mode = parse_mode(setup.mode.as_deref())?;
    let config = SimpleConfig {
        game: cli.game_config(mode.unwrap_or_default(), setup),
        mode,
    };
    run_simple(config)
}

fn run_solve_command(cli: &Cli, secret: String, verbose: bool) -> Result<()> {
    let mut config = SolveConfig::new(secret, cli.code_space()?);
    config.max_guesses = cli.attempts;
    let result = solve_code(config)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(cli: &Cli, count: usize, seed: Option<u64>) -> Result<()> {
    let space = cli.code_space()?;
    println!("Running benchmark on {count} random secrets...");

    let mut config = BenchmarkConfig::new(space, count);
    config.max_guesses = cli.attempts;
    config.seed = seed;
    config.show_progress = true;

    let result = run_benchmark(&config);
    print_benchmark_result(&result);
    Ok(())
}
