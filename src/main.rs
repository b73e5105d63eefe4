//! Wordle Helper - CLI
//!
//! Feed it your guesses and the game's feedback; it narrows the word list and
//! recommends what to try next. TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use wordle_helper::{
    commands::{analyze_rounds, run_simple},
    core::FrequencyTable,
    output::print_recommendations,
    solver::{RankerConfig, Solver},
    wordlists::Lexicon,
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Narrows Wordle candidates from feedback and recommends the next guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Words shown per ranked list
    #[arg(short = 'n', long, global = true, default_value_t = 10)]
    top: usize,

    /// Multiplier applied to vowel weights by the vowel-weighted ranking
    #[arg(
        long,
        global = true,
        default_value_t = 100,
        value_parser = clap::value_parser!(u64).range(1..=1_000_000)
    )]
    vowel_boost: u64,

    /// Show last-ditch picks when fewer vowel-weighted words than this remain
    #[arg(long, global = true, default_value_t = 3)]
    last_ditch_threshold: usize,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (prompt loop without TUI)
    Simple,

    /// Fold the given rounds in order and print the recommendations
    Analyze {
        /// Rounds as WORD=MARKS (crane=--G-Y) or WORD:CORRECT:MISPLACED (crane:2:4)
        #[arg(required = true)]
        rounds: Vec<String>,
    },
}

/// Log level for a `-v` count
///
/// The TUI draws on the terminal stderr shares, so it stays silent unless asked.
fn log_level(verbose: u8, tui: bool) -> LevelFilter {
    match verbose {
        0 if tui => LevelFilter::Off,
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(level: LevelFilter) {
    // RUST_LOG still wins when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Load the lexicon selected by the -w flag
fn load_lexicon(wordlist: &str) -> Result<Lexicon> {
    match wordlist {
        "embedded" => Lexicon::embedded().context("embedded word list"),
        path => Lexicon::from_file(path).with_context(|| format!("word list {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(log_level(cli.verbose, matches!(command, Commands::Play)));

    let lexicon = load_lexicon(&cli.wordlist)?;
    let table = FrequencyTable::default();
    let config = RankerConfig {
        vowel_boost: cli.vowel_boost,
        last_ditch_threshold: cli.last_ditch_threshold,
    };
    let mut solver = Solver::new(&lexicon, &table, config);

    match command {
        Commands::Play => run_play_command(solver, cli.top),
        Commands::Simple => run_simple(&mut solver, cli.top),
        Commands::Analyze { rounds } => {
            let report = analyze_rounds(&mut solver, &rounds)?;
            print_recommendations(&report, lexicon.len(), cli.top);
            Ok(())
        }
    }
}

fn run_play_command(solver: Solver<'_>, top: usize) -> Result<()> {
    use wordle_helper::interactive::{App, run_tui};

    let app = App::new(solver, top);
    run_tui(app)
}
