//! Word Scramble - CLI
//!
//! Build words from the letters of a random root word, in a TUI or a plain line mode.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use word_scramble::{
    commands::{check_words, run_simple},
    core::Rules,
    dictionary::WordListDictionary,
    game::Game,
    logging::{LogConfig, init_logging},
    output::print_check_report,
    wordlists::{
        START_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'p', long, global = true, default_value = "embedded")]
    pool: String,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Words must be longer than this many letters
    #[arg(short = 'm', long, global = true, default_value_t = Rules::DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Accept the root word itself as an answer
    #[arg(long, global = true)]
    allow_root_word: bool,

    /// Seed for picking root words (same seed, same sequence of rounds)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line by line, no TUI)
    Simple,

    /// Check words against a given root word, in order
    Check {
        /// The root word to build from
        root: String,

        /// Words to check
        #[arg(required = true)]
        words: Vec<String>,
    },
}

/// Load a word list based on a -p/-d flag value
///
/// - "embedded": the list compiled into the binary
/// - "<path>": newline-delimited file
fn load_words(source: &str, embedded: &[&str]) -> Result<Vec<String>> {
    match source {
        "embedded" => Ok(words_from_slice(embedded)),
        path => load_from_file(path).with_context(|| format!("failed to load word list '{path}'")),
    }
}

fn load_dictionary(source: &str) -> Result<WordListDictionary> {
    match source {
        "embedded" => Ok(WordListDictionary::embedded()),
        path => {
            let words = load_words(path, &[])?;
            Ok(WordListDictionary::from_words(words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Logging to stderr would draw over the TUI
    let is_tui = matches!(command, Commands::Play);
    if !is_tui || cli.log_file.is_some() {
        let config = LogConfig::from_verbosity(cli.verbose)
            .with_log_file(cli.log_file.clone())
            .with_ansi(io::stderr().is_terminal());
        init_logging(&config).context("failed to initialize logging")?;
    }

    let rules = Rules::new(cli.min_length, !cli.allow_root_word);
    let dictionary = load_dictionary(&cli.dictionary)?;
    tracing::info!(words = dictionary.len(), "dictionary ready");

    match command {
        Commands::Play => {
            let pool = load_words(&cli.pool, START_WORDS)?;
            run_play_command(&pool, dictionary, rules, cli.seed)
        }
        Commands::Simple => {
            let pool = load_words(&cli.pool, START_WORDS)?;
            run_simple_command(&pool, dictionary, rules, cli.seed)
        }
        Commands::Check { root, words } => run_check_command(&root, &words, &dictionary, &rules),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn run_play_command(
    pool: &[String],
    dictionary: WordListDictionary,
    rules: Rules,
    seed: Option<u64>,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let game =
        Game::new(pool, dictionary, rules, make_rng(seed)).context("failed to start a round")?;
    run_tui(App::new(game))
}

fn run_simple_command(
    pool: &[String],
    dictionary: WordListDictionary,
    rules: Rules,
    seed: Option<u64>,
) -> Result<()> {
    let mut game =
        Game::new(pool, dictionary, rules, make_rng(seed)).context("failed to start a round")?;
    run_simple(&mut game)
}

fn run_check_command(
    root: &str,
    words: &[String],
    dictionary: &WordListDictionary,
    rules: &Rules,
) -> Result<()> {
    let report = check_words(root, words, rules, dictionary)?;
    print_check_report(&report, rules)?;
    Ok(())
}
