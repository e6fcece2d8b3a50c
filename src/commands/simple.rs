//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use crate::dictionary::Dictionary;
use crate::game::Game;
use crate::output::{write_outcome, write_round_header, write_used_words};
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a new round
/// cannot be started.
pub fn run_simple<D: Dictionary, R: Rng>(game: &mut Game<'_, D, R>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(game, stdin.lock(), stdout.lock())
}

/// Run the game loop over any input and output
///
/// Stops on `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if a new round cannot be started.
pub fn run_simple_with<D, R, I, O>(
    game: &mut Game<'_, D, R>,
    mut input: I,
    mut out: O,
) -> Result<()>
where
    D: Dictionary,
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Make words from the letters of the root word.")?;
    writeln!(out, "Commands: ':new' new root word, ':words' list found words, ':quit' to exit")?;

    write_round_header(&mut out, game.state())?;

    let mut line = String::new();
    loop {
        write!(out, "Word: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            writeln!(out)?;
            break;
        }

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" => {
                let state = game
                    .new_round()
                    .context("failed to start a new round")?;
                write_round_header(&mut out, state)?;
            }
            ":words" | ":w" => write_used_words(&mut out, game.state())?,
            _ => {
                let outcome = game.submit(&line);
                write_outcome(&mut out, &outcome, game.state(), game.rules())?;
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}
