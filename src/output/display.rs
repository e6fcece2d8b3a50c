//! Display functions for rounds and command results

use super::formatters::{alert_for, length_badge};
use crate::commands::CheckReport;
use crate::core::{Outcome, RoundState, Rules};
use colored::Colorize;
use std::io::{self, Write};

/// Write the banner for a freshly started round
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_round_header<W: Write>(out: &mut W, state: &RoundState) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Root word: {}",
        state.root_word().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())
}

/// Write the player-facing result of one submission
///
/// Empty submissions produce no output.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &Outcome,
    state: &RoundState,
    rules: &Rules,
) -> io::Result<()> {
    match outcome {
        Outcome::Empty => Ok(()),
        Outcome::Accepted(word) => writeln!(
            out,
            "{} {} {}",
            "✓".green().bold(),
            word.as_str().bright_white().bold(),
            length_badge(word.as_str()).bright_black()
        ),
        Outcome::Rejected(reason) => {
            let alert = alert_for(*reason, state.root_word(), rules);
            writeln!(out, "{} {}", "✗".red().bold(), alert.title.red().bold())?;
            writeln!(out, "  {}", alert.message)
        }
    }
}

/// Write the words accepted so far, most recent first
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_used_words<W: Write>(out: &mut W, state: &RoundState) -> io::Result<()> {
    if state.is_empty() {
        return writeln!(out, "No words found yet.");
    }

    let root = state.root_word().to_uppercase();
    writeln!(out, "Found {} for {root}:", state.len())?;
    for word in state.used_words() {
        writeln!(out, "  {} {word}", length_badge(word).bright_black())?;
    }
    Ok(())
}

/// Print the result of checking a batch of words
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_check_report(report: &CheckReport, rules: &Rules) -> io::Result<()> {
    let mut out = io::stdout().lock();

    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} {} ",
        "CHECKING WORDS FOR:".bright_cyan().bold(),
        report.state.root_word().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    for entry in &report.entries {
        if entry.outcome == Outcome::Empty {
            continue;
        }
        write!(out, "{:>16}  ", entry.input.trim())?;
        write_outcome(&mut out, &entry.outcome, &report.state, rules)?;
    }

    writeln!(
        out,
        "\n{} of {} words accepted",
        report.accepted_count().to_string().green().bold(),
        report.submitted_count()
    )
}
