//! Simple interactive CLI mode
//!
//! Line-based prompt loop: enter a guess, then its feedback, and get the
//! narrowed word list and recommendations back.

use crate::core::{Feedback, Word};
use crate::output::print_recommendations;
use crate::solver::Solver;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(solver: &mut Solver<'_>, top: usize) -> Result<()> {
    let stdin = io::stdin();
    run_session(solver, top, stdin.lock())
}

/// Drive the prompt loop from any line source
///
/// Ends on `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_session<R: BufRead>(solver: &mut Solver<'_>, top: usize, mut input: R) -> Result<()> {
    print_banner();
    let lexicon_len = solver.lexicon().len();

    loop {
        let Some(line) = prompt(&mut input, "enter your guess word")? else {
            println!("\n👋 Bye!\n");
            return Ok(());
        };

        // No command is five letters, so every word stays guessable
        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
            "new" | ":reset" => {
                solver.reset();
                println!("\n🔄 State cleared, all {lexicon_len} words possible again.\n");
                continue;
            }
            "undo" | "u" => {
                match solver.undo() {
                    Some((guess, feedback)) => {
                        println!("✓ Undid {} {}", guess.text().to_uppercase(), feedback.to_emoji());
                        print_recommendations(&solver.recommendations(), lexicon_len, top);
                    }
                    None => println!("Nothing to undo!\n"),
                }
                continue;
            }
            "show" | "s" => {
                print_recommendations(&solver.recommendations(), lexicon_len, top);
                continue;
            }
            _ => {}
        }

        let guess = match Word::new(&line) {
            Ok(guess) => guess,
            Err(e) => {
                println!("{} {e}\n", "❌".red());
                continue;
            }
        };

        let Some(feedback) = read_feedback(&mut input)? else {
            return Ok(());
        };

        match feedback {
            Ok(feedback) => {
                let solved = feedback.is_solved();
                let report = solver.apply(guess, feedback);
                if solved {
                    println!(
                        "\n{}\n",
                        format!("🎉 Solved in {} guesses!", solver.history().len())
                            .bright_green()
                            .bold()
                    );
                } else {
                    print_recommendations(&report, lexicon_len, top);
                }
            }
            Err(e) => println!("{} {e}\n", "❌".red()),
        }
    }
}

/// Ask for feedback: either a mark string, or the two index lists
///
/// Outer `None` means input ended; the inner result carries parse errors.
fn read_feedback<R: BufRead>(input: &mut R) -> Result<Option<crate::error::Result<Feedback>>> {
    let Some(first) = prompt(input, "right indexes, separated by space (or marks like GY--G)")?
    else {
        return Ok(None);
    };

    if !first.is_empty() && !first.chars().any(|c| c.is_ascii_digit()) {
        return Ok(Some(Feedback::from_marks(&first)));
    }

    let Some(misplaced) = prompt(input, "mismatched indexes, separated by space")? else {
        return Ok(None);
    };
    Ok(Some(Feedback::from_index_lists(&first, &misplaced)))
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead>(input: &mut R, text: &str) -> Result<Option<String>> {
    print!("{text}: ");
    io::stdout().flush().context("flushing prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Wordle Helper - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter each guess, then the game's feedback for it, either as:");
    println!("  - right indexes then mismatched indexes (0-4, space separated)");
    println!("  - or one mark string: G=right place, Y=wrong place, -=not in word\n");
    println!("Commands: 'new' to start over, 'undo', 'show', 'quit'\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FrequencyTable;
    use crate::solver::RankerConfig;
    use crate::wordlists::Lexicon;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn lexicon() -> Lexicon {
        Lexicon::new(words_from_slice(&["crane", "slate", "irate", "plate", "moist"])).unwrap()
    }

    #[test]
    fn index_prompts_update_state() {
        let lexicon = lexicon();
        let table = FrequencyTable::default();
        let mut solver = Solver::new(&lexicon, &table, RankerConfig::default());

        run_session(&mut solver, 5, Cursor::new("plate\n2 3 4\n\nquit\n")).unwrap();

        assert_eq!(solver.history().len(), 1);
        assert_eq!(solver.candidates().len(), 1);
    }

    #[test]
    fn mark_string_skips_second_prompt() {
        let lexicon = lexicon();
        let table = FrequencyTable::default();
        let mut solver = Solver::new(&lexicon, &table, RankerConfig::default());

        run_session(&mut solver, 5, Cursor::new("plate\n--GGG\nslate\n--GGG\n")).unwrap();

        assert_eq!(solver.history().len(), 2);
    }

    #[test]
    fn bad_input_is_reported_and_skipped() {
        let lexicon = lexicon();
        let table = FrequencyTable::default();
        let mut solver = Solver::new(&lexicon, &table, RankerConfig::default());

        let script = "toolong\nplate\n7\n\nplate\nGGGGX\n";
        run_session(&mut solver, 5, Cursor::new(script)).unwrap();

        assert!(solver.history().is_empty());
        assert!(solver.state().is_empty());
    }

    #[test]
    fn reset_and_undo_commands() {
        let lexicon = lexicon();
        let table = FrequencyTable::default();
        let mut solver = Solver::new(&lexicon, &table, RankerConfig::default());

        run_session(&mut solver, 5, Cursor::new("crane\n-----\nnew\n")).unwrap();
        assert!(solver.history().is_empty());

        run_session(&mut solver, 5, Cursor::new("crane\n-----\nmoist\n-----\nundo\n")).unwrap();
        assert_eq!(solver.history().len(), 1);
    }

    #[test]
    fn reset_is_a_guess_not_a_command() {
        let lexicon = Lexicon::embedded().unwrap();
        let table = FrequencyTable::default();
        let mut solver = Solver::new(&lexicon, &table, RankerConfig::default());

        run_session(&mut solver, 5, Cursor::new("reset\n--G--\n")).unwrap();

        assert_eq!(solver.history().len(), 1);
        assert_eq!(solver.history()[0].0.text(), "reset");
        assert_eq!(solver.state().correct_positions().get(&2), Some(&b's'));
    }
}
