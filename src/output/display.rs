//! Display functions for round reports

use super::formatters::{create_progress_bar, format_letters, format_scored, format_words};
use crate::solver::{Recommendations, StrategyKind};
use colored::Colorize;

/// Print everything the helper knows after a round
///
/// `lexicon_len` scales the narrowing bar; `top` caps each list.
pub fn print_recommendations(report: &Recommendations<'_>, lexicon_len: usize, top: usize) {
    println!("\n{}", "─".repeat(60).cyan());

    let remaining = report.candidates.len();
    let bar = create_progress_bar(remaining as f64, lexicon_len as f64, 30);
    println!(
        "📚 Possible words: [{}] {}",
        bar.green(),
        format!("{remaining} of {lexicon_len}").bright_yellow().bold()
    );
    if remaining == 0 {
        println!(
            "   {}",
            "No word fits this feedback. Check the input, or 'undo'.".red()
        );
    } else {
        println!("   {}", format_words(&report.candidates, top));
    }

    println!(
        "\n🔤 Suggested letters: {}",
        format_letters(&report.suggestions).bright_white().bold()
    );
    println!("🧩 State: {}", report.state.to_string().bright_black());

    println!("\n🎯 {}", "Recommended words:".bright_cyan().bold());
    for kind in StrategyKind::ALL {
        if let Some(ranked) = report.ranked(kind) {
            let list = if ranked.is_empty() {
                "(none)".bright_black().to_string()
            } else {
                format_scored(ranked, top)
            };
            println!("   {} {list}", format!("{:<27}", kind.name()).yellow());
        }
    }

    if let Some(pick) = report.top_pick() {
        println!(
            "\n👉 Try: {}",
            pick.text().to_uppercase().bright_green().bold()
        );
    }
}
