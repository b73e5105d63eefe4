//! TUI application state and logic

use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::solver::{ConstraintState, Recommendations, Solver, filter_candidates};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub report: Recommendations<'a>,
    /// Guess waiting for its feedback
    pub pending_guess: Option<Word>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    /// Rows shown per ranked list
    pub top: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    GuessWord,
    Feedback,
    Solved,
}

/// One played round and how far it narrowed the candidates
#[derive(Debug, Clone, Copy)]
pub struct RoundSummary<'h> {
    pub guess: &'h Word,
    pub feedback: &'h Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(solver: Solver<'a>, top: usize) -> Self {
        let report = solver.recommendations();

        Self {
            solver,
            report,
            pending_guess: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Type the word you guessed, or TAB for the top pick.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Then enter the feedback (e.g., 'GY-GY' or '🟩🟨⬜🟩🟨')".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            input_mode: InputMode::GuessWord,
            should_quit: false,
            top,
        }
    }

    /// Accept the typed word as this round's guess
    pub fn submit_guess(&mut self) {
        match Word::new(&self.input_buffer) {
            Ok(word) => {
                self.add_message(
                    &format!("Guess: {}", word.text().to_uppercase()),
                    MessageStyle::Info,
                );
                self.pending_guess = Some(word);
                self.input_buffer.clear();
                self.input_mode = InputMode::Feedback;
            }
            Err(e) => self.add_message(&format!("Invalid word: {e}"), MessageStyle::Error),
        }
    }

    /// Put the highest-ranked recommendation in the input line
    pub fn use_top_pick(&mut self) {
        if let Some(word) = self.report.top_pick() {
            self.input_buffer = word.text().to_string();
        } else {
            self.add_message("No recommendation available!", MessageStyle::Error);
        }
    }

    /// Parse the typed marks and fold them into the solver
    pub fn handle_feedback(&mut self, input: &str) {
        let Some(guess) = self.pending_guess.clone() else {
            self.input_mode = InputMode::GuessWord;
            return;
        };

        let feedback = match Feedback::from_marks(input) {
            Ok(feedback) => feedback,
            Err(_) => {
                self.add_message("Invalid feedback! Use G/Y/- or 🟩🟨⬜", MessageStyle::Error);
                return;
            }
        };

        let solved = feedback.is_solved();
        self.report = self.solver.apply(guess, feedback);
        let candidates_after = self.report.candidates.len();

        self.pending_guess = None;
        self.input_buffer.clear();

        if solved {
            self.input_mode = InputMode::Solved;
            let celebration = match self.solver.history().len() {
                1 => "🎯 HOLE IN ONE! 🌟",
                2 => "🔥 Two guesses! 🔥",
                3 => "✨ Three guesses! ✨",
                4 => "👏 Four guesses! 👏",
                5 => "🎉 Five guesses! 🎉",
                6 => "😅 PHEW! Got it in six! 😅",
                _ => "🎊 SOLVED! 🎊",
            };
            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else {
            self.input_mode = InputMode::GuessWord;
            if candidates_after == 0 {
                self.add_message(
                    "No candidates remain - feedback may be wrong. Press Ctrl+U to undo.",
                    MessageStyle::Error,
                );
            } else {
                self.add_message(
                    &format!("{candidates_after} candidates remaining"),
                    MessageStyle::Info,
                );
            }
        }
    }

    /// Drop the pending guess, or go back to the guess word entry
    pub fn cancel_feedback(&mut self) {
        self.pending_guess = None;
        self.input_buffer.clear();
        self.input_mode = InputMode::GuessWord;
    }

    pub fn new_game(&mut self) {
        self.solver.reset();
        self.report = self.solver.recommendations();
        self.pending_guess = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::GuessWord;
        self.add_message(
            "New game started! All constraints cleared.",
            MessageStyle::Info,
        );
    }

    pub fn undo_last(&mut self) {
        if self.solver.undo().is_some() {
            self.report = self.solver.recommendations();
            self.pending_guess = None;
            self.input_buffer.clear();
            self.input_mode = InputMode::GuessWord;
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.report.candidates.len()
    }

    /// Played rounds, oldest first, with candidate counts re-derived from
    /// the solver history
    #[must_use]
    pub fn rounds(&self) -> Vec<RoundSummary<'_>> {
        let words = self.solver.lexicon().words();
        let mut state = ConstraintState::new();
        let mut before = words.len();

        self.solver
            .history()
            .iter()
            .map(|(guess, feedback)| {
                state = state.apply(guess, feedback);
                let after = filter_candidates(words, &state).len();
                let summary = RoundSummary {
                    guess,
                    feedback,
                    candidates_before: before,
                    candidates_after: after,
                };
                before = after;
                summary
            })
            .collect()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match (app.input_mode, key.code) {
                (_, KeyCode::Char('c')) if ctrl => app.should_quit = true,
                (_, KeyCode::Char('n')) if ctrl => app.new_game(),
                (_, KeyCode::Char('u')) if ctrl => app.undo_last(),

                (InputMode::Solved, KeyCode::Char('q')) => app.should_quit = true,
                (InputMode::Solved, KeyCode::Char('n')) => app.new_game(),
                (InputMode::Solved, KeyCode::Char('u')) => app.undo_last(),
                (InputMode::Solved, _) => {}

                (InputMode::GuessWord, KeyCode::Esc) => app.should_quit = true,
                (InputMode::GuessWord, KeyCode::Tab) => app.use_top_pick(),
                (InputMode::GuessWord, KeyCode::Char(c)) => {
                    if app.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                        app.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                (InputMode::GuessWord, KeyCode::Enter) => app.submit_guess(),

                (InputMode::Feedback, KeyCode::Esc) => app.cancel_feedback(),
                (InputMode::Feedback, KeyCode::Char('q')) => app.should_quit = true,
                (InputMode::Feedback, KeyCode::Char('n')) => app.new_game(),
                (InputMode::Feedback, KeyCode::Char('u')) => app.undo_last(),
                (InputMode::Feedback, KeyCode::Char(c)) => app.input_buffer.push(c),
                (InputMode::Feedback, KeyCode::Enter) => {
                    let input = app.input_buffer.clone();
                    app.handle_feedback(&input);
                }

                (_, KeyCode::Backspace) => {
                    app.input_buffer.pop();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FrequencyTable;
    use crate::solver::RankerConfig;
    use crate::wordlists::Lexicon;
    use crate::wordlists::loader::words_from_slice;

    fn lexicon() -> Lexicon {
        Lexicon::new(words_from_slice(&["crane", "slate", "irate", "plate", "moist"])).unwrap()
    }

    #[test]
    fn guess_then_feedback_narrows() {
        let lexicon = lexicon();
        let table = FrequencyTable::default();
        let mut app = App::new(Solver::new(&lexicon, &table, RankerConfig::default()), 5);

        app.input_buffer = "plate".to_string();
        app.submit_guess();
        assert_eq!(app.input_mode, InputMode::Feedback);

        app.handle_feedback("--GGG");
        assert_eq!(app.input_mode, InputMode::GuessWord);
        assert_eq!(app.candidates_count(), 1);
        let rounds = app.rounds();
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].candidates_before, 5);
        assert_eq!(rounds[0].candidates_after, 1);
    }

    #[test]
    fn bad_input_keeps_mode() {
        let lexicon = lexicon();
        let table = FrequencyTable::default();
        let mut app = App::new(Solver::new(&lexicon, &table, RankerConfig::default()), 5);

        app.input_buffer = "pla".to_string();
        app.submit_guess();
        assert_eq!(app.input_mode, InputMode::GuessWord);

        app.input_buffer = "plate".to_string();
        app.submit_guess();
        app.handle_feedback("GGX");
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert!(app.rounds().is_empty());
    }

    #[test]
    fn solved_then_new_game() {
        let lexicon = lexicon();
        let table = FrequencyTable::default();
        let mut app = App::new(Solver::new(&lexicon, &table, RankerConfig::default()), 5);

        app.input_buffer = "irate".to_string();
        app.submit_guess();
        app.handle_feedback("GGGGG");
        assert_eq!(app.input_mode, InputMode::Solved);

        app.new_game();
        assert!(app.rounds().is_empty());
        assert!(app.solver.state().is_empty());
        assert_eq!(app.candidates_count(), 5);
    }

    #[test]
    fn undo_restores_previous_report() {
        let lexicon = lexicon();
        let table = FrequencyTable::default();
        let mut app = App::new(Solver::new(&lexicon, &table, RankerConfig::default()), 5);

        app.input_buffer = "plate".to_string();
        app.submit_guess();
        app.handle_feedback("--GGG");
        app.undo_last();

        assert!(app.rounds().is_empty());
        assert_eq!(app.candidates_count(), 5);
    }

    #[test]
    fn rounds_follow_solver_history_through_undo() {
        let lexicon = lexicon();
        let table = FrequencyTable::default();
        let mut app = App::new(Solver::new(&lexicon, &table, RankerConfig::default()), 5);

        for (guess, marks) in [("crane", "--G-G"), ("slate", "--GGG")] {
            app.input_buffer = guess.to_string();
            app.submit_guess();
            app.handle_feedback(marks);
        }
        let rounds = app.rounds();
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[1].candidates_before, rounds[0].candidates_after);
        assert_eq!(rounds[1].candidates_after, app.candidates_count());

        app.undo_last();
        let rounds = app.rounds();
        assert_eq!(rounds.len(), app.solver.history().len());
        assert_eq!(rounds[0].guess.text(), "crane");
        assert_eq!(rounds[0].candidates_after, app.candidates_count());
    }

    #[test]
    fn tab_fills_top_pick() {
        let lexicon = lexicon();
        let table = FrequencyTable::default();
        let mut app = App::new(Solver::new(&lexicon, &table, RankerConfig::default()), 5);

        app.use_top_pick();
        assert_eq!(app.input_buffer.len(), WORD_LENGTH);
    }
}
