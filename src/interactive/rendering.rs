//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::format_letters;
use crate::solver::StrategyKind;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE HELPER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Recommendations
            Constraint::Percentage(30), // Candidates
            Constraint::Percentage(25), // History
        ])
        .split(area);

    render_recommendations(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_recommendations(f: &mut Frame, app: &App, area: Rect) {
    let report = &app.report;
    let mut lines = Vec::new();

    if let Some(pick) = report.top_pick() {
        lines.push(Line::from(vec![
            Span::raw("Try: "),
            Span::styled(
                pick.text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    for kind in StrategyKind::ALL {
        let Some(ranked) = report.ranked(kind) else {
            continue;
        };
        let words: Vec<String> = ranked
            .iter()
            .take(app.top)
            .map(|scored| scored.word.text().to_uppercase())
            .collect();
        let text = if words.is_empty() {
            "(none)".to_string()
        } else {
            words.join(" ")
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<27}", kind.name()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(text),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Recommendations ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let report = &app.report;
    let count = report.candidates.len();

    let mut lines = vec![Line::from(vec![
        Span::raw("Suggested letters: "),
        Span::styled(
            format_letters(&report.suggestions),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if count == 0 {
        lines.push(Line::from(Span::styled(
            "No word fits the feedback so far",
            Style::default().fg(Color::Red),
        )));
    } else {
        let shown: Vec<String> = report
            .candidates
            .iter()
            .take(24)
            .map(|word| word.text().to_uppercase())
            .collect();
        lines.push(Line::from(format!("{count} possible:")));
        lines.push(Line::from(shown.join(" ")));
        if count > shown.len() {
            lines.push(Line::from(Span::styled(
                format!("… +{} more", count - shown.len()),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Candidates ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let rounds = app.rounds();
    let history_items: Vec<ListItem> = rounds
        .iter()
        .enumerate()
        .rev()
        .take(6)
        .map(|(i, round)| {
            let content = format!(
                "{}: {} {} {} → {}",
                i + 1,
                round.guess.text().to_uppercase(),
                round.feedback.to_emoji(),
                round.candidates_before,
                round.candidates_after
            );
            ListItem::new(content)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Narrowing gauge
            Constraint::Length(5),  // State
            Constraint::Min(3),     // Messages
        ])
        .split(area);

    render_narrowing(f, app, chunks[0]);
    render_state(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_narrowing(f: &mut Frame, app: &App, area: Rect) {
    let total = app.solver.lexicon().len();
    let remaining = app.candidates_count();
    let eliminated_pct = if total == 0 {
        0
    } else {
        ((total - remaining) * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(eliminated_pct)
        .label(format!("{remaining}/{total} words remain"));

    f.render_widget(gauge, area);
}

fn render_state(f: &mut Frame, app: &App, area: Rect) {
    let state = app.solver.state();

    let mut pattern = String::new();
    for position in 0..crate::core::WORD_LENGTH {
        match state.correct_positions().get(&position) {
            Some(&letter) => pattern.push(letter.to_ascii_uppercase() as char),
            None => pattern.push('_'),
        }
    }
    let present: Vec<u8> = state.known_present().iter().collect();
    let excluded: Vec<u8> = state.excluded_letters().iter().collect();

    let lines = vec![
        Line::from(vec![
            Span::raw("Pattern:  "),
            Span::styled(pattern, Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Present:  "),
            Span::styled(format_letters(&present), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::raw("Excluded: "),
            Span::styled(
                format_letters(&excluded),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().title(" Known ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let guess_title;
    let (title, content, color) = match app.input_mode {
        InputMode::Solved => (
            " 🎉 SOLVED! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::GuessWord => (
            " Enter Your Guess (5 letters) | TAB for top pick | ESC to quit ",
            app.input_buffer.as_str(),
            Color::Cyan,
        ),
        InputMode::Feedback => {
            guess_title = format!(
                " Feedback for {} (G=Green Y=Yellow -=Gray, or emojis) | ESC to cancel ",
                app.pending_guess
                    .as_ref()
                    .map_or_else(String::new, |w| w.text().to_uppercase())
            );
            (
                guess_title.as_str(),
                app.input_buffer.as_str(),
                Color::Yellow,
            )
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Solved => "q: Quit | n: New Game | u: Undo",
        InputMode::GuessWord => "Enter: Submit | TAB: Top Pick | Ctrl+N: New | Ctrl+U: Undo | ESC: Quit",
        InputMode::Feedback => "Enter: Submit | n: New | u: Undo | q: Quit | ESC: Back",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
