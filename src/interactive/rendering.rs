//! TUI rendering with ratatui
//!
//! Layout for the Word Scramble interface.

use super::app::{App, MessageStyle};
use crate::dictionary::Dictionary;
use crate::output::{Alert, length_badge};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<D: Dictionary, R: Rng>(f: &mut Frame, app: &App<'_, D, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Found words
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[2]);

    render_used_words(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);

    if let Some(alert) = &app.alert {
        render_alert(f, alert);
    }
}

fn render_header<D: Dictionary, R: Rng>(f: &mut Frame, app: &App<'_, D, R>, area: Rect) {
    let root = app.game.state().root_word().to_uppercase();
    let style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let title = Line::from(vec![Span::raw("🔤 "), Span::styled(root, style)]);

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word Scramble ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input<D: Dictionary, R: Rng>(f: &mut Frame, app: &App<'_, D, R>, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Enter your word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
}

fn render_used_words<D: Dictionary, R: Rng>(f: &mut Frame, app: &App<'_, D, R>, area: Rect) {
    let items: Vec<ListItem> = app
        .game
        .state()
        .used_words()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", length_badge(word)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(word.clone()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Found ({}) ", app.game.state().len()))
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_messages<D: Dictionary, R: Rng>(f: &mut Frame, app: &App<'_, D, R>, area: Rect) {
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

fn render_status<D: Dictionary, R: Rng>(f: &mut Frame, app: &App<'_, D, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let round = Paragraph::new(format!("Round: {}", app.game.rounds_started()))
        .alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let rules = app.game.rules();
    let rules_text = format!("Min letters: {}", rules.min_length + 1);
    let min_letters = Paragraph::new(rules_text).alignment(Alignment::Center);
    f.render_widget(min_letters, chunks[1]);

    let help_text = if app.alert.is_some() {
        "Enter/Esc: Dismiss | Ctrl-C: Quit"
    } else {
        "Enter: Submit | Ctrl-N: New Word | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_alert(f: &mut Frame, alert: &Alert) {
    let area = centered_rect(f.area(), 50, 7);

    let ok = Span::styled("[ Ok ]", Style::default().add_modifier(Modifier::BOLD));
    let content = vec![
        Line::from(""),
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(ok),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rectangle of `percent_x` width and `height` rows centered in `area`
fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
