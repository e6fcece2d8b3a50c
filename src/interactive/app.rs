//! TUI application state and logic

use crate::core::Outcome;
use crate::dictionary::Dictionary;
use crate::game::Game;
use crate::output::{Alert, alert_for};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, D: Dictionary, R: Rng> {
    pub game: Game<'a, D, R>,
    pub input_buffer: String,
    /// Rejection currently shown as a modal; input is blocked until dismissed
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, D: Dictionary, R: Rng> App<'a, D, R> {
    #[must_use]
    pub fn new(game: Game<'a, D, R>) -> Self {
        Self {
            game,
            input_buffer: String::new(),
            alert: None,
            messages: vec![Message {
                text: "Make words from the letters of the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Submit the input buffer as a word
    ///
    /// Accepted words clear the buffer. Rejections raise an alert and keep the text so
    /// the player can fix it. Blank input is ignored.
    pub fn submit_input(&mut self) {
        let outcome = self.game.submit(&self.input_buffer);

        match outcome {
            Outcome::Empty => {}
            Outcome::Accepted(word) => {
                self.input_buffer.clear();
                self.add_message(&format!("Found '{word}'"), MessageStyle::Success);
            }
            Outcome::Rejected(reason) => {
                let state = self.game.state();
                self.alert = Some(alert_for(reason, state.root_word(), self.game.rules()));
            }
        }
    }

    pub fn new_round(&mut self) {
        match self.game.new_round() {
            Ok(state) => {
                let text = format!("New root word: {}", state.root_word());
                self.input_buffer.clear();
                self.alert = None;
                self.add_message(&text, MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_alert();
            }
            return;
        }

        match key.code {
            KeyCode::Char('n') if ctrl => self.new_round(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if !ctrl && !c.is_control() => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup, rendering, or event reading fails.
pub fn run_tui<D: Dictionary, R: Rng>(app: App<'_, D, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "TUI exited with error");
    }
    res
}

fn run_app<B, D, R>(terminal: &mut Terminal<B>, mut app: App<'_, D, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    D: Dictionary,
    R: Rng,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
