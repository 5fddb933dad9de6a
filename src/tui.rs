//! TUI (Terminal User Interface) module for Word Scramble
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! - `EnteringWord`: typing into the input field, ENTER submits
//! - `ShowingAlert`: a rejection is on screen until dismissed with ENTER
//!
//! The input field keeps its text after a rejection so the player can fix the
//! word; it is cleared only when a word is accepted.

use crate::game_state::{GameInterface, RoundSnapshot, SubmissionOutcome, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const MAX_INPUT_LENGTH: usize = 32;
const ALERT_WIDTH: u16 = 40;
const ALERT_HEIGHT: u16 = 7;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const SCORE_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

#[derive(Debug, Clone, PartialEq, Eq)]
enum TuiState {
    EnteringWord,
    ShowingAlert { title: String, message: String },
}

/// Full-screen implementation of `GameInterface`.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    round: Option<RoundSnapshot>,
    current_input: String,
    state: TuiState,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            round: None,
            current_input: String::new(),
            state: TuiState::EnteringWord,
            status: "Ready".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let round = self.round.as_ref();
        let current_input = &self.current_input;
        let state = &self.state;
        let status = &self.status;
        self.terminal.draw(|f| {
            render(f, round, current_input, state, status);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                debug_log!(
                    "handle_input() - Key event: code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                if matches!(self.state, TuiState::ShowingAlert { .. }) {
                    Ok(self.handle_alert_input(key))
                } else {
                    Ok(self.handle_word_input(key))
                }
            }
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn handle_word_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('n' | 'N') if ctrl => {
                info_log!("handle_word_input() - Ctrl+N, new round");
                return Some(UserAction::NewRound);
            }
            KeyCode::Char('c' | 'C') if ctrl => return Some(UserAction::Exit),
            KeyCode::Char(c)
                if !ctrl
                    && !key.modifiers.contains(KeyModifiers::ALT)
                    && !c.is_control()
                    && self.current_input.chars().count() < MAX_INPUT_LENGTH =>
            {
                self.current_input.push(c);
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter => {
                info_log!(
                    "handle_word_input() - Submitting '{}'",
                    self.current_input
                );
                return Some(UserAction::Submit(self.current_input.clone()));
            }
            KeyCode::Esc => return Some(UserAction::Exit),
            _ => {
                debug_log!("handle_word_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn handle_alert_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.state = TuiState::EnteringWord;
                None
            }
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }
}

fn render(
    f: &mut Frame,
    round: Option<&RoundSnapshot>,
    current_input: &str,
    state: &TuiState,
    status: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word and score
            Constraint::Length(3), // Input field
            Constraint::Min(5),    // Accepted words
            Constraint::Length(3), // Status line
            Constraint::Length(3), // Instructions
        ])
        .split(f.area());

    render_header(f, chunks[0], round);
    render_input(f, chunks[1], current_input);
    render_used_words(f, chunks[2], round);
    render_status(f, chunks[3], status);
    render_instructions(f, chunks[4], round);

    if let TuiState::ShowingAlert { title, message } = state {
        render_alert(f, title, message);
    }
}

fn render_header(f: &mut Frame, area: Rect, round: Option<&RoundSnapshot>) {
    let line = match round {
        Some(round) => Line::from(vec![
            Span::styled(round.root_word.to_uppercase(), HEADER_STYLE),
            Span::raw("   "),
            Span::styled(format!("Score: {}", round.score), SCORE_STYLE),
        ]),
        None => Line::from("WORD SCRAMBLE"),
    };
    let header = Paragraph::new(line).block(
        Block::default()
            .title("Word Scramble")
            .borders(Borders::ALL),
    );
    f.render_widget(header, area);
}

fn render_input(f: &mut Frame, area: Rect, current_input: &str) {
    let text = if current_input.is_empty() {
        Line::from(Span::styled(
            "Please enter a selected word:",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(format!("{current_input}_"))
    };
    let input = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    f.render_widget(input, area);
}

fn render_used_words(f: &mut Frame, area: Rect, round: Option<&RoundSnapshot>) {
    let items: Vec<ListItem> = round
        .map(|round| round.used_words.as_slice())
        .unwrap_or_default()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("({}) ", word.chars().count()), SCORE_STYLE),
                Span::raw(word.as_str()),
            ]))
        })
        .collect();
    let list = List::new(items).block(Block::default().title("Words").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, area: Rect, status: &str) {
    let paragraph = Paragraph::new(status)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect, round: Option<&RoundSnapshot>) {
    let label = round.map_or("New Game", RoundSnapshot::new_round_label);
    let text = format!("ENTER: Submit | CTRL+N: {label} | ESC: Quit");
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_alert(f: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(f.area(), ALERT_WIDTH, ALERT_HEIGHT);
    let lines = vec![
        Line::from(Span::styled(message, ERROR_STYLE)),
        Line::from(""),
        Line::from(Span::styled("[ Continue ]", SUCCESS_STYLE)),
    ];
    let alert = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(Clear, area);
    f.render_widget(alert, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

impl GameInterface for TuiInterface {
    fn display_round(&mut self, round: &RoundSnapshot) {
        self.round = Some(round.clone());
        self.current_input.clear();
        self.state = TuiState::EnteringWord;
        self.status = format!("New root word: {}", round.root_word);
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(e) => {
                    log::error!("Input error: {e}");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_outcome(&mut self, outcome: &SubmissionOutcome, round: &RoundSnapshot) {
        self.round = Some(round.clone());
        match outcome {
            SubmissionOutcome::Accepted { word, score } => {
                self.current_input.clear();
                self.status = format!("Accepted '{word}' - score {score}");
            }
            SubmissionOutcome::Rejected { reason, score } => {
                self.state = TuiState::ShowingAlert {
                    title: reason.title().to_string(),
                    message: reason.message().to_string(),
                };
                self.status = format!("Rejected - score {score}");
            }
        }
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::RejectionReason;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(round: Option<&RoundSnapshot>, input: &str, state: &TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal
            .draw(|f| render(f, round, input, state, "Ready"))
            .unwrap();
        buffer_text(&terminal)
    }

    fn snapshot() -> RoundSnapshot {
        RoundSnapshot {
            root_word: "eagle".to_string(),
            used_words: vec!["age".to_string(), "gale".to_string()],
            score: 7,
        }
    }

    #[test]
    fn test_render_shows_root_score_and_words() {
        let text = draw(Some(&snapshot()), "", &TuiState::EnteringWord);
        assert!(text.contains("EAGLE"));
        assert!(text.contains("Score: 7"));
        assert!(text.contains("(3) age"));
        assert!(text.contains("(4) gale"));
        assert!(text.contains("CTRL+N: New Word"));
    }

    #[test]
    fn test_render_placeholder_and_new_game_label() {
        let text = draw(None, "", &TuiState::EnteringWord);
        assert!(text.contains("Please enter a selected word:"));
        assert!(text.contains("CTRL+N: New Game"));
    }

    #[test]
    fn test_render_alert() {
        let reason = RejectionReason::NotDerivable;
        let state = TuiState::ShowingAlert {
            title: reason.title().to_string(),
            message: reason.message().to_string(),
        };
        let text = draw(Some(&snapshot()), "xyz", &state);
        assert!(text.contains("Word is not recognized."));
        assert!(text.contains("Use a valid word!"));
        assert!(text.contains("Continue"));
    }

    #[test]
    fn test_centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 60, 24);
        let rect = centered_rect(area, ALERT_WIDTH, ALERT_HEIGHT);
        assert_eq!(rect.width, ALERT_WIDTH);
        assert_eq!(rect.height, ALERT_HEIGHT);
        assert_eq!(rect.x, 10);
        assert!(rect.y + rect.height <= area.height);
    }
}
