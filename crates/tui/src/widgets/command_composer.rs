//! Command composer widget with slash command autocomplete.
//!
//! This widget provides a text input field for entering commands, with
//! autocomplete suggestions when the user types a slash command. Submitted
//! input is parsed into an [`Op`].

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use si_protocol::Op;

use crate::event::EventStatus;

/// Available slash commands with their descriptions.
pub const COMMANDS: &[(&str, &str)] = &[
    ("/step <value>", "Set the current step"),
    ("/next", "Advance one step"),
    ("/prev", "Go back one step"),
    ("/add <label>", "Append a step"),
    ("/remove", "Remove the last step"),
    ("/quit", "Exit"),
];

/// Command composer state.
#[derive(Debug, Clone, Default)]
pub struct CommandComposer {
    /// Current input text
    input: String,
    /// Cursor position, in characters
    cursor_pos: usize,
    /// Whether autocomplete popup should be shown
    show_popup: bool,
    /// Selected index in the autocomplete list
    selected_index: usize,
    /// Result of the last Enter, waiting to be taken
    submitted: Option<Result<Op, String>>,
}

impl CommandComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the composer currently owns keyboard input.
    pub fn is_open(&self) -> bool {
        !self.input.is_empty()
    }

    /// Check if autocomplete popup should be shown.
    pub fn should_show_popup(&self) -> bool {
        self.show_popup
    }

    /// Get filtered command suggestions based on current input.
    pub fn suggestions(&self) -> Vec<(&'static str, &'static str)> {
        if !self.input.starts_with('/') {
            return Vec::new();
        }

        let filter = self.input.trim();
        if filter == "/" {
            return COMMANDS.to_vec();
        }

        COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(filter))
            .copied()
            .collect()
    }

    /// Get the currently selected suggestion.
    pub fn selected_suggestion(&self) -> Option<(&'static str, &'static str)> {
        self.suggestions().get(self.selected_index).copied()
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        let byte_pos = self.byte_pos();
        self.input.insert(byte_pos, c);
        self.cursor_pos += 1;
        self.update_popup_state();
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let byte_pos = self.byte_pos();
            self.input.remove(byte_pos);
            self.update_popup_state();
        }
    }

    /// Clear all input.
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
        self.show_popup = false;
        self.selected_index = 0;
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.input.chars().count() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.suggestions().len() {
            self.selected_index += 1;
        }
    }

    /// Complete with the currently selected suggestion (Tab key).
    pub fn complete_with_selection(&mut self) {
        if let Some((cmd, _)) = self.selected_suggestion() {
            // Keep the command name, drop the argument placeholder
            let cmd_name = cmd.split_whitespace().next().unwrap_or(cmd);
            let takes_argument = cmd.contains('<');
            self.input = if takes_argument {
                format!("{cmd_name} ")
            } else {
                cmd_name.to_string()
            };
            self.cursor_pos = self.input.chars().count();
            self.show_popup = false;
            self.selected_index = 0;
        }
    }

    /// Handles a key while the composer is open.
    ///
    /// Enter parses the input and stores the result for
    /// [`take_submitted`](Self::take_submitted); Esc discards the input.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> EventStatus {
        if !self.is_open() {
            return EventStatus::NotConsumed;
        }

        match key_event.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Up if self.show_popup => self.move_selection_up(),
            KeyCode::Down if self.show_popup => self.move_selection_down(),
            KeyCode::Tab => self.complete_with_selection(),
            KeyCode::Esc => self.clear(),
            KeyCode::Enter => {
                self.submitted = self.parse_command().transpose();
                self.clear();
            }
            _ => return EventStatus::NotConsumed,
        }
        EventStatus::Consumed
    }

    /// Takes the result of the last submitted command, if any.
    pub fn take_submitted(&mut self) -> Option<Result<Op, String>> {
        self.submitted.take()
    }

    /// Parse the current input and generate an Op if valid.
    ///
    /// Returns Ok(Some(Op)) if a valid command was parsed,
    /// Ok(None) if input is empty or whitespace,
    /// Err(String) if the command is invalid.
    pub fn parse_command(&self) -> Result<Option<Op>, String> {
        let input = self.input.trim();

        if input.is_empty() {
            return Ok(None);
        }

        let Some(command) = input.strip_prefix('/') else {
            return Err("Invalid command. Commands must start with '/'".to_string());
        };

        match Op::parse_command(command) {
            Some(op) => Ok(Some(op)),
            None if command.trim() == "add" => Err("Missing step label".to_string()),
            None => Err(format!("Unknown command: {input}")),
        }
    }

    /// Render the input field.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Command (/ to type, q to quit)");

        let inner = block.inner(area);
        block.render(area, buf);

        let text = format!("> {}", self.input);
        let paragraph = Paragraph::new(text).style(Style::default().fg(Color::Yellow));
        paragraph.render(inner, buf);
    }

    /// Render the autocomplete popup.
    pub fn render_popup(&self, area: Rect, buf: &mut Buffer) {
        if !self.show_popup {
            return;
        }

        let suggestions = self.suggestions();
        if suggestions.is_empty() {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Suggestions")
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(area);
        block.render(area, buf);

        for (i, (cmd, desc)) in suggestions.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }

            let style = if i == self.selected_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let line = Line::from(vec![
                Span::styled(format!("{cmd:<16}"), style),
                Span::styled(desc.to_string(), style.fg(Color::Gray)),
            ]);

            buf.set_line(inner.x, y, &line, inner.width);
        }
    }

    fn byte_pos(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map_or(self.input.len(), |(pos, _)| pos)
    }

    /// Update the popup state based on current input.
    fn update_popup_state(&mut self) {
        self.show_popup = self.input.starts_with('/') && !self.input.contains(' ');

        let suggestions = self.suggestions();
        if self.selected_index >= suggestions.len() {
            self.selected_index = suggestions.len().saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer_with(text: &str) -> CommandComposer {
        let mut composer = CommandComposer::new();
        for c in text.chars() {
            composer.insert_char(c);
        }
        composer
    }

    #[test]
    fn test_new_composer_is_closed() {
        let composer = CommandComposer::new();
        assert_eq!(composer.input(), "");
        assert!(!composer.is_open());
        assert!(!composer.should_show_popup());
    }

    #[test]
    fn test_typing_slash_shows_all_commands() {
        let composer = composer_with("/");
        assert!(composer.is_open());
        assert!(composer.should_show_popup());
        assert_eq!(composer.suggestions().len(), COMMANDS.len());
    }

    #[test]
    fn test_prefix_filters_suggestions() {
        let composer = composer_with("/st");
        let suggestions = composer.suggestions();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].0, "/step <value>");
    }

    #[test]
    fn test_popup_hides_after_space() {
        let mut composer = composer_with("/step");
        assert!(composer.should_show_popup());
        composer.insert_char(' ');
        assert!(!composer.should_show_popup());
    }

    #[test]
    fn test_backspace_handles_multibyte_input() {
        let mut composer = composer_with("/add Café");
        composer.delete_char();
        assert_eq!(composer.input(), "/add Caf");

        composer.move_cursor_left();
        composer.insert_char('é');
        assert_eq!(composer.input(), "/add Caéf");
    }

    #[test]
    fn test_selection_navigation() {
        let mut composer = composer_with("/");
        composer.move_selection_up();
        assert_eq!(composer.selected_index, 0);

        composer.move_selection_down();
        composer.move_selection_down();
        assert_eq!(composer.selected_suggestion().map(|s| s.0), Some("/prev"));

        for _ in 0..10 {
            composer.move_selection_down();
        }
        assert_eq!(composer.selected_index, COMMANDS.len() - 1);
    }

    #[test]
    fn test_tab_completion() {
        let mut composer = composer_with("/ad");
        composer.complete_with_selection();
        assert_eq!(composer.input(), "/add ");
        assert!(!composer.should_show_popup());

        let mut composer = composer_with("/re");
        composer.complete_with_selection();
        assert_eq!(composer.input(), "/remove");
    }

    #[test]
    fn test_parse_step_command_keeps_raw_value() {
        let composer = composer_with("/step abc");
        assert_eq!(composer.parse_command(), Ok(Some(Op::SetStep("abc".to_string()))));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(composer_with("  ").parse_command(), Ok(None));
        assert!(composer_with("step 2").parse_command().is_err());
        assert_eq!(
            composer_with("/add").parse_command(),
            Err("Missing step label".to_string())
        );
        assert_eq!(
            composer_with("/jump 2").parse_command(),
            Err("Unknown command: /jump 2".to_string())
        );
    }

    #[test]
    fn test_enter_submits_and_closes() {
        let mut composer = composer_with("/add Review");
        let status = composer.handle_key_event(KeyEvent::from(KeyCode::Enter));

        assert_eq!(status, EventStatus::Consumed);
        assert!(!composer.is_open());
        assert_eq!(
            composer.take_submitted(),
            Some(Ok(Op::AddStep("Review".to_string())))
        );
        assert_eq!(composer.take_submitted(), None);
    }

    #[test]
    fn test_closed_composer_does_not_consume() {
        let mut composer = CommandComposer::new();
        let status = composer.handle_key_event(KeyEvent::from(KeyCode::Left));
        assert_eq!(status, EventStatus::NotConsumed);
    }

    #[test]
    fn test_escape_discards_input() {
        let mut composer = composer_with("/step 4");
        composer.handle_key_event(KeyEvent::from(KeyCode::Esc));
        assert!(!composer.is_open());
        assert_eq!(composer.take_submitted(), None);
    }
}
