use crate::history::HistoryBuffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, InputRequest};

/// Whether the field shows live text or a recalled history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Editing,
    Recalling,
}

/// Events emitted by [`CommandInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Enter was pressed on non-blank text. Carries the trimmed command.
    Submitted(String),
}

/// Single-line command field with history recall.
///
/// Up/Down walk the history, Enter commits the text to history and submits
/// it. After a submission the field is suspended and ignores keys until the
/// caller resumes it with the dispatch outcome.
#[derive(Debug, Default)]
pub struct CommandInput {
    input: Input,
    history: HistoryBuffer,
    suspended: bool,
}

impl CommandInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Cursor column relative to the start of the visible text.
    pub fn visual_cursor(&self, width: usize) -> usize {
        self.input.visual_cursor().saturating_sub(self.input.visual_scroll(width))
    }

    /// Horizontal scroll needed to keep the cursor visible in `width` columns.
    pub fn visual_scroll(&self, width: usize) -> usize {
        self.input.visual_scroll(width)
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn mode(&self) -> InputMode {
        if self.history.is_recalling() {
            InputMode::Recalling
        } else {
            InputMode::Editing
        }
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Accepts keys again after a dispatch finished.
    pub fn resume(&mut self) {
        self.suspended = false;
    }

    /// Empties the field and leaves recall mode.
    pub fn clear(&mut self) {
        self.input.reset();
        self.history.reset_cursor();
    }

    /// Handles a key press. Returns an event when a command was submitted.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<InputEvent> {
        if self.suspended {
            return None;
        }

        match key.code {
            KeyCode::Enter => return self.submit(),
            KeyCode::Up => self.recall_previous(),
            KeyCode::Down => self.recall_next(),
            KeyCode::Left => self.move_cursor(InputRequest::GoToPrevChar),
            KeyCode::Right => self.move_cursor(InputRequest::GoToNextChar),
            KeyCode::Home => self.move_cursor(InputRequest::GoToStart),
            KeyCode::End => self.move_cursor(InputRequest::GoToEnd),
            KeyCode::Backspace => self.edit(InputRequest::DeletePrevChar),
            KeyCode::Delete => self.edit(InputRequest::DeleteNextChar),
            KeyCode::Char('u') if key.modifiers == KeyModifiers::CONTROL => {
                self.edit(InputRequest::DeleteLine)
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit(InputRequest::InsertChar(c))
            }
            _ => {}
        }
        None
    }

    /// Inserts pasted text at the caret. Line breaks are dropped.
    pub fn paste(&mut self, text: &str) {
        if self.suspended {
            return;
        }
        for c in text.chars().filter(|c| !matches!(c, '\n' | '\r')) {
            self.input.handle(InputRequest::InsertChar(c));
        }
        self.history.reset_cursor();
    }

    fn submit(&mut self) -> Option<InputEvent> {
        let value = self.input.value().to_string();
        self.history.commit(&value);

        let command = value.trim();
        if command.is_empty() {
            return None;
        }
        self.suspended = true;
        Some(InputEvent::Submitted(command.to_string()))
    }

    fn recall_previous(&mut self) {
        if let Some(text) = self.history.recall_previous() {
            // Input::new places the cursor after the last character
            self.input = Input::new(text.to_string());
        }
    }

    fn recall_next(&mut self) {
        if let Some(text) = self.history.recall_next() {
            self.input = Input::new(text.to_string());
        }
    }

    fn move_cursor(&mut self, request: InputRequest) {
        self.input.handle(request);
    }

    fn edit(&mut self, request: InputRequest) {
        self.input.handle(request);
        self.history.reset_cursor();
    }
}
