use crate::config::Settings;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use std::fmt;
use tui_input::{Input, InputRequest};

/// Settings that can be edited on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    RefreshRate,
    ShowDebug,
    ApiBaseUrl,
    ApiTimeout,
    DatabaseHost,
    DatabasePort,
}

impl SettingKey {
    pub const ALL: [SettingKey; 6] = [
        SettingKey::RefreshRate,
        SettingKey::ShowDebug,
        SettingKey::ApiBaseUrl,
        SettingKey::ApiTimeout,
        SettingKey::DatabaseHost,
        SettingKey::DatabasePort,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingKey::RefreshRate => "Refresh Rate",
            SettingKey::ShowDebug => "Show Debug",
            SettingKey::ApiBaseUrl => "API Base URL",
            SettingKey::ApiTimeout => "API Timeout",
            SettingKey::DatabaseHost => "Database Host",
            SettingKey::DatabasePort => "Database Port",
        }
    }

    /// Toggles flip with Space instead of opening an editor.
    pub fn is_toggle(&self) -> bool {
        matches!(self, SettingKey::ShowDebug)
    }

    fn read(&self, settings: &Settings) -> String {
        match self {
            SettingKey::RefreshRate => settings.ui.refresh_rate.to_string(),
            SettingKey::ShowDebug => settings.ui.show_debug.to_string(),
            SettingKey::ApiBaseUrl => settings.api.base_url.clone(),
            SettingKey::ApiTimeout => settings.api.timeout.to_string(),
            SettingKey::DatabaseHost => settings.database.host.clone(),
            SettingKey::DatabasePort => settings.database.port.to_string(),
        }
    }

    fn write(&self, settings: &mut Settings, value: &str) -> Result<(), String> {
        let value = value.trim();
        match self {
            SettingKey::RefreshRate => {
                let rate: f64 = value.parse().map_err(|e| format!("{e}"))?;
                if !rate.is_finite() || rate <= 0.0 {
                    return Err("must be a positive number".to_string());
                }
                settings.ui.refresh_rate = rate;
            }
            SettingKey::ShowDebug => {
                settings.ui.show_debug = value.parse().map_err(|e| format!("{e}"))?;
            }
            SettingKey::ApiBaseUrl => settings.api.base_url = value.to_string(),
            SettingKey::ApiTimeout => {
                settings.api.timeout = value.parse().map_err(|e| format!("{e}"))?;
            }
            SettingKey::DatabaseHost => settings.database.host = value.to_string(),
            SettingKey::DatabasePort => {
                settings.database.port = value.parse().map_err(|e| format!("{e}"))?;
            }
        }
        Ok(())
    }
}

/// A field value that could not be applied to the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    pub key: SettingKey,
    pub value: String,
    pub reason: String,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} '{}': {}", self.key.label(), self.value, self.reason)
    }
}

impl std::error::Error for FormError {}

/// Requests the form cannot handle itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Save,
    Back,
}

/// Editable copy of the settings shown on the settings screen.
#[derive(Debug)]
pub struct SettingsForm {
    values: Vec<(SettingKey, String)>,
    selected: usize,
    editor: Option<Input>,
}

impl SettingsForm {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            values: SettingKey::ALL.iter().map(|key| (*key, key.read(settings))).collect(),
            selected: 0,
            editor: None,
        }
    }

    pub fn fields(&self) -> &[(SettingKey, String)] {
        &self.values
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The in-progress edit of the selected field, if any.
    pub fn editor(&self) -> Option<&Input> {
        self.editor.as_ref()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FormAction> {
        if self.editor.is_some() {
            self.handle_edit_key(key);
            return None;
        }

        match key.code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(self.values.len() - 1),
            KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Enter => self.begin_edit(),
            KeyCode::Char('s') => return Some(FormAction::Save),
            KeyCode::Char('b') | KeyCode::Esc => return Some(FormAction::Back),
            _ => {}
        }
        None
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let request = match key.code {
            KeyCode::Enter => return self.confirm_edit(),
            KeyCode::Esc => {
                self.editor = None;
                return;
            }
            KeyCode::Left => InputRequest::GoToPrevChar,
            KeyCode::Right => InputRequest::GoToNextChar,
            KeyCode::Home => InputRequest::GoToStart,
            KeyCode::End => InputRequest::GoToEnd,
            KeyCode::Backspace => InputRequest::DeletePrevChar,
            KeyCode::Delete => InputRequest::DeleteNextChar,
            KeyCode::Char(c) => InputRequest::InsertChar(c),
            _ => return,
        };
        if let Some(editor) = self.editor.as_mut() {
            editor.handle(request);
        }
    }

    fn begin_edit(&mut self) {
        let Some((key, value)) = self.values.get(self.selected).cloned() else {
            return;
        };
        if key.is_toggle() {
            self.toggle_selected();
        } else {
            self.editor = Some(Input::new(value));
        }
    }

    fn confirm_edit(&mut self) {
        if let (Some(editor), Some((_, value))) = (self.editor.take(), self.values.get_mut(self.selected)) {
            *value = editor.value().to_string();
        }
    }

    fn toggle_selected(&mut self) {
        if let Some((key, value)) = self.values.get_mut(self.selected)
            && key.is_toggle()
        {
            let enabled = value.trim() == "true";
            *value = (!enabled).to_string();
        }
    }

    /// Applies every field to a copy of `settings`.
    pub fn apply(&self, settings: &Settings) -> Result<Settings, FormError> {
        let mut updated = settings.clone();
        for (key, value) in &self.values {
            key.write(&mut updated, value).map_err(|reason| FormError {
                key: *key,
                value: value.clone(),
                reason,
            })?;
        }
        Ok(updated)
    }
}
