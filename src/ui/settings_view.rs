use crate::app::App;
use crate::settings_form::SettingKey;
use crate::ui::colors::{
    RIGHT_ARROW, SETTING_DISABLED_FG, SETTING_EDIT_BG, SETTING_EDIT_FG, SETTING_ENABLED_FG, SETTING_LABEL_FG,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Width of the label column, arrow included.
const LABEL_WIDTH: u16 = 18;

fn settings_block() -> Block<'static> {
    Block::default()
        .title(" Application Settings ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

impl App {
    pub(super) fn render_settings(&self, area: Rect, buf: &mut Buffer) {
        let block = settings_block();
        let inner = block.inner(area);
        block.render(area, buf);

        let form = &self.settings_form;
        let rows = Layout::vertical(vec![Constraint::Length(1); form.fields().len()]).split(inner);

        for (i, ((key, value), row)) in form.fields().iter().zip(rows.iter()).enumerate() {
            let selected = i == form.selected();
            let marker = if selected { RIGHT_ARROW } else { "  " };
            let label = format!("{marker}{}:", key.label());

            let value_span = match form.editor() {
                Some(editor) if selected => Span::styled(
                    format!("{} ", editor.value()),
                    Style::default().fg(SETTING_EDIT_FG).bg(SETTING_EDIT_BG),
                ),
                _ if key.is_toggle() => {
                    let enabled = value == "true";
                    let (text, color) = if enabled {
                        ("[x] on", SETTING_ENABLED_FG)
                    } else {
                        ("[ ] off", SETTING_DISABLED_FG)
                    };
                    Span::styled(text, Style::default().fg(color))
                }
                _ => Span::raw(value.as_str()),
            };

            let mut line = Line::from(vec![
                Span::styled(
                    format!("{label:<width$}", width = LABEL_WIDTH as usize),
                    Style::default().fg(SETTING_LABEL_FG),
                ),
                value_span,
            ]);
            if selected {
                line = line.style(Style::default().add_modifier(Modifier::BOLD));
            }
            Paragraph::new(line).render(*row, buf);
        }
    }

    pub(super) fn settings_cursor_position(&self, area: Rect) -> Option<Position> {
        let form = &self.settings_form;
        let editor = form.editor()?;
        let inner = settings_block().inner(area);
        let row = form.selected() as u16;
        if row >= inner.height {
            return None;
        }
        let x = inner.x + LABEL_WIDTH + editor.visual_cursor() as u16;
        Some(Position::new(x.min(inner.right().saturating_sub(1)), inner.y + row))
    }
}

/// Keys shown in the settings footer.
pub(super) fn settings_hints(editing: bool, selected: Option<SettingKey>) -> &'static str {
    match (editing, selected) {
        (true, _) => "Enter:Confirm  Esc:Cancel",
        (false, Some(key)) if key.is_toggle() => "Up/Down:Select  Space:Toggle  s:Save  b:Back",
        (false, _) => "Up/Down:Select  Enter:Edit  s:Save  b:Back",
    }
}
