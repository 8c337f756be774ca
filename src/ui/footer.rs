use crate::app::{App, Focus};
use crate::config::Screen;
use crate::ui::colors::{DEBUG_FG, FOOTER_BG, KEY_HINT_FG, STATUS_BG, STATUS_FG};
use crate::ui::settings_view::settings_hints;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

const MAIN_INPUT_HINTS: &str = "Enter:Execute  Up/Down:History  Tab:Table  Ctrl+D:Debug  Ctrl+C:Quit";
const MAIN_TABLE_HINTS: &str = "Tab:Input  Up/Down:Select  r:Refresh  s:Settings  q:Quit";

/// Turns `"a:b  c:d"` into spans with the keys highlighted.
fn hint_spans(hints: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    for (i, hint) in hints.split("  ").enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        match hint.split_once(':') {
            Some((key, action)) => {
                spans.push(Span::styled(
                    key,
                    Style::default().fg(KEY_HINT_FG).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(format!(" {action}")));
            }
            None => spans.push(Span::raw(hint)),
        }
    }
    spans
}

impl App {
    fn footer_hints(&self) -> &'static str {
        match (self.screen, self.focus) {
            (Screen::Main, Focus::Input) => MAIN_INPUT_HINTS,
            (Screen::Main, Focus::Table) => MAIN_TABLE_HINTS,
            (Screen::Settings, _) => {
                let form = &self.settings_form;
                let selected = form.fields().get(form.selected()).map(|(key, _)| *key);
                settings_hints(form.editor().is_some(), selected)
            }
        }
    }

    pub(super) fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(hint_spans(self.footer_hints())))
            .block(Block::default().style(Style::default().bg(FOOTER_BG)))
            .render(area, buf);
    }

    pub(super) fn render_status_bar(&self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(STATUS_BG).fg(STATUS_FG))
            .render(area, buf);

        let clock = self.status.clock();
        let [message_area, debug_area, clock_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(u16::try_from(clock.chars().count()).unwrap_or(u16::MAX).saturating_add(1)),
        ])
        .areas(area);

        Paragraph::new(format!(" {}", self.status.message())).render(message_area, buf);

        if let Some(debug) = self.debug_info() {
            Paragraph::new(debug)
                .style(Style::default().fg(DEBUG_FG))
                .centered()
                .render(debug_area, buf);
        }

        Paragraph::new(clock).right_aligned().render(clock_area, buf);
    }
}
