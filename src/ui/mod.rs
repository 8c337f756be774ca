pub mod colors;
mod footer;
mod main_view;
mod popups;
mod settings_view;

use crate::app::{App, Focus};
use crate::config::Screen;
use colors::{TITLE_BG, WHITE_COLOR};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
};

/// Areas of the screen frame shared by every screen.
struct ScreenAreas {
    title: Rect,
    content: Rect,
    footer: Rect,
    status: Rect,
}

fn frame_layout(area: Rect) -> ScreenAreas {
    let [title, content, footer, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);
    ScreenAreas {
        title,
        content,
        footer,
        status,
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let frame = frame_layout(area);

        // Title
        let title_middle = Line::from(format!(" {} ", self.settings.app_name)).centered();
        let title_right = Line::from(format!("Version {} ", self.settings.version))
            .right_aligned()
            .style(Style::default().fg(WHITE_COLOR));
        Block::default()
            .title_bottom(title_middle)
            .title_bottom(title_right)
            .style(Style::default().bg(TITLE_BG))
            .render(frame.title, buf);

        match self.screen {
            Screen::Main => self.render_main(frame.content, buf),
            Screen::Settings => self.render_settings(frame.content, buf),
        }

        self.render_footer(frame.footer, buf);
        self.render_status_bar(frame.status, buf);

        if let Some(notification) = &self.notification {
            self.render_notification(notification, area, buf);
        }
    }
}

impl App {
    /// Terminal cursor position for the field being edited, if any.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let frame = frame_layout(area);
        match self.screen {
            Screen::Main if self.focus == Focus::Input && !self.command_input.is_suspended() => {
                self.input_cursor_position(frame.content)
            }
            Screen::Settings => self.settings_cursor_position(frame.content),
            Screen::Main => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::event::EventHandler;
    use crate::service::{Record, SampleDataService};
    use crate::surface::Surface;
    use std::sync::Arc;

    fn render(app: &App, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn test_app(dir: &tempfile::TempDir) -> App {
        let settings = Settings {
            data_dir: dir.path().to_path_buf(),
            ..Settings::default()
        };
        let service = SampleDataService::new(&settings).unwrap();
        App::new(settings, Arc::new(service), EventHandler::detached())
    }

    #[test]
    fn test_main_screen_renders_records_and_status() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.show_records(&[Record::new(1, "Item 1", "active", "2023-01-01")]);
        app.update_status("Loaded 1 items");

        let screen = render(&app, 100, 20);
        assert!(screen.contains("Welcome to toolsapp!"));
        assert!(screen.contains("Enter command..."));
        assert!(screen.contains("Item 1"));
        assert!(screen.contains("Loaded 1 items"));
    }

    #[test]
    fn test_cursor_follows_typed_text() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut app = test_app(&dir);
        let area = Rect::new(0, 0, 100, 20);
        let start = app.cursor_position(area).unwrap();

        for c in "abc".chars() {
            app.handle_key_events(ratatui::crossterm::event::KeyEvent::from(
                ratatui::crossterm::event::KeyCode::Char(c),
            ));
        }
        let moved = app.cursor_position(area).unwrap();
        assert_eq!(moved.x, start.x + 3);
        assert_eq!(moved.y, start.y);
    }

    #[test]
    fn test_settings_screen_lists_fields() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.screen = Screen::Settings;

        let screen = render(&app, 100, 20);
        assert!(screen.contains("Application Settings"));
        assert!(screen.contains("Database Port"));
        assert!(app.cursor_position(Rect::new(0, 0, 100, 20)).is_none());
    }
}
