use crate::app::App;
use crate::surface::{Notification, Severity};
use crate::ui::colors::{MESSAGE_BORDER, MESSAGE_ERROR_FG, MESSAGE_INFO_FG};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Widest a notification may grow.
const MAX_NOTIFICATION_WIDTH: u16 = 60;

/// Calculates a popup area anchored to the bottom-right corner of `area`,
/// keeping a margin of one cell and staying above the bottom `reserved` rows.
pub(super) fn corner_area(area: Rect, width: u16, height: u16, reserved: u16) -> Rect {
    let margin = 1;

    let max_width = area.width.saturating_sub(2 * margin);
    let max_height = area.height.saturating_sub(2 * margin + reserved);

    let popup_width = width.min(max_width);
    let popup_height = height.min(max_height);

    let x = area.x + area.width.saturating_sub(popup_width + margin);
    let y = area.y + area.height.saturating_sub(popup_height + margin + reserved);

    Rect {
        x,
        y,
        width: popup_width,
        height: popup_height,
    }
}

impl App {
    /// Renders the current notification as a toast that adapts to content size.
    pub(super) fn render_notification(&self, notification: &Notification, area: Rect, buf: &mut Buffer) {
        let (title, color) = match notification.severity {
            Severity::Information => ("Notice", MESSAGE_BORDER),
            Severity::Error => ("Error", MESSAGE_ERROR_FG),
        };

        let text_width = u16::try_from(notification.message.chars().count()).unwrap_or(u16::MAX);
        let width = text_width.saturating_add(4).clamp(20, MAX_NOTIFICATION_WIDTH);
        let inner_width = width.saturating_sub(4).max(1);
        let lines = text_width.div_ceil(inner_width).max(1);
        let popup = corner_area(area, width, lines.saturating_add(2), 2);

        Clear.render(popup, buf);

        let block = Block::default()
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(color))
            .title_alignment(Alignment::Left)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color));

        Paragraph::new(notification.message.as_str())
            .block(block)
            .style(Style::default().fg(MESSAGE_INFO_FG))
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}
