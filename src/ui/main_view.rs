use crate::app::{App, Focus};
use crate::input::InputMode;
use crate::ui::colors::{
    INPUT_BLUR_BORDER, INPUT_BUSY_FG, INPUT_FOCUS_BORDER, RECALL_FG, RIGHT_ARROW, TABLE_HEADER_FG,
    TABLE_HIGHLIGHT_BG, ZEBRA_BG,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

const WELCOME: &str = "Welcome to toolsapp!";
const PLACEHOLDER: &str = "Enter command...";

fn main_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([Constraint::Length(1), Constraint::Length(3), Constraint::Fill(1)]).areas(area)
}

impl App {
    pub(super) fn render_main(&self, area: Rect, buf: &mut Buffer) {
        let [welcome_area, input_area, table_area] = main_layout(area);

        Paragraph::new(WELCOME)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .centered()
            .render(welcome_area, buf);

        self.render_command_input(input_area, buf);
        self.render_records(table_area, buf);
    }

    fn render_command_input(&self, area: Rect, buf: &mut Buffer) {
        let input = &self.command_input;
        let focused = self.focus == Focus::Input;

        let border_color = if focused { INPUT_FOCUS_BORDER } else { INPUT_BLUR_BORDER };
        let title = if input.is_suspended() {
            Line::from(" Command (running) ").style(Style::default().fg(INPUT_BUSY_FG))
        } else if input.mode() == InputMode::Recalling {
            let history = input.history();
            Line::from(format!(" Command [{}/{}] ", history.cursor() + 1, history.len()))
                .style(Style::default().fg(RECALL_FG))
        } else {
            Line::from(" Command ")
        };

        let block = Block::default()
            .title(title)
            .title_bottom(Line::from(" Enter: Execute ").right_aligned())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        let inner_width = block.inner(area).width as usize;
        let paragraph = if input.value().is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            let style = if input.is_suspended() {
                Style::default().fg(INPUT_BUSY_FG)
            } else {
                Style::default()
            };
            Paragraph::new(input.value())
                .style(style)
                .scroll((0, input.visual_scroll(inner_width) as u16))
        };

        paragraph.block(block).render(area, buf);
    }

    fn render_records(&self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(["ID", "Name", "Status", "Updated"])
            .style(Style::default().fg(TABLE_HEADER_FG).add_modifier(Modifier::BOLD));

        let rows = self.records.iter().enumerate().map(|(i, record)| {
            let row = Row::new(record.cells());
            if i % 2 == 1 {
                row.style(Style::default().bg(ZEBRA_BG))
            } else {
                row
            }
        });

        let widths = [
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Length(12),
            Constraint::Length(12),
        ];

        let mut table = Table::new(rows, widths).header(header).block(
            Block::default()
                .title(" Records ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

        let mut table_state = TableState::default();
        if self.focus == Focus::Table && !self.records.is_empty() {
            table = table
                .highlight_symbol(RIGHT_ARROW)
                .row_highlight_style(Style::default().bg(TABLE_HIGHLIGHT_BG).add_modifier(Modifier::BOLD));
            table_state.select(Some(self.selected_row));
        }

        StatefulWidget::render(table, area, buf, &mut table_state);
    }

    pub(super) fn input_cursor_position(&self, area: Rect) -> Option<Position> {
        let [_, input_area, _] = main_layout(area);
        let inner = Block::default().borders(Borders::ALL).inner(input_area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let column = self.command_input.visual_cursor(inner.width as usize) as u16;
        Some(Position::new(inner.x + column.min(inner.width - 1), inner.y))
    }
}
