//! Centered blocking popups: remove confirmation and error notices.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

/// Modal state; while open, all key input is routed to the popup.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Popup {
    #[default]
    None,
    /// Waiting for y/n before removing the named item.
    ConfirmRemove { name: String },
    /// Blocking validation/duplicate notice; any key dismisses it.
    Notice { message: String },
}

impl Popup {
    pub fn is_open(&self) -> bool {
        !matches!(self, Popup::None)
    }
}

impl Widget for &Popup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, body, color) = match self {
            Popup::None => return,
            Popup::ConfirmRemove { name } => (
                " remove item ",
                format!("Are you sure you would like to remove {name}?\n\n[y]es / [n]o"),
                Color::Red,
            ),
            Popup::Notice { message } => (
                " notice ",
                format!("{message}\n\npress any key"),
                Color::Yellow,
            ),
        };

        let popup_area = centered(area, 44, 6);
        Clear.render(popup_area, buf);
        Paragraph::new(body)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .title(title)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            )
            .render(popup_area, buf);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
