use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use shoplist_core::{ItemStore, SubmitMode};

use crate::app::{App, Focus};

const EDITING_COLOR: Color = Color::Green;

impl<S: ItemStore> Widget for &App<S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let controls = self.session.ui().controls_visible;

        let mut constraints = vec![Constraint::Length(3), Constraint::Min(1)];
        if controls {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Length(1));
        let areas = Layout::vertical(constraints).split(area);

        render_input(self, areas[0], buf);
        render_list(self, areas[1], buf);
        if controls {
            render_filter(self, areas[2], buf);
        }
        render_footer(self, areas[areas.len() - 1], buf);

        (&self.popup).render(area, buf);
    }
}

fn render_input<S: ItemStore>(app: &App<S>, area: Rect, buf: &mut Buffer) {
    let (title, accent) = match app.session.ui().submit_mode {
        SubmitMode::Add => (" Add Item ", Color::Reset),
        SubmitMode::Update => (" Update Item ", EDITING_COLOR),
    };

    let mut text = app.session.input().to_string();
    if app.focus == Focus::Input && !app.popup.is_open() {
        text.push('_');
    }

    Paragraph::new(text)
        .block(
            Block::bordered()
                .title(title)
                .border_type(BorderType::Rounded)
                .border_style(focus_style(app.focus == Focus::Input).fg(accent)),
        )
        .render(area, buf);
}

fn render_list<S: ItemStore>(app: &App<S>, area: Rect, buf: &mut Buffer) {
    let items: Vec<ListItem> = app
        .session
        .view()
        .rows()
        .iter()
        .filter(|row| row.visible)
        .map(|row| {
            let line = if row.editing {
                Line::styled(
                    row.name.clone(),
                    Style::default()
                        .fg(EDITING_COLOR)
                        .add_modifier(Modifier::ITALIC),
                )
            } else {
                Line::raw(row.name.clone())
            };
            ListItem::new(line)
        })
        .collect();

    let title = format!(" Shopping List ({}) ", app.session.view().visible_len());
    let list = List::new(items)
        .block(
            Block::bordered()
                .title(title)
                .border_type(BorderType::Rounded)
                .border_style(focus_style(app.focus == Focus::List)),
        )
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default().with_selected(app.selected_visible_index());
    StatefulWidget::render(list, area, buf, &mut state);
}

fn render_filter<S: ItemStore>(app: &App<S>, area: Rect, buf: &mut Buffer) {
    let mut text = app.session.filter().to_string();
    if app.focus == Focus::Filter && !app.popup.is_open() {
        text.push('_');
    }

    Paragraph::new(text)
        .block(
            Block::bordered()
                .title(" Filter Items ")
                .border_type(BorderType::Rounded)
                .border_style(focus_style(app.focus == Focus::Filter)),
        )
        .render(area, buf);
}

fn render_footer<S: ItemStore>(app: &App<S>, area: Rect, buf: &mut Buffer) {
    let hints = match app.focus {
        Focus::Input => "enter submit · tab focus list · esc reset",
        Focus::List => "enter edit · d remove · ^k clear all · tab focus · q quit",
        Focus::Filter => "type to filter · tab focus input · esc reset",
    };
    Paragraph::new(hints).dim().render(area, buf);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}
