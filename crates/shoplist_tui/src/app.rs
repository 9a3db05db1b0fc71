use crate::event::{AppEvent, Event, EventHandler};
use crate::popup::Popup;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use shoplist_core::{ItemStore, ListSession, RowId, SessionError};

/// Which control currently receives typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
    Filter,
}

/// Application shell around one core [`ListSession`].
///
/// Holds only presentation state (focus, list cursor, popup); every
/// decision about the item list is delegated to the session.
pub struct App<S: ItemStore> {
    pub running: bool,
    pub events: EventHandler,
    pub session: ListSession<S>,
    pub focus: Focus,
    pub selected: usize,
    pub popup: Popup,
}

impl<S: ItemStore> App<S> {
    pub fn new(session: ListSession<S>) -> Self {
        Self {
            running: false,
            events: EventHandler::new(),
            session,
            focus: Focus::Input,
            selected: 0,
            popup: Popup::None,
        }
    }

    /// Runs the application's main loop until quit.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
            self.handle_events()?;
        }
        Ok(())
    }

    pub fn handle_events(&mut self) -> color_eyre::Result<()> {
        match self.events.next()? {
            Event::Tick => self.tick(),
            Event::Crossterm(event) => {
                if let crossterm::event::Event::Key(key_event) = event {
                    if key_event.kind == KeyEventKind::Press {
                        self.handle_key_event(key_event);
                    }
                }
            }
            Event::App(AppEvent::Quit) => self.quit(),
        }
        Ok(())
    }

    /// Handles key events; exactly one handler runs per event, so each
    /// session read-modify-write below is atomic with respect to input.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        if self.popup.is_open() {
            self.handle_popup_key(key_event.code);
            return;
        }

        match key_event.code {
            KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => {
                self.events.send(AppEvent::Quit);
                return;
            }
            KeyCode::Char('k' | 'K') if key_event.modifiers == KeyModifiers::CONTROL => {
                self.clear_all();
                return;
            }
            KeyCode::Tab => {
                self.cycle_focus();
                return;
            }
            KeyCode::Esc => {
                // External reset: back to the default, non-editing look.
                self.session.reconcile();
                self.focus = Focus::Input;
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key_event.code),
            Focus::List => self.handle_list_key(key_event.code),
            Focus::Filter => self.handle_filter_key(key_event.code),
        }
    }

    fn handle_popup_key(&mut self, code: KeyCode) {
        match &self.popup {
            Popup::ConfirmRemove { .. } => match code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
                    self.popup = Popup::None;
                    if let Err(err) = self.session.confirm_remove() {
                        self.notice(&err);
                    }
                    self.clamp_selection();
                }
                KeyCode::Char('n' | 'N') | KeyCode::Esc => {
                    self.popup = Popup::None;
                    self.session.decline_remove();
                }
                _ => {}
            },
            Popup::Notice { .. } => self.popup = Popup::None,
            Popup::None => {}
        }
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.session.input_backspace(),
            KeyCode::Char(c) => self.session.input_char(c),
            KeyCode::Down => self.focus = Focus::List,
            _ => {}
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Enter | KeyCode::Char('e') => self.begin_edit_selected(),
            KeyCode::Delete | KeyCode::Char('d') => self.request_remove_selected(),
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Backspace => {
                let mut text = self.session.filter().to_string();
                text.pop();
                self.session.set_filter(text);
                self.clamp_selection();
            }
            KeyCode::Char(c) => {
                let mut text = self.session.filter().to_string();
                text.push(c);
                self.session.set_filter(text);
                self.clamp_selection();
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.session.submit() {
            Ok(_) => self.clamp_selection(),
            Err(err) => self.notice(&err),
        }
    }

    fn begin_edit_selected(&mut self) {
        let Some(id) = self.selected_row_id() else {
            return;
        };
        match self.session.begin_edit(id) {
            // Typing continues in the input field, now holding the row text.
            Ok(()) => self.focus = Focus::Input,
            Err(err) => self.notice(&err),
        }
    }

    fn request_remove_selected(&mut self) {
        let Some(id) = self.selected_row_id() else {
            return;
        };
        match self.session.request_remove(id) {
            Ok(name) => self.popup = Popup::ConfirmRemove { name },
            Err(err) => self.notice(&err),
        }
    }

    fn clear_all(&mut self) {
        if let Err(err) = self.session.clear_all() {
            self.notice(&err);
        }
        self.selected = 0;
        self.focus = Focus::Input;
    }

    fn cycle_focus(&mut self) {
        let controls = self.session.ui().controls_visible;
        self.focus = match self.focus {
            Focus::Input if controls => Focus::List,
            Focus::Input => Focus::Input,
            Focus::List if controls => Focus::Filter,
            Focus::List => Focus::Input,
            Focus::Filter => Focus::Input,
        };
    }

    /// Ids of the rows currently shown, in display order.
    pub fn visible_row_ids(&self) -> Vec<RowId> {
        self.session
            .view()
            .rows()
            .iter()
            .filter(|row| row.visible)
            .map(|row| row.id)
            .collect()
    }

    /// Index of the selected row within the visible rows.
    pub fn selected_visible_index(&self) -> Option<usize> {
        let count = self.session.view().visible_len();
        if count == 0 {
            None
        } else {
            Some(self.selected.min(count - 1))
        }
    }

    fn selected_row_id(&self) -> Option<RowId> {
        let ids = self.visible_row_ids();
        self.selected_visible_index().map(|index| ids[index])
    }

    fn move_selection(&mut self, delta: isize) {
        let count = self.session.view().visible_len();
        if count == 0 {
            return;
        }
        let current = self.selected.min(count - 1) as isize;
        self.selected = current.saturating_add(delta).clamp(0, count as isize - 1) as usize;
    }

    fn clamp_selection(&mut self) {
        let count = self.session.view().visible_len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    fn notice(&mut self, err: &SessionError) {
        self.popup = Popup::Notice {
            message: notice_text(err),
        };
    }

    fn tick(&mut self) {}

    pub fn quit(&mut self) {
        self.running = false;
    }
}

/// Maps session errors to the user-facing notice wording.
fn notice_text(err: &SessionError) -> String {
    match err {
        SessionError::EmptyInput => "Please add an item".to_string(),
        SessionError::Duplicate(name) => format!("{name} already exists!"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::notice_text;
    use shoplist_core::SessionError;

    #[test]
    fn notice_text_matches_prompt_wording() {
        assert_eq!(notice_text(&SessionError::EmptyInput), "Please add an item");
        assert_eq!(
            notice_text(&SessionError::Duplicate("Milk".to_string())),
            "Milk already exists!"
        );
    }
}
