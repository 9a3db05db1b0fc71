//! Shopping-list interaction session.
//!
//! # Responsibility
//! - Drive the add/edit/remove/filter/clear flows over one item list.
//! - Recompute derived UI state after every mutation.
//!
//! # Invariants
//! - Persisted items and view rows stay in sync at operation boundaries.
//! - `Mode::Editing` targets a row that exists in the view.
//! - A remove only executes after an explicit confirmation.

use crate::repo::item_repo::ItemRepository;
use crate::store::{ItemStore, StoreError};
use crate::view::list_view::{ListView, RowId};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// User-facing and internal errors raised by session operations.
///
/// `EmptyInput` and `Duplicate` are blocking notices: the triggering state
/// is unchanged and no mutation has occurred when they are returned.
#[derive(Debug)]
pub enum SessionError {
    /// Submitted item text is empty.
    EmptyInput,
    /// Item name already exists (add path only; edit bypasses this check).
    Duplicate(String),
    /// A row id no longer resolves to a view row.
    UnknownRow(RowId),
    Store(StoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "submitted item text is empty"),
            Self::Duplicate(name) => write!(f, "item `{name}` already exists"),
            Self::UnknownRow(id) => write!(f, "row not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Interaction state machine: appending vs. replacing on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Exactly one row is targeted for replacement; the input mirrors its
    /// text and submit swaps the old entry for the new one.
    Editing(RowId),
}

/// How the submit affordance should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitMode {
    #[default]
    Add,
    Update,
}

/// Derived UI state recomputed by every reconcile pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    /// Whether the clear-all and filter controls should be shown.
    pub controls_visible: bool,
    pub submit_mode: SubmitMode,
}

/// One interactive shopping-list session over an injected store.
pub struct ListSession<S: ItemStore> {
    repo: ItemRepository<S>,
    view: ListView,
    mode: Mode,
    pending_remove: Option<RowId>,
    input: String,
    filter: String,
    ui: UiState,
}

impl<S: ItemStore> ListSession<S> {
    /// Opens a session: loads persisted items into the view and reconciles.
    pub fn open(store: S) -> SessionResult<Self> {
        let repo = ItemRepository::new(store);
        let mut view = ListView::new();
        let items = repo.list()?;
        view.render_all(&items);

        let mut session = Self {
            repo,
            view,
            mode: Mode::Normal,
            pending_remove: None,
            input: String::new(),
            filter: String::new(),
            ui: UiState::default(),
        };
        session.reconcile();
        info!(
            "event=session_open module=session status=ok items={}",
            session.view.len()
        );
        Ok(session)
    }

    /// Submits the current input text.
    ///
    /// Normal mode appends a fresh, non-duplicate item. Editing mode
    /// replaces the targeted row's original item with the new text (old
    /// entry removed, new entry appended; no duplicate check, matching the
    /// interactive edit flow). Returns the id of the appended row.
    ///
    /// # Errors
    /// - `EmptyInput` when the input is empty; mode is unchanged, so an
    ///   in-progress edit stays in progress.
    /// - `Duplicate` when adding a name that already exists (Normal only).
    pub fn submit(&mut self) -> SessionResult<RowId> {
        let text = self.input.clone();
        if text.is_empty() {
            info!("event=submit module=session status=rejected reason=empty_input");
            return Err(SessionError::EmptyInput);
        }

        let kind = match self.mode {
            Mode::Editing(target) => {
                let original = self
                    .view
                    .row(target)
                    .map(|row| row.name.clone())
                    .ok_or(SessionError::UnknownRow(target))?;
                self.repo.remove(&original)?;
                self.view.remove_row(target);
                "update"
            }
            Mode::Normal => {
                if self.repo.exists(&text)? {
                    info!("event=submit module=session status=rejected reason=duplicate");
                    return Err(SessionError::Duplicate(text));
                }
                "add"
            }
        };

        self.repo.add(&text)?;
        let id = self.view.append_row(text);
        self.reconcile();
        info!("event=submit module=session status=ok kind={kind}");
        Ok(id)
    }

    /// Enters (or retargets) edit mode on the given row.
    ///
    /// The input buffer mirrors the row's text and the submit affordance
    /// switches to Update. Clicking another row simply moves the target.
    pub fn begin_edit(&mut self, id: RowId) -> SessionResult<()> {
        let name = self
            .view
            .row(id)
            .map(|row| row.name.clone())
            .ok_or(SessionError::UnknownRow(id))?;

        self.mode = Mode::Editing(id);
        self.view.mark_editing(Some(id));
        self.input = name;
        self.ui.submit_mode = SubmitMode::Update;
        info!("event=edit_begin module=session status=ok");
        Ok(())
    }

    /// Records a pending remove and returns the item name for the
    /// confirmation prompt. No mutation happens until `confirm_remove`.
    pub fn request_remove(&mut self, id: RowId) -> SessionResult<String> {
        let name = self
            .view
            .row(id)
            .map(|row| row.name.clone())
            .ok_or(SessionError::UnknownRow(id))?;
        self.pending_remove = Some(id);
        Ok(name)
    }

    /// Executes the pending remove, if any.
    ///
    /// Removes all persisted entries with the row's name, detaches the row,
    /// and auto-cancels edit mode when the removed row was the edit target.
    /// Returns the removed name, or `None` when nothing was pending.
    pub fn confirm_remove(&mut self) -> SessionResult<Option<String>> {
        let Some(id) = self.pending_remove.take() else {
            return Ok(None);
        };
        let name = self
            .view
            .row(id)
            .map(|row| row.name.clone())
            .ok_or(SessionError::UnknownRow(id))?;

        self.repo.remove(&name)?;
        self.view.remove_row(id);
        if self.mode == Mode::Editing(id) {
            info!("event=edit_cancel module=session status=ok reason=target_removed");
        }
        self.reconcile();
        info!("event=remove module=session status=ok");
        Ok(Some(name))
    }

    /// Drops the pending remove prompt without mutating anything.
    pub fn decline_remove(&mut self) {
        self.pending_remove = None;
    }

    /// Clears the persisted list and all rows, from any state.
    pub fn clear_all(&mut self) -> SessionResult<()> {
        self.repo.clear()?;
        self.view.clear_all();
        self.reconcile();
        info!("event=clear_all module=session status=ok");
        Ok(())
    }

    /// Stores the filter text and applies it to the view.
    ///
    /// Not a mutating transition: reconcile does not run, and the filter
    /// survives reconcile passes triggered by other operations.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
        self.view.apply_filter(&self.filter);
    }

    /// Resets the session to its default presentation.
    ///
    /// Hides the clear-all and filter controls when no rows remain, clears
    /// the input, restores the Add affordance, drops any pending prompt and
    /// forces the mode back to Normal.
    pub fn reconcile(&mut self) {
        self.input.clear();
        self.ui.controls_visible = !self.view.is_empty();
        self.ui.submit_mode = SubmitMode::Add;
        self.pending_remove = None;
        self.mode = Mode::Normal;
        self.view.mark_editing(None);
    }

    /// Appends one character to the input buffer.
    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Removes the last character from the input buffer.
    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Replaces the input buffer wholesale.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn repo(&self) -> &ItemRepository<S> {
        &self.repo
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn ui(&self) -> UiState {
        self.ui
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Name of the row awaiting remove confirmation, if any.
    pub fn pending_remove_name(&self) -> Option<&str> {
        self.pending_remove
            .and_then(|id| self.view.row(id))
            .map(|row| row.name.as_str())
    }
}
