use shoplist_core::{
    ListSession, MemoryItemStore, Mode, SessionError, SqliteItemStore, SubmitMode,
};

fn session() -> ListSession<MemoryItemStore> {
    ListSession::open(MemoryItemStore::new()).unwrap()
}

fn add(session: &mut ListSession<MemoryItemStore>, name: &str) {
    session.set_input(name);
    session.submit().unwrap();
}

#[test]
fn open_on_empty_storage_hides_controls() {
    let session = session();
    assert_eq!(session.view().len(), 0);
    assert!(!session.ui().controls_visible);
    assert_eq!(session.ui().submit_mode, SubmitMode::Add);
}

#[test]
fn adding_first_item_shows_controls_and_clears_input() {
    let mut session = session();
    add(&mut session, "Milk");

    assert_eq!(session.repo().list().unwrap(), ["Milk"]);
    assert_eq!(session.view().len(), 1);
    assert!(session.ui().controls_visible);
    assert!(session.input().is_empty());
}

#[test]
fn empty_submit_mutates_nothing() {
    let mut session = session();
    add(&mut session, "Milk");

    let err = session.submit().unwrap_err();
    assert!(matches!(err, SessionError::EmptyInput));
    assert_eq!(session.repo().list().unwrap(), ["Milk"]);
    assert_eq!(session.view().len(), 1);
}

#[test]
fn duplicate_add_is_rejected_without_mutation() {
    let mut session = session();
    add(&mut session, "Milk");

    session.set_input("Milk");
    let err = session.submit().unwrap_err();
    assert!(matches!(err, SessionError::Duplicate(name) if name == "Milk"));
    assert_eq!(session.repo().list().unwrap(), ["Milk"]);
    assert_eq!(session.view().len(), 1);
}

#[test]
fn edit_replaces_item_with_remove_then_append_ordering() {
    let mut session = session();
    add(&mut session, "Milk");
    add(&mut session, "Eggs");

    let milk = session.view().rows()[0].id;
    session.begin_edit(milk).unwrap();
    assert_eq!(session.mode(), Mode::Editing(milk));
    assert_eq!(session.input(), "Milk");
    assert_eq!(session.ui().submit_mode, SubmitMode::Update);
    assert!(session.view().row(milk).unwrap().editing);

    session.set_input("Oat Milk");
    session.submit().unwrap();

    assert_eq!(session.repo().list().unwrap(), ["Eggs", "Oat Milk"]);
    assert_eq!(session.mode(), Mode::Normal);
    assert_eq!(session.ui().submit_mode, SubmitMode::Add);
    assert!(session.view().rows().iter().all(|row| !row.editing));
}

#[test]
fn edit_bypasses_the_duplicate_check() {
    let mut session = session();
    add(&mut session, "Milk");
    add(&mut session, "Eggs");

    let eggs = session.view().rows()[1].id;
    session.begin_edit(eggs).unwrap();
    session.set_input("Milk");
    session.submit().unwrap();

    // The edit path never dedups, so two entries with the same name remain.
    assert_eq!(session.repo().list().unwrap(), ["Milk", "Milk"]);
}

#[test]
fn empty_submit_while_editing_stays_in_edit_mode() {
    let mut session = session();
    add(&mut session, "Milk");

    let milk = session.view().rows()[0].id;
    session.begin_edit(milk).unwrap();
    session.set_input("");

    let err = session.submit().unwrap_err();
    assert!(matches!(err, SessionError::EmptyInput));
    assert_eq!(session.mode(), Mode::Editing(milk));
    assert_eq!(session.repo().list().unwrap(), ["Milk"]);
}

#[test]
fn clicking_another_row_retargets_the_edit() {
    let mut session = session();
    add(&mut session, "Milk");
    add(&mut session, "Eggs");

    let milk = session.view().rows()[0].id;
    let eggs = session.view().rows()[1].id;

    session.begin_edit(milk).unwrap();
    session.begin_edit(eggs).unwrap();

    assert_eq!(session.mode(), Mode::Editing(eggs));
    assert_eq!(session.input(), "Eggs");
    assert!(!session.view().row(milk).unwrap().editing);
    assert!(session.view().row(eggs).unwrap().editing);
}

#[test]
fn remove_requires_confirmation() {
    let mut session = session();
    add(&mut session, "Milk");

    let milk = session.view().rows()[0].id;
    let name = session.request_remove(milk).unwrap();
    assert_eq!(name, "Milk");

    // Nothing mutated while the prompt is pending.
    assert_eq!(session.repo().list().unwrap(), ["Milk"]);
    assert_eq!(session.pending_remove_name(), Some("Milk"));

    let removed = session.confirm_remove().unwrap();
    assert_eq!(removed.as_deref(), Some("Milk"));
    assert!(session.repo().list().unwrap().is_empty());
    assert_eq!(session.view().len(), 0);
    assert!(!session.ui().controls_visible);
}

#[test]
fn declining_a_remove_is_a_noop() {
    let mut session = session();
    add(&mut session, "Milk");

    let milk = session.view().rows()[0].id;
    session.request_remove(milk).unwrap();
    session.decline_remove();

    assert_eq!(session.repo().list().unwrap(), ["Milk"]);
    assert_eq!(session.view().len(), 1);
    assert_eq!(session.confirm_remove().unwrap(), None);
}

#[test]
fn removing_the_edit_target_cancels_edit_mode() {
    let mut session = session();
    add(&mut session, "Milk");
    add(&mut session, "Eggs");

    let milk = session.view().rows()[0].id;
    session.begin_edit(milk).unwrap();
    session.request_remove(milk).unwrap();
    session.confirm_remove().unwrap();

    assert_eq!(session.mode(), Mode::Normal);
    assert_eq!(session.ui().submit_mode, SubmitMode::Add);
    assert_eq!(session.repo().list().unwrap(), ["Eggs"]);
}

#[test]
fn clear_all_empties_storage_and_view_from_any_state() {
    let mut session = session();
    add(&mut session, "Milk");
    add(&mut session, "Eggs");

    let milk = session.view().rows()[0].id;
    session.begin_edit(milk).unwrap();
    session.clear_all().unwrap();

    assert!(session.repo().list().unwrap().is_empty());
    assert_eq!(session.view().len(), 0);
    assert!(!session.ui().controls_visible);
    assert_eq!(session.mode(), Mode::Normal);
}

#[test]
fn filter_narrows_visible_rows_without_touching_storage() {
    let mut session = session();
    add(&mut session, "Oat Milk");
    add(&mut session, "Eggs");
    add(&mut session, "milkshake");

    session.set_filter("MILK");
    assert_eq!(session.view().visible_len(), 2);
    assert_eq!(session.repo().list().unwrap().len(), 3);

    session.set_filter("");
    assert_eq!(session.view().visible_len(), 3);
}

#[test]
fn filter_survives_a_mutation_but_new_rows_append_visible() {
    let mut session = session();
    add(&mut session, "Milk");
    session.set_filter("milk");

    add(&mut session, "Eggs");
    assert_eq!(session.filter(), "milk");
    // Fresh rows show until the filter is retyped, like filter-as-you-type.
    assert!(session.view().rows().last().unwrap().visible);
}

#[test]
fn session_reloads_persisted_items_on_open() {
    let mut session = session();
    add(&mut session, "Milk");
    add(&mut session, "Eggs");

    // A second session over the same sqlite file sees the same list.
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("shoplist.sqlite3");
    {
        let store = SqliteItemStore::open(&path).unwrap();
        let mut first = ListSession::open(store).unwrap();
        first.set_input("Bread");
        first.submit().unwrap();
    }

    let store = SqliteItemStore::open(&path).unwrap();
    let reopened = ListSession::open(store).unwrap();
    assert_eq!(reopened.repo().list().unwrap(), ["Bread"]);
    assert_eq!(reopened.view().len(), 1);
    assert!(reopened.ui().controls_visible);
}
