use shoplist_core::{ItemRepository, MemoryItemStore, SqliteItemStore};

#[test]
fn add_preserves_insertion_order() {
    let repo = ItemRepository::new(MemoryItemStore::new());

    repo.add("Milk").unwrap();
    repo.add("Eggs").unwrap();
    repo.add("Bread").unwrap();

    assert_eq!(repo.list().unwrap(), ["Milk", "Eggs", "Bread"]);
}

#[test]
fn exists_is_exact_and_case_sensitive() {
    let repo = ItemRepository::new(MemoryItemStore::new());
    repo.add("Milk").unwrap();

    assert!(repo.exists("Milk").unwrap());
    assert!(!repo.exists("milk").unwrap());
    assert!(!repo.exists("Mil").unwrap());
}

#[test]
fn add_then_exists_then_remove_then_absent() {
    let repo = ItemRepository::new(MemoryItemStore::new());

    repo.add("Eggs").unwrap();
    assert!(repo.exists("Eggs").unwrap());

    repo.remove("Eggs").unwrap();
    assert!(!repo.exists("Eggs").unwrap());
    assert!(repo.list().unwrap().is_empty());
}

#[test]
fn remove_drops_all_matching_occurrences() {
    let repo = ItemRepository::new(MemoryItemStore::new());

    // Duplicates can exist legitimately; the edit path never dedups.
    repo.add("Milk").unwrap();
    repo.add("Eggs").unwrap();
    repo.add("Milk").unwrap();

    repo.remove("Milk").unwrap();
    assert_eq!(repo.list().unwrap(), ["Eggs"]);
}

#[test]
fn remove_of_absent_name_is_a_noop() {
    let repo = ItemRepository::new(MemoryItemStore::new());
    repo.add("Milk").unwrap();

    repo.remove("Cheese").unwrap();
    assert_eq!(repo.list().unwrap(), ["Milk"]);
}

#[test]
fn clear_empties_the_list() {
    let repo = ItemRepository::new(MemoryItemStore::new());
    repo.add("Milk").unwrap();
    repo.add("Eggs").unwrap();

    repo.clear().unwrap();
    assert!(repo.list().unwrap().is_empty());
}

#[test]
fn sqlite_backed_repository_behaves_like_memory_backed() {
    let repo = ItemRepository::new(SqliteItemStore::open_in_memory().unwrap());

    repo.add("Milk").unwrap();
    repo.add("Eggs").unwrap();
    assert_eq!(repo.list().unwrap(), ["Milk", "Eggs"]);
    assert!(repo.exists("Milk").unwrap());

    repo.remove("Milk").unwrap();
    assert_eq!(repo.list().unwrap(), ["Eggs"]);

    repo.clear().unwrap();
    assert!(repo.list().unwrap().is_empty());
}
