use frontdesk::models::Company;
use frontdesk::storage::log::load_log;
use frontdesk::storage::migrate::run_pending_migrations;
use frontdesk::storage::{KvStorage, SqliteStorage};
use frontdesk::store::{Record, Store, load_snapshot};

mod common;
use common::setup_test_db;

#[test]
fn test_set_item_overwrites() {
    let mut storage = SqliteStorage::open_in_memory().unwrap();

    assert_eq!(storage.get_item("k").unwrap(), None);
    storage.set_item("k", "one").unwrap();
    storage.set_item("k", "two").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("two"));
    assert_eq!(storage.keys().unwrap(), vec!["k"]);
}

#[test]
fn test_migrations_are_idempotent() {
    let storage = SqliteStorage::open_in_memory().unwrap();
    run_pending_migrations(&storage.conn).unwrap();
    run_pending_migrations(&storage.conn).unwrap();

    let applied = load_log(&storage.conn)
        .unwrap()
        .into_iter()
        .filter(|r| r.operation == "migration_applied")
        .count();
    assert_eq!(applied, 1);
}

#[test]
fn test_values_survive_reopen() {
    let db_path = setup_test_db("storage_reopen");

    {
        let mut storage = SqliteStorage::open(&db_path).unwrap();
        storage
            .set_item(
                Company::STORAGE_KEY,
                r#"[{"id":"1","name":"ABC Corp","floor":"12","room":"1201","hotline":"","contactPerson":"Lan"}]"#,
            )
            .unwrap();
    }

    let storage = SqliteStorage::open(&db_path).unwrap();
    let list = load_snapshot::<Company, _>(&storage).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].contact_person, "Lan");
}

#[test]
fn test_corrupt_value_is_logged_in_log_table() {
    let mut storage = SqliteStorage::open_in_memory().unwrap();
    storage.set_item(Company::STORAGE_KEY, "not json").unwrap();
    let before = load_log(&storage.conn).unwrap().len();

    // reads alone leave the log untouched
    for _ in 0..20 {
        assert!(load_snapshot::<Company, _>(&storage).unwrap().is_empty());
    }
    assert_eq!(load_log(&storage.conn).unwrap().len(), before);

    {
        let mut store = Store::<Company, _>::open(&mut storage).unwrap();
        store
            .append(Company {
                id: "1".to_string(),
                name: "ABC Corp".to_string(),
                floor: "12".to_string(),
                room: String::new(),
                hotline: String::new(),
                contact_person: String::new(),
            })
            .unwrap();
    }

    let rows = load_log(&storage.conn).unwrap();
    assert_eq!(rows.len(), before + 1);
    let last = rows.last().unwrap();
    assert_eq!(last.operation, "load");
    assert_eq!(last.target, Company::STORAGE_KEY);
    assert!(last.message.contains("replaced by the new list"));
}
