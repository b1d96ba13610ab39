use frontdesk::models::{Company, Visitor, VisitorStatus};
use frontdesk::storage::{KvStorage, MemoryStorage};
use frontdesk::store::{Record, Store, load_snapshot};

fn company(id: &str, name: &str, floor: &str) -> Company {
    Company {
        id: id.to_string(),
        name: name.to_string(),
        floor: floor.to_string(),
        room: String::new(),
        hotline: String::new(),
        contact_person: String::new(),
    }
}

fn visitor(id: &str, name: &str) -> Visitor {
    Visitor {
        id: id.to_string(),
        name: name.to_string(),
        company: String::new(),
        host: "Mr. B".to_string(),
        floor: "5".to_string(),
        purpose: String::new(),
        check_in_time: "09:00 16/10/2026".to_string(),
        check_out_time: None,
        status: VisitorStatus::Active,
    }
}

#[test]
fn test_load_absent_key_is_empty() {
    let mut storage = MemoryStorage::new();
    let store = Store::<Company, _>::open(&mut storage).unwrap();
    assert!(store.items().is_empty());
}

#[test]
fn test_append_prepends_and_keeps_order() {
    let mut storage = MemoryStorage::new();
    let mut store = Store::<Company, _>::open(&mut storage).unwrap();

    store.append(company("1", "A", "1")).unwrap();
    store.append(company("2", "B", "2")).unwrap();
    store.append(company("3", "C", "3")).unwrap();

    let ids: Vec<&str> = store.items().iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["3", "2", "1"]);

    // the persisted list matches the mirror
    let persisted = load_snapshot::<Company, _>(&storage).unwrap();
    let ids: Vec<&str> = persisted.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "2", "1"]);
}

#[test]
fn test_save_then_load_round_trips() {
    let mut storage = MemoryStorage::new();
    let list = vec![
        company("10", "ABC Corp", "12"),
        company("11", "Công ty Bình Minh", "3A"),
    ];

    let mut store = Store::<Company, _>::open(&mut storage).unwrap();
    store.save(list.clone()).unwrap();
    assert_eq!(store.load().unwrap(), list.as_slice());
}

#[test]
fn test_remove_drops_only_matching_id() {
    let mut storage = MemoryStorage::new();
    let mut store = Store::<Company, _>::open(&mut storage).unwrap();
    store
        .save(vec![
            company("1", "A", "1"),
            company("2", "B", "2"),
            company("3", "C", "3"),
        ])
        .unwrap();

    assert!(store.remove("2").unwrap());

    let ids: Vec<&str> = store.items().iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut storage = MemoryStorage::new();
    let mut store = Store::<Company, _>::open(&mut storage).unwrap();
    store.save(vec![company("1", "A", "1")]).unwrap();

    assert!(!store.remove("nope").unwrap());
    assert_eq!(store.items().len(), 1);
}

#[test]
fn test_update_touches_only_matching_record() {
    let mut storage = MemoryStorage::new();
    let mut store = Store::<Visitor, _>::open(&mut storage).unwrap();
    store
        .save(vec![visitor("1", "Alice"), visitor("2", "Bob")])
        .unwrap();

    let at = chrono::NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_opt(17, 45, 0)
        .unwrap();
    assert!(store.update("2", |v| v.check_out(at)).unwrap());

    let bob = store.find("2").unwrap();
    assert_eq!(bob.status, VisitorStatus::Completed);
    assert_eq!(bob.check_out_time.as_deref(), Some("17:45 16/10/2026"));
    assert_eq!(bob.check_in_time, "09:00 16/10/2026");

    assert_eq!(store.find("1").unwrap(), &visitor("1", "Alice"));
}

#[test]
fn test_update_unknown_id_does_not_write() {
    let mut storage = MemoryStorage::new();
    {
        let mut store = Store::<Visitor, _>::open(&mut storage).unwrap();
        assert!(!store.update("missing", |v| v).unwrap());
    }
    assert_eq!(storage.get_item(Visitor::STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_corrupt_data_loads_as_empty_and_is_logged_on_overwrite() {
    let mut storage = MemoryStorage::new();
    storage
        .set_item(Company::STORAGE_KEY, "{not json at all")
        .unwrap();

    let mut store = Store::<Company, _>::open(&mut storage).unwrap();
    assert!(store.items().is_empty());
    store.load().unwrap();
    store.append(company("1", "A", "1")).unwrap();
    store.append(company("2", "B", "2")).unwrap();
    drop(store);

    let lines = storage.log_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].operation, "load");
    assert_eq!(lines[0].target, Company::STORAGE_KEY);
    assert!(lines[0].message.contains("replaced by the new list"));
}

#[test]
fn test_repeated_reads_of_corrupt_data_do_not_log() {
    let mut storage = MemoryStorage::new();
    storage.set_item(Visitor::STORAGE_KEY, "[[[").unwrap();
    storage.set_item(Company::STORAGE_KEY, "{oops").unwrap();

    for _ in 0..50 {
        assert!(load_snapshot::<Visitor, _>(&storage).unwrap().is_empty());
        assert!(load_snapshot::<Company, _>(&storage).unwrap().is_empty());
    }
    {
        let store = Store::<Company, _>::open(&mut storage).unwrap();
        assert!(store.items().is_empty());
    }

    assert!(storage.log_lines().is_empty());
}

#[test]
fn test_wrong_shape_loads_as_empty() {
    let mut storage = MemoryStorage::new();
    // valid JSON, but not a list of visitors
    storage.set_item(Visitor::STORAGE_KEY, "{\"id\":\"1\"}").unwrap();
    storage.set_item(Company::STORAGE_KEY, "null").unwrap();

    assert!(load_snapshot::<Visitor, _>(&storage).unwrap().is_empty());
    assert!(load_snapshot::<Company, _>(&storage).unwrap().is_empty());
}

#[test]
fn test_corrupt_store_is_replaced_on_next_write() {
    let mut storage = MemoryStorage::new();
    storage.set_item(Company::STORAGE_KEY, "[[[").unwrap();

    let mut store = Store::<Company, _>::open(&mut storage).unwrap();
    store.append(company("1", "Fresh", "2")).unwrap();
    drop(store);

    let list = load_snapshot::<Company, _>(&storage).unwrap();
    assert_eq!(list, vec![company("1", "Fresh", "2")]);
}

#[test]
fn test_reads_browser_format() {
    let mut storage = MemoryStorage::new();
    storage
        .set_item(
            Visitor::STORAGE_KEY,
            r#"[{"id":"1760600000000","name":"Nguyễn Văn A","host":"Mr. B","floor":"5","purpose":"Họp","checkInTime":"09:15 16/10/2026","status":"active"}]"#,
        )
        .unwrap();

    let list = load_snapshot::<Visitor, _>(&storage).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].company, "");
    assert_eq!(list[0].check_in_time, "09:15 16/10/2026");
    assert_eq!(list[0].check_out_time, None);
}

#[test]
fn test_writes_camel_case_keys() {
    let mut storage = MemoryStorage::new();
    let mut store = Store::<Company, _>::open(&mut storage).unwrap();
    let mut c = company("7", "ABC Corp", "12");
    c.contact_person = "Ms. Lan".to_string();
    store.append(c).unwrap();
    drop(store);

    let raw = storage.get_item(Company::STORAGE_KEY).unwrap().unwrap();
    assert!(raw.contains("\"contactPerson\":\"Ms. Lan\""));
    assert!(!raw.contains("contact_person"));
}

#[test]
fn test_next_id_never_collides() {
    let mut storage = MemoryStorage::new();
    let mut store = Store::<Company, _>::open(&mut storage).unwrap();

    let now_ms = 1_760_600_000_000;
    let first = store.next_id(now_ms);
    assert_eq!(first, now_ms.to_string());
    store.append(company(&first, "A", "1")).unwrap();

    // same millisecond
    let second = store.next_id(now_ms);
    assert_ne!(first, second);
    assert_eq!(second, (now_ms + 1).to_string());
    store.append(company(&second, "B", "1")).unwrap();

    // clock went backwards
    let third = store.next_id(now_ms - 5_000);
    assert_eq!(third, (now_ms + 2).to_string());
}

#[test]
fn test_next_id_when_max_id_is_taken() {
    let mut storage = MemoryStorage::new();
    let mut store = Store::<Company, _>::open(&mut storage).unwrap();
    let max = i64::MAX.to_string();
    store.append(company(&max, "A", "1")).unwrap();

    let now_ms = 1_760_600_000_000;
    let id = store.next_id(now_ms);
    assert_ne!(id, max);
    assert_eq!(id, now_ms.to_string());
    store.append(company(&id, "B", "1")).unwrap();

    // the fallback still skips ids in use
    let again = store.next_id(now_ms);
    assert_ne!(again, max);
    assert_ne!(again, id);
    assert_eq!(again, (now_ms + 1).to_string());
}
