use addrbook::model::Record;
use addrbook::store::{AddressBook, LoadReport};
use std::fs;
use tempfile::TempDir;

fn populated() -> AddressBook {
    let mut book = AddressBook::new();

    let mut ann = Record::new("Ann Lee", Some("1990-01-10")).unwrap();
    ann.add_phone("5551234567").unwrap();
    ann.add_phone("5557654321").unwrap();
    book.add_record(ann);

    let mut bob = Record::new("Bob", None).unwrap();
    bob.add_phone("5550000000").unwrap();
    book.add_record(bob);

    book.add_record(Record::new("Carol", Some("2000-02-29")).unwrap());
    book
}

#[test]
fn save_then_load_reproduces_every_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("address_book.json");
    let original = populated();
    original.save(&path).unwrap();

    let mut fresh = AddressBook::new();
    assert_eq!(fresh.load(&path).unwrap(), LoadReport::Loaded(3));

    for record in original.records() {
        let loaded = fresh.find(record.name().as_str()).unwrap();
        assert_eq!(loaded.phones(), record.phones());
        assert_eq!(loaded.birthday(), record.birthday());
    }
    assert_eq!(fresh, original);
}

#[test]
fn save_overwrites_previous_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("address_book.json");
    populated().save(&path).unwrap();

    let mut smaller = AddressBook::new();
    smaller.add_record(Record::new("Dan", None).unwrap());
    smaller.save(&path).unwrap();

    let mut reloaded = AddressBook::new();
    reloaded.load(&path).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert!(reloaded.contains("Dan"));
}

#[test]
fn load_nonexistent_path_is_empty_not_error() {
    let dir = TempDir::new().unwrap();
    let mut book = AddressBook::new();

    let report = book.load(&dir.path().join("never-written.json")).unwrap();
    assert_eq!(report, LoadReport::Missing);
    assert!(book.is_empty());
}

#[test]
fn load_replaces_in_memory_state() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("address_book.json");
    let mut only_bob = AddressBook::new();
    only_bob.add_record(Record::new("Bob", None).unwrap());
    only_bob.save(&path).unwrap();

    let mut book = populated();
    book.load(&path).unwrap();
    assert_eq!(book, only_bob);
}

#[test]
fn corrupt_file_is_kept_aside_and_not_overwritten() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("address_book.json");
    fs::write(&path, b"\x80\x04\x95 pickled bytes").unwrap();

    let mut book = AddressBook::new();
    let backup = match book.load(&path).unwrap() {
        LoadReport::Recovered { backup, .. } => backup,
        other => panic!("unexpected report: {:?}", other),
    };
    assert!(book.is_empty());

    book.add_record(Record::new("Ann", None).unwrap());
    book.save(&path).unwrap();

    assert_eq!(fs::read(&backup).unwrap(), b"\x80\x04\x95 pickled bytes");
}

#[test]
fn stored_file_is_readable_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("address_book.json");
    populated().save(&path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["Ann Lee"]["phones"][1], "5557654321");
    assert_eq!(value["Ann Lee"]["birthday"], "1990-01-10");
    assert!(value["Bob"]["birthday"].is_null());
}
