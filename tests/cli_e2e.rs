use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn addrbook(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("addrbook").unwrap();
    cmd.env("ADDRBOOK_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("ADDRBOOK_LOG");
    cmd
}

#[test]
fn add_then_find_across_processes() {
    let home = TempDir::new().unwrap();

    addrbook(&home)
        .args(["add", "Ann", "5551234567"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Ann with phone number 5551234567"));

    addrbook(&home)
        .args(["change", "Ann", "5550000000"])
        .assert()
        .success();

    addrbook(&home)
        .args(["phone", "Ann"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Phone number for Ann is 5551234567; 5550000000",
        ));

    assert!(home.path().join("address_book.json").exists());
}

#[test]
fn duplicate_add_is_reported_not_fatal() {
    let home = TempDir::new().unwrap();
    addrbook(&home).args(["add", "Ann", "5551234567"]).assert().success();

    addrbook(&home)
        .args(["add", "Ann", "5559999999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact Ann already exists"));
}

#[test]
fn invalid_phone_is_a_message() {
    let home = TempDir::new().unwrap();
    addrbook(&home)
        .args(["add", "Ann", "12-34"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid phone number format: 12-34"));

    assert!(!home.path().join("address_book.json").exists());
}

#[test]
fn explicit_file_flag() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("elsewhere").join("book.json");

    addrbook(&home)
        .arg("--file")
        .arg(&file)
        .args(["add", "Ann", "5551234567"])
        .assert()
        .success();

    assert!(file.exists());
    assert!(!home.path().join("address_book.json").exists());
}

#[test]
fn search_and_show() {
    let home = TempDir::new().unwrap();
    addrbook(&home).args(["add", "Ann Lee", "5551234567"]).assert().success();
    addrbook(&home).args(["add", "Bob", "5550000000"]).assert().success();

    addrbook(&home)
        .args(["search", "ann"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact name: Ann Lee, phones: 5551234567"))
        .stdout(predicate::str::contains("Bob").not());

    addrbook(&home)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact name: Ann Lee"))
        .stdout(predicate::str::contains("Contact name: Bob, phones: 5550000000"));
}

#[test]
fn interactive_shell_session() {
    let home = TempDir::new().unwrap();

    addrbook(&home)
        .write_stdin("hello\nadd Ann 5551234567\nphone Ann\nshow all\nfly\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Phone number for Ann is 5551234567"))
        .stdout(predicate::str::contains("Contact name: Ann, phones: 5551234567"))
        .stdout(predicate::str::contains("Unknown command"))
        .stdout(predicate::str::contains("Good bye!"));

    addrbook(&home)
        .args(["phone", "Ann"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5551234567"));
}

#[test]
fn corrupt_book_starts_empty_with_warning() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("address_book.json"), "{ truncated").unwrap();

    addrbook(&home)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("address book starts empty"))
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn config_disables_autosave_for_shell() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.json"),
        r#"{"autosave": false, "page_size": 2}"#,
    )
    .unwrap();

    addrbook(&home)
        .write_stdin("add A 1111111111\nadd B 2222222222\nadd C 3333333333\nshow all\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("-- page 2/2 --"));

    addrbook(&home)
        .args(["phone", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3333333333"));
}
