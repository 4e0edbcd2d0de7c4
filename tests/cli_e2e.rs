use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;

fn shelf(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env("SHELF_HOME", home).env_remove("SHELF_LOG");
    cmd
}

fn stored(home: &Path) -> Vec<Value> {
    let raw = fs::read_to_string(home.join("BOOKSHELF_APPS.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn add(home: &Path, title: &str, author: &str, year: &str, complete: bool) -> i64 {
    let mut cmd = shelf(home);
    cmd.args(["add", "-a", author, "-y", year]);
    if complete {
        cmd.arg("--complete");
    }
    cmd.arg(title).assert().success();

    let books = stored(home);
    books.last().unwrap()["id"].as_i64().unwrap()
}

#[test]
fn add_then_complete_then_remove() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    shelf(home)
        .args(["add", "-a", "Frank Herbert", "-y", "1965", "Dune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added to to read"))
        .stdout(predicate::str::contains("To read (1)"))
        .stdout(predicate::str::contains("Frank Herbert, 1965"));

    let books = stored(home);
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "Dune");
    assert_eq!(books[0]["year"], "1965");
    assert_eq!(books[0]["isComplete"], false);
    let id = books[0]["id"].as_i64().unwrap().to_string();

    shelf(home)
        .args(["complete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked as read"))
        .stdout(predicate::str::contains("To read (0)"))
        .stdout(predicate::str::contains("Read (1)"));
    assert_eq!(stored(home)[0]["isComplete"], true);

    shelf(home)
        .args(["undo", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked as unread"));
    assert_eq!(stored(home)[0]["isComplete"], false);

    shelf(home)
        .args(["remove", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book removed"));
    assert!(stored(home).is_empty());
}

#[test]
fn multi_word_titles_are_joined() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    shelf(home)
        .args(["add", "-a", "Frank Herbert", "-y", "1969", "Dune", "Messiah"])
        .assert()
        .success();

    assert_eq!(stored(home)[0]["title"], "Dune Messiah");
}

#[test]
fn search_is_case_sensitive_substring() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    add(home, "Foundation", "Isaac Asimov", "1951", false);
    add(home, "Neuromancer", "William Gibson", "1984", true);

    shelf(home)
        .args(["search", "Fou"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Foundation"))
        .stdout(predicate::str::contains("Neuromancer").not());

    shelf(home)
        .args(["search", "fou"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No titles contain \"fou\""))
        .stdout(predicate::str::contains("Foundation").not());

    shelf(home)
        .arg("search")
        .assert()
        .success()
        .stdout(predicate::str::contains("Foundation"))
        .stdout(predicate::str::contains("Neuromancer"));
}

#[test]
fn search_does_not_touch_storage() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    add(home, "Foundation", "Isaac Asimov", "1951", false);
    let before = fs::read_to_string(home.join("BOOKSHELF_APPS.json")).unwrap();

    shelf(home).args(["search", "Fou"]).assert().success();

    let after = fs::read_to_string(home.join("BOOKSHELF_APPS.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn naked_invocation_lists_an_empty_shelf() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    shelf(home)
        .assert()
        .success()
        .stdout(predicate::str::contains("To read (0)"))
        .stdout(predicate::str::contains("Read (0)"));

    assert!(!home.join("BOOKSHELF_APPS.json").exists());
}

#[test]
fn unknown_id_is_a_quiet_no_op() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    let id = add(home, "Dune", "Frank Herbert", "1965", false);
    let before = fs::read_to_string(home.join("BOOKSHELF_APPS.json")).unwrap();

    let missing = (id + 1000).to_string();
    shelf(home)
        .args(["complete", &missing])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("No book with id {}", missing)));
    shelf(home).args(["remove", &missing]).assert().success();

    let after = fs::read_to_string(home.join("BOOKSHELF_APPS.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn invalid_id_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .args(["complete", "dune"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid book id: dune"));
}

#[test]
fn blank_fields_are_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    shelf(home)
        .args(["add", "-a", " ", "-y", "1965", "Dune"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Author cannot be empty"));

    assert!(!home.join("BOOKSHELF_APPS.json").exists());
}

#[test]
fn numeric_years_in_existing_data_are_kept() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    fs::write(
        home.join("BOOKSHELF_APPS.json"),
        r#"[{"id":1,"title":"Dune","author":"Frank Herbert","year":1965,"isComplete":false}]"#,
    )
    .unwrap();

    shelf(home)
        .args(["complete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Frank Herbert, 1965"));

    let books = stored(home);
    assert_eq!(books[0]["year"], 1965);
    assert_eq!(books[0]["isComplete"], true);
}

#[test]
fn corrupt_data_fails_by_default() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    fs::write(home.join("BOOKSHELF_APPS.json"), "{not json").unwrap();

    shelf(home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));

    // The bad data is left alone for the user to inspect
    let raw = fs::read_to_string(home.join("BOOKSHELF_APPS.json")).unwrap();
    assert_eq!(raw, "{not json");
}

#[test]
fn corrupt_data_can_be_discarded() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    fs::write(home.join("BOOKSHELF_APPS.json"), "{not json").unwrap();

    shelf(home)
        .args(["config", "on-corrupt", "discard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("on-corrupt set to discard"));

    shelf(home)
        .args(["add", "-a", "Frank Herbert", "-y", "1965", "Dune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been discarded"));

    assert_eq!(stored(home).len(), 1);
}

#[test]
fn storage_key_is_configurable() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    shelf(home)
        .args(["config", "storage-key", "MY_BOOKS"])
        .assert()
        .success();
    shelf(home)
        .args(["add", "-a", "Frank Herbert", "-y", "1965", "Dune"])
        .assert()
        .success();

    assert!(home.join("MY_BOOKS.json").exists());
    assert!(!home.join("BOOKSHELF_APPS.json").exists());
}

#[test]
fn config_shows_all_values() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("storage-key = BOOKSHELF_APPS"))
        .stdout(predicate::str::contains("on-corrupt = fail"));
}

#[test]
fn init_creates_the_data_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path().join("nested").join("shelf");

    shelf(&home).arg("init").assert().success();

    assert!(home.is_dir());
}

#[test]
fn help_lists_command_groups() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Core Commands:"))
        .stdout(predicate::str::contains("SHELF_HOME"));
}

#[test]
fn unusable_storage_keys_are_refused() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    for key in ["a..b", "config"] {
        shelf(home)
            .args(["config", "storage-key", key])
            .assert()
            .success()
            .stdout(predicate::str::contains("Invalid storage key"));
    }

    shelf(home)
        .args(["config", "on-corrupt", "discard"])
        .assert()
        .success();
    shelf(home)
        .args(["add", "-a", "Frank Herbert", "-y", "1965", "Dune"])
        .assert()
        .success();

    assert_eq!(stored(home).len(), 1);
    let config: Value =
        serde_json::from_str(&fs::read_to_string(home.join("config.json")).unwrap()).unwrap();
    assert_eq!(config["storage-key"], "BOOKSHELF_APPS");
    assert_eq!(config["on-corrupt"], "discard");
}
