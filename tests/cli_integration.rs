use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn shelf(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.current_dir(dir)
        .env("SHELF_CONFIG_DIR", dir.join("config"))
        .env_remove("SHELF_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn add(dir: &Path, title: &str, author: &str, year: &str, read: bool) {
    let mut cmd = shelf(dir);
    cmd.args(["add", "--title", title, "--author", author, "--year", year]);
    if read {
        cmd.arg("--read");
    }
    cmd.assert().success();
}

#[test]
fn test_add_list_stats_remove_flow() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    shelf(dir)
        .args(["add", "--title", "Dune", "--author", "Herbert", "--year", "1965"])
        .args(["--genre", "Sci-Fi", "--read"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added successfully: Dune"));

    // Default file lands in the working directory
    let data_file = dir.join("library_data.json");
    let on_disk = fs::read_to_string(&data_file).unwrap();
    assert!(on_disk.contains("        \"title\": \"Dune\""));
    assert!(on_disk.contains("\"date_added\""));

    add(dir, "Emma", "Austen", "1815", false);

    shelf(dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune by Herbert"))
        .stdout(predicate::str::contains("Emma by Austen"));

    shelf(dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total books: 2"))
        .stdout(predicate::str::contains("Percentage read: 50.0%"));

    shelf(dir)
        .args(["rm", "DUNE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 book"));

    shelf(dir)
        .args(["list", "--full"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Emma"))
        .stdout(predicate::str::contains("Title: Dune").not());
}

#[test]
fn test_invalid_year_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    shelf(dir)
        .args(["add", "--title", "Old", "--year", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    shelf(dir)
        .args(["add", "--title", "Old", "--year", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid number"));

    assert!(!dir.join("library_data.json").exists());
}

#[test]
fn test_search_by_title_and_author() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    add(dir, "Dune", "Frank Herbert", "1965", true);
    add(dir, "The Hobbit", "J.R.R. Tolkien", "1937", false);

    shelf(dir)
        .args(["search", "hob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Hobbit"))
        .stdout(predicate::str::contains("Dune").not());

    shelf(dir)
        .args(["search", "--author", "HERBERT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune by Frank Herbert"));

    shelf(dir)
        .args(["search", "nothing", "here"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found"));
}

#[test]
fn test_remove_on_empty_library_does_not_create_file() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    shelf(dir)
        .args(["remove", "Dune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Library is empty!"));

    assert!(!dir.join("library_data.json").exists());
}

#[test]
fn test_corrupt_file_starts_empty_with_warning() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("library_data.json"), "{ definitely not books").unwrap();

    shelf(dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error loading library"))
        .stdout(predicate::str::contains("Library is empty!"));
}

#[test]
fn test_file_flag_and_env_choose_the_library() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    let custom = dir.join("shelves").join("mine.json");

    shelf(dir)
        .args(["add", "--title", "Dune", "--year", "1965"])
        .arg("--file")
        .arg(&custom)
        .assert()
        .success();
    assert!(custom.exists());
    assert!(!dir.join("library_data.json").exists());

    shelf(dir)
        .env("SHELF_FILE", &custom)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("mine.json"));
}

#[test]
fn test_config_data_file() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    shelf(dir)
        .args(["config", "data-file", "configured.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file set to configured.json"));

    add(dir, "Dune", "Herbert", "1965", true);
    assert!(dir.join("configured.json").exists());

    shelf(dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file = configured.json"));

    shelf(dir)
        .args(["config", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_interactive_session_over_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    shelf(dir)
        .write_stdin("1\nDune\nHerbert\n1965\nSci-Fi\ny\n4\n5\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Personal Library Manager ==="))
        .stdout(predicate::str::contains("Title: Dune"))
        .stdout(predicate::str::contains("Percentage read: 100.0%"))
        .stdout(predicate::str::contains("Library saved successfully!"));

    let on_disk = fs::read_to_string(dir.join("library_data.json")).unwrap();
    assert!(on_disk.contains("\"read\": true"));

    shelf(dir)
        .arg("shell")
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Library loaded successfully (1 book)."));
}
