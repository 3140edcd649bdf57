use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

use common::command::{init_repository_dir, jot_save, run_jot_command, version_id_at};

#[rstest]
fn show_displays_a_version_by_full_id(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    jot_save(init_repository_dir.path(), "shown words")
        .assert()
        .success();

    let id = version_id_at(init_repository_dir.path(), 0);

    run_jot_command(init_repository_dir.path(), &["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("version {}", id)))
        .stdout(predicate::str::contains("+shown"))
        .stdout(predicate::str::contains("+words"));

    Ok(())
}

#[rstest]
fn show_accepts_a_unique_id_prefix(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    jot_save(init_repository_dir.path(), "prefixed")
        .assert()
        .success();

    let short_id = version_id_at(init_repository_dir.path(), 0)
        .chars()
        .take(8)
        .collect::<String>();

    run_jot_command(init_repository_dir.path(), &["show", &short_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("+prefixed"));

    Ok(())
}

#[rstest]
fn show_fails_for_an_unknown_id(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_jot_command(init_repository_dir.path(), &["show", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("version deadbeef not found"));

    Ok(())
}

#[rstest]
fn current_prints_the_saved_text(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    jot_save(init_repository_dir.path(), "line one\nline two")
        .assert()
        .success();

    run_jot_command(init_repository_dir.path(), &["current"])
        .assert()
        .success()
        .stdout("line one\nline two\n");

    Ok(())
}

#[rstest]
fn current_prints_nothing_before_the_first_save(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_jot_command(init_repository_dir.path(), &["current"])
        .assert()
        .success()
        .stdout("");

    Ok(())
}
