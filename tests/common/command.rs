use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

pub fn run_jot_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("jot").expect("Failed to find jot binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Save a snapshot by piping the text through stdin
pub fn jot_save(dir: &Path, text: &str) -> Command {
    let mut cmd = run_jot_command(dir, &["save"]);
    cmd.write_stdin(text.to_string());
    cmd
}

/// Id of the version entry at `index` in insertion order
pub fn version_id_at(dir: &Path, index: usize) -> String {
    let versions = super::read_versions_json(dir);
    versions[index]["id"]
        .as_str()
        .expect("version id is not a string")
        .to_string()
}
