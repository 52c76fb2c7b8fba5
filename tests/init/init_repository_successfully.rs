use crate::common::command::{repository_dir, run_grit_command};
use crate::common::read_meta_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_repository_in_current_directory(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir_absolute_path = repository_dir.path().canonicalize()?.display().to_string();

    run_grit_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty grit repository in .+\.grit\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    let meta = repository_dir.path().join(".grit");
    assert!(meta.join("objects").is_dir());
    assert!(meta.join("refs").join("heads").is_dir());
    assert!(meta.join("index").is_file());
    assert_eq!(
        read_meta_file(repository_dir.path(), "HEAD"),
        "ref: refs/heads/master\n"
    );

    Ok(())
}

#[rstest]
fn init_repository_at_given_path(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_grit_command(repository_dir.path(), &["init", "nested/project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized empty grit repository in"));

    assert!(
        repository_dir
            .path()
            .join("nested/project/.grit/objects")
            .is_dir()
    );

    Ok(())
}

#[rstest]
fn commands_outside_a_repository_fail(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_grit_command(repository_dir.path(), &["status"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: not a grit repository"));

    Ok(())
}
