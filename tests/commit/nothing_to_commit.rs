use crate::common::command::{grit_commit, init_repository_dir, repository_dir, run_grit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn committing_an_empty_index_creates_nothing(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_grit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    grit_commit(repository_dir.path(), "empty")
        .assert()
        .success()
        .stdout("nothing to commit\n");

    assert!(
        !repository_dir
            .path()
            .join(".grit/refs/heads/master")
            .exists()
    );

    Ok(())
}

#[rstest]
fn committing_right_after_a_commit_creates_nothing(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    grit_commit(init_repository_dir.path(), "again")
        .assert()
        .success()
        .stdout("nothing to commit, working tree clean\n");

    Ok(())
}

#[rstest]
fn committing_without_an_author_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(init_repository_dir.path().join("new.txt"), "new")?;
    run_grit_command(init_repository_dir.path(), &["add", "new.txt"])
        .assert()
        .success();

    run_grit_command(init_repository_dir.path(), &["commit", "-m", "anonymous"])
        .env_remove("GRIT_AUTHOR_NAME")
        .env_remove("GRIT_AUTHOR_EMAIL")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("GRIT_AUTHOR_NAME not set"));

    Ok(())
}
