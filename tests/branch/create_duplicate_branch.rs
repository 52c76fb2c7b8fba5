use crate::common::command::{init_repository_dir, run_grit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn create_duplicate_branch(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_grit_command(init_repository_dir.path(), &["branch", "feature"])
        .assert()
        .success();

    run_grit_command(init_repository_dir.path(), &["branch", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "a branch named 'feature' already exists",
        ));

    run_grit_command(init_repository_dir.path(), &["branch", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "a branch named 'master' already exists",
        ));

    Ok(())
}
