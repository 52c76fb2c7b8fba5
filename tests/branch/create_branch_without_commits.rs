use crate::common::command::{repository_dir, run_grit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn create_branch_without_commits(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_grit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_grit_command(repository_dir.path(), &["branch", "feature"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: no commits yet"));

    assert!(
        !repository_dir
            .path()
            .join(".grit/refs/heads/feature")
            .exists()
    );

    Ok(())
}
