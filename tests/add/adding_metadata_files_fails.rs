use crate::common::command::{init_repository_dir, run_grit_command};
use crate::common::read_meta_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_metadata_files_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_grit_command(dir, &["add", ".grit/HEAD"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "invalid path '.grit/HEAD': inside the repository metadata directory",
        ));

    run_grit_command(dir, &["add", ".grit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("inside the repository metadata directory"));

    // the index still matches HEAD, so branches can be switched
    run_grit_command(dir, &["status", "--porcelain"])
        .assert()
        .success()
        .stdout("");
    run_grit_command(dir, &["checkout", "-b", "other"])
        .assert()
        .success();
    assert_eq!(read_meta_file(dir, "HEAD"), "ref: refs/heads/other\n");

    Ok(())
}
