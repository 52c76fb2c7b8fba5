use crate::common::command::{grit_stdout, repository_dir, run_grit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn adding_a_non_existent_file_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_grit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("present.txt"),
        "here".to_string(),
    ));

    run_grit_command(repository_dir.path(), &["add", "missing.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: pathspec"))
        .stderr(predicate::str::contains("missing.txt"))
        .stderr(predicate::str::contains("did not match any files"));

    // nothing was staged
    let status = grit_stdout(repository_dir.path(), &["status", "--porcelain"]);
    assert_eq!(status, "?? present.txt\n");

    Ok(())
}

#[rstest]
fn adding_a_path_outside_the_repository_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let project = repository_dir.path().join("project");
    std::fs::create_dir_all(&project)?;
    write_file(FileSpec::new(
        repository_dir.path().join("outside.txt"),
        "out".to_string(),
    ));

    run_grit_command(&project, &["init"]).assert().success();

    run_grit_command(&project, &["add", "../outside.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the repository"));

    Ok(())
}
