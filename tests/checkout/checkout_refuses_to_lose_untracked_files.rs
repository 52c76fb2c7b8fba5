use crate::common::command::{grit_commit, init_repository_dir, run_grit_command};
use crate::common::file::{FileSpec, read_file, write_file};
use crate::common::read_meta_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn untracked_files_under_a_target_file_block_checkout(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_grit_command(dir, &["checkout", "-b", "feature"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("notes"), "feature notes".to_string()));
    run_grit_command(dir, &["add", "notes"])
        .assert()
        .success();
    grit_commit(dir, "Add notes").assert().success();

    run_grit_command(dir, &["checkout", "master"])
        .assert()
        .success();
    assert!(!dir.join("notes").exists());

    write_file(FileSpec::new(
        dir.join("notes").join("todo.txt"),
        "buy milk".to_string(),
    ));

    run_grit_command(dir, &["checkout", "feature"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Updating the following directories would lose untracked files in them:\n\tnotes",
        ));

    assert_eq!(read_meta_file(dir, "HEAD"), "ref: refs/heads/master\n");
    assert_eq!(read_file(&dir.join("notes").join("todo.txt")), "buy milk");

    Ok(())
}

#[rstest]
fn untracked_file_with_other_content_blocks_checkout(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_grit_command(dir, &["checkout", "-b", "feature"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("4.txt"), "four".to_string()));
    run_grit_command(dir, &["add", "4.txt"])
        .assert()
        .success();
    grit_commit(dir, "Add 4.txt").assert().success();

    run_grit_command(dir, &["checkout", "master"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("4.txt"), "my draft".to_string()));

    run_grit_command(dir, &["checkout", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "The following untracked working tree files would be overwritten by checkout:\n\t4.txt",
        ))
        .stderr(predicate::str::contains(
            "Please move or remove them before you switch branches.",
        ));

    assert_eq!(read_meta_file(dir, "HEAD"), "ref: refs/heads/master\n");
    assert_eq!(read_file(&dir.join("4.txt")), "my draft");

    Ok(())
}
