use crate::common::command::{init_repository_dir, run_grit_command};
use crate::common::file::{FileSpec, delete_path, read_file, write_file};
use crate::common::read_meta_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn modified_file_blocks_checkout(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_grit_command(dir, &["branch", "other"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("1.txt"), "edited".to_string()));

    run_grit_command(dir, &["checkout", "other"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "your local changes would be overwritten by checkout",
        ))
        .stderr(predicate::str::contains("\t1.txt"));

    assert_eq!(read_meta_file(dir, "HEAD"), "ref: refs/heads/master\n");
    assert_eq!(read_file(&dir.join("1.txt")), "edited");

    Ok(())
}

#[rstest]
fn deleted_file_blocks_checkout(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_grit_command(dir, &["branch", "other"])
        .assert()
        .success();

    delete_path(&dir.join("a").join("b").join("3.txt"));

    run_grit_command(dir, &["checkout", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\ta/b/3.txt"));

    assert_eq!(read_meta_file(dir, "HEAD"), "ref: refs/heads/master\n");

    Ok(())
}

#[rstest]
fn staged_but_uncommitted_file_blocks_checkout(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_grit_command(dir, &["branch", "other"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("staged.txt"), "staged".to_string()));
    run_grit_command(dir, &["add", "staged.txt"])
        .assert()
        .success();

    run_grit_command(dir, &["checkout", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\tstaged.txt"));

    assert_eq!(read_meta_file(dir, "HEAD"), "ref: refs/heads/master\n");
    assert_eq!(read_file(&dir.join("staged.txt")), "staged");

    Ok(())
}
