use crate::common::command::{grit_stdout, init_repository_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_nothing_when_no_files_are_changed(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = grit_stdout(init_repository_dir.path(), &["status", "--porcelain"]);
    assert_eq!(stdout, "");

    let stdout = grit_stdout(init_repository_dir.path(), &["status"]);
    assert_eq!(stdout, "On branch master\nnothing to commit, working tree clean\n");

    Ok(())
}

#[rstest]
fn rewriting_a_file_with_the_same_content_is_not_a_change(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(init_repository_dir.path().join("1.txt"), "one")?;

    let stdout = grit_stdout(init_repository_dir.path(), &["status", "--porcelain"]);
    assert_eq!(stdout, "");

    Ok(())
}
