use crate::common::command::{grit_stdout, repository_dir, run_grit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_untracked_files_in_name_order(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_grit_command(dir, &["init"]).assert().success();

    for name in ["file.txt", "another.txt", "dir/nested.txt", "zz/deep/x.txt"] {
        write_file(FileSpec::new(dir.join(name), "content".to_string()));
    }
    std::fs::create_dir_all(dir.join("empty"))?;

    let stdout = grit_stdout(dir, &["status", "--porcelain"]);
    assert_eq!(
        stdout,
        "?? another.txt\n?? dir/nested.txt\n?? file.txt\n?? zz/deep/x.txt\n"
    );

    Ok(())
}
