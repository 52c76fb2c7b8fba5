use crate::common::command::{grit_stdout, init_repository_dir, run_grit_command};
use crate::common::file::{FileSpec, delete_path, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_changes_in_long_format(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    write_file(FileSpec::new(dir.join("new.txt"), "new".to_string()));
    run_grit_command(dir, &["add", "new.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("1.txt"), "changed".to_string()));
    delete_path(&dir.join("a").join("2.txt"));
    write_file(FileSpec::new(dir.join("scratch.md"), "notes".to_string()));

    let stdout = grit_stdout(dir, &["status"]);
    assert_eq!(
        stdout,
        "On branch master\n\
         \n\
         Changes to be committed:\n\
         \tnew file:   new.txt\n\
         \n\
         Changes not staged for commit:\n\
         \tmodified:   1.txt\n\
         \tdeleted:    a/2.txt\n\
         \n\
         Untracked files:\n\
         \tscratch.md\n"
    );

    Ok(())
}

#[rstest]
fn report_only_untracked_files_in_long_format(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("scratch.md"), "notes".to_string()));

    let stdout = grit_stdout(dir, &["status"]);
    assert_eq!(
        stdout,
        "On branch master\n\
         \n\
         Untracked files:\n\
         \tscratch.md\n\
         \n\
         nothing added to commit but untracked files present\n"
    );

    Ok(())
}
