use crate::common::command::{grit_stdout, repository_dir, run_grit_command};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_files_from_nested_directories_to_index_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_grit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    let stdout = grit_stdout(repository_dir.path(), &["add", "."]);
    assert_eq!(stdout, "add '1.txt'\nadd 'a/2.txt'\nadd 'a/b/3.txt'\n");

    let status = grit_stdout(repository_dir.path(), &["status", "--porcelain"]);
    assert_eq!(status, "A  1.txt\nA  a/2.txt\nA  a/b/3.txt\n");

    // the index stages the same tree regardless of how the files were added
    let tree = grit_stdout(repository_dir.path(), &["write-tree"]);
    assert_eq!(tree, "88484bd9e7919fa9b7dfeb008fb8f6c85743d171\n");

    Ok(())
}

#[rstest]
fn add_single_files_incrementally(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_grit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let files = write_generated_files(repository_dir.path(), 3);
    let mut names = files
        .iter()
        .map(|file| {
            file.path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>();

    for name in &names {
        run_grit_command(repository_dir.path(), &["add", name])
            .assert()
            .success();
    }

    // re-adding an unchanged file stages nothing
    let stdout = grit_stdout(repository_dir.path(), &["add", &names[0]]);
    assert_eq!(stdout, "");

    names.sort();
    let expected = names
        .iter()
        .map(|name| format!("A  {name}\n"))
        .collect::<String>();
    let status = grit_stdout(repository_dir.path(), &["status", "--porcelain"]);
    assert_eq!(status, expected);

    Ok(())
}

#[rstest]
fn add_from_a_subdirectory_uses_paths_relative_to_it(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_grit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));

    let stdout = grit_stdout(&repository_dir.path().join("a"), &["add", "2.txt"]);
    assert_eq!(stdout, "add 'a/2.txt'\n");

    let status = grit_stdout(repository_dir.path(), &["status", "--porcelain"]);
    assert_eq!(status, "A  a/2.txt\n?? 1.txt\n");

    Ok(())
}
