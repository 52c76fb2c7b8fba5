use crate::common::command::{
    AUTHOR_DATE, generate_random_author, get_head_commit_sha, grit_commit_as, grit_stdout,
    init_repository_dir, repository_dir, run_grit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn write_commit_object_successfully_for_nested_project(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_grit_command(dir, &["init"]).assert().success();

    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(dir.join("a").join("2.txt"), "two".to_string()));
    write_file(FileSpec::new(
        dir.join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));
    run_grit_command(dir, &["add", "."]).assert().success();

    let author = generate_random_author();
    grit_commit_as(dir, "Nested project\n\nWith a body.", &author)
        .assert()
        .success();

    let commit = grit_stdout(dir, &["cat-file", "-p", &get_head_commit_sha(dir)?]);
    let timestamp = chrono::DateTime::parse_from_str(AUTHOR_DATE, "%Y-%m-%d %H:%M:%S %z")?
        .timestamp();
    let identity = format!("{} <{}> {} +0000", author.name, author.email, timestamp);
    assert_eq!(
        commit,
        format!(
            "tree 88484bd9e7919fa9b7dfeb008fb8f6c85743d171\n\
             author {identity}\n\
             committer {identity}\n\
             \n\
             Nested project\n\nWith a body."
        )
    );

    let root = grit_stdout(dir, &["ls-tree", "HEAD"]);
    assert_eq!(
        root,
        "100644 blob 43dd47ea691c90a5fa7827892c70241913351963\t1.txt\n\
         040000 tree 202bc192d34beb85d0301ec8c8940cd0252cc48a\ta\n"
    );

    Ok(())
}

#[rstest]
fn author_flag_overrides_the_environment(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join("new.txt"), "new")?;
    run_grit_command(dir, &["add", "new.txt"]).assert().success();

    run_grit_command(
        dir,
        &["commit", "-m", "by flag", "--author", "Grace Hopper <grace@example.com>"],
    )
    .env("GRIT_AUTHOR_DATE", AUTHOR_DATE)
    .assert()
    .success();

    let commit = grit_stdout(dir, &["cat-file", "-p", &get_head_commit_sha(dir)?]);
    assert!(
        commit.contains("\nauthor Grace Hopper <grace@example.com> 1672574400 +0000\n"),
        "got:\n{commit}"
    );
    assert!(commit.contains("\nparent "), "got:\n{commit}");

    Ok(())
}
