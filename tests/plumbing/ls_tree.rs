use crate::common::command::{grit_stdout, init_repository_dir, repository_dir, run_grit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_all_blobs_from_head_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let expected_output = "100644 blob 43dd47ea691c90a5fa7827892c70241913351963\t1.txt\n\
         100644 blob 64c5e5885a4b06010b3a0c20edb7900dd0311025\ta/2.txt\n\
         100644 blob 1d19714ffbc272ba0da6eb419d66123c20527174\ta/b/3.txt\n";

    let actual_output = grit_stdout(init_repository_dir.path(), &["ls-tree", "-r", "HEAD"]);
    assert_eq!(actual_output, expected_output);

    // HEAD is the default revision
    let default_output = grit_stdout(init_repository_dir.path(), &["ls-tree", "-r"]);
    assert_eq!(default_output, expected_output);

    Ok(())
}

#[rstest]
fn list_a_tree_by_its_id(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = grit_stdout(
        init_repository_dir.path(),
        &["ls-tree", "d864f7793fd2952c217c27d3780442f8943c8663"],
    );
    assert_eq!(
        stdout,
        "100644 blob 1d19714ffbc272ba0da6eb419d66123c20527174\t3.txt\n"
    );

    Ok(())
}

#[rstest]
fn list_tree_without_commits_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_grit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_grit_command(repository_dir.path(), &["ls-tree", "HEAD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no commits yet"));

    Ok(())
}
