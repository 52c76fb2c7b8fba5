use crate::common::command::{get_head_commit_sha, init_repository_dir, run_grit_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("feature")]
#[case("feature/login")]
#[case("release-1.0")]
#[case("fix_123")]
fn create_branch_with_valid_name(
    init_repository_dir: TempDir,
    #[case] name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let head = get_head_commit_sha(init_repository_dir.path())?;

    run_grit_command(init_repository_dir.path(), &["branch", name])
        .assert()
        .success();

    let branch_ref = init_repository_dir
        .path()
        .join(".grit/refs/heads")
        .join(name);
    assert_eq!(std::fs::read_to_string(branch_ref)?, format!("{head}\n"));

    // HEAD stays on the current branch
    assert_eq!(
        std::fs::read_to_string(init_repository_dir.path().join(".grit/HEAD"))?,
        "ref: refs/heads/master\n"
    );

    Ok(())
}
