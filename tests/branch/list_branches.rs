use crate::common::command::{grit_stdout, init_repository_dir, run_grit_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_branches(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    for name in ["zeta", "alpha", "feature/nested"] {
        run_grit_command(dir, &["branch", name]).assert().success();
    }

    let stdout = grit_stdout(dir, &["branch"]);
    assert_eq!(
        stdout,
        "  alpha\n  feature/nested\n* master\n  zeta\n"
    );

    run_grit_command(dir, &["checkout", "zeta"])
        .assert()
        .success();

    let stdout = grit_stdout(dir, &["branch"]);
    assert_eq!(
        stdout,
        "  alpha\n  feature/nested\n  master\n* zeta\n"
    );

    Ok(())
}
