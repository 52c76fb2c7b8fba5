use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the metadata layout: object store, branch refs, HEAD on the
    /// default branch and an empty index
    ///
    /// Running it again keeps existing objects, refs and HEAD.
    pub fn init(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.objects_path())
            .context("Failed to create .grit/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .grit/refs/heads directory")?;

        if !self.refs().head_path().exists() {
            self.refs()
                .set_head_branch(&BranchName::default())
                .context("Failed to create initial HEAD reference")?;
        }

        let mut index = self.load_index();
        if !index.path().exists() {
            index.save().context("Failed to create .grit/index file")?;
        }

        tracing::info!(path = %self.path().display(), "initialized repository");
        writeln!(
            self.writer(),
            "Initialized empty grit repository in {}",
            self.meta_path().display()
        )?;

        Ok(())
    }
}
