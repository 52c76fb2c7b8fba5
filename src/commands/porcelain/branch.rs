use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepoError;
use std::io::Write;

impl Repository {
    /// Create a branch pointing at the HEAD commit
    pub fn branch(&self, name: &str) -> anyhow::Result<ObjectId> {
        let branch_name = BranchName::try_parse(name.to_string())?;
        let source_oid = self.refs().head_commit()?.ok_or(RepoError::NoCommitsYet)?;

        self.refs().create_branch(&branch_name, &source_oid)?;
        tracing::info!(branch = %branch_name, oid = %source_oid, "created branch");

        Ok(source_oid)
    }

    /// Print every branch, marking the current one
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let current = match self.refs().head()? {
            Head::Branch(name) => Some(name),
            Head::Detached(_) => None,
        };
        let branches = self.refs().list_branches()?;

        for branch in &branches {
            let marker = if Some(branch) == current.as_ref() { "*" } else { " " };
            writeln!(self.writer(), "{marker} {branch}")?;
        }

        Ok(branches)
    }
}
