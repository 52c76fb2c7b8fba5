use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::status::inspector::Inspector;
use crate::errors::RepoError;
use std::io::Write;

impl Repository {
    /// Switch the working directory, index and HEAD to branch `target`
    ///
    /// With `create`, the branch is first created at the HEAD commit. Nothing
    /// is touched when the working directory has uncommitted changes or when
    /// untracked files stand in the way of the target tree.
    pub fn checkout(&self, target: &str, create: bool) -> anyhow::Result<()> {
        let index = self.load_index();
        let status = Inspector::new(self).inspect(&index)?;
        if status.is_dirty() {
            return Err(RepoError::DirtyWorkingDirectory(status.dirty_paths()).into());
        }

        let current_head = self.refs().head()?;
        let current_commit = self.refs().head_commit()?;
        let current_tree = match &current_commit {
            Some(oid) => Some(self.database().load_commit(oid)?.tree_oid().clone()),
            None => None,
        };

        let target_branch = BranchName::try_parse(target.to_string())?;
        match (self.refs().branch_exists(&target_branch), create) {
            (true, true) => {
                return Err(RepoError::BranchAlreadyExists(target_branch.to_string()).into());
            }
            (false, true) => {
                let source_oid = current_commit.clone().ok_or(RepoError::NoCommitsYet)?;
                self.refs().create_branch(&target_branch, &source_oid)?;
            }
            (false, false) => {
                return Err(RepoError::BranchNotFound(target_branch.to_string()).into());
            }
            (true, false) => {}
        }

        let target_commit = self
            .refs()
            .branch_commit(&target_branch)?
            .ok_or_else(|| RepoError::BranchNotFound(target_branch.to_string()))?;
        let target_tree = self.database().load_commit(&target_commit)?.tree_oid().clone();

        let migration = Migration::new(self, current_tree.as_ref(), target_tree)?;
        let conflicts = migration.conflicts()?;
        if !conflicts.is_empty() {
            return Err(RepoError::CheckoutConflict(conflicts).into());
        }

        self.refs().set_head_branch(&target_branch)?;
        migration.apply()?;

        let mut index = index;
        index.replace(migration.into_target_files());
        index.save()?;

        tracing::info!(branch = %target_branch, oid = %target_commit, "switched branch");
        if current_head == Head::Branch(target_branch.clone()) {
            writeln!(self.writer(), "Already on '{target_branch}'")?;
        } else if create {
            writeln!(self.writer(), "Switched to a new branch '{target_branch}'")?;
        } else {
            writeln!(self.writer(), "Switched to branch '{target_branch}'")?;
        }

        Ok(())
    }
}
