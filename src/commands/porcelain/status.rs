use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::{IndexChangeType, WorkspaceChangeType};
use crate::artifacts::status::inspector::Inspector;
use crate::artifacts::status::status_info::WorkspaceStatus;
use colored::Colorize;
use std::collections::BTreeSet;
use std::io::Write;

// Terminology:
// - untracked files: files that are not tracked by the index
// - modified files: files that are tracked by the index but have changes in the workspace
// - deleted files: files that are tracked by the index but have been deleted from the workspace
impl Repository {
    /// Compare the working directory, index and HEAD
    pub fn workspace_status(&self) -> anyhow::Result<WorkspaceStatus> {
        let index = self.load_index();
        Inspector::new(self).inspect(&index)
    }

    pub fn is_dirty(&self) -> anyhow::Result<bool> {
        Ok(self.workspace_status()?.is_dirty())
    }

    pub fn status(&self, porcelain: bool) -> anyhow::Result<WorkspaceStatus> {
        let status = self.workspace_status()?;

        if porcelain {
            self.print_porcelain_status(&status)?;
        } else {
            self.print_long_status(&status)?;
        }

        Ok(status)
    }

    fn print_porcelain_status(&self, status: &WorkspaceStatus) -> anyhow::Result<()> {
        let changed = status
            .index_changes
            .keys()
            .chain(status.workspace_changes.keys())
            .collect::<BTreeSet<_>>();

        for path in changed {
            let index_change = status
                .index_changes
                .get(path)
                .copied()
                .unwrap_or(IndexChangeType::None);
            let workspace_change = status
                .workspace_changes
                .get(path)
                .copied()
                .unwrap_or(WorkspaceChangeType::None);

            let index_code: &str = (&index_change).into();
            let workspace_code: &str = (&workspace_change).into();
            writeln!(self.writer(), "{index_code}{workspace_code} {path}")?;
        }

        let untracked_code: &str = (&WorkspaceChangeType::Untracked).into();
        for path in &status.untracked {
            writeln!(self.writer(), "{untracked_code} {path}")?;
        }

        Ok(())
    }

    fn print_long_status(&self, status: &WorkspaceStatus) -> anyhow::Result<()> {
        match self.refs().head()? {
            Head::Branch(name) => writeln!(self.writer(), "On branch {name}")?,
            Head::Detached(oid) => {
                writeln!(self.writer(), "HEAD detached at {}", oid.to_short_oid())?
            }
        }

        if !status.index_changes.is_empty() {
            writeln!(self.writer(), "\nChanges to be committed:")?;
            for (path, change) in &status.index_changes {
                writeln!(self.writer(), "\t{change}{}", path.green())?;
            }
        }

        if !status.workspace_changes.is_empty() {
            writeln!(self.writer(), "\nChanges not staged for commit:")?;
            for (path, change) in &status.workspace_changes {
                writeln!(self.writer(), "\t{change}{}", path.red())?;
            }
        }

        if !status.untracked.is_empty() {
            writeln!(self.writer(), "\nUntracked files:")?;
            for path in &status.untracked {
                writeln!(self.writer(), "\t{}", path.red())?;
            }
        }

        if status.is_clean() {
            writeln!(self.writer(), "nothing to commit, working tree clean")?;
        } else if !status.is_dirty() {
            writeln!(self.writer(), "\nnothing added to commit but untracked files present")?;
        }

        Ok(())
    }
}
