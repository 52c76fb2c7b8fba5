use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::tree::builder::{build_from_index, list_files};
use std::io::Write;

impl Repository {
    /// Record the index as a new commit on top of HEAD
    ///
    /// Returns `None`, creating nothing, when the index is empty or its tree
    /// equals the parent's. After a commit the index holds exactly the new
    /// commit's files.
    pub fn commit(&self, message: &str, author: Author) -> anyhow::Result<Option<ObjectId>> {
        let mut index = self.load_index();

        if index.is_empty() {
            writeln!(self.writer(), "nothing to commit")?;
            return Ok(None);
        }

        let tree_oid = build_from_index(self.database(), index.entries())?;
        let parent = self.refs().head_commit()?;

        if let Some(parent) = &parent {
            let parent_commit = self.database().load_commit(parent)?;
            if parent_commit.tree_oid() == &tree_oid {
                writeln!(self.writer(), "nothing to commit, working tree clean")?;
                return Ok(None);
            }
        }

        let is_root = parent.is_none();
        let commit = Commit::new(
            parent.into_iter().collect(),
            tree_oid.clone(),
            author,
            message.to_string(),
        );
        let commit_oid = self.database().store(&commit)?;
        self.refs().update_head(&commit_oid)?;

        index.replace(list_files(self.database(), &tree_oid)?);
        index.save()?;

        let head = match self.refs().head()? {
            Head::Branch(name) => name.to_string(),
            Head::Detached(_) => String::from("detached HEAD"),
        };
        let root_marker = if is_root { " (root-commit)" } else { "" };

        tracing::info!(oid = %commit_oid, tree = %tree_oid, "created commit");
        writeln!(
            self.writer(),
            "[{}{} {}] {}",
            head,
            root_marker,
            commit_oid.to_short_oid(),
            commit.short_message()
        )?;

        Ok(Some(commit_oid))
    }
}
