use crate::areas::refs::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepoError;
use std::io::Write;

impl Repository {
    /// List a tree, given its ID, a commit ID or `HEAD`
    ///
    /// With `recursive`, subtrees are expanded and only files are listed.
    pub fn ls_tree(&self, revision: &str, recursive: bool) -> anyhow::Result<()> {
        let oid = if revision == HEAD_REF_NAME {
            self.refs().head_commit()?.ok_or(RepoError::NoCommitsYet)?
        } else {
            ObjectId::try_parse(revision.to_string())?
        };

        let tree_oid = match self.database().load(&oid)? {
            ObjectBox::Commit(commit) => commit.tree_oid().clone(),
            ObjectBox::Tree(_) => oid,
            ObjectBox::Blob(_) => anyhow::bail!("object {} is not a tree", oid),
        };

        self.print_tree(&tree_oid, "", recursive)
    }

    fn print_tree(&self, oid: &ObjectId, prefix: &str, recursive: bool) -> anyhow::Result<()> {
        let tree = self.database().load_tree(oid)?;

        for entry in tree.entries() {
            let path = if prefix.is_empty() {
                entry.name.clone()
            } else {
                format!("{prefix}/{}", entry.name)
            };

            if entry.is_tree() && recursive {
                self.print_tree(&entry.oid, &path, recursive)?;
                continue;
            }

            let object_type = if entry.is_tree() {
                ObjectType::Tree
            } else {
                ObjectType::Blob
            };
            writeln!(
                self.writer(),
                "{:0>6} {} {}\t{}",
                entry.mode.as_str(),
                object_type,
                entry.oid,
                path
            )?;
        }

        Ok(())
    }
}
