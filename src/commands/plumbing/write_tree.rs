use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::tree::builder::build_from_index;
use std::io::Write;

impl Repository {
    /// Store the trees for the current index and print the root tree's ID
    pub fn write_tree(&self) -> anyhow::Result<ObjectId> {
        let index = self.load_index();
        let tree_oid = build_from_index(self.database(), index.entries())?;

        writeln!(self.writer(), "{}", tree_oid)?;

        Ok(tree_oid)
    }
}
