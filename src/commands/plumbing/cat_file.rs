use crate::areas::repository::Repository;
use crate::artifacts::objects::object::{Object, ObjectBox};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use std::io::Write;

impl Repository {
    /// Print a stored object: blob bytes as they are, trees and commits in
    /// their readable form
    pub fn cat_file(&self, object_id: &str) -> anyhow::Result<ObjectType> {
        let oid = ObjectId::try_parse(object_id.to_string())?;
        let object = self.database().load(&oid)?;

        match &object {
            ObjectBox::Blob(blob) => self.writer().write_all(blob.content())?,
            ObjectBox::Tree(tree) => writeln!(self.writer(), "{}", tree.display())?,
            ObjectBox::Commit(commit) => write!(self.writer(), "{}", commit.display())?,
        }

        Ok(object.object_type())
    }

    /// Print the kind of a stored object
    pub fn cat_file_type(&self, object_id: &str) -> anyhow::Result<ObjectType> {
        let oid = ObjectId::try_parse(object_id.to_string())?;
        let object_type = self.database().load(&oid)?.object_type();

        writeln!(self.writer(), "{object_type}")?;

        Ok(object_type)
    }
}
