use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug)]
pub struct ConflictMessage {
    pub header: &'static str,
    pub footer: &'static str,
}

impl From<&ConflictType> for ConflictMessage {
    fn from(value: &ConflictType) -> Self {
        match value {
            ConflictType::StaleDirectory => Self {
                header: "Updating the following directories would lose untracked files in them:",
                footer: "Please move or remove them before you switch branches.",
            },
            ConflictType::UntrackedOverwritten => Self {
                header:
                    "The following untracked working tree files would be overwritten by checkout:",
                footer: "Please move or remove them before you switch branches.",
            },
            ConflictType::UntrackedRemoved => Self {
                header: "The following untracked working tree files would be removed by checkout:",
                footer: "Please move or remove them before you switch branches.",
            },
        }
    }
}

/// Ways a checkout could destroy files the repository does not track
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConflictType {
    /// A directory holding untracked files sits where the target has a file
    StaleDirectory,
    /// An untracked file sits where the target has a different file
    UntrackedOverwritten,
    /// An untracked file sits where the target needs a directory
    UntrackedRemoved,
}

/// Paths blocked for one reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub kind: ConflictType,
    pub paths: BTreeSet<String>,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = ConflictMessage::from(&self.kind);

        writeln!(f, "{}", message.header)?;
        for path in &self.paths {
            writeln!(f, "\t{path}")?;
        }
        write!(f, "{}", message.footer)
    }
}
