use crate::artifacts::branch::{DEFAULT_BRANCH, INVALID_BRANCH_NAME_REGEX};
use crate::errors::RepoError;
use anyhow::Context;

/// Prefix of branch refs, relative to the metadata directory
pub const REF_PREFIX: &str = "refs/heads/";

/// A validated branch name, possibly hierarchical (`feature/login`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            return Err(RepoError::InvalidBranchName(name).into());
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .with_context(|| format!("invalid branch name regex: {INVALID_BRANCH_NAME_REGEX}"))?;

        if re.is_match(&name) {
            Err(RepoError::InvalidBranchName(name).into())
        } else {
            Ok(Self(name))
        }
    }

    /// Parse the target of a symbolic ref such as `refs/heads/master`
    pub fn try_parse_ref(ref_name: &str) -> anyhow::Result<Self> {
        match ref_name.strip_prefix(REF_PREFIX) {
            Some(name) => Self::try_parse(name.to_string()),
            None => anyhow::bail!("symbolic ref must start with '{REF_PREFIX}', got '{ref_name}'"),
        }
    }

    /// `refs/heads/<name>`
    pub fn to_ref(&self) -> String {
        format!("{REF_PREFIX}{}", self.0)
    }
}

impl Default for BranchName {
    fn default() -> Self {
        BranchName(DEFAULT_BRANCH.to_string())
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
