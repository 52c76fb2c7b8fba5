pub mod branch_name;

/// Characters and sequences a branch name may not contain
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\/\/|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Branch HEAD points to in a fresh repository
pub const DEFAULT_BRANCH: &str = "master";
