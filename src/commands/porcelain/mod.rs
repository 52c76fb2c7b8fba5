//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `commit`: Create a new commit
//! - `status`: Show working tree status
//! - `branch`: Create or list branches
//! - `checkout`: Switch branches

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod status;
