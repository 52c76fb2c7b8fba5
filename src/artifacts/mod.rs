//! Version control data structures and algorithms
//!
//! - `branch`: Branch name validation
//! - `checkout`: Moving the working directory between trees
//! - `database`: Object storage backends
//! - `ignore`: Ignore-file patterns
//! - `index`: On-disk index format
//! - `objects`: Object types (blob, tree, commit) and their codec
//! - `status`: Working tree status inspection
//! - `tree`: Building trees from the index and flattening them back

pub mod branch;
pub mod checkout;
pub mod database;
pub mod ignore;
pub mod index;
pub mod objects;
pub mod status;
pub mod tree;
