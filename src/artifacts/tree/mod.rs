//! Conversion between the flat index and stored tree hierarchies

pub mod builder;
