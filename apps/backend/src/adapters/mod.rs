//! Store implementations backing the repo contracts.

pub mod mem;
