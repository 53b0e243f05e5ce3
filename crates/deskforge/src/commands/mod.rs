//! Command implementations

pub mod check;
pub mod cleanup;
pub mod download;
pub mod version;
