//! Command implementations for Frontpage CLI

pub mod build;
pub mod check;
pub mod completions;
pub mod helpers;
pub mod version;
