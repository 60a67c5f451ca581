//! Command implementations for despace CLI

pub mod completions;
pub mod rename;
