//! Utility modules shared by the CLI commands.

pub mod path;
pub mod plural;

pub use plural::{plural_count, plural_s};
