//! Core types shared across commands.

mod mode;

pub use mode::BuildMode;
