//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `resolve_path`, `display_relative`)
//! - [`route`]: Route and URL helpers (`normalize_route`, `route_dir`, `strip_query_fragment`)

pub mod fs;
pub mod route;

pub use fs::{display_relative, normalize_path, resolve_path};
