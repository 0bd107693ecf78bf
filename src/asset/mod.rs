//! Asset URL resolution and static asset copying.
//!
//! - [`resolve`]: pure rewriting of asset URLs for the deployment base path
//! - [`copy`]: copying the static assets directory into the build output

mod copy;
mod resolve;

pub use copy::{AssetIndex, copy_static_assets};
pub use resolve::{AssetResolver, BasePath, ImageInput};
