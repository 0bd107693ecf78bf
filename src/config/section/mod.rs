//! Configuration section definitions.
//!
//! Each module corresponds to a section in `vitrine.toml`:
//!
//! | Module     | TOML Section   | Purpose                                  |
//! |------------|----------------|------------------------------------------|
//! | `build`    | `[build]`      | Paths, prerendered routes, asset flags   |
//! | `deploy`   | `[deploy]`     | Base path per build mode                 |
//! | `modules`  | `[modules.*]`  | Image provider, analytics, lint style    |
//! | `site`     | `[site]`       | Site title, description, public URL      |
//! | `validate` | `[validate]`   | Content and asset validation             |

mod build;
mod deploy;
mod modules;
mod site;
mod validate;

pub use build::BuildSectionConfig;
pub use deploy::DeployConfig;
pub use modules::{AnalyticsConfig, ImageModuleConfig, ImageProvider, LintConfig, ModulesConfig};
pub use site::SiteSectionConfig;
pub use validate::{AssetsValidateConfig, ValidateConfig, ValidateLevel};
