//! Development vs production builds.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which deployment the site is built for.
///
/// Production builds serve from `[deploy] base`; development builds from
/// `[deploy] dev_base` (root by default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

impl BuildMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
