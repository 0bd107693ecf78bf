//! Asset URL resolution for sub-path deployments.
//!
//! A site served from `https://user.github.io/marketing-landing/` needs every
//! root-absolute asset reference (`/images/logo.png`) rewritten to include the
//! base path (`/marketing-landing/images/logo.png`). External URLs and
//! relative paths are left for the browser to resolve.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content::Image;

/// URL path prefix under which the site is served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasePath(String);

impl BasePath {
    /// Root deployment (`/`).
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Create a base path. An empty value means root.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.is_empty() { Self::root() } else { Self(path) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Base path ending in `/`.
    pub fn with_trailing_slash(&self) -> Cow<'_, str> {
        if self.0.ends_with('/') {
            Cow::Borrowed(&self.0)
        } else {
            Cow::Owned(format!("{}/", self.0))
        }
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Either a bare image path or an image record with per-viewport sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageInput {
    Path(String),
    Set(Image),
}

/// Rewrites root-absolute asset paths against a [`BasePath`].
///
/// Stateless apart from the injected base path, so one resolver can be
/// shared freely across rendering threads.
#[derive(Debug, Clone, Default)]
pub struct AssetResolver {
    base: BasePath,
}

impl AssetResolver {
    pub fn new(base: BasePath) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    /// Resolve a single asset path.
    ///
    /// | input                   | output                 |
    /// |-------------------------|------------------------|
    /// | `""`                    | `""`                   |
    /// | `https://cdn/x.png`     | unchanged              |
    /// | `images/x.png`          | unchanged              |
    /// | `/images/x.png`         | `{base}/images/x.png`  |
    pub fn resolve<'a>(&self, path: &'a str) -> Cow<'a, str> {
        if path.is_empty() || is_remote(path) || !path.starts_with('/') {
            return Cow::Borrowed(path);
        }
        let base = self.base.with_trailing_slash();
        Cow::Owned(format!("{base}{}", &path[1..]))
    }

    /// Resolve an optional path; `None` stays `None`.
    pub fn resolve_opt(&self, path: Option<&str>) -> Option<String> {
        path.map(|p| self.resolve(p).into_owned())
    }

    /// Resolve every source of an image input.
    ///
    /// `desktop`, `mobile` and `src` are rewritten when present; `alt` and
    /// absent fields are left as they are.
    pub fn resolve_image_set(&self, image: Option<ImageInput>) -> Option<ImageInput> {
        image.map(|image| match image {
            ImageInput::Path(path) => ImageInput::Path(self.resolve(&path).into_owned()),
            ImageInput::Set(set) => ImageInput::Set(self.resolve_image(&set)),
        })
    }

    /// Resolve the sources of an [`Image`] record.
    pub fn resolve_image(&self, image: &Image) -> Image {
        Image {
            src: self.resolve_opt(image.src.as_deref()),
            desktop: self.resolve_opt(image.desktop.as_deref()),
            mobile: self.resolve_opt(image.mobile.as_deref()),
            alt: image.alt.clone(),
        }
    }
}

#[inline]
fn is_remote(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}
