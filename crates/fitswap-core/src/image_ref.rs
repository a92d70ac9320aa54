use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Opaque handle identifying an image resource (URI or file reference).
///
/// The core never interprets the contents; front ends decide how to
/// resolve a reference into pixels.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

const FILE_SCHEME: &str = "file://";

impl ImageRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Build a `file://` reference for a local path.
    pub fn from_path(path: &Path) -> Self {
        Self(format!("{FILE_SCHEME}{}", path.display()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Local path behind a `file://` reference, if this is one.
    pub fn local_path(&self) -> Option<PathBuf> {
        self.0.strip_prefix(FILE_SCHEME).map(PathBuf::from)
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// User-settable photo slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhotoSlot {
    Customer,
    Outfit,
}

impl PhotoSlot {
    pub const ALL: &[Self] = &[Self::Customer, Self::Outfit];
}

impl std::fmt::Display for PhotoSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "Customer photo"),
            Self::Outfit => write!(f, "Outfit photo"),
        }
    }
}
