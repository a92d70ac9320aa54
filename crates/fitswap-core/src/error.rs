use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::ProductId;
use crate::image_ref::ImageRef;
use crate::swap::SwapTicket;

/// Which precondition of `begin_swap` was not satisfied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapPrecondition {
    MissingCustomerPhoto,
    MissingOutfitPhoto,
    MissingBothPhotos,
}

impl std::fmt::Display for SwapPrecondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCustomerPhoto => write!(f, "customer photo is missing"),
            Self::MissingOutfitPhoto => write!(f, "outfit photo is missing"),
            Self::MissingBothPhotos => write!(f, "customer and outfit photos are missing"),
        }
    }
}

#[derive(Error, Debug)]
pub enum FitSwapError {
    #[error("Cannot start swap: {0}")]
    PreconditionNotMet(SwapPrecondition),

    #[error("A swap is already in progress")]
    SwapInFlight,

    #[error("Swap {ticket} is no longer pending")]
    StaleSwap { ticket: SwapTicket },

    #[error("Swap processing failed: {0}")]
    SwapFailed(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Unknown product id: {0}")]
    UnknownProductId(ProductId),

    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProductId(ProductId),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Unsupported upload {}: {reason}", path.display())]
    UnsupportedUpload { path: PathBuf, reason: String },

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("{0} is not a local image")]
    NotLocalImage(ImageRef),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, FitSwapError>;
