pub mod catalog;
pub mod config;
pub mod consts;
pub mod error;
pub mod image_ref;
pub mod selectors;
pub mod session;
pub mod state;
pub mod swap;
pub mod upload;

pub use catalog::{format_price, Catalog, Product, ProductId};
pub use error::{FitSwapError, Result, SwapPrecondition};
pub use image_ref::{ImageRef, PhotoSlot};
pub use session::{Session, SessionEvent};
pub use state::{SwapPhase, ViewState};
