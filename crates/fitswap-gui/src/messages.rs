use std::path::PathBuf;

use fitswap_core::config::StoreConfig;
use fitswap_core::PhotoSlot;

/// Results sent from dialog threads back to the UI thread.
pub enum UiEvent {
    /// A file was picked for the given slot.
    PhotoPicked { slot: PhotoSlot, path: PathBuf },

    /// A store config was read from disk.
    ConfigImported { config: StoreConfig },

    Error { message: String },

    Log { message: String },
}
