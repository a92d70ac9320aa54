mod textures;
mod ui;

pub use textures::TextureCache;
pub use ui::{UIState, UploadMode};
