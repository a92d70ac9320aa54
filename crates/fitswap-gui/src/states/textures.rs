use std::collections::{HashMap, HashSet};

use fitswap_core::ImageRef;

use crate::convert::load_color_image;

const MAX_TEXTURE_SIDE: u32 = 1024;

/// Decoded textures for photo references that point at local files.
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<ImageRef, egui::TextureHandle>,
    failed: HashSet<ImageRef>,
}

impl TextureCache {
    /// Texture id and pixel size for `image`, decoding it on first use.
    /// Returns `None` for placeholders and files that failed to decode.
    pub fn get_or_load(
        &mut self,
        ctx: &egui::Context,
        image: &ImageRef,
    ) -> Option<(egui::TextureId, egui::Vec2)> {
        if self.failed.contains(image) {
            return None;
        }
        if !self.textures.contains_key(image) {
            let path = image.local_path()?;
            match load_color_image(&path, MAX_TEXTURE_SIDE) {
                Ok(color) => {
                    let tex = ctx.load_texture(
                        format!("photo:{image}"),
                        color,
                        egui::TextureOptions::LINEAR,
                    );
                    self.textures.insert(image.clone(), tex);
                }
                Err(e) => {
                    tracing::warn!("Failed to load {image}: {e:#}");
                    self.failed.insert(image.clone());
                    return None;
                }
            }
        }
        self.textures.get(image).map(|t| (t.id(), t.size_vec2()))
    }

    /// Drop textures whose reference is no longer shown.
    pub fn retain_only(&mut self, live: &[&ImageRef]) {
        self.textures.retain(|key, _| live.contains(&key));
        self.failed.retain(|key| live.contains(&key));
    }

    pub fn clear(&mut self) {
        self.textures.clear();
        self.failed.clear();
    }
}
