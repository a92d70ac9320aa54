use std::path::Path;

use anyhow::{Context, Result};

/// Decode an image file into an egui ColorImage whose longer side is at
/// most `max_side`, keeping the aspect ratio.
pub fn load_color_image(path: &Path, max_side: u32) -> Result<egui::ColorImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    let thumb = img.thumbnail(max_side, max_side).to_rgba8();
    let size = [thumb.width() as usize, thumb.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, thumb.as_raw()))
}
