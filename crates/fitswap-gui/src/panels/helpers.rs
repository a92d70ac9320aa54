use fitswap_core::ImageRef;

use crate::states::TextureCache;

/// Show a ComboBox for enum selection. Returns `true` if the value changed.
pub(crate) fn enum_combo<T: PartialEq + Copy + ToString>(
    ui: &mut egui::Ui,
    label: &str,
    current: &mut T,
    options: &[T],
) -> bool {
    let resp = egui::ComboBox::from_label(label)
        .selected_text(current.to_string())
        .show_ui(ui, |ui| {
            let mut changed = false;
            for &choice in options {
                if ui
                    .selectable_value(current, choice, choice.to_string())
                    .changed()
                {
                    changed = true;
                }
            }
            changed
        });
    resp.inner == Some(true)
}

/// Draw `image` scaled to fit `max`, or a framed placeholder with `empty_label`
/// when there is no image or it has no local pixels to show.
pub(crate) fn photo_frame(
    ui: &mut egui::Ui,
    textures: &mut TextureCache,
    image: Option<&ImageRef>,
    max: egui::Vec2,
    empty_label: &str,
) {
    let loaded = image.and_then(|img| textures.get_or_load(ui.ctx(), img));
    if let Some((id, size)) = loaded {
        let scale = (max.x / size.x).min(max.y / size.y).min(1.0);
        ui.add(egui::Image::from_texture(egui::load::SizedTexture::new(
            id,
            size * scale,
        )));
        return;
    }

    let label = match image {
        Some(img) => img.to_string(),
        None => empty_label.to_string(),
    };
    egui::Frame::NONE
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .corner_radius(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_min_size(max - egui::vec2(16.0, 16.0));
            ui.centered_and_justified(|ui| {
                ui.weak(label);
            });
        });
}
