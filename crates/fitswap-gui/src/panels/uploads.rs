use fitswap_core::selectors::can_swap;
use fitswap_core::PhotoSlot;

use crate::app::FitSwapApp;
use crate::panels::helpers::photo_frame;
use crate::panels::section_header;

const SLOT_PREVIEW: egui::Vec2 = egui::vec2(150.0, 200.0);

pub fn show(ctx: &egui::Context, app: &mut FitSwapApp) {
    egui::SidePanel::left("uploads")
        .resizable(false)
        .exact_width(220.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for &slot in PhotoSlot::ALL {
                    slot_section(ui, app, slot);
                    ui.add_space(8.0);
                }

                ui.separator();
                actions(ui, app);
            });
        });
}

fn slot_section(ui: &mut egui::Ui, app: &mut FitSwapApp, slot: PhotoSlot) {
    let state = app.session.state();
    let image = state.photo(slot);
    let status = if image.is_some() { "Uploaded" } else { "Empty" };
    section_header(ui, &slot.to_string(), Some(status));

    let empty_label = match slot {
        PhotoSlot::Customer => "Upload the customer photo",
        PhotoSlot::Outfit => "Upload the outfit photo",
    };
    let has_image = image.is_some();
    let locked = state.is_processing();
    photo_frame(ui, &mut app.textures, image, SLOT_PREVIEW, empty_label);

    ui.horizontal(|ui| {
        if ui.add_enabled(!locked, egui::Button::new("Choose...")).clicked() {
            app.pick_photo(slot);
        }
        if ui
            .add_enabled(has_image && !locked, egui::Button::new("Remove"))
            .clicked()
        {
            app.clear_photo(slot);
        }
    });
}

fn actions(ui: &mut egui::Ui, app: &mut FitSwapApp) {
    let state = app.session.state();
    let enabled = can_swap(state);
    let processing = state.is_processing();

    ui.horizontal(|ui| {
        let label = if processing { "Generating..." } else { "Generate" };
        if ui
            .add_enabled(enabled, egui::Button::new(label).min_size(egui::vec2(120.0, 0.0)))
            .clicked()
        {
            app.begin_swap();
        }
        if processing {
            ui.add(egui::Spinner::new());
        }
    });

    if ui.button("Reset").clicked() {
        app.reset_photos();
    }

    if let Some(ref notice) = app.ui_state.notice {
        ui.colored_label(ui.visuals().warn_fg_color, notice.as_str());
    } else if !enabled && !processing {
        ui.weak("Upload both photos to generate the outfit photo.");
    }
}
