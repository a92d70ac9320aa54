use fitswap_core::{ProductId, SwapPhase};

use crate::app::FitSwapApp;
use crate::panels::helpers::photo_frame;

const RESULT_PREVIEW: egui::Vec2 = egui::vec2(400.0, 600.0);

/// Products shown as tags over the result.
const TAGGED_PRODUCTS: usize = 3;

pub fn show(ctx: &egui::Context, app: &mut FitSwapApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Outfit photo");
        ui.add_space(4.0);

        let state = app.session.state();
        let failure = match state.phase() {
            SwapPhase::Failed { reason } => Some(reason.clone()),
            _ => None,
        };
        let empty_label = if state.is_processing() {
            "Generating..."
        } else {
            "The generated photo appears here"
        };

        if let Some(reason) = failure {
            let mut dismiss = false;
            ui.horizontal(|ui| {
                ui.colored_label(ui.visuals().error_fg_color, format!("Swap failed: {reason}"));
                dismiss = ui.button("Dismiss").clicked();
            });
            if dismiss {
                app.session.acknowledge_failure();
            }
        }

        let state = app.session.state();
        photo_frame(
            ui,
            &mut app.textures,
            state.result_photo(),
            RESULT_PREVIEW,
            empty_label,
        );

        if let Some(result) = state.result_photo() {
            let local = result.local_path().is_some();
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(local, egui::Button::new("Save image..."))
                    .on_disabled_hover_text("Placeholder results cannot be saved")
                    .clicked()
                {
                    app.save_result();
                }
                if ui.button("Copy link").clicked() {
                    app.share_result();
                }
            });
            ui.add_space(8.0);
            product_tags(ui, app);
        }
    });
}

fn product_tags(ui: &mut egui::Ui, app: &mut FitSwapApp) {
    let mut toggled: Option<ProductId> = None;
    ui.horizontal_wrapped(|ui| {
        for product in app.session.state().products().iter().take(TAGGED_PRODUCTS) {
            let text = format!("{} · {}", product.name, product.spec);
            let mut selected = product.is_selected();
            if ui.toggle_value(&mut selected, text).clicked() {
                toggled = Some(product.id);
            }
        }
    });
    if let Some(id) = toggled {
        app.session.toggle_product_selection(id);
    }
}
