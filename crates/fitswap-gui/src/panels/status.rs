use fitswap_core::SwapPhase;

use crate::app::FitSwapApp;

pub fn show(ctx: &egui::Context, app: &mut FitSwapApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        let state = app.session.state();
        if let SwapPhase::Processing { ticket } = state.phase() {
            ui.add(
                egui::ProgressBar::new(0.0)
                    .text(format!("Generating outfit photo {ticket}..."))
                    .animate(true),
            );
        } else {
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area, fixed height for 4 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            ui.label(format!("Swap: {}", state.phase()));
            ui.separator();
            ui.label(format!("Uploads: {}", app.ui_state.upload_mode));
            ui.separator();
            ui.label(format!("Products: {}", state.products().len()));
        });

        ui.add_space(2.0);
    });
}
