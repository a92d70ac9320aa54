use fitswap_core::config::StoreConfig;
use fitswap_core::selectors::selected_count;

use crate::app::FitSwapApp;
use crate::messages::UiEvent;
use crate::panels::helpers::enum_combo;
use crate::states::UploadMode;

pub fn show(ctx: &egui::Context, app: &mut FitSwapApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Import Store Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Store Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Photos").clicked() {
                    ui.close();
                    app.reset_photos();
                }

                if ui.button("Reset Defaults").clicked() {
                    ui.close();
                    app.apply_config(StoreConfig::default());
                }
            });

            ui.menu_button("Options", |ui| {
                let mut mode = app.ui_state.upload_mode;
                if enum_combo(ui, "Uploads", &mut mode, UploadMode::ALL) {
                    app.ui_state.upload_mode = mode;
                    app.ui_state.add_log(format!("Upload mode: {mode}"));
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Cart ({})", selected_count(app.session.state())));
            });
        });

        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn import_config(app: &mut FitSwapApp) {
    let tx = app.event_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let event = match StoreConfig::load(&path) {
            Ok(config) => UiEvent::ConfigImported { config },
            Err(e) => UiEvent::Error {
                message: format!("Failed to import {}: {e}", path.display()),
            },
        };
        let _ = tx.send(event);
    });
}

fn export_config(app: &mut FitSwapApp) {
    let tx = app.event_tx.clone();
    let config = app.config.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("fitswap_store.toml")
            .save_file()
        else {
            return;
        };
        let event = match config.save(&path) {
            Ok(()) => UiEvent::Log {
                message: format!("Store config saved to {}", path.display()),
            },
            Err(e) => UiEvent::Error {
                message: format!("Failed to export config: {e}"),
            },
        };
        let _ = tx.send(event);
    });
}
