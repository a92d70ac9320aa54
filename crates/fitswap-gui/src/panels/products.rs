use fitswap_core::selectors::{can_checkout, selected_count, total_price};
use fitswap_core::{format_price, ProductId};

use crate::app::FitSwapApp;
use crate::panels::section_header;

pub fn show(ctx: &egui::Context, app: &mut FitSwapApp) {
    egui::SidePanel::right("products")
        .resizable(false)
        .exact_width(260.0)
        .show(ctx, |ui| {
            let state = app.session.state();
            let count = format!("{} selected", selected_count(state));
            section_header(ui, "Products", Some(&count));
            ui.separator();

            let currency = &app.config.currency;
            let mut toggled = Vec::new();
            egui::ScrollArea::vertical()
                .max_height(ui.available_height() - 80.0)
                .show(ui, |ui| {
                    for product in state.products().iter() {
                        let mut selected = product.is_selected();
                        ui.horizontal(|ui| {
                            if ui.checkbox(&mut selected, &product.name).changed() {
                                toggled.push(product.id);
                            }
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(format_price(currency, product.price));
                                },
                            );
                        });
                        ui.indent(product.id.0, |ui| {
                            ui.small(format!("{} · {}", product.category, product.spec));
                        });
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                ui.strong("Total");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.strong(format_price(currency, total_price(state)));
                });
            });

            let checkout_enabled = can_checkout(state);
            let checkout = ui
                .add_enabled(
                    checkout_enabled,
                    egui::Button::new("Add to cart").min_size(egui::vec2(ui.available_width(), 0.0)),
                )
                .clicked();

            apply_toggles(app, &toggled);
            if checkout {
                app.checkout();
            }
        });
}

fn apply_toggles(app: &mut FitSwapApp, toggled: &[ProductId]) {
    for &id in toggled {
        app.session.toggle_product_selection(id);
    }
}
