use std::path::Path;
use std::sync::mpsc;
use std::sync::Arc;

use fitswap_core::config::StoreConfig;
use fitswap_core::selectors::{can_checkout, cart_summary};
use fitswap_core::swap::MockSwapProcessor;
use fitswap_core::upload::{export_image, FileUploader, PlaceholderUploader, Uploader};
use fitswap_core::{format_price, Catalog, PhotoSlot, Session, SessionEvent};

use crate::messages::UiEvent;
use crate::observer::RepaintObserver;
use crate::panels;
use crate::states::{TextureCache, UIState, UploadMode};

pub struct FitSwapApp {
    pub event_tx: mpsc::Sender<UiEvent>,
    pub event_rx: mpsc::Receiver<UiEvent>,
    pub session: Session,
    pub config: StoreConfig,
    pub ui_state: UIState,
    pub textures: TextureCache,
    ctx: egui::Context,
}

impl FitSwapApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let config = StoreConfig::default();
        let session = build_session(Catalog::builtin(), &config, ctx);

        Self {
            event_tx,
            event_rx,
            session,
            config,
            ui_state: UIState::default(),
            textures: TextureCache::default(),
            ctx: ctx.clone(),
        }
    }

    /// Drain dialog results and swap outcomes.
    fn poll_results(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                UiEvent::PhotoPicked { slot, path } => self.upload_photo(slot, &path),
                UiEvent::ConfigImported { config } => self.apply_config(config),
                UiEvent::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                UiEvent::Log { message } => self.ui_state.add_log(message),
            }
        }

        for event in self.session.poll() {
            match event {
                SessionEvent::SwapCompleted { ticket, image } => {
                    self.ui_state.add_log(format!("Swap {ticket} ready: {image}"));
                }
                SessionEvent::SwapFailed { ticket, reason } => {
                    self.ui_state.add_log(format!("ERROR: swap {ticket} failed: {reason}"));
                }
                SessionEvent::StaleOutcome { ticket } => {
                    tracing::debug!("Ignored outcome of swap {ticket}");
                }
            }
        }
    }

    fn upload_photo(&mut self, slot: PhotoSlot, path: &Path) {
        let result = match self.ui_state.upload_mode {
            UploadMode::Files => FileUploader.upload(slot, path),
            UploadMode::Placeholders => {
                PlaceholderUploader::new(self.config.placeholders.clone()).upload(slot, path)
            }
        };
        match result {
            Ok(image) => {
                self.ui_state.add_log(format!("{slot}: {image}"));
                self.session.set_photo(slot, image);
                self.ui_state.clear_notice();
            }
            Err(e) => {
                self.ui_state.add_log(format!("ERROR: {e}"));
                self.ui_state.set_notice(e.to_string());
            }
        }
    }

    /// Start over with a new store config. Any running swap is dropped
    /// together with the old session.
    pub fn apply_config(&mut self, config: StoreConfig) {
        match config.catalog() {
            Ok(catalog) => {
                self.session = build_session(catalog, &config, &self.ctx);
                self.textures.clear();
                self.ui_state.clear_notice();
                self.ui_state.add_log(format!(
                    "Store config applied ({} products)",
                    config.catalog.len()
                ));
                self.config = config;
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn pick_photo(&self, slot: PhotoSlot) {
        let tx = self.event_tx.clone();
        let ctx = self.ctx.clone();
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .set_title(slot.to_string())
                .add_filter("Images", fitswap_core::consts::SUPPORTED_IMAGE_EXTENSIONS)
                .pick_file()
            {
                let _ = tx.send(UiEvent::PhotoPicked { slot, path });
                ctx.request_repaint();
            }
        });
    }

    pub fn clear_photo(&mut self, slot: PhotoSlot) {
        if let Err(e) = self.session.clear_photo(slot) {
            self.ui_state.set_notice(e.to_string());
        }
    }

    pub fn begin_swap(&mut self) {
        match self.session.begin_swap() {
            Ok(ticket) => {
                self.ui_state.clear_notice();
                self.ui_state.add_log(format!("Swap {ticket} started"));
            }
            Err(e) => self.ui_state.set_notice(e.to_string()),
        }
    }

    pub fn reset_photos(&mut self) {
        if let Some(ticket) = self.session.reset_all() {
            self.ui_state.add_log(format!("Swap {ticket} cancelled"));
        }
        self.ui_state.clear_notice();
        self.ui_state.add_log("Photos cleared".into());
    }

    /// Ask for a destination and copy the current result there.
    pub fn save_result(&self) {
        let Some(image) = self.session.state().result_photo().cloned() else {
            return;
        };
        let tx = self.event_tx.clone();
        let ctx = self.ctx.clone();
        std::thread::spawn(move || {
            let file_name = image
                .local_path()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                .unwrap_or_else(|| "outfit.png".into());
            let Some(path) = rfd::FileDialog::new()
                .add_filter("Images", fitswap_core::consts::SUPPORTED_IMAGE_EXTENSIONS)
                .set_file_name(file_name)
                .save_file()
            else {
                return;
            };
            let event = match export_image(&image, &path) {
                Ok(_) => UiEvent::Log {
                    message: format!("Outfit photo saved to {}", path.display()),
                },
                Err(e) => UiEvent::Error {
                    message: format!("Failed to save outfit photo: {e}"),
                },
            };
            let _ = tx.send(event);
            ctx.request_repaint();
        });
    }

    /// Put the result reference on the clipboard for sending to the customer.
    pub fn share_result(&mut self) {
        if let Some(image) = self.session.state().result_photo() {
            self.ctx.copy_text(image.to_string());
            self.ui_state.add_log(format!("Copied {image} to the clipboard"));
        }
    }

    pub fn checkout(&mut self) {
        let state = self.session.state();
        if !can_checkout(state) {
            return;
        }
        let cart = cart_summary(state);
        tracing::info!("Checkout: {} items, total {}", cart.count, cart.total);
        self.ui_state.add_log(format!(
            "Added {} item(s) to cart ({})",
            cart.count,
            format_price(&self.config.currency, cart.total)
        ));
    }

    fn prune_textures(&mut self) {
        let state = self.session.state();
        let live: Vec<_> = [
            state.customer_photo(),
            state.outfit_photo(),
            state.result_photo(),
        ]
        .into_iter()
        .flatten()
        .collect();
        self.textures.retain_only(&live);
    }
}

impl eframe::App for FitSwapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();
        self.prune_textures();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::uploads::show(ctx, self);
        panels::products::show(ctx, self);
        panels::result::show(ctx, self);

        if self.session.state().is_processing() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // About dialog
        if self.ui_state.show_about {
            egui::Window::new("About FitSwap")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("FitSwap");
                        ui.label("Personalised outfit photos for VIP customers");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

fn build_session(catalog: Catalog, config: &StoreConfig, ctx: &egui::Context) -> Session {
    Session::new(
        catalog,
        Arc::new(MockSwapProcessor::new(
            fitswap_core::consts::SWAP_DELAY,
            config.placeholders.result.clone(),
        )),
        Arc::new(RepaintObserver::new(ctx.clone())),
    )
}
