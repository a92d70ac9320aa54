use fitswap_core::swap::{SwapObserver, SwapTicket};

/// Wakes the egui event loop when a swap outcome is waiting.
pub struct RepaintObserver {
    ctx: egui::Context,
}

impl RepaintObserver {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl SwapObserver for RepaintObserver {
    fn on_swap_finished(&self, ticket: SwapTicket) {
        tracing::debug!("Swap {ticket} finished, requesting repaint");
        self.ctx.request_repaint();
    }
}
