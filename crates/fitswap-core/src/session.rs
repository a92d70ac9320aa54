use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::catalog::{Catalog, ProductId};
use crate::error::{FitSwapError, Result};
use crate::image_ref::{ImageRef, PhotoSlot};
use crate::state::ViewState;
use crate::swap::{
    MockSwapProcessor, NoOpObserver, SwapHandle, SwapObserver, SwapOutcome, SwapProcessor,
    SwapRunner, SwapTicket,
};

/// What happened when a swap outcome was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    SwapCompleted { ticket: SwapTicket, image: ImageRef },
    SwapFailed { ticket: SwapTicket, reason: String },
    /// The outcome belonged to a swap that was reset or superseded.
    StaleOutcome { ticket: SwapTicket },
}

/// Drives a `ViewState` together with the swap worker.
///
/// State only changes on the thread that owns the session: workers
/// deliver outcomes over a channel and `poll` / `wait_for_swap` apply them.
pub struct Session {
    state: ViewState,
    runner: SwapRunner,
    outcomes: mpsc::Receiver<SwapOutcome>,
    pending: Option<SwapHandle>,
}

impl Session {
    pub fn new(
        catalog: Catalog,
        processor: Arc<dyn SwapProcessor>,
        observer: Arc<dyn SwapObserver>,
    ) -> Self {
        let (runner, outcomes) = SwapRunner::new(processor, observer);
        Self {
            state: ViewState::new(catalog),
            runner,
            outcomes,
            pending: None,
        }
    }

    /// Session backed by the fixed-delay mock processor.
    pub fn with_mock(catalog: Catalog) -> Self {
        Self::new(
            catalog,
            Arc::new(MockSwapProcessor::default()),
            Arc::new(NoOpObserver),
        )
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_photo(&mut self, slot: PhotoSlot, image: ImageRef) {
        self.state.set_photo(slot, image);
    }

    pub fn clear_photo(&mut self, slot: PhotoSlot) -> Result<()> {
        self.state.clear_photo(slot)
    }

    pub fn toggle_product_selection(&mut self, id: ProductId) -> bool {
        self.state.toggle_product_selection(id)
    }

    pub fn acknowledge_failure(&mut self) -> bool {
        self.state.acknowledge_failure()
    }

    /// Start a swap and schedule its completion on a worker.
    pub fn begin_swap(&mut self) -> Result<SwapTicket> {
        let request = self.state.begin_swap()?;
        let ticket = request.ticket;
        match self.runner.spawn(request) {
            Ok(handle) => {
                self.pending = Some(handle);
                Ok(ticket)
            }
            Err(e) => {
                let _ = self.state.fail_swap(ticket, e.to_string());
                Err(e)
            }
        }
    }

    /// Clear the photos and cancel the pending swap, if any.
    pub fn reset_all(&mut self) -> Option<SwapTicket> {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
        self.state.reset_all()
    }

    /// Apply every outcome that has arrived so far without blocking.
    pub fn poll(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        while let Ok(outcome) = self.outcomes.try_recv() {
            events.push(self.apply(outcome));
        }
        events
    }

    /// Block until the pending swap settles or `timeout` elapses.
    /// Returns `None` when nothing is pending or on timeout.
    pub fn wait_for_swap(&mut self, timeout: Duration) -> Option<SessionEvent> {
        let deadline = Instant::now() + timeout;
        while self.state.is_processing() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return None;
            }
            match self.outcomes.recv_timeout(remaining) {
                Ok(outcome) => match self.apply(outcome) {
                    SessionEvent::StaleOutcome { .. } => continue,
                    event => return Some(event),
                },
                Err(_) => return None,
            }
        }
        None
    }

    fn apply(&mut self, outcome: SwapOutcome) -> SessionEvent {
        let SwapOutcome { ticket, result } = outcome;
        let applied = match result {
            Ok(image) => self
                .state
                .complete_swap(ticket, image.clone())
                .map(|()| SessionEvent::SwapCompleted { ticket, image }),
            Err(e) => {
                let reason = match e {
                    FitSwapError::SwapFailed(reason) => reason,
                    other => other.to_string(),
                };
                self.state
                    .fail_swap(ticket, reason.clone())
                    .map(|()| SessionEvent::SwapFailed { ticket, reason })
            }
        };

        match applied {
            Ok(event) => {
                if self.pending.as_ref().map(SwapHandle::ticket) == Some(ticket) {
                    self.pending = None;
                }
                event
            }
            Err(_) => SessionEvent::StaleOutcome { ticket },
        }
    }
}
