use std::sync::mpsc;
use std::sync::Arc;

use crate::consts::SWAP_WORKER_NAME;
use crate::error::{FitSwapError, Result};
use crate::image_ref::ImageRef;

use super::{CancellationToken, SwapProcessor, SwapRequest, SwapTicket};

/// Result of one swap job, delivered back to the owning thread.
#[derive(Debug)]
pub struct SwapOutcome {
    pub ticket: SwapTicket,
    pub result: Result<ImageRef>,
}

/// Notified from the worker thread after an outcome has been queued.
///
/// Front ends use this to wake their event loop (e.g. request a repaint).
pub trait SwapObserver: Send + Sync {
    fn on_swap_finished(&self, _ticket: SwapTicket) {}
}

/// Observer that ignores notifications.
pub struct NoOpObserver;
impl SwapObserver for NoOpObserver {}

/// Owning handle for a scheduled swap. Dropping it cancels the job.
#[derive(Debug)]
pub struct SwapHandle {
    ticket: SwapTicket,
    token: CancellationToken,
}

impl SwapHandle {
    pub fn ticket(&self) -> SwapTicket {
        self.ticket
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for SwapHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Runs swap requests on worker threads and reports outcomes over a channel.
pub struct SwapRunner {
    processor: Arc<dyn SwapProcessor>,
    observer: Arc<dyn SwapObserver>,
    outcome_tx: mpsc::Sender<SwapOutcome>,
}

impl SwapRunner {
    /// Create a runner and the receiver its outcomes arrive on.
    pub fn new(
        processor: Arc<dyn SwapProcessor>,
        observer: Arc<dyn SwapObserver>,
    ) -> (Self, mpsc::Receiver<SwapOutcome>) {
        let (outcome_tx, outcome_rx) = mpsc::channel();
        (
            Self {
                processor,
                observer,
                outcome_tx,
            },
            outcome_rx,
        )
    }

    /// Schedule `request`. Cancelled jobs report nothing.
    pub fn spawn(&self, request: SwapRequest) -> Result<SwapHandle> {
        let ticket = request.ticket;
        let token = CancellationToken::new();

        let processor = Arc::clone(&self.processor);
        let observer = Arc::clone(&self.observer);
        let tx = self.outcome_tx.clone();
        let job_token = token.clone();

        std::thread::Builder::new()
            .name(SWAP_WORKER_NAME.into())
            .spawn(move || {
                let result = processor.process(&request, &job_token);
                if job_token.is_cancelled() || matches!(result, Err(FitSwapError::Cancelled)) {
                    tracing::debug!("Swap {ticket} cancelled");
                    return;
                }
                if tx.send(SwapOutcome { ticket, result }).is_ok() {
                    observer.on_swap_finished(ticket);
                }
            })?;

        tracing::info!("Swap {ticket} scheduled");
        Ok(SwapHandle { ticket, token })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::swap::MockSwapProcessor;

    #[derive(Default)]
    struct CountingObserver(AtomicUsize);

    impl SwapObserver for CountingObserver {
        fn on_swap_finished(&self, _ticket: SwapTicket) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn request(n: u64) -> SwapRequest {
        SwapRequest {
            ticket: SwapTicket(n),
            customer: ImageRef::from("c"),
            outfit: ImageRef::from("o"),
        }
    }

    #[test]
    fn outcome_is_delivered_and_observer_notified() {
        let observer = Arc::new(CountingObserver::default());
        let (runner, rx) = SwapRunner::new(
            Arc::new(MockSwapProcessor::with_delay(Duration::from_millis(5))),
            observer.clone(),
        );
        let _handle = runner.spawn(request(7)).unwrap();

        let outcome = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(outcome.ticket, SwapTicket(7));
        assert!(outcome.result.is_ok());
        assert_eq!(observer.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropping_the_handle_cancels_the_job() {
        let (runner, rx) = SwapRunner::new(
            Arc::new(MockSwapProcessor::with_delay(Duration::from_millis(200))),
            Arc::new(NoOpObserver),
        );
        let handle = runner.spawn(request(1)).unwrap();
        drop(handle);

        assert!(rx.recv_timeout(Duration::from_millis(500)).is_err());
    }
}
