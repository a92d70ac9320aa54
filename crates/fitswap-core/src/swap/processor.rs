use std::time::{Duration, Instant};

use crate::consts::{CANCEL_POLL_INTERVAL, PLACEHOLDER_RESULT, SWAP_DELAY};
use crate::error::{FitSwapError, Result};
use crate::image_ref::ImageRef;

use super::{CancellationToken, SwapRequest};

/// Turns a customer photo and an outfit photo into a composite image.
///
/// Implementations run on a worker thread and should return
/// `FitSwapError::Cancelled` promptly once `cancel` is set.
pub trait SwapProcessor: Send + Sync {
    fn process(&self, request: &SwapRequest, cancel: &CancellationToken) -> Result<ImageRef>;
}

/// Stand-in processor: waits a fixed delay and returns a placeholder.
#[derive(Clone, Debug)]
pub struct MockSwapProcessor {
    delay: Duration,
    result: ImageRef,
}

impl MockSwapProcessor {
    pub fn new(delay: Duration, result: ImageRef) -> Self {
        Self { delay, result }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self::new(delay, ImageRef::new(PLACEHOLDER_RESULT))
    }
}

impl Default for MockSwapProcessor {
    fn default() -> Self {
        Self::with_delay(SWAP_DELAY)
    }
}

impl SwapProcessor for MockSwapProcessor {
    fn process(&self, request: &SwapRequest, cancel: &CancellationToken) -> Result<ImageRef> {
        tracing::debug!(
            "Mock swap {} for {} + {}",
            request.ticket,
            request.customer,
            request.outfit
        );
        wait_cancellable(self.delay, cancel)?;
        Ok(self.result.clone())
    }
}

/// Processor that always reports a failure after its delay.
#[derive(Clone, Debug)]
pub struct FailingSwapProcessor {
    delay: Duration,
    reason: String,
}

impl FailingSwapProcessor {
    pub fn new(delay: Duration, reason: impl Into<String>) -> Self {
        Self {
            delay,
            reason: reason.into(),
        }
    }
}

impl SwapProcessor for FailingSwapProcessor {
    fn process(&self, _request: &SwapRequest, cancel: &CancellationToken) -> Result<ImageRef> {
        wait_cancellable(self.delay, cancel)?;
        Err(FitSwapError::SwapFailed(self.reason.clone()))
    }
}

/// Sleep for `delay` in short slices, bailing out once `cancel` is set.
fn wait_cancellable(delay: Duration, cancel: &CancellationToken) -> Result<()> {
    let deadline = Instant::now() + delay;
    loop {
        if cancel.is_cancelled() {
            return Err(FitSwapError::Cancelled);
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(());
        }
        std::thread::sleep(CANCEL_POLL_INTERVAL.min(deadline - now));
    }
}
