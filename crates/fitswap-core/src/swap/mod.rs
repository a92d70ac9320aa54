mod cancel;
mod processor;
mod runner;
mod types;

pub use cancel::CancellationToken;
pub use processor::{FailingSwapProcessor, MockSwapProcessor, SwapProcessor};
pub use runner::{NoOpObserver, SwapHandle, SwapObserver, SwapOutcome, SwapRunner};
pub use types::{SwapRequest, SwapTicket};
