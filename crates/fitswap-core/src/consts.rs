use std::time::Duration;

/// Fixed delay of the simulated swap between `begin_swap` and completion.
pub const SWAP_DELAY: Duration = Duration::from_millis(1500);

/// Granularity at which the mock processor checks its cancellation token.
pub const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Currency label shown in front of prices.
pub const DEFAULT_CURRENCY: &str = "NT$";

/// Placeholder returned for customer uploads when files are not read.
pub const PLACEHOLDER_CUSTOMER: &str = "/api/placeholder/150/200";

/// Placeholder returned for outfit uploads when files are not read.
pub const PLACEHOLDER_OUTFIT: &str = "/api/placeholder/250/400";

/// Placeholder produced by the mock swap processor.
pub const PLACEHOLDER_RESULT: &str = "/api/placeholder/400/600";

/// File extensions accepted by the file uploader (lowercase).
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "gif"];

/// Name of the worker thread running swap jobs.
pub const SWAP_WORKER_NAME: &str = "fitswap-swap";
