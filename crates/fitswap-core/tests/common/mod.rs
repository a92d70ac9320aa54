use std::sync::Arc;
use std::time::Duration;

use fitswap_core::swap::{FailingSwapProcessor, MockSwapProcessor, NoOpObserver};
use fitswap_core::{Catalog, ImageRef, Product, Session, ViewState};

/// Short processing delay so lifecycle tests stay fast.
pub const FAST_DELAY: Duration = Duration::from_millis(30);

/// Generous upper bound when waiting for a worker.
pub const WAIT_TIMEOUT: Duration = Duration::from_secs(5);

/// The two-product catalog used by the selection scenarios.
pub fn two_product_catalog() -> Catalog {
    Catalog::new(vec![
        Product::new(1, "Dress", "Tops", "White/M", 1580),
        Product::new(2, "Jeans", "Bottoms", "Light Blue/S", 1280),
    ])
    .expect("valid catalog")
}

pub fn customer() -> ImageRef {
    ImageRef::from("/uploads/customer.jpg")
}

pub fn outfit() -> ImageRef {
    ImageRef::from("/uploads/outfit.jpg")
}

/// View state with both photo slots filled.
pub fn loaded_state() -> ViewState {
    let mut state = ViewState::new(Catalog::builtin());
    state.set_customer_photo(customer());
    state.set_outfit_photo(outfit());
    state
}

/// Session whose swaps succeed after `delay`.
pub fn mock_session(delay: Duration) -> Session {
    Session::new(
        Catalog::builtin(),
        Arc::new(MockSwapProcessor::with_delay(delay)),
        Arc::new(NoOpObserver),
    )
}

/// Session whose swaps fail after `delay`.
pub fn failing_session(delay: Duration, reason: &str) -> Session {
    Session::new(
        Catalog::builtin(),
        Arc::new(FailingSwapProcessor::new(delay, reason)),
        Arc::new(NoOpObserver),
    )
}
