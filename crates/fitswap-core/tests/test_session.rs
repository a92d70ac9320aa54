#[allow(dead_code)]
mod common;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use fitswap_core::consts::{PLACEHOLDER_RESULT, SWAP_DELAY};
use fitswap_core::swap::{
    CancellationToken, MockSwapProcessor, SwapObserver, SwapProcessor, SwapRequest, SwapTicket,
};
use fitswap_core::{
    Catalog, FitSwapError, ImageRef, PhotoSlot, Result, Session, SessionEvent, SwapPhase,
};

fn load_photos(session: &mut Session) {
    session.set_photo(PhotoSlot::Customer, common::customer());
    session.set_photo(PhotoSlot::Outfit, common::outfit());
}

#[derive(Default)]
struct CountingObserver(AtomicUsize);

impl SwapObserver for CountingObserver {
    fn on_swap_finished(&self, _ticket: SwapTicket) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_production_delay_is_one_and_a_half_seconds() {
    assert_eq!(SWAP_DELAY, Duration::from_millis(1500));
}

#[test]
fn test_swap_completes_after_delay() {
    let mut session = common::mock_session(common::FAST_DELAY);
    load_photos(&mut session);

    let start = Instant::now();
    let ticket = session.begin_swap().unwrap();
    assert!(session.state().is_processing());

    let event = session.wait_for_swap(common::WAIT_TIMEOUT).unwrap();
    assert!(start.elapsed() >= common::FAST_DELAY);
    match event {
        SessionEvent::SwapCompleted { ticket: done, image } => {
            assert_eq!(done, ticket);
            assert_eq!(image.as_str(), PLACEHOLDER_RESULT);
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(!session.state().is_processing());
    assert_eq!(session.state().phase(), &SwapPhase::Ready);
    assert!(session.state().result_photo().is_some());
}

#[test]
fn test_poll_before_delay_changes_nothing() {
    let mut session = common::mock_session(Duration::from_millis(300));
    load_photos(&mut session);
    session.begin_swap().unwrap();

    assert!(session.poll().is_empty());
    assert!(session.state().is_processing());
    assert!(session.state().result_photo().is_none());
}

#[test]
fn test_double_begin_yields_single_completion() {
    let observer = Arc::new(CountingObserver::default());
    let mut session = Session::new(
        Catalog::builtin(),
        Arc::new(MockSwapProcessor::with_delay(common::FAST_DELAY)),
        observer.clone(),
    );
    load_photos(&mut session);

    session.begin_swap().unwrap();
    let err = session.begin_swap().unwrap_err();
    assert!(matches!(err, FitSwapError::SwapInFlight));

    assert!(session.wait_for_swap(common::WAIT_TIMEOUT).is_some());
    std::thread::sleep(common::FAST_DELAY * 4);
    assert!(session.poll().is_empty());
    assert_eq!(observer.0.load(Ordering::SeqCst), 1);
}

#[test]
fn test_reset_cancels_pending_swap() {
    let observer = Arc::new(CountingObserver::default());
    let mut session = Session::new(
        Catalog::builtin(),
        Arc::new(MockSwapProcessor::with_delay(Duration::from_millis(150))),
        observer.clone(),
    );
    load_photos(&mut session);
    let ticket = session.begin_swap().unwrap();

    assert_eq!(session.reset_all(), Some(ticket));
    std::thread::sleep(Duration::from_millis(400));

    assert!(session.poll().is_empty());
    assert!(session.state().result_photo().is_none());
    assert_eq!(session.state().phase(), &SwapPhase::Idle);
    assert_eq!(observer.0.load(Ordering::SeqCst), 0);
}

#[test]
fn test_failed_swap_reports_reason() {
    let mut session = common::failing_session(common::FAST_DELAY, "no face detected");
    load_photos(&mut session);
    let ticket = session.begin_swap().unwrap();

    let event = session.wait_for_swap(common::WAIT_TIMEOUT).unwrap();
    assert_eq!(
        event,
        SessionEvent::SwapFailed {
            ticket,
            reason: "no face detected".into()
        }
    );
    assert!(session.state().result_photo().is_none());
    assert!(session.acknowledge_failure());
    assert_eq!(session.state().phase(), &SwapPhase::Idle);
}

#[test]
fn test_wait_without_pending_swap_returns_none() {
    let mut session = common::mock_session(common::FAST_DELAY);
    assert!(session.wait_for_swap(Duration::from_millis(10)).is_none());
}

#[test]
fn test_begin_swap_precondition_leaves_session_idle() {
    let mut session = common::mock_session(common::FAST_DELAY);
    session.set_photo(PhotoSlot::Outfit, common::outfit());

    assert!(matches!(
        session.begin_swap(),
        Err(FitSwapError::PreconditionNotMet(_))
    ));
    assert!(!session.state().is_processing());
    assert!(session.state().customer_photo().is_none());
}

/// Waits until cancelled (or a long timeout) and records which happened.
struct CancelAwareProcessor {
    saw_cancel: Arc<AtomicBool>,
}

impl SwapProcessor for CancelAwareProcessor {
    fn process(&self, _request: &SwapRequest, cancel: &CancellationToken) -> Result<ImageRef> {
        let deadline = Instant::now() + common::WAIT_TIMEOUT;
        while Instant::now() < deadline {
            if cancel.is_cancelled() {
                self.saw_cancel.store(true, Ordering::SeqCst);
                return Err(FitSwapError::Cancelled);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        Ok(ImageRef::from("late"))
    }
}

#[test]
fn test_dropping_session_cancels_pending_swap() {
    let saw_cancel = Arc::new(AtomicBool::new(false));
    let observer = Arc::new(CountingObserver::default());
    let mut session = Session::new(
        Catalog::builtin(),
        Arc::new(CancelAwareProcessor {
            saw_cancel: saw_cancel.clone(),
        }),
        observer.clone(),
    );
    load_photos(&mut session);
    session.begin_swap().unwrap();

    drop(session);

    let deadline = Instant::now() + common::WAIT_TIMEOUT;
    while !saw_cancel.load(Ordering::SeqCst) && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert!(saw_cancel.load(Ordering::SeqCst));
    assert_eq!(observer.0.load(Ordering::SeqCst), 0);
}
