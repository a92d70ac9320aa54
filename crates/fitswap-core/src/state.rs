//! Session view state: photo slots, swap lifecycle and product selection.
//!
//! All transitions happen on one logical thread. Rejected transitions
//! return an error and leave the state untouched.

use crate::catalog::{Catalog, Product, ProductId};
use crate::error::{FitSwapError, Result, SwapPrecondition};
use crate::image_ref::{ImageRef, PhotoSlot};
use crate::swap::{SwapRequest, SwapTicket};

/// Observable lifecycle of the swap operation.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SwapPhase {
    /// No result and nothing running.
    #[default]
    Idle,
    /// A swap is in flight; only `ticket` may complete it.
    Processing { ticket: SwapTicket },
    /// The last swap produced a result.
    Ready,
    /// The last swap failed; acknowledge or retry.
    Failed { reason: String },
}

impl std::fmt::Display for SwapPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Processing { ticket } => write!(f, "Processing {ticket}"),
            Self::Ready => write!(f, "Ready"),
            Self::Failed { reason } => write!(f, "Failed: {reason}"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ViewState {
    customer_photo: Option<ImageRef>,
    outfit_photo: Option<ImageRef>,
    result_photo: Option<ImageRef>,
    phase: SwapPhase,
    products: Catalog,
    next_ticket: u64,
}

impl ViewState {
    pub fn new(products: Catalog) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    pub fn customer_photo(&self) -> Option<&ImageRef> {
        self.customer_photo.as_ref()
    }

    pub fn outfit_photo(&self) -> Option<&ImageRef> {
        self.outfit_photo.as_ref()
    }

    pub fn result_photo(&self) -> Option<&ImageRef> {
        self.result_photo.as_ref()
    }

    pub fn photo(&self, slot: PhotoSlot) -> Option<&ImageRef> {
        match slot {
            PhotoSlot::Customer => self.customer_photo(),
            PhotoSlot::Outfit => self.outfit_photo(),
        }
    }

    pub fn phase(&self) -> &SwapPhase {
        &self.phase
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.phase, SwapPhase::Processing { .. })
    }

    /// Ticket of the in-flight swap, if any.
    pub fn pending_ticket(&self) -> Option<SwapTicket> {
        match self.phase {
            SwapPhase::Processing { ticket } => Some(ticket),
            _ => None,
        }
    }

    pub fn products(&self) -> &Catalog {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn set_customer_photo(&mut self, image: ImageRef) {
        tracing::debug!("Customer photo set: {image}");
        self.customer_photo = Some(image);
    }

    pub fn set_outfit_photo(&mut self, image: ImageRef) {
        tracing::debug!("Outfit photo set: {image}");
        self.outfit_photo = Some(image);
    }

    pub fn set_photo(&mut self, slot: PhotoSlot, image: ImageRef) {
        match slot {
            PhotoSlot::Customer => self.set_customer_photo(image),
            PhotoSlot::Outfit => self.set_outfit_photo(image),
        }
    }

    /// Empty the customer slot. Refused while a swap is running, since
    /// the in-flight swap still depends on it.
    pub fn clear_customer_photo(&mut self) -> Result<()> {
        self.ensure_not_processing()?;
        self.customer_photo = None;
        Ok(())
    }

    /// Empty the outfit slot. Same restriction as `clear_customer_photo`.
    pub fn clear_outfit_photo(&mut self) -> Result<()> {
        self.ensure_not_processing()?;
        self.outfit_photo = None;
        Ok(())
    }

    pub fn clear_photo(&mut self, slot: PhotoSlot) -> Result<()> {
        match slot {
            PhotoSlot::Customer => self.clear_customer_photo(),
            PhotoSlot::Outfit => self.clear_outfit_photo(),
        }
    }

    /// Clear all three photo fields in one step and abandon any pending
    /// swap. Product selection is kept. Returns the abandoned ticket.
    pub fn reset_all(&mut self) -> Option<SwapTicket> {
        let cancelled = self.pending_ticket();
        self.customer_photo = None;
        self.outfit_photo = None;
        self.result_photo = None;
        self.phase = SwapPhase::Idle;
        if let Some(ticket) = cancelled {
            tracing::info!("Reset abandoned swap {ticket}");
        }
        cancelled
    }

    /// Start a swap if both photos are present and none is running.
    pub fn begin_swap(&mut self) -> Result<SwapRequest> {
        self.ensure_not_processing()?;
        let (customer, outfit) = match (&self.customer_photo, &self.outfit_photo) {
            (Some(c), Some(o)) => (c.clone(), o.clone()),
            (None, Some(_)) => return Err(self.reject(SwapPrecondition::MissingCustomerPhoto)),
            (Some(_), None) => return Err(self.reject(SwapPrecondition::MissingOutfitPhoto)),
            (None, None) => return Err(self.reject(SwapPrecondition::MissingBothPhotos)),
        };

        self.next_ticket += 1;
        let ticket = SwapTicket(self.next_ticket);
        self.phase = SwapPhase::Processing { ticket };
        tracing::info!("Swap {ticket} started");

        Ok(SwapRequest {
            ticket,
            customer,
            outfit,
        })
    }

    /// Apply the result of the pending swap.
    pub fn complete_swap(&mut self, ticket: SwapTicket, image: ImageRef) -> Result<()> {
        self.ensure_pending(ticket)?;
        tracing::info!("Swap {ticket} completed: {image}");
        self.phase = SwapPhase::Ready;
        self.result_photo = Some(image);
        Ok(())
    }

    /// Record a processing failure for the pending swap.
    pub fn fail_swap(&mut self, ticket: SwapTicket, reason: impl Into<String>) -> Result<()> {
        self.ensure_pending(ticket)?;
        let reason = reason.into();
        tracing::warn!("Swap {ticket} failed: {reason}");
        self.phase = SwapPhase::Failed { reason };
        Ok(())
    }

    /// Leave the failed state. Returns false if there was nothing to acknowledge.
    pub fn acknowledge_failure(&mut self) -> bool {
        if !matches!(self.phase, SwapPhase::Failed { .. }) {
            return false;
        }
        self.phase = if self.result_photo.is_some() {
            SwapPhase::Ready
        } else {
            SwapPhase::Idle
        };
        true
    }

    /// Flip the selection flag of a product. Unknown ids leave the state
    /// unchanged and return `false`.
    pub fn toggle_product_selection(&mut self, id: ProductId) -> bool {
        match self.products.toggle(id) {
            Ok(selected) => {
                tracing::debug!("Product {id} selected={selected}");
                true
            }
            Err(e) => {
                tracing::debug!("Ignoring toggle: {e}");
                false
            }
        }
    }

    fn ensure_not_processing(&self) -> Result<()> {
        if let Some(ticket) = self.pending_ticket() {
            tracing::warn!("Rejected while swap {ticket} is running");
            return Err(FitSwapError::SwapInFlight);
        }
        Ok(())
    }

    fn ensure_pending(&self, ticket: SwapTicket) -> Result<()> {
        if self.pending_ticket() != Some(ticket) {
            tracing::debug!("Dropping stale swap {ticket}");
            return Err(FitSwapError::StaleSwap { ticket });
        }
        Ok(())
    }

    fn reject(&self, precondition: SwapPrecondition) -> FitSwapError {
        tracing::warn!("Swap not started: {precondition}");
        FitSwapError::PreconditionNotMet(precondition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> ViewState {
        let mut state = ViewState::new(Catalog::builtin());
        state.set_customer_photo(ImageRef::from("c"));
        state.set_outfit_photo(ImageRef::from("o"));
        state
    }

    #[test]
    fn tickets_increase_across_swaps() {
        let mut state = loaded();
        let first = state.begin_swap().unwrap().ticket;
        state.complete_swap(first, ImageRef::from("r")).unwrap();
        let second = state.begin_swap().unwrap().ticket;
        assert!(second > first);
    }

    #[test]
    fn acknowledge_failure_returns_to_idle_without_result() {
        let mut state = loaded();
        let ticket = state.begin_swap().unwrap().ticket;
        state.fail_swap(ticket, "timeout").unwrap();
        assert_eq!(
            state.phase(),
            &SwapPhase::Failed {
                reason: "timeout".into()
            }
        );
        assert!(state.acknowledge_failure());
        assert_eq!(state.phase(), &SwapPhase::Idle);
        assert!(!state.acknowledge_failure());
    }

    #[test]
    fn failed_swap_keeps_previous_result() {
        let mut state = loaded();
        let first = state.begin_swap().unwrap().ticket;
        state.complete_swap(first, ImageRef::from("r1")).unwrap();
        let second = state.begin_swap().unwrap().ticket;
        state.fail_swap(second, "boom").unwrap();
        assert_eq!(state.result_photo(), Some(&ImageRef::from("r1")));
        assert!(state.acknowledge_failure());
        assert_eq!(state.phase(), &SwapPhase::Ready);
    }
}
