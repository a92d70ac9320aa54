use crate::image_ref::ImageRef;

/// Identifies one `begin_swap` call. Tickets increase monotonically per
/// `ViewState`, so a completion carrying an older ticket is stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SwapTicket(pub(crate) u64);

impl SwapTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SwapTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Inputs handed to the swap-processing collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapRequest {
    pub ticket: SwapTicket,
    pub customer: ImageRef,
    pub outfit: ImageRef,
}
