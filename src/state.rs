use crate::{Rect, VisibleState};

/// A lightweight snapshot of a tracker's bookkeeping.
///
/// Useful for diagnostics and for persisting the last-known classification across host
/// teardown. With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerState {
    pub attached: bool,
    pub window_visible: bool,
    pub reference_rect: Rect,
    pub visible_state: VisibleState,
    pub evaluation_pending: bool,
}
