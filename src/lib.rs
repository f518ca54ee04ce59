//! A headless element-visibility sensor for scrollable UIs.
//!
//! Given an element embedded in a scrollable/resizable container hierarchy, this crate
//! classifies it as completely visible, partially visible, or gone, and notifies a listener
//! only when that classification changes.
//!
//! It is UI-agnostic. A GUI/TUI adapter is expected to provide:
//! - the element's globally visible rect (clipped by ancestors) and drawn rect (unclipped)
//! - the reference rect visibility is measured against (typically the window area)
//! - lifecycle/geometry signals (attach, detach, layout, scroll, window visibility, ...)
//! - one [`VisibilityTracker::on_frame`] call per render/update cycle to drain coalesced
//!   evaluations
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod classifier;
mod options;
mod state;
mod tracker;
mod types;


pub use classifier::{Classifier, area_show_all, classify, fully_contained, partially_overlaps};
pub use options::{
    ContainerHiddenProbe, RectProvider, ReferenceRect, TrackerOptions, VisibilityListener,
};
pub use state::TrackerState;
pub use tracker::VisibilityTracker;
pub use types::{Rect, VisibleState};
