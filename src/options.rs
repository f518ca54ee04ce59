use alloc::sync::Arc;

use crate::{Rect, VisibleState};

/// Supplies a rect snapshot from the host UI tree.
///
/// Returning `None` means "not laid out yet"; the tracker treats that as the zero rect,
/// which classifies as [`VisibleState::Gone`].
pub type RectProvider = Arc<dyn Fn() -> Option<Rect> + Send + Sync>;

/// Reports whether an enclosing navigational unit (tab page, pager entry, fragment, ...)
/// currently hides the element. Wired in statically at construction time.
pub type ContainerHiddenProbe = Arc<dyn Fn() -> bool + Send + Sync>;

/// A callback fired when the tracked element's [`VisibleState`] transitions.
pub type VisibilityListener = Arc<dyn Fn(VisibleState) + Send + Sync>;

/// The reference rectangle visibility is measured against.
///
/// Typically the host window's drawable area. A provider is resolved lazily: at attach, when
/// explicitly replaced, and on the frame after a configuration change (so it sees committed
/// post-layout geometry, not stale geometry).
#[derive(Clone)]
pub enum ReferenceRect {
    /// A fixed reference rect.
    Value(Rect),
    /// A lazily evaluated reference rect source (e.g. "the window's current frame").
    Provider(Arc<dyn Fn() -> Option<Rect> + Send + Sync>),
}

impl ReferenceRect {
    pub(crate) fn resolve(&self) -> Rect {
        match self {
            Self::Value(rect) => *rect,
            Self::Provider(f) => f().unwrap_or_default(),
        }
    }
}

impl Default for ReferenceRect {
    fn default() -> Self {
        Self::Value(Rect::default())
    }
}

impl core::fmt::Debug for ReferenceRect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(rect) => f.debug_tuple("Value").field(rect).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::VisibilityTracker`].
///
/// Cheap to clone: closures are stored in `Arc`s, so adapters can tweak a field and rebuild
/// a tracker without reallocating providers.
#[derive(Clone)]
pub struct TrackerOptions {
    /// The element's rect intersected with all ancestor clip regions, global coordinates.
    pub global_visible_rect: RectProvider,
    /// The element's own drawing bounds, unclipped by ancestors.
    pub drawn_rect: RectProvider,
    /// The rect visibility is measured against. Defaults to the zero rect; adapters with a
    /// real window install a provider via [`with_reference_provider`](Self::with_reference_provider).
    pub reference: ReferenceRect,
    /// Optional gate from an enclosing navigational unit; `true` forces
    /// [`VisibleState::Gone`].
    pub container_hidden: Option<ContainerHiddenProbe>,
    /// Single-slot transition listener (last write wins).
    pub on_visible_state_change: Option<VisibilityListener>,
}

impl TrackerOptions {
    /// Creates options from the two required rect providers.
    pub fn new(
        global_visible_rect: impl Fn() -> Option<Rect> + Send + Sync + 'static,
        drawn_rect: impl Fn() -> Option<Rect> + Send + Sync + 'static,
    ) -> Self {
        Self {
            global_visible_rect: Arc::new(global_visible_rect),
            drawn_rect: Arc::new(drawn_rect),
            reference: ReferenceRect::default(),
            container_hidden: None,
            on_visible_state_change: None,
        }
    }

    pub fn with_reference_rect(mut self, reference: Rect) -> Self {
        self.reference = ReferenceRect::Value(reference);
        self
    }

    pub fn with_reference_provider(
        mut self,
        reference: impl Fn() -> Option<Rect> + Send + Sync + 'static,
    ) -> Self {
        self.reference = ReferenceRect::Provider(Arc::new(reference));
        self
    }

    pub fn with_container_hidden_probe(
        mut self,
        probe: impl Fn() -> bool + Send + Sync + 'static,
    ) -> Self {
        self.container_hidden = Some(Arc::new(probe));
        self
    }

    pub fn with_listener(mut self, listener: impl Fn(VisibleState) + Send + Sync + 'static) -> Self {
        self.on_visible_state_change = Some(Arc::new(listener));
        self
    }
}

impl core::fmt::Debug for TrackerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TrackerOptions")
            .field("reference", &self.reference)
            .field("container_hidden", &self.container_hidden.is_some())
            .field(
                "on_visible_state_change",
                &self.on_visible_state_change.is_some(),
            )
            .finish_non_exhaustive()
    }
}
