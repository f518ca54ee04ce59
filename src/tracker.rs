use alloc::sync::Arc;

use crate::classifier::Classifier;
use crate::{Rect, ReferenceRect, TrackerOptions, TrackerState, VisibilityListener, VisibleState};

/// A headless visibility tracker.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; geometry arrives through the providers in
///   [`TrackerOptions`].
/// - Your adapter drives it by forwarding host signals (`on_attach`, `on_scroll_changed`,
///   `on_window_visibility_changed`, ...).
/// - Signals never evaluate synchronously. Each one marks an evaluation pending, and the
///   adapter drains it with one [`on_frame`](Self::on_frame) call per render/update cycle,
///   so a scroll firing many times per frame still costs one classification.
///
/// Notification is edge-triggered: the listener fires only when the classified
/// [`VisibleState`] differs from the last stored one.
#[derive(Clone, Debug)]
pub struct VisibilityTracker {
    options: TrackerOptions,
    reference_rect: Rect,
    attached: bool,
    window_visible: bool,
    visible_state: VisibleState,
    classifier: Classifier,
    eval_pending: bool,
    reference_stale: bool,
}

impl VisibilityTracker {
    /// Creates a tracker from options.
    ///
    /// The reference rect is resolved once up front; the tracker starts detached with a
    /// cached state of [`VisibleState::Gone`] and nothing pending.
    pub fn new(options: TrackerOptions) -> Self {
        let reference_rect = options.reference.resolve();
        vdebug!(
            ?reference_rect,
            has_listener = options.on_visible_state_change.is_some(),
            "VisibilityTracker::new"
        );
        Self {
            options,
            reference_rect,
            attached: false,
            window_visible: true,
            visible_state: VisibleState::Gone,
            classifier: Classifier::new(),
            eval_pending: false,
            reference_stale: false,
        }
    }

    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    /// The last state delivered through (or eligible for) notification.
    ///
    /// This is only as fresh as the last drained evaluation. Callers needing a
    /// point-in-time answer should use [`is_visible_to_user`](Self::is_visible_to_user)
    /// instead.
    pub fn visible_state(&self) -> VisibleState {
        self.visible_state
    }

    pub fn attached(&self) -> bool {
        self.attached
    }

    pub fn reference_rect(&self) -> Rect {
        self.reference_rect
    }

    pub fn has_pending_evaluation(&self) -> bool {
        self.eval_pending
    }

    /// Returns a lightweight snapshot of the tracker's bookkeeping.
    pub fn snapshot(&self) -> TrackerState {
        TrackerState {
            attached: self.attached,
            window_visible: self.window_visible,
            reference_rect: self.reference_rect,
            visible_state: self.visible_state,
            evaluation_pending: self.eval_pending,
        }
    }

    /// Replaces the transition listener, returning the previous one.
    ///
    /// Single slot, last write wins. Pass `None` to detach the listener.
    pub fn set_listener(
        &mut self,
        listener: Option<impl Fn(VisibleState) + Send + Sync + 'static>,
    ) -> Option<VisibilityListener> {
        core::mem::replace(
            &mut self.options.on_visible_state_change,
            listener.map(|f| Arc::new(f) as _),
        )
    }

    /// Replaces the reference rect with a fixed value.
    ///
    /// The replacement is re-snapshotted synchronously (a subsequent
    /// [`reference_rect`](Self::reference_rect) query sees it immediately); the
    /// re-classification it implies is coalesced onto the next frame like any other signal.
    pub fn set_reference_rect(&mut self, reference: Rect) {
        self.options.reference = ReferenceRect::Value(reference);
        self.refresh_reference();
        self.schedule_evaluation();
    }

    /// Replaces the reference rect source with a provider, resolving it synchronously.
    pub fn set_reference_provider(
        &mut self,
        reference: impl Fn() -> Option<Rect> + Send + Sync + 'static,
    ) {
        self.options.reference = ReferenceRect::Provider(Arc::new(reference));
        self.refresh_reference();
        self.schedule_evaluation();
    }

    /// The element entered the live tree.
    pub fn on_attach(&mut self) {
        self.attached = true;
        self.refresh_reference();
        self.schedule_evaluation();
    }

    /// The element left the live tree.
    ///
    /// The final evaluation still runs on the next frame (delivering `Gone` if the element
    /// was visible), but once detached the tracker no longer calls the rect providers.
    pub fn on_detach(&mut self) {
        self.attached = false;
        self.schedule_evaluation();
    }

    /// A layout pass completed somewhere in the host tree.
    pub fn on_global_layout(&mut self) {
        self.schedule_evaluation();
    }

    /// An ancestor scroll position changed.
    pub fn on_scroll_changed(&mut self) {
        self.schedule_evaluation();
    }

    /// The host window became visible or invisible.
    pub fn on_window_visibility_changed(&mut self, visible: bool) {
        self.window_visible = visible;
        self.schedule_evaluation();
    }

    /// A display/configuration change happened (rotation, size class change).
    ///
    /// The reference rect is re-derived at the start of the next frame, not here: the host
    /// tree has not committed the new layout yet, so resolving the provider now would
    /// snapshot stale geometry.
    pub fn on_configuration_changed(&mut self) {
        self.reference_stale = true;
        self.schedule_evaluation();
    }

    fn refresh_reference(&mut self) {
        self.reference_rect = self.options.reference.resolve();
        self.reference_stale = false;
        vtrace!(reference_rect = ?self.reference_rect, "refresh_reference");
    }

    fn schedule_evaluation(&mut self) {
        self.eval_pending = true;
    }

    /// Drains the pending evaluation, if any.
    ///
    /// Call once per render/update cycle of the owning single-threaded loop. Returns the new
    /// state when this frame produced a transition (the listener has already been invoked by
    /// then), and `None` when nothing was pending or the state did not change.
    pub fn on_frame(&mut self) -> Option<VisibleState> {
        if !self.eval_pending {
            return None;
        }
        self.eval_pending = false;
        // A detached element must not touch host objects, including the reference provider.
        // The stale flag survives so a re-attach resolves fresh geometry.
        if self.reference_stale && self.attached {
            self.refresh_reference();
        }

        let current = self.current_visible_state();
        if current == self.visible_state {
            return None;
        }
        vdebug!(previous = ?self.visible_state, ?current, "visible state transition");
        // Store before notifying so a listener that re-queries sees the new state.
        self.visible_state = current;
        if let Some(listener) = &self.options.on_visible_state_change {
            listener(current);
        }
        Some(current)
    }

    /// Synchronous point-in-time visibility query.
    ///
    /// Classifies freshly snapshotted rects, bypassing the cached/debounced state used for
    /// notifications. With `require_fully_visible` the element must be
    /// [`CompletelyVisible`](VisibleState::CompletelyVisible); otherwise partial visibility
    /// counts too.
    pub fn is_visible_to_user(&self, require_fully_visible: bool) -> bool {
        let current = self.current_visible_state();
        if require_fully_visible {
            current == VisibleState::CompletelyVisible
        } else {
            current.is_visible()
        }
    }

    fn current_visible_state(&self) -> VisibleState {
        if !self.attached {
            return VisibleState::Gone;
        }
        if !self.window_visible {
            return VisibleState::Gone;
        }
        if let Some(probe) = &self.options.container_hidden {
            if probe() {
                return VisibleState::Gone;
            }
        }

        // Missing rects mean "not laid out yet" and degrade to the zero rect.
        let global = (self.options.global_visible_rect)().unwrap_or_default();
        let drawn = (self.options.drawn_rect)().unwrap_or_default();
        self.classifier.classify(global, drawn, self.reference_rect)
    }
}
