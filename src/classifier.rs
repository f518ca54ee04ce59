use core::cell::Cell;

use crate::{Rect, VisibleState};

/// Whether `global` lies fully inside `container`.
///
/// Edge semantics are half-open on the top/left bound and closed on the bottom/right bound:
/// `top ∈ [c.top, c.bottom)`, `bottom ∈ (c.top, c.bottom]`, and likewise horizontally. An
/// element flush against the container's bottom/right edge therefore still counts as inside,
/// while a zero-height rect sitting exactly on `c.top` does not.
pub fn fully_contained(global: Rect, container: Rect) -> bool {
    global.top >= container.top
        && global.top < container.bottom
        && global.bottom > container.top
        && global.bottom <= container.bottom
        && global.left >= container.left
        && global.left < container.right
        && global.right > container.left
        && global.right <= container.right
}

/// Whether `global` overlaps `container` at all, per the sensor's occlusion heuristic.
///
/// The horizontal test is an OR while the vertical test is an AND. This asymmetry is
/// deliberate and load-bearing: it is the original sensor's heuristic, and "fixing" it to a
/// conventional two-axis AND intersection changes how vertically-disjoint rects classify.
pub fn partially_overlaps(global: Rect, container: Rect) -> bool {
    (global.left < container.right || global.right > container.left)
        && (global.top < container.bottom && global.bottom > container.top)
}

/// Whether the element's own drawing region is fully reflected by its globally visible rect,
/// i.e. ancestor clipping has not eaten into it.
pub fn area_show_all(global: Rect, drawn: Rect) -> bool {
    drawn.area() == global.area()
}

/// Classifies an element's visibility against a reference `container` rect.
///
/// - `global`: the element's rect after clipping by all ancestors, global coordinates.
/// - `drawn`: the element's own drawing bounds before ancestor clipping.
///
/// Pure and total: every well-formed input combination maps to a state, nothing panics.
/// Malformed rects (negative extent) are debug-asserted and classify as `Gone`.
pub fn classify(global: Rect, drawn: Rect, container: Rect) -> VisibleState {
    if !global.is_well_formed() || !drawn.is_well_formed() || !container.is_well_formed() {
        vwarn!(
            ?global,
            ?drawn,
            ?container,
            "classify: malformed rect, treating as Gone"
        );
        debug_assert!(
            global.is_well_formed() && drawn.is_well_formed() && container.is_well_formed(),
            "classify: malformed rect (global={global:?}, drawn={drawn:?}, container={container:?})"
        );
        return VisibleState::Gone;
    }

    let contained = fully_contained(global, container);
    let show_all = area_show_all(global, drawn);

    if contained && show_all {
        VisibleState::CompletelyVisible
    } else if contained && partially_overlaps(global, container) {
        // contained && !show_all: part of the drawing region is clipped away.
        VisibleState::PartiallyVisible
    } else {
        VisibleState::Gone
    }
}

type ClassifyInputs = (Rect, Rect, Rect);

/// A [`classify`] wrapper that memoizes the last evaluation.
///
/// Layout and scroll signals often re-evaluate with unchanged geometry; the memo makes those
/// re-runs free. Interior mutability keeps the query usable from `&self` contexts.
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    memo: Cell<Option<(ClassifyInputs, VisibleState)>>,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(&self, global: Rect, drawn: Rect, container: Rect) -> VisibleState {
        let inputs = (global, drawn, container);
        if let Some((memo_inputs, memo_state)) = self.memo.get() {
            if memo_inputs == inputs {
                return memo_state;
            }
        }
        let state = classify(global, drawn, container);
        self.memo.set(Some((inputs, state)));
        state
    }
}
