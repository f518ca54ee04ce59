// Example: a feed card scrolling through a viewport, with edge-triggered notifications.
use std::sync::{Arc, Mutex};

use visibility_sensor::{Rect, TrackerOptions, VisibilityTracker};

const VIEWPORT: Rect = Rect::new(0, 1000, 0, 1000);

fn card_at(scroll: i32) -> Rect {
    let top = 1200 - scroll;
    Rect::new(top, top + 300, 100, 500)
}

fn clip(r: Rect) -> Option<Rect> {
    let clipped = Rect::new(
        r.top.max(VIEWPORT.top),
        r.bottom.min(VIEWPORT.bottom),
        r.left.max(VIEWPORT.left),
        r.right.min(VIEWPORT.right),
    );
    (!clipped.is_empty()).then_some(clipped)
}

fn main() {
    let scroll = Arc::new(Mutex::new(0));

    let global_src = Arc::clone(&scroll);
    let drawn_src = Arc::clone(&scroll);
    let options = TrackerOptions::new(
        move || clip(card_at(*global_src.lock().unwrap())),
        move || Some(card_at(*drawn_src.lock().unwrap())),
    )
    .with_reference_rect(VIEWPORT)
    .with_listener(|state| println!("transition -> {state:?}"));

    let mut tracker = VisibilityTracker::new(options);
    tracker.on_attach();
    tracker.on_frame();

    for step in 1..=20 {
        *scroll.lock().unwrap() = step * 100;
        // A real adapter may see many scroll events per frame; they coalesce.
        tracker.on_scroll_changed();
        tracker.on_scroll_changed();
        tracker.on_frame();
    }

    println!("final state: {:?}", tracker.visible_state());
    println!("visible to user: {}", tracker.is_visible_to_user(false));
}
