use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Marker class that tags an element as a reveal candidate.
pub const REVEAL_CLASS: &str = "reveal";
/// Marker class added once the element has entered the viewport.
pub const VISIBLE_CLASS: &str = "visible";

const THRESHOLD: f64 = 0.15;
const ROOT_MARGIN: &str = "0px 0px -40px 0px";
const STAGGER_STEP_MS: u32 = 100;

/// Delay before flipping the Nth still-pending sibling to visible.
pub fn stagger_delay_ms(pending_index: usize) -> u32 {
    pending_index as u32 * STAGGER_STEP_MS
}

/// Index of `target` among its still-pending siblings, in DOM order.
///
/// `visible` holds one flag per `.reveal` child of the shared parent, DOM order;
/// `target` indexes into that same list. Already-visible siblings don't count,
/// so a candidate revealed on its own after its group gets index 0 again.
pub fn pending_index(visible: &[bool], target: usize) -> Option<usize> {
    if *visible.get(target)? {
        return None;
    }
    Some(visible[..target].iter().filter(|v| !**v).count())
}

/// Observes every `.reveal` element present at attach time and flips each to
/// `.visible` exactly once when it intersects the viewport, staggered by sibling
/// order. Dropping the revealer disconnects the observer and cancels any stagger
/// timeouts that have not fired yet.
pub struct ScrollReveal {
    observer: IntersectionObserver,
    // Kept alive for the observer's lifetime; dropped with the struct.
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    timeouts: Rc<RefCell<Vec<Timeout>>>,
}

impl ScrollReveal {
    pub fn attach(document: &Document) -> Result<Self, JsValue> {
        let timeouts: Rc<RefCell<Vec<Timeout>>> = Rc::new(RefCell::new(Vec::new()));

        let callback = {
            let timeouts = timeouts.clone();
            Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        // Stop observing before the delayed flip so the element can
                        // never qualify twice.
                        observer.unobserve(&target);
                        schedule_reveal(&target, &timeouts);
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(THRESHOLD));
        options.set_root_margin(ROOT_MARGIN);

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        // One-shot discovery; candidates added later are not observed.
        let candidates = document.query_selector_all(&format!(".{}", REVEAL_CLASS))?;
        for i in 0..candidates.length() {
            if let Some(el) = candidates.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&el);
            }
        }

        Ok(Self {
            observer,
            _callback: callback,
            timeouts,
        })
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
        // Dropping the handles cancels any stagger still in flight.
        self.timeouts.borrow_mut().clear();
    }
}

fn schedule_reveal(target: &Element, timeouts: &Rc<RefCell<Vec<Timeout>>>) {
    let delay = stagger_delay_ms(dom_pending_index(target));
    let target = target.clone();
    let handle = Timeout::new(delay, move || {
        let _ = target.class_list().add_1(VISIBLE_CLASS);
    });
    timeouts.borrow_mut().push(handle);
}

/// Position of `target` among its parent's direct `.reveal` children that are
/// still pending, in DOM order. No parent or no match means reveal immediately.
fn dom_pending_index(target: &Element) -> usize {
    let Some(parent) = target.parent_element() else {
        return 0;
    };
    let Ok(siblings) = parent.query_selector_all(&format!(":scope > .{}", REVEAL_CLASS)) else {
        return 0;
    };
    let mut visible = Vec::with_capacity(siblings.length() as usize);
    let mut position = None;
    for i in 0..siblings.length() {
        let Some(el) = siblings.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if el == *target {
            position = Some(visible.len());
        }
        visible.push(el.class_list().contains(VISIBLE_CLASS));
    }
    position
        .and_then(|p| pending_index(&visible, p))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_scales_linearly_with_pending_index() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 100);
        assert_eq!(stagger_delay_ms(4), 400);
    }

    #[test]
    fn pending_index_counts_only_pending_siblings() {
        // Nothing revealed yet: index equals DOM position.
        assert_eq!(pending_index(&[false, false, false], 0), Some(0));
        assert_eq!(pending_index(&[false, false, false], 2), Some(2));

        // Earlier siblings already visible are skipped.
        assert_eq!(pending_index(&[true, false, false], 1), Some(0));
        assert_eq!(pending_index(&[true, true, false], 2), Some(0));
        assert_eq!(pending_index(&[true, false, false], 2), Some(1));
    }

    #[test]
    fn pending_index_rejects_already_visible_target() {
        assert_eq!(pending_index(&[true, false], 0), None);
    }

    #[test]
    fn lone_candidate_reveals_immediately() {
        assert_eq!(pending_index(&[false], 0), Some(0));
        assert_eq!(stagger_delay_ms(0), 0);
    }

    #[test]
    fn group_reveal_order_matches_dom_order() {
        let visible = [false; 5];
        let delays: Vec<u32> = (0..5)
            .map(|i| stagger_delay_ms(pending_index(&visible, i).unwrap()))
            .collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400]);
    }
}
