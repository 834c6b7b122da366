use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, HtmlElement, Window};

/// Scroll offset past which the header swaps to its scrolled appearance.
pub const NAV_SCROLL_THRESHOLD: f64 = 10.0;
/// Linear parallax coefficient applied to the hero visual.
pub const HERO_PARALLAX_COEFFICIENT: f64 = 0.28;
/// Total vertical travel of the image-break layer across its on-screen lifetime.
pub const BREAK_PARALLAX_TRAVEL: f64 = 80.0;

/// True once the page has scrolled past the header threshold.
pub fn is_past_threshold(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Offset for a layer that tracks scroll position linearly.
pub fn linear_offset(scroll_y: f64, coefficient: f64) -> f64 {
    scroll_y * coefficient
}

/// Normalized progress of a layer through the viewport: 0 before its container
/// enters at the bottom, 1 after it leaves at the top.
pub fn band_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let span = viewport_height + rect_height;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / span).clamp(0.0, 1.0)
}

/// Maps band progress to a vertical offset centered at the midpoint, moving
/// against the scroll direction.
pub fn band_offset(progress: f64, travel: f64) -> f64 {
    (progress - 0.5) * -travel
}

/// Applies parallax transforms to the hero visual and the image-break layer on
/// every scroll event, and once immediately at attach so the initial render is
/// correct. Dropping the reactor removes the listener.
pub struct ScrollReactor {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollReactor {
    pub fn attach(window: &Window, document: &Document) -> Result<Self, JsValue> {
        let hero = document
            .query_selector(".hero__image")?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let break_img = document
            .query_selector(".image-break__img")?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        // Initial compute, before any scroll event arrives.
        apply_parallax(window, hero.as_ref(), break_img.as_ref());

        let callback = {
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                apply_parallax(&window, hero.as_ref(), break_img.as_ref());
            }) as Box<dyn FnMut()>)
        };

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self {
            window: window.clone(),
            callback,
        })
    }
}

impl Drop for ScrollReactor {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "scroll",
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

fn apply_parallax(window: &Window, hero: Option<&HtmlElement>, break_img: Option<&HtmlElement>) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    if let Some(hero) = hero {
        let offset = linear_offset(scroll_y, HERO_PARALLAX_COEFFICIENT);
        let _ = hero
            .style()
            .set_property("transform", &format!("translateY({}px)", offset));
    }

    if let Some(img) = break_img {
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        if let Some(container) = img.parent_element() {
            let rect = container.get_bounding_client_rect();
            let progress = band_progress(rect.top(), rect.height(), viewport_height);
            let offset = band_offset(progress, BREAK_PARALLAX_TRAVEL);
            let _ = img
                .style()
                .set_property("transform", &format!("translateY({}px)", offset));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_flag_matches_scroll_position() {
        assert!(!is_past_threshold(0.0, NAV_SCROLL_THRESHOLD));
        assert!(!is_past_threshold(10.0, NAV_SCROLL_THRESHOLD));
        assert!(is_past_threshold(10.5, NAV_SCROLL_THRESHOLD));
        // Crossing back restores the unscrolled state.
        assert!(!is_past_threshold(3.0, NAV_SCROLL_THRESHOLD));
    }

    #[test]
    fn linear_offset_is_proportional() {
        assert_eq!(linear_offset(100.0, 0.5), 50.0);
        assert_eq!(linear_offset(0.0, HERO_PARALLAX_COEFFICIENT), 0.0);
        // Doubling the scroll position doubles the offset.
        let a = linear_offset(200.0, HERO_PARALLAX_COEFFICIENT);
        let b = linear_offset(400.0, HERO_PARALLAX_COEFFICIENT);
        assert_eq!(b, 2.0 * a);
    }

    #[test]
    fn band_progress_clamps_to_unit_interval() {
        // Container fully below the viewport.
        assert_eq!(band_progress(1200.0, 400.0, 800.0), 0.0);
        // Container fully above the viewport.
        assert_eq!(band_progress(-600.0, 400.0, 800.0), 1.0);
        // Top edge exactly at the viewport bottom.
        assert_eq!(band_progress(800.0, 400.0, 800.0), 0.0);
        // Midpoint of travel.
        assert_eq!(band_progress(200.0, 400.0, 800.0), 0.5);
    }

    #[test]
    fn band_progress_is_monotonic_in_scroll() {
        // Scrolling down lowers rect_top, which must never lower progress.
        let mut last = 0.0;
        for step in 0..=20 {
            let top = 900.0 - step as f64 * 100.0;
            let p = band_progress(top, 400.0, 800.0);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn band_offset_is_centered_and_inverted() {
        assert_eq!(band_offset(0.5, BREAK_PARALLAX_TRAVEL), 0.0);
        assert_eq!(band_offset(0.0, BREAK_PARALLAX_TRAVEL), 40.0);
        assert_eq!(band_offset(1.0, BREAK_PARALLAX_TRAVEL), -40.0);
    }

    #[test]
    fn degenerate_geometry_does_not_divide_by_zero() {
        assert_eq!(band_progress(0.0, 0.0, 0.0), 0.0);
    }
}
