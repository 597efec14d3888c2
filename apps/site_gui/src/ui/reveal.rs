//! Scroll-triggered reveal of page sections.
//!
//! Every animated section owns a [`VisibilityWatch`] that compares the
//! section's rectangle against the scroll viewport each frame until the
//! section has been seen once. The first sighting latches the watch for
//! good and starts a one-shot fade-and-rise.

use egui::{Rect, Ui};

/// Fraction of a section that must be inside the viewport to count as seen.
pub const DEFAULT_VISIBLE_FRACTION: f32 = 0.1;
/// The viewport's bottom edge is pulled up this much, so sections reveal a
/// little after they enter rather than at the very first pixel.
pub const VIEWPORT_BOTTOM_INSET: f32 = 50.0;
/// How long the fade-and-rise plays once a section is seen.
pub const REVEAL_DURATION_SECS: f64 = 0.6;
/// How far a revealing section rises while fading in.
pub const REVEAL_SLIDE_PX: f32 = 30.0;

/// One-way latch that fires when enough of a rectangle becomes visible.
#[derive(Debug, Clone)]
pub struct VisibilityWatch {
    threshold: f32,
    bottom_inset: f32,
    seen: bool,
}

impl Default for VisibilityWatch {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBLE_FRACTION, VIEWPORT_BOTTOM_INSET)
    }
}

impl VisibilityWatch {
    pub fn new(threshold: f32, bottom_inset: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            bottom_inset,
            seen: false,
        }
    }

    pub fn seen(&self) -> bool {
        self.seen
    }

    /// Compares the section against the viewport. Returns true exactly once,
    /// on the frame the section first counts as visible; afterwards the
    /// watch is latched and does no further work.
    pub fn observe(&mut self, section: Rect, viewport: Rect) -> bool {
        if self.seen {
            return false;
        }

        let mut effective = viewport;
        effective.max.y -= self.bottom_inset;
        if !effective.is_positive() || !section.intersects(effective) {
            return false;
        }

        // A section with no area that still intersects counts as fully visible.
        let fraction = if section.area() <= f32::EPSILON {
            1.0
        } else {
            section.intersect(effective).area() / section.area()
        };

        if fraction >= self.threshold {
            self.seen = true;
            return true;
        }
        false
    }
}

/// Wraps a block of page content in a one-shot fade-and-rise.
pub struct RevealSection {
    watch: VisibilityWatch,
    delay_secs: f64,
    revealed_at: Option<f64>,
}

impl Default for RevealSection {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealSection {
    pub fn new() -> Self {
        Self {
            watch: VisibilityWatch::default(),
            delay_secs: 0.0,
            revealed_at: None,
        }
    }

    /// Staggers the start of the animation after the section is seen.
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_secs = delay_ms as f64 / 1000.0;
        self
    }

    pub fn revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    /// Lays out the wrapped content, faded out and shifted down until the
    /// section has been seen and its animation has played.
    pub fn show<R>(&mut self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
        let now = ui.ctx().input(|i| i.time);
        let progress = self.progress(now);

        ui.add_space(REVEAL_SLIDE_PX * (1.0 - progress));
        let inner = ui.scope(|ui| {
            ui.multiply_opacity(progress);
            add_contents(ui)
        });

        if self.revealed_at.is_none() {
            let viewport = ui.clip_rect();
            if self.watch.observe(inner.response.rect, viewport) {
                self.revealed_at = Some(now);
            }
        }

        if self.animating(now) {
            ui.ctx().request_repaint();
        }

        inner.inner
    }

    fn progress(&self, now: f64) -> f32 {
        match self.revealed_at {
            None => 0.0,
            Some(at) => {
                let raw = ((now - at - self.delay_secs) / REVEAL_DURATION_SECS).clamp(0.0, 1.0);
                ease_out_cubic(raw as f32)
            }
        }
    }

    fn animating(&self, now: f64) -> bool {
        match self.revealed_at {
            None => false,
            Some(at) => now - at < self.delay_secs + REVEAL_DURATION_SECS,
        }
    }
}

/// Delay for the `index`-th sibling in a staggered group of sections.
pub fn stagger_delay_ms(index: usize, step_ms: u64) -> u64 {
    index as u64 * step_ms
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn viewport() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 600.0))
    }

    fn section(top: f32, bottom: f32) -> Rect {
        Rect::from_min_max(pos2(0.0, top), pos2(100.0, bottom))
    }

    #[test]
    fn watch_fires_once_and_latches() {
        let mut watch = VisibilityWatch::new(0.1, 0.0);
        assert!(watch.observe(section(100.0, 300.0), viewport()));
        assert!(watch.seen());
        assert!(!watch.observe(section(100.0, 300.0), viewport()));
        // Even a fully hidden rect cannot unlatch it.
        assert!(!watch.observe(section(10_000.0, 10_100.0), viewport()));
        assert!(watch.seen());
    }

    #[test]
    fn visible_fraction_is_compared_against_the_threshold() {
        // Section is 200 tall; 50 of it pokes into the 600 tall viewport,
        // so a quarter of it is visible.
        let poking_in = section(550.0, 750.0);

        let mut quarter = VisibilityWatch::new(0.25, 0.0);
        assert!(quarter.observe(poking_in, viewport()), "exactly at threshold");

        let mut stricter = VisibilityWatch::new(0.26, 0.0);
        assert!(!stricter.observe(poking_in, viewport()));
        assert!(!stricter.seen());

        let mut any_pixel = VisibilityWatch::new(0.0, 0.0);
        assert!(any_pixel.observe(section(599.0, 799.0), viewport()));
    }

    #[test]
    fn bottom_inset_shrinks_the_viewport() {
        // With a 50 inset the effective viewport ends at y=550.
        let mut watch = VisibilityWatch::new(0.1, 50.0);
        assert!(
            !watch.observe(section(560.0, 660.0), viewport()),
            "section only inside the excluded strip"
        );
        assert!(
            watch.observe(section(500.0, 600.0), viewport()),
            "half of the visible part clears the threshold"
        );
    }

    #[test]
    fn offscreen_sections_never_fire() {
        let mut watch = VisibilityWatch::default();
        assert!(!watch.observe(section(700.0, 900.0), viewport()));
        assert!(!watch.observe(section(-300.0, -100.0), viewport()));
        assert!(!watch.seen());
    }

    #[test]
    fn zero_area_sections_count_as_fully_visible() {
        let dot = Rect::from_min_max(pos2(100.0, 100.0), pos2(100.0, 100.0));
        let mut watch = VisibilityWatch::new(1.0, 0.0);
        assert!(watch.observe(dot, viewport()));
    }

    #[test]
    fn thresholds_are_clamped_into_the_unit_range() {
        let mut watch = VisibilityWatch::new(7.3, 0.0);
        assert!(watch.observe(section(0.0, 100.0), viewport()));

        let mut negative = VisibilityWatch::new(-1.0, 0.0);
        assert!(negative.observe(section(599.0, 799.0), viewport()));
    }

    #[test]
    fn degenerate_effective_viewport_stops_all_reveals() {
        let mut watch = VisibilityWatch::new(0.1, 600.0);
        assert!(!watch.observe(section(0.0, 100.0), viewport()));
    }

    #[test]
    fn progress_waits_out_the_stagger_delay() {
        let mut reveal = RevealSection::new().with_delay_ms(200);
        reveal.revealed_at = Some(10.0);

        assert_eq!(reveal.progress(10.1), 0.0, "still inside the delay");
        assert_eq!(reveal.progress(10.2), 0.0, "delay boundary");
        let mid = reveal.progress(10.5);
        assert!(mid > 0.0 && mid < 1.0, "animating at {mid}");
        assert_eq!(reveal.progress(10.8), 1.0, "animation finished");
        assert_eq!(reveal.progress(99.0), 1.0);
    }

    #[test]
    fn animation_window_covers_delay_plus_duration() {
        let mut reveal = RevealSection::new().with_delay_ms(200);
        assert!(!reveal.animating(5.0), "nothing animates before the latch");

        reveal.revealed_at = Some(10.0);
        assert!(reveal.animating(10.0));
        assert!(reveal.animating(10.79));
        assert!(!reveal.animating(10.8));
    }

    #[test]
    fn unrevealed_sections_render_fully_hidden() {
        let reveal = RevealSection::new();
        assert!(!reveal.revealed());
        assert_eq!(reveal.progress(123.0), 0.0);
    }

    #[test]
    fn ease_out_cubic_hits_its_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5, "eases out, front-loaded");
    }

    #[test]
    fn stagger_walks_up_in_even_steps() {
        assert_eq!(stagger_delay_ms(0, 100), 0);
        assert_eq!(stagger_delay_ms(3, 100), 300);
        assert_eq!(stagger_delay_ms(2, 80), 160);
    }
}
