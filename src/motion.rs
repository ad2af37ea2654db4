//! Scroll-linked scale and entrance transitions.

/// Scale at the top and bottom of the page.
pub const SCROLL_SCALE_RANGE: (f64, f64) = (1.0, 1.2);

/// Delay added per card index for staggered entrances.
pub const STAGGER_MS: u32 = 200;

/// Fraction of the scrollable extent that has been scrolled past.
///
/// A page shorter than the viewport cannot scroll and reports 0.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let extent = scroll_height - viewport_height;
    if extent <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / extent).clamp(0.0, 1.0)
}

/// Linear map of scroll progress onto [`SCROLL_SCALE_RANGE`].
pub fn scroll_scale(progress: f64) -> f64 {
    let (from, to) = SCROLL_SCALE_RANGE;
    from + (to - from) * progress.clamp(0.0, 1.0)
}

/// One-shot transition played when an element is revealed.
///
/// The element starts transparent and `offset_y` pixels below its resting
/// position, then settles over `duration_ms` after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    pub offset_y: u32,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Entrance {
    pub const fn fade(duration_ms: u32) -> Self {
        Self {
            offset_y: 0,
            duration_ms,
            delay_ms: 0,
        }
    }

    pub const fn rise(duration_ms: u32) -> Self {
        Self {
            offset_y: 20,
            duration_ms,
            delay_ms: 0,
        }
    }

    /// Delays the entrance by [`STAGGER_MS`] for each preceding sibling.
    pub const fn staggered(self, index: usize) -> Self {
        Self {
            delay_ms: STAGGER_MS * index as u32,
            ..self
        }
    }

    /// Inline style for the hidden or revealed state.
    pub fn style(&self, revealed: bool) -> String {
        let (opacity, offset) = if revealed { (1, 0) } else { (0, self.offset_y) };
        format!(
            "opacity: {opacity}; transform: translateY({offset}px); transition: opacity {d}ms ease-out {w}ms, transform {d}ms ease-out {w}ms;",
            d = self.duration_ms,
            w = self.delay_ms,
        )
    }
}

/// Latches the first time an element is seen. Later visibility changes are
/// ignored, so a revealed element never hides again.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn observe(&mut self, visible: bool) -> bool {
        self.revealed |= visible;
        self.revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{a} != {b}");
    }

    #[test]
    fn test_scroll_scale_endpoints() {
        assert_close(scroll_scale(0.0), 1.0);
        assert_close(scroll_scale(0.5), 1.1);
        assert_close(scroll_scale(1.0), 1.2);
    }

    #[test]
    fn test_scroll_scale_is_linear() {
        for i in 0..=100 {
            let p = i as f64 / 100.0;
            assert_close(scroll_scale(p), 1.0 + 0.2 * p);
        }
    }

    #[test]
    fn test_scroll_scale_clamps() {
        assert_close(scroll_scale(-3.0), 1.0);
        assert_close(scroll_scale(7.0), 1.2);
    }

    #[test]
    fn test_scroll_progress() {
        assert_close(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_close(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_close(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        // overscroll on touch devices
        assert_close(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_close(scroll_progress(2100.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_scroll_progress_unscrollable_page() {
        assert_close(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_close(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_entrance_stagger() {
        let delays: Vec<u32> = (0..6)
            .map(|i| Entrance::rise(500).staggered(i).delay_ms)
            .collect();
        assert_eq!(delays, vec![0, 200, 400, 600, 800, 1000]);
    }

    #[test]
    fn test_entrance_style() {
        let entrance = Entrance::rise(500).staggered(1);
        assert_eq!(
            entrance.style(false),
            "opacity: 0; transform: translateY(20px); transition: opacity 500ms ease-out 200ms, transform 500ms ease-out 200ms;"
        );
        assert_eq!(
            entrance.style(true),
            "opacity: 1; transform: translateY(0px); transition: opacity 500ms ease-out 200ms, transform 500ms ease-out 200ms;"
        );
        assert!(Entrance::fade(1000).style(false).contains("translateY(0px)"));
    }

    #[test]
    fn test_reveal_latch_is_one_shot() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.observe(false));
        assert!(latch.is_revealed());
    }
}
