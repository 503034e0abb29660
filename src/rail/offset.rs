/// Margin past the last item so it never sits flush against the viewport edge
pub const DEFAULT_SLACK: f64 = 80.0;

/// Fixed item geometry of the rail, in whatever unit the surface draws in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RailGeometry {
    pub item_size: f64,
    pub item_gap: f64,
    pub slack: f64,
}

impl Default for RailGeometry {
    fn default() -> Self {
        Self {
            item_size: 170.0,
            item_gap: 28.0,
            slack: DEFAULT_SLACK,
        }
    }
}

impl RailGeometry {
    pub fn new(item_size: f64, item_gap: f64, slack: f64) -> Self {
        Self {
            item_size: item_size.max(0.0),
            item_gap: item_gap.max(0.0),
            slack: slack.max(0.0),
        }
    }

    /// Distance between the starts of two neighbouring items
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.item_size + self.item_gap
    }

    /// Left edge of the item at `index`, before scrolling
    #[must_use]
    pub fn item_start(&self, index: usize) -> f64 {
        index as f64 * self.pitch()
    }

    #[must_use]
    pub fn content_width(&self, item_count: usize) -> f64 {
        if item_count == 0 {
            return 0.0;
        }
        item_count as f64 * self.pitch() - self.item_gap
    }

    #[must_use]
    pub fn max_offset(&self, item_count: usize, viewport_width: f64) -> f64 {
        let max = self.content_width(item_count) - viewport_width + self.slack;
        if max.is_finite() { max.max(0.0) } else { 0.0 }
    }
}

/// Horizontal scroll that centres the focused item, pinned to `[0, max_offset]`.
/// A focus index past the end is treated as the last item.
#[must_use]
pub fn compute_offset(
    focus_index: usize,
    geometry: &RailGeometry,
    item_count: usize,
    viewport_width: f64,
) -> f64 {
    if item_count == 0 {
        return 0.0;
    }
    let focus = focus_index.min(item_count - 1);
    let max = geometry.max_offset(item_count, viewport_width);
    let raw = geometry.item_start(focus) + geometry.item_size / 2.0 - viewport_width / 2.0
        + geometry.item_gap / 2.0;

    if raw.is_finite() { raw.clamp(0.0, max) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_content_width() {
        let geometry = RailGeometry::default();
        assert_eq!(geometry.content_width(0), 0.0);
        assert_eq!(geometry.content_width(1), 170.0);
        assert_eq!(geometry.content_width(6), 1160.0);
    }

    #[test]
    fn test_last_item_pins_to_max_offset() {
        let geometry = RailGeometry::default();
        let max = geometry.max_offset(6, 800.0);
        assert_eq!(max, 440.0);
        // raw centred value would be 689
        assert_eq!(compute_offset(5, &geometry, 6, 800.0), max);
    }

    #[test]
    fn test_first_item_pins_to_zero() {
        let geometry = RailGeometry::default();
        assert_eq!(compute_offset(0, &geometry, 6, 800.0), 0.0);
    }

    #[test]
    fn test_middle_item_is_centred() {
        let geometry = RailGeometry::default();
        // 3 * 198 + 85 - 400 + 14
        assert_eq!(compute_offset(3, &geometry, 6, 800.0), 293.0);
    }

    #[test]
    fn test_wide_viewport_never_scrolls() {
        let geometry = RailGeometry::default();
        for focus in 0..6 {
            assert_eq!(compute_offset(focus, &geometry, 6, 4000.0), 0.0);
        }
    }

    #[test]
    fn test_empty_rail_has_no_offset() {
        assert_eq!(compute_offset(0, &RailGeometry::default(), 0, 800.0), 0.0);
    }

    #[test]
    fn test_stale_focus_treated_as_last() {
        let geometry = RailGeometry::default();
        assert_eq!(
            compute_offset(40, &geometry, 6, 800.0),
            compute_offset(5, &geometry, 6, 800.0)
        );
    }

    proptest! {
        #[test]
        fn offset_within_bounds(
            focus in 0usize..64,
            count in 0usize..64,
            size in 0.0f64..400.0,
            gap in 0.0f64..100.0,
            slack in 0.0f64..200.0,
            viewport in 0.0f64..4000.0,
        ) {
            let geometry = RailGeometry::new(size, gap, slack);
            let offset = compute_offset(focus, &geometry, count, viewport);
            prop_assert!(offset >= 0.0);
            prop_assert!(offset <= geometry.max_offset(count, viewport));
        }
    }
}
