//! Axis label text.

use crate::layout::LABEL_WIDTH;

/// Number of time markers along the x axis, including both ends.
pub const TIME_MARKERS: usize = 5;

/// Compact duration: seconds under a minute, minutes under an hour, then
/// hours, always with one decimal place.
pub fn format_duration(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{seconds:.1}s")
    } else if seconds < 3600.0 {
        format!("{:.1}m", seconds / 60.0)
    } else {
        format!("{:.1}h", seconds / 3600.0)
    }
}

/// Y-axis label for a megabyte value, cut to the label column and
/// right-justified within it.
pub fn value_label(value_mb: f64) -> String {
    // Scales around a flat zero dip below it; memory is never negative.
    let shown = if value_mb > 0.0 { value_mb } else { 0.0 };
    let text = format!("{shown:.0}MB");
    let cut: String = text.chars().take(LABEL_WIDTH).collect();
    format!("{cut:>LABEL_WIDTH$}")
}

/// `(column offset, fraction of the time span)` for each x-axis marker
/// across a plot `width` columns wide: `0, w/4, w/2, 3w/4, w`.
pub fn time_markers(width: usize) -> impl Iterator<Item = (usize, f64)> {
    let last = TIME_MARKERS - 1;
    (0..TIME_MARKERS).map(move |i| (i * width / last, i as f64 / last as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_pick_unit() {
        assert_eq!(format_duration(30.0), "30.0s");
        assert_eq!(format_duration(125.0), "2.1m");
        assert_eq!(format_duration(7200.0), "2.0h");
        assert_eq!(format_duration(0.0), "0.0s");
        assert_eq!(format_duration(59.9), "59.9s");
        assert_eq!(format_duration(3599.0), "60.0m");
    }

    #[test]
    fn value_labels_are_right_justified() {
        assert_eq!(value_label(120.0), "   120MB");
        assert_eq!(value_label(99.6), "   100MB");
    }

    #[test]
    fn negative_values_label_as_zero() {
        assert_eq!(value_label(-0.5), "     0MB");
        assert_eq!(value_label(-0.0), "     0MB");
    }

    #[test]
    fn long_value_labels_are_truncated() {
        let label = value_label(123_456_789.0);
        assert_eq!(label, "12345678");
        assert_eq!(label.chars().count(), LABEL_WIDTH);
    }

    #[test]
    fn markers_split_width_in_quarters() {
        let markers: Vec<_> = time_markers(12).collect();
        assert_eq!(
            markers,
            vec![(0, 0.0), (3, 0.25), (6, 0.5), (9, 0.75), (12, 1.0)]
        );
    }
}
