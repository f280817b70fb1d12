//! Vertical scaling and column reduction for one frame.

use crate::layout::PLOT_TOP;
use memgraph_core::History;

/// Value span mapped onto the plot rows. `range` is always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub min:   f64,
    pub max:   f64,
    pub range: f64,
}

impl Scale {
    /// Span of `values`, or `None` if there are none.
    ///
    /// A flat series gets a non-zero range centred on its value so the line
    /// sits mid-scale instead of dividing by zero: one unit wide, or
    /// `[0, 2v]` for values under half a unit so the span stays non-negative.
    /// A flat zero series spans `[-0.5, 0.5]`.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let (min, max) = values
            .into_iter()
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })?;

        let range = max - min;
        if range > 0.0 {
            return Some(Self { min, max, range });
        }
        let v = min;
        if v > 0.0 && v < 0.5 {
            return Some(Self { min: 0.0, max: 2.0 * v, range: 2.0 * v });
        }
        Some(Self { min: v - 0.5, max: v + 0.5, range: 1.0 })
    }

    /// Value represented by plot row `index` (0 = top) of `height` rows,
    /// interpolated linearly from `max` down to `min`.
    pub fn value_at_row(&self, index: usize, height: usize) -> f64 {
        if height <= 1 {
            return self.max;
        }
        self.max - index as f64 * self.range / (height - 1) as f64
    }

    /// Screen row for `value` in a plot of `height` rows starting at
    /// [`PLOT_TOP`], clamped to the plot area.
    pub fn row_for(&self, value: f64, height: usize) -> usize {
        let span = height.saturating_sub(1);
        let offset = ((self.max - value) * span as f64 / self.range).round();
        let offset = if offset.is_finite() { offset.clamp(0.0, span as f64) } else { 0.0 };
        PLOT_TOP + offset as usize
    }
}

/// Reduce `values` to at most `width` points.
///
/// Up to `width` values are used as-is. Beyond that, column `i` averages
/// the chunk `[i*n/width, (i+1)*n/width)`; later chunks absorb the remainder.
pub fn downsample(values: &[f64], width: usize) -> Vec<f64> {
    let n = values.len();
    if n <= width {
        return values.to_vec();
    }

    (0..width)
        .filter_map(|i| {
            let chunk = &values[i * n / width..(i + 1) * n / width];
            (!chunk.is_empty()).then(|| chunk.iter().sum::<f64>() / chunk.len() as f64)
        })
        .collect()
}

/// Everything the line needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub scale:  Scale,
    pub points: Vec<f64>,
}

impl RenderPlan {
    /// `None` for an empty history or zero plot width.
    pub fn build(history: &History, plot_width: usize) -> Option<Self> {
        if plot_width == 0 {
            return None;
        }
        let scale = Scale::from_values(history.values())?;
        let values: Vec<f64> = history.values().collect();
        Some(Self { scale, points: downsample(&values, plot_width) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memgraph_core::Sample;
    use proptest::prelude::*;

    fn history(values: &[f64]) -> History {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Sample::new(i as f64, v))
            .collect()
    }

    #[test]
    fn scale_spans_min_to_max() {
        let scale = Scale::from_values([100.0, 120.0, 110.0]).unwrap();
        assert_eq!(scale, Scale { min: 100.0, max: 120.0, range: 20.0 });
    }

    #[test]
    fn flat_series_gets_unit_range_centred_on_value() {
        let scale = Scale::from_values([50.0; 8]).unwrap();
        assert_eq!(scale.range, 1.0);
        assert_eq!(scale.min, 49.5);
        assert_eq!(scale.max, 50.5);
        // 11 rows: value sits on the middle one.
        assert_eq!(scale.row_for(50.0, 11), PLOT_TOP + 5);
    }

    #[test]
    fn flat_small_value_is_mid_scale() {
        let scale = Scale::from_values([0.2; 4]).unwrap();
        assert_eq!(scale.min, 0.0);
        assert!(scale.range > 0.0);
        assert_eq!(scale.row_for(0.2, 11), PLOT_TOP + 5);
    }

    #[test]
    fn flat_zero_series_is_mid_scale() {
        let scale = Scale::from_values([0.0, 0.0]).unwrap();
        assert_eq!(scale.range, 1.0);
        assert_eq!(scale.row_for(0.0, 11), PLOT_TOP + 5);
    }

    #[test]
    fn empty_values_have_no_scale() {
        assert!(Scale::from_values(std::iter::empty()).is_none());
    }

    #[test]
    fn row_labels_interpolate_top_to_bottom() {
        let scale = Scale::from_values([0.0, 100.0]).unwrap();
        assert_eq!(scale.value_at_row(0, 5), 100.0);
        assert_eq!(scale.value_at_row(2, 5), 50.0);
        assert_eq!(scale.value_at_row(4, 5), 0.0);
        assert_eq!(scale.value_at_row(0, 1), 100.0);
    }

    #[test]
    fn rows_are_clamped_to_plot() {
        let scale = Scale::from_values([10.0, 20.0]).unwrap();
        assert_eq!(scale.row_for(1_000.0, 6), PLOT_TOP);
        assert_eq!(scale.row_for(-1_000.0, 6), PLOT_TOP + 5);
        assert_eq!(scale.row_for(15.0, 1), PLOT_TOP);
    }

    #[test]
    fn exact_width_is_used_one_to_one() {
        let values: Vec<f64> = (0..12).map(|v| v as f64 * 3.0).collect();
        assert_eq!(downsample(&values, 12), values);
    }

    #[test]
    fn fifty_samples_into_ten_columns_average_chunks_of_five() {
        let values: Vec<f64> = (0..50).map(f64::from).collect();
        let points = downsample(&values, 10);
        assert_eq!(points.len(), 10);
        for (i, p) in points.iter().enumerate() {
            let start = (i * 50 / 10) as f64;
            assert_eq!(*p, start + 2.0);
        }
    }

    #[test]
    fn remainder_goes_to_later_chunks() {
        // 7 into 3: boundaries 0,2,4,7.
        let values = [1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 3.0];
        assert_eq!(downsample(&values, 3), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn plan_uses_raw_points_when_they_fit() {
        let plan = RenderPlan::build(&history(&[100.0, 120.0, 110.0]), 12).unwrap();
        assert_eq!(plan.points, vec![100.0, 120.0, 110.0]);
        assert_eq!(plan.scale.range, 20.0);
    }

    #[test]
    fn plan_needs_width_and_samples() {
        assert!(RenderPlan::build(&history(&[1.0, 2.0]), 0).is_none());
        assert!(RenderPlan::build(&History::unbounded(), 10).is_none());
    }

    proptest! {
        #[test]
        fn points_never_exceed_width(
            values in prop::collection::vec(0.0f64..1e6, 0..400),
            width in 1usize..200,
        ) {
            prop_assert!(downsample(&values, width).len() <= width);
        }

        #[test]
        fn downsampled_points_stay_within_scale(
            values in prop::collection::vec(0.0f64..1e6, 2..400),
            width in 1usize..200,
        ) {
            let scale = Scale::from_values(values.iter().copied()).unwrap();
            for p in downsample(&values, width) {
                prop_assert!(p >= scale.min - 1e-6 && p <= scale.max + 1e-6);
            }
        }

        #[test]
        fn plotted_rows_map_back_within_one_row(
            values in prop::collection::vec(0.0f64..1e6, 2..100),
            height in 2usize..60,
        ) {
            let scale = Scale::from_values(values.iter().copied()).unwrap();
            let row_step = scale.range / (height - 1) as f64;
            for v in values {
                let row = scale.row_for(v, height);
                prop_assert!((PLOT_TOP..PLOT_TOP + height).contains(&row));
                let back = scale.value_at_row(row - PLOT_TOP, height);
                prop_assert!(back >= scale.min - 1e-6 && back <= scale.max + 1e-6);
                prop_assert!((back - v).abs() <= row_step + 1e-6);
            }
        }
    }
}
