use crate::layout::{ChartLayout, PLOT_LEFT};
use crate::plan::RenderPlan;
use memgraph_core::Screen;
use memgraph_theme::Glyphs;

/// Plot `plan.points` left to right, one column each, joining neighbours
/// with vertical runs.
///
/// In a column where the line moves, the run spans from the previous row to
/// the new one: corners at both ends, bars in between. An unchanged row is a
/// single flat glyph.
pub fn draw_line<S: Screen + ?Sized>(
    screen: &mut S,
    layout: &ChartLayout,
    plan: &RenderPlan,
    glyphs: &Glyphs,
) {
    let mut prev: Option<usize> = None;

    for (x, &value) in plan.points.iter().enumerate().take(layout.plot_width) {
        let y = plan.scale.row_for(value, layout.plot_height);
        let col = PLOT_LEFT + x;
        let from = prev.unwrap_or(y);

        if from == y {
            put(screen, y, col, glyphs.flat);
        } else {
            let (top, bottom) = (from.min(y), from.max(y));
            let falling = from < y;
            let (top_glyph, bottom_glyph) = if falling {
                (glyphs.fall_top, glyphs.fall_bottom)
            } else {
                (glyphs.rise_top, glyphs.rise_bottom)
            };
            put(screen, top, col, top_glyph);
            for row in top + 1..bottom {
                put(screen, row, col, glyphs.vertical);
            }
            put(screen, bottom, col, bottom_glyph);
        }

        prev = Some(y);
    }
}

fn put<S: Screen + ?Sized>(screen: &mut S, row: usize, col: usize, ch: char) {
    if let Err(e) = screen.put_char(row, col, ch) {
        tracing::trace!(%e, "line glyph clipped");
    }
}
