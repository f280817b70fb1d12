//! ASCII line-chart renderer for a memory time series.
//!
//! Each frame is laid out from scratch against the screen's current size:
//!
//! ```text
//! row 0      title
//! row 1      (padding)
//! rows 2..   y labels │ gridlines + plotted line
//! rows-2     current value and elapsed time
//! rows-1     time labels
//! ```
//!
//! The renderer knows nothing about timers or processes; it is handed the
//! full [`History`] and a [`Screen`] on every draw.

pub mod axis;
pub mod buffer;
pub mod layout;
pub mod line;
pub mod plan;

pub use buffer::GridBuffer;
pub use layout::ChartLayout;
pub use plan::{RenderPlan, Scale};

use layout::{PLOT_LEFT, PLOT_TOP};
use memgraph_core::{History, Result, Screen};
use memgraph_theme::Theme;

/// Draws the memory chart for one monitored process.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    title: String,
    theme: Theme,
}

impl ChartRenderer {
    pub fn new(title: impl Into<String>, theme: Theme) -> Self {
        Self { title: title.into(), theme }
    }

    /// Renderer titled `Memory Usage for PID <pid> (<name>)`.
    ///
    /// The name is chosen by the target process, so control characters are
    /// shown as `^X` rather than reaching the terminal.
    pub fn for_process(pid: u32, name: &str, theme: Theme) -> Self {
        Self::new(format!("Memory Usage for PID {pid} ({})", printable(name)), theme)
    }

    /// Render `history` into `screen` and commit the frame.
    ///
    /// Writes that fall outside the grid are dropped individually; only a
    /// failing commit is reported.
    pub fn draw<S: Screen + ?Sized>(&self, history: &History, screen: &mut S) -> Result<()> {
        screen.clear();
        let layout = ChartLayout::new(screen.size());

        self.draw_title(screen, &layout);

        if history.len() > 1 && layout.has_plot_area() {
            if let Some(plan) = RenderPlan::build(history, layout.plot_width) {
                self.draw_value_axis(screen, &layout, &plan.scale);
                self.draw_time_axis(screen, &layout, history);
                line::draw_line(screen, &layout, &plan, &self.theme.glyphs);
            }
        }

        draw_status(screen, &layout, history);

        screen.commit()
    }

    fn draw_title<S: Screen + ?Sized>(&self, screen: &mut S, layout: &ChartLayout) {
        let max = layout.dims.cols.saturating_sub(1);
        let title: String = self.title.chars().take(max).collect();
        write(screen, 0, 0, &title);
    }

    /// Y labels and the dotted background row behind each plot row.
    fn draw_value_axis<S: Screen + ?Sized>(&self, screen: &mut S, layout: &ChartLayout, scale: &Scale) {
        let gridline: String = std::iter::repeat(self.theme.glyphs.grid)
            .take(layout.plot_width)
            .collect();

        for i in 0..layout.plot_height {
            let row = PLOT_TOP + i;
            let value = scale.value_at_row(i, layout.plot_height);
            write(screen, row, 0, &axis::value_label(value));
            write(screen, row, PLOT_LEFT, &gridline);
        }
    }

    /// Time labels along the bottom row, each with a dotted column above it.
    fn draw_time_axis<S: Screen + ?Sized>(&self, screen: &mut S, layout: &ChartLayout, history: &History) {
        let (Some(first), Some(last)) = (history.first(), history.last()) else {
            return;
        };
        let duration = last.elapsed_secs - first.elapsed_secs;

        for (offset, fraction) in axis::time_markers(layout.plot_width) {
            let col = PLOT_LEFT + offset;

            if offset > 0 && offset < layout.plot_width {
                for row in PLOT_TOP..=layout.plot_bottom() {
                    if let Err(e) = screen.put_char(row, col, self.theme.glyphs.grid) {
                        tracing::trace!(%e, "time gridline clipped");
                    }
                }
            }

            let Some(axis_row) = layout.axis_row() else { continue };
            let label = axis::format_duration(first.elapsed_secs + duration * fraction);
            if col + label.chars().count() > layout.dims.cols {
                tracing::trace!(%label, col, "time label does not fit; skipped");
                continue;
            }
            write(screen, axis_row, col, &label);
        }
    }
}

/// Current value and total elapsed time.
fn draw_status<S: Screen + ?Sized>(screen: &mut S, layout: &ChartLayout, history: &History) {
    let (Some(row), Some(latest)) = (layout.status_row(), history.last()) else {
        return;
    };
    let text = format!(
        "Current: {:.1}MB  Duration: {}",
        latest.value_mb,
        axis::format_duration(latest.elapsed_secs),
    );
    write(screen, row, 0, &text);
}

/// Caret notation for control characters (`ESC` -> `^[`, `DEL` -> `^?`).
fn printable(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{0}'..='\u{1f}' => {
                out.push('^');
                out.push(char::from(ch as u8 + b'@'));
            }
            '\u{7f}' => out.push_str("^?"),
            c if c.is_control() => out.push('?'),
            c => out.push(c),
        }
    }
    out
}

fn write<S: Screen + ?Sized>(screen: &mut S, row: usize, col: usize, text: &str) {
    if let Err(e) = screen.put_str(row, col, text) {
        tracing::trace!(%e, "text clipped");
    }
}
