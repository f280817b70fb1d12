use memgraph_core::GridDimensions;

/// Width of the right-justified y-axis label column.
pub const LABEL_WIDTH: usize = 8;
/// First plot column: label column plus one separator.
pub const PLOT_LEFT: usize = LABEL_WIDTH + 1;
/// First plot row: title on row 0, padding on row 1.
pub const PLOT_TOP: usize = 2;

const RESERVED_ROWS: usize = 4;
const RESERVED_COLS: usize = 12;

/// Where each part of the chart goes for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    pub dims:        GridDimensions,
    /// Rows available to the line; zero when the grid is too short.
    pub plot_height: usize,
    /// Columns available to the line; zero when the grid is too narrow.
    pub plot_width:  usize,
}

impl ChartLayout {
    pub fn new(dims: GridDimensions) -> Self {
        Self {
            dims,
            plot_height: dims.rows.saturating_sub(RESERVED_ROWS),
            plot_width:  dims.cols.saturating_sub(RESERVED_COLS),
        }
    }

    pub fn has_plot_area(&self) -> bool {
        self.plot_height >= 1 && self.plot_width >= 1
    }

    /// Last row inside the plot area.
    pub fn plot_bottom(&self) -> usize {
        PLOT_TOP + self.plot_height.saturating_sub(1)
    }

    /// Row for the current-value line, if the grid has one.
    pub fn status_row(&self) -> Option<usize> {
        self.dims.rows.checked_sub(2)
    }

    /// Row for the time labels, if the grid has one.
    pub fn axis_row(&self) -> Option<usize> {
        self.dims.rows.checked_sub(1)
    }
}
