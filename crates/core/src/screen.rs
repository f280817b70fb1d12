use crate::error::{Result, WriteOverflow};

/// Size of the character grid, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub rows: usize,
    pub cols: usize,
}

impl GridDimensions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether `(row, col)` addresses a cell inside the grid.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

/// A character grid that a frame is drawn into and then committed.
///
/// Writes are bounds-checked: an out-of-range cell is left untouched and the
/// write reports [`WriteOverflow`] instead of panicking.
pub trait Screen {
    /// Blank the grid and adopt the current output size.
    ///
    /// Called once at the start of every frame so a resized terminal is
    /// picked up before anything is laid out.
    fn clear(&mut self);

    /// Current grid size.
    fn size(&self) -> GridDimensions;

    /// Write a single cell.
    fn put_char(&mut self, row: usize, col: usize, ch: char) -> Result<(), WriteOverflow>;

    /// Write `text` starting at `(row, col)`, one cell per `char`.
    ///
    /// Cells that fit are written even when the tail overflows.
    fn put_str(&mut self, row: usize, col: usize, text: &str) -> Result<(), WriteOverflow> {
        let mut overflow = None;
        for (offset, ch) in text.chars().enumerate() {
            if let Err(e) = self.put_char(row, col + offset, ch) {
                overflow.get_or_insert(e);
            }
        }
        overflow.map_or(Ok(()), Err)
    }

    /// Push the assembled frame to the output in one operation.
    fn commit(&mut self) -> Result<()>;
}
