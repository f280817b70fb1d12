use memgraph_core::{GridDimensions, Result, Screen, WriteOverflow};

/// In-memory [`Screen`]: a plain character grid.
///
/// Used headlessly in tests and as the back buffer of the terminal screen.
/// A size change requested with [`GridBuffer::set_size`] takes effect at the
/// next [`Screen::clear`], mirroring a terminal that is resized between frames.
#[derive(Debug, Clone)]
pub struct GridBuffer {
    dims:    GridDimensions,
    pending: Option<GridDimensions>,
    cells:   Vec<Vec<char>>,
    commits: usize,
}

impl GridBuffer {
    pub fn new(dims: GridDimensions) -> Self {
        Self {
            dims,
            pending: None,
            cells: blank(dims),
            commits: 0,
        }
    }

    /// Request a new size for the next frame.
    pub fn set_size(&mut self, dims: GridDimensions) {
        self.pending = Some(dims);
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// One row as a string, trailing blanks included.
    pub fn row_text(&self, row: usize) -> String {
        self.cells.get(row).map(|r| r.iter().collect()).unwrap_or_default()
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(|r| r.iter().collect())
    }

    /// How many frames have been committed.
    pub fn commits(&self) -> usize {
        self.commits
    }
}

fn blank(dims: GridDimensions) -> Vec<Vec<char>> {
    vec![vec![' '; dims.cols]; dims.rows]
}

impl Screen for GridBuffer {
    fn clear(&mut self) {
        if let Some(dims) = self.pending.take() {
            self.dims = dims;
        }
        self.cells = blank(self.dims);
    }

    fn size(&self) -> GridDimensions {
        self.dims
    }

    fn put_char(&mut self, row: usize, col: usize, ch: char) -> Result<(), WriteOverflow> {
        if !self.dims.contains(row, col) {
            return Err(WriteOverflow { row, col });
        }
        self.cells[row][col] = ch;
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.commits += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_write_is_reported_not_applied() {
        let mut buf = GridBuffer::new(GridDimensions::new(2, 3));
        assert_eq!(buf.put_char(1, 3, 'x'), Err(WriteOverflow { row: 1, col: 3 }));
        assert!(buf.put_char(5, 0, 'x').is_err());
        assert!(buf.rows().all(|r| r == "   "));
    }

    #[test]
    fn put_str_writes_the_part_that_fits() {
        let mut buf = GridBuffer::new(GridDimensions::new(1, 4));
        let err = buf.put_str(0, 1, "abcdef").unwrap_err();
        assert_eq!(err, WriteOverflow { row: 0, col: 4 });
        assert_eq!(buf.row_text(0), " abc");
    }

    #[test]
    fn resize_applies_on_clear() {
        let mut buf = GridBuffer::new(GridDimensions::new(2, 2));
        buf.set_size(GridDimensions::new(3, 5));
        assert_eq!(buf.size(), GridDimensions::new(2, 2));
        buf.clear();
        assert_eq!(buf.size(), GridDimensions::new(3, 5));
        assert_eq!(buf.row_text(2), "     ");
    }
}
