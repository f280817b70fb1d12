use crossterm::{
    cursor::{Hide, MoveTo, Show},
    style::{Print, ResetColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand, QueueableCommand,
};
use memgraph_core::{GridDimensions, MemError, Result, Screen, WriteOverflow};
use memgraph_renderer::GridBuffer;
use std::io::{self, Stdout, Write};

/// [`Screen`] drawn on the controlling terminal via crossterm.
///
/// Frames are assembled in a [`GridBuffer`] and written out on commit. The
/// alternate screen and hidden cursor are restored when this is dropped.
pub struct TerminalScreen {
    out:     Stdout,
    buffer:  GridBuffer,
    resized: bool,
}

impl TerminalScreen {
    /// Switch to the alternate screen, hide the cursor and reset colours to
    /// the terminal's defaults.
    pub fn enter() -> Result<Self> {
        let mut out = io::stdout();
        out.execute(EnterAlternateScreen)
            .and_then(|o| o.execute(Hide))
            .and_then(|o| o.execute(ResetColor))
            .and_then(|o| o.execute(Clear(ClearType::All)))
            .map_err(|e| MemError::Terminal(format!("terminal setup failed: {e}")))?;

        Ok(Self {
            out,
            buffer: GridBuffer::new(current_size().unwrap_or(GridDimensions::new(24, 80))),
            resized: false,
        })
    }
}

fn current_size() -> Option<GridDimensions> {
    match terminal::size() {
        Ok((cols, rows)) => Some(GridDimensions::new(rows as usize, cols as usize)),
        Err(e) => {
            tracing::debug!("cannot query terminal size: {e}");
            None
        }
    }
}

impl Screen for TerminalScreen {
    fn clear(&mut self) {
        if let Some(dims) = current_size() {
            if dims != self.buffer.size() {
                self.resized = true;
                self.buffer.set_size(dims);
            }
        }
        self.buffer.clear();
    }

    fn size(&self) -> GridDimensions {
        self.buffer.size()
    }

    fn put_char(&mut self, row: usize, col: usize, ch: char) -> Result<(), WriteOverflow> {
        self.buffer.put_char(row, col, ch)
    }

    fn commit(&mut self) -> Result<()> {
        if std::mem::take(&mut self.resized) {
            self.out.queue(Clear(ClearType::All))?;
        }

        let last = self.buffer.size().rows.saturating_sub(1);
        for (row, mut text) in self.buffer.rows().enumerate() {
            // Printing into the bottom-right cell scrolls some terminals.
            if row == last {
                text.pop();
            }
            self.out.queue(MoveTo(0, row as u16))?;
            self.out.queue(Print(text))?;
        }

        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        let _ = self.out.execute(Show);
        let _ = self.out.execute(LeaveAlternateScreen);
        let _ = self.out.flush();
    }
}
