use std::fmt;

use crate::types::Side;

/// Square N×N grid of cells, row-major. A cell is `Some(side)` for an
/// occupied square or `None` for an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Option<Side>>,
}

impl Board {
    /// Fresh board: fully occupied alternating checkerboard, First in the
    /// top-left corner, with the row-start colour flipped at each row
    /// boundary when N is even. No empty cells; emptiness is created only
    /// by opening moves.
    pub fn new(size: u8) -> Self {
        debug_assert!(size >= 3, "board size below 3 has no opening squares");
        let n = usize::from(size);
        let mut cells = Vec::with_capacity(n * n);
        let mut value = Side::First;
        for _ in 0..n {
            for _ in 0..n {
                cells.push(Some(value));
                value = value.other();
            }
            if size % 2 == 0 {
                value = value.other();
            }
        }
        Self { size, cells }
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, r: i32, c: i32) -> bool {
        r >= 0 && c >= 0 && r < i32::from(self.size) && c < i32::from(self.size)
    }

    #[inline]
    fn idx(&self, r: u8, c: u8) -> usize {
        debug_assert!(r < self.size && c < self.size);
        usize::from(r) * usize::from(self.size) + usize::from(c)
    }

    #[inline]
    pub fn get(&self, r: u8, c: u8) -> Option<Side> {
        self.cells[self.idx(r, c)]
    }

    #[inline]
    pub fn set(&mut self, r: u8, c: u8, cell: Option<Side>) {
        let i = self.idx(r, c);
        self.cells[i] = cell;
    }

    /// True iff `(r, c)` is on the board and holds exactly `cell`.
    /// Off-board coordinates match nothing, including `None`.
    #[inline]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn contains(&self, r: i32, c: i32, cell: Option<Side>) -> bool {
        if self.in_bounds(r, c) {
            self.get(r as u8, c as u8) == cell
        } else {
            false
        }
    }

    #[inline]
    pub fn count(&self, cell: Option<Side>) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Opening phase: at most one cell has been vacated so far.
    #[inline]
    pub fn is_opening(&self) -> bool {
        self.count(None) <= 1
    }
}

impl fmt::Display for Board {
    /// Header row of column indices, then each row prefixed by its index
    /// with space-separated cells (`B`, `W`, `.`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..self.size {
            write!(f, "{c} ")?;
        }
        writeln!(f)?;
        for r in 0..self.size {
            write!(f, "{r} ")?;
            for c in 0..self.size {
                let sym = match self.get(r, c) {
                    Some(side) => side.symbol(),
                    None => '.',
                };
                write!(f, "{sym} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
