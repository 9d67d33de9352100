//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of cell tags (0 = empty, 1..=7 = piece color).
//! Storage is a fixed array of rows so that line clears are plain indexed
//! row replacements and the dimensions can never change.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// One board row
pub type Row = [Cell; WIDTH];

const EMPTY_ROW: Row = [EMPTY; WIDTH];

/// Row indices removed by a single clear, bottom to top.
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [Row; HEIGHT],
}

fn is_valid_tag(cell: Cell) -> bool {
    cell == EMPTY || PieceKind::from_tag(cell).is_some()
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [EMPTY_ROW; HEIGHT],
        }
    }

    /// Build a board from explicit rows.
    ///
    /// Returns `None` if any cell holds a tag outside `0..=7`.
    pub fn from_rows(rows: [Row; HEIGHT]) -> Option<Self> {
        if rows.iter().flatten().all(|&c| is_valid_tag(c)) {
            Some(Self { rows })
        } else {
            None
        }
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<(usize, usize)> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((x as usize, y as usize))
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|(x, y)| self.rows[y][x])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds or if `cell` is not a valid tag
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if !is_valid_tag(cell) {
            return false;
        }
        match Self::index(x, y) {
            Some((x, y)) => {
                self.rows[y][x] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and non-empty)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    pub fn row(&self, y: usize) -> Option<&Row> {
        self.rows.get(y)
    }

    pub fn rows(&self) -> &[Row; HEIGHT] {
        &self.rows
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(|&c| c != EMPTY))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|&c| c == EMPTY)
    }

    /// Write every occupied cell of `shape` at offset (x, y) into the board.
    ///
    /// Cells that fall outside the board (e.g. rows above the top) are skipped.
    /// Returns the number of cells written.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8) -> usize {
        shape
            .occupied()
            .filter(|&(dx, dy, tag)| self.set(x + dx, y + dy, tag))
            .count()
    }

    /// Remove row `y`, shift every row above it down by one and put an empty
    /// row on top.
    fn remove_row(&mut self, y: usize) {
        for r in (1..=y).rev() {
            self.rows[r] = self.rows[r - 1];
        }
        self.rows[0] = EMPTY_ROW;
    }

    /// Clear all full rows.
    ///
    /// Scans bottom to top. After a removal the same index is checked again,
    /// because the row that was above now sits there. Returns the original
    /// indices of the removed rows, bottom to top.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y = HEIGHT;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                // `cleared.len()` rows above have already slid down into view.
                cleared.push(row - cleared.len());
                self.remove_row(row);
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.rows = [EMPTY_ROW; HEIGHT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i8, tag: Cell) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, tag);
        }
    }

    #[test]
    fn index_bounds() {
        assert_eq!(Board::index(0, 0), Some((0, 0)));
        assert_eq!(Board::index(9, 19), Some((9, 19)));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn set_rejects_invalid_tags() {
        let mut board = Board::new();
        assert!(!board.set(0, 0, 8));
        assert_eq!(board.get(0, 0), Some(EMPTY));
        assert!(board.set(0, 0, 7));
        assert!(board.is_occupied(0, 0));
    }

    #[test]
    fn from_rows_validates_tags() {
        let mut rows = [EMPTY_ROW; HEIGHT];
        rows[3][4] = 2;
        assert!(Board::from_rows(rows).is_some());
        rows[3][5] = 9;
        assert!(Board::from_rows(rows).is_none());
    }

    #[test]
    fn clearing_row_zero_leaves_empty_top() {
        let mut board = Board::new();
        fill_row(&mut board, 0, 4);
        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[0]);
        assert!(board.is_empty());
    }

    #[test]
    fn contiguous_full_rows_report_original_indices() {
        let mut board = Board::new();
        fill_row(&mut board, 18, 1);
        fill_row(&mut board, 19, 1);
        board.set(0, 17, 3);

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 18]);
        assert_eq!(board.get(0, 19), Some(3));
        assert_eq!(board.get(0, 17), Some(EMPTY));
    }

    #[test]
    fn whole_board_full_clears_every_row() {
        let mut board = Board::new();
        for y in 0..BOARD_HEIGHT as i8 {
            fill_row(&mut board, y, 5);
        }
        let cleared = board.clear_full_rows();
        assert_eq!(cleared.len(), HEIGHT);
        assert!(board.is_empty());
    }
}
