//! Pieces module - tetromino shape matrices and rotation
//!
//! Every shape is a small tagged matrix (at most 4x4). Occupied cells hold the
//! piece's tag, empty cells hold 0. Rotation produces a new matrix; the wall
//! kick search shifts the piece sideways until it fits.

use crate::board::Board;
use crate::collision::collides;
use crate::types::{Cell, PieceKind, EMPTY};

/// Largest side of any shape matrix
pub const MAX_SHAPE: usize = 4;

/// A tagged shape matrix, `width` columns by `height` rows.
///
/// Cells outside `width`/`height` are always empty, so two shapes compare
/// equal exactly when their visible matrices match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[Cell; MAX_SHAPE]; MAX_SHAPE],
}

impl Shape {
    /// Build a shape from row slices. All rows must have the same length.
    ///
    /// Panics if the matrix is empty, ragged or larger than 4x4; shapes are
    /// only built from the fixed tables below and in tests.
    pub fn from_rows(rows: &[&[Cell]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE, "bad shape height");
        let width = rows[0].len();
        assert!(width > 0 && width <= MAX_SHAPE, "bad shape width");

        let mut cells = [[EMPTY; MAX_SHAPE]; MAX_SHAPE];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "ragged shape");
            cells[y][..width].copy_from_slice(row);
        }
        Self {
            width: width as u8,
            height: rows.len() as u8,
            cells,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Tag at (x, y); empty outside the matrix
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x >= self.width as usize || y >= self.height as usize {
            return EMPTY;
        }
        self.cells[y][x]
    }

    /// Iterate occupied cells as `(dx, dy, tag)` offsets from the top-left.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        (0..self.height as usize).flat_map(move |y| {
            (0..self.width as usize).filter_map(move |x| {
                let tag = self.cells[y][x];
                (tag != EMPTY).then_some((x as i8, y as i8, tag))
            })
        })
    }

    /// Rotate 90° clockwise: new cell (y, x) = old cell (old_height - 1 - x, y).
    pub fn rotated(&self) -> Shape {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut cells = [[EMPTY; MAX_SHAPE]; MAX_SHAPE];
        for (y, row) in cells.iter_mut().enumerate().take(w) {
            for (x, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - x][y];
            }
        }
        Shape {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

/// Spawn matrix for a piece kind
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[2, 2], &[2, 2]]),
        PieceKind::T => Shape::from_rows(&[&[0, 3, 0], &[3, 3, 3]]),
        PieceKind::S => Shape::from_rows(&[&[0, 4, 4], &[4, 4, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[5, 5, 0], &[0, 5, 5]]),
        PieceKind::J => Shape::from_rows(&[&[6, 0, 0], &[6, 6, 6]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 7], &[7, 7, 7]]),
    }
}

/// Spawn position (x, y) for a piece kind.
///
/// The 2-wide O sits one column further right so every kind spawns centered.
pub fn spawn_position(kind: PieceKind) -> (i8, i8) {
    match kind {
        PieceKind::O => (4, 0),
        _ => (3, 0),
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of `kind` at its spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = spawn_position(kind);
        Self {
            kind,
            shape: spawn_shape(kind),
            x,
            y,
        }
    }

    /// Color index used for drawing (same as the cell tag)
    pub fn color(&self) -> Cell {
        self.kind.tag()
    }

    pub fn collides(&self, board: &Board) -> bool {
        collides(board, &self.shape, self.x, self.y)
    }

    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Rotate `piece` clockwise and search for a wall kick.
///
/// Trial x offsets are applied cumulatively as +1, -2, +3, -4, ... until the
/// piece fits. The search gives up once the next positive step would exceed
/// the rotated shape's width + 1; `None` then means the caller keeps the
/// original shape and position.
pub fn try_rotate(piece: &Piece, board: &Board) -> Option<Piece> {
    let mut trial = Piece {
        shape: piece.shape.rotated(),
        ..*piece
    };
    let limit = trial.shape.width() as i8 + 1;
    let mut offset: i8 = 1;

    while trial.collides(board) {
        trial.x += offset;
        offset = -(offset + offset.signum());
        if offset > limit {
            return None;
        }
    }

    Some(trial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotated_t_points_right() {
        let t = spawn_shape(PieceKind::T).rotated();
        assert_eq!(t, Shape::from_rows(&[&[3, 0], &[3, 3], &[3, 0]]));
    }

    #[test]
    fn rotated_i_is_vertical() {
        let i = spawn_shape(PieceKind::I).rotated();
        assert_eq!((i.width(), i.height()), (1, 4));
        assert_eq!(i.occupied().count(), 4);
    }

    #[test]
    fn every_spawn_shape_has_four_cells_with_its_tag() {
        for kind in PieceKind::ALL {
            let shape = spawn_shape(kind);
            let cells: Vec<_> = shape.occupied().collect();
            assert_eq!(cells.len(), 4, "{kind:?}");
            assert!(cells.iter().all(|&(_, _, tag)| tag == kind.tag()));
        }
    }

    #[test]
    fn get_outside_matrix_is_empty() {
        let o = spawn_shape(PieceKind::O);
        assert_eq!(o.get(1, 1), 2);
        assert_eq!(o.get(2, 0), EMPTY);
        assert_eq!(o.get(0, 3), EMPTY);
    }

    fn vertical_i_at(x: i8) -> Piece {
        let mut piece = Piece::spawn(PieceKind::I);
        piece.shape = piece.shape.rotated();
        piece.x = x;
        piece.y = 5;
        piece
    }

    #[test]
    fn kick_walks_vertical_i_off_the_right_wall() {
        // Trials: 9, 7, 10, 6 -> fits at 6.
        let board = Board::new();
        let rotated = try_rotate(&vertical_i_at(8), &board).expect("kick should succeed");
        assert_eq!(rotated.shape.width(), 4);
        assert_eq!(rotated.x, 6);
        assert!(!rotated.collides(&board));
    }

    #[test]
    fn kick_search_bound_rejects_far_right_vertical_i() {
        // The search stops before trying x = 6, so this rotation is refused.
        let board = Board::new();
        assert!(try_rotate(&vertical_i_at(9), &board).is_none());
    }

    #[test]
    fn rotation_without_collision_keeps_position() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::T);
        piece.y = 5;
        let rotated = try_rotate(&piece, &board).unwrap();
        assert_eq!((rotated.x, rotated.y), (piece.x, piece.y));
        assert_eq!(rotated.shape, piece.shape.rotated());
    }
}
