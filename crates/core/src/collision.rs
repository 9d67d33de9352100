//! Collision detection between a shape placement and the board.

use crate::board::Board;
use crate::pieces::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// True if `shape` placed with its top-left at (x, y) overlaps a wall, the
/// floor or an occupied board cell.
///
/// Cells above the top row are not collisions: a freshly rotated or kicked
/// piece may poke out of the board there.
pub fn collides(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
    shape.occupied().any(|(dx, dy, _)| {
        let bx = x + dx;
        let by = y + dy;
        if bx < 0 || bx >= BOARD_WIDTH as i8 || by >= BOARD_HEIGHT as i8 {
            return true;
        }
        by >= 0 && board.is_occupied(bx, by)
    })
}
