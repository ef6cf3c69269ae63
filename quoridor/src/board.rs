//! Board geometry: bounds checks and which wall slots sever which edges. Nothing here holds state.

use itertools::iproduct;

use super::{Position, Wall, WallOrientation};

pub fn is_valid_position(board_size: usize, row: isize, col: isize) -> bool {
    let size = board_size as isize;
    (0..size).contains(&row) && (0..size).contains(&col)
}

pub fn contains(board_size: usize, position: &Position) -> bool {
    position.row < board_size && position.col < board_size
}

pub fn is_valid_wall_anchor(board_size: usize, wall: &Wall) -> bool {
    wall.row < board_size - 1 && wall.col < board_size - 1
}

/// The wall slots that would sever the edge between two adjacent cells.
///
/// A vertical step is cut by a horizontal wall anchored on the upper of the two rows at the
/// same column or the column to the left. A horizontal step is cut by a vertical wall anchored
/// on the left of the two columns at the same row or the row above.
pub fn blocking_wall_slots(a: &Position, b: &Position) -> [Option<Wall>; 2] {
    debug_assert!(a.is_adjacent(b), "{:?} and {:?} are not adjacent", a, b);

    if a.col == b.col {
        let row = a.row.min(b.row);
        [
            Some(Wall::horizontal(row, a.col)),
            a.col.checked_sub(1).map(|col| Wall::horizontal(row, col)),
        ]
    } else {
        let col = a.col.min(b.col);
        [
            Some(Wall::vertical(a.row, col)),
            a.row.checked_sub(1).map(|row| Wall::vertical(row, col)),
        ]
    }
}

/// Every anchor slot on the board, row by row, horizontal before vertical.
pub fn all_wall_slots(board_size: usize) -> impl Iterator<Item = Wall> {
    let anchors = board_size.saturating_sub(1);
    iproduct!(0..anchors, 0..anchors, WallOrientation::ALL)
        .map(|(row, col, orientation)| Wall::new(row, col, orientation))
}
