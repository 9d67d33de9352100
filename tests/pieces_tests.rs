//! Pieces tests - spawn table, rotation and wall kicks

use blockfall::core::pieces::{spawn_position, spawn_shape, try_rotate, Piece, Shape};
use blockfall::core::{Board, PieceFactory};
use blockfall::types::{PieceKind, BOARD_WIDTH};

// ============== Spawn Table ==============

#[test]
fn test_spawn_shapes() {
    assert_eq!(spawn_shape(PieceKind::I), Shape::from_rows(&[&[1, 1, 1, 1]]));
    assert_eq!(spawn_shape(PieceKind::O), Shape::from_rows(&[&[2, 2], &[2, 2]]));
    assert_eq!(
        spawn_shape(PieceKind::T),
        Shape::from_rows(&[&[0, 3, 0], &[3, 3, 3]])
    );
    assert_eq!(
        spawn_shape(PieceKind::S),
        Shape::from_rows(&[&[0, 4, 4], &[4, 4, 0]])
    );
    assert_eq!(
        spawn_shape(PieceKind::Z),
        Shape::from_rows(&[&[5, 5, 0], &[0, 5, 5]])
    );
    assert_eq!(
        spawn_shape(PieceKind::J),
        Shape::from_rows(&[&[6, 0, 0], &[6, 6, 6]])
    );
    assert_eq!(
        spawn_shape(PieceKind::L),
        Shape::from_rows(&[&[0, 0, 7], &[7, 7, 7]])
    );
}

#[test]
fn test_spawn_positions_are_top_center() {
    assert_eq!(spawn_position(PieceKind::O), (4, 0));
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.color(), kind.tag());
        let right = piece.x + piece.shape.width() as i8;
        // Within one column of centered.
        let left_gap = piece.x;
        let right_gap = BOARD_WIDTH as i8 - right;
        assert!((left_gap - right_gap).abs() <= 1, "{kind:?}");
    }
}

// ============== Rotation ==============

#[test]
fn test_rotation_formula() {
    let l = spawn_shape(PieceKind::L);
    let r = l.rotated();
    assert_eq!((r.width(), r.height()), (l.height(), l.width()));
    for y in 0..r.height() as usize {
        for x in 0..r.width() as usize {
            assert_eq!(r.get(x, y), l.get(y, l.height() as usize - 1 - x));
        }
    }
    assert_eq!(r, Shape::from_rows(&[&[7, 0], &[7, 0], &[7, 7]]));
}

#[test]
fn test_four_rotations_restore_shape() {
    for kind in PieceKind::ALL {
        let original = spawn_shape(kind);
        let turned = original.rotated().rotated().rotated().rotated();
        assert_eq!(turned, original, "{kind:?}");
    }
}

#[test]
fn test_rotation_keeps_cell_count_and_tag() {
    for kind in PieceKind::ALL {
        let mut shape = spawn_shape(kind);
        for _ in 0..4 {
            shape = shape.rotated();
            assert_eq!(shape.occupied().count(), 4);
            assert!(shape.occupied().all(|(_, _, t)| t == kind.tag()));
        }
    }
}

// ============== Wall Kicks ==============

#[test]
fn test_kick_off_left_wall() {
    // Vertical I hugging the left wall becomes horizontal in place.
    let board = Board::new();
    let mut piece = Piece::spawn(PieceKind::I);
    piece.shape = piece.shape.rotated();
    piece.x = 0;
    piece.y = 4;

    let rotated = try_rotate(&piece, &board).unwrap();
    assert_eq!(rotated.x, 0);
    assert_eq!(rotated.shape.width(), 4);
}

#[test]
fn test_kick_around_stack() {
    // T rotated next to a block on its right moves one column left.
    let mut board = Board::new();
    let mut piece = Piece::spawn(PieceKind::T);
    piece.shape = piece.shape.rotated(); // pointing right, 2 wide
    piece.x = 4;
    piece.y = 10;
    // Rotating to the 3-wide pointing-down shape needs column 6 on row 10.
    board.set(6, 10, 1);
    assert!(!piece.collides(&board));

    // Trials: x = 5 (still blocked), then x = 3.
    let rotated = try_rotate(&piece, &board).unwrap();
    assert!(!rotated.collides(&board));
    assert_eq!(rotated.x, 3);
    assert_eq!(rotated.shape, Shape::from_rows(&[&[3, 3, 3], &[0, 3, 0]]));
}

#[test]
fn test_failed_rotation_is_none() {
    // Boxed in on both sides: no offset fits, caller keeps the original.
    let mut board = Board::new();
    for y in 0..20 {
        for x in 0..10 {
            if x != 4 {
                board.set(x, y, 1);
            }
        }
    }
    let mut piece = Piece::spawn(PieceKind::I);
    piece.shape = piece.shape.rotated();
    piece.x = 4;
    piece.y = 5;
    assert!(!piece.collides(&board));
    assert!(try_rotate(&piece, &board).is_none());
}

// ============== Factory ==============

#[test]
fn test_factory_is_roughly_uniform() {
    let mut factory = PieceFactory::new(2024);
    let mut counts = [0u32; 7];
    let draws = 7000;
    for _ in 0..draws {
        counts[factory.next_kind().tag() as usize - 1] += 1;
    }
    for (i, &c) in counts.iter().enumerate() {
        assert!((800..1200).contains(&c), "kind {} drawn {} times", i + 1, c);
    }
}
