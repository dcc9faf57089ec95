//! Board tests - grid access, collision, merge and line clearing

use blockfall::core::{spawn_shape, Board, Shape};
use blockfall::types::{PieceColor, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();
    assert!(board.set(5, 10, Some(PieceColor::Purple)));
    assert_eq!(board.get(5, 10), Some(Some(PieceColor::Purple)));
    assert!(board.is_occupied(5, 10));

    assert!(!board.set(10, 0, Some(PieceColor::Red)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_collision_with_walls_and_floor() {
    let board = Board::new();
    let o = spawn_shape(PieceKind::O);

    assert!(!board.collides(&o, 0, 0));
    assert!(!board.collides(&o, 8, 18));
    assert!(board.collides(&o, -1, 0));
    assert!(board.collides(&o, 9, 0));
    assert!(board.collides(&o, 0, 19));
}

#[test]
fn test_cells_above_top_never_collide() {
    let mut board = Board::new();
    board.fill_row_except(0, PieceColor::Red, &[4, 5]);
    let o = spawn_shape(PieceKind::O);

    // Upper row of the O sits above the grid, lower row in the gap.
    assert!(!board.collides(&o, 4, -1));
    assert!(board.collides(&o, 3, -1));
}

#[test]
fn test_collision_with_settled_cells() {
    let mut board = Board::new();
    board.set(4, 19, Some(PieceColor::Blue));
    let t = spawn_shape(PieceKind::T);

    // T bottom row covers columns 3..=5 of row y + 1.
    assert!(board.collides(&t, 3, 18));
    assert!(!board.collides(&t, 5, 18));
}

#[test]
fn test_merge_is_pure_and_drops_outside_cells() {
    let board = Board::new();
    let i = spawn_shape(PieceKind::I).rotate_cw();

    // Vertical I at column 6 whose top two cells are above the grid.
    let merged = board.merge(&i, 3, -2, PieceColor::Cyan);
    assert_eq!(board.filled_count(), 0);
    assert_eq!(merged.filled_count(), 2);
    assert_eq!(merged.get(6, 0), Some(Some(PieceColor::Cyan)));
    assert_eq!(merged.get(6, 1), Some(Some(PieceColor::Cyan)));
}

#[test]
fn test_clear_lines_shifts_rows_down() {
    let mut board = Board::new();
    board.fill_row_except(19, PieceColor::Green, &[]);
    board.fill_row_except(18, PieceColor::Red, &[0]);
    board.fill_row_except(17, PieceColor::Green, &[]);
    board.set(2, 16, Some(PieceColor::Yellow));

    let (cleared, count) = board.clear_lines();
    assert_eq!(count, 2);
    assert_eq!(cleared.filled_count(), 10);

    // Surviving rows keep their order at the bottom.
    assert_eq!(cleared.get(0, 19), Some(None));
    assert_eq!(cleared.get(1, 19), Some(Some(PieceColor::Red)));
    assert_eq!(cleared.get(2, 18), Some(Some(PieceColor::Yellow)));
    assert!(cleared.is_row_empty(17));
}

#[test]
fn test_clear_lines_is_idempotent() {
    let mut board = Board::new();
    for y in 12..20 {
        let hole = [y % 10];
        let holes: &[i8] = if y % 3 == 0 { &hole } else { &[] };
        board.fill_row_except(y, PieceColor::Orange, holes);
    }

    let (once, _) = board.clear_lines();
    let (twice, count) = once.clear_lines();
    assert_eq!(count, 0);
    assert_eq!(once, twice);
}

#[test]
fn test_clear_full_rows_reports_indices_bottom_up() {
    let mut board = Board::new();
    board.fill_row_except(19, PieceColor::Blue, &[]);
    board.fill_row_except(15, PieceColor::Blue, &[]);

    let rows = board.clear_full_rows();
    assert_eq!(rows.as_slice(), &[19, 15]);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_shape_from_rows_pads_to_square() {
    let shape = Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]);
    assert_eq!(shape.size(), 3);
    assert!(!shape.is_filled(2, 1));
    assert_eq!(shape, spawn_shape(PieceKind::Z));
}
