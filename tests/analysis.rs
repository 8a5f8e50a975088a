use torus_life::{Board, Pattern};

fn board_with_cells(columns: u32, rows: u32, cells: &[(usize, usize)]) -> Board {
    let mut board = Board::new(columns, rows, 1, 0.0);
    for &(x, y) in cells {
        board.set_cell(x, y, true);
    }
    board
}

#[test]
fn all_dead_board_has_no_combinations() {
    let board = Board::new(10, 10, 1, 0.0);
    assert_eq!(board.live_cells_and_combinations(), (0, 0));
}

#[test]
fn lone_live_cell_has_the_empty_fingerprint() {
    let board = board_with_cells(6, 6, &[(2, 2)]);
    assert_eq!(board.live_cells_and_combinations(), (1, 1));
}

#[test]
fn block_corners_have_four_distinct_fingerprints() {
    // Each block cell sees its three partners from a different corner,
    // so all four masks differ: bit b is set when the live neighbor's
    // slot b points back at the cell.
    let board = board_with_cells(8, 8, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
    assert_eq!(board.live_cells_and_combinations(), (4, 4));
}

#[test]
fn translated_copies_share_a_fingerprint() {
    // Two far-apart vertical dominoes: four live cells but only the
    // two masks a domino produces (top cell, bottom cell).
    let board = board_with_cells(12, 12, &[(2, 2), (2, 3), (8, 7), (8, 8)]);
    assert_eq!(board.live_cells_and_combinations(), (4, 2));
}

#[test]
fn glider_pattern_matches_only_at_its_offset() {
    let glider = Pattern::glider();
    let mut board = Board::new(10, 10, 1, 0.0);
    for (dx, dy) in glider.live_cells() {
        board.set_cell(2 + dx, 3 + dy, true);
    }

    assert!(board.matches_pattern(2, 3, &glider));
    for start_x in -3..=10i64 {
        for start_y in -3..=10i64 {
            if (start_x, start_y) == (2, 3) {
                continue;
            }
            assert!(
                !board.matches_pattern(start_x, start_y, &glider),
                "unexpected match at ({start_x},{start_y})"
            );
        }
    }
}

#[test]
fn pattern_matching_does_not_wrap() {
    let blinker = Pattern::blinker();

    let interior = board_with_cells(10, 10, &[(4, 3), (4, 4), (4, 5)]);
    assert!(interior.matches_pattern(3, 3, &blinker));
    assert!(!interior.matches_pattern(4, 3, &blinker));

    // Hugging the left edge: through the wrap the window at x = -1
    // would show the blinker shape, but matching clips at the boundary.
    let edge = board_with_cells(10, 10, &[(0, 3), (0, 4), (0, 5)]);
    assert!(!edge.matches_pattern(-1, 3, &blinker));
    assert!(!edge.matches_pattern(0, 3, &blinker));
}

#[test]
fn empty_board_has_no_symmetrical_cells() {
    for (columns, rows) in [(4u32, 4u32), (5, 5), (5, 4), (3, 7)] {
        let board = Board::new(columns, rows, 1, 0.0);
        assert_eq!(board.symmetrical_cells(), (0, 0), "{columns}x{rows}");
    }
}

#[test]
fn fully_live_board_counts_each_cell_once() {
    // 5x5 all alive: 2x2 quadrant + 2 middle-column + 2 middle-row
    // + center = 9; every tallied pair is both-alive.
    let board = Board::new(5, 5, 1, 1.0);
    assert_eq!(board.symmetrical_cells(), (9, 9));

    // Even dimensions reduce to the quadrant alone.
    let board = Board::new(4, 4, 1, 1.0);
    assert_eq!(board.symmetrical_cells(), (4, 4));
}

#[test]
fn point_reflected_pair_is_symmetrical() {
    let board = board_with_cells(6, 6, &[(1, 1), (4, 4)]);
    assert_eq!(board.symmetrical_cells(), (1, 1));

    // Without its mirror the reference cell counts for nothing.
    let board = board_with_cells(6, 6, &[(1, 1)]);
    assert_eq!(board.symmetrical_cells(), (0, 0));
}

#[test]
fn middle_column_mirrors_within_itself() {
    let board = board_with_cells(5, 4, &[(2, 0), (2, 3)]);
    assert_eq!(board.symmetrical_cells(), (1, 1));
}

#[test]
fn center_cell_counts_when_both_dimensions_are_odd() {
    let board = board_with_cells(5, 5, &[(2, 2)]);
    assert_eq!(board.symmetrical_cells(), (1, 1));
}
