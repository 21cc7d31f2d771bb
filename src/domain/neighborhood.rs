//! The Moore neighborhood used for neighbor counting.

/// Relative `(row, col)` offsets of the eight surrounding cells, clockwise
/// starting from the right-hand neighbor.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, 1),   // right
    (1, 1),   // bottom right
    (1, 0),   // bottom
    (1, -1),  // bottom left
    (0, -1),  // left
    (-1, -1), // top left
    (-1, 0),  // top
    (-1, 1),  // top right
];

/// Iterate the in-bounds neighbors of `(row, col)` on a `rows × cols` board.
/// Neighbors past an edge are skipped; the board does not wrap.
pub fn neighbors(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> impl Iterator<Item = (usize, usize)> {
    NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < rows && c < cols).then_some((r, c))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_distinct_and_nonzero() {
        assert_eq!(NEIGHBOR_OFFSETS.len(), 8);
        for (i, a) in NEIGHBOR_OFFSETS.iter().enumerate() {
            assert_ne!(*a, (0, 0));
            assert!((-1..=1).contains(&a.0) && (-1..=1).contains(&a.1));
            for b in &NEIGHBOR_OFFSETS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_interior_cell_has_eight_neighbors() {
        assert_eq!(neighbors(5, 5, 10, 10).count(), 8);
    }

    #[test]
    fn test_corner_cells_are_clipped() {
        let mut top_left: Vec<_> = neighbors(0, 0, 10, 10).collect();
        top_left.sort();
        assert_eq!(top_left, vec![(0, 1), (1, 0), (1, 1)]);

        assert_eq!(neighbors(9, 9, 10, 10).count(), 3);
        assert_eq!(neighbors(0, 5, 10, 10).count(), 5);
    }

    #[test]
    fn test_single_cell_board_has_no_neighbors() {
        assert_eq!(neighbors(0, 0, 1, 1).count(), 0);
    }
}
