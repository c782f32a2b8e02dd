// patterns.rs - Seed shapes, placed relative to the grid center

use life_grid::Grid;

pub struct Pattern {
    pub name: &'static str,
    /// (row, col) offsets from the grid center.
    pub cells: &'static [(i64, i64)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(-1, 1), (0, 1), (1, 1), (1, 0), (0, -1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, -1), (0, 0), (0, 1)],
    },
    Pattern {
        name: "Toad",
        cells: &[(-1, 0), (-1, 1), (-1, 2), (0, -1), (0, 0), (0, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(-2, -2), (-2, -1), (-1, -2), (-1, -1), (0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 0), (0, 1), (-1, 1), (1, 0), (1, -1)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top section
            (-6, -4), (-6, -3), (-6, -2), (-6, 2), (-6, 3), (-6, 4),
            (-4, -6), (-4, -1), (-4, 1), (-4, 6),
            (-3, -6), (-3, -1), (-3, 1), (-3, 6),
            (-2, -6), (-2, -1), (-2, 1), (-2, 6),
            (-1, -4), (-1, -3), (-1, -2), (-1, 2), (-1, 3), (-1, 4),
            // Bottom section (mirrored)
            (1, -4), (1, -3), (1, -2), (1, 2), (1, 3), (1, 4),
            (2, -6), (2, -1), (2, 1), (2, 6),
            (3, -6), (3, -1), (3, 1), (3, 6),
            (4, -6), (4, -1), (4, 1), (4, 6),
            (6, -4), (6, -3), (6, -2), (6, 2), (6, 3), (6, 4),
        ],
    },
];

/// Clear the grid and toggle the pattern's cells around the center. Offsets
/// wrap like every other coordinate, so any pattern fits any grid.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    grid.clear();
    let row = i64::from(grid.height() / 2);
    let col = i64::from(grid.width() / 2);
    for &(dr, dc) in pattern.cells {
        grid.toggle(row + dr, col + dc);
    }
}
