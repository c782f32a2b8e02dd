// grid.rs - Toroidal occupancy/age buffer and the update rule

use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },
}

/// Game of Life grid on a torus.
///
/// Cells are stored row-major; `0` means dead, a positive value is the number
/// of consecutive generations the cell has been alive.
#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<u32>,
}

impl Grid {
    /// Create an all-dead grid. Seeding a start pattern is the caller's job.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![0; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Convert a pair (row, col) into a buffer index, wrapping both axes.
    ///
    /// Total over all integers: negative and overshooting coordinates land on
    /// the torus via mathematical modulo, never out of bounds.
    pub fn index_of(&self, row: i64, col: i64) -> usize {
        let row = modulo(row, i64::from(self.height));
        let col = modulo(col, i64::from(self.width));
        (row * i64::from(self.width) + col) as usize
    }

    pub fn is_alive(&self, row: i64, col: i64) -> bool {
        self.cells[self.index_of(row, col)] > 0
    }

    /// Generations the cell has been continuously alive, 0 if dead.
    pub fn age(&self, row: i64, col: i64) -> u32 {
        self.cells[self.index_of(row, col)]
    }

    /// Invert a cell: alive (any age) becomes dead, dead becomes alive at
    /// age 1. Toggling twice does not restore a prior age.
    pub fn toggle(&mut self, row: i64, col: i64) {
        let i = self.index_of(row, col);
        self.toggle_index(i);
    }

    fn toggle_index(&mut self, i: usize) {
        self.cells[i] = if self.cells[i] > 0 { 0 } else { 1 };
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Draw one uniform value in [0,1) per cell and toggle the cell when the
    /// draw exceeds `threshold` (strictly). Live cells can be killed by this;
    /// it flips, it does not set-alive.
    pub fn randomize<R: Rng + ?Sized>(&mut self, threshold: f64, rng: &mut R) {
        for i in 0..self.cells.len() {
            if rng.gen_range(0.0..1.0) > threshold {
                self.toggle_index(i);
            }
        }
    }

    /// Count live cells among the 8 toroidal neighbours.
    ///
    /// The center is excluded even when wraparound folds a neighbour offset
    /// back onto it, so a 1x1 grid always counts 0.
    fn alive_neighbours(&self, row: i64, col: i64) -> u32 {
        const OFFSETS: [(i64, i64); 8] = [
            (-1, -1), (-1, 0), (-1, 1),
            ( 0, -1),          ( 0, 1),
            ( 1, -1), ( 1, 0), ( 1, 1),
        ];
        let center = self.index_of(row, col);
        let mut count = 0;
        for &(dr, dc) in &OFFSETS {
            let i = self.index_of(row + dr, col + dc);
            if i != center && self.cells[i] > 0 {
                count += 1;
            }
        }
        count
    }

    /// Advance the grid by one generation.
    ///
    /// Every next state is derived from the pre-step snapshot: the scan
    /// collects cells to flip and survivors to age, and both change-sets are
    /// applied only after the scan completes.
    pub fn step(&mut self) {
        let mut to_flip = Vec::new();
        let mut to_age = Vec::new();
        for row in 0..i64::from(self.height) {
            for col in 0..i64::from(self.width) {
                let neighbours = self.alive_neighbours(row, col);
                match (self.is_alive(row, col), neighbours) {
                    (true, 2) | (true, 3) => to_age.push(self.index_of(row, col)), // Survival
                    (true, _) => to_flip.push(self.index_of(row, col)),            // Death
                    (false, 3) => to_flip.push(self.index_of(row, col)),           // Birth
                    _ => {}                                                        // Stays dead
                }
            }
        }
        for &i in &to_flip {
            self.toggle_index(i);
        }
        for &i in &to_age {
            self.cells[i] += 1;
        }
    }
}

/// "Shift" an integer into [0, m) the mathematical-modulo way, so that
/// negative inputs wrap instead of mirroring like `%` would.
fn modulo(n: i64, m: i64) -> i64 {
    let n = n % m;
    if n < 0 { n + m } else { n }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    fn grid(width: u32, height: u32) -> Grid {
        Grid::new(width, height).unwrap()
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            GridError::InvalidDimension { width: 0, height: 5 }
        );
        assert_eq!(
            Grid::new(5, 0).unwrap_err(),
            GridError::InvalidDimension { width: 5, height: 0 }
        );
    }

    #[test]
    fn index_wraps_on_both_axes() {
        let g = grid(4, 3);
        for row in -9..9 {
            for col in -9..9 {
                let i = g.index_of(row, col);
                assert!(i < 12);
                assert_eq!(i, g.index_of(row + 3, col));
                assert_eq!(i, g.index_of(row, col - 4));
                assert_eq!(i, g.index_of(row - 6, col + 8));
            }
        }
        assert_eq!(g.index_of(-1, -1), g.index_of(2, 3));
    }

    #[test]
    fn all_dead_is_a_fixed_point() {
        let mut g = grid(5, 4);
        for _ in 0..10 {
            g.step();
        }
        for row in 0..4 {
            for col in 0..5 {
                assert!(!g.is_alive(row, col));
            }
        }
    }

    #[test]
    fn block_is_a_still_life_whose_ages_grow() {
        let mut g = grid(6, 6);
        for (row, col) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
            g.toggle(row, col);
        }
        for steps in 0..5 {
            for (row, col) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
                assert!(g.is_alive(row, col));
                assert_eq!(g.age(row, col), steps + 1);
            }
            assert_eq!(live_count(&g), 4);
            g.step();
        }
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut g = grid(5, 5);
        for col in 1..4 {
            g.toggle(2, col);
        }
        g.step();
        for row in 1..4 {
            assert!(g.is_alive(row, 2));
        }
        assert_eq!(live_count(&g), 3);
        g.step();
        for col in 1..4 {
            assert!(g.is_alive(2, col));
        }
        assert_eq!(live_count(&g), 3);
    }

    #[test]
    fn toggle_is_not_an_involution_once_aged() {
        let mut g = grid(6, 6);
        for (row, col) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
            g.toggle(row, col);
        }
        g.step();
        g.step();
        assert_eq!(g.age(2, 2), 3);
        g.toggle(2, 2);
        assert_eq!(g.age(2, 2), 0);
        g.toggle(2, 2);
        assert_eq!(g.age(2, 2), 1);
    }

    #[test]
    fn randomize_with_threshold_one_is_a_no_op() {
        let mut g = grid(4, 4);
        g.toggle(1, 1);
        // draws just below 1.0, still not above the threshold
        let mut rng = StepRng::new(u64::MAX, 0);
        g.randomize(1.0, &mut rng);
        assert_eq!(live_count(&g), 1);
        assert!(g.is_alive(1, 1));
    }

    #[test]
    fn randomize_comparison_is_strict() {
        let mut g = grid(4, 4);
        // every draw is exactly 0.0, which does not exceed a 0.0 threshold
        let mut rng = StepRng::new(0, 0);
        g.randomize(0.0, &mut rng);
        assert_eq!(live_count(&g), 0);
    }

    #[test]
    fn randomize_toggles_and_can_kill() {
        let mut g = grid(4, 4);
        let mut rng = StepRng::new(u64::MAX, 0);
        g.randomize(0.0, &mut rng);
        assert_eq!(live_count(&g), 16);
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(g.age(row, col), 1);
            }
        }
        // a second pass flips everything back dead
        let mut rng = StepRng::new(u64::MAX, 0);
        g.randomize(0.0, &mut rng);
        assert_eq!(live_count(&g), 0);
    }

    #[test]
    fn randomize_is_deterministic_under_a_seeded_rng() {
        let mut a = grid(8, 8);
        let mut b = grid(8, 8);
        a.randomize(0.75, &mut StdRng::seed_from_u64(42));
        b.randomize(0.75, &mut StdRng::seed_from_u64(42));
        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(a.is_alive(row, col), b.is_alive(row, col));
            }
        }
    }

    #[test]
    fn clear_kills_every_cell() {
        let mut g = grid(5, 5);
        g.randomize(0.5, &mut StdRng::seed_from_u64(7));
        g.clear();
        for row in 0..5 {
            for col in 0..5 {
                assert!(!g.is_alive(row, col));
            }
        }
    }

    #[test]
    fn single_cell_grid_counts_no_neighbours() {
        let mut g = grid(1, 1);
        g.toggle(0, 0);
        assert_eq!(g.alive_neighbours(0, 0), 0);
        // 0 neighbours means underpopulation, so the lone cell dies
        g.step();
        assert!(!g.is_alive(0, 0));
        g.step();
        assert!(!g.is_alive(0, 0));
    }

    fn live_count(g: &Grid) -> usize {
        (0..i64::from(g.height()))
            .flat_map(|row| (0..i64::from(g.width())).map(move |col| (row, col)))
            .filter(|&(row, col)| g.is_alive(row, col))
            .count()
    }
}
