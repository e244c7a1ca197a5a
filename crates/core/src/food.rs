//! Food placement
//!
//! The default sampler draws a random cell, retries while the snake is on it,
//! and gives up after `grid_size²` draws; giving up means the board is treated
//! as full. [`FoodSampling::Exact`] draws uniformly over the free cells instead
//! and only gives up when there are none.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::FoodSampling;
use crate::snake::Snake;
use crate::types::Position;

#[derive(Debug, Clone)]
pub struct FoodSpawner {
    rng: StdRng,
    sampling: FoodSampling,
}

impl FoodSpawner {
    /// Seeded spawners produce the same food sequence for the same moves.
    pub fn new(seed: Option<u64>, sampling: FoodSampling) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, sampling }
    }

    /// Pick a cell not covered by `snake`, or `None` when the board counts as
    /// full.
    pub fn spawn(&mut self, snake: &Snake) -> Option<Position> {
        match self.sampling {
            FoodSampling::Rejection => self.spawn_rejection(snake),
            FoodSampling::Exact => self.spawn_exact(snake),
        }
    }

    fn spawn_rejection(&mut self, snake: &Snake) -> Option<Position> {
        let g = snake.grid_size();
        let max_attempts = (g as usize) * (g as usize);

        for _ in 0..max_attempts {
            let candidate = Position::new(
                self.rng.gen_range(0..g as i16),
                self.rng.gen_range(0..g as i16),
            );
            if !snake.contains(candidate) {
                return Some(candidate);
            }
        }

        None
    }

    fn spawn_exact(&mut self, snake: &Snake) -> Option<Position> {
        let free = snake.free_cells();
        if free == 0 {
            return None;
        }
        let n = self.rng.gen_range(0..free);
        snake.nth_free_cell(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i16, y: i16) -> Position {
        Position::new(x, y)
    }

    /// Fill every cell of an 8x8 board except `holes`, as one boustrophedon
    /// path so the body is a valid snake.
    fn board_minus(holes: &[Position]) -> Snake {
        let mut cells = Vec::new();
        for y in 0..8i16 {
            for i in 0..8i16 {
                let x = if y % 2 == 0 { i } else { 7 - i };
                let cell = p(x, y);
                if !holes.contains(&cell) {
                    cells.push(cell);
                }
            }
        }
        Snake::new(8, &cells)
    }

    #[test]
    fn test_seeded_spawner_is_deterministic() {
        let snake = Snake::new(20, &[p(8, 10), p(7, 10), p(6, 10)]);
        let mut a = FoodSpawner::new(Some(42), FoodSampling::Rejection);
        let mut b = FoodSpawner::new(Some(42), FoodSampling::Rejection);
        for _ in 0..50 {
            assert_eq!(a.spawn(&snake), b.spawn(&snake));
        }
    }

    #[test]
    fn test_rejection_never_lands_on_snake() {
        let snake = Snake::new(20, &[p(8, 10), p(7, 10), p(6, 10)]);
        let mut spawner = FoodSpawner::new(Some(7), FoodSampling::Rejection);
        for _ in 0..500 {
            let food = spawner.spawn(&snake).unwrap();
            assert!(food.in_bounds(20));
            assert!(!snake.contains(food));
        }
    }

    #[test]
    fn test_exact_never_lands_on_snake() {
        let snake = Snake::new(20, &[p(8, 10), p(7, 10), p(6, 10)]);
        let mut spawner = FoodSpawner::new(Some(7), FoodSampling::Exact);
        for _ in 0..500 {
            let food = spawner.spawn(&snake).unwrap();
            assert!(food.in_bounds(20));
            assert!(!snake.contains(food));
        }
    }

    #[test]
    fn test_full_board_reports_none() {
        let snake = board_minus(&[]);
        assert_eq!(snake.free_cells(), 0);

        let mut rejection = FoodSpawner::new(Some(1), FoodSampling::Rejection);
        assert_eq!(rejection.spawn(&snake), None);

        let mut exact = FoodSpawner::new(Some(1), FoodSampling::Exact);
        assert_eq!(exact.spawn(&snake), None);
    }

    #[test]
    fn test_exact_finds_the_last_free_cell() {
        let hole = p(3, 5);
        let snake = board_minus(&[hole]);
        let mut spawner = FoodSpawner::new(Some(9), FoodSampling::Exact);
        for _ in 0..20 {
            assert_eq!(spawner.spawn(&snake), Some(hole));
        }
    }

    #[test]
    fn test_exact_covers_every_free_cell() {
        let holes = [p(0, 0), p(7, 7), p(4, 2)];
        let snake = board_minus(&holes);
        let mut spawner = FoodSpawner::new(Some(3), FoodSampling::Exact);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let food = spawner.spawn(&snake).unwrap();
            let i = holes.iter().position(|&h| h == food).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
