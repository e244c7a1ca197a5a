//! Snake body - head-first segment list with a cell occupancy map
//!
//! The body is a `VecDeque` so both ends move in O(1), and an occupancy map
//! indexed by cell makes the self-collision test and food placement O(1) per
//! cell. Both buffers are sized to the whole board up front, so moving and
//! growing never allocate.

use std::collections::VecDeque;

use crate::types::Position;

#[derive(Debug, Clone)]
pub struct Snake {
    grid_size: u8,
    body: VecDeque<Position>,
    occupied: Vec<bool>,
}

impl Snake {
    /// Create a snake from head-first segments.
    ///
    /// Out-of-bounds or repeated segments are a caller bug.
    pub fn new(grid_size: u8, segments: &[Position]) -> Self {
        let cells = (grid_size as usize) * (grid_size as usize);
        let mut snake = Self {
            grid_size,
            body: VecDeque::with_capacity(cells),
            occupied: vec![false; cells],
        };
        snake.reset(segments);
        snake
    }

    /// Replace the body in place, keeping both allocations.
    pub fn reset(&mut self, segments: &[Position]) {
        debug_assert!(!segments.is_empty(), "snake needs at least one segment");
        self.body.clear();
        self.occupied.fill(false);
        for &segment in segments {
            debug_assert!(segment.in_bounds(self.grid_size));
            debug_assert!(!self.occupied[segment.index(self.grid_size)]);
            self.occupied[segment.index(self.grid_size)] = true;
            self.body.push_back(segment);
        }
    }

    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false for a live snake; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Segments from head to tail.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.in_bounds(self.grid_size) && self.occupied[pos.index(self.grid_size)]
    }

    /// Would moving the head to `pos` hit the body?
    ///
    /// When not growing, the tail leaves its cell on the same tick, so the
    /// tail cell is free to enter.
    pub fn would_collide(&self, pos: Position, growing: bool) -> bool {
        if !self.contains(pos) {
            return false;
        }
        growing || pos != self.tail()
    }

    /// Move the head to `new_head`, dropping the tail unless `grow`.
    ///
    /// `new_head` must be in bounds and must have passed
    /// [`Snake::would_collide`].
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        // Tail first: the new head may be entering the cell the tail leaves.
        if !grow {
            if let Some(tail) = self.body.pop_back() {
                self.occupied[tail.index(self.grid_size)] = false;
            }
        }
        self.occupied[new_head.index(self.grid_size)] = true;
        self.body.push_front(new_head);
    }

    /// Number of cells not covered by the body.
    pub fn free_cells(&self) -> usize {
        self.occupied.len() - self.body.len()
    }

    /// The `n`-th free cell in row-major order.
    pub fn nth_free_cell(&self, n: usize) -> Option<Position> {
        self.occupied
            .iter()
            .enumerate()
            .filter(|(_, &taken)| !taken)
            .nth(n)
            .map(|(i, _)| Position::from_index(i, self.grid_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i16, y: i16) -> Position {
        Position::new(x, y)
    }

    fn three() -> Snake {
        Snake::new(20, &[p(8, 10), p(7, 10), p(6, 10)])
    }

    #[test]
    fn test_new_snake() {
        let snake = three();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), p(8, 10));
        assert_eq!(snake.tail(), p(6, 10));
        assert!(snake.contains(p(7, 10)));
        assert!(!snake.contains(p(9, 10)));
        assert_eq!(snake.free_cells(), 397);
    }

    #[test]
    fn test_contains_out_of_bounds_is_false() {
        let snake = three();
        assert!(!snake.contains(p(-1, 10)));
        assert!(!snake.contains(p(20, 10)));
    }

    #[test]
    fn test_advance_without_growth_keeps_length() {
        let mut snake = three();
        snake.advance(p(9, 10), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            vec![p(9, 10), p(8, 10), p(7, 10)]
        );
        assert!(!snake.contains(p(6, 10)));
    }

    #[test]
    fn test_advance_with_growth_keeps_tail() {
        let mut snake = three();
        snake.advance(p(9, 10), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), p(6, 10));
        assert!(snake.contains(p(6, 10)));
    }

    #[test]
    fn test_tail_cell_is_free_unless_growing() {
        // A 2x2 loop: head chases the tail.
        let snake = Snake::new(20, &[p(5, 5), p(5, 6), p(6, 6), p(6, 5)]);
        assert!(!snake.would_collide(p(6, 5), false));
        assert!(snake.would_collide(p(6, 5), true));
        assert!(snake.would_collide(p(5, 6), false));
    }

    #[test]
    fn test_entering_vacated_tail_keeps_occupancy() {
        let mut snake = Snake::new(20, &[p(5, 5), p(5, 6), p(6, 6), p(6, 5)]);
        snake.advance(p(6, 5), false);
        assert_eq!(snake.head(), p(6, 5));
        assert!(snake.contains(p(6, 5)));
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.free_cells(), 396);
    }

    #[test]
    fn test_nth_free_cell_skips_body() {
        let snake = Snake::new(8, &[p(1, 0), p(0, 0)]);
        assert_eq!(snake.nth_free_cell(0), Some(p(2, 0)));
        assert_eq!(snake.nth_free_cell(5), Some(p(7, 0)));
        assert_eq!(snake.nth_free_cell(6), Some(p(0, 1)));
        assert_eq!(snake.nth_free_cell(62), None);
    }

    #[test]
    fn test_reset_reuses_buffers() {
        let mut snake = three();
        snake.advance(p(9, 10), true);
        snake.reset(&[p(1, 1)]);
        assert_eq!(snake.len(), 1);
        assert!(!snake.contains(p(9, 10)));
        assert!(snake.contains(p(1, 1)));
    }
}
