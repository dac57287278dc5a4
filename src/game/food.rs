use super::grid::Position;
use super::snake::Snake;
use crate::consts;
use rand::Rng;

/// Pick a random cell not occupied by `snake` for the next piece of food.
///
/// Candidates are drawn uniformly from the whole board and redrawn until one
/// misses the snake.  Returns `None` if the snake covers every cell, as no
/// amount of redrawing would then succeed.
pub(crate) fn place_food<R: Rng + ?Sized>(rng: &mut R, snake: &Snake) -> Option<Position> {
    if snake.len() >= consts::GRID_CELLS {
        return None;
    }
    let size = i32::from(consts::GRID_SIZE);
    loop {
        let pos = Position::new(rng.random_range(0..size), rng.random_range(0..size));
        if !snake.occupies(pos) {
            return Some(pos);
        }
    }
}
