use super::grid::Position;
use super::snake::Snake;

/// Returns `true` if a snake whose head moves to `head` runs into a wall or
/// into itself.
///
/// `snake` is the snake as it was before the move; its current head is not
/// counted as an obstacle.
pub(crate) fn check_collision(head: Position, snake: &Snake) -> bool {
    !head.in_bounds() || snake.body().contains(&head)
}
