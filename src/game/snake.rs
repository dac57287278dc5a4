use super::grid::Position;
use crate::consts;
use std::collections::VecDeque;

/// The snake: its head plus the segments trailing behind it.
///
/// The head is stored apart from the rest of the body so that a snake always
/// has at least one segment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    head: Position,

    /// The positions of the rest of the snake's segments, starting with the
    /// one right behind the head and ending with the tail
    body: VecDeque<Position>,
}

impl Snake {
    /// Create a snake of length
    /// [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH] lying
    /// horizontally across the middle of the board with its head rightmost
    pub(crate) fn centered() -> Snake {
        let mid = i32::from(consts::GRID_SIZE / 2);
        let head = Position::new(mid, mid);
        let body = std::iter::successors(Some(mid - 1), |&x| Some(x - 1))
            .take(consts::INITIAL_SNAKE_LENGTH - 1)
            .map(|x| Position::new(x, mid))
            .collect();
        Snake { head, body }
    }

    /// Create a snake from its segments, head first
    #[cfg(test)]
    pub(crate) fn from_segments<I: IntoIterator<Item = Position>>(segments: I) -> Snake {
        let mut iter = segments.into_iter();
        let head = iter.next().expect("snake should have at least one segment");
        Snake {
            head,
            body: iter.collect(),
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.head
    }

    /// Return the positions of the segments behind the head, nearest first
    pub(crate) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// Iterate over all of the snake's segments, head first
    pub(crate) fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Returns `true` if any segment of the snake, head included, is at `pos`
    pub(crate) fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    /// Move the snake's head to `head`.  If `grow` is `false`, the tail moves
    /// up behind it; otherwise the snake becomes one segment longer.
    pub(crate) fn advance(&mut self, head: Position, grow: bool) {
        self.body.push_front(self.head);
        self.head = head;
        if !grow {
            let _ = self.body.pop_back();
        }
    }
}
