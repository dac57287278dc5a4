use super::GameState;
use crate::consts;
use enum_map::Enum;

const GRID_LEN: usize = consts::GRID_SIZE as usize;

/// A cell coordinate on the board, relative to the top-left corner.
///
/// Coordinates are signed so that a head which has just stepped off the edge
/// of the board can still be represented (and then rejected).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// Returns `true` iff the position lies on the board
    pub(crate) fn in_bounds(self) -> bool {
        let size = i32::from(consts::GRID_SIZE);
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }
}

/// What occupies a given cell, as far as the renderer is concerned
#[derive(Clone, Copy, Debug, Default, Enum, Eq, PartialEq)]
pub(crate) enum Cell {
    #[default]
    Empty,
    Food,
    Head,
    Body,
}

/// A read-only snapshot of the board, indexed as `[y][x]`
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Grid([[Cell; GRID_LEN]; GRID_LEN]);

impl Grid {
    fn empty() -> Grid {
        Grid([[Cell::Empty; GRID_LEN]; GRID_LEN])
    }

    /// Return the contents of the cell at `pos`, or `None` if `pos` is off
    /// the board
    #[cfg(test)]
    pub(crate) fn get(&self, pos: Position) -> Option<Cell> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        self.0.get(y)?.get(x).copied()
    }

    fn set(&mut self, pos: Position, cell: Cell) {
        let (Ok(x), Ok(y)) = (usize::try_from(pos.x), usize::try_from(pos.y)) else {
            return;
        };
        if let Some(slot) = self.0.get_mut(y).and_then(|row| row.get_mut(x)) {
            *slot = cell;
        }
    }

    /// Iterate over the rows of the board from top to bottom
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_LEN]> + '_ {
        self.0.iter()
    }
}

/// Build the cell matrix that a renderer draws from.  Segments that lie off
/// the board are skipped.
pub(crate) fn derive_grid(state: &GameState) -> Grid {
    let mut grid = Grid::empty();
    grid.set(state.food, Cell::Food);
    for (i, pos) in state.snake.segments().enumerate() {
        if pos.in_bounds() {
            grid.set(pos, if i == 0 { Cell::Head } else { Cell::Body });
        }
    }
    grid
}
