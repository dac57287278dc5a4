//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Width & height of the (square) board, in cells
pub(crate) const GRID_SIZE: u16 = 20;

/// Total number of cells on the board
pub(crate) const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Length of the snake at the start of every game
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Time between movements of the snake
pub(crate) const GAME_SPEED: Duration = Duration::from_millis(150);

/// Upper bound on the time between two frames while a game is running
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Announce the score each time it reaches a multiple of this
pub(crate) const SCORE_MILESTONE: u32 = 5;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Number of terminal columns used to draw a single board cell
pub(crate) const CELL_WIDTH: u16 = 2;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head once it has run into a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for score milestone announcements
pub(crate) const MILESTONE_STYLE: Style = Style::new().fg(Color::LightMagenta);
