mod collision;
mod direction;
mod food;
mod grid;
mod snake;
mod view;
pub(crate) use self::direction::Direction;
use self::grid::{derive_grid, Grid, Position};
use self::snake::Snake;
use crate::highscore::HighScoreStore;
use crate::util::error_chain;
use log::{debug, info, warn};
use rand::Rng;
use std::fmt;

/// The complete state of one game of Snake
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    pub(crate) snake: Snake,
    pub(crate) food: Position,

    /// The direction the snake moved in on the most recent tick
    pub(crate) direction: Direction,

    /// The direction the snake will move in on the next tick
    pub(crate) next_direction: Direction,

    pub(crate) status: GameStatus,
    pub(crate) score: u32,
    pub(crate) high_score: u32,
}

impl GameState {
    fn fresh<R: Rng + ?Sized>(rng: &mut R, high_score: u32) -> GameState {
        let snake = Snake::centered();
        let food =
            food::place_food(rng, &snake).expect("a new snake should leave room for food");
        GameState {
            snake,
            food,
            direction: Direction::Right,
            next_direction: Direction::Right,
            status: GameStatus::Idle,
            score: 0,
            high_score,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameStatus {
    /// A new game that has not been started yet
    Idle,
    Running,
    Paused,
    /// The snake hit something (or filled the board); only a reset gets out
    /// of here.
    GameOver,
}

impl GameStatus {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            GameStatus::Idle => "Ready",
            GameStatus::Running => "Playing",
            GameStatus::Paused => "Paused",
            GameStatus::GameOver => "Game Over",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// What happened during a call to [`Engine::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TickOutcome {
    /// The game was not running, so nothing happened
    Idle,
    Moved,
    Ate,
    Collided,
    /// The snake ate the food and now covers the entire board, leaving
    /// nowhere for new food to go
    BoardFull,
}

/// Owner of the game state and the only thing that changes it
#[derive(Debug)]
pub(crate) struct Engine<R = rand::rngs::ThreadRng> {
    rng: R,
    store: Box<dyn HighScoreStore>,
    state: GameState,
}

impl<R> Engine<R> {
    pub(crate) fn state(&self) -> &GameState {
        &self.state
    }

    pub(crate) fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Return the board as the renderer sees it
    pub(crate) fn grid(&self) -> Grid {
        derive_grid(&self.state)
    }
}

impl<R: Rng> Engine<R> {
    /// Set up a new idle game, fetching the high score from `store`.  If the
    /// high score cannot be loaded, it starts out at zero.
    pub(crate) fn new(mut rng: R, store: Box<dyn HighScoreStore>) -> Engine<R> {
        let high_score = match store.load() {
            Ok(score) => {
                debug!("Loaded high score: {score}");
                score
            }
            Err(e) => {
                warn!("{}; starting from 0", error_chain(&e));
                0
            }
        };
        let state = GameState::fresh(&mut rng, high_score);
        Engine { rng, store, state }
    }

    /// Start a new game or resume a paused one
    pub(crate) fn start(&mut self) {
        match self.state.status {
            GameStatus::Idle => self.set_status(GameStatus::Running),
            GameStatus::Paused => self.resume(),
            GameStatus::Running | GameStatus::GameOver => (),
        }
    }

    pub(crate) fn pause(&mut self) {
        if self.state.status == GameStatus::Running {
            self.set_status(GameStatus::Paused);
        }
    }

    pub(crate) fn resume(&mut self) {
        if self.state.status == GameStatus::Paused {
            self.set_status(GameStatus::Running);
        }
    }

    /// Throw away the current game and set up a new idle one.  The high score
    /// is kept.
    pub(crate) fn reset(&mut self) {
        debug!("Resetting game (was {})", self.state.status);
        self.state = GameState::fresh(&mut self.rng, self.state.high_score);
    }

    /// Ask for the snake to turn to `direction` on the next tick.  Requests
    /// to reverse the direction the snake is currently moving in are ignored.
    ///
    /// Only the most recent accepted request before a tick takes effect.
    pub(crate) fn change_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(self.state.direction) {
            self.state.next_direction = direction;
        }
    }

    /// Advance the game by one step
    pub(crate) fn tick(&mut self) -> TickOutcome {
        if self.state.status != GameStatus::Running {
            return TickOutcome::Idle;
        }
        let head = self.state.next_direction.advance(self.state.snake.head());
        if collision::check_collision(head, &self.state.snake) {
            debug!("Snake collided at ({}, {})", head.x, head.y);
            self.end_run();
            return TickOutcome::Collided;
        }
        self.state.direction = self.state.next_direction;
        let ate = head == self.state.food;
        self.state.snake.advance(head, ate);
        if !ate {
            return TickOutcome::Moved;
        }
        self.state.score += 1;
        match food::place_food(&mut self.rng, &self.state.snake) {
            Some(pos) => {
                self.state.food = pos;
                TickOutcome::Ate
            }
            None => {
                info!("Snake fills the board; no room left for food");
                self.end_run();
                TickOutcome::BoardFull
            }
        }
    }

    fn set_status(&mut self, status: GameStatus) {
        debug!("Game status: {} -> {}", self.state.status, status);
        self.state.status = status;
    }

    /// Finish the current run, recording a new high score if there is one
    fn end_run(&mut self) {
        self.set_status(GameStatus::GameOver);
        if self.state.score > self.state.high_score {
            info!(
                "New high score: {} (previous: {})",
                self.state.score, self.state.high_score
            );
            self.state.high_score = self.state.score;
            if let Err(e) = self.store.save(self.state.high_score) {
                warn!("{}", error_chain(&e));
            }
        }
    }
}
