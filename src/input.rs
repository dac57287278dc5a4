//! Routing of player commands to the game engine
use crate::command::Command;
use crate::game::{Engine, GameStatus};
use rand::Rng;

/// What the application should do after a command has been routed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

pub(crate) fn route<R: Rng>(engine: &mut Engine<R>, cmd: Command) -> Flow {
    if let Some(direction) = cmd.direction() {
        engine.change_direction(direction);
        return Flow::Continue;
    }
    match cmd {
        Command::Quit => return Flow::Quit,
        Command::Activate => activate(engine),
        Command::Cancel => engine.pause(),
        Command::R => {
            if matches!(engine.status(), GameStatus::Paused | GameStatus::GameOver) {
                play_again(engine);
            }
        }
        Command::Q => {
            if engine.status() != GameStatus::Running {
                return Flow::Quit;
            }
        }
        Command::Up | Command::Down | Command::Left | Command::Right => (),
    }
    Flow::Continue
}

/// Move the game along to whatever comes next: a running game is paused, an
/// idle or paused game is (re)started, and a finished game is replaced by a
/// new running one.
pub(crate) fn activate<R: Rng>(engine: &mut Engine<R>) {
    match engine.status() {
        GameStatus::Running => engine.pause(),
        GameStatus::Idle | GameStatus::Paused => engine.start(),
        GameStatus::GameOver => play_again(engine),
    }
}

fn play_again<R: Rng>(engine: &mut Engine<R>) {
    engine.reset();
    engine.start();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use crate::highscore::MemoryStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_engine() -> Engine<ChaCha12Rng> {
        Engine::new(
            ChaCha12Rng::seed_from_u64(RNG_SEED),
            Box::new(MemoryStore::default()),
        )
    }

    /// Run the game until the snake hits a wall
    fn lose(engine: &mut Engine<ChaCha12Rng>) {
        engine.start();
        while engine.status() == GameStatus::Running {
            engine.tick();
        }
        assert_eq!(engine.status(), GameStatus::GameOver);
    }

    #[test]
    fn activate_cycles_forward() {
        let mut engine = new_engine();
        assert_eq!(route(&mut engine, Command::Activate), Flow::Continue);
        assert_eq!(engine.status(), GameStatus::Running);
        route(&mut engine, Command::Activate);
        assert_eq!(engine.status(), GameStatus::Paused);
        route(&mut engine, Command::Activate);
        assert_eq!(engine.status(), GameStatus::Running);
    }

    #[test]
    fn activate_after_game_over_starts_a_new_game() {
        let mut engine = new_engine();
        engine.change_direction(Direction::Up);
        lose(&mut engine);
        assert_eq!(engine.state().snake.head().y, 0);
        route(&mut engine, Command::Activate);
        assert_eq!(engine.status(), GameStatus::Running);
        assert_eq!(engine.state().score, 0);
        assert_eq!(engine.state().direction, Direction::Right);
        assert_eq!(engine.state().snake.head().x, 10);
        assert_eq!(engine.state().snake.head().y, 10);
    }

    #[rstest]
    #[case(GameStatus::Idle)]
    #[case(GameStatus::Paused)]
    fn cancel_only_pauses_running_games(#[case] status: GameStatus) {
        let mut engine = new_engine();
        if status == GameStatus::Paused {
            engine.start();
            engine.pause();
        }
        route(&mut engine, Command::Cancel);
        assert_eq!(engine.status(), status);
    }

    #[test]
    fn cancel_pauses() {
        let mut engine = new_engine();
        engine.start();
        route(&mut engine, Command::Cancel);
        assert_eq!(engine.status(), GameStatus::Paused);
    }

    #[test]
    fn cancel_after_game_over() {
        let mut engine = new_engine();
        lose(&mut engine);
        route(&mut engine, Command::Cancel);
        assert_eq!(engine.status(), GameStatus::GameOver);
    }

    #[test]
    fn steering() {
        let mut engine = new_engine();
        route(&mut engine, Command::Down);
        assert_eq!(engine.state().next_direction, Direction::Down);
        route(&mut engine, Command::Left);
        assert_eq!(engine.state().next_direction, Direction::Down);
        route(&mut engine, Command::Up);
        assert_eq!(engine.state().next_direction, Direction::Up);
    }

    #[test]
    fn restart_from_pause() {
        let mut engine = new_engine();
        engine.start();
        engine.change_direction(Direction::Down);
        engine.tick();
        engine.pause();
        route(&mut engine, Command::R);
        assert_eq!(engine.status(), GameStatus::Running);
        assert_eq!(engine.state().direction, Direction::Right);
        assert_eq!(engine.state().snake.len(), 3);
        assert_eq!(engine.state().snake.head().y, 10);
    }

    #[rstest]
    #[case(GameStatus::Idle)]
    #[case(GameStatus::Running)]
    fn restart_ignored(#[case] status: GameStatus) {
        let mut engine = new_engine();
        if status == GameStatus::Running {
            engine.start();
        }
        let before = engine.state().clone();
        route(&mut engine, Command::R);
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn quitting() {
        let mut engine = new_engine();
        assert_eq!(route(&mut engine, Command::Q), Flow::Quit);
        engine.start();
        assert_eq!(route(&mut engine, Command::Q), Flow::Continue);
        assert_eq!(route(&mut engine, Command::Quit), Flow::Quit);
        engine.pause();
        assert_eq!(route(&mut engine, Command::Q), Flow::Quit);
    }
}
