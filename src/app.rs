use crate::command::Command;
use crate::consts;
use crate::game::{Engine, TickOutcome};
use crate::highscore::HighScoreStore;
use crate::input::{self, Flow};
use crate::ticker::Ticker;
use crossterm::event::{poll, read, Event};
use log::info;
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

#[derive(Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    engine: Engine<R>,
    ticker: Ticker,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(rng: R, store: Box<dyn HighScoreStore>) -> App<R> {
        App {
            engine: Engine::new(rng, store),
            ticker: Ticker::new(consts::GAME_SPEED),
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        self.ticker.stop();
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(&self.engine, frame.area()))?;
        Ok(())
    }

    /// Wait for the next thing to happen.  While the game is running, this
    /// handles input until the current frame is over and then lets the ticker
    /// see the frame.  Otherwise, nothing moves on its own, so this just
    /// blocks until an event arrives.
    fn process_input(&mut self) -> io::Result<()> {
        if !self.ticker.is_running() {
            self.handle_event(read()?);
            return Ok(());
        }
        let deadline = Instant::now() + consts::FRAME_PERIOD;
        loop {
            let wait = deadline.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                break;
            }
            self.handle_event(read()?);
            if self.quitting || !self.ticker.is_running() {
                return Ok(());
            }
        }
        self.frame(Instant::now());
        Ok(())
    }

    /// Register a frame at time `now`, advancing the game if a tick is due
    fn frame(&mut self, now: Instant) {
        if !self.ticker.frame(now) {
            return;
        }
        let before = self.engine.status();
        let outcome = self.engine.tick();
        self.ticker.follow(before, self.engine.status());
        if matches!(outcome, TickOutcome::Collided | TickOutcome::BoardFull) {
            info!("Game over; final score: {}", self.engine.state().score);
        }
    }

    fn handle_event(&mut self, event: Event) {
        let before = self.engine.status();
        if event == Event::FocusLost {
            self.engine.pause();
        } else if let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        {
            if input::route(&mut self.engine, cmd) == Flow::Quit {
                info!("Quit requested");
                self.quitting = true;
            }
        }
        self.ticker.follow(before, self.engine.status());
    }
}
