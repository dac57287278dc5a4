//! Fixed-timestep driver deciding when the game should advance
use crate::game::GameStatus;
use std::time::{Duration, Instant};

/// Decides, once per frame, whether the game is due for a tick.
///
/// Elapsed time between frames is added to an accumulator; once the
/// accumulator reaches the tick period, one tick fires and the accumulator
/// starts over from zero.  Any time past the period is dropped rather than
/// carried over, so a slow frame never produces more than one tick.
///
/// A stopped ticker never fires.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Ticker {
    period: Duration,
    running: Option<Accumulator>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct Accumulator {
    /// When the previous frame happened; `None` until the first frame after
    /// starting
    last_frame: Option<Instant>,
    elapsed: Duration,
}

impl Ticker {
    pub(crate) fn new(period: Duration) -> Ticker {
        Ticker {
            period,
            running: None,
        }
    }

    /// Start counting time from the next frame.  Does nothing if already
    /// running.
    pub(crate) fn start(&mut self) {
        if self.running.is_none() {
            self.running = Some(Accumulator::default());
        }
    }

    /// Stop ticking and discard any accumulated time
    pub(crate) fn stop(&mut self) {
        self.running = None;
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Bring the ticker in line with the game's status after something may
    /// have changed it.  Any change of status stops the ticker; it is then
    /// started afresh if the game is now running.
    pub(crate) fn follow(&mut self, before: GameStatus, after: GameStatus) {
        if before != after {
            self.stop();
            if after == GameStatus::Running {
                self.start();
            }
        }
    }

    /// Register a frame at time `now`.  Returns `true` if the game should
    /// tick.
    pub(crate) fn frame(&mut self, now: Instant) -> bool {
        let Some(acc) = self.running.as_mut() else {
            return false;
        };
        if let Some(last) = acc.last_frame {
            acc.elapsed += now.saturating_duration_since(last);
        }
        acc.last_frame = Some(now);
        if acc.elapsed >= self.period {
            acc.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }
}
