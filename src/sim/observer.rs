//! Game event reporting
//!
//! The playfield reports what happened during a tick to an injectable
//! [`GameObserver`]. Nothing is reported unless an observer is installed.

use super::collision::Collision;
use super::state::GameStatus;

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A fresh grid was laid out and the game restarted
    NewGame { bricks: usize },
    /// The ball bounced, or a brick or life was hit
    Collision(Collision),
    /// The ball crossed the bottom border
    LifeLost { remaining: u32 },
    /// The game reached a terminal status
    GameOver { status: GameStatus, score: u64 },
}

pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Forwards events to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl GameObserver for LogObserver {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::NewGame { bricks } => log::info!("New game with {} bricks", bricks),
            GameEvent::Collision(collision) => log::debug!("{}", collision),
            GameEvent::LifeLost { remaining } => log::info!("Lost life, {} left", remaining),
            GameEvent::GameOver { status, score } => {
                log::info!("Game over: {:?} with score {}", status, score)
            }
        }
    }
}

/// Keeps every event, for inspection
impl GameObserver for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(*event);
    }
}
