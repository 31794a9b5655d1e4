//! Simulation module
//!
//! All gameplay logic lives here. It is deterministic and single-threaded:
//! - One fixed-size step per tick, no wall-clock time
//! - Stable iteration order (bricks in creation order)
//! - Drawing goes through the `Surface` trait only

pub mod collision;
pub mod geometry;
pub mod layout;
pub mod observer;
pub mod playground;
pub mod state;

pub use collision::{Border, Bounds, BrickFace, Collision, resolve_collisions};
pub use geometry::{Anchor, Offset, compute_box};
pub use layout::BrickGrid;
pub use observer::{GameEvent, GameObserver, LogObserver, NoopObserver};
pub use playground::{Direction, Playground};
pub use state::{Ball, Brick, Draw, Entity, GameStatus, Paddle, Status};
