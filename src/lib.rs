//! Henhouse: a tile-grid platformer simulation core.
//!
//! - `domain`: geometry, kinematics, collision rules, character state machine
//! - `sim`: immutable game snapshots and the `apply_action` / `advance_frame` transitions
//! - `config`: tunables loaded from `config.toml`
//!
//! Rendering, input binding and level file parsing belong to the host.

pub mod config;
pub mod domain;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use domain::entity::{Action, Character, Mob, Motion, Stance};
pub use domain::geometry::{Cell, CellSet, Direction, Point};
pub use domain::kinematics::Speed;
pub use sim::event::GameEvent;
pub use sim::outcome::Status;
pub use sim::step::{advance_frame, apply_action, step_frame};
pub use sim::world::{GameState, LevelLayout};
