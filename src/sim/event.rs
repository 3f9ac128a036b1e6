/// Events emitted during a frame step.
/// The presentation layer consumes these for feedback; the core ignores them.

use crate::domain::geometry::Cell;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    EggCollected { cell: Cell },
    FoodCollected { cell: Cell },
    JumpLanded { cell: Cell },
    FallStarted,
    TimedOut,
    Won,
}
