/// Outcome evaluation: the status of a snapshot is a pure function of
/// the remaining time and the remaining eggs.

use crate::domain::geometry::CellSet;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Status {
    Playing,
    Winner,
    Timeout,
}

impl Status {
    /// Terminal statuses freeze all motion.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Playing)
    }
}

/// Time runs out before eggs: a last-tick pickup that empties the egg set
/// on the same frame the clock hits zero is still a timeout.
pub fn evaluate(time: u32, eggs: &CellSet) -> Status {
    if time == 0 {
        Status::Timeout
    } else if eggs.is_empty() {
        Status::Winner
    } else {
        Status::Playing
    }
}
