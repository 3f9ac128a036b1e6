/// Game snapshots and the two transition entry points.

pub mod event;
pub mod outcome;
pub mod step;
pub mod world;
