/// Pure game rules: geometry, kinematics, collision queries and the
/// character state machine. Nothing here owns a game snapshot.

pub mod entity;
pub mod geometry;
pub mod kinematics;
pub mod motion;
pub mod rules;
