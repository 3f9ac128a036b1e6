/// Speed vectors and the per-frame speed adjustment.
///
/// Movement is cell-quantized: a walk or climb starts with a fixed speed
/// and keeps it until the position lands exactly on a grid line, at which
/// point that axis snaps to zero. Airborne characters never snap; they
/// accumulate gravity instead, capped at the jump impulse mirrored downward.

use std::ops::Add;

use super::entity::Character;
use super::geometry::Point;
use crate::config::GameConfig;

/// Pixels per frame. Positive `dy` is downward.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Speed {
    pub dx: i32,
    pub dy: i32,
}

impl Speed {
    pub const ZERO: Speed = Speed { dx: 0, dy: 0 };

    pub const fn new(dx: i32, dy: i32) -> Self {
        Speed { dx, dy }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Speed for the frame about to be integrated.
    ///
    /// Grounded or climbing: each axis drops to zero independently once
    /// `pos` sits on a grid line for that axis.
    ///
    /// Airborne: `dy` grows by `gravity`. If the result would be faster
    /// than `-jump_impulse` downward, the current speed is kept as is.
    pub fn snap_if_aligned(self, pos: Point, airborne: bool, config: &GameConfig) -> Speed {
        let arena = &config.arena;
        let dx = if !airborne && pos.x_aligned(arena) { 0 } else { self.dx };
        let dy = if airborne {
            self.dy + config.speed.gravity
        } else if pos.y_aligned(arena) {
            0
        } else {
            self.dy
        };

        if dy > -config.speed.jump_impulse {
            self
        } else {
            Speed::new(dx, dy)
        }
    }
}

impl Add<Speed> for Point {
    type Output = Point;

    fn add(self, speed: Speed) -> Point {
        Point::new(self.x + speed.dx, self.y + speed.dy)
    }
}

/// Replace the character's speed. Legality is the caller's business.
pub fn request_speed_change(speed: Speed, character: &Character) -> Character {
    Character { speed, ..*character }
}
