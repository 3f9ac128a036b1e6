/// Character state machine: action starts and the per-frame advance.
///
/// ## Start transitions (one per action)
///
/// ┌────────────┬──────────────────────────────┬──────────────────────────────┐
/// │ Transition  │ Requires                      │ On success                   │
/// ├────────────┼──────────────────────────────┼──────────────────────────────┤
/// │ walk_start  │ at rest, not airborne,        │ dx = ±walk, one step taken,  │
/// │             │ step in bounds, no side wall  │ facing = dir, Grounded       │
/// │ climb_start │ at rest, not airborne,        │ dy = ∓climb, one step taken, │
/// │             │ stair above (Up) / below (Dn) │ facing = dir, OnStairs       │
/// │ jump_start  │ at rest, Grounded             │ dy = impulse, dx = ±walk     │
/// │             │                               │ unless next cell is outside, │
/// │             │                               │ one step taken, Airborne     │
/// └────────────┴──────────────────────────────┴──────────────────────────────┘
///
/// A failed requirement returns the character unchanged.
///
/// ## Frame advance
///
/// Speed first goes through `snap_if_aligned`, then exactly one branch runs:
///
///   Airborne           → integrate both axes, clamp at walls, bounce, land
///   dx != 0            → walk: integrate x
///   OnStairs, dy != 0  → climb: integrate y
///   nothing below      → fall: dy = climb speed, integrate y
///   otherwise          → settle: speed = 0
///
/// Walk and climb steps do not re-check terrain; legality was decided at
/// the start transition and the step always ends on the next grid line.

use super::entity::{Character, Stance};
use super::geometry::{Direction, Point};
use super::kinematics::{request_speed_change, Speed};
use super::rules::{self, Terrain};
use crate::config::GameConfig;

pub fn walk_start(man: &Character, dir: Direction, map: &Terrain, config: &GameConfig) -> Character {
    debug_assert!(dir.is_horizontal());
    if man.is_jumping() || !man.speed.is_zero() {
        return *man;
    }

    let moving = request_speed_change(Speed::new(dir.sign() * config.speed.walk, 0), man);
    let next = man.pos + moving.speed;

    if rules::within_arena_bounds(next, &config.arena) && !rules::blocked_by_side_wall(map, man, dir) {
        Character { pos: next, facing: dir, speed: moving.speed, stance: Stance::Grounded }
    } else {
        *man
    }
}

pub fn climb_start(man: &Character, dir: Direction, map: &Terrain, config: &GameConfig) -> Character {
    if !man.is_idle() {
        return *man;
    }

    let allowed = match dir {
        Direction::Up => rules::can_climb_up(map, man),
        Direction::Down => rules::can_climb_down(map, man),
        Direction::Left | Direction::Right => false,
    };
    if !allowed {
        return *man;
    }

    let speed = Speed::new(0, dir.sign() * config.speed.climb);
    Character { pos: man.pos + speed, facing: dir, speed, stance: Stance::OnStairs }
}

pub fn jump_start(man: &Character, config: &GameConfig) -> Character {
    if !man.speed.is_zero() || man.stance != Stance::Grounded {
        return *man;
    }

    let side = match man.facing {
        Direction::Right => Direction::Right,
        _ => Direction::Left,
    };
    let target = (man.cell(&config.arena) + side).to_point(&config.arena);
    let dx = if rules::within_arena_bounds(target, &config.arena) {
        side.sign() * config.speed.walk
    } else {
        0
    };

    let speed = Speed::new(dx, config.speed.jump_impulse);
    Character { pos: man.pos + speed, facing: man.facing, speed, stance: Stance::Airborne }
}

/// Advance the character by one frame.
pub fn frame_advance(man: &Character, map: &Terrain, config: &GameConfig) -> Character {
    let speed = man.speed.snap_if_aligned(man.pos, man.is_jumping(), config);

    match (man.stance, speed) {
        (Stance::Airborne, _) => airborne_step(man, speed, map, config),
        (_, s) if s.dx != 0 => Character {
            pos: Point::new(man.pos.x + s.dx, man.pos.y),
            speed: s,
            ..*man
        },
        (Stance::OnStairs, s) if s.dy != 0 => Character {
            pos: Point::new(man.pos.x, man.pos.y + s.dy),
            speed: s,
            ..*man
        },
        _ if rules::can_fall(map, man.pos) => {
            let falling = request_speed_change(Speed::new(0, config.speed.climb), man);
            Character { pos: falling.pos + falling.speed, ..falling }
        }
        _ => request_speed_change(Speed::ZERO, man),
    }
}

/// One frame of a jump (or of the fall that follows a jump over a gap).
///
/// The airborne stance is only cleared when the landed cell has floor
/// directly beneath it; a body over open air keeps jump kinematics,
/// including the capped gravity, until it lands somewhere.
fn airborne_step(man: &Character, speed: Speed, map: &Terrain, config: &GameConfig) -> Character {
    let arena = &config.arena;
    let candidate = man.pos + speed;

    let mut speed = if !rules::within_arena_bounds(candidate, arena) {
        Speed::new(0, speed.dy)
    } else if rules::will_bounce_off_wall(map, man.facing, candidate) {
        Speed::new(-speed.dx, speed.dy)
    } else {
        speed
    };
    // a bounce right next to the arena edge must not push through it
    if !rules::within_arena_bounds(man.pos + speed, arena) {
        speed.dx = 0;
    }

    let mut pos = man.pos + speed;
    if rules::is_landing(map, pos) {
        pos.y = pos.to_cell(arena).to_point(arena).y;
    }

    let supported = map.floor.contains(&(pos.to_cell(arena) + Direction::Down));
    let stance = if supported { Stance::Grounded } else { Stance::Airborne };
    // touchdown: y is on a grid line, so the descent ends here
    if supported {
        speed.dy = 0;
    }

    Character { pos, facing: man.facing, speed, stance }
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════
