/// Collision and adjacency rules, truth-table driven.
///
/// Pure functions over the static terrain. They answer "is this legal?"
/// without performing the move; the motion layer decides what to do
/// with the answer.
///
/// ## Queries
///
/// ┌──────────────────────┬────────────────────────────────────────────┐
/// │ Query                 │ True when                                  │
/// ├──────────────────────┼────────────────────────────────────────────┤
/// │ within_arena_bounds   │ 0 <= x <= arena width - one cell           │
/// │ blocked_by_side_wall  │ cell + dir is floor                        │
/// │ can_climb_up          │ cell(x, y - lookahead) + Up is a stair     │
/// │ can_climb_down        │ cell + Down is a stair                     │
/// │ can_fall              │ cell + Down is neither floor nor stair     │
/// │ will_bounce_off_wall  │ Left/Right only: cell at the candidate's   │
/// │                       │ foot row is floor                          │
/// │ is_landing            │ cell at the foot row is floor              │
/// └──────────────────────┴────────────────────────────────────────────┘
///
/// Vertical bounds are not checked here: floor and ceiling are floor cells.

use super::entity::Character;
use super::geometry::{CellSet, Direction, Point};
use crate::config::ArenaConfig;

/// Immutable view of the static terrain for rule queries.
pub struct Terrain<'a> {
    pub floor: &'a CellSet,
    pub stairs: &'a CellSet,
    pub arena: &'a ArenaConfig,
}

impl<'a> Terrain<'a> {
    pub fn is_floor_at(&self, p: Point) -> bool {
        self.floor.contains(&p.to_cell(self.arena))
    }
}

/// Horizontal containment. The character occupies one cell width to the
/// right of `x`, so the rightmost legal `x` is one cell short of the wall.
pub fn within_arena_bounds(p: Point, arena: &ArenaConfig) -> bool {
    (0..=arena.max_x()).contains(&p.x)
}

/// Floor cells double as walls for sideways walking.
pub fn blocked_by_side_wall(map: &Terrain, man: &Character, dir: Direction) -> bool {
    map.floor.contains(&(man.cell(map.arena) + dir))
}

/// The character is two cells tall with its feet in `pos`'s cell. The probe
/// starts a few pixels above the feet and looks one cell further up, so a
/// climb near the bottom of a cell still finds the stair overhead.
pub fn can_climb_up(map: &Terrain, man: &Character) -> bool {
    let probe = Point::new(man.pos.x, man.pos.y - map.arena.climb_lookahead());
    map.stairs.contains(&(probe.to_cell(map.arena) + Direction::Up))
}

pub fn can_climb_down(map: &Terrain, man: &Character) -> bool {
    map.stairs.contains(&(man.cell(map.arena) + Direction::Down))
}

/// Nothing solid directly below: gravity applies.
pub fn can_fall(map: &Terrain, p: Point) -> bool {
    let below = p.to_cell(map.arena) + Direction::Down;
    !map.floor.contains(&below) && !map.stairs.contains(&below)
}

/// Mid-jump wall test. Probes the candidate position at foot level; a
/// floor cell there means the jump has run into a wall and must reverse.
pub fn will_bounce_off_wall(map: &Terrain, dir: Direction, candidate: Point) -> bool {
    match dir {
        Direction::Left | Direction::Right => {
            map.is_floor_at(Point::new(candidate.x, candidate.y + map.arena.foot_offset()))
        }
        Direction::Up | Direction::Down => false,
    }
}

/// Has a falling body at `p` reached a floor cell with its feet?
pub fn is_landing(map: &Terrain, p: Point) -> bool {
    map.is_floor_at(Point::new(p.x, p.y + map.arena.foot_offset()))
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════
