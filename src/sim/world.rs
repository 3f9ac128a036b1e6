/// GameState: the complete snapshot of a running game.
///
/// ## Immutability
///
/// A snapshot is never mutated. `apply_action` and `advance_frame` each
/// build a new one from the old; the host keeps whichever is current.
///
/// ## Terrain vs. collectibles
///
///   - `floor`, `stairs`: static for the life of a level. Shared between
///     snapshots behind an `Arc`, so producing a new snapshot per frame
///     does not copy the level.
///   - `eggs`, `food`:    owned per snapshot. They only ever lose cells.
///
/// ## Level layout
///
/// The level file format belongs to the host. The core only needs the
/// placements, handed over as a `LevelLayout`.

use std::sync::Arc;

use crate::config::GameConfig;
use crate::domain::entity::{Character, Mob};
use crate::domain::geometry::{Cell, CellSet};
use crate::domain::rules::Terrain;
use super::outcome::{self, Status};

/// Placements produced by a level loader.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelLayout {
    pub man: Cell,
    pub mob: Cell,
    pub floor: CellSet,
    pub stairs: CellSet,
    pub eggs: CellSet,
    pub food: CellSet,
}

impl LevelLayout {
    pub fn new(man: Cell, mob: Cell) -> Self {
        LevelLayout { man, mob, ..Default::default() }
    }

    pub fn with_floor(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.floor.extend(cells);
        self
    }

    pub fn with_stairs(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.stairs.extend(cells);
        self
    }

    pub fn with_eggs(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.eggs.extend(cells);
        self
    }

    pub fn with_food(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.food.extend(cells);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub man: Character,
    pub floor: Arc<CellSet>,
    pub stairs: Arc<CellSet>,
    pub eggs: CellSet,
    pub food: CellSet,
    pub mob: Mob,
    pub time: u32,
    pub score: u32,
    pub status: Status,
}

impl GameState {
    /// Initial snapshot: full clock, zero score.
    pub fn new(layout: &LevelLayout, config: &GameConfig) -> Self {
        let time = config.rules.initial_time;
        GameState {
            man: Character::spawn(layout.man, &config.arena),
            floor: Arc::new(layout.floor.clone()),
            stairs: Arc::new(layout.stairs.clone()),
            eggs: layout.eggs.clone(),
            food: layout.food.clone(),
            mob: Mob::spawn(layout.mob, &config.arena),
            time,
            score: 0,
            status: outcome::evaluate(time, &layout.eggs),
        }
    }

    /// Rule-query view over this snapshot's static terrain.
    pub fn terrain<'a>(&'a self, config: &'a GameConfig) -> Terrain<'a> {
        Terrain { floor: &self.floor, stairs: &self.stairs, arena: &config.arena }
    }

    /// Status as derived from the current clock and eggs.
    pub fn current_status(&self) -> Status {
        outcome::evaluate(self.time, &self.eggs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::Point;

    #[test]
    fn new_game_from_layout() {
        let cfg = GameConfig::default();
        let layout = LevelLayout::new(Cell::new(5, 2), Cell::new(1, 8))
            .with_floor((0..20).map(|c| Cell::new(6, c)))
            .with_stairs([Cell::new(5, 10)])
            .with_eggs([Cell::new(5, 4), Cell::new(5, 9)])
            .with_food([Cell::new(5, 6)]);

        let g = GameState::new(&layout, &cfg);
        assert_eq!(g.man.pos, Point::new(96, 160));
        assert_eq!(g.mob.pos, Point::new(384, 32));
        assert_eq!(g.floor.len(), 20);
        assert_eq!(g.eggs.len(), 2);
        assert_eq!(g.time, 2666);
        assert_eq!(g.score, 0);
        assert_eq!(g.status, Status::Playing);
    }

    #[test]
    fn layout_without_eggs_starts_won() {
        let cfg = GameConfig::default();
        let g = GameState::new(&LevelLayout::new(Cell::new(0, 0), Cell::new(0, 1)), &cfg);
        assert_eq!(g.status, Status::Winner);
    }

    #[test]
    fn duplicate_cells_collapse() {
        let layout = LevelLayout::new(Cell::new(0, 0), Cell::new(0, 0))
            .with_eggs([Cell::new(2, 2), Cell::new(2, 2)]);
        assert_eq!(layout.eggs.len(), 1);
    }

    #[test]
    fn snapshots_share_static_terrain() {
        let cfg = GameConfig::default();
        let layout = LevelLayout::new(Cell::new(0, 0), Cell::new(0, 1))
            .with_floor([Cell::new(1, 0)])
            .with_eggs([Cell::new(3, 3)]);
        let g = GameState::new(&layout, &cfg);
        let copy = g.clone();
        assert!(Arc::ptr_eq(&g.floor, &copy.floor));
    }
}
