/// Entities: the controlled character, the mob, and the input actions.
///
/// The character's movement mode is a `Stance`, not a pair of flags, so
/// "jumping while climbing" cannot be represented. The finer-grained
/// `Motion` (idle / walking / falling ...) is derived from stance + speed.

use super::geometry::{Cell, Direction, Point};
use super::kinematics::Speed;
use crate::config::ArenaConfig;

/// Discrete input delivered by the host's input mapper.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Action {
    WalkLeft,
    WalkRight,
    UpStairs,
    DownStairs,
    Jump,
}

/// What the character is standing in or on.
///
/// `OnStairs` is entered by a climb and left only by walking or jumping;
/// it outlives the climb itself, which is why a character at the top of
/// a staircase must step off before it can jump.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Stance {
    #[default]
    Grounded,
    OnStairs,
    Airborne,
}

/// Presentation-level motion, derived each time it is asked for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Motion {
    Idle,
    Walking,
    Climbing,
    Jumping,
    Falling,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Character {
    pub pos: Point,
    pub facing: Direction,
    pub speed: Speed,
    pub stance: Stance,
}

impl Character {
    pub fn spawn(cell: Cell, arena: &ArenaConfig) -> Self {
        Character {
            pos: cell.to_point(arena),
            facing: Direction::Left,
            speed: Speed::ZERO,
            stance: Stance::Grounded,
        }
    }

    pub fn is_jumping(&self) -> bool {
        self.stance == Stance::Airborne
    }

    pub fn is_climbing(&self) -> bool {
        self.stance == Stance::OnStairs
    }

    /// At rest and able to take a new walk or climb action.
    pub fn is_idle(&self) -> bool {
        self.speed.is_zero() && !self.is_jumping()
    }

    pub fn cell(&self, arena: &ArenaConfig) -> Cell {
        self.pos.to_cell(arena)
    }

    pub fn motion(&self) -> Motion {
        match (self.stance, self.speed) {
            (Stance::Airborne, _) => Motion::Jumping,
            (_, s) if s.dx != 0 => Motion::Walking,
            (Stance::OnStairs, s) if s.dy != 0 => Motion::Climbing,
            (Stance::Grounded, s) if s.dy != 0 => Motion::Falling,
            _ => Motion::Idle,
        }
    }
}

/// Secondary actor. Placed by the level, never moves.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Mob {
    pub pos: Point,
    pub facing: Direction,
    pub speed: Speed,
}

impl Mob {
    pub fn spawn(cell: Cell, arena: &ArenaConfig) -> Self {
        Mob {
            pos: cell.to_point(arena),
            facing: Direction::Left,
            speed: Speed::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn man_with(stance: Stance, speed: Speed) -> Character {
        let mut m = Character::spawn(Cell::new(3, 3), &GameConfig::default().arena);
        m.stance = stance;
        m.speed = speed;
        m
    }

    #[test]
    fn spawn_at_cell_facing_left() {
        let arena = GameConfig::default().arena;
        let m = Character::spawn(Cell::new(2, 4), &arena);
        assert_eq!(m.pos, Point::new(192, 64));
        assert_eq!(m.facing, Direction::Left);
        assert!(m.is_idle());
        assert_eq!(m.cell(&arena), Cell::new(2, 4));
    }

    #[test]
    fn motion_derivation() {
        assert_eq!(man_with(Stance::Grounded, Speed::ZERO).motion(), Motion::Idle);
        assert_eq!(man_with(Stance::OnStairs, Speed::ZERO).motion(), Motion::Idle);
        assert_eq!(man_with(Stance::Grounded, Speed::new(-8, 0)).motion(), Motion::Walking);
        assert_eq!(man_with(Stance::OnStairs, Speed::new(0, -8)).motion(), Motion::Climbing);
        assert_eq!(man_with(Stance::Grounded, Speed::new(0, 8)).motion(), Motion::Falling);
        assert_eq!(man_with(Stance::Airborne, Speed::ZERO).motion(), Motion::Jumping);
    }

    #[test]
    fn stance_flags_are_exclusive() {
        for stance in [Stance::Grounded, Stance::OnStairs, Stance::Airborne] {
            let m = man_with(stance, Speed::ZERO);
            assert!(!(m.is_jumping() && m.is_climbing()));
        }
    }

    #[test]
    fn airborne_is_never_idle() {
        assert!(!man_with(Stance::Airborne, Speed::ZERO).is_idle());
        assert!(man_with(Stance::OnStairs, Speed::ZERO).is_idle());
    }
}
