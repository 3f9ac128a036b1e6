/// The two transition entry points.
///
///   `apply_action`:  one discrete input (walk, climb, jump) or none
///   `advance_frame`: one fixed-duration tick
///
/// Frame processing order:
///   1. Terminal check (Winner / Timeout freeze everything)
///   2. Character frame advance (snap, integrate, land, fall)
///   3. Collection at the character's new cell (eggs before food)
///   4. Clock tick (floored at zero)
///   5. Status re-evaluation
///
/// Both functions leave their input untouched and return the next snapshot.
/// The host decides the order in which inputs and ticks are applied.

use crate::config::GameConfig;
use crate::domain::entity::{Action, Motion};
use crate::domain::geometry::Direction;
use crate::domain::motion;
use super::event::GameEvent;
use super::outcome::{self, Status};
use super::world::GameState;

// ══════════════════════════════════════════════════════════════
// Input
// ══════════════════════════════════════════════════════════════

/// Apply one input. Illegal moves, and any move outside `Playing`, leave
/// the snapshot as it was.
pub fn apply_action(state: &GameState, action: Option<Action>, config: &GameConfig) -> GameState {
    let Some(action) = action else { return state.clone() };
    if state.current_status() != Status::Playing {
        return state.clone();
    }

    let map = state.terrain(config);
    let man = &state.man;
    let next = match action {
        Action::WalkLeft => motion::walk_start(man, Direction::Left, &map, config),
        Action::WalkRight => motion::walk_start(man, Direction::Right, &map, config),
        Action::UpStairs => motion::climb_start(man, Direction::Up, &map, config),
        Action::DownStairs => motion::climb_start(man, Direction::Down, &map, config),
        Action::Jump => {
            let jumped = motion::jump_start(man, config);
            if jumped != *man {
                log::debug!("jump from {:?} facing {:?}", man.cell(&config.arena), man.facing);
            }
            jumped
        }
    };

    if next == *man {
        state.clone()
    } else {
        GameState { man: next, ..state.clone() }
    }
}

// ══════════════════════════════════════════════════════════════
// Frame
// ══════════════════════════════════════════════════════════════

pub fn advance_frame(state: &GameState, config: &GameConfig) -> GameState {
    step_frame(state, config).0
}

/// Advance one tick, also reporting what happened during it.
pub fn step_frame(state: &GameState, config: &GameConfig) -> (GameState, Vec<GameEvent>) {
    let status = state.current_status();
    if status.is_terminal() {
        return (GameState { status, ..state.clone() }, vec![]);
    }

    let mut events = Vec::new();
    let arena = &config.arena;

    let man = motion::frame_advance(&state.man, &state.terrain(config), config);
    let cell = man.cell(arena);

    if state.man.is_jumping() && !man.is_jumping() {
        log::debug!("landed at {cell:?}");
        events.push(GameEvent::JumpLanded { cell });
    }
    if state.man.motion() != Motion::Falling && man.motion() == Motion::Falling {
        log::debug!("falling from {cell:?}");
        events.push(GameEvent::FallStarted);
    }

    let mut eggs = state.eggs.clone();
    let mut food = state.food.clone();
    let got_egg = eggs.remove(&cell);
    let got_food = food.remove(&cell);

    let bonus = if got_egg {
        config.rules.egg_bonus
    } else if got_food {
        config.rules.food_bonus
    } else {
        0
    };
    if got_egg {
        log::debug!("egg collected at {cell:?}, {} left", eggs.len());
        events.push(GameEvent::EggCollected { cell });
    }
    if got_food {
        log::debug!("food collected at {cell:?}");
        events.push(GameEvent::FoodCollected { cell });
    }

    let time = state.time.saturating_sub(1);
    let score = state.score + bonus;
    let status = outcome::evaluate(time, &eggs);

    match status {
        Status::Playing => {}
        Status::Winner => {
            log::info!("all eggs collected, score {score}, {time} ticks left");
            events.push(GameEvent::Won);
        }
        Status::Timeout => {
            log::info!("time up, score {score}, {} eggs left", eggs.len());
            events.push(GameEvent::TimedOut);
        }
    }

    let next = GameState {
        man,
        floor: state.floor.clone(),
        stairs: state.stairs.clone(),
        eggs,
        food,
        mob: state.mob,
        time,
        score,
        status,
    };
    (next, events)
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════
