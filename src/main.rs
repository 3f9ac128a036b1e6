/// Headless host loop.
///
/// Runs a built-in arena with a scripted player: whenever the character is
/// at rest, the next scripted action is applied. One frame tick follows every
/// input, the way a real host interleaves key events with its timer.

use henhouse::{apply_action, step_frame, Action, Cell, GameConfig, GameEvent, GameState, LevelLayout, Motion};

const MAX_FRAMES: usize = 10_000;

const DEMO_SCRIPT: &[Action] = &[Action::WalkRight, Action::WalkRight, Action::Jump];

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::load();
    let mut game = GameState::new(&demo_layout(), &config);
    let mut script = DEMO_SCRIPT.iter().copied();

    log::info!(
        "Henhouse demo: {} eggs, {} food, {} ticks of {} ms on the clock",
        game.eggs.len(),
        game.food.len(),
        game.time,
        config.speed.tick_rate_ms,
    );

    let mut frames = 0;
    while frames < MAX_FRAMES && !game.status.is_terminal() {
        let at_rest = game.man.motion() == Motion::Idle;
        if at_rest && script.len() == 0 {
            break;
        }
        let action = if at_rest { script.next() } else { None };
        game = apply_action(&game, action, &config);

        let (next, events) = step_frame(&game, &config);
        events.iter().for_each(report);
        game = next;
        frames += 1;
    }

    log::info!(
        "Finished after {frames} frames: {:?}, score {}, {} eggs left, time {}",
        game.status,
        game.score,
        game.eggs.len(),
        game.time,
    );
}

fn report(event: &GameEvent) {
    match event {
        GameEvent::EggCollected { cell } => log::info!("Egg at row {} col {}", cell.row, cell.col),
        GameEvent::FoodCollected { cell } => log::info!("Food at row {} col {}", cell.row, cell.col),
        GameEvent::Won => log::info!("YOU WIN"),
        GameEvent::TimedOut => log::info!("YOU LOSE"),
        GameEvent::JumpLanded { .. } | GameEvent::FallStarted => log::debug!("{event:?}"),
    }
}

/// Ground floor, a ledge at the top of a staircase, and three collectibles.
///
/// ```text
///  row 6    ...........H..M.....
///  row 7    ............#####...
///  ...                 H
///  row 10   ....FE..E..H........
///  row 11   ####################
/// ```
fn demo_layout() -> LevelLayout {
    LevelLayout::new(Cell::new(10, 3), Cell::new(6, 14))
        .with_floor((0..20).map(|c| Cell::new(11, c)))
        .with_floor((12..17).map(|c| Cell::new(7, c)))
        .with_stairs((6..11).map(|r| Cell::new(r, 11)))
        .with_eggs([Cell::new(10, 5), Cell::new(10, 8)])
        .with_food([Cell::new(10, 4)])
}
