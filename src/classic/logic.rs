use log::{debug, info};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::config::Settings;

use super::types::{Collision, Coord, Dir, GameState, Snake, TickOutcome, UserAction};

pub fn reset(settings: &Settings) -> GameState {
    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut s = GameState {
        cols: settings.cols(),
        rows: settings.rows(),
        units: settings.game_units(),
        snake: new_snake(settings.game_units(), settings.initial_len),
        food: Coord::default(),
        score: 0,
        running: true,
        initial_len: settings.initial_len,
        rng,
    };
    place_food(&mut s);
    info!("New round on a {}x{} grid", s.cols, s.rows);

    s
}

/// Puts every piece back to its starting position, keeping the rng.
pub fn restart(s: &mut GameState) {
    s.snake = new_snake(s.units, s.initial_len);
    s.score = 0;
    s.running = true;
    place_food(s);
    info!("Restarted");
}

fn new_snake(units: usize, len: usize) -> Snake {
    // The whole body starts stacked on the top-left cell and unrolls as it moves.
    Snake::new((0, 0), Dir::Right, len, units)
}

pub fn tick(s: &mut GameState) -> TickOutcome {
    if !s.running {
        return TickOutcome::Idle;
    }

    s.snake.advance();

    let mut outcome = TickOutcome::Moved;
    if s.snake.head_pos() == s.food {
        s.snake.grow();
        s.score += 1;
        place_food(s);
        info!("1 food gained. Score: {}, length: {}", s.score, s.snake.len());
        outcome = TickOutcome::Ate;
    }

    if let Some(collision) = check_collisions(s) {
        s.running = false;
        info!(
            "Hit {:?} at {:?} heading {:?}. Final score: {}",
            collision, s.snake.head_pos(), s.snake.dir(), s.score
        );
        return TickOutcome::Collided(collision);
    }

    outcome
}

fn check_collisions(s: &GameState) -> Option<Collision> {
    if s.snake.hits_self() {
        Some(Collision::Body)
    } else if !s.snake.head_pos().in_bounds(s.cols, s.rows) {
        Some(Collision::Wall)
    } else {
        None
    }
}

/// Picks a free cell uniformly. Falls back to any cell once the snake covers
/// the whole board.
pub fn place_food(s: &mut GameState) {
    let cols = s.cols;
    let mut taken = vec![false; s.units];
    for c in s.snake.segments() {
        if c.in_bounds(s.cols, s.rows) {
            taken[c.y as usize * cols as usize + c.x as usize] = true;
        }
    }

    let free: Vec<Coord> = taken
        .iter()
        .enumerate()
        .filter(|(_, taken)| !**taken)
        .map(|(i, _)| Coord { x: i as i32 % cols, y: i as i32 / cols })
        .collect();

    s.food = match free.choose(&mut s.rng) {
        Some(food) => *food,
        None => Coord {
            x: s.rng.gen_range(0..s.cols),
            y: s.rng.gen_range(0..s.rows),
        },
    };
    debug_assert!(free.is_empty() || !s.snake.contains(s.food));
}

/// Returns true when the action restarted the round.
pub fn handle_action(s: &mut GameState, action: UserAction) -> bool {
    let dir = match action {
        UserAction::Up => Dir::Up,
        UserAction::Left => Dir::Left,
        UserAction::Down => Dir::Down,
        UserAction::Right => Dir::Right,
        UserAction::Restart => {
            if s.running {
                debug!("Restart ignored while running");
                return false;
            }
            restart(s);
            return true;
        }
        UserAction::Quit => return false,
    };

    if s.running && !s.snake.point(dir) {
        debug!("Ignoring reverse turn to {:?}", dir);
    }
    false
}
