use into_color::as_color;
use log::info;

use crate::{
    config::Settings,
    text::{text_height, text_pixels, text_width},
};

use super::{
    logic,
    timer::Ticker,
    types::{Coord, GameState, TickOutcome, UserAction},
};

pub mod draw_piston;
#[cfg(feature = "sdl2-frontend")]
pub mod draw_sdl2;

pub use draw_piston::PistonFrontend;
#[cfg(feature = "sdl2-frontend")]
pub use draw_sdl2::Sdl2Frontend;

/// RGBA
pub type Color = [u8; 4];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}
impl Rect {
    pub fn to_f64(self) -> [f64; 4] {
        [self.x as f64, self.y as f64, self.w as f64, self.h as f64]
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Shape {
    Clear(Color),
    Rect(Rect, Color),
    Ellipse(Rect, Color),
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FrontendEvent {
    Action(UserAction),
    /// Seconds since the previous update
    Update(f64),
    Render,
}

pub trait Frontend {
    /// Blocks until something happens. `None` once the window is gone.
    fn next_event(&mut self) -> Option<FrontendEvent>;
    fn present(&mut self, shapes: &[Shape]);
}

pub fn color_f32(color: Color) -> [f32; 4] {
    color.map(|c| c as f32 / u8::MAX as f32)
}

///////////////////////////////////////////////////////////

pub fn window_loop<F: Frontend>(f: &mut F, settings: &Settings) {
    let mut s = logic::reset(settings);
    let mut ticker = Ticker::new(settings.delay);

    while let Some(event) = f.next_event() {
        match event {
            FrontendEvent::Action(UserAction::Quit) => break,
            FrontendEvent::Action(action) => {
                if logic::handle_action(&mut s, action) {
                    ticker.reset();
                }
            }
            // The ticker only runs while the round does.
            FrontendEvent::Update(dt) if s.running => {
                for _ in 0..ticker.advance(dt) {
                    if let TickOutcome::Collided(_) = logic::tick(&mut s) {
                        break;
                    }
                }
            }
            FrontendEvent::Update(_) => {}
            FrontendEvent::Render => f.present(&scene(&s, settings)),
        }
    }

    info!("Window closed with score {}", s.score);
}

///////////////////////////////////////////////////////////

/// Pixel size of the score text
pub const SCORE_PX: u32 = 6;
/// Pixel size of "Game Over"
pub const GAME_OVER_PX: u32 = 11;
/// Pixel size of the restart hint
pub const HINT_PX: u32 = 4;
/// Baseline of the score text
const SCORE_BASELINE: i32 = 40;
/// Distance from the window centre down to the hint's baseline
const HINT_OFFSET: i32 = 50;

pub const RESTART_HINT: &str = "Press 'R' to restart";

pub fn scene(s: &GameState, settings: &Settings) -> Vec<Shape> {
    let mut shapes = vec![Shape::Clear(BACKGROUND_COLOR)];
    let unit = settings.unit_size;
    let (w, h) = (settings.width as i32, settings.height as i32);

    if s.running {
        shapes.push(Shape::Ellipse(cell_rect(s.food, unit), FOOD_COLOR));

        // Tail first so the head stays on top while the body is still stacked.
        for (i, seg) in s.snake.segments().iter().enumerate().rev() {
            let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
            shapes.push(Shape::Rect(cell_rect(*seg, unit), color));
        }
    } else {
        centered_text(&mut shapes, "Game Over", h / 2, w, GAME_OVER_PX, GAME_OVER_COLOR);
        centered_text(&mut shapes, RESTART_HINT, h / 2 + HINT_OFFSET, w, HINT_PX, HINT_COLOR);
    }
    centered_text(&mut shapes, &score_line(s.score), SCORE_BASELINE, w, SCORE_PX, SCORE_COLOR);

    shapes
}

pub fn score_line(score: usize) -> String {
    format!("Score: {}", score)
}

fn cell_rect(Coord { x, y }: Coord, unit: u32) -> Rect {
    Rect { x: x * unit as i32, y: y * unit as i32, w: unit, h: unit }
}

fn centered_text(shapes: &mut Vec<Shape>, text: &str, baseline: i32, w: i32, px: u32, color: Color) {
    let x = (w - text_width(text, px) as i32) / 2;
    let y = baseline - text_height(px) as i32;
    shapes.extend(
        text_pixels(text, (x, y), px)
            .into_iter()
            .map(|(x, y, side)| Shape::Rect(Rect { x, y, w: side, h: side }, color)),
    );
}

pub const BACKGROUND_COLOR: Color = as_color!("#000000");
pub const FOOD_COLOR: Color = as_color!("#ff0000");
pub const HEAD_COLOR: Color = as_color!("#00ff00");
pub const BODY_COLOR: Color = as_color!("#2db400");
pub const SCORE_COLOR: Color = as_color!("#ff0000");
pub const GAME_OVER_COLOR: Color = as_color!("#ff0000");
pub const HINT_COLOR: Color = as_color!("#ffffff");

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::classic::types::Dir;

    fn settings() -> Settings {
        Settings { seed: Some(3), ..Settings::default() }
    }

    fn rects_of(shapes: &[Shape], color: Color) -> Vec<Rect> {
        shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Rect(rect, c) if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    fn ellipses(shapes: &[Shape]) -> Vec<(Rect, Color)> {
        shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Ellipse(rect, c) => Some((*rect, *c)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn running_scene_draws_food_snake_and_score() {
        let settings = settings();
        let mut s = logic::reset(&settings);
        s.food = Coord { x: 10, y: 10 };
        for _ in 0..6 {
            logic::tick(&mut s);
        }

        let shapes = scene(&s, &settings);
        assert_eq!(shapes[0], Shape::Clear(BACKGROUND_COLOR));
        assert_eq!(ellipses(&shapes), vec![(Rect { x: 250, y: 250, w: 25, h: 25 }, FOOD_COLOR)]);
        assert_eq!(rects_of(&shapes, HEAD_COLOR), vec![Rect { x: 150, y: 0, w: 25, h: 25 }]);
        assert_eq!(rects_of(&shapes, BODY_COLOR).len(), 5);
        assert!(!rects_of(&shapes, SCORE_COLOR).is_empty());
        assert!(rects_of(&shapes, HINT_COLOR).is_empty());

        // Head is drawn last.
        let last = shapes
            .iter()
            .rposition(|shape| matches!(shape, Shape::Rect(_, c) if *c == HEAD_COLOR || *c == BODY_COLOR));
        assert_eq!(shapes[last.unwrap()], Shape::Rect(Rect { x: 150, y: 0, w: 25, h: 25 }, HEAD_COLOR));
    }

    #[test]
    fn score_is_centred_at_top() {
        let settings = settings();
        let s = logic::reset(&settings);
        let shapes = scene(&s, &settings);

        let score = rects_of(&shapes, SCORE_COLOR);
        let left = score.iter().map(|r| r.x).min().unwrap();
        let right = score.iter().map(|r| r.x + r.w as i32).max().unwrap();
        let bottom = score.iter().map(|r| r.y + r.h as i32).max().unwrap();

        let width = text_width(&score_line(0), SCORE_PX) as i32;
        assert_eq!(left, (600 - width) / 2);
        assert_eq!(right - left, width);
        assert_eq!(bottom, SCORE_BASELINE);
    }

    #[test]
    fn game_over_scene_hides_board() {
        let settings = settings();
        let mut s = logic::reset(&settings);
        logic::handle_action(&mut s, UserAction::Up);
        logic::tick(&mut s);
        assert!(!s.running);

        let shapes = scene(&s, &settings);
        assert!(ellipses(&shapes).is_empty());
        assert!(rects_of(&shapes, HEAD_COLOR).is_empty());
        assert!(rects_of(&shapes, BODY_COLOR).is_empty());

        let hint = rects_of(&shapes, HINT_COLOR);
        assert!(!hint.is_empty());
        let hint_bottom = hint.iter().map(|r| r.y + r.h as i32).max().unwrap();
        assert_eq!(hint_bottom, 300 + HINT_OFFSET);
    }

    /// Replays a fixed list of events and keeps every presented frame.
    struct ScriptedFrontend {
        events: VecDeque<FrontendEvent>,
        frames: Vec<Vec<Shape>>,
    }
    impl ScriptedFrontend {
        fn new(events: impl IntoIterator<Item = FrontendEvent>) -> Self {
            ScriptedFrontend { events: events.into_iter().collect(), frames: Vec::new() }
        }
    }
    impl Frontend for ScriptedFrontend {
        fn next_event(&mut self) -> Option<FrontendEvent> {
            self.events.pop_front()
        }
        fn present(&mut self, shapes: &[Shape]) {
            self.frames.push(shapes.to_vec());
        }
    }

    fn head_of(frame: &[Shape]) -> Option<Rect> {
        rects_of(frame, HEAD_COLOR).first().copied()
    }

    #[test]
    fn loop_ticks_on_elapsed_time() {
        use FrontendEvent::*;

        let settings = settings();
        let tick = settings.delay.as_secs_f64();
        let mut f = ScriptedFrontend::new([
            Render,
            Update(tick / 2.0),
            Render,
            Update(tick / 2.0),
            Render,
        ]);
        window_loop(&mut f, &settings);

        let heads: Vec<_> = f.frames.iter().map(|frame| head_of(frame).map(|r| r.x)).collect();
        assert_eq!(heads, vec![Some(0), Some(0), Some(25)]);
    }

    #[test]
    fn loop_runs_game_over_and_restart() {
        use FrontendEvent::*;

        let settings = settings();
        let tick = settings.delay.as_secs_f64();
        let mut f = ScriptedFrontend::new([
            Action(UserAction::Up),
            Update(tick),
            Render,
            // The round is over, so time passing changes nothing.
            Update(tick * 10.0),
            Render,
            Action(UserAction::Restart),
            Render,
            Action(UserAction::Quit),
            Render,
        ]);
        window_loop(&mut f, &settings);

        assert_eq!(f.frames.len(), 3);
        assert!(!rects_of(&f.frames[0], HINT_COLOR).is_empty());
        assert_eq!(f.frames[0], f.frames[1]);
        assert!(rects_of(&f.frames[2], HINT_COLOR).is_empty());
        assert_eq!(head_of(&f.frames[2]), Some(Rect { x: 0, y: 0, w: 25, h: 25 }));
        assert_eq!(f.events.len(), 1);
    }

    #[test]
    fn color_conversion() {
        assert_eq!(color_f32(HINT_COLOR), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(color_f32(BACKGROUND_COLOR), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn turning_changes_drawn_head() {
        let settings = settings();
        let mut s = logic::reset(&settings);
        s.food = Coord { x: 20, y: 20 };
        logic::tick(&mut s);
        logic::handle_action(&mut s, UserAction::Down);
        logic::tick(&mut s);
        assert_eq!(s.snake.dir(), Dir::Down);

        let shapes = scene(&s, &settings);
        assert_eq!(head_of(&shapes), Some(Rect { x: 25, y: 25, w: 25, h: 25 }));
    }
}
