use std::{
    collections::VecDeque,
    thread,
    time::{Duration, Instant},
};

use color_eyre::eyre::{eyre, Result};
use log::warn;
use sdl2::{
    event::Event,
    keyboard::Keycode,
    pixels,
    render::WindowCanvas,
    EventPump,
};

use crate::config::Settings;

use super::{
    Frontend,
    FrontendEvent,
    Rect,
    Shape,
    super::types::UserAction,
};

const FRAME_TIME: Duration = Duration::from_micros(16_667);

pub struct Sdl2Frontend {
    canvas: WindowCanvas,
    event_pump: EventPump,
    pending: VecDeque<FrontendEvent>,
    last_frame: Instant,
}

impl Sdl2Frontend {
    pub fn new(settings: &Settings) -> Result<Sdl2Frontend> {
        let sdl_context = sdl2::init().map_err(|err| eyre!("Unable to initialize sdl context: {}", err))?;
        let video_subsystem = sdl_context
            .video()
            .map_err(|err| eyre!("Unable to get video subsystem: {}", err))?;

        let window = video_subsystem
            .window("Snake", settings.width, settings.height)
            .position_centered()
            .build()
            .map_err(|err| eyre!("Unable to build window: {}", err))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|err| eyre!("Unable to convert window into canvas: {}", err))?;
        let event_pump = sdl_context
            .event_pump()
            .map_err(|err| eyre!("Unable to create event pump: {}", err))?;

        Ok(Sdl2Frontend {
            canvas,
            event_pump,
            pending: VecDeque::new(),
            last_frame: Instant::now(),
        })
    }

    fn fill(&mut self, rect: Rect) {
        if rect.w == 0 || rect.h == 0 {
            return;
        }
        if let Err(err) = self.canvas.fill_rect(sdl2::rect::Rect::new(rect.x, rect.y, rect.w, rect.h)) {
            warn!("Error while drawing rect {}", err);
        }
    }
}

impl Frontend for Sdl2Frontend {
    fn next_event(&mut self) -> Option<FrontendEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }

            for event in self.event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => self.pending.push_back(FrontendEvent::Action(UserAction::Quit)),
                    Event::KeyDown { keycode: Some(keycode), .. } => {
                        if let Some(action) = key_to_user_action(keycode) {
                            self.pending.push_back(FrontendEvent::Action(action));
                        }
                    }
                    _ => {}
                }
            }
            if !self.pending.is_empty() {
                continue;
            }

            if let Some(remaining) = FRAME_TIME.checked_sub(self.last_frame.elapsed()) {
                thread::sleep(remaining);
            }
            let now = Instant::now();
            let dt = now - self.last_frame;
            self.last_frame = now;

            self.pending.push_back(FrontendEvent::Update(dt.as_secs_f64()));
            self.pending.push_back(FrontendEvent::Render);
        }
    }

    fn present(&mut self, shapes: &[Shape]) {
        for shape in shapes {
            match *shape {
                Shape::Clear(color) => {
                    self.canvas.set_draw_color(sdl_color(color));
                    self.canvas.clear();
                }
                Shape::Rect(rect, color) => {
                    self.canvas.set_draw_color(sdl_color(color));
                    self.fill(rect);
                }
                Shape::Ellipse(rect, color) => {
                    self.canvas.set_draw_color(sdl_color(color));
                    for span in ellipse_spans(rect) {
                        self.fill(span);
                    }
                }
            }
        }
        self.canvas.present();
    }
}

fn sdl_color([r, g, b, a]: super::Color) -> pixels::Color {
    pixels::Color::RGBA(r, g, b, a)
}

/// One-pixel-high rows covering the ellipse inscribed in `rect`.
fn ellipse_spans(rect: Rect) -> Vec<Rect> {
    let rx = rect.w as f64 / 2.0;
    let ry = rect.h as f64 / 2.0;
    (0..rect.h)
        .map(|row| {
            let dy = (row as f64 + 0.5 - ry) / ry;
            let half = rx * (1.0 - dy * dy).max(0.0).sqrt();
            Rect {
                x: rect.x + (rx - half).round() as i32,
                y: rect.y + row as i32,
                w: (2.0 * half).round() as u32,
                h: 1,
            }
        })
        .collect()
}

fn key_to_user_action(keycode: Keycode) -> Option<UserAction> {
    match keycode {
        Keycode::Up | Keycode::W => Some(UserAction::Up),
        Keycode::Left | Keycode::A => Some(UserAction::Left),
        Keycode::Down | Keycode::S => Some(UserAction::Down),
        Keycode::Right | Keycode::D => Some(UserAction::Right),
        Keycode::R => Some(UserAction::Restart),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipse_stays_inside_rect() {
        let rect = Rect { x: 50, y: 75, w: 25, h: 25 };
        let spans = ellipse_spans(rect);
        assert_eq!(spans.len(), 25);
        for span in spans {
            assert!(span.x >= rect.x);
            assert!(span.x + span.w as i32 <= rect.x + rect.w as i32);
        }
    }

    #[test]
    fn ellipse_is_widest_in_the_middle() {
        let spans = ellipse_spans(Rect { x: 0, y: 0, w: 25, h: 25 });
        assert!(spans[12].w > spans[0].w);
        assert_eq!(spans[12].w, 25);
    }

    #[test]
    fn keys_map_like_piston() {
        assert_eq!(key_to_user_action(Keycode::W), Some(UserAction::Up));
        assert_eq!(key_to_user_action(Keycode::Left), Some(UserAction::Left));
        assert_eq!(key_to_user_action(Keycode::R), Some(UserAction::Restart));
        assert_eq!(key_to_user_action(Keycode::F3), None);
    }
}
