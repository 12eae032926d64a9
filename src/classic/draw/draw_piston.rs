use color_eyre::eyre::{eyre, Result};
use piston_window::*;

use crate::config::Settings;

use super::{
    color_f32,
    Frontend,
    FrontendEvent,
    Shape,
    super::types::UserAction,
};

pub struct PistonFrontend {
    window: PistonWindow,
    events: Events,
    /// Render event waiting for the next `present`
    pending_render: Option<Event>,
}

impl PistonFrontend {
    pub fn new(settings: &Settings) -> Result<PistonFrontend> {
        let window = create_window((settings.width, settings.height))?;
        let events = Events::new(EventSettings::new().ups(120).max_fps(60));
        Ok(PistonFrontend { window, events, pending_render: None })
    }
}

impl Frontend for PistonFrontend {
    fn next_event(&mut self) -> Option<FrontendEvent> {
        loop {
            let event = self.events.next(&mut self.window)?;

            if let Some(args) = event.update_args() {
                return Some(FrontendEvent::Update(args.dt));
            }
            if event.render_args().is_some() {
                self.pending_render = Some(event);
                return Some(FrontendEvent::Render);
            }
            if let Some(Button::Keyboard(key)) = event.press_args() {
                if let Some(action) = key_to_user_action(key) {
                    return Some(FrontendEvent::Action(action));
                }
            }
            if event.close_args().is_some() {
                return Some(FrontendEvent::Action(UserAction::Quit));
            }
        }
    }

    fn present(&mut self, shapes: &[Shape]) {
        let Some(event) = self.pending_render.take() else {
            return;
        };
        self.window.draw_2d(&event, |context, g, _device| {
            for shape in shapes {
                match *shape {
                    Shape::Clear(color) => clear(color_f32(color), g),
                    Shape::Rect(rect, color) => {
                        rectangle(color_f32(color), rect.to_f64(), context.transform, g)
                    }
                    Shape::Ellipse(rect, color) => {
                        ellipse(color_f32(color), rect.to_f64(), context.transform, g)
                    }
                }
            }
        });
    }
}

pub fn create_window((width, height): (u32, u32)) -> Result<PistonWindow> {
    WindowSettings::new("Snake", [width, height])
        .resizable(false)
        .exit_on_esc(false)
        .build()
        .map_err(|err| eyre!("Unable to build window: {}", err))
}

fn key_to_user_action(key: Key) -> Option<UserAction> {
    match key {
        Key::Up | Key::W => Some(UserAction::Up),
        Key::Left | Key::A => Some(UserAction::Left),
        Key::Down | Key::S => Some(UserAction::Down),
        Key::Right | Key::D => Some(UserAction::Right),
        Key::R => Some(UserAction::Restart),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        assert_eq!(key_to_user_action(Key::Up), Some(UserAction::Up));
        assert_eq!(key_to_user_action(Key::W), Some(UserAction::Up));
        assert_eq!(key_to_user_action(Key::A), Some(UserAction::Left));
        assert_eq!(key_to_user_action(Key::Down), Some(UserAction::Down));
        assert_eq!(key_to_user_action(Key::D), Some(UserAction::Right));
        assert_eq!(key_to_user_action(Key::R), Some(UserAction::Restart));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(key_to_user_action(Key::Space), None);
        assert_eq!(key_to_user_action(Key::Q), None);
    }
}
