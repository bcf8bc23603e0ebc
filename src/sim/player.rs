//! Keyboard-driven player

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::events::{EventsEngine, Handler, NamedEvent, Subscriber};
use super::hitbox::CircleHitBox;
use super::input::{InputEvent, Key};
use crate::Viewport;
use crate::consts::{PLAYER_SPRITE_SCALE, PLAYER_SPRITE_SIZE};
use crate::error::EventError;
use crate::renderer::{ImageHandle, Surface};
use crate::settings::PlayerSettings;

/// Directional keys currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub left: bool,
    pub up: bool,
    pub right: bool,
    pub down: bool,
}

impl KeyState {
    /// Per-axis direction, each component in {-1, 0, 1}
    pub fn direction(&self) -> Vec2 {
        let mut d = Vec2::ZERO;
        if self.left {
            d.x -= 1.0;
        }
        if self.right {
            d.x += 1.0;
        }
        if self.up {
            d.y -= 1.0;
        }
        if self.down {
            d.y += 1.0;
        }
        d
    }
}

/// Snapshot of the shooter at the moment of firing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub player: usize,
    pub origin: Vec2,
    pub heading: f32,
}

/// Events a player publishes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    Shot(Shot),
}

impl NamedEvent for PlayerEvent {
    fn name(&self) -> &'static str {
        match self {
            PlayerEvent::Shot(_) => "player_shot",
        }
    }
}

pub struct Player {
    pub id: usize,
    pub pos: Vec2,
    pub radius: f32,
    pub speed_factor: f32,
    pub normalize_diagonal: bool,
    pub keys: KeyState,
    /// Facing angle; projectiles fly opposite to (cos, sin) of it
    pub rot: f32,
    pub sprite: Option<ImageHandle>,
    events: EventsEngine<PlayerEvent>,
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("pos", &self.pos)
            .field("keys", &self.keys)
            .field("rot", &self.rot)
            .finish_non_exhaustive()
    }
}

impl Player {
    pub fn new(id: usize, pos: Vec2, settings: &PlayerSettings, sprite: Option<ImageHandle>) -> Self {
        Self {
            id,
            pos,
            radius: settings.radius,
            speed_factor: settings.speed_factor,
            normalize_diagonal: settings.normalize_diagonal,
            keys: KeyState::default(),
            rot: PI,
            sprite,
            events: EventsEngine::new(),
        }
    }

    /// Listen to this player's `PlayerEvent`s
    pub fn subscribe(&mut self, handler: Handler<PlayerEvent>) {
        self.events.subscribe(handler);
    }

    pub fn handle_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) => match key {
                Key::Left => {
                    self.keys.left = true;
                    self.rot = 0.0;
                }
                Key::Up => {
                    self.keys.up = true;
                    self.rot = FRAC_PI_2;
                }
                Key::Right => {
                    self.keys.right = true;
                    self.rot = PI;
                }
                Key::Down => {
                    self.keys.down = true;
                    self.rot = -FRAC_PI_2;
                }
                Key::Space => self.shoot(),
                Key::Debug => {}
            },
            InputEvent::KeyUp(key) => match key {
                Key::Left => self.keys.left = false,
                Key::Up => self.keys.up = false,
                Key::Right => self.keys.right = false,
                Key::Down => self.keys.down = false,
                Key::Space | Key::Debug => {}
            },
            InputEvent::PointerDown(_) => {}
        }
    }

    pub fn update(&mut self) {
        self.update_position();
    }

    /// Move by the held keys; velocity is per-frame scratch, not retained
    pub fn update_position(&mut self) {
        let mut dir = self.keys.direction();
        if self.normalize_diagonal {
            dir = dir.normalize_or_zero();
        }
        self.pos += dir * self.speed_factor;
    }

    /// Keep the whole circle on the playfield
    pub fn clamp_to(&mut self, viewport: &Viewport) {
        let r = self.radius;
        // max applied last, so a playfield narrower than the player pins to `r`
        self.pos.x = self.pos.x.min(viewport.width - r).max(r);
        self.pos.y = self.pos.y.min(viewport.height - r).max(r);
    }

    pub fn shoot(&mut self) {
        self.events.emit(&PlayerEvent::Shot(Shot {
            player: self.id,
            origin: self.pos,
            heading: self.rot,
        }));
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        if let Some(sprite) = self.sprite {
            let size = Vec2::splat(PLAYER_SPRITE_SIZE * PLAYER_SPRITE_SCALE);
            surface.draw_image(sprite, self.pos, size, self.rot);
        }
        self.draw_hitbox(surface);
    }
}

impl Subscriber<InputEvent> for Player {
    fn on_event(&mut self, event: &InputEvent) -> Result<(), EventError> {
        self.handle_input(event);
        Ok(())
    }
}

impl CircleHitBox for Player {
    fn center(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn player() -> Player {
        Player::new(0, Vec2::new(100.0, 100.0), &PlayerSettings::default(), None)
    }

    #[test]
    fn test_arrow_keys_move_and_turn() {
        let mut p = player();
        p.handle_input(&InputEvent::KeyDown(Key::Left));
        assert_eq!(p.rot, 0.0);
        p.update();
        assert_eq!(p.pos, Vec2::new(95.0, 100.0));

        p.handle_input(&InputEvent::KeyUp(Key::Left));
        p.update();
        assert_eq!(p.pos, Vec2::new(95.0, 100.0));

        p.handle_input(&InputEvent::KeyDown(Key::Down));
        assert_eq!(p.rot, -FRAC_PI_2);
        p.update();
        assert_eq!(p.pos, Vec2::new(95.0, 105.0));
    }

    #[test]
    fn test_last_key_wins_heading() {
        let mut p = player();
        p.handle_input(&InputEvent::KeyDown(Key::Up));
        p.handle_input(&InputEvent::KeyDown(Key::Right));
        assert_eq!(p.rot, PI);
        // Releasing does not change heading
        p.handle_input(&InputEvent::KeyUp(Key::Right));
        assert_eq!(p.rot, PI);
    }

    #[test]
    fn test_diagonal_not_normalized_by_default() {
        let mut p = player();
        p.handle_input(&InputEvent::KeyDown(Key::Left));
        p.handle_input(&InputEvent::KeyDown(Key::Up));
        p.update();
        assert_eq!(p.pos, Vec2::new(95.0, 95.0));
    }

    #[test]
    fn test_diagonal_normalized_when_enabled() {
        let settings = PlayerSettings {
            normalize_diagonal: true,
            ..Default::default()
        };
        let mut p = Player::new(0, Vec2::ZERO, &settings, None);
        p.handle_input(&InputEvent::KeyDown(Key::Right));
        p.handle_input(&InputEvent::KeyDown(Key::Down));
        p.update();
        assert!((p.pos.length() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut p = player();
        p.handle_input(&InputEvent::KeyDown(Key::Left));
        p.handle_input(&InputEvent::KeyDown(Key::Right));
        p.update();
        assert_eq!(p.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_space_emits_shot() {
        let shots = Rc::new(RefCell::new(Vec::new()));
        let sink = shots.clone();
        let mut p = player();
        p.subscribe(Rc::new(RefCell::new(
            move |event: &PlayerEvent| -> Result<(), EventError> {
                let PlayerEvent::Shot(shot) = *event;
                sink.borrow_mut().push(shot);
                Ok(())
            },
        )));

        p.handle_input(&InputEvent::KeyDown(Key::Space));
        let shots = shots.borrow();
        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0].origin, Vec2::new(100.0, 100.0));
        assert_eq!(shots[0].heading, PI);
    }

    #[test]
    fn test_clamp_to_viewport() {
        let mut p = player();
        let view = Viewport::new(400.0, 300.0);
        p.pos = Vec2::new(-50.0, 1000.0);
        p.clamp_to(&view);
        assert_eq!(p.pos, Vec2::new(30.0, 270.0));
        p.pos = Vec2::new(500.0, 10.0);
        p.clamp_to(&view);
        assert_eq!(p.pos, Vec2::new(370.0, 30.0));
    }
}
