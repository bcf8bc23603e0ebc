//! Circle hitbox capability

use glam::Vec2;

use crate::renderer::{Surface, colors};

/// Anything with a centre and radius that can be outlined as a circle
pub trait CircleHitBox {
    fn center(&self) -> Vec2;
    fn radius(&self) -> f32;

    fn draw_hitbox(&self, surface: &mut dyn Surface) {
        surface.stroke_circle(self.center(), self.radius(), colors::WHITE);
    }
}
