//! Camera box and background scroll
//!
//! Purely cosmetic: nothing in the simulation reads it back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Viewport;
use crate::consts::{BACKGROUND_SCROLL_MAX, BACKGROUND_SCROLL_STEP, CAMERA_BOX_SIZE};
use crate::renderer::{ImageHandle, Surface, colors};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Top-left corner of the box
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal offset into the background image
    pub background_x: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::splat(CAMERA_BOX_SIZE),
            background_x: 0.0,
        }
    }
}

impl Camera {
    /// Centre the box on `target`; scroll the background while the box
    /// touches the right edge of the playfield
    pub fn follow(&mut self, target: Vec2, viewport: &Viewport) {
        self.pos = target - self.size / 2.0;
        let right_side = self.pos.x + self.size.x;
        if right_side >= viewport.width && self.background_x < BACKGROUND_SCROLL_MAX {
            self.background_x += BACKGROUND_SCROLL_STEP;
        }
    }

    pub fn draw_background(&self, surface: &mut dyn Surface, viewport: &Viewport) {
        surface.blit_background(
            ImageHandle::Background,
            Vec2::new(self.background_x, 0.0),
            viewport.size(),
        );
    }

    pub fn draw_box(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.pos, self.size, colors::CAMERA_BOX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_centres_box() {
        let mut cam = Camera::default();
        cam.follow(Vec2::new(200.0, 200.0), &Viewport::new(1000.0, 600.0));
        assert_eq!(cam.pos, Vec2::new(50.0, 50.0));
        assert_eq!(cam.background_x, 0.0);
    }

    #[test]
    fn test_scroll_at_right_edge_is_capped() {
        let mut cam = Camera::default();
        let view = Viewport::new(1000.0, 600.0);
        for _ in 0..1000 {
            cam.follow(Vec2::new(900.0, 300.0), &view);
        }
        assert_eq!(cam.background_x, BACKGROUND_SCROLL_MAX);
    }
}
