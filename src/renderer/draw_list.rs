//! Recording surface

use glam::Vec2;
use serde::Serialize;

use super::{ImageHandle, Rgba, Surface};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCall {
    FillRect { origin: Vec2, size: Vec2, color: Rgba },
    FillCircle { center: Vec2, radius: f32, color: Rgba },
    StrokeCircle { center: Vec2, radius: f32, color: Rgba },
    Image { image: ImageHandle, center: Vec2, size: Vec2, rotation: f32 },
    Background { image: ImageHandle, source: Vec2, size: Vec2 },
    Text { text: String, pos: Vec2, color: Rgba },
}

/// Surface that stores every call for later inspection
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    pub calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Number of filled circles drawn in `color`
    pub fn count_filled_circles(&self, color: Rgba) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillCircle { color: col, .. } if *col == color))
            .count()
    }

    pub fn count_rects(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect { .. }))
            .count()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.calls.push(DrawCall::FillRect { origin, size, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(DrawCall::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(DrawCall::StrokeCircle { center, radius, color });
    }

    fn draw_image(&mut self, image: ImageHandle, center: Vec2, size: Vec2, rotation: f32) {
        self.calls.push(DrawCall::Image {
            image,
            center,
            size,
            rotation,
        });
    }

    fn blit_background(&mut self, image: ImageHandle, source: Vec2, size: Vec2) {
        self.calls.push(DrawCall::Background {
            image,
            source,
            size,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, color: Rgba) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            pos,
            color,
        });
    }
}
