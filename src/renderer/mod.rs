//! Rendering boundary
//!
//! The simulation only issues primitive draw calls against `Surface`. The web
//! build implements it on a 2D canvas context; `DrawList` records the calls
//! for headless runs and tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw_list;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use draw_list::{DrawCall, DrawList};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA color, components in 0..=1
pub type Rgba = [f32; 4];

/// Opaque handle to an image the host has loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageHandle {
    Player,
    Background,
}

impl ImageHandle {
    /// DOM element id of the preloaded `<img>`
    pub fn element_id(&self) -> &'static str {
        match self {
            ImageHandle::Player => "player",
            ImageHandle::Background => "background",
        }
    }
}

/// Primitive draw calls the game needs
pub trait Surface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Image centred on `center`, rotated by `rotation` radians, drawn at `size`
    fn draw_image(&mut self, image: ImageHandle, center: Vec2, size: Vec2, rotation: f32);
    /// Copy the `size` region at `source` of an image to the surface origin
    fn blit_background(&mut self, image: ImageHandle, source: Vec2, size: Vec2);
    /// Text with its left edge at `pos.x`, vertically centred on `pos.y`
    fn fill_text(&mut self, text: &str, pos: Vec2, color: Rgba);
}

/// Colors for game elements
pub mod colors {
    use super::Rgba;

    pub const GOLD: Rgba = [1.0, 0.84, 0.0, 1.0];
    pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
    pub const CAMERA_BOX: Rgba = [0.0, 0.0, 1.0, 0.2];
}
