//! Column Shooter - A side-scrolling canvas arcade game
//!
//! Core modules:
//! - `sim`: Simulation (pools, entities, event bus, frame loop)
//! - `renderer`: Draw surface boundary (canvas on web, recorder elsewhere)
//! - `settings`: Data-driven game tunables
//! - `vector`: Zero-guarded 2D vector helpers

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod vector;

pub use error::{ConfigError, EventError};
pub use settings::GameSettings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Player movement per frame, per pressed axis
    pub const PLAYER_SPEED_FACTOR: f32 = 5.0;
    pub const PLAYER_RADIUS: f32 = 30.0;
    /// Sprite source size and draw scale
    pub const PLAYER_SPRITE_SIZE: f32 = 80.0;
    pub const PLAYER_SPRITE_SCALE: f32 = 0.5;

    /// Base projectile speed along the aim direction, scaled by settings
    pub const MUZZLE_SPEED: f32 = 4.0;

    /// Columns scroll left by this many units per frame
    pub const COLUMN_SCROLL_SPEED: f32 = 2.0;
    pub const COLUMN_WIDTH: f32 = 30.0;
    /// Height factor range for column obstacles
    pub const COLUMN_HEIGHT_FACTOR_MIN: f32 = 0.25;
    pub const COLUMN_HEIGHT_FACTOR_SPAN: f32 = 0.5;

    /// Camera box follows the player centred in a 300x300 window
    pub const CAMERA_BOX_SIZE: f32 = 300.0;
    pub const BACKGROUND_SCROLL_STEP: f32 = 2.0;
    pub const BACKGROUND_SCROLL_MAX: f32 = 900.0;

    /// Projectile pool HUD bar
    pub const HUD_DOT_SPACING: f32 = 24.0;
    pub const HUD_DOT_RADIUS: f32 = 7.0;
    pub const HUD_ROW_Y: f32 = 20.0;
    pub const HUD_TEXT_MARGIN: f32 = 30.0;
}

/// Playfield size in canvas pixels, injected into anything that needs bounds
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// True when a circle at `pos` is fully outside the playfield
    #[inline]
    pub fn circle_outside(&self, pos: Vec2, radius: f32) -> bool {
        pos.x > self.width + radius
            || pos.x < -radius
            || pos.y < -radius
            || pos.y > self.height + radius
    }
}

/// Unit vector pointing along a heading (radians)
#[inline]
pub fn heading_to_direction(rot: f32) -> Vec2 {
    Vec2::new(rot.cos(), rot.sin())
}
