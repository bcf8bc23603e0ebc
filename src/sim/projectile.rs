//! Pooled projectile

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hitbox::CircleHitBox;
use super::pool::{Poolable, SlotState};
use crate::Viewport;
use crate::renderer::{Surface, colors};

/// Parked position for projectiles sitting in the pool
const PARKED: Vec2 = Vec2::new(-100.0, -100.0);

/// A projectile fired by a player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub state: SlotState,
    /// Playfield it is allowed to fly in
    bounds: Viewport,
}

impl Projectile {
    pub fn new(radius: f32, bounds: Viewport) -> Self {
        Self {
            pos: PARKED,
            vel: Vec2::ZERO,
            radius,
            state: SlotState::Free,
            bounds,
        }
    }

    /// Take the projectile out of the pool and launch it
    pub fn start(&mut self, pos: Vec2, vel: Vec2) {
        self.state = SlotState::Active;
        self.pos = pos;
        self.vel = vel;
    }

    /// Return the projectile to the pool
    pub fn reset(&mut self) {
        self.state = SlotState::Free;
    }

    #[inline]
    pub fn out_of_bounds(&self) -> bool {
        self.bounds.circle_outside(self.pos, self.radius)
    }

    /// Move one frame; a projectile already off the playfield goes back to
    /// the pool instead
    pub fn update(&mut self) {
        if self.is_free() {
            return;
        }
        if self.out_of_bounds() {
            self.reset();
            return;
        }
        self.pos += self.vel;
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        if self.is_active() {
            surface.fill_circle(self.pos, self.radius, colors::GOLD);
        }
    }
}

impl Poolable for Projectile {
    fn state(&self) -> SlotState {
        self.state
    }
}

impl CircleHitBox for Projectile {
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
    use crate::renderer::DrawList;

    fn projectile() -> Projectile {
        Projectile::new(8.0, Viewport::new(800.0, 600.0))
    }

    #[test]
    fn test_new_projectile_is_free_and_inert() {
        let mut p = projectile();
        assert!(p.is_free());
        p.update();
        assert_eq!(p.pos, PARKED);

        let mut list = DrawList::new();
        p.draw(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_linear_flight() {
        let mut p = projectile();
        p.start(Vec2::new(100.0, 200.0), Vec2::new(3.0, -2.0));
        for n in 1..=20 {
            p.update();
            assert!(p.is_active());
            assert_eq!(p.pos, Vec2::new(100.0 + 3.0 * n as f32, 200.0 - 2.0 * n as f32));
        }
    }

    #[test]
    fn test_leaving_bounds_returns_to_pool() {
        let mut p = projectile();
        // One step from the left edge (outside means x < -radius)
        p.start(Vec2::new(-4.0, 300.0), Vec2::new(-5.0, 0.0));
        p.update();
        assert_eq!(p.pos.x, -9.0);
        assert!(p.is_active());

        p.update();
        assert!(p.is_free());
        let parked_at = p.pos;

        // Further updates do nothing until restarted
        p.update();
        p.update();
        assert_eq!(p.pos, parked_at);
        assert!(p.is_free());

        p.start(Vec2::new(50.0, 50.0), Vec2::new(1.0, 0.0));
        p.update();
        assert_eq!(p.pos, Vec2::new(51.0, 50.0));
    }

    #[test]
    fn test_draw_active_only() {
        let mut p = projectile();
        p.start(Vec2::new(10.0, 10.0), Vec2::ZERO);
        let mut list = DrawList::new();
        p.draw(&mut list);
        assert_eq!(list.count_filled_circles(colors::GOLD), 1);
    }
}
