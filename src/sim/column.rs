//! Pooled scrolling column obstacle

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pool::{Poolable, SlotState};
use crate::consts::{COLUMN_HEIGHT_FACTOR_MIN, COLUMN_HEIGHT_FACTOR_SPAN};
use crate::renderer::{Surface, colors};

/// Which edge of the playfield the obstacle hangs from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnShape {
    /// Grows down from the top edge
    Top,
    /// Grows up from the bottom edge
    Bottom,
}

/// A column scrolling from the right edge to the left
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub pos: Vec2,
    /// Where the column (re)enters from
    pub spawn_pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub state: SlotState,
    pub shape: ColumnShape,
    /// Fraction of `height` the obstacle covers, in [0.25, 0.75)
    pub height_factor: f32,
    /// How many times the column has been started
    pub spawns: u32,
}

impl Column {
    pub fn new<R: Rng>(
        spawn_pos: Vec2,
        width: f32,
        height: f32,
        scroll_speed: f32,
        rng: &mut R,
    ) -> Self {
        let mut column = Self {
            pos: spawn_pos,
            spawn_pos,
            vel: Vec2::new(-scroll_speed, 0.0),
            width,
            height,
            state: SlotState::Free,
            shape: ColumnShape::Top,
            height_factor: COLUMN_HEIGHT_FACTOR_MIN,
            spawns: 0,
        };
        column.randomize(rng);
        column
    }

    pub fn start(&mut self) {
        self.state = SlotState::Active;
        self.spawns += 1;
    }

    /// Back to the spawn edge with a fresh shape, and back into the pool
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.state = SlotState::Free;
        self.pos.x = self.spawn_pos.x;
        self.randomize(rng);
    }

    fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.shape = if rng.random::<f32>() < 0.5 {
            ColumnShape::Top
        } else {
            ColumnShape::Bottom
        };
        self.height_factor =
            COLUMN_HEIGHT_FACTOR_MIN + rng.random::<f32>() * COLUMN_HEIGHT_FACTOR_SPAN;
    }

    /// Scroll one frame; once past the left edge the column recycles
    pub fn update<R: Rng>(&mut self, rng: &mut R) {
        if self.is_free() {
            return;
        }
        if self.pos.x < 0.0 {
            self.reset(rng);
        } else {
            self.pos += self.vel;
        }
    }

    /// Filled obstacle rectangle as (origin, size)
    pub fn rect(&self) -> (Vec2, Vec2) {
        let cut = self.height * self.height_factor;
        match self.shape {
            ColumnShape::Top => (self.pos, Vec2::new(self.width, cut)),
            ColumnShape::Bottom => (
                Vec2::new(self.pos.x, self.pos.y + cut),
                Vec2::new(self.width, self.height - cut),
            ),
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        if self.is_active() {
            let (origin, size) = self.rect();
            surface.fill_rect(origin, size, colors::GOLD);
        }
    }
}

impl Poolable for Column {
    fn state(&self) -> SlotState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawList;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn column(rng: &mut Pcg32) -> Column {
        Column::new(Vec2::new(10.0, 0.0), 30.0, 600.0, 2.0, rng)
    }

    #[test]
    fn test_free_column_does_not_move() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut c = column(&mut rng);
        c.update(&mut rng);
        assert_eq!(c.pos.x, 10.0);

        let mut list = DrawList::new();
        c.draw(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_scroll_then_recycle() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut c = column(&mut rng);
        c.start();
        assert_eq!(c.spawns, 1);

        // 10 -> 8 -> 6 -> 4 -> 2 -> 0 -> -2
        for expected in [8.0, 6.0, 4.0, 2.0, 0.0, -2.0] {
            c.update(&mut rng);
            assert_eq!(c.pos.x, expected);
            assert!(c.is_active());
        }

        // x < 0: back to the spawn edge and into the pool
        c.update(&mut rng);
        assert_eq!(c.pos.x, 10.0);
        assert!(c.is_free());
        assert!((0.25..0.75).contains(&c.height_factor));
    }

    #[test]
    fn test_height_factor_range() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut c = column(&mut rng);
        let mut shapes = (0, 0);
        for _ in 0..500 {
            c.reset(&mut rng);
            assert!((0.25..0.75).contains(&c.height_factor));
            match c.shape {
                ColumnShape::Top => shapes.0 += 1,
                ColumnShape::Bottom => shapes.1 += 1,
            }
        }
        // Both shapes show up
        assert!(shapes.0 > 0 && shapes.1 > 0);
    }

    #[test]
    fn test_rect_by_shape() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut c = column(&mut rng);
        c.height_factor = 0.5;

        c.shape = ColumnShape::Top;
        assert_eq!(c.rect(), (Vec2::new(10.0, 0.0), Vec2::new(30.0, 300.0)));

        c.shape = ColumnShape::Bottom;
        assert_eq!(c.rect(), (Vec2::new(10.0, 300.0), Vec2::new(30.0, 300.0)));
    }
}
