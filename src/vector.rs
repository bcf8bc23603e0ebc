//! 2D vector helpers on top of `glam::Vec2`
//!
//! `Vec2` already covers add/sub/scale, dot, length, distance and rotation
//! with value semantics. The extension trait adds the operations whose
//! divisor can be zero; each returns a zero sentinel instead of NaN/inf so a
//! degenerate input never poisons the frame loop.

use glam::Vec2;

pub trait VectorExt: Sized {
    /// Component-wise division, `ZERO` when `scalar == 0`
    fn div_or_zero(self, scalar: f32) -> Self;
    /// Angle in radians between two vectors, 0 when either is zero-length
    fn angle_to_or_zero(self, other: Self) -> f32;
    /// Projection of `self` onto `other`, `ZERO` when `other` is zero-length
    fn project_onto_or_zero(self, other: Self) -> Self;
    /// Quarter turn, clockwise in screen space (y down) when `clockwise`
    fn perpendicular(self, clockwise: bool) -> Self;
    /// Heading of the vector (atan2), 0 for the zero vector
    fn heading(self) -> f32;
    /// 2D cross product (z of the 3D cross)
    fn cross(self, other: Self) -> f32;
}

impl VectorExt for Vec2 {
    #[inline]
    fn div_or_zero(self, scalar: f32) -> Self {
        if scalar == 0.0 {
            Vec2::ZERO
        } else {
            self / scalar
        }
    }

    fn angle_to_or_zero(self, other: Self) -> f32 {
        let mag_product = self.length() * other.length();
        if mag_product == 0.0 {
            return 0.0;
        }
        // Clamp guards acos against rounding just past ±1
        (self.dot(other) / mag_product).clamp(-1.0, 1.0).acos()
    }

    fn project_onto_or_zero(self, other: Self) -> Self {
        let len_sq = other.length_squared();
        if len_sq == 0.0 {
            return Vec2::ZERO;
        }
        other * (self.dot(other) / len_sq)
    }

    #[inline]
    fn perpendicular(self, clockwise: bool) -> Self {
        if clockwise {
            Vec2::new(-self.y, self.x)
        } else {
            Vec2::new(self.y, -self.x)
        }
    }

    #[inline]
    fn heading(self) -> f32 {
        if self == Vec2::ZERO {
            0.0
        } else {
            self.y.atan2(self.x)
        }
    }

    #[inline]
    fn cross(self, other: Self) -> f32 {
        self.perp_dot(other)
    }
}
