//! Math utilities and types
//!
//! Provides the 2D vector types used by the simulation and the toroidal
//! playfield geometry every moving entity shares.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Unit vector pointing along a screen-space heading.
///
/// Angles are in degrees, 0 points up (negative y) and positive angles turn
/// clockwise, matching a y-down screen.
pub fn heading(angle_degrees: f32) -> Vec2 {
    let radians = angle_degrees.to_radians();
    Vec2::new(radians.sin(), -radians.cos())
}

/// Wrap a scalar into `[0, period)`.
pub fn wrap_scalar(value: f32, period: f32) -> f32 {
    let wrapped = value.rem_euclid(period);
    // rem_euclid rounds tiny negative inputs up to exactly `period`
    if wrapped >= period {
        0.0
    } else {
        wrapped
    }
}

bitflags! {
    /// Playfield edges an entity's extent currently crosses
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Edges: u8 {
        /// Extent crosses `x = 0`
        const LEFT = 1 << 0;
        /// Extent crosses `x = width`
        const RIGHT = 1 << 1;
        /// Extent crosses `y = 0`
        const TOP = 1 << 2;
        /// Extent crosses `y = height`
        const BOTTOM = 1 << 3;
    }
}

/// Fixed-size toroidal playfield
///
/// Leaving one edge re-enters the opposite edge. Positions handed out by
/// [`Playfield::wrap`] always satisfy `0 <= x < width` and `0 <= y < height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    /// Width in world units
    pub width: f32,

    /// Height in world units
    pub height: f32,
}

impl Playfield {
    /// Create a playfield of the given size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the playfield
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Wrap a position into the playfield.
    pub fn wrap(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            wrap_scalar(position.x, self.width),
            wrap_scalar(position.y, self.height),
        )
    }

    /// Whether a position already lies inside the half-open playfield
    pub fn contains(&self, position: Vec2) -> bool {
        (0.0..self.width).contains(&position.x) && (0.0..self.height).contains(&position.y)
    }

    /// Edges that an extent of `half_extent` around `position` crosses.
    ///
    /// A renderer draws the entity once more on the far side of every edge
    /// reported here, so an object sliding off one edge is already sliding
    /// in on the other and never pops across by its own size.
    pub fn straddled_edges(&self, position: Vec2, half_extent: Vec2) -> Edges {
        let mut edges = Edges::empty();
        if position.x - half_extent.x < 0.0 {
            edges |= Edges::LEFT;
        }
        if position.x + half_extent.x > self.width {
            edges |= Edges::RIGHT;
        }
        if position.y - half_extent.y < 0.0 {
            edges |= Edges::TOP;
        }
        if position.y + half_extent.y > self.height {
            edges |= Edges::BOTTOM;
        }
        edges
    }

    /// Shortest displacement from `from` to `to` across the torus.
    pub fn delta(&self, from: Vec2, to: Vec2) -> Vec2 {
        let mut d = to - from;
        if d.x > self.width / 2.0 {
            d.x -= self.width;
        } else if d.x < -self.width / 2.0 {
            d.x += self.width;
        }
        if d.y > self.height / 2.0 {
            d.y -= self.height;
        } else if d.y < -self.height / 2.0 {
            d.y += self.height;
        }
        d
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(640.0, 480.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_heading_zero_points_up() {
        let h = heading(0.0);
        assert_relative_eq!(h.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(h.y, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_heading_turns_clockwise() {
        let h = heading(90.0);
        assert_relative_eq!(h.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(h.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_wrap_scalar_half_open() {
        assert_eq!(wrap_scalar(640.0, 640.0), 0.0);
        assert_eq!(wrap_scalar(-1.0, 640.0), 639.0);
        assert_eq!(wrap_scalar(-1e-9, 640.0), 0.0);
        assert_eq!(wrap_scalar(1300.0, 640.0), 20.0);
    }

    #[test]
    fn test_wrap_keeps_inside_playfield() {
        let field = Playfield::new(640.0, 480.0);
        for &(x, y) in &[(-5.0, 10.0), (700.0, -30.0), (640.0, 480.0), (0.0, 0.0)] {
            let wrapped = field.wrap(Vec2::new(x, y));
            assert!(field.contains(wrapped), "{wrapped:?} escaped");
        }
    }

    #[test]
    fn test_straddled_edges() {
        let field = Playfield::new(100.0, 100.0);
        let half = Vec2::new(10.0, 10.0);
        assert_eq!(field.straddled_edges(Vec2::new(50.0, 50.0), half), Edges::empty());
        assert_eq!(
            field.straddled_edges(Vec2::new(5.0, 95.0), half),
            Edges::LEFT | Edges::BOTTOM
        );
    }

    #[test]
    fn test_delta_takes_short_way_round() {
        let field = Playfield::new(100.0, 100.0);
        let d = field.delta(Vec2::new(95.0, 50.0), Vec2::new(5.0, 50.0));
        assert_relative_eq!(d.x, 10.0);
        assert_relative_eq!(field.delta(Vec2::new(2.0, 2.0), Vec2::new(98.0, 98.0)).magnitude(), 32.0_f32.sqrt());
    }
}
