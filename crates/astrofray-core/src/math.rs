//! 2-D vector math and start-position distribution.
//!
//! [`Vec2`] carries the kernel's `{x, y}` wire shape. Rotation follows the
//! standard counter-clockwise convention and is angle-additive:
//! `v.rotate(a).rotate(b) == v.rotate(a + b)` (up to floating-point error),
//! and rotating about an arbitrary origin is equivalent to translating into
//! origin space, rotating, and translating back.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Vec2
// ---------------------------------------------------------------------------

/// A 2-D vector or point, matching the kernel's `{x, y}` JSON shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// Construct a vector from its components.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise translation.
    pub fn translate(self, by: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + by.x,
            y: self.y + by.y,
        }
    }

    /// Rotate counter-clockwise by `angle` radians about the origin.
    pub fn rotate(self, angle: f64) -> Vec2 {
        self.rotate_about(angle, Vec2::default())
    }

    /// Rotate counter-clockwise by `angle` radians about `origin`.
    pub fn rotate_about(self, angle: f64, origin: Vec2) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        let x = self.x - origin.x;
        let y = self.y - origin.y;
        Vec2 {
            x: x * cos - y * sin + origin.x,
            y: x * sin + y * cos + origin.y,
        }
    }
}

// ---------------------------------------------------------------------------
// Start positions
// ---------------------------------------------------------------------------

/// Evenly distribute `slots` start positions on a circle.
///
/// The circle has radius `min(width, height) / 3` and is centered at
/// `(width / 2, height / 2)`; positions are spaced by `2π / slots` starting
/// at angle zero. Guarantees every ship the same distance from the arena
/// center at round start.
pub fn start_positions(width: f64, height: f64, slots: usize) -> Vec<Vec2> {
    let center = Vec2::new(width / 2.0, height / 2.0);
    let radius = width.min(height) / 3.0;

    (0..slots)
        .map(|i| {
            let angle = (i as f64 / slots as f64) * std::f64::consts::TAU;
            Vec2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
