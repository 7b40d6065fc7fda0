//! The immediate-mode 2-D drawing abstraction.
//!
//! [`RenderSurface`] is the minimal canvas contract the scene pipeline
//! needs: sprite blit with rotation, filled/stroked primitives, text,
//! repeating-pattern fill, and raw translate/rotate. Concrete backends live
//! with the host; this crate ships [`DrawList`], a recording implementation
//! that captures every call as a [`DrawOp`] so the pipeline can be verified
//! headlessly.
//!
//! # Rotation convention
//!
//! Rotated blits translate the drawing origin to the sprite center, rotate,
//! draw with a centered offset, then undo the rotation. Backends must
//! preserve this exactly -- collider overlays are drawn in world
//! coordinates, and any other convention makes hit-boxes visually desync
//! from sprites.

use astrofray_core::math::Vec2;

use crate::sprite::Sprite;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// RGBA color, each channel `0.0..=1.0`.
pub type Color = [f32; 4];

// ---------------------------------------------------------------------------
// RenderSurface
// ---------------------------------------------------------------------------

/// A minimal immediate-mode 2-D drawing surface.
pub trait RenderSurface {
    /// Erase the whole surface.
    fn clear(&mut self);

    /// Blit a sprite region to `(x, y)` at `width` x `height`, rotated by
    /// `rotation` radians about the sprite center (see the module docs for
    /// the exact convention). At zero rotation, `(x, y)` is the top-left
    /// corner, matching the un-rotated canvas convention.
    fn draw_sprite(&mut self, sprite: &Sprite, x: f64, y: f64, width: f64, height: f64, rotation: f64);

    /// Fill a rectangle with the sprite repeated as a pattern.
    fn draw_pattern(&mut self, sprite: &Sprite, x: f64, y: f64, width: f64, height: f64);

    fn fill_rect(&mut self, color: Color, x: f64, y: f64, width: f64, height: f64);

    /// Outline a rectangle, rotated about its center when `rotation` is
    /// non-zero (same convention as sprites).
    #[allow(clippy::too_many_arguments)]
    fn stroke_rect(
        &mut self,
        color: Color,
        line_width: f64,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rotation: f64,
    );

    fn fill_circle(&mut self, color: Color, x: f64, y: f64, radius: f64);

    fn stroke_circle(&mut self, color: Color, line_width: f64, x: f64, y: f64, radius: f64);

    /// Outline a closed polygon through `points`.
    fn stroke_polygon(&mut self, color: Color, line_width: f64, points: &[Vec2]);

    /// Draw text at `(x, y)`; when `centered`, `x` is the text midpoint.
    fn draw_text(&mut self, font: &str, color: Color, text: &str, x: f64, y: f64, centered: bool);

    /// Shift the drawing origin. Callers are responsible for undoing their
    /// translations (the background layers translate in, draw, translate
    /// out).
    fn translate(&mut self, x: f64, y: f64);

    /// Rotate the drawing origin.
    fn rotate(&mut self, radians: f64);
}

// ---------------------------------------------------------------------------
// DrawList
// ---------------------------------------------------------------------------

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Sprite {
        sprite: Sprite,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rotation: f64,
    },
    Pattern {
        sprite: Sprite,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    FillRect {
        color: Color,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    StrokeRect {
        color: Color,
        line_width: f64,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rotation: f64,
    },
    FillCircle {
        color: Color,
        x: f64,
        y: f64,
        radius: f64,
    },
    StrokeCircle {
        color: Color,
        line_width: f64,
        x: f64,
        y: f64,
        radius: f64,
    },
    StrokePolygon {
        color: Color,
        line_width: f64,
        points: Vec<Vec2>,
    },
    Text {
        font: String,
        color: Color,
        text: String,
        x: f64,
        y: f64,
        centered: bool,
    },
    Translate {
        x: f64,
        y: f64,
    },
    Rotate {
        radians: f64,
    },
}

/// Recording surface: captures every call in order for headless assertions.
#[derive(Debug, Default)]
pub struct DrawList {
    pub ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded sprite blits, in draw order.
    pub fn sprites(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Sprite { .. }))
    }
}

impl RenderSurface for DrawList {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn draw_sprite(&mut self, sprite: &Sprite, x: f64, y: f64, width: f64, height: f64, rotation: f64) {
        self.ops.push(DrawOp::Sprite {
            sprite: sprite.clone(),
            x,
            y,
            width,
            height,
            rotation,
        });
    }

    fn draw_pattern(&mut self, sprite: &Sprite, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::Pattern {
            sprite: sprite.clone(),
            x,
            y,
            width,
            height,
        });
    }

    fn fill_rect(&mut self, color: Color, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::FillRect {
            color,
            x,
            y,
            width,
            height,
        });
    }

    fn stroke_rect(
        &mut self,
        color: Color,
        line_width: f64,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rotation: f64,
    ) {
        self.ops.push(DrawOp::StrokeRect {
            color,
            line_width,
            x,
            y,
            width,
            height,
            rotation,
        });
    }

    fn fill_circle(&mut self, color: Color, x: f64, y: f64, radius: f64) {
        self.ops.push(DrawOp::FillCircle {
            color,
            x,
            y,
            radius,
        });
    }

    fn stroke_circle(&mut self, color: Color, line_width: f64, x: f64, y: f64, radius: f64) {
        self.ops.push(DrawOp::StrokeCircle {
            color,
            line_width,
            x,
            y,
            radius,
        });
    }

    fn stroke_polygon(&mut self, color: Color, line_width: f64, points: &[Vec2]) {
        self.ops.push(DrawOp::StrokePolygon {
            color,
            line_width,
            points: points.to_vec(),
        });
    }

    fn draw_text(&mut self, font: &str, color: Color, text: &str, x: f64, y: f64, centered: bool) {
        self.ops.push(DrawOp::Text {
            font: font.to_owned(),
            color,
            text: text.to_owned(),
            x,
            y,
            centered,
        });
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::Translate { x, y });
    }

    fn rotate(&mut self, radians: f64) {
        self.ops.push(DrawOp::Rotate { radians });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_list_records_calls_in_order() {
        let mut list = DrawList::new();
        list.clear();
        list.fill_rect([1.0, 0.0, 0.0, 1.0], 1.0, 2.0, 3.0, 4.0);
        list.translate(5.0, 6.0);

        assert_eq!(list.ops.len(), 3);
        assert!(matches!(list.ops[0], DrawOp::Clear));
        assert!(matches!(list.ops[2], DrawOp::Translate { x: 5.0, y: 6.0 }));
    }
}
