//! Sprites: rectangular regions of a loaded sheet, addressed by sheet key.

/// A rectangular region of a sprite sheet, in sheet pixel coordinates.
///
/// Created once at startup by the [`TileSet`](crate::atlas::TileSet) carving
/// pass and immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Key of the sheet this region belongs to.
    pub sheet: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Sprite {
    /// A zero-sized placeholder drawn when a tile lookup misses; blitting it
    /// is a visible no-op rather than a crash.
    pub fn fallback() -> Self {
        Self {
            sheet: String::new(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }
}

/// An ordered frame sequence cut from one sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedSprite {
    pub frames: Vec<Sprite>,
}

impl AnimatedSprite {
    /// The frame for `elapsed_ms` at a fixed per-frame duration, wrapping.
    pub fn frame_at(&self, elapsed_ms: f64, frame_duration_ms: f64) -> &Sprite {
        let index = (elapsed_ms / frame_duration_ms) as usize % self.frames.len();
        &self.frames[index]
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
