//! Astrofray Render -- deterministic mapping from kernel state to draw calls.
//!
//! This crate owns the presentation half of the client:
//!
//! - **`sprite`/`atlas`**: keyed sprite sheets carved into named tiles and
//!   animation frame sequences. Pixel IO is the host's problem; sprites are
//!   addressed regions, never decoded images.
//! - **`surface`**: the [`RenderSurface`] immediate-mode drawing abstraction
//!   (sprite blit with rotation, shapes, text, pattern tiling) plus
//!   [`DrawList`], a recording implementation used for headless
//!   verification -- tests assert on recorded draw ops instead of pixels.
//! - **`scene`**: the per-frame pipeline: parallax background, then one draw
//!   call per enabled object in snapshot order, dispatched exhaustively by
//!   variant.
//!
//! The renderer never talks to the kernel and never mutates a snapshot; it
//! is a pure function from `(snapshot, elapsed time, overlay flags)` to a
//! sequence of surface calls.

#![deny(unsafe_code)]

pub mod atlas;
pub mod scene;
pub mod sprite;
pub mod surface;

pub use atlas::{AtlasError, SpriteAtlas, SpriteSheet, TileSet};
pub use scene::{draw_scene, OverlayOptions, SceneAssets};
pub use sprite::{AnimatedSprite, Sprite};
pub use surface::{Color, DrawList, DrawOp, RenderSurface};
