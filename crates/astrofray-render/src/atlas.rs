//! Sprite sheets and tile carving.
//!
//! The host loads raster images however it likes and registers each one
//! under a string key with its pixel dimensions. [`TileSet`] then carves a
//! sheet's uniform grid into named tiles and animation sequences. Lookups by
//! name are forgiving: a missing tile logs a warning and yields the
//! zero-sized fallback sprite, matching the rule that presentation misses
//! must never take down the simulation.

use std::collections::HashMap;

use crate::sprite::{AnimatedSprite, Sprite};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from atlas lookups.
#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    /// No sheet was registered under the requested key.
    #[error("sprite sheet '{0}' is not loaded")]
    MissingSheet(String),
}

// ---------------------------------------------------------------------------
// SpriteAtlas
// ---------------------------------------------------------------------------

/// A loaded raster image, known only by key and extent.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    pub key: String,
    pub width: u32,
    pub height: u32,
}

/// Registry of loaded sheets, resolved by key.
#[derive(Debug, Default)]
pub struct SpriteAtlas {
    sheets: HashMap<String, SpriteSheet>,
}

impl SpriteAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a loaded sheet. Re-registering a key replaces the sheet.
    pub fn insert_sheet(&mut self, key: &str, width: u32, height: u32) {
        self.sheets.insert(
            key.to_owned(),
            SpriteSheet {
                key: key.to_owned(),
                width,
                height,
            },
        );
    }

    /// Resolve a sheet by key.
    pub fn sheet(&self, key: &str) -> Result<&SpriteSheet, AtlasError> {
        self.sheets
            .get(key)
            .ok_or_else(|| AtlasError::MissingSheet(key.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// TileSet
// ---------------------------------------------------------------------------

/// A uniform grid view over one sheet, with a name table for carved tiles.
#[derive(Debug)]
pub struct TileSet {
    sheet: String,
    tile_size: f64,
    tiles: HashMap<String, Sprite>,
}

impl TileSet {
    /// Create a grid view with `tile_size` pixels per cell edge.
    pub fn new(sheet: &SpriteSheet, tile_size: f64) -> Self {
        Self {
            sheet: sheet.key.clone(),
            tile_size,
            tiles: HashMap::new(),
        }
    }

    /// Carve the tile at `(row, column)`, scaled by `scale` (a 0.5 scale
    /// addresses a half-size sub-grid, used for the small projectile and
    /// thrust tiles).
    pub fn tile(&self, row: u32, column: u32, scale: f64) -> Sprite {
        let edge = self.tile_size * scale;
        Sprite {
            sheet: self.sheet.clone(),
            x: column as f64 * edge,
            y: row as f64 * edge,
            width: edge,
            height: edge,
        }
    }

    /// Register named tiles from `(name, row, column, scale)` rows.
    pub fn map_tiles(&mut self, mapping: &[(&str, u32, u32, f64)]) {
        for &(name, row, column, scale) in mapping {
            let sprite = self.tile(row, column, scale);
            self.tiles.insert(name.to_owned(), sprite);
        }
    }

    /// Look up a named tile. A miss logs a warning and returns the
    /// zero-sized fallback.
    pub fn tile_by_name(&self, name: &str) -> Sprite {
        match self.tiles.get(name) {
            Some(sprite) => sprite.clone(),
            None => {
                tracing::warn!(tile = name, sheet = %self.sheet, "tile not found");
                Sprite::fallback()
            }
        }
    }

    /// Build an animation from named tiles, in the given order.
    pub fn animated_by_names(&self, names: &[&str]) -> AnimatedSprite {
        AnimatedSprite {
            frames: names.iter().map(|name| self.tile_by_name(name)).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn atlas_with_main() -> SpriteAtlas {
        let mut atlas = SpriteAtlas::new();
        atlas.insert_sheet("main", 480, 480);
        atlas
    }

    // -- 1. Sheet registry --------------------------------------------------

    #[test]
    fn missing_sheet_is_an_error_with_the_key() {
        let atlas = atlas_with_main();
        let err = atlas.sheet("nebula").unwrap_err();
        assert!(err.to_string().contains("nebula"));
    }

    #[test]
    fn reinserting_a_key_replaces_the_sheet() {
        let mut atlas = atlas_with_main();
        atlas.insert_sheet("main", 960, 960);
        assert_eq!(atlas.sheet("main").unwrap().width, 960);
    }

    // -- 2. Tile carving ------------------------------------------------------

    #[test]
    fn tile_addresses_grid_cells() {
        let atlas = atlas_with_main();
        let tiles = TileSet::new(atlas.sheet("main").unwrap(), 48.0);

        let t = tiles.tile(2, 3, 1.0);
        assert_eq!((t.x, t.y), (144.0, 96.0));
        assert_eq!((t.width, t.height), (48.0, 48.0));
    }

    #[test]
    fn half_scale_addresses_the_sub_grid() {
        let atlas = atlas_with_main();
        let tiles = TileSet::new(atlas.sheet("main").unwrap(), 48.0);

        let t = tiles.tile(8, 3, 0.5);
        assert_eq!((t.x, t.y), (72.0, 192.0));
        assert_eq!((t.width, t.height), (24.0, 24.0));
    }

    // -- 3. Name table ---------------------------------------------------------

    #[test]
    fn named_tiles_resolve_and_misses_fall_back() {
        let atlas = atlas_with_main();
        let mut tiles = TileSet::new(atlas.sheet("main").unwrap(), 48.0);
        tiles.map_tiles(&[("spaceship", 1, 0, 1.0), ("laser", 8, 3, 0.5)]);

        assert_eq!(tiles.tile_by_name("spaceship").y, 48.0);
        assert_eq!(tiles.tile_by_name("laser").width, 24.0);
        assert_eq!(tiles.tile_by_name("warp-core"), Sprite::fallback());
    }

    #[test]
    fn animations_preserve_frame_order() {
        let atlas = atlas_with_main();
        let mut tiles = TileSet::new(atlas.sheet("main").unwrap(), 48.0);
        tiles.map_tiles(&[
            ("explosion_0", 2, 0, 1.0),
            ("explosion_1", 2, 1, 1.0),
            ("explosion_2", 2, 2, 1.0),
        ]);

        let anim = tiles.animated_by_names(&["explosion_0", "explosion_1", "explosion_2"]);
        assert_eq!(anim.len(), 3);
        assert_eq!(anim.frames[1].x, 48.0);
        assert_eq!(anim.frames[2].x, 96.0);
    }
}
