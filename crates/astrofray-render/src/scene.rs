//! The per-frame scene pipeline.
//!
//! [`draw_scene`] is a pure function from `(snapshot, elapsed time, overlay
//! flags)` to surface calls: three parallax background layers first, then one
//! pass over the snapshot's objects in kernel order, skipping disabled ones
//! and dispatching exhaustively on the object variant. Nothing here reads the
//! clock or touches the kernel; the caller supplies elapsed time so the same
//! snapshot always produces the same draw list.
//!
//! Sprite coordinates and sizes mirror the standard sheet layout carved by
//! [`SceneAssets::standard`]; overlay geometry (name tag, health/energy bars,
//! collider outlines) is expressed relative to each object's bounding radius
//! so it tracks the sprite regardless of zoom.

use std::f64::consts::{FRAC_PI_2, PI};

use astrofray_core::math::Vec2;
use astrofray_core::object::{
    Asteroid, Collider, Explosion, GameObject, Laser, Rocket, Spaceship,
};
use astrofray_core::snapshot::WorldSnapshot;

use crate::atlas::{AtlasError, SpriteAtlas, TileSet};
use crate::sprite::{AnimatedSprite, Sprite};
use crate::surface::{Color, RenderSurface};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Grid cell edge of the main sprite sheet, in pixels.
pub const TILE_SIZE: f64 = 48.0;

const TEXT_NAME: &str = "12px Arial";
const TEXT_INFO: &str = "8px Arial";

const COLOR_TEXT: Color = [1.0, 1.0, 1.0, 1.0];
const COLOR_COLLIDER: Color = [0.0, 1.0, 0.0, 1.0];
const COLOR_HEALTH: Color = [1.0, 0.0, 0.0, 1.0];
const COLOR_ENERGY: Color = [0.161, 0.812, 1.0, 1.0];

const MAIN_THRUST_SIZE: f64 = 24.0;
const SIDE_THRUST_SIZE: f64 = 18.0;
const THRUST_FRAME_MS: f64 = 100.0;

const PROJECTILE_SCALE: f64 = 0.75;

// ---------------------------------------------------------------------------
// OverlayOptions
// ---------------------------------------------------------------------------

/// Which debug/info overlays to draw on top of the sprites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayOptions {
    /// Outline every collider shape.
    pub colliders: bool,
    /// Ship name tag above the hull.
    pub names: bool,
    /// Health bar below the hull.
    pub health: bool,
    /// Energy bar below the health bar.
    pub energy: bool,
}

// ---------------------------------------------------------------------------
// SceneAssets
// ---------------------------------------------------------------------------

/// Every sprite the pipeline draws, carved once at startup.
#[derive(Debug)]
pub struct SceneAssets {
    pub asteroid: [Sprite; 2],
    pub spaceship: Sprite,
    pub laser: Sprite,
    pub rocket: Sprite,
    pub explosion: AnimatedSprite,
    pub thrust: AnimatedSprite,
    /// One pattern tile per parallax layer, back to front.
    pub backgrounds: [Sprite; 3],
}

impl SceneAssets {
    /// Carve the standard sheet layout: the `"main"` sheet on a 48 px grid
    /// (projectile and thrust tiles on its half-size sub-grid) and one
    /// 240 px pattern tile from each of `"background_0"` through
    /// `"background_2"`.
    pub fn standard(atlas: &SpriteAtlas) -> Result<Self, AtlasError> {
        let mut main = TileSet::new(atlas.sheet("main")?, TILE_SIZE);
        main.map_tiles(&[
            ("asteroid_0", 0, 0, 1.0),
            ("asteroid_1", 0, 1, 1.0),
            ("spaceship", 1, 0, 1.0),
            ("laser", 8, 3, 0.5),
            ("rocket", 8, 2, 0.5),
            ("explosion_0", 2, 0, 1.0),
            ("explosion_1", 2, 1, 1.0),
            ("explosion_2", 2, 2, 1.0),
            ("explosion_3", 2, 3, 1.0),
            ("explosion_4", 2, 4, 1.0),
            ("explosion_5", 3, 0, 1.0),
            ("explosion_6", 3, 1, 1.0),
            ("explosion_7", 3, 2, 1.0),
            ("explosion_8", 3, 3, 1.0),
            ("explosion_9", 3, 4, 1.0),
            ("thrust_0", 8, 0, 0.5),
            ("thrust_1", 8, 1, 0.5),
            ("thrust_2", 9, 0, 0.5),
            ("thrust_3", 9, 1, 0.5),
        ]);

        let backgrounds = [
            TileSet::new(atlas.sheet("background_0")?, TILE_SIZE * 5.0).tile(0, 0, 1.0),
            TileSet::new(atlas.sheet("background_1")?, TILE_SIZE * 5.0).tile(0, 0, 1.0),
            TileSet::new(atlas.sheet("background_2")?, TILE_SIZE * 5.0).tile(0, 0, 1.0),
        ];

        Ok(Self {
            asteroid: [main.tile_by_name("asteroid_0"), main.tile_by_name("asteroid_1")],
            spaceship: main.tile_by_name("spaceship"),
            laser: main.tile_by_name("laser"),
            rocket: main.tile_by_name("rocket"),
            explosion: main.animated_by_names(&[
                "explosion_0",
                "explosion_1",
                "explosion_2",
                "explosion_3",
                "explosion_4",
                "explosion_5",
                "explosion_6",
                "explosion_7",
                "explosion_8",
                "explosion_9",
            ]),
            thrust: main.animated_by_names(&["thrust_0", "thrust_1", "thrust_2", "thrust_3"]),
            backgrounds,
        })
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Draw one frame: background layers, then every enabled object in snapshot
/// order.
pub fn draw_scene(
    surface: &mut dyn RenderSurface,
    assets: &SceneAssets,
    snapshot: &WorldSnapshot,
    elapsed_ms: f64,
    overlays: OverlayOptions,
    width: f64,
    height: f64,
) {
    draw_background(surface, &assets.backgrounds, elapsed_ms, width, height);

    for (index, object) in snapshot.game_objects.iter().enumerate() {
        if !object.enabled() {
            continue;
        }

        match object {
            GameObject::Asteroid(asteroid) => {
                // Alternating tile and spin direction by slot keeps a field
                // of rocks from rotating in lockstep.
                let spin_ms = if index % 2 == 0 { elapsed_ms } else { -elapsed_ms };
                draw_asteroid(
                    surface,
                    asteroid,
                    &assets.asteroid[index % 2],
                    spin_ms,
                    overlays.colliders,
                );
            }
            GameObject::Spaceship(ship) => {
                draw_spaceship(surface, ship, assets, elapsed_ms, overlays);
            }
            GameObject::Laser(laser) => {
                draw_laser(surface, laser, &assets.laser, overlays.colliders);
            }
            GameObject::Rocket(rocket) => {
                draw_rocket(surface, rocket, &assets.rocket, overlays.colliders);
            }
            GameObject::Explosion(explosion) => {
                draw_explosion(surface, explosion, &assets.explosion);
            }
        }
    }
}

/// Three pattern layers, each drifting on its own slow circle so the
/// starfield parallaxes without any per-star state. Every layer overscans by
/// 10 px so the drift never exposes a bare edge.
fn draw_background(
    surface: &mut dyn RenderSurface,
    layers: &[Sprite; 3],
    elapsed_ms: f64,
    width: f64,
    height: f64,
) {
    let mut angle = elapsed_ms * 0.001;
    let mut position = Vec2::new(0.0, 10.0).rotate(angle);
    surface.translate(position.x, position.y);
    surface.draw_pattern(&layers[0], -10.0, -10.0, width + 20.0, height + 20.0);
    surface.translate(-position.x, -position.y);

    angle = (elapsed_ms - 250.0) * 0.0005;
    position = Vec2::new(0.0, 10.0).rotate(-angle);
    surface.translate(0.0, position.y);
    surface.draw_pattern(&layers[1], -10.0, -10.0, width + 20.0, height + 20.0);
    surface.translate(0.0, -position.y);

    angle = (elapsed_ms - 500.0) * 0.0005;
    position = Vec2::new(0.0, 10.0).rotate(angle);
    surface.translate(position.x, 0.0);
    surface.draw_pattern(&layers[2], -10.0, -10.0, width + 20.0, height + 20.0);
    surface.translate(-position.x, 0.0);
}

fn draw_asteroid(
    surface: &mut dyn RenderSurface,
    asteroid: &Asteroid,
    sprite: &Sprite,
    elapsed_ms: f64,
    show_collider: bool,
) {
    surface.draw_sprite(
        sprite,
        asteroid.position.x,
        asteroid.position.y,
        asteroid.radius * 2.0,
        asteroid.radius * 2.0,
        asteroid.position.x + elapsed_ms / 4000.0 + asteroid.radius * 2.0,
    );

    if show_collider {
        draw_collider(surface, &asteroid.collider);
    }
}

/// Flare size grows from half the base to the full base as thrust goes
/// `0..=100`.
fn thrust_size(base: f64, thrust: f64) -> f64 {
    base / 2.0 + (base / 2.0) * thrust / 100.0
}

fn draw_spaceship(
    surface: &mut dyn RenderSurface,
    ship: &Spaceship,
    assets: &SceneAssets,
    elapsed_ms: f64,
    overlays: OverlayOptions,
) {
    let radius = ship.collider.bounding_radius();

    // The hull sprite points up; world rotation zero points right.
    surface.draw_sprite(
        &assets.spaceship,
        ship.position.x,
        ship.position.y,
        radius * 2.0,
        radius * 2.0,
        ship.rotation + FRAC_PI_2,
    );

    let flare = assets.thrust.frame_at(elapsed_ms, THRUST_FRAME_MS);

    if ship.engine.main_thrust > 0.0 {
        let position = ship
            .position
            .translate(Vec2::new(0.0, radius))
            .rotate_about(ship.rotation + FRAC_PI_2, ship.position);
        let size = thrust_size(MAIN_THRUST_SIZE, ship.engine.main_thrust);
        surface.draw_sprite(
            flare,
            position.x,
            position.y,
            size,
            size,
            ship.rotation + FRAC_PI_2,
        );
    }

    if ship.engine.left_thrust > 0.0 {
        let position = Vec2::new(ship.position.x + 2.0, ship.position.y)
            .translate(Vec2::new(-radius, radius - 9.0))
            .rotate_about(ship.rotation + FRAC_PI_2, ship.position);
        let size = thrust_size(SIDE_THRUST_SIZE, ship.engine.left_thrust);
        surface.draw_sprite(flare, position.x, position.y, size, size, ship.rotation + PI);
    }

    if ship.engine.right_thrust > 0.0 {
        let position = Vec2::new(ship.position.x - 2.0, ship.position.y)
            .translate(Vec2::new(radius, radius - 9.0))
            .rotate_about(ship.rotation + FRAC_PI_2, ship.position);
        let size = thrust_size(SIDE_THRUST_SIZE, ship.engine.right_thrust);
        surface.draw_sprite(flare, position.x, position.y, size, size, ship.rotation);
    }

    if overlays.names {
        surface.draw_text(
            TEXT_NAME,
            COLOR_TEXT,
            &ship.name,
            ship.position.x,
            ship.position.y - radius - 6.0,
            true,
        );
    }

    let mut info_y_offset = 0.0;
    if overlays.health {
        draw_stat_bar(
            surface,
            "H",
            ship.health,
            COLOR_HEALTH,
            ship.position,
            radius,
            info_y_offset,
        );
        info_y_offset += 10.0;
    }
    if overlays.energy {
        draw_stat_bar(
            surface,
            "E",
            ship.energy,
            COLOR_ENERGY,
            ship.position,
            radius,
            info_y_offset,
        );
    }

    if overlays.colliders {
        draw_collider(surface, &ship.collider);
    }
}

/// One labelled 20x6 bar under the hull: label, filled portion of
/// `value / 100`, full outline, then the rounded value.
fn draw_stat_bar(
    surface: &mut dyn RenderSurface,
    label: &str,
    value: f64,
    color: Color,
    position: Vec2,
    radius: f64,
    y_offset: f64,
) {
    let bar_y = position.y + radius + 6.0 + y_offset;
    let text_y = position.y + radius + 12.0 + y_offset;

    surface.draw_text(TEXT_INFO, COLOR_TEXT, label, position.x - 19.0, text_y, false);
    surface.fill_rect(color, position.x - 10.0, bar_y, 20.0 * (value / 100.0), 6.0);
    surface.stroke_rect(color, 1.0, position.x - 10.0, bar_y, 20.0, 6.0, 0.0);
    surface.draw_text(
        TEXT_INFO,
        COLOR_TEXT,
        &format!("{}", value.round()),
        position.x + 12.0,
        text_y,
        false,
    );
}

fn draw_laser(
    surface: &mut dyn RenderSurface,
    laser: &Laser,
    sprite: &Sprite,
    show_collider: bool,
) {
    surface.draw_sprite(
        sprite,
        laser.position.x,
        laser.position.y,
        sprite.width * PROJECTILE_SCALE,
        sprite.height * PROJECTILE_SCALE,
        laser.rotation + FRAC_PI_2,
    );

    if show_collider {
        draw_collider(surface, &laser.collider);
    }
}

fn draw_rocket(
    surface: &mut dyn RenderSurface,
    rocket: &Rocket,
    sprite: &Sprite,
    show_collider: bool,
) {
    surface.draw_sprite(
        sprite,
        rocket.position.x,
        rocket.position.y,
        sprite.width * PROJECTILE_SCALE,
        sprite.height * PROJECTILE_SCALE,
        rocket.rotation + FRAC_PI_2,
    );

    if show_collider {
        draw_collider(surface, &rocket.collider);
    }
}

/// Plays the frame sequence backwards against `lifespan_sec`, which the
/// kernel counts down from `duration_sec`. A freshly-spawned explosion
/// (full lifespan) is not drawn at all for its first frame slice.
fn draw_explosion(surface: &mut dyn RenderSurface, explosion: &Explosion, sprite: &AnimatedSprite) {
    if sprite.is_empty() {
        return;
    }

    let frame_duration = explosion.duration_sec / sprite.len() as f64;
    let steps = (explosion.lifespan_sec / frame_duration) as usize;
    if steps >= sprite.len() {
        return;
    }
    let frame = sprite.len() - 1 - steps;

    surface.draw_sprite(
        &sprite.frames[frame],
        explosion.position.x,
        explosion.position.y,
        explosion.radius * 2.0,
        explosion.radius * 2.0,
        0.0,
    );
}

/// Outline any collider shape in the shared overlay color.
fn draw_collider(surface: &mut dyn RenderSurface, collider: &Collider) {
    match collider {
        Collider::Circle { position, radius, .. } => {
            surface.stroke_circle(COLOR_COLLIDER, 1.0, position.x, position.y, *radius);
        }
        Collider::Square {
            position,
            rotation,
            size,
            ..
        } => {
            surface.stroke_rect(
                COLOR_COLLIDER,
                1.0,
                position.x,
                position.y,
                size.width,
                size.height,
                *rotation,
            );
        }
        Collider::Polygon { vertices, .. } => {
            surface.stroke_polygon(COLOR_COLLIDER, 1.0, vertices);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use astrofray_core::object::{ColliderSize, EngineThrust};
    use astrofray_core::snapshot::{GameStatus, WorldSize};

    use super::*;
    use crate::surface::{DrawList, DrawOp};

    fn test_assets() -> SceneAssets {
        let mut atlas = SpriteAtlas::new();
        atlas.insert_sheet("main", 480, 480);
        atlas.insert_sheet("background_0", 240, 240);
        atlas.insert_sheet("background_1", 240, 240);
        atlas.insert_sheet("background_2", 240, 240);
        SceneAssets::standard(&atlas).unwrap()
    }

    fn circle(position: Vec2, radius: f64) -> Collider {
        Collider::Circle {
            enabled: true,
            position,
            radius,
        }
    }

    fn test_ship(engine: EngineThrust) -> Spaceship {
        Spaceship {
            id: 1,
            enabled: true,
            destroyed: false,
            name: "Calypso".to_owned(),
            start_position: Vec2::new(100.0, 100.0),
            position: Vec2::new(100.0, 100.0),
            rotation: 0.0,
            velocity: Vec2::new(0.0, 0.0),
            health: 80.0,
            energy: 55.0,
            engine,
            rockets: 10,
            kills: 0,
            score: 0,
            laser_reload_timer_sec: 0.0,
            rocket_reload_timer_sec: 0.0,
            collider: circle(Vec2::new(100.0, 100.0), 16.0),
        }
    }

    fn snapshot_of(game_objects: Vec<GameObject>) -> WorldSnapshot {
        WorldSnapshot {
            status: GameStatus::Running,
            seed: 42,
            size: WorldSize {
                width: 800.0,
                height: 600.0,
            },
            game_objects,
            logs: Vec::new(),
        }
    }

    // -- 1. Frame ordering --------------------------------------------------

    #[test]
    fn background_layers_come_first_and_wrap_their_translations() {
        let assets = test_assets();
        let snapshot = snapshot_of(vec![GameObject::Spaceship(test_ship(
            EngineThrust::default(),
        ))]);

        let mut list = DrawList::new();
        draw_scene(
            &mut list,
            &assets,
            &snapshot,
            0.0,
            OverlayOptions::default(),
            800.0,
            600.0,
        );

        // translate / pattern / translate-back, three times, before any sprite.
        let patterns: Vec<usize> = list
            .ops
            .iter()
            .enumerate()
            .filter(|(_, op)| matches!(op, DrawOp::Pattern { .. }))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(patterns, vec![1, 4, 7]);

        let first_sprite = list
            .ops
            .iter()
            .position(|op| matches!(op, DrawOp::Sprite { .. }))
            .unwrap();
        assert!(first_sprite > patterns[2]);

        // Each layer undoes its own translation.
        let translates: Vec<(f64, f64)> = list
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Translate { x, y } => Some((*x, *y)),
                _ => None,
            })
            .collect();
        assert_eq!(translates.len(), 6);
        for pair in translates.chunks(2) {
            assert_eq!(pair[0].0, -pair[1].0);
            assert_eq!(pair[0].1, -pair[1].1);
        }
    }

    #[test]
    fn disabled_objects_are_skipped() {
        let assets = test_assets();
        let mut ship = test_ship(EngineThrust::default());
        ship.enabled = false;
        let snapshot = snapshot_of(vec![GameObject::Spaceship(ship)]);

        let mut list = DrawList::new();
        draw_scene(
            &mut list,
            &assets,
            &snapshot,
            0.0,
            OverlayOptions::default(),
            800.0,
            600.0,
        );

        assert_eq!(list.sprites().count(), 0);
    }

    #[test]
    fn objects_draw_in_snapshot_order() {
        let assets = test_assets();
        let asteroid = GameObject::Asteroid(Asteroid {
            id: 2,
            enabled: true,
            position: Vec2::new(300.0, 300.0),
            radius: 24.0,
            collider: circle(Vec2::new(300.0, 300.0), 24.0),
        });
        let ship = GameObject::Spaceship(test_ship(EngineThrust::default()));
        let snapshot = snapshot_of(vec![asteroid, ship]);

        let mut list = DrawList::new();
        draw_scene(
            &mut list,
            &assets,
            &snapshot,
            0.0,
            OverlayOptions::default(),
            800.0,
            600.0,
        );

        let sprites: Vec<&DrawOp> = list.sprites().collect();
        assert_eq!(sprites.len(), 2);
        let DrawOp::Sprite { x, .. } = sprites[0] else {
            unreachable!()
        };
        assert_eq!(*x, 300.0);
    }

    // -- 2. Thrust flares -----------------------------------------------------

    #[test]
    fn idle_engine_draws_only_the_hull() {
        let assets = test_assets();
        let snapshot = snapshot_of(vec![GameObject::Spaceship(test_ship(
            EngineThrust::default(),
        ))]);

        let mut list = DrawList::new();
        draw_scene(
            &mut list,
            &assets,
            &snapshot,
            0.0,
            OverlayOptions::default(),
            800.0,
            600.0,
        );

        assert_eq!(list.sprites().count(), 1);
    }

    #[test]
    fn each_active_thruster_adds_a_flare() {
        let assets = test_assets();
        let snapshot = snapshot_of(vec![GameObject::Spaceship(test_ship(EngineThrust {
            main_thrust: 100.0,
            left_thrust: 50.0,
            right_thrust: 25.0,
        }))]);

        let mut list = DrawList::new();
        draw_scene(
            &mut list,
            &assets,
            &snapshot,
            0.0,
            OverlayOptions::default(),
            800.0,
            600.0,
        );

        // Hull plus three flares.
        assert_eq!(list.sprites().count(), 4);

        // Full main thrust draws the flare at full base size; half left
        // thrust at three quarters.
        let sizes: Vec<f64> = list
            .sprites()
            .filter_map(|op| match op {
                DrawOp::Sprite { width, .. } => Some(*width),
                _ => None,
            })
            .collect();
        assert_eq!(sizes[1], MAIN_THRUST_SIZE);
        assert_eq!(sizes[2], SIDE_THRUST_SIZE * 0.75);
    }

    #[test]
    fn main_flare_sits_behind_the_hull() {
        let assets = test_assets();
        let mut ship = test_ship(EngineThrust {
            main_thrust: 100.0,
            ..EngineThrust::default()
        });
        // Facing right: the flare trails off to the left.
        ship.rotation = 0.0;
        let snapshot = snapshot_of(vec![GameObject::Spaceship(ship)]);

        let mut list = DrawList::new();
        draw_scene(
            &mut list,
            &assets,
            &snapshot,
            0.0,
            OverlayOptions::default(),
            800.0,
            600.0,
        );

        let sprites: Vec<&DrawOp> = list.sprites().collect();
        let DrawOp::Sprite { x, y, .. } = sprites[1] else {
            unreachable!()
        };
        assert!((x - 84.0).abs() < 1e-9, "flare x: {x}");
        assert!((y - 100.0).abs() < 1e-9, "flare y: {y}");
    }

    // -- 3. Overlays -------------------------------------------------------------

    #[test]
    fn overlays_are_opt_in() {
        let assets = test_assets();
        let snapshot = snapshot_of(vec![GameObject::Spaceship(test_ship(
            EngineThrust::default(),
        ))]);

        let mut plain = DrawList::new();
        draw_scene(
            &mut plain,
            &assets,
            &snapshot,
            0.0,
            OverlayOptions::default(),
            800.0,
            600.0,
        );
        assert!(!plain
            .ops
            .iter()
            .any(|op| matches!(op, DrawOp::Text { .. } | DrawOp::StrokeCircle { .. })));

        let mut full = DrawList::new();
        draw_scene(
            &mut full,
            &assets,
            &snapshot,
            0.0,
            OverlayOptions {
                colliders: true,
                names: true,
                health: true,
                energy: true,
            },
            800.0,
            600.0,
        );

        // Name tag, two labelled bars (label + value each), one collider ring.
        let texts: Vec<&str> = full
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["Calypso", "H", "80", "E", "55"]);
        assert_eq!(
            full.ops
                .iter()
                .filter(|op| matches!(op, DrawOp::StrokeCircle { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn energy_bar_drops_below_health_bar_when_both_shown() {
        let assets = test_assets();
        let snapshot = snapshot_of(vec![GameObject::Spaceship(test_ship(
            EngineThrust::default(),
        ))]);

        let mut list = DrawList::new();
        draw_scene(
            &mut list,
            &assets,
            &snapshot,
            0.0,
            OverlayOptions {
                health: true,
                energy: true,
                ..OverlayOptions::default()
            },
            800.0,
            600.0,
        );

        let bar_ys: Vec<f64> = list
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { y, .. } => Some(*y),
                _ => None,
            })
            .collect();
        assert_eq!(bar_ys.len(), 2);
        assert_eq!(bar_ys[1] - bar_ys[0], 10.0);
    }

    #[test]
    fn collider_overlay_matches_the_shape() {
        let assets = test_assets();
        let laser = GameObject::Laser(Laser {
            id: 5,
            enabled: true,
            position: Vec2::new(50.0, 60.0),
            rotation: 0.5,
            velocity: Vec2::new(300.0, 0.0),
            lifespan_sec: 1.0,
            damage: 5.0,
            owner: "Calypso".to_owned(),
            collider: Collider::Square {
                enabled: true,
                position: Vec2::new(50.0, 60.0),
                rotation: 0.5,
                size: ColliderSize {
                    width: 2.0,
                    height: 12.0,
                },
            },
        });
        let snapshot = snapshot_of(vec![laser]);

        let mut list = DrawList::new();
        draw_scene(
            &mut list,
            &assets,
            &snapshot,
            0.0,
            OverlayOptions {
                colliders: true,
                ..OverlayOptions::default()
            },
            800.0,
            600.0,
        );

        assert!(list.ops.iter().any(|op| matches!(
            op,
            DrawOp::StrokeRect { color, width, .. }
                if *color == COLOR_COLLIDER && *width == 2.0
        )));
    }

    // -- 4. Explosions ------------------------------------------------------------

    #[test]
    fn explosion_plays_backwards_against_lifespan() {
        let assets = test_assets();
        let frame_of = |lifespan_sec: f64| -> Option<Sprite> {
            let explosion = GameObject::Explosion(Explosion {
                id: 9,
                enabled: true,
                position: Vec2::new(10.0, 10.0),
                radius: 30.0,
                duration_sec: 1.0,
                lifespan_sec,
            });
            let snapshot = snapshot_of(vec![explosion]);
            let mut list = DrawList::new();
            draw_scene(
                &mut list,
                &assets,
                &snapshot,
                0.0,
                OverlayOptions::default(),
                800.0,
                600.0,
            );
            let frame = list.sprites().next().map(|op| match op {
                DrawOp::Sprite { sprite, .. } => sprite.clone(),
                _ => unreachable!(),
            });
            frame
        };

        // Ten frames over one second: near-expiry shows the last frame,
        // near-spawn the first. A full lifespan draws nothing yet.
        assert_eq!(frame_of(0.05), Some(assets.explosion.frames[9].clone()));
        assert_eq!(frame_of(0.55), Some(assets.explosion.frames[4].clone()));
        assert_eq!(frame_of(0.95), Some(assets.explosion.frames[0].clone()));
        assert_eq!(frame_of(1.0), None);
    }

    // -- 5. Asteroids -----------------------------------------------------------

    #[test]
    fn asteroids_alternate_tiles_by_slot() {
        let assets = test_assets();
        let rock = |id: i64, x: f64| {
            GameObject::Asteroid(Asteroid {
                id,
                enabled: true,
                position: Vec2::new(x, 100.0),
                radius: 20.0,
                collider: circle(Vec2::new(x, 100.0), 20.0),
            })
        };
        let snapshot = snapshot_of(vec![rock(1, 100.0), rock(2, 200.0)]);

        let mut list = DrawList::new();
        draw_scene(
            &mut list,
            &assets,
            &snapshot,
            0.0,
            OverlayOptions::default(),
            800.0,
            600.0,
        );

        let sheets: Vec<f64> = list
            .sprites()
            .filter_map(|op| match op {
                DrawOp::Sprite { sprite, .. } => Some(sprite.x),
                _ => None,
            })
            .collect();
        assert_eq!(sheets, vec![assets.asteroid[0].x, assets.asteroid[1].x]);
    }
}
