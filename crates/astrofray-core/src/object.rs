//! The tagged game-object union reported by the kernel.
//!
//! Every object in a [`WorldSnapshot`](crate::snapshot::WorldSnapshot) is one
//! of five variants, discriminated on the wire by a `"type"` tag. The client
//! never mutates objects -- the kernel owns them; this module only pins the
//! JSON shape and gives the dispatch sites an exhaustive enum to match on.
//!
//! Field names follow the kernel's serializer exactly (camelCase keys such
//! as `lifespanSec` and `startPosition`), so a snapshot saved by the kernel
//! deserializes without translation.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

// ---------------------------------------------------------------------------
// Colliders
// ---------------------------------------------------------------------------

/// Collision shape attached to an object, tagged by `"type"`.
///
/// Shapes are kernel-owned; the client only reads them to draw hit-box
/// overlays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Collider {
    Circle {
        enabled: bool,
        position: Vec2,
        radius: f64,
    },
    Square {
        enabled: bool,
        position: Vec2,
        rotation: f64,
        size: ColliderSize,
    },
    Polygon {
        enabled: bool,
        position: Vec2,
        rotation: f64,
        vertices: Vec<Vec2>,
    },
}

impl Collider {
    /// Radius of the smallest circle centered on the collider position that
    /// contains the shape. Used to size sprites and place overlays.
    pub fn bounding_radius(&self) -> f64 {
        match self {
            Collider::Circle { radius, .. } => *radius,
            Collider::Square { size, .. } => {
                0.5 * (size.width.powi(2) + size.height.powi(2)).sqrt()
            }
            Collider::Polygon {
                position, vertices, ..
            } => vertices
                .iter()
                .map(|v| ((v.x - position.x).powi(2) + (v.y - position.y).powi(2)).sqrt())
                .fold(0.0, f64::max),
        }
    }
}

/// Width/height extent of a square collider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColliderSize {
    pub width: f64,
    pub height: f64,
}

// ---------------------------------------------------------------------------
// Object variants
// ---------------------------------------------------------------------------

/// A drifting rock. Spins visually; the spin is client-side flavor only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: i64,
    pub enabled: bool,
    pub position: Vec2,
    pub radius: f64,
    pub collider: Collider,
}

/// A transient blast. `lifespan_sec` counts down from `duration_sec`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explosion {
    pub id: i64,
    pub enabled: bool,
    pub position: Vec2,
    pub radius: f64,
    pub duration_sec: f64,
    pub lifespan_sec: f64,
}

/// A laser bolt in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Laser {
    pub id: i64,
    pub enabled: bool,
    pub position: Vec2,
    pub rotation: f64,
    pub velocity: Vec2,
    pub lifespan_sec: f64,
    pub damage: f64,
    pub owner: String,
    pub collider: Collider,
}

/// A rocket in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rocket {
    pub id: i64,
    pub enabled: bool,
    pub position: Vec2,
    pub rotation: f64,
    pub velocity: Vec2,
    pub lifespan_sec: f64,
    pub damage: f64,
    pub owner: String,
    pub collider: Collider,
}

/// Engine thrust telemetry, each magnitude in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineThrust {
    pub main_thrust: f64,
    pub left_thrust: f64,
    pub right_thrust: f64,
}

/// A controllable ship. The only variant with a stable, agent-facing name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spaceship {
    pub id: i64,
    pub enabled: bool,
    pub destroyed: bool,
    pub name: String,
    pub start_position: Vec2,
    pub position: Vec2,
    pub rotation: f64,
    pub velocity: Vec2,
    pub health: f64,
    pub energy: f64,
    pub engine: EngineThrust,
    pub rockets: u32,
    pub kills: u32,
    pub score: i64,
    pub laser_reload_timer_sec: f64,
    pub rocket_reload_timer_sec: f64,
    pub collider: Collider,
}

// ---------------------------------------------------------------------------
// GameObject
// ---------------------------------------------------------------------------

/// Tagged union over everything the kernel reports, discriminated by
/// `"type"`.
///
/// Dispatch sites (rendering, scoreboard projection, identity resolution)
/// match exhaustively so a new variant cannot be silently ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GameObject {
    Asteroid(Asteroid),
    Explosion(Explosion),
    Laser(Laser),
    Rocket(Rocket),
    Spaceship(Spaceship),
}

impl GameObject {
    /// Kernel-assigned id, unique within a snapshot.
    pub fn id(&self) -> i64 {
        match self {
            GameObject::Asteroid(o) => o.id,
            GameObject::Explosion(o) => o.id,
            GameObject::Laser(o) => o.id,
            GameObject::Rocket(o) => o.id,
            GameObject::Spaceship(o) => o.id,
        }
    }

    /// Whether the object participates in the simulation (and is drawn).
    pub fn enabled(&self) -> bool {
        match self {
            GameObject::Asteroid(o) => o.enabled,
            GameObject::Explosion(o) => o.enabled,
            GameObject::Laser(o) => o.enabled,
            GameObject::Rocket(o) => o.enabled,
            GameObject::Spaceship(o) => o.enabled,
        }
    }

    /// World position of the object's center.
    pub fn position(&self) -> Vec2 {
        match self {
            GameObject::Asteroid(o) => o.position,
            GameObject::Explosion(o) => o.position,
            GameObject::Laser(o) => o.position,
            GameObject::Rocket(o) => o.position,
            GameObject::Spaceship(o) => o.position,
        }
    }

    /// The spaceship payload, if this object is one.
    pub fn as_spaceship(&self) -> Option<&Spaceship> {
        match self {
            GameObject::Spaceship(ship) => Some(ship),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
