//! The full world state reported by the kernel.
//!
//! A [`WorldSnapshot`] is produced wholesale by the kernel every tick; the
//! client treats it as immutable and replaces its previous copy entirely --
//! there is no incremental patching. The same struct, pretty-printed, is the
//! persisted save format handed back to the kernel on load.

use serde::{Deserialize, Serialize};

use crate::log::LogEntry;
use crate::object::GameObject;

// ---------------------------------------------------------------------------
// GameStatus
// ---------------------------------------------------------------------------

/// Kernel lifecycle state, carried in every snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Initialized,
    Running,
    Paused,
    Ended,
}

// ---------------------------------------------------------------------------
// WorldSnapshot
// ---------------------------------------------------------------------------

/// Arena extent in world units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSize {
    pub width: f64,
    pub height: f64,
}

/// Complete simulation state at a point in time.
///
/// `game_objects` preserves kernel order, which is guaranteed stable for the
/// lifetime of a run (one epoch): index caches built against it stay valid
/// until a reset or state load. `logs` only ever grows within an epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub status: GameStatus,
    pub seed: i64,
    pub size: WorldSize,
    #[serde(rename = "gameObjects")]
    pub game_objects: Vec<GameObject>,
    pub logs: Vec<LogEntry>,
}

impl WorldSnapshot {
    /// Serialize to the persisted save form: human-readable, pretty-printed
    /// JSON, exactly what [`Kernel::from_state`](crate::kernel::Kernel::from_state)
    /// accepts back.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a snapshot from its persisted JSON form.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;
    use crate::object::{Asteroid, Collider};

    fn sample_snapshot() -> WorldSnapshot {
        WorldSnapshot {
            status: GameStatus::Running,
            seed: 42,
            size: WorldSize {
                width: 800.0,
                height: 600.0,
            },
            game_objects: vec![GameObject::Asteroid(Asteroid {
                id: 1,
                enabled: true,
                position: Vec2::new(10.0, 20.0),
                radius: 32.0,
                collider: Collider::Circle {
                    enabled: true,
                    position: Vec2::new(10.0, 20.0),
                    radius: 32.0,
                },
            })],
            logs: Vec::new(),
        }
    }

    // -- 1. Persisted form ------------------------------------------------------

    #[test]
    fn save_form_is_pretty_printed() {
        let text = sample_snapshot().to_json().unwrap();
        assert!(text.contains('\n'), "save format must be human-readable");
        assert!(text.contains(r#""gameObjects""#));
    }

    #[test]
    fn save_form_round_trips() {
        let snapshot = sample_snapshot();
        let restored = WorldSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(snapshot, restored);
    }

    // -- 2. Kernel-shaped input ---------------------------------------------------

    #[test]
    fn status_uses_lowercase_wire_names() {
        let text = r#"{
            "status": "paused",
            "seed": 7,
            "size": { "width": 100.0, "height": 100.0 },
            "gameObjects": [],
            "logs": []
        }"#;

        let snapshot = WorldSnapshot::from_json(text).unwrap();
        assert_eq!(snapshot.status, GameStatus::Paused);
        assert_eq!(snapshot.seed, 7);
    }

    #[test]
    fn malformed_input_is_an_error_not_a_panic() {
        assert!(WorldSnapshot::from_json("{ not json").is_err());
        assert!(WorldSnapshot::from_json(r#"{"status":"warp"}"#).is_err());
    }
}
