//! Astrofray Core -- shared data model for the battle client.
//!
//! This crate defines everything the orchestration and rendering layers
//! agree on: the world snapshot produced by the simulation kernel each tick,
//! the tagged game-object and log unions, the scoreboard projection, the
//! closed action vocabulary, the controller contract that pluggable ship
//! agents implement, and the call surface of the kernel itself.
//!
//! The kernel is an external, authoritative simulation (physics, collision,
//! damage, scoring). This crate never simulates anything -- it only models
//! the JSON shape the kernel produces and consumes, with serde field names
//! pinned to that wire format.
//!
//! # Quick Start
//!
//! ```
//! use astrofray_core::prelude::*;
//!
//! let positions = start_positions(800.0, 600.0, 4);
//! assert_eq!(positions.len(), 4);
//!
//! // Snapshots round-trip through the persisted JSON form.
//! let snapshot = WorldSnapshot::default();
//! let text = snapshot.to_json().unwrap();
//! let restored = WorldSnapshot::from_json(&text).unwrap();
//! assert_eq!(snapshot, restored);
//! ```

#![deny(unsafe_code)]

pub mod action;
pub mod agent;
pub mod kernel;
pub mod log;
pub mod math;
pub mod object;
pub mod scoreboard;
pub mod snapshot;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::action::{KernelAction, ShipCommand};
    pub use crate::agent::{ShipController, UpdateContext};
    pub use crate::kernel::{Kernel, KernelError};
    pub use crate::log::{LogEntry, LogKind};
    pub use crate::math::{start_positions, Vec2};
    pub use crate::object::{
        Asteroid, Collider, Explosion, GameObject, Laser, Rocket, Spaceship,
    };
    pub use crate::scoreboard::{project_scoreboard, ScoreboardEntry};
    pub use crate::snapshot::{GameStatus, WorldSnapshot, WorldSize};
}
