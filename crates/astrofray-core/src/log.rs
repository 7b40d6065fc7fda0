//! Kernel combat-log entries.
//!
//! Logs are append-only per run: each snapshot carries the full list so far,
//! and consumers detect "new since last observed" purely by comparing
//! counts -- never by entry identity. The wire shape is
//! `{ id, logType, message, time, meta }` with `meta` keyed by `logType`.

use serde::{Deserialize, Serialize};

use crate::snapshot::GameStatus;

// ---------------------------------------------------------------------------
// LogKind
// ---------------------------------------------------------------------------

/// Variant-specific log metadata, adjacently tagged as
/// `{ "logType": ..., "meta": {...} }` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "logType", content = "meta", rename_all = "snake_case")]
pub enum LogKind {
    Damage {
        who: String,
        whom: String,
        damage: String,
        #[serde(rename = "damageType")]
        damage_type: String,
    },
    Kill {
        who: String,
        whom: String,
    },
    Collision {
        who: String,
        with: String,
    },
    GameState {
        status: GameStatus,
    },
}

// ---------------------------------------------------------------------------
// LogEntry
// ---------------------------------------------------------------------------

/// One entry in the kernel's combat log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub message: String,
    /// Kernel-formatted timestamp (`YYYY-MM-DD HH:MM:SS`), display-only.
    pub time: String,
    #[serde(flatten)]
    pub kind: LogKind,
}
