//! Scoreboard projection.
//!
//! The scoreboard is derived, never kernel-owned: it is recomputed from the
//! spaceship objects of the current snapshot every time the broadcast layer
//! observes new logs.

use serde::{Deserialize, Serialize};

use crate::object::GameObject;

/// One spaceship's standing, projected from the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreboardEntry {
    pub id: i64,
    pub name: String,
    pub score: i64,
    pub kills: u32,
    pub destroyed: bool,
}

/// Project the scoreboard from a snapshot's object list.
///
/// Ordering: ships still in play come before destroyed ships, and within
/// each group higher score comes first.
pub fn project_scoreboard(objects: &[GameObject]) -> Vec<ScoreboardEntry> {
    let mut entries: Vec<ScoreboardEntry> = objects
        .iter()
        .filter_map(GameObject::as_spaceship)
        .map(|ship| ScoreboardEntry {
            id: ship.id,
            name: ship.name.clone(),
            score: ship.score,
            kills: ship.kills,
            destroyed: ship.destroyed,
        })
        .collect();

    entries.sort_by(|a, b| {
        a.destroyed
            .cmp(&b.destroyed)
            .then_with(|| b.score.cmp(&a.score))
    });
    entries
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
