//! Call surface of the external simulation kernel.
//!
//! The kernel owns physics, collision, damage, scoring, and projectile
//! lifecycle. This crate consumes it exclusively through [`Kernel`]; all
//! calls are synchronous from the orchestrator's point of view, and no two
//! calls are ever in flight at once (the whole client is single-threaded
//! and cooperative).
//!
//! Constructing the kernel (its `init(width, height, seed)` entry point) is
//! a host concern: by the time the engine sees a handle, the arena already
//! exists.

use crate::action::KernelAction;
use crate::math::Vec2;
use crate::snapshot::WorldSnapshot;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors surfaced by kernel calls.
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    /// The kernel handle is gone or was never initialized.
    #[error("simulation kernel is unavailable: {0}")]
    Unavailable(String),

    /// The kernel rejected a serialized world state (malformed or
    /// incompatible save file).
    #[error("kernel rejected world state: {0}")]
    InvalidState(String),

    /// The kernel rejected an action for the named ship.
    #[error("kernel rejected action for '{ship}': {reason}")]
    ActionRejected { ship: String, reason: String },
}

// ---------------------------------------------------------------------------
// Kernel
// ---------------------------------------------------------------------------

/// The fixed, versioned-externally call surface of the simulation kernel.
pub trait Kernel {
    /// Begin (or resume after reset) the simulation.
    fn start(&mut self);

    /// Pause the simulation; `tick` becomes a no-op kernel-side.
    fn pause(&mut self);

    /// Reset the world to a fresh round. Object ordering guarantees do not
    /// survive a reset -- callers must invalidate any index caches.
    fn reset(&mut self);

    /// Advance the simulation by `delta_time_ms` of wall-clock time.
    fn tick(&mut self, delta_time_ms: f64);

    /// The current world snapshot, produced wholesale.
    fn state(&mut self) -> Result<WorldSnapshot, KernelError>;

    /// Replace the kernel's world with a previously serialized snapshot.
    fn from_state(&mut self, serialized: &str) -> Result<(), KernelError>;

    /// Register a controllable ship before the first start. At least two
    /// are required for a match.
    fn add_spaceship(&mut self, name: &str, position: Vec2, rotation: f64);

    /// Dispatch one action for the named ship.
    fn action(&mut self, ship: &str, action: KernelAction) -> Result<(), KernelError>;
}
