//! The closed action vocabulary.
//!
//! [`ShipCommand`] is everything a controller may ask for; the engine never
//! validates energy or cooldown sufficiency -- that authority stays with the
//! kernel. [`KernelAction`] is the superset the orchestrator itself may
//! dispatch (it adds start-position placement, which controllers cannot
//! request).

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

// ---------------------------------------------------------------------------
// ShipCommand
// ---------------------------------------------------------------------------

/// An action returned by a controller's `on_update`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShipCommand {
    /// Set the three engine thrust magnitudes (each `0..=100`).
    SetEngineThrust { main: f64, left: f64, right: f64 },
    /// Fire the laser, if the kernel allows it.
    FireLaser,
    /// Fire a rocket, if the kernel allows it.
    FireRocket,
}

// ---------------------------------------------------------------------------
// KernelAction
// ---------------------------------------------------------------------------

/// An action the orchestrator dispatches to the kernel for a named ship.
///
/// Variants carry their full argument shape, so routing the thrust call's
/// three numeric arguments versus the no-argument fire calls is checked by
/// the compiler rather than by arity conventions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum KernelAction {
    SetEngineThrust { main: f64, left: f64, right: f64 },
    FireLaser,
    FireRocket,
    SetStartPosition { position: Vec2, rotation: f64 },
}

impl From<ShipCommand> for KernelAction {
    fn from(command: ShipCommand) -> Self {
        match command {
            ShipCommand::SetEngineThrust { main, left, right } => {
                KernelAction::SetEngineThrust { main, left, right }
            }
            ShipCommand::FireLaser => KernelAction::FireLaser,
            ShipCommand::FireRocket => KernelAction::FireRocket,
        }
    }
}
