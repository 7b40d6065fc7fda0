//! The controller contract every pluggable ship agent implements.
//!
//! The engine calls a controller at most once per update tick, never
//! concurrently with itself or any other controller, and hands it a
//! read-only view of the world. Mutating the view is impossible by
//! construction (shared references); the only way to influence the
//! simulation is the returned command list.
//!
//! Concrete controllers own their private state explicitly -- two instances
//! of the same strategy must not share anything, so a strategy can be
//! fielded multiple times in one match without cross-contamination.

use crate::action::ShipCommand;
use crate::object::{GameObject, Spaceship};

/// Read-only per-tick view handed to [`ShipController::on_update`].
#[derive(Debug, Clone, Copy)]
pub struct UpdateContext<'a> {
    /// Wall-clock milliseconds since the previous update.
    pub delta_time_ms: f64,
    /// The controller's own ship, resolved from the snapshot.
    pub ship: &'a Spaceship,
    /// Every object in the snapshot, in kernel order.
    pub objects: &'a [GameObject],
}

/// A pluggable spaceship controller.
pub trait ShipController {
    /// Stable name the controller's ship is registered under.
    fn name(&self) -> &str;

    /// Called once when the match starts.
    fn on_start(&mut self, ship: &Spaceship, width: f64, height: f64);

    /// Called after every world reset; controllers should drop any state
    /// derived from the previous round.
    fn on_reset(&mut self, ship: &Spaceship, width: f64, height: f64);

    /// Decide this tick's actions. Must be side-effect-free with respect to
    /// the simulation: the returned commands are the only output.
    fn on_update(&mut self, ctx: &UpdateContext<'_>) -> Vec<ShipCommand>;
}
