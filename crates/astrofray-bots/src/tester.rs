//! Fixed-action controllers for exercising a single kernel subsystem.
//!
//! These don't fight; each one pins a single behavior (a constant thrust
//! setting, a weapon on permanent trigger) so kernel plumbing and the
//! engine's dispatch path can be observed in isolation.

use astrofray_core::action::ShipCommand;
use astrofray_core::agent::{ShipController, UpdateContext};
use astrofray_core::object::Spaceship;

/// Re-applies one fixed thrust setting whenever energy is full.
pub struct EngineTester {
    name: String,
    main: f64,
    left: f64,
    right: f64,
}

impl EngineTester {
    pub fn new(name: &str, main: f64, left: f64, right: f64) -> Self {
        Self {
            name: name.to_owned(),
            main,
            left,
            right,
        }
    }
}

impl ShipController for EngineTester {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_start(&mut self, _ship: &Spaceship, _width: f64, _height: f64) {}

    fn on_reset(&mut self, _ship: &Spaceship, _width: f64, _height: f64) {}

    fn on_update(&mut self, ctx: &UpdateContext<'_>) -> Vec<ShipCommand> {
        if ctx.ship.energy >= 100.0 {
            vec![ShipCommand::SetEngineThrust {
                main: self.main,
                left: self.left,
                right: self.right,
            }]
        } else {
            Vec::new()
        }
    }
}

/// Fires the laser every tick it is loaded and affordable.
pub struct LaserTester {
    name: String,
}

impl LaserTester {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }
}

impl ShipController for LaserTester {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_start(&mut self, _ship: &Spaceship, _width: f64, _height: f64) {}

    fn on_reset(&mut self, _ship: &Spaceship, _width: f64, _height: f64) {}

    fn on_update(&mut self, ctx: &UpdateContext<'_>) -> Vec<ShipCommand> {
        if ctx.ship.energy > 10.0 && ctx.ship.laser_reload_timer_sec == 0.0 {
            vec![ShipCommand::FireLaser]
        } else {
            Vec::new()
        }
    }
}

/// Fires a rocket every tick one is loaded and affordable.
pub struct RocketTester {
    name: String,
}

impl RocketTester {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }
}

impl ShipController for RocketTester {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_start(&mut self, _ship: &Spaceship, _width: f64, _height: f64) {}

    fn on_reset(&mut self, _ship: &Spaceship, _width: f64, _height: f64) {}

    fn on_update(&mut self, ctx: &UpdateContext<'_>) -> Vec<ShipCommand> {
        if ctx.ship.energy > 20.0 && ctx.ship.rocket_reload_timer_sec == 0.0 {
            vec![ShipCommand::FireRocket]
        } else {
            Vec::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
