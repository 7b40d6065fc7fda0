//! The stock aggressive bot.
//!
//! `Brawler` alternates between attack runs and recovery: it coasts while
//! energy is low, picks a random re-engagement threshold, then opens up with
//! a randomized thrust burst and whatever weapon is off cooldown. Rockets
//! are preferred; the laser is a fallback that waits out a short window
//! after each rocket attempt so the two never burst-fire together.
//!
//! All randomness comes from a per-instance seeded RNG, so a given seed
//! always produces the same fight and two instances never share state.

use astrofray_core::action::ShipCommand;
use astrofray_core::agent::{ShipController, UpdateContext};
use astrofray_core::object::Spaceship;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Milliseconds the laser fallback waits after a rocket attempt.
const LASER_HOLDOFF_MS: f64 = 500.0;

/// An energy-gated attack/recover strategy with randomized thrust bursts.
pub struct Brawler {
    name: String,
    rng: Pcg64Mcg,
    attacking: bool,
    /// Energy level at which the next attack run begins; infinity while one
    /// is already underway.
    thrust_energy_trigger: f64,
    last_rocket_fire_ms: f64,
}

impl Brawler {
    pub fn new(name: &str, seed: u64) -> Self {
        Self {
            name: name.to_owned(),
            rng: Pcg64Mcg::seed_from_u64(seed),
            attacking: true,
            thrust_energy_trigger: 100.0,
            last_rocket_fire_ms: 0.0,
        }
    }

    fn rearm(&mut self) {
        self.attacking = true;
        self.thrust_energy_trigger = 100.0;
        self.last_rocket_fire_ms = 0.0;
    }
}

impl ShipController for Brawler {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_start(&mut self, ship: &Spaceship, width: f64, height: f64) {
        self.on_reset(ship, width, height);
    }

    fn on_reset(&mut self, _ship: &Spaceship, _width: f64, _height: f64) {
        self.rearm();
    }

    fn on_update(&mut self, ctx: &UpdateContext<'_>) -> Vec<ShipCommand> {
        let ship = ctx.ship;
        let mut commands = Vec::new();

        if self.last_rocket_fire_ms > 0.0 {
            self.last_rocket_fire_ms = (self.last_rocket_fire_ms - ctx.delta_time_ms).max(0.0);
        }

        if ship.energy <= 10.0 {
            self.attacking = false;
            self.thrust_energy_trigger = 25.0 + self.rng.gen::<f64>() * 50.0;
        }

        if ship.energy >= self.thrust_energy_trigger {
            self.thrust_energy_trigger = f64::INFINITY;
            self.attacking = true;

            let main = 50.0 + self.rng.gen::<f64>() * 50.0;
            let mut left = 0.0;
            let mut right = 0.0;
            if self.rng.gen::<f64>() < 0.5 {
                left = 10.0 + self.rng.gen::<f64>() * 90.0;
            } else {
                right = 10.0 + self.rng.gen::<f64>() * 90.0;
            }
            commands.push(ShipCommand::SetEngineThrust { main, left, right });
        }

        if self.attacking
            && ship.energy > 20.0
            && ship.rocket_reload_timer_sec == 0.0
            && ship.rockets > 0
        {
            commands.push(ShipCommand::FireRocket);
            self.last_rocket_fire_ms = LASER_HOLDOFF_MS;
        } else if self.last_rocket_fire_ms <= 0.0
            && self.attacking
            && ship.energy > 10.0
            && ship.laser_reload_timer_sec == 0.0
        {
            commands.push(ShipCommand::FireLaser);
        }

        commands
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
