//! Astrofray Bots -- stock ship controllers.
//!
//! Two families live here: [`Brawler`], the default fighting bot used to
//! fill out a match, and the single-purpose testers ([`EngineTester`],
//! [`LaserTester`], [`RocketTester`]) that pin one behavior each for
//! exercising the kernel and the engine's dispatch path.
//!
//! [`standard_roster`] builds the out-of-the-box five-brawler lineup:
//!
//! ```
//! let roster = astrofray_bots::standard_roster(1234);
//! assert_eq!(roster.len(), 5);
//! ```

#![deny(unsafe_code)]

pub mod brawler;
pub mod tester;

pub use brawler::Brawler;
pub use tester::{EngineTester, LaserTester, RocketTester};

use astrofray_core::agent::ShipController;

/// Five independently seeded brawlers under the stock names, derived
/// deterministically from `seed`.
pub fn standard_roster(seed: u64) -> Vec<Box<dyn ShipController>> {
    const NAMES: [&str; 5] = [
        "Ultramar",
        "Dark Angel",
        "Blood Angel",
        "Space Wolf",
        "Imperial Fist",
    ];

    NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| {
            Box::new(Brawler::new(name, seed.wrapping_add(index as u64))) as Box<dyn ShipController>
        })
        .collect()
}
