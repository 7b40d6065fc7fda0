//! Name-to-snapshot-index resolution for controller ships.
//!
//! Controllers are registered by name, but every tick hands the engine a
//! brand-new object list. Kernel order is stable within an epoch (between
//! resets and state loads), so the resolver caches the index found on first
//! lookup and answers later ticks without rescanning. The engine calls
//! [`IdentityResolver::invalidate`] at every epoch boundary.

use std::collections::HashMap;

use astrofray_core::object::{GameObject, Spaceship};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from identity resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No enabled-or-not spaceship with this name exists in the snapshot.
    #[error("no spaceship named '{0}' in the current snapshot")]
    NotFound(String),
}

// ---------------------------------------------------------------------------
// IdentityResolver
// ---------------------------------------------------------------------------

/// Caching name-to-index lookup over a snapshot's object list.
#[derive(Debug, Default)]
pub struct IdentityResolver {
    cache: HashMap<String, usize>,
}

impl IdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `name` to its spaceship in `objects`. A cached index is
    /// trusted without a rescan as long as the slot still holds that ship;
    /// a first lookup (or a stale slot) scans once and caches.
    pub fn resolve<'a>(
        &mut self,
        name: &str,
        objects: &'a [GameObject],
    ) -> Result<&'a Spaceship, ResolveError> {
        if let Some(&index) = self.cache.get(name) {
            if let Some(ship) = objects.get(index).and_then(GameObject::as_spaceship) {
                if ship.name == name {
                    return Ok(ship);
                }
            }
        }

        let (index, ship) = objects
            .iter()
            .enumerate()
            .find_map(|(index, object)| {
                object
                    .as_spaceship()
                    .filter(|ship| ship.name == name)
                    .map(|ship| (index, ship))
            })
            .ok_or_else(|| ResolveError::NotFound(name.to_owned()))?;

        self.cache.insert(name.to_owned(), index);
        Ok(ship)
    }

    /// Drop every cached index. Required whenever kernel object ordering may
    /// have changed (reset, state load).
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use astrofray_core::math::Vec2;
    use astrofray_core::object::{Collider, EngineThrust};

    use super::*;

    fn ship(name: &str, id: i64) -> GameObject {
        GameObject::Spaceship(Spaceship {
            id,
            enabled: true,
            destroyed: false,
            name: name.to_owned(),
            start_position: Vec2::new(0.0, 0.0),
            position: Vec2::new(0.0, 0.0),
            rotation: 0.0,
            velocity: Vec2::new(0.0, 0.0),
            health: 100.0,
            energy: 100.0,
            engine: EngineThrust::default(),
            rockets: 10,
            kills: 0,
            score: 0,
            laser_reload_timer_sec: 0.0,
            rocket_reload_timer_sec: 0.0,
            collider: Collider::Circle {
                enabled: true,
                position: Vec2::new(0.0, 0.0),
                radius: 16.0,
            },
        })
    }

    fn asteroid(id: i64) -> GameObject {
        GameObject::Asteroid(astrofray_core::object::Asteroid {
            id,
            enabled: true,
            position: Vec2::new(5.0, 5.0),
            radius: 20.0,
            collider: Collider::Circle {
                enabled: true,
                position: Vec2::new(5.0, 5.0),
                radius: 20.0,
            },
        })
    }

    // -- 1. Lookup -------------------------------------------------------------

    #[test]
    fn first_lookup_scans_and_later_lookups_agree() {
        let objects = vec![asteroid(1), ship("Calypso", 2), ship("Nyx", 3)];
        let mut resolver = IdentityResolver::new();

        let first = resolver.resolve("Nyx", &objects).unwrap();
        assert_eq!(first.id, 3);
        let again = resolver.resolve("Nyx", &objects).unwrap();
        assert_eq!(again.id, 3);
    }

    #[test]
    fn cache_hits_do_not_rescan() {
        let mut objects = vec![asteroid(1), ship("Calypso", 2)];
        let mut resolver = IdentityResolver::new();
        assert_eq!(resolver.resolve("Calypso", &objects).unwrap().id, 2);

        // A second ship with the same name earlier in the list would win a
        // rescan; the cached index keeps answering.
        objects.insert(0, ship("Calypso", 99));
        objects.remove(1); // keep "Calypso" id=2 at its cached index 1
        assert_eq!(resolver.resolve("Calypso", &objects).unwrap().id, 2);
    }

    #[test]
    fn missing_name_is_an_error_carrying_the_name() {
        let objects = vec![asteroid(1)];
        let mut resolver = IdentityResolver::new();

        let err = resolver.resolve("Ghost", &objects).unwrap_err();
        assert!(matches!(&err, ResolveError::NotFound(name) if name == "Ghost"));
        assert!(err.to_string().contains("Ghost"));
    }

    #[test]
    fn a_miss_does_not_poison_the_cache() {
        let mut resolver = IdentityResolver::new();
        assert!(resolver.resolve("Late", &[]).is_err());

        // The ship shows up on a later tick; resolution recovers.
        let objects = vec![ship("Late", 4)];
        assert_eq!(resolver.resolve("Late", &objects).unwrap().id, 4);
    }

    // -- 2. Invalidation ------------------------------------------------------------

    #[test]
    fn invalidate_forces_a_fresh_scan() {
        let objects = vec![ship("Calypso", 2), ship("Nyx", 3)];
        let mut resolver = IdentityResolver::new();
        assert_eq!(resolver.resolve("Calypso", &objects).unwrap().id, 2);

        // Reset reorders the world.
        let reordered = vec![ship("Nyx", 3), ship("Calypso", 2)];
        resolver.invalidate();
        assert_eq!(resolver.resolve("Calypso", &reordered).unwrap().id, 2);
    }

    #[test]
    fn stale_slots_self_heal_within_an_epoch() {
        let objects = vec![ship("Calypso", 2)];
        let mut resolver = IdentityResolver::new();
        resolver.resolve("Calypso", &objects).unwrap();

        // The cached slot no longer holds the ship; the resolver rescans
        // instead of returning the wrong object.
        let shifted = vec![asteroid(1), ship("Calypso", 2)];
        assert_eq!(resolver.resolve("Calypso", &shifted).unwrap().id, 2);
    }
}
