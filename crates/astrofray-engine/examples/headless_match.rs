//! Headless match demo: five stock brawlers on a scripted kernel, driven by
//! synthetic frame timestamps, with every draw call captured in a
//! [`DrawList`] instead of hitting a real canvas.
//!
//! Run with:
//!
//! ```sh
//! RUST_LOG=info cargo run --example headless_match
//! ```
//!
//! The kernel here is a bookkeeping stand-in, not a simulation: it applies
//! thrust settings verbatim, decays reload timers, regenerates energy, and
//! emits a status log every simulated second so the broadcast path has
//! something to report.

use std::f64::consts::TAU;

use astrofray_core::action::KernelAction;
use astrofray_core::kernel::{Kernel, KernelError};
use astrofray_core::log::{LogEntry, LogKind};
use astrofray_core::math::Vec2;
use astrofray_core::object::{Collider, EngineThrust, GameObject, Spaceship};
use astrofray_core::snapshot::{GameStatus, WorldSize, WorldSnapshot};
use astrofray_engine::{EngineConfig, FrameClock, LoopConfig, SimulationEngine};
use astrofray_render::{DrawList, SceneAssets, SpriteAtlas};

const ARENA: f64 = 1000.0;

// ---------------------------------------------------------------------------
// Demo kernel
// ---------------------------------------------------------------------------

#[derive(Default)]
struct DemoKernel {
    world: WorldSnapshot,
    elapsed_sec: f64,
    last_log_sec: f64,
    next_id: i64,
    next_log_id: i64,
}

impl DemoKernel {
    fn new(width: f64, height: f64, seed: i64) -> Self {
        Self {
            world: WorldSnapshot {
                seed,
                size: WorldSize { width, height },
                ..WorldSnapshot::default()
            },
            ..Self::default()
        }
    }
}

impl Kernel for DemoKernel {
    fn start(&mut self) {
        self.world.status = GameStatus::Running;
    }

    fn pause(&mut self) {
        self.world.status = GameStatus::Paused;
    }

    fn reset(&mut self) {
        self.world.logs.clear();
        self.elapsed_sec = 0.0;
        self.last_log_sec = 0.0;
        for object in &mut self.world.game_objects {
            if let GameObject::Spaceship(ship) = object {
                ship.position = ship.start_position;
                ship.health = 100.0;
                ship.energy = 100.0;
                ship.rockets = 10;
            }
        }
    }

    fn tick(&mut self, delta_time_ms: f64) {
        if self.world.status != GameStatus::Running {
            return;
        }
        let dt = delta_time_ms / 1000.0;
        self.elapsed_sec += dt;

        for object in &mut self.world.game_objects {
            if let GameObject::Spaceship(ship) = object {
                // Thrust drifts the ship along its heading; everything else
                // is timer bookkeeping.
                let speed = ship.engine.main_thrust * 0.5;
                ship.velocity = Vec2::new(ship.rotation.cos(), ship.rotation.sin());
                ship.position.x =
                    (ship.position.x + ship.velocity.x * speed * dt).rem_euclid(ARENA);
                ship.position.y =
                    (ship.position.y + ship.velocity.y * speed * dt).rem_euclid(ARENA);
                ship.energy = (ship.energy + 5.0 * dt).min(100.0);
                ship.laser_reload_timer_sec = (ship.laser_reload_timer_sec - dt).max(0.0);
                ship.rocket_reload_timer_sec = (ship.rocket_reload_timer_sec - dt).max(0.0);
            }
        }

        if self.elapsed_sec - self.last_log_sec >= 1.0 {
            self.last_log_sec = self.elapsed_sec;
            self.next_log_id += 1;
            self.world.logs.push(LogEntry {
                id: self.next_log_id,
                message: format!("{:.0}s elapsed", self.elapsed_sec),
                time: String::new(),
                kind: LogKind::GameState {
                    status: self.world.status,
                },
            });
        }
    }

    fn state(&mut self) -> Result<WorldSnapshot, KernelError> {
        Ok(self.world.clone())
    }

    fn from_state(&mut self, serialized: &str) -> Result<(), KernelError> {
        self.world = WorldSnapshot::from_json(serialized)
            .map_err(|e| KernelError::InvalidState(e.to_string()))?;
        Ok(())
    }

    fn add_spaceship(&mut self, name: &str, position: Vec2, rotation: f64) {
        self.next_id += 1;
        self.world.game_objects.push(GameObject::Spaceship(Spaceship {
            id: self.next_id,
            enabled: true,
            destroyed: false,
            name: name.to_owned(),
            start_position: position,
            position,
            rotation,
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
                position,
                radius: 16.0,
            },
        }));
    }

    fn action(&mut self, ship_name: &str, action: KernelAction) -> Result<(), KernelError> {
        let ship = self
            .world
            .game_objects
            .iter_mut()
            .find_map(|object| match object {
                GameObject::Spaceship(ship) if ship.name == ship_name => Some(ship),
                _ => None,
            })
            .ok_or_else(|| KernelError::ActionRejected {
                ship: ship_name.to_owned(),
                reason: "no such ship".to_owned(),
            })?;

        match action {
            KernelAction::SetEngineThrust { main, left, right } => {
                ship.engine = EngineThrust {
                    main_thrust: main.clamp(0.0, 100.0),
                    left_thrust: left.clamp(0.0, 100.0),
                    right_thrust: right.clamp(0.0, 100.0),
                };
            }
            KernelAction::FireLaser => {
                ship.energy = (ship.energy - 5.0).max(0.0);
                ship.laser_reload_timer_sec = 0.25;
            }
            KernelAction::FireRocket => {
                if ship.rockets > 0 {
                    ship.rockets -= 1;
                    ship.energy = (ship.energy - 10.0).max(0.0);
                    ship.rocket_reload_timer_sec = 1.0;
                }
            }
            KernelAction::SetStartPosition { position, rotation } => {
                ship.start_position = position;
                ship.rotation = rotation % TAU;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Demo
// ---------------------------------------------------------------------------

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut atlas = SpriteAtlas::new();
    atlas.insert_sheet("main", 480, 480);
    atlas.insert_sheet("background_0", 240, 240);
    atlas.insert_sheet("background_1", 240, 240);
    atlas.insert_sheet("background_2", 240, 240);
    let assets = SceneAssets::standard(&atlas)?;

    let kernel = DemoKernel::new(ARENA, ARENA, 42);
    let mut engine = SimulationEngine::new(
        Box::new(kernel),
        astrofray_bots::standard_roster(42),
        assets,
        EngineConfig {
            width: ARENA,
            height: ARENA,
            seed: 42,
        },
    )?;

    engine.on_scoreboard.subscribe(|board| {
        println!("--- scoreboard ---");
        for entry in board {
            println!(
                "{:<16} score {:>5}  kills {}  {}",
                entry.name,
                entry.score,
                entry.kills,
                if entry.destroyed { "destroyed" } else { "alive" }
            );
        }
    });

    engine.start()?;

    // Five simulated seconds of 16 ms frames, rendering at 30 fps.
    let mut clock = FrameClock::new(LoopConfig { fps: 30 }, 0.0);
    let mut surface = DrawList::new();
    for frame in 1..=312_u32 {
        let signal = clock.frame(f64::from(frame) * 16.0);
        engine.on_update(signal.delta_ms, false);
        if signal.render_due {
            surface.ops.clear();
            engine.on_render(&mut surface, false);
        }
    }
    clock.stop();

    let saved = engine.save()?;
    println!(
        "match ran {:.1}s, last frame recorded {} draw ops, save file is {} bytes",
        engine.elapsed_ms() / 1000.0,
        surface.ops.len(),
        saved.len()
    );
    Ok(())
}
