//! The match orchestrator.
//!
//! [`SimulationEngine`] owns the kernel handle, the controller roster, and
//! the presentation state, and exposes the host-facing operations: start,
//! reset, pause, single-step, the per-frame update and render passes, and
//! state save/load. It never simulates anything itself -- physics, damage,
//! and scoring stay behind the [`Kernel`] trait -- and it never lets a
//! controller touch the kernel directly.
//!
//! # Failure containment
//!
//! The update and render passes run on every frame; a fault in one of them
//! must cost at most that frame. Kernel and serialization errors inside a
//! pass are caught at the pass boundary and logged. A panicking controller
//! is caught per agent, logged, and skipped for the tick, so one broken bot
//! cannot take the match down with it.

use std::f64::consts::TAU;
use std::panic::{catch_unwind, AssertUnwindSafe};

use astrofray_core::action::KernelAction;
use astrofray_core::agent::{ShipController, UpdateContext};
use astrofray_core::kernel::{Kernel, KernelError};
use astrofray_core::log::LogEntry;
use astrofray_core::math::{start_positions, Vec2};
use astrofray_core::scoreboard::{project_scoreboard, ScoreboardEntry};
use astrofray_core::snapshot::{GameStatus, WorldSnapshot};
use astrofray_render::{draw_scene, OverlayOptions, RenderSurface, SceneAssets};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::bus::EventBus;
use crate::resolver::IdentityResolver;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors surfaced by host-facing engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A match needs at least two ships.
    #[error("a match needs at least two controllers, got {0}")]
    TooFewAgents(usize),

    #[error(transparent)]
    Kernel(#[from] KernelError),

    /// The snapshot could not be serialized for saving.
    #[error("failed to serialize world state: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

/// Arena extent and the seed for roster placement.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub width: f64,
    pub height: f64,
    /// Seeds start-position shuffling and spawn headings; same seed, same
    /// placements.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
            seed: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// SimulationEngine
// ---------------------------------------------------------------------------

/// Owner of the kernel handle, the controller roster, and the frame passes.
pub struct SimulationEngine {
    kernel: Box<dyn Kernel>,
    agents: Vec<Box<dyn ShipController>>,
    resolver: IdentityResolver,
    config: EngineConfig,
    assets: SceneAssets,
    snapshot: WorldSnapshot,
    start_positions: Vec<Vec2>,
    rng: Pcg64Mcg,
    elapsed_ms: f64,
    /// Log count already broadcast; growth past it triggers the next one.
    log_mark: usize,
    /// Host-toggled debug/info overlays, read by the render pass.
    pub overlays: OverlayOptions,
    /// Broadcasts the kernel lifecycle status on every transition and on
    /// log growth.
    pub on_status: EventBus<GameStatus>,
    /// Broadcasts the log, newest entry first.
    pub on_logs: EventBus<Vec<LogEntry>>,
    /// Broadcasts the projected scoreboard.
    pub on_scoreboard: EventBus<Vec<ScoreboardEntry>>,
}

impl SimulationEngine {
    /// Bind the roster to the kernel: one spawn slot per controller on the
    /// standard circle, each at a seeded-random heading.
    pub fn new(
        mut kernel: Box<dyn Kernel>,
        agents: Vec<Box<dyn ShipController>>,
        assets: SceneAssets,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        let mut rng = Pcg64Mcg::seed_from_u64(config.seed);
        let positions = start_positions(config.width, config.height, agents.len());

        for (agent, position) in agents.iter().zip(&positions) {
            let heading = rng.gen_range(0.0..TAU);
            kernel.add_spaceship(agent.name(), *position, heading);
        }

        let snapshot = kernel.state()?;
        Ok(Self {
            kernel,
            agents,
            resolver: IdentityResolver::new(),
            config,
            assets,
            snapshot,
            start_positions: positions,
            rng,
            elapsed_ms: 0.0,
            log_mark: 0,
            overlays: OverlayOptions::default(),
            on_status: EventBus::new(),
            on_logs: EventBus::new(),
            on_scoreboard: EventBus::new(),
        })
    }

    /// The most recently pulled world state.
    pub fn snapshot(&self) -> &WorldSnapshot {
        &self.snapshot
    }

    /// Wall-clock milliseconds accumulated across update passes.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Start the match. Requires at least two controllers. Broadcasts the
    /// new status, an empty log panel, and the scoreboard.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.agents.len() < 2 {
            return Err(EngineError::TooFewAgents(self.agents.len()));
        }

        self.kernel.start();
        self.snapshot = self.kernel.state()?;

        let Self {
            agents,
            resolver,
            snapshot,
            config,
            on_status,
            on_logs,
            on_scoreboard,
            ..
        } = self;
        for agent in agents.iter_mut() {
            match resolver.resolve(agent.name(), &snapshot.game_objects) {
                Ok(ship) => agent.on_start(ship, config.width, config.height),
                Err(error) => tracing::warn!(agent = agent.name(), %error, "skipping on_start"),
            }
        }

        on_status.broadcast(&snapshot.status);
        // Starting clears the log panel even when the kernel kept old entries,
        // for example across a pause/start resume.
        on_logs.broadcast(&Vec::new());
        on_scoreboard.broadcast(&project_scoreboard(&snapshot.game_objects));
        Ok(())
    }

    /// Start a fresh round: reshuffle the spawn circle, re-place every ship
    /// at a new seeded heading, reset and restart the kernel.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        self.elapsed_ms = 0.0;
        self.log_mark = 0;
        self.start_positions.shuffle(&mut self.rng);

        for (agent, position) in self.agents.iter().zip(&self.start_positions) {
            let rotation = self.rng.gen_range(0.0..TAU);
            self.kernel.action(
                agent.name(),
                KernelAction::SetStartPosition {
                    position: *position,
                    rotation,
                },
            )?;
        }

        self.kernel.reset();
        self.kernel.start();
        self.snapshot = self.kernel.state()?;
        // Reset is an epoch boundary: kernel ordering may have changed.
        self.resolver.invalidate();

        let Self {
            agents,
            resolver,
            snapshot,
            config,
            ..
        } = self;
        for agent in agents.iter_mut() {
            match resolver.resolve(agent.name(), &snapshot.game_objects) {
                Ok(ship) => agent.on_reset(ship, config.width, config.height),
                Err(error) => tracing::warn!(agent = agent.name(), %error, "skipping on_reset"),
            }
        }

        self.broadcast_all();
        Ok(())
    }

    /// Pause the kernel and broadcast the paused state.
    pub fn pause(&mut self) -> Result<(), EngineError> {
        self.kernel.pause();
        self.snapshot = self.kernel.state()?;
        self.broadcast_all();
        Ok(())
    }

    /// Advance exactly one update/render pass while paused.
    pub fn step(&mut self, delta_time_ms: f64, surface: &mut dyn RenderSurface) {
        self.on_update(delta_time_ms, true);
        self.on_render(surface, true);
    }

    // -----------------------------------------------------------------------
    // Frame passes
    // -----------------------------------------------------------------------

    /// One update pass: tick the kernel, pull the snapshot, ask every
    /// controller for commands, dispatch them. A no-op unless the match is
    /// running (or `forced`).
    pub fn on_update(&mut self, delta_time_ms: f64, forced: bool) {
        if self.snapshot.status != GameStatus::Running && !forced {
            return;
        }

        self.elapsed_ms += delta_time_ms;
        if let Err(error) = self.update_pass(delta_time_ms) {
            tracing::error!(%error, "update pass failed");
        }
    }

    fn update_pass(&mut self, delta_time_ms: f64) -> Result<(), EngineError> {
        self.kernel.tick(delta_time_ms);
        self.snapshot = self.kernel.state()?;

        let Self {
            kernel,
            agents,
            resolver,
            snapshot,
            ..
        } = self;

        for agent in agents.iter_mut() {
            let ship = match resolver.resolve(agent.name(), &snapshot.game_objects) {
                Ok(ship) => ship,
                Err(error) => {
                    tracing::warn!(agent = agent.name(), %error, "skipping controller this tick");
                    continue;
                }
            };

            let ctx = UpdateContext {
                delta_time_ms,
                ship,
                objects: &snapshot.game_objects,
            };
            let commands = match catch_unwind(AssertUnwindSafe(|| agent.on_update(&ctx))) {
                Ok(commands) => commands,
                Err(_) => {
                    tracing::error!(agent = agent.name(), "controller panicked; skipping tick");
                    continue;
                }
            };

            for command in commands {
                kernel.action(agent.name(), command.into())?;
            }
        }

        Ok(())
    }

    /// One render pass: broadcast state/log/scoreboard changes when the log
    /// grew, then draw the scene. A no-op unless the match is running (or
    /// `forced`).
    pub fn on_render(&mut self, surface: &mut dyn RenderSurface, forced: bool) {
        if self.snapshot.status != GameStatus::Running && !forced {
            return;
        }

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            if self.snapshot.logs.len() > self.log_mark {
                self.log_mark = self.snapshot.logs.len();
                self.broadcast_all();
            }

            draw_scene(
                surface,
                &self.assets,
                &self.snapshot,
                self.elapsed_ms,
                self.overlays,
                self.config.width,
                self.config.height,
            );
        }));
        if outcome.is_err() {
            tracing::error!("render pass panicked");
        }
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Serialize the current world to its persisted JSON form.
    pub fn save(&mut self) -> Result<String, EngineError> {
        self.snapshot = self.kernel.state()?;
        Ok(self.snapshot.to_json()?)
    }

    /// Replace the world with previously saved state. On malformed input
    /// the kernel rejects the state and nothing changes. A successful load
    /// is an epoch boundary: it forces one update and one render pass and
    /// re-broadcasts status, logs, and scoreboard, so controllers and
    /// subscribers both see the restored world immediately.
    pub fn load(
        &mut self,
        serialized: &str,
        surface: &mut dyn RenderSurface,
    ) -> Result<(), EngineError> {
        self.kernel.from_state(serialized)?;
        self.resolver.invalidate();
        self.snapshot = self.kernel.state()?;
        self.on_update(0.0, true);
        self.log_mark = self.snapshot.logs.len();
        self.broadcast_all();
        self.on_render(surface, true);
        Ok(())
    }

    fn broadcast_all(&mut self) {
        let Self {
            snapshot,
            on_status,
            on_logs,
            on_scoreboard,
            ..
        } = self;

        on_status.broadcast(&snapshot.status);
        let mut logs = snapshot.logs.clone();
        logs.reverse();
        on_logs.broadcast(&logs);
        on_scoreboard.broadcast(&project_scoreboard(&snapshot.game_objects));
    }
}

impl std::fmt::Debug for SimulationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationEngine")
            .field("agents", &self.agents.len())
            .field("status", &self.snapshot.status)
            .field("elapsed_ms", &self.elapsed_ms)
            .finish_non_exhaustive()
    }
}
