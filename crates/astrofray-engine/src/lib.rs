//! Astrofray Engine -- the client-side orchestrator for a kernel-backed
//! space-combat match.
//!
//! The engine sits between three parties and keeps them decoupled:
//!
//! - the **kernel** (behind [`Kernel`](astrofray_core::kernel::Kernel)),
//!   which owns all simulation authority;
//! - the **controllers** (behind
//!   [`ShipController`](astrofray_core::agent::ShipController)), which only
//!   ever see read-only snapshots and answer with commands;
//! - the **host**, which feeds frame timestamps to the [`FrameClock`] and
//!   listens on the engine's broadcast channels.
//!
//! Everything runs single-threaded and synchronous: one update pass per
//! frame, one render pass per fps budget, no locks, no async. Faults are
//! contained per pass (and per controller), never fatal to the loop.
//!
//! ```
//! use astrofray_engine::prelude::*;
//!
//! let mut clock = FrameClock::new(LoopConfig { fps: 30 }, 0.0);
//! let signal = clock.frame(16.0);
//! assert_eq!(signal.delta_ms, 16.0);
//! ```

#![deny(unsafe_code)]

pub mod bus;
pub mod clock;
pub mod engine;
pub mod resolver;

pub use bus::{EventBus, SubscriberId};
pub use clock::{FrameClock, FrameSignal, LoopConfig};
pub use engine::{EngineConfig, EngineError, SimulationEngine};
pub use resolver::{IdentityResolver, ResolveError};

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for hosts embedding the engine.
pub mod prelude {
    pub use astrofray_core::prelude::*;
    pub use astrofray_render::{OverlayOptions, RenderSurface, SceneAssets, SpriteAtlas};

    pub use crate::bus::{EventBus, SubscriberId};
    pub use crate::clock::{FrameClock, FrameSignal, LoopConfig};
    pub use crate::engine::{EngineConfig, EngineError, SimulationEngine};
    pub use crate::resolver::{IdentityResolver, ResolveError};
}
