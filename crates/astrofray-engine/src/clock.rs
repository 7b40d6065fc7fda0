//! The frame clock: update every frame, render on an fps budget.
//!
//! The host owns the actual frame source (an animation-frame callback, a
//! timer, a test loop) and feeds each frame's timestamp to
//! [`FrameClock::frame`]. The clock derives the delta from the previous
//! timestamp, broadcasts it on the update channel every frame, and runs the
//! render channel on a countdown so rendering happens at roughly the
//! configured fps no matter how fast frames arrive.
//!
//! [`FrameClock::stop`] makes every later frame inert; shutdown is an
//! explicit engine operation rather than something inferred from the frame
//! source going quiet.

use crate::bus::EventBus;

// ---------------------------------------------------------------------------
// LoopConfig
// ---------------------------------------------------------------------------

/// Configuration for the frame clock.
#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    /// Render passes per second. Must be positive.
    pub fps: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self { fps: 60 }
    }
}

// ---------------------------------------------------------------------------
// FrameClock
// ---------------------------------------------------------------------------

/// What one frame amounted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSignal {
    /// Milliseconds since the previous frame (zero once stopped).
    pub delta_ms: f64,
    /// Whether this frame crossed the render budget.
    pub render_due: bool,
}

/// Timestamp-driven clock with separate update and render channels.
pub struct FrameClock {
    render_interval_ms: f64,
    render_timer_ms: f64,
    last_frame_ms: f64,
    stopped: bool,
    /// Broadcasts the frame delta, every frame.
    pub updates: EventBus<f64>,
    /// Broadcasts the frame delta, only on frames where a render is due.
    pub renders: EventBus<f64>,
}

impl FrameClock {
    /// Create a clock whose first delta is measured from `start_ms`.
    pub fn new(config: LoopConfig, start_ms: f64) -> Self {
        assert!(config.fps > 0, "fps must be positive");
        let render_interval_ms = 1000.0 / f64::from(config.fps);
        Self {
            render_interval_ms,
            render_timer_ms: render_interval_ms,
            last_frame_ms: start_ms,
            stopped: false,
            updates: EventBus::new(),
            renders: EventBus::new(),
        }
    }

    /// Account for one frame at `now_ms`: broadcast the delta on the update
    /// channel, and on the render channel too when the render budget has
    /// elapsed.
    pub fn frame(&mut self, now_ms: f64) -> FrameSignal {
        if self.stopped {
            return FrameSignal {
                delta_ms: 0.0,
                render_due: false,
            };
        }

        let delta_ms = now_ms - self.last_frame_ms;
        self.last_frame_ms = now_ms;
        self.render_timer_ms -= delta_ms;
        self.updates.broadcast(&delta_ms);

        let render_due = self.render_timer_ms <= 0.0;
        if render_due {
            self.renders.broadcast(&delta_ms);
            self.render_timer_ms = self.render_interval_ms;
        }

        FrameSignal {
            delta_ms,
            render_due,
        }
    }

    /// Make every later [`frame`](Self::frame) call inert.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
