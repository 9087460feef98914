//! Deferred startup gating.
//!
//! Effects must not size their surface before layout has settled: the first
//! frame after terminal setup can still report a stale area. The gate delays
//! initialization until two frame ticks have elapsed after the load signal,
//! as an explicit two-step countdown rather than chained callbacks.

/// Number of frame ticks to wait after the load signal.
const DEFER_FRAMES: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    /// Load signal not yet seen.
    Idle,
    /// Counting down frame ticks.
    Armed(u8),
    /// Initialization has been released.
    Ready,
}

/// Two-frame deferred initialization gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupGate {
    state: GateState,
}

impl Default for StartupGate {
    fn default() -> Self {
        Self::new()
    }
}

impl StartupGate {
    /// Create a gate that has not yet seen the load signal.
    pub fn new() -> Self {
        Self {
            state: GateState::Idle,
        }
    }

    /// Record the load signal. Arms the countdown exactly once; later load
    /// signals are ignored.
    pub fn on_load(&mut self) {
        if self.state == GateState::Idle {
            self.state = GateState::Armed(DEFER_FRAMES);
        }
    }

    /// Record a frame tick. Returns `true` exactly once, on the tick that
    /// exhausts the countdown.
    pub fn on_frame(&mut self) -> bool {
        match self.state {
            GateState::Armed(1) => {
                self.state = GateState::Ready;
                true
            }
            GateState::Armed(n) => {
                self.state = GateState::Armed(n - 1);
                false
            }
            GateState::Idle | GateState::Ready => false,
        }
    }

    /// True once the gate has released initialization.
    pub fn is_ready(&self) -> bool {
        self.state == GateState::Ready
    }
}
