//! Fixed-cadence playback of an engine run.
//!
//! The scheduler owns an [`MstEngine`] and doles out one step per elapsed
//! delay interval. It never sleeps: the host (a JS `requestAnimationFrame`
//! loop, a test, a thread) supplies the clock as `now_ms` and calls
//! [`AnimationScheduler::poll`] as often as it likes. Steps come out
//! strictly in engine order; none are skipped or batched.

use crate::engine::{MstEngine, MstStep, RunError};
use crate::model::{GraphStore, NodeId};

/// Delay between consecutive revealed steps, in milliseconds.
pub const STEP_DELAY_MS: f64 = 500.0;

/// Drives the engine one step at a time with a fixed inter-step delay.
///
/// Exactly one run may be active at a time; a second `start` while
/// [`is_running`](Self::is_running) rejects with [`RunError::RunInProgress`].
#[derive(Debug, Default)]
pub struct AnimationScheduler {
    engine: MstEngine,
    /// Host timestamp at which the next step becomes due. `None` while no
    /// run is in flight.
    next_step_at: Option<f64>,
}

impl AnimationScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a run. The first step is due immediately (the first `poll`
    /// at or after `now_ms` emits it); each later step 500ms after the
    /// previous one.
    pub fn start(&mut self, store: &GraphStore, start: NodeId, now_ms: f64) -> Result<(), RunError> {
        if self.is_running() {
            return Err(RunError::RunInProgress);
        }
        self.engine.start(store, start)?;
        self.next_step_at = Some(now_ms);
        Ok(())
    }

    /// Emit the next step if its delay has elapsed. At most one step per
    /// call, so a stalled host catches up at the configured cadence
    /// rather than dumping the backlog in one frame.
    pub fn poll(&mut self, now_ms: f64) -> Option<MstStep> {
        let due = self.next_step_at?;
        if now_ms < due {
            return None;
        }
        match self.engine.step() {
            Some(step) => {
                self.next_step_at = self
                    .engine
                    .is_running()
                    .then_some(now_ms + STEP_DELAY_MS);
                Some(step)
            }
            None => {
                self.next_step_at = None;
                None
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// Read-only MST view for rendering and the total-weight display.
    pub fn engine(&self) -> &MstEngine {
        &self.engine
    }
}
