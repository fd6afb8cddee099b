//! Cancellable deferred delivery of computed clicks.
//!
//! Decisions are computed synchronously at the top of a round; the simulated
//! click must *arrive* only after the agent's modeled response time. This is
//! the single wall-clock touchpoint of the crate. The [`Scheduler`] trait
//! keeps the engine independent of the host's timer mechanism — production
//! uses [`ThreadScheduler`], tests drive a virtual scheduler by hand.
//!
//! Cancellation is checked at dispatch time, not schedule time: a token
//! cancelled after the delay has elapsed but before the callback was
//! dispatched still suppresses the callback. That closes the race where a
//! round ends milliseconds before a pending click fires.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::debug;

use crate::decision::ClickDecision;

/// Handle for aborting an in-flight delivery.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the pending callback. Idempotent; cancelling an already
    /// dispatched delivery is a no-op.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Host timer abstraction: run `callback` once after `delay`, unless the
/// returned token is cancelled first.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce() + Send>) -> CancelToken;
}

/// Timer backed by one spawned thread per delivery.
///
/// A round schedules at most one delivery per AI opponent, each bounded by
/// the 15-second response ceiling.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadScheduler;

impl Scheduler for ThreadScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce() + Send>) -> CancelToken {
        let token = CancelToken::new();
        let handle = token.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            // Dispatch-time check, after the sleep.
            if handle.is_cancelled() {
                debug!("delivery cancelled after {delay:?}");
                return;
            }
            callback();
        });
        token
    }
}

/// Arrange for `callback(agent_id, decision)` to fire once the decision's
/// response time has elapsed. Returns the cancellation handle for the
/// delivery.
pub fn schedule_delivery<S, F>(
    scheduler: &S,
    agent_id: String,
    decision: ClickDecision,
    callback: F,
) -> CancelToken
where
    S: Scheduler,
    F: FnOnce(String, ClickDecision) + Send + 'static,
{
    let delay = Duration::from_secs_f64(decision.response_secs);
    scheduler.schedule(delay, Box::new(move || callback(agent_id, decision)))
}
