//! Timer Commands
//!
//! `Scheduler` backed by `setTimeout` via gloo-timers.

use gloo_timers::callback::Timeout;
use itinerary_core::{Scheduler, TimerHandle};

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

pub struct TimeoutHandle(Timeout);

impl TimerHandle for TimeoutHandle {
    fn cancel(self) {
        let _ = self.0.cancel();
    }
}

impl Scheduler for TimeoutScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimeoutHandle {
        TimeoutHandle(Timeout::new(delay_ms, task))
    }
}

/// Fire-and-forget delayed callback (toast dismissal)
pub fn after_delay<F>(delay_ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(delay_ms, f).forget();
}
