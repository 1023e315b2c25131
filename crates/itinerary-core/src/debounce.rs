//! Debounced Tasks
//!
//! Coalesces bursts of input into one delayed task. Each `schedule` cancels
//! the pending timer and starts a new one. `flush` is the blur override: it
//! stops the timer and runs the waiting task right away.

use std::cell::RefCell;
use std::rc::Rc;

/// Handle to one scheduled timer
pub trait TimerHandle {
    /// Stop the timer; a no-op if it already fired
    fn cancel(self);
}

/// Something that can run a task after a delay (browser timeout, test clock)
pub trait Scheduler {
    type Handle: TimerHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

type Slot = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
    task: Slot,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
            task: Rc::new(RefCell::new(None)),
        }
    }

    /// Restart the window; only the most recent task will run
    pub fn schedule<F>(&mut self, task: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();

        // Fresh slot per timer so a stale callback can never take a newer task
        let boxed: Box<dyn FnOnce()> = Box::new(task);
        let slot: Slot = Rc::new(RefCell::new(Some(boxed)));
        self.task = slot.clone();
        let handle = self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || {
                let task = slot.borrow_mut().take();
                if let Some(task) = task {
                    task();
                }
            }),
        );
        self.pending = Some(handle);
    }

    /// Drop the pending task without running it. Returns true if one was waiting.
    pub fn cancel(&mut self) -> bool {
        self.stop_timer();
        self.task.borrow_mut().take().is_some()
    }

    /// Stop the timer and run the pending task now.
    ///
    /// Returns false when nothing was waiting. The task runs at most once:
    /// the timer it was scheduled on will find its slot empty.
    pub fn flush(&mut self) -> bool {
        self.stop_timer();
        let task = self.task.borrow_mut().take();
        match task {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    fn stop_timer(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    type Queue = Rc<RefCell<Vec<(u64, Option<Box<dyn FnOnce()>>)>>>;

    /// Collects tasks; `fire_all` runs whatever was not cancelled
    #[derive(Clone, Default)]
    struct ManualScheduler {
        queue: Queue,
        next_id: Rc<Cell<u64>>,
    }

    struct ManualHandle {
        id: u64,
        queue: Queue,
    }

    impl TimerHandle for ManualHandle {
        fn cancel(self) {
            for (id, task) in self.queue.borrow_mut().iter_mut() {
                if *id == self.id {
                    task.take();
                }
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, _delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().push((id, Some(task)));
            ManualHandle {
                id,
                queue: self.queue.clone(),
            }
        }
    }

    impl ManualScheduler {
        fn fire_all(&self) {
            let tasks: Vec<_> = self.queue.borrow_mut().drain(..).collect();
            for (_, task) in tasks {
                if let Some(task) = task {
                    task();
                }
            }
        }
    }

    #[test]
    fn test_only_last_task_runs() {
        let scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 500);
        let runs = Rc::new(RefCell::new(Vec::new()));

        for n in 0..3 {
            let runs = runs.clone();
            debouncer.schedule(move || runs.borrow_mut().push(n));
        }

        scheduler.fire_all();
        assert_eq!(*runs.borrow(), vec![2]);
        assert!(!debouncer.cancel());
    }

    #[test]
    fn test_cancel_reports_pending() {
        let scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 500);
        let ran = Rc::new(Cell::new(false));

        assert!(!debouncer.cancel());

        let flag = ran.clone();
        debouncer.schedule(move || flag.set(true));
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());

        scheduler.fire_all();
        assert!(!ran.get());
    }

    #[test]
    fn test_fired_task_is_not_pending() {
        let scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 500);
        let count = Rc::new(Cell::new(0));

        let c = count.clone();
        debouncer.schedule(move || c.set(c.get() + 1));
        scheduler.fire_all();

        assert!(!debouncer.cancel());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_flush_runs_pending_task_once() {
        let scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 500);
        let count = Rc::new(Cell::new(0));

        let c = count.clone();
        debouncer.schedule(move || c.set(c.get() + 1));
        assert!(debouncer.flush());
        assert_eq!(count.get(), 1);

        scheduler.fire_all();
        assert_eq!(count.get(), 1);
        assert!(!debouncer.flush());
    }

    #[test]
    fn test_flush_ignores_timer_that_already_fired() {
        let scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 500);
        let count = Rc::new(Cell::new(0));

        let c = count.clone();
        debouncer.schedule(move || c.set(c.get() + 1));
        scheduler.fire_all();

        assert!(!debouncer.flush());
        assert_eq!(count.get(), 1);
    }
}
