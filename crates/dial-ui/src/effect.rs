//! Repeating side effects driven by the event loop.
//!
//! Effects never block: the runtime asks for [`Effects::next_deadline`],
//! sleeps until then, and calls [`Effects::poll`] on wake.

use std::time::{Duration, Instant};

use dial_engine::time::Ticker;

struct Repeating {
    ticker: Ticker,
    action: Box<dyn FnMut()>,
}

/// Set of repeating actions owned by one application.
#[derive(Default)]
pub struct Effects {
    jobs: Vec<Repeating>,
    cancelled: bool,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `action` every `period`, first at `start + period`.
    ///
    /// A zero period is rejected with a warning; it would wake the loop
    /// continuously.
    pub fn repeat_from(&mut self, start: Instant, period: Duration, action: impl FnMut() + 'static) {
        if self.cancelled {
            log::debug!("ignoring repeating effect registered after cancellation");
            return;
        }
        if period.is_zero() {
            log::warn!("ignoring repeating effect with a zero period");
            return;
        }
        self.jobs.push(Repeating {
            ticker: Ticker::starting_at(start, period),
            action: Box::new(action),
        });
    }

    /// Runs every effect whose deadline has passed. Returns how many fired.
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        for job in &mut self.jobs {
            if job.ticker.poll(now) {
                (job.action)();
                fired += 1;
            }
        }
        if fired > 0 {
            log::trace!("{fired} effect(s) fired");
        }
        fired
    }

    /// Earliest pending deadline, or `None` when nothing is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.jobs.iter().map(|j| j.ticker.deadline()).min()
    }

    /// Drops every effect. Nothing fires afterwards, including effects
    /// registered later.
    pub fn cancel_all(&mut self) {
        if !self.jobs.is_empty() {
            log::debug!("cancelling {} repeating effect(s)", self.jobs.len());
        }
        self.jobs.clear();
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
