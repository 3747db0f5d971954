//! One-shot timers driven by the platform loop.
//!
//! Nothing here spawns threads: the host calls [`Timers::pump`] once per
//! frame and sleeps until [`Timers::next_deadline`] when it has nothing else
//! to do.

use std::sync::Arc;

use slotmap::{SlotMap, new_key_type};
use web_time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};

new_key_type! {
    pub struct TimerKey;
}

struct Pending {
    deadline: Instant,
    seq: u64,
    fire: Box<dyn FnOnce()>,
}

pub struct Timers {
    clock: Arc<dyn Clock>,
    pending: SlotMap<TimerKey, Pending>,
    next_seq: u64,
}

impl Timers {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            pending: SlotMap::with_key(),
            next_seq: 0,
        }
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Schedule `f` to run once, `delay` from now.
    pub fn after(&mut self, delay: Duration, f: impl FnOnce() + 'static) -> TimerKey {
        let seq = self.next_seq;
        self.next_seq += 1;
        let deadline = self.clock.now() + delay;
        log::trace!("timer #{seq} scheduled in {delay:?}");
        self.pending.insert(Pending {
            deadline,
            seq,
            fire: Box::new(f),
        })
    }

    /// Fire every timer whose deadline has passed, earliest first.
    /// Returns how many fired.
    pub fn pump(&mut self) -> usize {
        let now = self.clock.now();
        let mut due: Vec<(Instant, u64, TimerKey)> = self
            .pending
            .iter()
            .filter(|(_, p)| p.deadline <= now)
            .map(|(k, p)| (p.deadline, p.seq, k))
            .collect();
        due.sort_unstable_by_key(|(deadline, seq, _)| (*deadline, *seq));

        let mut fired = 0;
        for (_, _, key) in due {
            if let Some(p) = self.pending.remove(key) {
                (p.fire)();
                fired += 1;
            }
        }
        fired
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|p| p.deadline).min()
    }

    /// Time left until the earliest timer, zero if one is already due.
    pub fn until_next(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.next_deadline()
            .map(|d| d.saturating_duration_since(now))
    }

    pub fn is_pending(&self, key: TimerKey) -> bool {
        self.pending.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
