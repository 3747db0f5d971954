use std::sync::Arc;

use crate::View;
use crate::clock::{Clock, SystemClock};
use crate::timer::Timers;

/// Per-app runtime handed to the root composable on every frame.
pub struct Scheduler {
    pub timers: Timers,
    frame: u64,
    exit_requested: bool,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            timers: Timers::new(clock),
            frame: 0,
            exit_requested: false,
        }
    }

    /// Fires due timers, then composes one frame.
    pub fn compose<F>(&mut self, build_root: &mut F) -> View
    where
        F: FnMut(&mut Scheduler) -> View,
    {
        let fired = self.timers.pump();
        if fired > 0 {
            log::trace!("frame {}: {fired} timer(s) fired", self.frame);
        }
        self.frame += 1;
        build_root(self)
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Ask the host to stop after the current frame.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
