//! Startup splash.
//!
//! The splash stays on screen until a single scheduled callback clears the
//! "keep on screen" flag. The flag is owned here rather than living on the
//! activity, and exactly one observer hears about the dismissal.

use std::cell::RefCell;
use std::rc::Rc;

use web_time::Duration;

use crate::signal::{Signal, signal};
use crate::timer::{TimerKey, Timers};

pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_millis(1000);

type Observer = Box<dyn FnOnce()>;

pub struct SplashController {
    keep_on_screen: Signal<bool>,
    observer: Rc<RefCell<Option<Observer>>>,
    timer: TimerKey,
}

impl SplashController {
    /// Shows the splash and schedules its dismissal `delay` from now.
    pub fn install(timers: &mut Timers, delay: Duration) -> Self {
        let keep_on_screen = signal(true);
        let observer: Rc<RefCell<Option<Observer>>> = Rc::new(RefCell::new(None));

        let timer = timers.after(delay, {
            let keep_on_screen = keep_on_screen.clone();
            let observer = observer.clone();
            move || {
                keep_on_screen.set(false);
                log::debug!("splash dismissed");
                if let Some(f) = observer.borrow_mut().take() {
                    f();
                }
            }
        });

        Self {
            keep_on_screen,
            observer,
            timer,
        }
    }

    /// Whether the splash should still cover the first screen.
    pub fn keep_on_screen(&self) -> bool {
        self.keep_on_screen.get()
    }

    /// Registers the dismissal observer, replacing any earlier one.
    /// Runs immediately if the splash is already gone.
    pub fn on_dismissed(&self, f: impl FnOnce() + 'static) {
        if self.keep_on_screen() {
            *self.observer.borrow_mut() = Some(Box::new(f));
        } else {
            f();
        }
    }

    pub fn timer(&self) -> TimerKey {
        self.timer
    }
}
