//! # State, views and timers
//!
//! TukDocs screens are plain functions that return a [`View`] tree. The core
//! keeps that model small:
//!
//! - `Signal<T>`: cloneable, observable value.
//! - `View`: declarative node with a kind, a `Modifier` and optional
//!   `Semantics`. Hosts walk it to draw and to find actionable nodes.
//! - `Timers` / `Scheduler`: one-shot callbacks pumped by the host once per
//!   frame.
//! - `SplashController`: owns the startup "keep splash on screen" flag.
//!
//! ## Signals
//!
//! ```rust
//! use tukdocs_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Subscribers run after every write and can be removed again:
//!
//! ```rust
//! use std::{cell::Cell, rc::Rc};
//! use tukdocs_core::*;
//!
//! let seen = Rc::new(Cell::new(0));
//! let s = signal(false);
//! let id = s.subscribe({
//!     let seen = seen.clone();
//!     move |_| seen.set(seen.get() + 1)
//! });
//! s.set(true);
//! s.unsubscribe(id);
//! s.set(false);
//! assert_eq!(seen.get(), 1);
//! ```
//!
//! ## Timers
//!
//! Timers never run on their own. Tests drive them with a [`ManualClock`]:
//!
//! ```rust
//! use std::sync::Arc;
//! use tukdocs_core::*;
//! use web_time::Duration;
//!
//! let clock = Arc::new(ManualClock::new());
//! let mut timers = Timers::new(clock.clone());
//! let splash = SplashController::install(&mut timers, Duration::from_millis(1000));
//!
//! assert!(splash.keep_on_screen());
//! clock.advance(Duration::from_millis(1000));
//! timers.pump();
//! assert!(!splash.keep_on_screen());
//! ```

pub mod clock;
pub mod color;
pub mod modifier;
pub mod runtime;
pub mod semantics;
pub mod signal;
pub mod splash;
pub mod tests;
pub mod timer;
pub mod view;

pub use clock::*;
pub use color::*;
pub use modifier::*;
pub use runtime::*;
pub use semantics::*;
pub use signal::*;
pub use splash::*;
pub use timer::*;
pub use view::*;
