//! Onboarding navigation.
//!
//! The onboarding session is a one-way trip: Onboarding → Terms → Home.
//! There is no back stack and no restart; reaching Home ends the session and
//! the host throws the controller away.

use std::cell::{Cell, RefCell};
use std::fmt;

use tukdocs_core::{Signal, SubId, signal};

/// Which screen is showing. Fieldless projection of [`SessionState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Onboarding,
    Terms,
    Home,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Screen::Onboarding => "onboarding",
            Screen::Terms => "terms",
            Screen::Home => "home",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Onboarding,
    Terms { acknowledged: bool },
    /// Terminal. The session is over once this is reached.
    Home,
}

impl SessionState {
    pub fn screen(self) -> Screen {
        match self {
            SessionState::Onboarding => Screen::Onboarding,
            SessionState::Terms { .. } => Screen::Terms,
            SessionState::Home => Screen::Home,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TransitionDir {
    None,
    Push,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("action belongs to the {expected} screen but {actual} is showing")]
    WrongScreen { expected: Screen, actual: Screen },
    #[error("the terms have not been acknowledged")]
    PreconditionNotMet,
}

type FinishHandler = Box<dyn FnOnce()>;

pub struct OnboardingFlow {
    state: Signal<SessionState>,
    last_dir: Cell<TransitionDir>,
    on_finished: RefCell<Option<FinishHandler>>,
}

impl OnboardingFlow {
    /// Begins a session on the Onboarding screen.
    pub fn start() -> Self {
        log::debug!("onboarding session started");
        Self {
            state: signal(SessionState::Onboarding),
            last_dir: Cell::new(TransitionDir::None),
            on_finished: RefCell::new(None),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn screen(&self) -> Screen {
        self.state().screen()
    }

    /// The acknowledgement flag; `false` anywhere but Terms.
    pub fn acknowledged(&self) -> bool {
        matches!(self.state(), SessionState::Terms { acknowledged: true })
    }

    pub fn is_finished(&self) -> bool {
        self.state() == SessionState::Home
    }

    pub fn last_transition(&self) -> TransitionDir {
        self.last_dir.get()
    }

    /// Registers the host callback run when the session reaches Home.
    /// Only one handler is kept.
    pub fn on_finished(&self, f: impl FnOnce() + 'static) {
        *self.on_finished.borrow_mut() = Some(Box::new(f));
    }

    /// Observe every state change.
    pub fn subscribe(&self, f: impl Fn(&SessionState) + 'static) -> SubId {
        self.state.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.state.unsubscribe(id)
    }

    /// "Get Started": Onboarding → Terms.
    pub fn advance_from_onboarding(&self) -> Result<(), FlowError> {
        self.expect(Screen::Onboarding)?;
        self.push(SessionState::Terms {
            acknowledged: false,
        });
        Ok(())
    }

    pub fn set_acknowledged(&self, value: bool) -> Result<(), FlowError> {
        self.expect(Screen::Terms)?;
        if self.acknowledged() != value {
            log::debug!("terms acknowledged: {value}");
            self.state.set(SessionState::Terms {
                acknowledged: value,
            });
        }
        Ok(())
    }

    /// "Agree & Continue": Terms → Home, ending the session.
    pub fn advance_from_terms(&self) -> Result<(), FlowError> {
        self.expect(Screen::Terms)?;
        if !self.acknowledged() {
            return Err(FlowError::PreconditionNotMet);
        }
        self.push(SessionState::Home);
        log::info!("onboarding finished");

        let handler = self.on_finished.borrow_mut().take();
        match handler {
            Some(f) => f(),
            None => log::warn!("onboarding finished with no host handler registered"),
        }
        Ok(())
    }

    fn expect(&self, expected: Screen) -> Result<(), FlowError> {
        let actual = self.screen();
        if actual == expected {
            Ok(())
        } else {
            log::debug!("ignored {expected} action while on {actual}");
            Err(FlowError::WrongScreen { expected, actual })
        }
    }

    fn push(&self, next: SessionState) {
        log::debug!("navigate {} -> {}", self.screen(), next.screen());
        self.last_dir.set(TransitionDir::Push);
        self.state.set(next);
    }
}
