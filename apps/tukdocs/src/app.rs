use std::rc::Rc;

use tukdocs_documents::{DocumentPicker, Documents};
use tukdocs_navigation::{OnboardingFlow, SessionState};
use tukdocs_ui::*;
use web_time::Duration;

use crate::config::AppConfig;
use crate::pages;
use crate::pages::home::HomeState;

/// Which part of the app owns the screen once the splash is gone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Onboarding,
    Home,
}

/// Root of the app. The host calls [`App::compose`] once per frame.
///
/// The onboarding controller lives until its session ends; the next frame
/// drops it and Home takes over for the rest of the run.
pub struct App {
    splash_delay: Duration,
    theme: Theme,
    splash: Option<SplashController>,
    flow: Option<Rc<OnboardingFlow>>,
    stage: Signal<Stage>,
    home: HomeState,
    terms_date: String,
}

impl App {
    pub fn new(
        config: &AppConfig,
        documents: Documents,
        picker: impl DocumentPicker + 'static,
    ) -> Self {
        let stage = signal(Stage::Onboarding);
        let flow = Rc::new(OnboardingFlow::start());
        flow.subscribe(|s| log::debug!("session state: {s:?}"));
        flow.on_finished({
            let stage = stage.clone();
            move || stage.set(Stage::Home)
        });

        Self {
            splash_delay: config.splash_delay(),
            theme: config.theme(),
            splash: None,
            flow: Some(flow),
            stage,
            home: HomeState::new(documents, picker),
            terms_date: chrono::Local::now().date_naive().to_string(),
        }
    }

    /// Overrides the "Last updated" date on the Terms screen.
    pub fn with_terms_date(mut self, date: impl Into<String>) -> Self {
        self.terms_date = date.into();
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage.get()
    }

    /// The onboarding controller, while the session is still running.
    pub fn flow(&self) -> Option<&Rc<OnboardingFlow>> {
        self.flow.as_ref()
    }

    pub fn home(&self) -> &HomeState {
        &self.home
    }

    /// True until the splash timer has fired. Also true before the first
    /// frame, when the timer is not installed yet.
    pub fn showing_splash(&self) -> bool {
        self.splash.as_ref().is_none_or(|s| s.keep_on_screen())
    }

    pub fn compose(&mut self, sched: &mut Scheduler) -> View {
        if self.splash.is_none() {
            log::info!("showing splash for {:?}", self.splash_delay);
            let splash = SplashController::install(&mut sched.timers, self.splash_delay);
            splash.on_dismissed(|| log::info!("launch complete"));
            self.splash = Some(splash);
        }

        if self.stage.get() == Stage::Home && self.flow.take().is_some() {
            log::info!("onboarding session ended, entering home");
        }

        with_theme(self.theme, || {
            let body = if self.showing_splash() {
                pages::splash::screen()
            } else {
                self.screen()
            };
            Surface(Modifier::new().fill_max_size().background(theme().background), body)
        })
    }

    fn screen(&self) -> View {
        let Some(flow) = &self.flow else {
            return pages::home::screen(&self.home);
        };
        match flow.state() {
            SessionState::Onboarding => pages::onboarding::screen(flow),
            SessionState::Terms { acknowledged } => {
                pages::terms::screen(flow, acknowledged, &self.terms_date)
            }
            SessionState::Home => pages::home::screen(&self.home),
        }
    }
}
