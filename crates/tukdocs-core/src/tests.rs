#[cfg(test)]
mod tests {
    use crate::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::sync::Arc;
    use web_time::Duration;

    fn manual() -> (Arc<ManualClock>, Timers) {
        let clock = Arc::new(ManualClock::new());
        let timers = Timers::new(clock.clone());
        (clock, timers)
    }

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let called = Rc::new(RefCell::new(None));

        let called_clone = called.clone();
        sig.subscribe(move |v| {
            *called_clone.borrow_mut() = Some(*v);
        });

        sig.set(42);
        assert_eq!(*called.borrow(), Some(42));
    }

    #[test]
    fn test_signal_subscriber_can_read() {
        let sig = signal(String::from("a"));
        let seen = Rc::new(RefCell::new(String::new()));
        sig.subscribe({
            let sig = sig.clone();
            let seen = seen.clone();
            move |_| *seen.borrow_mut() = sig.get()
        });
        sig.set("b".into());
        assert_eq!(*seen.borrow(), "b");
    }

    #[test]
    fn test_subscriber_can_write_same_signal() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        sig.subscribe({
            let sig = sig.clone();
            let seen = seen.clone();
            move |v| {
                seen.borrow_mut().push(*v);
                if *v > 10 {
                    sig.set(10);
                }
            }
        });

        sig.set(42);
        assert_eq!(sig.get(), 10);
        assert_eq!(*seen.borrow(), vec![42, 10]);
    }

    #[test]
    fn test_unsubscribe() {
        let sig = signal(0);
        let hits = Rc::new(Cell::new(0));
        let id = sig.subscribe({
            let hits = hits.clone();
            move |_| hits.set(hits.get() + 1)
        });
        sig.set(1);
        assert!(sig.unsubscribe(id));
        assert!(!sig.unsubscribe(id));
        sig.set(2);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("nope"), Color::BLACK);
    }

    #[test]
    fn test_color_parse_hex_rejects_malformed() {
        assert_eq!(Color::parse_hex("2196F3"), Some(Color::BLUE));
        assert_eq!(Color::parse_hex("#2196G3"), None);
        assert_eq!(Color::parse_hex("#12345"), None);
        assert_eq!(Color::parse_hex("#FF5733A"), None);
        assert_eq!(Color::parse_hex("#ÿÿÿ"), None);
    }

    #[test]
    fn test_color_from_argb() {
        assert_eq!(Color::BLUE, Color(0x21, 0x96, 0xF3, 0xFF));
        assert_eq!(Color::RED, Color::from_hex("#F44336"));
        assert_eq!(Color::RED.to_string(), "#F44336");
        assert_eq!(Color::RED.faded(0.1).3, 26);
    }

    #[test]
    fn test_timers_fire_once_in_deadline_order() {
        let (clock, mut timers) = manual();
        let order = Rc::new(RefCell::new(Vec::new()));

        for (name, ms) in [("late", 300u64), ("early", 100), ("mid", 200)] {
            let order = order.clone();
            timers.after(Duration::from_millis(ms), move || {
                order.borrow_mut().push(name)
            });
        }
        assert_eq!(timers.len(), 3);
        assert_eq!(timers.pump(), 0);

        clock.advance(Duration::from_millis(250));
        assert_eq!(timers.pump(), 2);
        assert_eq!(*order.borrow(), vec!["early", "mid"]);

        clock.advance(Duration::from_millis(100));
        assert_eq!(timers.pump(), 1);
        assert_eq!(timers.pump(), 0);
        assert_eq!(*order.borrow(), vec!["early", "mid", "late"]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_timers_same_deadline_keep_insertion_order() {
        let (clock, mut timers) = manual();
        let order = Rc::new(RefCell::new(Vec::new()));
        for i in 0..4 {
            let order = order.clone();
            timers.after(Duration::from_millis(10), move || order.borrow_mut().push(i));
        }
        clock.advance(Duration::from_millis(10));
        timers.pump();
        assert_eq!(*order.borrow(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_next_deadline() {
        let (clock, mut timers) = manual();
        assert!(timers.next_deadline().is_none());
        let key = timers.after(Duration::from_millis(1000), || {});
        assert!(timers.is_pending(key));
        assert_eq!(timers.until_next(), Some(Duration::from_millis(1000)));

        clock.advance(Duration::from_millis(1500));
        assert_eq!(timers.until_next(), Some(Duration::ZERO));
        timers.pump();
        assert!(!timers.is_pending(key));
    }

    #[test]
    fn test_splash_dismisses_once_after_delay() {
        let (clock, mut timers) = manual();
        let splash = SplashController::install(&mut timers, DEFAULT_SPLASH_DELAY);
        let notified = Rc::new(Cell::new(0));
        splash.on_dismissed({
            let notified = notified.clone();
            move || notified.set(notified.get() + 1)
        });

        clock.advance(Duration::from_millis(999));
        timers.pump();
        assert!(splash.keep_on_screen());
        assert_eq!(notified.get(), 0);

        clock.advance(Duration::from_millis(1));
        timers.pump();
        assert!(!splash.keep_on_screen());
        assert_eq!(notified.get(), 1);

        clock.advance(Duration::from_secs(5));
        timers.pump();
        assert_eq!(notified.get(), 1);
        assert!(!timers.is_pending(splash.timer()));
    }

    #[test]
    fn test_splash_observer_after_dismissal_runs_immediately() {
        let (clock, mut timers) = manual();
        let splash = SplashController::install(&mut timers, Duration::from_millis(10));
        clock.advance(Duration::from_millis(10));
        timers.pump();

        let ran = Rc::new(Cell::new(false));
        splash.on_dismissed({
            let ran = ran.clone();
            move || ran.set(true)
        });
        assert!(ran.get());
    }

    #[test]
    fn test_scheduler_pumps_before_compose() {
        let clock = Arc::new(ManualClock::new());
        let mut sched = Scheduler::with_clock(clock.clone());
        let splash = SplashController::install(&mut sched.timers, Duration::from_millis(5));

        let mut root = |_: &mut Scheduler| {
            View::new(ViewKind::Text {
                text: (if splash.keep_on_screen() { "splash" } else { "content" }).into(),
                color: Color::WHITE,
                font_size: 16.0,
                weight: FontWeight::Normal,
                max_lines: None,
            })
        };

        let first = sched.compose(&mut root);
        assert_eq!(first.texts(), vec!["splash"]);

        clock.advance(Duration::from_millis(5));
        let second = sched.compose(&mut root);
        assert_eq!(second.texts(), vec!["content"]);
        assert_eq!(sched.frame(), 2);
    }

    #[test]
    fn test_disabled_button_does_not_click() {
        let clicks = Rc::new(Cell::new(0));
        let on_click: Callback = {
            let clicks = clicks.clone();
            Rc::new(move || clicks.set(clicks.get() + 1))
        };
        let button = |enabled: bool| {
            View::new(ViewKind::Button {
                text: "Go".into(),
                on_click: Some(on_click.clone()),
            })
            .semantics(Semantics::new(Role::Button).label("Go").enabled(enabled))
        };

        assert!(!button(false).is_actionable());
        assert!(!button(false).click());
        assert_eq!(clicks.get(), 0);

        assert!(button(true).click());
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_checkbox_click_toggles() {
        let value = signal(false);
        let cb = View::new(ViewKind::Checkbox {
            checked: value.get(),
            on_change: Some(Rc::new({
                let value = value.clone();
                move |v| value.set(v)
            })),
        });
        assert!(cb.click());
        assert!(value.get());
    }

    #[test]
    fn test_find_by_label_walks_preorder() {
        let tree = View::new(ViewKind::Column).with_children(vec![
            View::new(ViewKind::Box).semantics(Semantics::new(Role::Image).label("a")),
            View::new(ViewKind::Row).with_children(vec![
                View::new(ViewKind::Box).semantics(Semantics::new(Role::Image).label("b")),
            ]),
        ]);
        assert!(matches!(tree.find_by_label("b").map(|v| &v.kind), Some(ViewKind::Box)));
        assert!(tree.find_by_label("c").is_none());
    }
}
