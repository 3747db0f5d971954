//! Line-oriented host: prints each frame, reads a number, clicks it.

use std::io::{self, BufRead, Write};

use tukdocs_core::{Scheduler, View};
use tukdocs_documents::DocumentPicker;

use crate::inspector::Inspector;

/// Where the host reads user input from. `Ok(None)` means end of input.
pub trait LineSource {
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads from the process stdin. The handle is locked per line only, so a
/// picker can prompt in the middle of a click.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdinLines;

impl LineSource for StdinLines {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        match io::stdin().lock().read_line(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string())),
        }
    }
}

/// Runs `root` against stdin/stdout until the user quits or input ends.
pub fn run_terminal_app(root: impl FnMut(&mut Scheduler) -> View) -> anyhow::Result<()> {
    let mut sched = Scheduler::new();
    run_terminal_app_with(&mut sched, root, &mut StdinLines, &mut io::stdout())
}

pub fn run_terminal_app_with<F, L, W>(
    sched: &mut Scheduler,
    mut root: F,
    input: &mut L,
    out: &mut W,
) -> anyhow::Result<()>
where
    F: FnMut(&mut Scheduler) -> View,
    L: LineSource + ?Sized,
    W: Write + ?Sized,
{
    log::info!("terminal host started");
    while !sched.exit_requested() {
        let view = sched.compose(&mut root);
        if sched.exit_requested() {
            log::info!("exit requested by app");
            break;
        }

        let frame = Inspector::frame(&view);
        writeln!(out, "────────")?;
        write!(out, "{}", frame.render())?;

        if frame.hit_regions.is_empty() {
            // Nothing to click: wait for the next timer, if any.
            match sched.timers.until_next() {
                Some(wait) => {
                    out.flush()?;
                    std::thread::sleep(wait);
                    continue;
                }
                None => {
                    log::info!("frame {} has no actions and no timers", sched.frame());
                    break;
                }
            }
        }

        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = input.read_line()? else {
            log::debug!("input closed");
            break;
        };

        match line.trim() {
            "" => continue,
            "q" | "quit" => sched.request_exit(),
            cmd => match cmd.parse::<usize>().ok().and_then(|n| frame.hit(n)) {
                Some(hit) => {
                    log::debug!("click [{}] {}", hit.index, hit.label);
                    hit.view.click();
                }
                None => writeln!(out, "unknown action '{cmd}': type a number or q")?,
            },
        }
    }
    out.flush()?;
    Ok(())
}

/// Asks for a path on stdin. An empty answer cancels.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdinPicker;

impl DocumentPicker for StdinPicker {
    fn pick(&self) -> Option<String> {
        prompt_for_path(&mut StdinLines, &mut io::stdout())
    }
}

pub fn prompt_for_path<L, W>(input: &mut L, out: &mut W) -> Option<String>
where
    L: LineSource + ?Sized,
    W: Write + ?Sized,
{
    if write!(out, "path to document (empty to cancel): ")
        .and_then(|_| out.flush())
        .is_err()
    {
        return None;
    }
    match input.read_line() {
        Ok(Some(line)) if !line.trim().is_empty() => Some(line.trim().to_string()),
        Ok(_) => None,
        Err(e) => {
            log::warn!("could not read path: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::time::Duration;

    use tukdocs_core::{Role, Semantics, ViewKind};

    use super::*;

    struct Script(VecDeque<&'static str>);

    impl LineSource for Script {
        fn read_line(&mut self) -> io::Result<Option<String>> {
            Ok(self.0.pop_front().map(str::to_string))
        }
    }

    fn script(lines: &[&'static str]) -> Script {
        Script(lines.iter().copied().collect())
    }

    fn counter_button(hits: &Rc<Cell<u32>>) -> View {
        let hits = hits.clone();
        View::new(ViewKind::Button {
            text: format!("Tapped {}", hits.get()),
            on_click: Some(Rc::new(move || hits.set(hits.get() + 1))),
        })
        .semantics(Semantics::new(Role::Button).label("Tap"))
    }

    #[test]
    fn numbers_dispatch_clicks_until_quit() {
        let hits = Rc::new(Cell::new(0));
        let mut sched = Scheduler::new();
        let mut out = Vec::new();
        run_terminal_app_with(
            &mut sched,
            |_: &mut Scheduler| counter_button(&hits),
            &mut script(&["1", "", "7", "1", "q", "1"]),
            &mut out,
        )
        .unwrap();

        assert_eq!(hits.get(), 2);
        assert!(sched.exit_requested());
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("[1] ( Tapped 2 )"));
        assert!(out.contains("unknown action '7'"));
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let hits = Rc::new(Cell::new(0));
        let mut sched = Scheduler::new();
        let mut out = Vec::new();
        run_terminal_app_with(
            &mut sched,
            |_: &mut Scheduler| counter_button(&hits),
            &mut script(&[]),
            &mut out,
        )
        .unwrap();
        assert_eq!(sched.frame(), 1);
    }

    #[test]
    fn waits_for_timers_when_nothing_is_clickable() {
        let ready = Rc::new(Cell::new(false));
        let hits = Rc::new(Cell::new(0));
        let mut sched = Scheduler::new();
        let mut out = Vec::new();
        run_terminal_app_with(
            &mut sched,
            |s: &mut Scheduler| {
                if s.frame() == 1 {
                    let ready = ready.clone();
                    s.timers.after(Duration::from_millis(5), move || ready.set(true));
                }
                if ready.get() {
                    counter_button(&hits)
                } else {
                    View::new(ViewKind::Text {
                        text: "loading".into(),
                        color: tukdocs_core::Color::BLACK,
                        font_size: 16.0,
                        weight: tukdocs_core::FontWeight::Normal,
                        max_lines: None,
                    })
                }
            },
            &mut script(&["q"]),
            &mut out,
        )
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        let loading = out.find("loading").unwrap();
        let button = out.find("[1] ( Tapped 0 )").unwrap();
        assert!(loading < button);
    }

    #[test]
    fn static_frame_without_actions_ends() {
        let mut sched = Scheduler::new();
        let mut out = Vec::new();
        run_terminal_app_with(
            &mut sched,
            |_: &mut Scheduler| View::new(ViewKind::Column),
            &mut script(&["1"]),
            &mut out,
        )
        .unwrap();
        assert_eq!(sched.frame(), 1);
    }

    #[test]
    fn exit_request_wins_over_input() {
        let mut sched = Scheduler::new();
        let mut out = Vec::new();
        run_terminal_app_with(
            &mut sched,
            |s: &mut Scheduler| {
                s.request_exit();
                View::new(ViewKind::Column)
            },
            &mut script(&[]),
            &mut out,
        )
        .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn picker_prompt_trims_and_cancels() {
        let mut out = Vec::new();
        assert_eq!(
            prompt_for_path(&mut script(&["  ~/a.pdf "]), &mut out),
            Some("~/a.pdf".to_string())
        );
        assert_eq!(prompt_for_path(&mut script(&[""]), &mut out), None);
        assert_eq!(prompt_for_path(&mut script(&[]), &mut out), None);
    }
}
