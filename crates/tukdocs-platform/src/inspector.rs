//! Text rendering of a composed tree.
//!
//! Each actionable node gets a number; the terminal host dispatches a click
//! when the user types it. Disabled nodes are printed with `[-]` and never
//! numbered.

use tukdocs_core::{View, ViewKind};

/// A dispatchable node in the current frame.
#[derive(Clone)]
pub struct HitRegion {
    pub index: usize,
    pub label: String,
    pub view: View,
}

/// Output of inspecting one composed tree.
pub struct Frame {
    pub lines: Vec<String>,
    pub hit_regions: Vec<HitRegion>,
}

impl Frame {
    pub fn hit(&self, index: usize) -> Option<&HitRegion> {
        self.hit_regions.iter().find(|h| h.index == index)
    }

    pub fn render(&self) -> String {
        let mut s = self.lines.join("\n");
        s.push('\n');
        s
    }
}

#[derive(Default)]
pub struct Inspector {
    lines: Vec<String>,
    hits: Vec<HitRegion>,
}

impl Inspector {
    pub fn frame(root: &View) -> Frame {
        let mut ins = Inspector::default();
        ins.visit(root, 0);
        Frame {
            lines: ins.lines,
            hit_regions: ins.hits,
        }
    }

    fn marker(&mut self, v: &View, label: &str) -> String {
        if v.is_actionable() {
            let index = self.hits.len() + 1;
            self.hits.push(HitRegion {
                index,
                label: label.to_string(),
                view: v.clone(),
            });
            format!("[{index}]")
        } else {
            "[-]".to_string()
        }
    }

    fn push(&mut self, depth: usize, line: String) {
        self.lines.push(format!("{}{}", "  ".repeat(depth), line));
    }

    fn visit(&mut self, v: &View, depth: usize) {
        let label = v.label().unwrap_or_default().to_string();
        match &v.kind {
            ViewKind::Surface | ViewKind::Box | ViewKind::Row | ViewKind::Column => {
                self.children(v, depth);
            }
            ViewKind::ScrollColumn => {
                self.push(depth, "┆".to_string());
                self.children(v, depth + 1);
            }
            ViewKind::Card { on_click } => {
                if on_click.is_some() {
                    let m = self.marker(v, &label);
                    self.push(depth, format!("{m} {label}"));
                    self.children(v, depth + 1);
                } else {
                    self.children(v, depth);
                }
            }
            ViewKind::Text { text, .. } => self.push(depth, text.clone()),
            ViewKind::Button { text, .. } => {
                let m = self.marker(v, text);
                self.push(depth, format!("{m} ( {text} )"));
            }
            ViewKind::IconButton { icon, .. } => {
                let m = self.marker(v, &label);
                self.push(depth, format!("{m} <{}> {label}", icon.name()));
            }
            ViewKind::Checkbox { checked, .. } => {
                let m = self.marker(v, &label);
                let tick = if *checked { "[x]" } else { "[ ]" };
                self.push(depth, format!("{m} {tick} {label}"));
            }
            ViewKind::Icon { icon, .. } => self.push(depth, format!("<{}>", icon.name())),
            ViewKind::Image { resource } => {
                let alt = if label.is_empty() { resource } else { &label };
                self.push(depth, format!("<image: {alt}>"));
            }
            ViewKind::DropdownMenu { expanded } => {
                if *expanded {
                    self.push(depth, "▾".to_string());
                    self.children(v, depth + 1);
                }
            }
        }
    }

    fn children(&mut self, v: &View, depth: usize) {
        for c in &v.children {
            self.visit(c, depth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tukdocs_core::{Color, FontWeight, Icon, Role, Semantics};

    fn text(s: &str) -> View {
        View::new(ViewKind::Text {
            text: s.into(),
            color: Color::BLACK,
            font_size: 16.0,
            weight: FontWeight::Normal,
            max_lines: None,
        })
    }

    fn button(s: &str, enabled: bool, hits: Rc<Cell<u32>>) -> View {
        View::new(ViewKind::Button {
            text: s.into(),
            on_click: Some(Rc::new(move || hits.set(hits.get() + 1))),
        })
        .semantics(Semantics::new(Role::Button).label(s).enabled(enabled))
    }

    #[test]
    fn numbers_only_enabled_actions() {
        let hits = Rc::new(Cell::new(0));
        let tree = View::new(ViewKind::Column).with_children(vec![
            text("Terms & Conditions"),
            View::new(ViewKind::ScrollColumn).with_children(vec![text("1. Acceptance")]),
            View::new(ViewKind::Checkbox {
                checked: false,
                on_change: Some(Rc::new(|_| {})),
            })
            .semantics(Semantics::new(Role::Checkbox).label("I agree")),
            button("Agree & Continue", false, hits.clone()),
            View::new(ViewKind::IconButton {
                icon: Icon::Search,
                on_click: Some(Rc::new(|| {})),
            })
            .semantics(Semantics::new(Role::Button).label("Search")),
        ]);

        let frame = Inspector::frame(&tree);
        insta::assert_snapshot!(frame.lines.join("\n"), @r"
        Terms & Conditions
        ┆
          1. Acceptance
        [1] [ ] I agree
        [-] ( Agree & Continue )
        [2] <search> Search
        ");
        assert_eq!(frame.hit_regions.len(), 2);
        assert_eq!(frame.hit(2).map(|h| h.label.as_str()), Some("Search"));
        assert!(frame.hit(3).is_none());
    }

    #[test]
    fn hit_region_dispatches_click() {
        let hits = Rc::new(Cell::new(0));
        let tree =
            View::new(ViewKind::Row).with_children(vec![button("Open Docs", true, hits.clone())]);
        let frame = Inspector::frame(&tree);
        assert!(frame.hit(1).map(|h| h.view.click()).unwrap_or(false));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn collapsed_menu_prints_nothing() {
        let tree = View::new(ViewKind::DropdownMenu { expanded: false })
            .with_children(vec![text("Settings")]);
        assert!(Inspector::frame(&tree).lines.is_empty());
    }
}
