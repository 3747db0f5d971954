use crate::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// Layout and decoration hints. Hosts interpret these; the core only
/// carries them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    pub key: Option<String>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub fill_max_w: bool,
    pub fill_max_h: bool,
    pub weight: Option<f32>,
    pub padding: Option<PaddingValues>,
    pub background: Option<Color>,
    pub clip_rounded: Option<f32>,
    pub elevation: Option<f32>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stable identity for list items.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.width = Some(w);
        self.height = Some(h);
        self
    }

    pub fn width(mut self, w: f32) -> Self {
        self.width = Some(w);
        self
    }

    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }

    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_w = true;
        self
    }

    pub fn fill_max_size(mut self) -> Self {
        self.fill_max_w = true;
        self.fill_max_h = true;
        self
    }

    pub fn weight(mut self, w: f32) -> Self {
        self.weight = Some(w);
        self
    }

    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(PaddingValues {
            left: v,
            right: v,
            top: v,
            bottom: v,
        });
        self
    }

    pub fn padding_values(mut self, p: PaddingValues) -> Self {
        self.padding = Some(p);
        self
    }

    pub fn padding_horizontal(self, v: f32) -> Self {
        let p = self.padding.unwrap_or_default();
        self.padding_values(PaddingValues {
            left: v,
            right: v,
            ..p
        })
    }

    pub fn padding_bottom(self, v: f32) -> Self {
        let p = self.padding.unwrap_or_default();
        self.padding_values(PaddingValues { bottom: v, ..p })
    }

    pub fn background(mut self, c: Color) -> Self {
        self.background = Some(c);
        self
    }

    pub fn clip_rounded(mut self, radius: f32) -> Self {
        self.clip_rounded = Some(radius);
        self
    }

    pub fn elevation(mut self, dp: f32) -> Self {
        self.elevation = Some(dp);
        self
    }
}
