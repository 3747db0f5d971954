use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    /// Material blue 500, used for word-processing documents.
    pub const BLUE: Color = Color::from_argb(0xFF2196F3);
    /// Material red 500, used for PDF documents and the conversion action.
    pub const RED: Color = Color::from_argb(0xFFF44336);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }

    /// Packed `0xAARRGGBB`, the layout Android color literals use.
    pub const fn from_argb(argb: u32) -> Self {
        Color(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// `#RRGGBB` or `#RRGGBBAA`, leading `#` optional. `None` if malformed.
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let s = hex.trim_start_matches('#');
        if !s.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| {
            s.get(range).and_then(|c| u8::from_str_radix(c, 16).ok())
        };
        match s.len() {
            6 => Some(Color(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
            8 => Some(Color(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }

    /// For literals known to be valid; malformed input gives black.
    pub fn from_hex(hex: &str) -> Self {
        Self::parse_hex(hex).unwrap_or(Color::BLACK)
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }

    /// Scale alpha by `f` in `0.0..=1.0` (Compose's `copy(alpha = ..)`).
    pub fn faded(self, f: f32) -> Self {
        let a = (self.3 as f32 * f.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.3 == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.0, self.1, self.2, self.3
            )
        }
    }
}
