//! Terminal theme tokens and hex-to-terminal color conversion.
//!
//! Series colors arrive as hex strings chosen by the engine's palette; the
//! theme owns everything else on screen (chrome, text, selection).

use ratatui::style::Color;

/// Dark chrome around the engine-colored chart lines.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Deep charcoal base surface.
    pub background: Color,
    /// Border and focus highlights.
    pub accent: Color,
    /// Positive ROI values.
    pub positive: Color,
    /// Negative ROI values and alerts.
    pub negative: Color,
    /// Secondary chrome, axis labels.
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    /// Leaderboard selection background.
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
            selection: Color::Rgb(147, 112, 219),
        }
    }
}

impl Theme {
    /// Color for a signed ROI value.
    pub fn roi_color(&self, value: f64) -> Color {
        if value >= 0.0 {
            self.positive
        } else {
            self.negative
        }
    }
}

/// Parse an engine palette color (`"#e74c3c"`) into a terminal color.
///
/// Anything that is not a 6-digit hex string falls back to gray rather
/// than failing the render.
pub fn color_from_hex(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() == 6 {
        if let Ok(v) = u32::from_str_radix(digits, 16) {
            return Color::Rgb((v >> 16) as u8, (v >> 8) as u8, v as u8);
        }
    }
    Color::Gray
}
