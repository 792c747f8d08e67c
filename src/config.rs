use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::OverlayError;

pub const DEFAULT_SIZE: f32 = 40.;
pub const DEFAULT_GLYPH_COLOR: Color32 = Color32::WHITE;
pub const DEFAULT_BUTTON_COLOR: Color32 = Color32::from_rgb(0x80, 0x80, 0x80);

/// Visual configuration of the zoom overlay.
///
/// Every field can be omitted, both when building the config in code and when
/// deserializing it, and falls back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Diameter of each button in points.
    pub size: f32,

    /// Color of the plus/minus strokes.
    #[serde(with = "hex_color")]
    pub glyph_color: Color32,

    /// Fill color of the button circles.
    #[serde(with = "hex_color")]
    pub button_color: Color32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            glyph_color: DEFAULT_GLYPH_COLOR,
            button_color: DEFAULT_BUTTON_COLOR,
        }
    }
}

impl OverlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_glyph_color(mut self, color: Color32) -> Self {
        self.glyph_color = color;
        self
    }

    pub fn with_button_color(mut self, color: Color32) -> Self {
        self.button_color = color;
        self
    }

    /// Checks that the button size is a positive finite number.
    ///
    /// Rendering does not call this: an invalid size renders zero-area buttons
    /// instead of being replaced by the default.
    pub fn validate(&self) -> Result<(), OverlayError> {
        if self.size.is_finite() && self.size > 0. {
            return Ok(());
        }
        Err(OverlayError::InvalidSize(self.size))
    }

    /// Size actually used for layout. Invalid sizes collapse to zero.
    pub(crate) fn effective_size(&self) -> f32 {
        if self.size.is_finite() {
            self.size.max(0.)
        } else {
            0.
        }
    }
}

/// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex_color(value: &str) -> Result<Color32, OverlayError> {
    Color32::from_hex(value).map_err(|err| OverlayError::InvalidColor {
        value: value.to_owned(),
        reason: format!("{err:?}"),
    })
}

/// Formats as `#rrggbb`, or `#rrggbbaa` when the color is not opaque.
pub fn format_hex_color(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

mod hex_color {
    use egui::Color32;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color32, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_hex_color(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Color32, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_hex_color(&raw).map_err(D::Error::custom)
    }
}
