use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Default property cycle (`C0` .. `C9`), as 8-bit RGB.
const COLOR_CYCLE: [[u8; 3]; 10] = [
    [0x1f, 0x77, 0xb4],
    [0xff, 0x7f, 0x0e],
    [0x2c, 0xa0, 0x2c],
    [0xd6, 0x27, 0x28],
    [0x94, 0x67, 0xbd],
    [0x8c, 0x56, 0x4b],
    [0xe3, 0x77, 0xc2],
    [0x7f, 0x7f, 0x7f],
    [0xbc, 0xbd, 0x22],
    [0x17, 0xbe, 0xcf],
];

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Entry `index` of the default cycle, wrapping around.
    #[must_use]
    pub fn cycle(index: usize) -> Self {
        let [red, green, blue] = COLOR_CYCLE[index % COLOR_CYCLE.len()];
        Self::from_rgb8(red, green, blue)
    }

    /// Parses `#rrggbb`, `#rrggbbaa` or a cycle reference such as `C3`.
    pub fn parse(input: &str) -> PlotResult<Self> {
        let input = input.trim();
        if let Some(index) = input.strip_prefix('C') {
            let index: usize = index
                .parse()
                .map_err(|_| PlotError::InvalidData(format!("invalid color cycle ref `{input}`")))?;
            return Ok(Self::cycle(index));
        }

        let hex = input
            .strip_prefix('#')
            .ok_or_else(|| PlotError::InvalidData(format!("unsupported color `{input}`")))?;
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return Err(PlotError::InvalidData(format!(
                "hex color `{input}` must have 6 or 8 digits"
            )));
        }
        let channel = |start: usize| {
            u8::from_str_radix(&hex[start..start + 2], 16)
                .map_err(|_| PlotError::InvalidData(format!("invalid hex color `{input}`")))
        };
        let mut color = Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?);
        if hex.len() == 8 {
            color.alpha = f64::from(channel(6)?) / 255.0;
        }
        Ok(color)
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed,
}
