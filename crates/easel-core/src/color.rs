//! RGBA color with CSS-style string parsing

use crate::error::{EaselError, Result};
use serde::{Deserialize, Serialize};

/// RGBA color with components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse a CSS-style color string.
    ///
    /// Accepted forms: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`,
    /// `rgba(r, g, b, a)` with byte channels and a `0..=1` alpha.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(s, hex);
        }
        if let Some(body) = s
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_channels(s, body, true);
        }
        if let Some(body) = s
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_channels(s, body, false);
        }
        Err(EaselError::InvalidColor(s.to_string()))
    }

    fn parse_hex(input: &str, hex: &str) -> Result<Self> {
        let invalid = || EaselError::InvalidColor(input.to_string());
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            3 => {
                // #rgb expands each nibble: #f80 -> #ff8800
                let r = (value >> 8) & 0xF;
                let g = (value >> 4) & 0xF;
                let b = value & 0xF;
                Ok(Self::from_hex(((r * 17) << 16) | ((g * 17) << 8) | (b * 17)))
            }
            6 => Ok(Self::from_hex(value)),
            8 => {
                let mut color = Self::from_hex(value >> 8);
                color.a = (value & 0xFF) as f32 / 255.0;
                Ok(color)
            }
            _ => Err(invalid()),
        }
    }

    fn parse_channels(input: &str, body: &str, with_alpha: bool) -> Result<Self> {
        let invalid = || EaselError::InvalidColor(input.to_string());
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != if with_alpha { 4 } else { 3 } {
            return Err(invalid());
        }
        let mut rgb = [0.0f32; 3];
        for (slot, part) in rgb.iter_mut().zip(&parts) {
            let byte: f32 = part.parse().map_err(|_| invalid())?;
            if !(0.0..=255.0).contains(&byte) {
                return Err(invalid());
            }
            *slot = byte / 255.0;
        }
        let a = if with_alpha {
            let alpha: f32 = parts[3].parse().map_err(|_| invalid())?;
            if !(0.0..=1.0).contains(&alpha) {
                return Err(invalid());
            }
            alpha
        } else {
            1.0
        };
        Ok(Self::new(rgb[0], rgb[1], rgb[2], a))
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
