// File: crates/trend-core/src/types.rs
// Summary: Shared types and constants (default surface size, RGBA color model).

use plotters::style::RGBAColor;

/// Default surface width in pixels, used when a config is not responsive.
pub const WIDTH: u32 = 960;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 540;

/// RGBA color. Alpha is kept as a fraction in [0, 1] so the upstream
/// `rgba(r,g,b,a)` literals carry over without rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse a CSS-style color literal: `#rgb`, `#rrggbb`, `rgb(r,g,b)`,
    /// or `rgba(r,g,b,a)` with a fractional alpha.
    pub fn parse(s: &str) -> Result<Self, &'static str> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if let Some(body) = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
        {
            let body = body.strip_suffix(')').ok_or("missing closing paren")?;
            return Self::parse_components(body);
        }
        Err("unrecognized color literal")
    }

    fn parse_hex(hex: &str) -> Result<Self, &'static str> {
        let nibble = |c: char| c.to_digit(16).ok_or("bad hex digit");
        let chars: Vec<char> = hex.chars().collect();
        match chars.len() {
            3 => {
                let r = nibble(chars[0])? as u8;
                let g = nibble(chars[1])? as u8;
                let b = nibble(chars[2])? as u8;
                Ok(Self::opaque(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let byte = |i: usize| -> Result<u8, &'static str> {
                    Ok((nibble(chars[i])? as u8) << 4 | nibble(chars[i + 1])? as u8)
                };
                Ok(Self::opaque(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => Err("hex color must have 3 or 6 digits"),
        }
    }

    fn parse_components(body: &str) -> Result<Self, &'static str> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err("expected 3 or 4 components");
        }
        let channel = |s: &str| s.parse::<u8>().map_err(|_| "bad channel value");
        let (r, g, b) = (channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
        let a = if parts.len() == 4 {
            let a: f64 = parts[3].parse().map_err(|_| "bad alpha value")?;
            if !(0.0..=1.0).contains(&a) {
                return Err("alpha out of range");
            }
            a
        } else {
            1.0
        };
        Ok(Self::new(r, g, b, a))
    }

    /// Convert to the collaborator library's color type.
    pub fn to_plotters(self) -> RGBAColor {
        RGBAColor(self.r, self.g, self.b, self.a)
    }
}
