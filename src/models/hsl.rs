//! HSL color representation.

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A color in HSL space.
///
/// Hue is in degrees [0, 360); saturation and lightness are percentages
/// [0, 100]. Displays as a CSS `hsl()` function string with whole-number
/// components, which is also the stored form on a [`crate::models::Shade`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue in degrees (0-360)
    pub h: f32,
    /// Saturation percentage (0-100)
    pub s: f32,
    /// Lightness percentage (0-100)
    pub l: f32,
}

impl HslColor {
    /// Creates a new `HslColor` from individual components.
    #[must_use]
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Parses a CSS `hsl()` string of the form `hsl(H, S%, L%)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shadegen::models::HslColor;
    ///
    /// let hsl = HslColor::parse("hsl(217, 91%, 60%)").unwrap();
    /// assert_eq!(hsl.h, 217.0);
    /// assert_eq!(hsl.s, 91.0);
    /// assert_eq!(hsl.l, 60.0);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match the `hsl(H, S%, L%)` form.
    pub fn parse(value: &str) -> Result<Self> {
        let pattern = Regex::new(r"^hsl\((\d+(?:\.\d+)?), (\d+(?:\.\d+)?)%, (\d+(?:\.\d+)?)%\)$")
            .map_err(|_| anyhow::anyhow!("Failed to create hsl regex"))?;

        let captures = pattern
            .captures(value.trim())
            .ok_or_else(|| anyhow::anyhow!("Invalid hsl string '{value}'. Expected hsl(H, S%, L%)"))?;

        // Captures are digit-only by construction, so the parses cannot fail
        let h = captures[1].parse::<f32>().unwrap_or_default();
        let s = captures[2].parse::<f32>().unwrap_or_default();
        let l = captures[3].parse::<f32>().unwrap_or_default();

        Ok(Self::new(h, s, l))
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.h.round(),
            self.s.round(),
            self.l.round()
        )
    }
}
