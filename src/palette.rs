//! Shade scale generation.
//!
//! Derives a fixed-length scale of tonal shades from a single base color.
//! The scale runs from a near-white tint down to a near-black tone with the
//! base color's hue and saturation held constant throughout; only lightness
//! varies, stepped evenly between a fixed ceiling and floor. The base
//! color's own lightness is approximated by the nearest step rather than
//! preserved exactly.

use crate::models::{HslColor, RgbColor, Shade};

/// Number of shades in a generated scale.
pub const SHADE_COUNT: usize = 10;

/// Lightness of the lightest shade, in percent.
const LIGHTNESS_CEILING: f32 = 95.0;

/// Lightness of the darkest shade, in percent.
const LIGHTNESS_FLOOR: f32 = 10.0;

/// Returns the scale level for a shade at the given index.
///
/// Follows the conventional design-token numbering: the first step is 50,
/// subsequent steps are 200, 300, ... up to 1000. This is the single source
/// for level derivation; exporters read the level stored on each shade
/// rather than recomputing it.
///
/// # Examples
///
/// ```
/// use shadegen::palette::scale_level;
///
/// assert_eq!(scale_level(0), 50);
/// assert_eq!(scale_level(1), 200);
/// assert_eq!(scale_level(9), 1000);
/// ```
#[must_use]
pub const fn scale_level(index: usize) -> u16 {
    if index == 0 {
        50
    } else {
        ((index + 1) * 100) as u16
    }
}

/// Generates the shade scale for a base color.
///
/// Returns exactly [`SHADE_COUNT`] shades ordered from lightest to darkest.
/// Hue and saturation come from the base color and are rounded to whole
/// units before conversion, so each shade's hex and hsl representations
/// denote the identical color. The result is a pure function of the input:
/// regenerating from the same base color yields an identical scale.
///
/// # Examples
///
/// ```
/// use shadegen::models::RgbColor;
/// use shadegen::palette::generate_shades;
///
/// let shades = generate_shades(RgbColor::new(59, 130, 246));
/// assert_eq!(shades.len(), 10);
/// assert_eq!(shades[0].level, 50);
/// assert_eq!(shades[9].level, 1000);
/// ```
#[must_use]
pub fn generate_shades(base: RgbColor) -> Vec<Shade> {
    let hsl = base.to_hsl();
    let h = hsl.h.round();
    let s = hsl.s.round();

    let step = (LIGHTNESS_CEILING - LIGHTNESS_FLOOR) / (SHADE_COUNT - 1) as f32;

    (0..SHADE_COUNT)
        .map(|index| {
            let l = (LIGHTNESS_CEILING - step * index as f32).round();
            let color = RgbColor::from_hsl(h, s, l);

            Shade {
                level: scale_level(index),
                hex: color.to_hex(),
                hsl: HslColor::new(h, s, l).to_string(),
            }
        })
        .collect()
}
