//! Color constants and helpers for button materials.
//!
//! Materials take RGBA colors. These helpers build opaque `Srgba` values from
//! RGB or HSV components so colors can be picked the way an artist would.

use palette::{FromColor, Hsv, Srgb, Srgba, WithAlpha};

pub const RED: Srgba = rgba(1.0, 0.0, 0.0, 1.0);
pub const GREEN: Srgba = rgba(0.0, 1.0, 0.0, 1.0);
pub const BLUE: Srgba = rgba(0.0, 0.0, 1.0, 1.0);
pub const WHITE: Srgba = rgba(1.0, 1.0, 1.0, 1.0);
pub const BLACK: Srgba = rgba(0.0, 0.0, 0.0, 1.0);

/// Creates an RGBA color from components in the 0.0-1.0 range.
#[inline]
pub const fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Srgba {
    palette::Alpha {
        color: Srgb::new(red, green, blue),
        alpha,
    }
}

/// Makes an RGB color fully opaque.
#[inline]
pub fn opaque(color: Srgb) -> Srgba {
    color.with_alpha(1.0)
}

/// Creates an opaque color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgba {
    let hsv = Hsv::new(hue, saturation, value);
    opaque(Srgb::from_color(hsv))
}

/// Creates an opaque color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Srgba {
    hsv(hue, 1.0, 1.0)
}
