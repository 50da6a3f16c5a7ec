//! Colour constants and interpolation helpers for the icon.

use anyhow::Result;
use image::{Rgb, Rgba};
use std::str::FromStr;

/// Deep purple at the top of the background.
pub const GRADIENT_TOP: Rgb<u8> = Rgb([120, 30, 210]);
/// Vivid blue at the bottom of the background.
pub const GRADIENT_BOTTOM: Rgb<u8> = Rgb([50, 110, 250]);

pub const TINT_LEFT: Rgb<u8> = Rgb([80, 0, 10]);
pub const TINT_RIGHT: Rgb<u8> = Rgb([20, 60, 40]);
pub const TINT_MAX_ALPHA: u8 = 80;

pub const UPPER_WING: Rgba<u8> = Rgba([255, 255, 255, 245]);
pub const LOWER_BODY: Rgba<u8> = Rgba([225, 225, 250, 230]);
pub const TAIL_FIN: Rgba<u8> = Rgba([200, 200, 240, 215]);
pub const CREASE: Rgba<u8> = Rgba([160, 150, 210, 150]);

/// Linear interpolation of a single channel, truncated toward zero.
pub fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    (from as f64 * (1.0 - t) + to as f64 * t) as u8
}

/// Per-channel linear interpolation between two colours.
pub fn lerp_rgb(from: Rgb<u8>, to: Rgb<u8>, t: f64) -> Rgb<u8> {
    Rgb([
        lerp_channel(from[0], to[0], t),
        lerp_channel(from[1], to[1], t),
        lerp_channel(from[2], to[2], t),
    ])
}

/// Attach an alpha value to an opaque colour.
pub fn with_alpha(color: Rgb<u8>, alpha: u8) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], alpha])
}

/// Parse a CSS colour (`#781ed2`, `rgb(50, 110, 250)`, `navy`, ...) into an
/// opaque RGB value.
pub fn parse_css_color(color: &str) -> Result<Rgb<u8>> {
    let srgb = css_color::Srgb::from_str(color)
        .map_err(|_| anyhow::anyhow!("Invalid CSS color: {}", color))?;

    Ok(Rgb([
        (srgb.red * 255.).round() as u8,
        (srgb.green * 255.).round() as u8,
        (srgb.blue * 255.).round() as u8,
    ]))
}
