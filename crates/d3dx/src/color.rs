//! Conversions between floating point colors and packed `D3DCOLOR`s.

use crate::sys::{self, D3DCOLOR, D3DXCOLOR};

/// Opaque white.
pub const WHITE: D3DXCOLOR = D3DXCOLOR::new(1.0, 1.0, 1.0, 1.0);
/// Opaque black.
pub const BLACK: D3DXCOLOR = D3DXCOLOR::new(0.0, 0.0, 0.0, 1.0);
/// Opaque red.
pub const RED: D3DXCOLOR = D3DXCOLOR::new(1.0, 0.0, 0.0, 1.0);
/// Opaque green.
pub const GREEN: D3DXCOLOR = D3DXCOLOR::new(0.0, 1.0, 0.0, 1.0);
/// Opaque blue.
pub const BLUE: D3DXCOLOR = D3DXCOLOR::new(0.0, 0.0, 1.0, 1.0);
/// Opaque yellow.
pub const YELLOW: D3DXCOLOR = D3DXCOLOR::new(1.0, 1.0, 0.0, 1.0);
/// Opaque cyan.
pub const CYAN: D3DXCOLOR = D3DXCOLOR::new(0.0, 1.0, 1.0, 1.0);
/// Opaque magenta.
pub const MAGENTA: D3DXCOLOR = D3DXCOLOR::new(1.0, 0.0, 1.0, 1.0);

/// Packs `color` into `0xAARRGGBB` the way `D3DXCOLOR`'s `DWORD`
/// conversion does: every channel is clamped to `[0, 1]` and rounded to
/// the nearest step.
pub fn to_d3dcolor(color: &D3DXCOLOR) -> D3DCOLOR {
    argb(
        channel_to_byte(color.a),
        channel_to_byte(color.r),
        channel_to_byte(color.g),
        channel_to_byte(color.b),
    )
}

fn channel_to_byte(value: f32) -> u8 {
    if value >= 1.0 {
        0xFF
    } else if value <= 0.0 {
        0
    } else {
        (value * 255.0 + 0.5) as u8
    }
}

/// Unpacks a `0xAARRGGBB` color.
pub fn from_d3dcolor(color: D3DCOLOR) -> D3DXCOLOR {
    let channel = |shift: u32| ((color >> shift) & 0xFF) as f32 / 255.0;
    D3DXCOLOR::new(channel(16), channel(8), channel(0), channel(24))
}

/// Packs the given channels into `0xAARRGGBB`.
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> D3DCOLOR {
    sys::D3DCOLOR_ARGB(a, r, g, b)
}

/// An opaque color.
pub const fn xrgb(r: u8, g: u8, b: u8) -> D3DCOLOR {
    sys::D3DCOLOR_XRGB(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_pack() {
        assert_eq!(to_d3dcolor(&WHITE), 0xFFFF_FFFF);
        assert_eq!(to_d3dcolor(&BLACK), 0xFF00_0000);
        assert_eq!(to_d3dcolor(&RED), xrgb(0xFF, 0, 0));
        assert_eq!(to_d3dcolor(&CYAN), 0xFF00_FFFF);
        assert_eq!(to_d3dcolor(&MAGENTA), argb(0xFF, 0xFF, 0, 0xFF));
    }

    #[test]
    fn channels_round_to_nearest() {
        assert_eq!(to_d3dcolor(&D3DXCOLOR::new(0.5, 0.5, 0.5, 1.0)), 0xFF80_8080);
        assert_eq!(to_d3dcolor(&D3DXCOLOR::new(0.25, 0.75, 0.1, 0.5)), 0x8040_BF1A);
    }

    #[test]
    fn out_of_range_channels_clamp() {
        let color = D3DXCOLOR::new(2.0, -1.0, 0.5, 1.0);
        assert_eq!(to_d3dcolor(&color), 0xFFFF_0080);
    }

    #[test]
    fn unpacking() {
        assert_eq!(from_d3dcolor(0xFF00_FF00), GREEN);
        let color = from_d3dcolor(argb(0x33, 0xFF, 0x00, 0x66));
        assert!((color.a - 0.2).abs() < 1e-6);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert!((color.b - 0.4).abs() < 1e-6);
    }
}
