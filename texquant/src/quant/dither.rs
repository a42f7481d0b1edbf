//! Spatial ordered dithering between quantization levels.
//!
//! Straight truncation of a smooth gradient produces visible banding.
//! Ordered dithering instead rounds each channel up or down to the nearest
//! level based on a fixed 2x2 threshold pattern: pixels whose true value
//! lies between two levels are rounded in a spatially repeating but
//! deterministic way, so the intermediate brightness is reconstructed as an
//! average over the tile when viewed at a distance.

use super::channel::{alpha_boost, FRACTION_MASK, MAX_LEVEL};

/// Per-position, per-channel rounding thresholds.
///
/// Rows are indexed by pixel parity `(y & 1) * 2 + (x & 1)`, columns by
/// channel (R, G, B). Each channel uses a different phase of the tile so
/// that rounding decisions do not line up across channels into colored
/// moire artifacts.
const THRESHOLDS: [[u8; 3]; 4] = [
    [1, 7, 3], // y even, x even
    [5, 1, 7], // y even, x odd
    [7, 3, 5], // y odd,  x even
    [3, 5, 1], // y odd,  x odd
];

/// A channel value split around its two nearest quantization levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DitherLevels {
    /// Fractional remainder below one step.
    pub low: u8,
    /// Nearest level at or below the value.
    pub down: u8,
    /// Next level above, saturating at the top step.
    pub up: u8,
}

impl DitherLevels {
    /// Split a channel value around its quantization levels.
    ///
    /// The top band saturates: once `down` reaches the maximum level there
    /// is no level above it, so `up == down`.
    pub fn new(value: u8) -> Self {
        let down = value & !FRACTION_MASK;
        let up = if down >= MAX_LEVEL {
            MAX_LEVEL
        } else {
            down + (FRACTION_MASK + 1)
        };
        Self {
            low: value & FRACTION_MASK,
            down,
            up,
        }
    }
}

/// Round one channel to a quantization level.
///
/// Rounds up when the fractional remainder strictly exceeds the threshold;
/// a tie resolves to the lower level.
#[inline]
pub fn dither_channel(value: u8, threshold: u8) -> u8 {
    let levels = DitherLevels::new(value);
    if levels.low > threshold {
        levels.up
    } else {
        levels.down
    }
}

/// Threshold row for a pixel position.
#[inline]
fn threshold_row(x: u32, y: u32) -> &'static [u8; 3] {
    &THRESHOLDS[((y & 1) * 2 + (x & 1)) as usize]
}

/// Quantize one RGBA pixel with ordered dithering.
///
/// The rounding direction of each channel depends only on the pixel's own
/// value and the parity of its position. Green gains the alpha boost after
/// dithering, and output alpha is forced fully opaque.
pub fn dither_pixel(pixel: [u8; 4], x: u32, y: u32) -> [u8; 4] {
    let [r, g, b, a] = pixel;
    let thresholds = threshold_row(x, y);
    [
        dither_channel(r, thresholds[0]),
        dither_channel(g, thresholds[1]) + alpha_boost(a),
        dither_channel(b, thresholds[2]),
        255,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_mid_band() {
        let levels = DitherLevels::new(135);
        assert_eq!(levels.low, 7);
        assert_eq!(levels.down, 128);
        assert_eq!(levels.up, 136);
    }

    #[test]
    fn test_levels_bottom_band() {
        let levels = DitherLevels::new(5);
        assert_eq!(levels.low, 5);
        assert_eq!(levels.down, 0);
        assert_eq!(levels.up, 8);
    }

    #[test]
    fn test_levels_top_band_saturates() {
        // 252 sits in the top band; there is no level above 248
        let levels = DitherLevels::new(252);
        assert_eq!(levels.low, 4);
        assert_eq!(levels.down, 248);
        assert_eq!(levels.up, 248);
    }

    #[test]
    fn test_levels_on_a_level() {
        let levels = DitherLevels::new(128);
        assert_eq!(levels.low, 0);
        assert_eq!(levels.down, 128);
        assert_eq!(levels.up, 136);
    }

    #[test]
    fn test_dither_channel_rounds_up_above_threshold() {
        // low = 4 > threshold 3
        assert_eq!(dither_channel(132, 3), 136);
    }

    #[test]
    fn test_dither_channel_rounds_down_below_threshold() {
        // low = 2 < threshold 3
        assert_eq!(dither_channel(130, 3), 128);
    }

    #[test]
    fn test_dither_channel_tie_resolves_down() {
        // low == threshold must round down, never up
        assert_eq!(dither_channel(131, 3), 128);
        assert_eq!(dither_channel(7, 7), 0);
    }

    #[test]
    fn test_dither_pixel_even_even() {
        // Thresholds at (0, 0) are R=1, G=7, B=3. All channels have
        // remainder 7: red and blue round up, green ties and rounds down,
        // then gains the alpha boost.
        let out = dither_pixel([135, 135, 135, 255], 0, 0);
        assert_eq!(out, [136, 132, 136, 255]);
    }

    #[test]
    fn test_dither_pixel_top_band() {
        // 252 is in the top band on every channel, so the threshold
        // comparison cannot push it past 248 regardless of position.
        let out = dither_pixel([252, 252, 252, 255], 1, 1);
        assert_eq!(out, [248, 252, 248, 255]);
    }

    #[test]
    fn test_dither_pixel_transparent_alpha() {
        let out = dither_pixel([135, 135, 135, 0], 0, 0);
        assert_eq!(out, [136, 128, 136, 255]);
    }

    #[test]
    fn test_dither_pixel_position_parity() {
        // Remainder 4 straddles the four rows differently per channel
        let pixel = [132, 132, 132, 0];
        // (0,0): R=1 up, G=7 down, B=3 up
        assert_eq!(dither_pixel(pixel, 0, 0), [136, 128, 136, 255]);
        // (1,0): R=5 down, G=1 up, B=7 down
        assert_eq!(dither_pixel(pixel, 1, 0), [128, 136, 128, 255]);
        // (0,1): R=7 down, G=3 up, B=5 down
        assert_eq!(dither_pixel(pixel, 0, 1), [128, 136, 128, 255]);
        // (1,1): R=3 up, G=5 down, B=1 up
        assert_eq!(dither_pixel(pixel, 1, 1), [136, 128, 136, 255]);
    }

    #[test]
    fn test_dither_pixel_periodic_in_position() {
        let pixel = [100, 150, 200, 255];
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(
                    dither_pixel(pixel, x, y),
                    dither_pixel(pixel, x + 2, y + 2),
                    "dither decision must repeat with period 2 at ({}, {})",
                    x,
                    y
                );
            }
        }
    }
}
