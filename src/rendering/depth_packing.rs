//! Storage of a normalized depth value into an RGBA8 pixel.
//!
//! Each channel carries eight more bits of the depth than the next one, from the least
//! significant bits in red to the most significant bits in alpha. Values are computed in
//! `f64` so that the channels of an `f32` depth are exact.

use crate::math::Real;

/// The largest depth that can be packed.
///
/// A depth of exactly `1.0` would overflow the alpha channel and wrap around to zero, so
/// larger depths are clamped to this value.
pub const MAX_PACKED_DEPTH: Real = 1.0 - 1.0 / 16_777_216.0;

const PACK_FACTORS: [f64; 4] = [256.0 * 256.0 * 256.0, 256.0 * 256.0, 256.0, 1.0];
const PACK_UPSCALE: f64 = 256.0 / 255.0;
const UNPACK_DOWNSCALE: f64 = 255.0 / 256.0;
const SHIFT_RIGHT_8: f64 = 1.0 / 256.0;

/// Packs `depth` into four 8-bit channels.
///
/// `depth` is clamped to `[0, MAX_PACKED_DEPTH]`. NaN is packed as zero.
pub fn pack_depth(depth: Real) -> [u8; 4] {
    let depth = if depth.is_nan() {
        0.0
    } else {
        depth.clamp(0.0, MAX_PACKED_DEPTH) as f64
    };

    let mut channels = PACK_FACTORS.map(|factor| (depth * factor).fract());
    for i in (1..4).rev() {
        channels[i] -= channels[i - 1] * SHIFT_RIGHT_8;
    }

    channels.map(|c| (c * PACK_UPSCALE * 255.0).round().clamp(0.0, 255.0) as u8)
}

/// Recovers the depth packed by [`pack_depth`].
pub fn unpack_depth(rgba: [u8; 4]) -> Real {
    let depth: f64 = rgba
        .iter()
        .zip(PACK_FACTORS)
        .map(|(c, factor)| *c as f64 / 255.0 * UNPACK_DOWNSCALE / factor)
        .sum();
    depth as Real
}
