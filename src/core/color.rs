use nalgebra::Vector3;

/// Scale applied to unit-range lighting results to reach byte range.
pub const BYTE_RANGE: f32 = 255.0;

/// Converts a byte-range color to 8-bit channels (clamped, truncated).
#[inline]
pub fn to_rgb8(color: &Vector3<f32>) -> [u8; 3] {
    [
        channel_to_u8(color.x),
        channel_to_u8(color.y),
        channel_to_u8(color.z),
    ]
}

#[inline]
fn channel_to_u8(value: f32) -> u8 {
    // NaN clamps to NaN and casts to 0
    value.clamp(0.0, BYTE_RANGE) as u8
}

/// A gray color with every channel set to `value`.
#[inline]
pub fn grayscale(value: f32) -> Vector3<f32> {
    Vector3::new(value, value, value)
}
