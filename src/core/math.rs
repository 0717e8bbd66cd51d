// Math utilities and helper functions

use glam::Vec2;

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Linear interpolation
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Check if two f32 values are approximately equal
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Unit vector for a knockback angle in degrees, mirrored by facing.
///
/// 0 degrees points straight out in the facing direction, 90 points up,
/// 270 points down. Screen coordinates (y grows downward), so "up" is
/// negative y.
pub fn knockback_direction(angle_deg: f32, facing_right: bool) -> Vec2 {
    let rad = angle_deg.to_radians();
    let sign = if facing_right { 1.0 } else { -1.0 };
    Vec2::new(rad.cos() * sign, -rad.sin())
}
