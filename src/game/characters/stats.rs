// Character identity stats
//
// Only identity lives here: how a character looks and how fast it runs.
// Everything the combat engine tunes globally (gravity, knockback
// scaling, shield numbers) is in `game::tuning`.

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Per-character identity and body properties
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterStats {
    /// Display color, also used for particle bursts
    pub color: Color,
    /// Visual/collision width in pixels
    pub width: f32,
    /// Visual/collision height in pixels
    pub height: f32,
    /// Horizontal speed set by a movement call (pixels per tick)
    pub move_speed: f32,
}

/// Baseline body used by every character unless a roster entry overrides it
pub const BASE_STATS: CharacterStats = CharacterStats {
    color: [0.9, 0.9, 0.9, 1.0],
    width: 48.0,
    height: 64.0,
    move_speed: 6.0,
};

impl Default for CharacterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl CharacterStats {
    /// Baseline stats with a different display color
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..BASE_STATS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = CharacterStats::default();
        assert_eq!(stats.move_speed, 6.0);
        assert_eq!(stats.width, 48.0);
        assert_eq!(stats.height, 64.0);
    }

    #[test]
    fn test_with_color_keeps_body() {
        let red = CharacterStats::with_color([1.0, 0.2, 0.2, 1.0]);
        assert_eq!(red.width, BASE_STATS.width);
        assert_eq!(red.move_speed, BASE_STATS.move_speed);
        assert_eq!(red.color, [1.0, 0.2, 0.2, 1.0]);
    }
}
