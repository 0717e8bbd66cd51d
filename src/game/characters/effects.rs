// Transient hit effects
//
// Purely cosmetic markers spawned where an attack connected. Each
// character owns its own list; the renderer reads them, the simulation
// only ages them out.

use glam::Vec2;

/// A decaying visual marker at a hit location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEffect {
    pub position: Vec2,
    age: u32,
    lifetime: u32,
}

impl HitEffect {
    pub fn new(position: Vec2, lifetime: u32) -> Self {
        Self {
            position,
            age: 0,
            lifetime,
        }
    }

    /// Advance one tick
    pub fn tick(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Remaining life as a 1.0 -> 0.0 fraction, for fade-out rendering
    pub fn fade(&self) -> f32 {
        if self.lifetime == 0 {
            return 0.0;
        }
        1.0 - (self.age as f32 / self.lifetime as f32).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_expires_after_lifetime() {
        let mut effect = HitEffect::new(Vec2::ZERO, 3);
        assert!(!effect.is_expired());
        effect.tick();
        effect.tick();
        assert!(!effect.is_expired());
        effect.tick();
        assert!(effect.is_expired());
    }

    #[test]
    fn test_fade() {
        let mut effect = HitEffect::new(Vec2::ZERO, 10);
        assert_relative_eq!(effect.fade(), 1.0);
        for _ in 0..5 {
            effect.tick();
        }
        assert_relative_eq!(effect.fade(), 0.5);
    }

    #[test]
    fn test_zero_lifetime_is_expired() {
        let effect = HitEffect::new(Vec2::ZERO, 0);
        assert!(effect.is_expired());
        assert_eq!(effect.fade(), 0.0);
    }
}
