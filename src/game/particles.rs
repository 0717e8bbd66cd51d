// Particle collaborator
//
// Decorative only: the simulation requests bursts through
// `CombatEvent::ParticleBurst` and never reads anything back. The burst
// pattern is a deterministic radial fan so headless runs stay
// reproducible.

use glam::Vec2;

use super::characters::Color;
use super::events::CombatEvent;

/// A single decaying particle
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Remaining life in ticks
    pub life: u32,
    /// Total lifetime (for fade interpolation)
    pub max_life: u32,
    pub color: Color,
}

impl Particle {
    /// Remaining life as a 1.0 -> 0.0 fraction
    pub fn fade(&self) -> f32 {
        if self.max_life == 0 {
            return 0.0;
        }
        self.life as f32 / self.max_life as f32
    }
}

/// Create `count` particles fanning out radially from `position`
pub fn spawn_burst(position: Vec2, count: u32, color: Color) -> Vec<Particle> {
    let count = count.max(1);
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * std::f32::consts::TAU;
            let speed = 2.0 + (i % 3) as f32 * 1.5;
            let life = 20 + (i % 4) * 6;
            Particle {
                position,
                velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
                life,
                max_life: life,
                color,
            }
        })
        .collect()
}

/// Pool of live particles, aged out once per tick
#[derive(Debug, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self {
            particles: Vec::with_capacity(128),
        }
    }

    /// React to a drained combat event; ignores everything that is not a
    /// burst request
    pub fn handle_event(&mut self, event: &CombatEvent) {
        if let CombatEvent::ParticleBurst {
            position,
            count,
            color,
        } = event
        {
            self.particles.extend(spawn_burst(*position, *count, *color));
        }
    }

    /// Advance all particles one tick under light gravity
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.velocity.y += 0.1;
            particle.position += particle.velocity;
            particle.life = particle.life.saturating_sub(1);
        }
        self.particles.retain(|particle| particle.life > 0);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
