// Sub-stepped platform collision
//
// Characters move fast enough per tick to pass entirely through a thin
// platform, so each tick's displacement is divided into equal sub-steps
// and collision is re-tested after every sub-step. Platforms are solid
// from above and from the sides; a body moving upward passes through
// (drop-through platforms).

use glam::Vec2;

use super::rect::Rect;

/// A static stage platform. The platform list is read-only per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    rect: Rect,
}

impl Platform {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// What a sweep ran into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepResult {
    /// Landed on top of a platform this tick
    pub landed: bool,
    /// Clamped against a platform side this tick
    pub hit_wall: bool,
}

/// Advance a moving AABB through the platform list in `substeps` equal
/// sub-steps, resolving collisions after each one.
///
/// A downward-moving body whose bottom edge was at or above a platform
/// top is snapped onto the platform and stops falling. Horizontal
/// overlap clamps the body to the platform edge and zeroes horizontal
/// velocity. `position` is the body's top-left corner; both `position`
/// and `velocity` are updated in place.
pub fn sweep(
    position: &mut Vec2,
    velocity: &mut Vec2,
    size: Vec2,
    platforms: &[Platform],
    substeps: u32,
) -> SweepResult {
    const SNAP_EPSILON: f32 = 1e-3;

    let steps = substeps.max(1);
    let mut step = *velocity / steps as f32;
    let mut result = SweepResult::default();

    for _ in 0..steps {
        // Horizontal axis first, so a body sliding along a floor does
        // not register its own floor as a wall.
        position.x += step.x;
        for platform in platforms {
            let rect = platform.rect();
            if !body_rect(*position, size).overlaps(&rect) {
                continue;
            }
            if step.x > 0.0 {
                position.x = rect.x - size.x;
            } else if step.x < 0.0 {
                position.x = rect.right();
            } else {
                continue;
            }
            velocity.x = 0.0;
            step.x = 0.0;
            result.hit_wall = true;
        }

        let prev_bottom = position.y + size.y;
        position.y += step.y;
        for platform in platforms {
            let rect = platform.rect();
            if !body_rect(*position, size).overlaps(&rect) {
                continue;
            }
            if step.y > 0.0 && prev_bottom <= rect.y + SNAP_EPSILON {
                position.y = rect.y - size.y;
                velocity.y = 0.0;
                step.y = 0.0;
                result.landed = true;
            }
        }
    }

    result
}

fn body_rect(position: Vec2, size: Vec2) -> Rect {
    Rect::new(position.x, position.y, size.x, size.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SUBSTEPS: u32 = 4;

    fn floor() -> Vec<Platform> {
        vec![Platform::new(0.0, 100.0, 400.0, 20.0)]
    }

    #[test]
    fn test_slow_fall_lands_on_platform() {
        let mut pos = Vec2::new(50.0, 50.0);
        let mut vel = Vec2::new(0.0, 5.0);
        let size = Vec2::new(20.0, 30.0);

        let mut landed = false;
        for _ in 0..20 {
            landed |= sweep(&mut pos, &mut vel, size, &floor(), SUBSTEPS).landed;
        }

        assert!(landed);
        assert_relative_eq!(pos.y, 70.0); // bottom rests on y = 100
        assert_eq!(vel.y, 0.0);
    }

    #[test]
    fn test_high_velocity_does_not_tunnel_through_thin_platform() {
        // 50 px/tick through a 20 px platform: a single-step integrator
        // would jump clean past it.
        let mut pos = Vec2::new(50.0, 40.0);
        let mut vel = Vec2::new(0.0, 50.0);
        let size = Vec2::new(20.0, 30.0);

        let result = sweep(&mut pos, &mut vel, size, &floor(), SUBSTEPS);

        assert!(result.landed);
        assert_relative_eq!(pos.y, 70.0);
        assert_eq!(vel.y, 0.0);
    }

    #[test]
    fn test_single_step_would_tunnel() {
        // The same fall with substeps = 1 passes straight through,
        // which is exactly why the sweep is sub-stepped.
        let mut pos = Vec2::new(50.0, 40.0);
        let mut vel = Vec2::new(0.0, 50.0);
        let size = Vec2::new(20.0, 30.0);

        let result = sweep(&mut pos, &mut vel, size, &floor(), 1);

        assert!(!result.landed);
        assert!(pos.y > 100.0);
    }

    #[test]
    fn test_wall_clamp_from_left() {
        let wall = vec![Platform::new(100.0, 0.0, 40.0, 200.0)];
        let mut pos = Vec2::new(60.0, 50.0);
        let mut vel = Vec2::new(30.0, 0.0);
        let size = Vec2::new(20.0, 30.0);

        let result = sweep(&mut pos, &mut vel, size, &wall, SUBSTEPS);

        assert!(result.hit_wall);
        assert_relative_eq!(pos.x, 80.0); // right edge flush at x = 100
        assert_eq!(vel.x, 0.0);
    }

    #[test]
    fn test_wall_clamp_from_right() {
        let wall = vec![Platform::new(100.0, 0.0, 40.0, 200.0)];
        let mut pos = Vec2::new(160.0, 50.0);
        let mut vel = Vec2::new(-30.0, 0.0);
        let size = Vec2::new(20.0, 30.0);

        let result = sweep(&mut pos, &mut vel, size, &wall, SUBSTEPS);

        assert!(result.hit_wall);
        assert_relative_eq!(pos.x, 140.0);
        assert_eq!(vel.x, 0.0);
    }

    #[test]
    fn test_upward_motion_passes_through() {
        let mut pos = Vec2::new(50.0, 130.0);
        let mut vel = Vec2::new(0.0, -40.0);
        let size = Vec2::new(20.0, 30.0);

        let result = sweep(&mut pos, &mut vel, size, &floor(), SUBSTEPS);

        assert!(!result.landed);
        assert_relative_eq!(pos.y, 90.0);
        assert_eq!(vel.y, -40.0);
    }

    #[test]
    fn test_grounded_body_snaps_every_tick() {
        // A body resting on the floor with a little gravity applied
        // re-lands each tick instead of sinking in.
        let mut pos = Vec2::new(50.0, 70.0);
        let mut vel = Vec2::new(0.0, 0.8);
        let size = Vec2::new(20.0, 30.0);

        let result = sweep(&mut pos, &mut vel, size, &floor(), SUBSTEPS);

        assert!(result.landed);
        assert_relative_eq!(pos.y, 70.0);
    }
}
