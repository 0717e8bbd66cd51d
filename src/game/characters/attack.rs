// Attack catalog and hitbox data
//
// Every attack method is a guarded constructor of an attack session: it
// checks `can_attack` plus a state precondition (grounded-only,
// airborne-only, or running-only for the dash attack), resets any prior
// session, and appends one or more AttackBox instances positioned
// relative to the owner. Guards that fail make the call a no-op so
// input and AI layers can call unconditionally.

use glam::Vec2;

use crate::engine::physics::Rect;

use super::character::Character;
use super::state::CharacterState;

/// Which move an attack session belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackKind {
    Jab,
    ForwardTilt,
    UpTilt,
    DownTilt,
    DashAttack,
    ForwardSmash,
    UpSmash,
    DownSmash,
    NeutralAir,
    ForwardAir,
    BackAir,
    UpAir,
    DownAir,
    NeutralSpecial,
    SideSpecial,
    UpSpecial,
    DownSpecial,
    Grab,
}

impl AttackKind {
    /// Aerial attacks cancel back to idle when the owner lands
    pub fn is_aerial(&self) -> bool {
        matches!(
            self,
            Self::NeutralAir | Self::ForwardAir | Self::BackAir | Self::UpAir | Self::DownAir
        )
    }
}

/// How a hitbox resolves on contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackBoxKind {
    Normal,
    Projectile,
    Reflector,
    Grab,
}

/// A single hitbox inside an attack session.
///
/// The rectangle is re-anchored to the owner every tick; `anchor` is the
/// offset from the owner's top-left corner when facing right and is
/// mirrored when facing left. Projectile boxes carry a velocity of their
/// own, but the session only ever re-anchors them like every other box,
/// so the stored velocity is never integrated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackBox {
    pub rect: Rect,
    pub damage: f32,
    pub base_knockback: f32,
    pub knockback_scaling: f32,
    /// Knockback angle in degrees (0 = away from attacker, 90 = up)
    pub angle: f32,
    /// First attack frame the box is active on
    pub start_frame: u32,
    /// Number of frames the box stays active
    pub active_frames: u32,
    pub kind: AttackBoxKind,
    /// Stored velocity for projectile boxes
    pub velocity: Vec2,
    /// Downward-knockback variant tag (down-air)
    pub can_spike: bool,
    /// Extra hitstun dealt to a blocking defender
    pub shield_stun: u32,
    anchor: Vec2,
}

impl AttackBox {
    /// Create a box at `anchor` (facing-right offset from the owner's
    /// top-left) with the given size and strike parameters. The window
    /// defaults to the whole session; `shield_stun` defaults to half
    /// the damage.
    pub fn new(
        anchor: Vec2,
        size: Vec2,
        damage: f32,
        base_knockback: f32,
        knockback_scaling: f32,
        angle: f32,
    ) -> Self {
        Self {
            rect: Rect::new(anchor.x, anchor.y, size.x, size.y),
            damage,
            base_knockback,
            knockback_scaling,
            angle,
            start_frame: 0,
            active_frames: u32::MAX,
            kind: AttackBoxKind::Normal,
            velocity: Vec2::ZERO,
            can_spike: false,
            shield_stun: (damage * 0.5) as u32,
            anchor,
        }
    }

    /// Restrict the box to an active window of the attack session
    pub fn window(mut self, start_frame: u32, active_frames: u32) -> Self {
        self.start_frame = start_frame;
        self.active_frames = active_frames;
        self
    }

    /// Mark as a projectile carrying its own velocity
    pub fn projectile(mut self, velocity: Vec2) -> Self {
        self.kind = AttackBoxKind::Projectile;
        self.velocity = velocity;
        self
    }

    /// Mark as a reflector box
    pub fn reflector(mut self) -> Self {
        self.kind = AttackBoxKind::Reflector;
        self
    }

    /// Mark as a grab box
    pub fn grab(mut self) -> Self {
        self.kind = AttackBoxKind::Grab;
        self
    }

    /// Mark as a spike (down-air)
    pub fn spike(mut self) -> Self {
        self.can_spike = true;
        self
    }

    /// Override the blocked-hit stun bonus
    pub fn shield_stun(mut self, frames: u32) -> Self {
        self.shield_stun = frames;
        self
    }

    /// Scale damage and knockback by a smash charge multiplier
    pub fn charged(mut self, multiplier: f32) -> Self {
        self.damage *= multiplier;
        self.base_knockback *= multiplier;
        self
    }

    /// Check whether the box is live on the given attack frame
    pub fn is_active(&self, attack_frame: u32) -> bool {
        attack_frame >= self.start_frame
            && attack_frame - self.start_frame < self.active_frames
    }

    /// Re-anchor the rectangle to the owner's position and facing
    pub fn anchor_to(&mut self, owner_position: Vec2, owner_width: f32, facing_right: bool) {
        self.rect.x = if facing_right {
            owner_position.x + self.anchor.x
        } else {
            owner_position.x + owner_width - self.anchor.x - self.rect.w
        };
        self.rect.y = owner_position.y + self.anchor.y;
    }
}

/// Grab-derived throws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThrowKind {
    Forward,
    Back,
    Up,
    Down,
}

/// Fixed strike parameters of a throw
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThrowSpec {
    pub damage: f32,
    pub base_knockback: f32,
    pub knockback_scaling: f32,
    pub angle: f32,
}

pub(crate) const fn throw_spec(kind: ThrowKind) -> ThrowSpec {
    match kind {
        ThrowKind::Forward => ThrowSpec {
            damage: 8.0,
            base_knockback: 9.0,
            knockback_scaling: 0.16,
            angle: 40.0,
        },
        ThrowKind::Back => ThrowSpec {
            damage: 10.0,
            base_knockback: 10.0,
            knockback_scaling: 0.18,
            angle: 140.0,
        },
        ThrowKind::Up => ThrowSpec {
            damage: 7.0,
            base_knockback: 11.0,
            knockback_scaling: 0.2,
            angle: 85.0,
        },
        ThrowKind::Down => ThrowSpec {
            damage: 6.0,
            base_knockback: 7.0,
            knockback_scaling: 0.12,
            angle: 300.0,
        },
    }
}

/// Damage dealt by a pummel while holding a grab
pub(crate) const PUMMEL_DAMAGE: f32 = 2.0;

// The catalog. Anchors and sizes are in multiples of the owner's body so
// roster entries with different dimensions keep proportional reach.
impl Character {
    /// Quick grounded poke
    pub fn jab(&mut self) {
        if !self.can_begin_ground_attack() {
            return;
        }
        let (w, h) = self.body();
        self.begin_attack(AttackKind::Jab, 14);
        self.add_box(
            AttackBox::new(Vec2::new(w, h * 0.2), Vec2::new(w * 0.9, h * 0.4), 3.0, 2.0, 0.05, 0.0)
                .window(2, 6),
        );
    }

    /// Grounded forward poke with more reach
    pub fn forward_tilt(&mut self) {
        if !self.can_begin_ground_attack() {
            return;
        }
        let (w, h) = self.body();
        self.begin_attack(AttackKind::ForwardTilt, 24);
        self.add_box(
            AttackBox::new(
                Vec2::new(w, h * 0.15),
                Vec2::new(w * 1.2, h * 0.5),
                8.0,
                6.0,
                0.15,
                20.0,
            )
            .window(6, 8),
        );
    }

    /// Grounded anti-air swipe
    pub fn up_tilt(&mut self) {
        if !self.can_begin_ground_attack() {
            return;
        }
        let (w, h) = self.body();
        self.begin_attack(AttackKind::UpTilt, 22);
        self.add_box(
            AttackBox::new(
                Vec2::new(0.0, -h * 0.45),
                Vec2::new(w, h * 0.5),
                7.0,
                7.0,
                0.18,
                80.0,
            )
            .window(5, 9),
        );
    }

    /// Low grounded sweep
    pub fn down_tilt(&mut self) {
        if !self.can_begin_ground_attack() {
            return;
        }
        let (w, h) = self.body();
        self.begin_attack(AttackKind::DownTilt, 20);
        self.add_box(
            AttackBox::new(
                Vec2::new(w * 0.9, h * 0.75),
                Vec2::new(w * 1.1, h * 0.25),
                6.0,
                5.0,
                0.12,
                30.0,
            )
            .window(4, 7),
        );
    }

    /// Running-only lunge
    pub fn dash_attack(&mut self) {
        if !self.can_attack() || self.state() != CharacterState::Running || self.is_grabbing() {
            return;
        }
        let (w, h) = self.body();
        self.begin_attack(AttackKind::DashAttack, 28);
        self.add_box(
            AttackBox::new(
                Vec2::new(w, h * 0.3),
                Vec2::new(w * 1.1, h * 0.6),
                9.0,
                7.0,
                0.2,
                45.0,
            )
            .window(5, 12),
        );
    }

    /// Chargeable grounded finisher
    pub fn forward_smash(&mut self, charge_time: f32) {
        if !self.can_begin_ground_attack() {
            return;
        }
        let multiplier = self.charge_multiplier(charge_time);
        let (w, h) = self.body();
        self.begin_attack(AttackKind::ForwardSmash, 40);
        self.add_box(
            AttackBox::new(
                Vec2::new(w, h * 0.1),
                Vec2::new(w * 1.5, h * 0.6),
                16.0,
                11.0,
                0.3,
                30.0,
            )
            .charged(multiplier)
            .window(14, 8),
        );
    }

    /// Chargeable anti-air finisher
    pub fn up_smash(&mut self, charge_time: f32) {
        if !self.can_begin_ground_attack() {
            return;
        }
        let multiplier = self.charge_multiplier(charge_time);
        let (w, h) = self.body();
        self.begin_attack(AttackKind::UpSmash, 42);
        self.add_box(
            AttackBox::new(
                Vec2::new(-w * 0.1, -h * 0.6),
                Vec2::new(w * 1.2, h * 0.6),
                15.0,
                12.0,
                0.3,
                85.0,
            )
            .charged(multiplier)
            .window(14, 10),
        );
    }

    /// Chargeable two-sided ground sweep. The only catalog entry with
    /// two simultaneous boxes.
    pub fn down_smash(&mut self, charge_time: f32) {
        if !self.can_begin_ground_attack() {
            return;
        }
        let multiplier = self.charge_multiplier(charge_time);
        let (w, h) = self.body();
        self.begin_attack(AttackKind::DownSmash, 44);
        self.add_box(
            AttackBox::new(
                Vec2::new(w, h * 0.6),
                Vec2::new(w, h * 0.4),
                14.0,
                10.0,
                0.28,
                30.0,
            )
            .charged(multiplier)
            .window(12, 10),
        );
        self.add_box(
            AttackBox::new(
                Vec2::new(-w, h * 0.6),
                Vec2::new(w, h * 0.4),
                14.0,
                10.0,
                0.28,
                150.0,
            )
            .charged(multiplier)
            .window(12, 10),
        );
    }

    /// Aerial hit surrounding the body
    pub fn neutral_air(&mut self) {
        if !self.can_begin_air_attack() {
            return;
        }
        let (w, h) = self.body();
        self.begin_attack(AttackKind::NeutralAir, 24);
        self.add_box(
            AttackBox::new(
                Vec2::new(-w * 0.25, -h * 0.1),
                Vec2::new(w * 1.5, h * 1.2),
                7.0,
                6.0,
                0.15,
                45.0,
            )
            .window(3, 14),
        );
    }

    /// Aerial forward strike
    pub fn forward_air(&mut self) {
        if !self.can_begin_air_attack() {
            return;
        }
        let (w, h) = self.body();
        self.begin_attack(AttackKind::ForwardAir, 26);
        self.add_box(
            AttackBox::new(Vec2::new(w, h * 0.1), Vec2::new(w, h * 0.6), 10.0, 8.0, 0.22, 40.0)
                .window(6, 10),
        );
    }

    /// Aerial reverse strike, sends the defender backward
    pub fn back_air(&mut self) {
        if !self.can_begin_air_attack() {
            return;
        }
        let (w, h) = self.body();
        self.begin_attack(AttackKind::BackAir, 24);
        self.add_box(
            AttackBox::new(
                Vec2::new(-w * 0.9, h * 0.15),
                Vec2::new(w * 0.9, h * 0.5),
                11.0,
                9.0,
                0.25,
                145.0,
            )
            .window(5, 8),
        );
    }

    /// Aerial overhead strike
    pub fn up_air(&mut self) {
        if !self.can_begin_air_attack() {
            return;
        }
        let (w, h) = self.body();
        self.begin_attack(AttackKind::UpAir, 22);
        self.add_box(
            AttackBox::new(Vec2::new(0.0, -h * 0.5), Vec2::new(w, h * 0.5), 9.0, 8.0, 0.2, 85.0)
                .window(4, 9),
        );
    }

    /// Downward aerial spike
    pub fn down_air(&mut self) {
        if !self.can_begin_air_attack() {
            return;
        }
        let (w, h) = self.body();
        self.begin_attack(AttackKind::DownAir, 28);
        self.add_box(
            AttackBox::new(
                Vec2::new(w * 0.1, h),
                Vec2::new(w * 0.8, h * 0.5),
                12.0,
                6.0,
                0.25,
                270.0,
            )
            .spike()
            .window(6, 12),
        );
    }

    /// Grounded projectile special
    pub fn neutral_special(&mut self) {
        if !self.can_begin_ground_attack() || !self.cooldowns.neutral.is_ready() {
            return;
        }
        let (w, h) = self.body();
        let speed = self.tuning.projectile_speed;
        let direction = if self.facing_right { 1.0 } else { -1.0 };
        self.begin_attack(AttackKind::NeutralSpecial, 30);
        self.add_box(
            AttackBox::new(
                Vec2::new(w, h * 0.3),
                Vec2::new(w * 0.4, w * 0.4),
                6.0,
                5.0,
                0.1,
                10.0,
            )
            .projectile(Vec2::new(speed * direction, 0.0))
            .window(8, 18),
        );
        self.cooldowns.neutral.arm();
    }

    /// Grounded lunging special
    pub fn side_special(&mut self) {
        if !self.can_begin_ground_attack() || !self.cooldowns.side.is_ready() {
            return;
        }
        let (w, h) = self.body();
        let lunge = self.tuning.side_special_lunge;
        self.begin_attack(AttackKind::SideSpecial, 32);
        self.velocity.x = if self.facing_right { lunge } else { -lunge };
        self.add_box(
            AttackBox::new(
                Vec2::new(w, h * 0.2),
                Vec2::new(w * 1.3, h * 0.6),
                11.0,
                9.0,
                0.22,
                40.0,
            )
            .window(6, 14),
        );
        self.cooldowns.side.arm();
    }

    /// Airborne recovery special with an upward boost
    pub fn up_special(&mut self) {
        if !self.can_begin_air_attack() || !self.cooldowns.up.is_ready() {
            return;
        }
        let (w, h) = self.body();
        let boost = self.tuning.up_special_boost;
        self.begin_attack(AttackKind::UpSpecial, 34);
        self.velocity.y = -boost;
        self.add_box(
            AttackBox::new(
                Vec2::new(-w * 0.1, -h * 0.3),
                Vec2::new(w * 1.2, h * 0.8),
                8.0,
                8.0,
                0.18,
                80.0,
            )
            .window(4, 16),
        );
        self.cooldowns.up.arm();
    }

    /// Grounded reflector special
    pub fn down_special(&mut self) {
        if !self.can_begin_ground_attack() || !self.cooldowns.down.is_ready() {
            return;
        }
        let (w, h) = self.body();
        self.begin_attack(AttackKind::DownSpecial, 36);
        self.add_box(
            AttackBox::new(
                Vec2::new(-w * 0.3, -h * 0.1),
                Vec2::new(w * 1.6, h * 1.2),
                5.0,
                8.0,
                0.15,
                60.0,
            )
            .reflector()
            .window(4, 20),
        );
        self.cooldowns.down.arm();
    }

    /// Grounded grab attempt
    pub fn grab(&mut self) {
        if !self.can_begin_ground_attack() {
            return;
        }
        let (w, h) = self.body();
        self.begin_attack(AttackKind::Grab, 12);
        self.add_box(
            AttackBox::new(Vec2::new(w, h * 0.2), Vec2::new(w * 0.7, h * 0.5), 0.0, 0.0, 0.0, 0.0)
                .grab()
                .window(4, 4),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_active_window() {
        let hitbox =
            AttackBox::new(Vec2::ZERO, Vec2::new(10.0, 10.0), 5.0, 5.0, 0.1, 0.0).window(3, 4);
        assert!(!hitbox.is_active(2));
        assert!(hitbox.is_active(3));
        assert!(hitbox.is_active(6));
        assert!(!hitbox.is_active(7));
    }

    #[test]
    fn test_box_anchor_mirrors_with_facing() {
        let mut hitbox = AttackBox::new(
            Vec2::new(48.0, 10.0),
            Vec2::new(40.0, 20.0),
            5.0,
            5.0,
            0.1,
            0.0,
        );
        let owner = Vec2::new(100.0, 200.0);

        hitbox.anchor_to(owner, 48.0, true);
        assert_eq!(hitbox.rect.x, 148.0); // in front, to the right
        assert_eq!(hitbox.rect.y, 210.0);

        hitbox.anchor_to(owner, 48.0, false);
        assert_eq!(hitbox.rect.x, 60.0); // in front, to the left
        assert_eq!(hitbox.rect.y, 210.0);
    }

    #[test]
    fn test_charged_scales_damage_and_knockback() {
        let hitbox = AttackBox::new(Vec2::ZERO, Vec2::ONE, 10.0, 8.0, 0.2, 0.0).charged(1.5);
        assert_eq!(hitbox.damage, 15.0);
        assert_eq!(hitbox.base_knockback, 12.0);
        assert_eq!(hitbox.knockback_scaling, 0.2);
    }

    #[test]
    fn test_builder_tags() {
        let projectile = AttackBox::new(Vec2::ZERO, Vec2::ONE, 6.0, 5.0, 0.1, 0.0)
            .projectile(Vec2::new(12.0, 0.0));
        assert_eq!(projectile.kind, AttackBoxKind::Projectile);
        assert_eq!(projectile.velocity, Vec2::new(12.0, 0.0));

        let spike = AttackBox::new(Vec2::ZERO, Vec2::ONE, 12.0, 6.0, 0.25, 270.0).spike();
        assert!(spike.can_spike);

        let grab_box = AttackBox::new(Vec2::ZERO, Vec2::ONE, 0.0, 0.0, 0.0, 0.0).grab();
        assert_eq!(grab_box.kind, AttackBoxKind::Grab);
    }

    #[test]
    fn test_default_shield_stun_is_half_damage() {
        let hitbox = AttackBox::new(Vec2::ZERO, Vec2::ONE, 9.0, 5.0, 0.1, 0.0);
        assert_eq!(hitbox.shield_stun, 4);
    }

    #[test]
    fn test_aerial_kinds() {
        assert!(AttackKind::NeutralAir.is_aerial());
        assert!(AttackKind::DownAir.is_aerial());
        assert!(!AttackKind::Jab.is_aerial());
        assert!(!AttackKind::UpSpecial.is_aerial());
    }

    #[test]
    fn test_throw_spec_table() {
        let back = throw_spec(ThrowKind::Back);
        assert!(back.angle > 90.0); // sends the defender backward
        let up = throw_spec(ThrowKind::Up);
        assert!(up.base_knockback > throw_spec(ThrowKind::Down).base_knockback);
    }
}
