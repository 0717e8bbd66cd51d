// Gameplay tuning - every constant the simulation reads
//
// All gameplay numbers live in one immutable struct that is handed to the
// match session at construction. Nothing in the simulation reads a global,
// so tests can run the same code under varied tunings.

use glam::Vec2;

/// Immutable gameplay configuration
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    // Integration
    /// Downward acceleration per tick (screen coordinates, y grows down)
    pub gravity: f32,
    /// Gravity while fast-falling
    pub fast_fall_gravity: f32,
    /// Horizontal velocity multiplier per tick on the ground
    pub ground_friction: f32,
    /// Horizontal velocity multiplier per tick in the air
    pub air_friction: f32,
    /// Grounded speeds below this snap to zero
    pub stop_threshold: f32,
    /// Grounded speeds above this count as running
    pub run_threshold: f32,
    /// Collision sub-steps per tick
    pub collision_substeps: u32,
    /// Initial upward speed of a grounded jump
    pub jump_force: f32,
    /// Initial upward speed of the air jump
    pub double_jump_force: f32,
    /// Horizontal velocity multiplier applied once per tick while attacking
    pub attack_drift_damping: f32,

    // Damage and knockback
    /// Accumulated damage cap
    pub max_damage: f32,
    /// Couples defender percent into knockback magnitude
    pub damage_scaling: f32,
    /// Hitstun frames per point of knockback magnitude
    pub hitstun_multiplier: f32,
    /// Vertical knockback speed cap
    pub max_knockback_y: f32,
    /// Hurtbox size as a fraction of the visual rectangle
    pub hurtbox_scale: f32,
    /// Hits dealing at least this much damage request a particle burst
    pub heavy_hit_threshold: f32,

    // Shield
    pub max_shield_health: f32,
    /// Shield health restored per tick while shielding
    pub shield_regen_rate: f32,
    /// Shield health lost per point of blocked damage
    pub shield_damage_multiplier: f32,
    /// Base hitstun applied to a blocking defender
    pub shield_stun_frames: u32,
    /// Hitstun applied on shield break
    pub shield_break_stun: u32,
    /// Upward speed applied on shield break
    pub shield_break_kick: f32,

    // Dodge
    pub dodge_duration: u32,
    /// First invincible frame of a dodge (inclusive)
    pub dodge_invincible_start: u32,
    /// Last invincible frame of a dodge (inclusive)
    pub dodge_invincible_end: u32,
    pub dodge_cooldown: u32,
    /// Horizontal speed of forward/back rolls
    pub roll_speed: f32,
    /// Speed of the directional air dodge
    pub air_dodge_speed: f32,

    // Specials
    pub neutral_special_cooldown: u32,
    pub side_special_cooldown: u32,
    pub up_special_cooldown: u32,
    pub down_special_cooldown: u32,
    /// Stored velocity of the neutral-special projectile box
    pub projectile_speed: f32,
    /// Horizontal lunge applied by side special
    pub side_special_lunge: f32,
    /// Upward boost applied by up special
    pub up_special_boost: f32,

    // Smash charge
    /// Frames of charge that reach the full multiplier
    pub charge_frames: f32,
    /// Fraction added to the multiplier at full charge
    pub max_charge_fraction: f32,

    // Grab
    /// Maximum frames a grab can be held before auto-release
    pub grab_hold_frames: u32,

    // Stage bounds
    pub blast_left: f32,
    pub blast_right: f32,
    pub blast_top: f32,
    pub blast_bottom: f32,
    /// Top-center respawn point (top-left corner of the respawned body)
    pub respawn_point: Vec2,
    /// Invincibility frames granted on respawn
    pub respawn_invincibility: u32,
    /// Stocks each character starts the match with
    pub starting_stocks: u32,

    // Death animation
    pub death_duration: u32,
    /// Rotation per tick during the death arc (radians)
    pub death_spin: f32,
    /// Minimum upward launch speed of the death arc
    pub death_min_launch: f32,

    // Cosmetics
    pub hit_effect_lifetime: u32,
    pub hit_particle_count: u32,
    pub death_particle_count: u32,
}

/// Default tuning, balanced for a 1280x720 stage at 60 ticks per second
pub const DEFAULT_TUNING: Tuning = Tuning {
    gravity: 0.8,
    fast_fall_gravity: 1.6,
    ground_friction: 0.9,
    air_friction: 0.98,
    stop_threshold: 0.1,
    run_threshold: 0.5,
    collision_substeps: 4,
    jump_force: 16.0,
    double_jump_force: 14.0,
    attack_drift_damping: 0.5,

    max_damage: 300.0,
    damage_scaling: 0.02,
    hitstun_multiplier: 1.5,
    max_knockback_y: 20.0,
    hurtbox_scale: 0.85,
    heavy_hit_threshold: 10.0,

    max_shield_health: 50.0,
    shield_regen_rate: 0.15,
    shield_damage_multiplier: 0.7,
    shield_stun_frames: 4,
    shield_break_stun: 120,
    shield_break_kick: 8.0,

    dodge_duration: 20,
    dodge_invincible_start: 3,
    dodge_invincible_end: 15,
    dodge_cooldown: 45,
    roll_speed: 8.0,
    air_dodge_speed: 10.0,

    neutral_special_cooldown: 60,
    side_special_cooldown: 90,
    up_special_cooldown: 120,
    down_special_cooldown: 150,
    projectile_speed: 12.0,
    side_special_lunge: 10.0,
    up_special_boost: 18.0,

    charge_frames: 60.0,
    max_charge_fraction: 0.5,

    grab_hold_frames: 90,

    blast_left: -200.0,
    blast_right: 1480.0,
    blast_top: -300.0,
    blast_bottom: 920.0,
    respawn_point: Vec2::new(608.0, 80.0),
    respawn_invincibility: 120,
    starting_stocks: 3,

    death_duration: 60,
    death_spin: 0.25,
    death_min_launch: 6.0,

    hit_effect_lifetime: 18,
    hit_particle_count: 12,
    death_particle_count: 24,
};

impl Default for Tuning {
    fn default() -> Self {
        DEFAULT_TUNING
    }
}

/// Tuning validation errors
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("{0} must be positive")]
    NonPositive(&'static str),

    #[error("{0} must be within (0, 1]")]
    NotAFraction(&'static str),

    #[error("dodge invincibility window {start}..={end} must fit inside the dodge duration {duration}")]
    BadDodgeWindow { start: u32, end: u32, duration: u32 },

    #[error("blast zone is inverted: left {left} / right {right}, top {top} / bottom {bottom}")]
    BadBlastZone {
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
    },
}

impl Tuning {
    /// Check the configuration for values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positives: [(&'static str, f32); 6] = [
            ("gravity", self.gravity),
            ("fast_fall_gravity", self.fast_fall_gravity),
            ("max_damage", self.max_damage),
            ("max_shield_health", self.max_shield_health),
            ("jump_force", self.jump_force),
            ("max_knockback_y", self.max_knockback_y),
        ];
        for (name, value) in positives {
            if value <= 0.0 {
                return Err(TuningError::NonPositive(name));
            }
        }
        if self.collision_substeps == 0 {
            return Err(TuningError::NonPositive("collision_substeps"));
        }
        if self.hurtbox_scale <= 0.0 || self.hurtbox_scale > 1.0 {
            return Err(TuningError::NotAFraction("hurtbox_scale"));
        }
        if self.dodge_invincible_start > self.dodge_invincible_end
            || self.dodge_invincible_end > self.dodge_duration
        {
            return Err(TuningError::BadDodgeWindow {
                start: self.dodge_invincible_start,
                end: self.dodge_invincible_end,
                duration: self.dodge_duration,
            });
        }
        if self.blast_left >= self.blast_right || self.blast_top >= self.blast_bottom {
            return Err(TuningError::BadBlastZone {
                left: self.blast_left,
                right: self.blast_right,
                top: self.blast_top,
                bottom: self.blast_bottom,
            });
        }
        Ok(())
    }
}
