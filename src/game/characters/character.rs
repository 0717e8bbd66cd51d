// Character entity - the combat simulation core
//
// A character owns its kinematics, the finite state machine, the active
// attack session, cooldowns, the grab handle and its cosmetic hit
// effects. Input/AI layers drive it through the action methods; the
// match session drives it through `update` and `check_hit`. Every
// action method is safe to call unconditionally: a failed guard is a
// no-op, never an error.

use glam::Vec2;
use log::debug;

use crate::core::math::{clamp, knockback_direction, lerp};
use crate::engine::physics::{sweep, Platform, Rect, SweepResult};
use crate::game::events::{CombatEvent, EventQueue};
use crate::game::tuning::Tuning;

use super::attack::{throw_spec, AttackBox, AttackBoxKind, AttackKind, ThrowKind, PUMMEL_DAMAGE};
use super::cooldown::Cooldown;
use super::effects::HitEffect;
use super::state::{transition_allowed, CharacterState};
use super::stats::CharacterStats;

/// Unique identifier for a character. Grab sessions hold this instead of
/// a reference so a character can be reset without dangling anything.
pub type CharacterId = u32;

/// Independently-timed cooldowns for the four specials and the dodge
#[derive(Debug, Clone, Copy)]
pub struct CooldownSet {
    pub neutral: Cooldown,
    pub side: Cooldown,
    pub up: Cooldown,
    pub down: Cooldown,
    pub dodge: Cooldown,
}

impl CooldownSet {
    fn new(tuning: &Tuning) -> Self {
        Self {
            neutral: Cooldown::new(tuning.neutral_special_cooldown),
            side: Cooldown::new(tuning.side_special_cooldown),
            up: Cooldown::new(tuning.up_special_cooldown),
            down: Cooldown::new(tuning.down_special_cooldown),
            dodge: Cooldown::new(tuning.dodge_cooldown),
        }
    }

    fn tick(&mut self) {
        self.neutral.tick();
        self.side.tick();
        self.up.tick();
        self.down.tick();
        self.dodge.tick();
    }
}

/// Kinematics of the death animation, kept apart from the live body so
/// the renderer can draw the tumbling pose while the character itself is
/// out of play
#[derive(Debug, Clone, Copy)]
pub struct DeathAnimation {
    pub frame: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub rotation: f32,
    pub scale: f32,
}

/// A match participant
#[derive(Debug)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub stats: CharacterStats,
    pub(crate) tuning: Tuning,

    // Kinematics
    /// Top-left corner of the visual rectangle
    pub position: Vec2,
    pub velocity: Vec2,
    pub facing_right: bool,
    pub(crate) grounded: bool,
    has_double_jump: bool,
    fast_falling: bool,

    // Combat stats
    damage: f32,
    stocks: u32,
    invincible_frames: u32,
    shield_health: f32,

    // State machine
    state: CharacterState,
    hitstun_frames: u32,
    dodge_frame: u32,

    // Attack session
    attack: Option<AttackKind>,
    attack_frame: u32,
    attack_duration: u32,
    attack_boxes: Vec<AttackBox>,
    can_attack: bool,
    pub(crate) cooldowns: CooldownSet,

    // Grab session
    grabbed: Option<CharacterId>,
    grab_frame: u32,

    death: Option<DeathAnimation>,
    hit_effects: Vec<HitEffect>,
}

impl Character {
    pub fn new(
        id: CharacterId,
        name: &str,
        stats: CharacterStats,
        tuning: Tuning,
        spawn: Vec2,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            stats,
            position: spawn,
            velocity: Vec2::ZERO,
            facing_right: true,
            grounded: false,
            has_double_jump: true,
            fast_falling: false,
            damage: 0.0,
            stocks: tuning.starting_stocks,
            invincible_frames: 0,
            shield_health: tuning.max_shield_health,
            state: CharacterState::Falling,
            hitstun_frames: 0,
            dodge_frame: 0,
            attack: None,
            attack_frame: 0,
            attack_duration: 0,
            attack_boxes: Vec::new(),
            can_attack: true,
            cooldowns: CooldownSet::new(&tuning),
            grabbed: None,
            grab_frame: 0,
            death: None,
            hit_effects: Vec::new(),
            tuning,
        }
    }

    // ---- Action interface (movement) ------------------------------------

    pub fn move_left(&mut self) {
        if !self.state.can_move() || self.is_grabbing() {
            return;
        }
        self.velocity.x = -self.stats.move_speed;
        self.facing_right = false;
    }

    pub fn move_right(&mut self) {
        if !self.state.can_move() || self.is_grabbing() {
            return;
        }
        self.velocity.x = self.stats.move_speed;
        self.facing_right = true;
    }

    /// Grounded jump, or the one air jump if it is still available
    pub fn jump(&mut self) {
        if self.is_grabbing() {
            return;
        }
        if self.state.is_grounded_movement() {
            self.velocity.y = -self.tuning.jump_force;
            self.grounded = false;
            self.change_state(CharacterState::Jumping);
        } else if self.state.is_airborne() && self.has_double_jump {
            self.velocity.y = -self.tuning.double_jump_force;
            self.has_double_jump = false;
            self.change_state(CharacterState::Jumping);
        }
    }

    /// Switch to fast-fall gravity until landing
    pub fn fast_fall(&mut self) {
        if self.state.is_airborne() {
            self.fast_falling = true;
        }
    }

    // ---- Action interface (defense) -------------------------------------

    pub fn shield(&mut self) {
        if !self.state.is_grounded_movement() || self.is_grabbing() {
            return;
        }
        self.velocity = Vec2::ZERO;
        self.change_state(CharacterState::Shielding);
    }

    pub fn release_shield(&mut self) {
        if self.state == CharacterState::Shielding {
            self.change_state(CharacterState::Idle);
        }
    }

    /// Dodge in place
    pub fn spot_dodge(&mut self) {
        if !self.can_begin_ground_dodge() {
            return;
        }
        self.velocity = Vec2::ZERO;
        self.start_dodge();
    }

    /// Roll in the facing direction
    pub fn forward_dodge(&mut self) {
        if !self.can_begin_ground_dodge() {
            return;
        }
        let direction = if self.facing_right { 1.0 } else { -1.0 };
        self.velocity.x = direction * self.tuning.roll_speed;
        self.start_dodge();
    }

    /// Roll away from the facing direction
    pub fn back_dodge(&mut self) {
        if !self.can_begin_ground_dodge() {
            return;
        }
        let direction = if self.facing_right { 1.0 } else { -1.0 };
        self.velocity.x = -direction * self.tuning.roll_speed;
        self.start_dodge();
    }

    /// Directional airborne dodge
    pub fn air_dodge(&mut self, dx: f32, dy: f32) {
        if !self.state.is_airborne() || !self.cooldowns.dodge.is_ready() {
            return;
        }
        self.velocity = Vec2::new(dx, dy).normalize_or_zero() * self.tuning.air_dodge_speed;
        self.start_dodge();
    }

    fn can_begin_ground_dodge(&self) -> bool {
        self.state.is_grounded_movement() && self.cooldowns.dodge.is_ready() && !self.is_grabbing()
    }

    fn start_dodge(&mut self) {
        self.dodge_frame = 0;
        self.change_state(CharacterState::Dodging);
    }

    // ---- Action interface (grab follow-ups) ------------------------------

    /// Strike the held character without releasing the grab
    pub fn pummel(&mut self, target: &mut Character, events: &mut EventQueue) {
        if self.grabbed != Some(target.id) {
            return;
        }
        target.apply_damage(PUMMEL_DAMAGE);
        target.hold_frozen();
        events.push(CombatEvent::Hit {
            attacker: self.id,
            defender: target.id,
            damage: PUMMEL_DAMAGE,
            position: target.rect().center(),
        });
    }

    /// Throw the held character and release the grab
    pub fn throw(&mut self, kind: ThrowKind, target: &mut Character, events: &mut EventQueue) {
        if self.grabbed != Some(target.id) {
            return;
        }
        let spec = throw_spec(kind);
        target.apply_knockback(
            spec.damage,
            spec.base_knockback,
            spec.knockback_scaling,
            knockback_direction(spec.angle, self.facing_right),
        );
        target.apply_damage(spec.damage);
        self.release_grab();
        // The throw replaces whatever was left of the grab attack session
        self.reset_attack();
        self.change_state(CharacterState::Idle);
        debug!("{} threw {}", self.name, target.name);
        events.push(CombatEvent::Throw {
            attacker: self.id,
            defender: target.id,
            kind,
        });
    }

    pub fn forward_throw(&mut self, target: &mut Character, events: &mut EventQueue) {
        self.throw(ThrowKind::Forward, target, events);
    }

    pub fn back_throw(&mut self, target: &mut Character, events: &mut EventQueue) {
        self.throw(ThrowKind::Back, target, events);
    }

    pub fn up_throw(&mut self, target: &mut Character, events: &mut EventQueue) {
        self.throw(ThrowKind::Up, target, events);
    }

    pub fn down_throw(&mut self, target: &mut Character, events: &mut EventQueue) {
        self.throw(ThrowKind::Down, target, events);
    }

    // ---- State machine ---------------------------------------------------

    /// Request a state transition, honoring attack and hitstun
    /// commitment windows. Refused transitions leave the state unchanged.
    pub fn change_state(&mut self, new_state: CharacterState) {
        let attack_committed = self.attack_frame < self.attack_duration;
        let hitstun_committed = self.hitstun_frames > 0;
        if !transition_allowed(self.state, new_state, attack_committed, hitstun_committed) {
            return;
        }
        if self.state != new_state {
            log::trace!("{}: {:?} -> {:?}", self.name, self.state, new_state);
            self.state = new_state;
        }
    }

    /// Advance one simulation tick against the platform list
    pub fn update(&mut self, platforms: &[Platform], events: &mut EventQueue) {
        if self.is_dying() {
            self.update_death(events);
            return;
        }

        self.tick_timers();

        match self.state {
            CharacterState::Idle
            | CharacterState::Running
            | CharacterState::Jumping
            | CharacterState::Falling => self.update_movement(platforms),
            CharacterState::Attacking => self.update_attack(platforms),
            CharacterState::Shielding => self.update_shield(),
            CharacterState::Dodging => self.update_dodge(platforms),
            CharacterState::Hitstun => self.update_hitstun(platforms),
            CharacterState::Dying => {}
        }

        self.check_bounds(events);
    }

    fn tick_timers(&mut self) {
        self.cooldowns.tick();
        self.invincible_frames = self.invincible_frames.saturating_sub(1);
        for effect in &mut self.hit_effects {
            effect.tick();
        }
        self.hit_effects.retain(|effect| !effect.is_expired());
    }

    fn update_movement(&mut self, platforms: &[Platform]) {
        let tuning = self.tuning;
        let gravity = if self.fast_falling {
            tuning.fast_fall_gravity
        } else {
            tuning.gravity
        };
        self.velocity.y += gravity;

        let result = self.integrate(platforms);
        if result.landed {
            self.has_double_jump = true;
            self.fast_falling = false;
            self.hitstun_frames = 0;
        }

        if self.grounded {
            self.velocity.x *= tuning.ground_friction;
            if self.velocity.x.abs() < tuning.stop_threshold {
                self.velocity.x = 0.0;
            }
        } else {
            self.velocity.x *= tuning.air_friction;
        }

        let next = if self.grounded {
            if self.velocity.x.abs() > tuning.run_threshold {
                CharacterState::Running
            } else {
                CharacterState::Idle
            }
        } else if self.velocity.y < 0.0 {
            CharacterState::Jumping
        } else {
            CharacterState::Falling
        };
        self.change_state(next);
    }

    fn update_attack(&mut self, platforms: &[Platform]) {
        let tuning = self.tuning;
        self.velocity.x *= tuning.attack_drift_damping;
        self.velocity.y += tuning.gravity;

        let result = self.integrate(platforms);
        if result.landed {
            self.has_double_jump = true;
            self.fast_falling = false;
        }

        self.attack_frame += 1;

        // Landing cancels an aerial attack outright
        if result.landed && self.attack.map_or(false, |kind| kind.is_aerial()) {
            self.reset_attack();
            self.change_state(CharacterState::Idle);
            return;
        }

        self.update_attack_positions();

        if self.attack_frame >= self.attack_duration {
            self.reset_attack();
            let next = if self.grounded {
                CharacterState::Idle
            } else if self.velocity.y < 0.0 {
                CharacterState::Jumping
            } else {
                CharacterState::Falling
            };
            self.change_state(next);
        }
    }

    fn update_shield(&mut self) {
        self.velocity = Vec2::ZERO;
        self.shield_health = (self.shield_health + self.tuning.shield_regen_rate)
            .min(self.tuning.max_shield_health);
    }

    fn update_dodge(&mut self, platforms: &[Platform]) {
        self.velocity.y += self.tuning.gravity;
        self.integrate(platforms);

        self.dodge_frame += 1;
        if self.dodge_frame >= self.tuning.dodge_duration {
            self.cooldowns.dodge.arm();
            self.change_state(CharacterState::Idle);
        }
    }

    fn update_hitstun(&mut self, platforms: &[Platform]) {
        self.velocity.y += self.tuning.gravity;
        let result = self.integrate(platforms);
        if result.landed {
            self.velocity = Vec2::ZERO;
        }

        self.hitstun_frames = self.hitstun_frames.saturating_sub(1);
        if self.hitstun_frames == 0 {
            let next = if self.grounded {
                CharacterState::Idle
            } else if self.velocity.y < 0.0 {
                CharacterState::Jumping
            } else {
                CharacterState::Falling
            };
            self.change_state(next);
        }
    }

    fn integrate(&mut self, platforms: &[Platform]) -> SweepResult {
        let size = Vec2::new(self.stats.width, self.stats.height);
        let result = sweep(
            &mut self.position,
            &mut self.velocity,
            size,
            platforms,
            self.tuning.collision_substeps,
        );
        self.grounded = result.landed;
        result
    }

    fn check_bounds(&mut self, events: &mut EventQueue) {
        let tuning = self.tuning;
        if self.position.x < tuning.blast_left
            || self.position.x > tuning.blast_right
            || self.position.y < tuning.blast_top
            || self.position.y > tuning.blast_bottom
        {
            self.start_death(events);
        }
    }

    // ---- Attack session --------------------------------------------------

    pub(crate) fn can_begin_ground_attack(&self) -> bool {
        self.can_attack && self.state.is_grounded_movement() && !self.is_grabbing()
    }

    pub(crate) fn can_begin_air_attack(&self) -> bool {
        self.can_attack && self.state.is_airborne()
    }

    /// Start a fresh attack session, clearing any previous one
    pub(crate) fn begin_attack(&mut self, kind: AttackKind, duration: u32) {
        self.reset_attack();
        self.attack = Some(kind);
        self.attack_duration = duration;
        self.attack_frame = 0;
        self.can_attack = false;
        self.change_state(CharacterState::Attacking);
    }

    /// Append a hitbox to the current session, anchored immediately
    pub(crate) fn add_box(&mut self, mut hitbox: AttackBox) {
        hitbox.anchor_to(self.position, self.stats.width, self.facing_right);
        self.attack_boxes.push(hitbox);
    }

    fn reset_attack(&mut self) {
        self.attack = None;
        self.attack_boxes.clear();
        self.attack_frame = 0;
        self.attack_duration = 0;
        self.can_attack = true;
    }

    /// Re-anchor every active hitbox to the owner's position and facing.
    /// Projectile boxes track the owner like every other box; their
    /// stored velocity is carried but never integrated.
    fn update_attack_positions(&mut self) {
        let position = self.position;
        let width = self.stats.width;
        let facing_right = self.facing_right;
        for hitbox in &mut self.attack_boxes {
            hitbox.anchor_to(position, width, facing_right);
        }
    }

    /// Smash charge multiplier: up to +50% after a second of charge.
    /// Negative charge times clamp to zero so an inverted multiplier can
    /// never weaken the attack below its base strength.
    pub(crate) fn charge_multiplier(&self, charge_time: f32) -> f32 {
        let fraction = clamp(
            charge_time / self.tuning.charge_frames,
            0.0,
            self.tuning.max_charge_fraction,
        );
        1.0 + fraction
    }

    pub(crate) fn body(&self) -> (f32, f32) {
        (self.stats.width, self.stats.height)
    }

    // ---- Hit resolution --------------------------------------------------

    /// Test this character's active hitboxes against another character's
    /// hurtbox and resolve the first overlap found. Returns whether a
    /// hit was registered; at most one hit resolves per call.
    pub fn check_hit(&mut self, other: &mut Character, events: &mut EventQueue) -> bool {
        if other.is_invincible() || other.is_dying() {
            return false;
        }
        if self.state != CharacterState::Attacking {
            return false;
        }

        let hurtbox = other.hurtbox();
        let attack_frame = self.attack_frame;
        let Some(hit) = self
            .attack_boxes
            .iter()
            .find(|hitbox| hitbox.is_active(attack_frame) && hitbox.rect.overlaps(&hurtbox))
            .copied()
        else {
            return false;
        };

        match hit.kind {
            AttackBoxKind::Grab => {
                if !other.is_shielding() {
                    self.grabbed = Some(other.id);
                    self.grab_frame = 0;
                    self.pin_held(other);
                    debug!("{} grabbed {}", self.name, other.name);
                    events.push(CombatEvent::GrabStart {
                        attacker: self.id,
                        defender: other.id,
                    });
                }
                true
            }
            _ => {
                if other.is_shielding() {
                    other.shield_block(hit.damage, hit.shield_stun, self.id, events);
                } else {
                    let impact = (hit.rect.center() + hurtbox.center()) * 0.5;
                    other.apply_knockback(
                        hit.damage,
                        hit.base_knockback,
                        hit.knockback_scaling,
                        knockback_direction(hit.angle, self.facing_right),
                    );
                    other.apply_damage(hit.damage);
                    other
                        .hit_effects
                        .push(HitEffect::new(impact, self.tuning.hit_effect_lifetime));
                    events.push(CombatEvent::Hit {
                        attacker: self.id,
                        defender: other.id,
                        damage: hit.damage,
                        position: impact,
                    });
                    if hit.damage >= self.tuning.heavy_hit_threshold {
                        events.push(CombatEvent::ParticleBurst {
                            position: impact,
                            count: self.tuning.hit_particle_count,
                            color: other.stats.color,
                        });
                    }
                }
                true
            }
        }
    }

    /// Accumulate damage, clamped to the cap. Negative amounts are
    /// ignored so damage is monotonically non-decreasing.
    pub fn apply_damage(&mut self, amount: f32) {
        self.damage = (self.damage + amount.max(0.0)).min(self.tuning.max_damage);
    }

    /// Apply the knockback formula and enter hitstun.
    ///
    /// magnitude = base + damage_dealt * percent * damage_scaling * scaling,
    /// where percent is this character's accumulated damage at call time -
    /// callers apply the incoming hit's damage *after* this, so the hit
    /// that brings a fresh character off 0% carries base knockback only.
    pub fn apply_knockback(
        &mut self,
        damage_dealt: f32,
        base_knockback: f32,
        knockback_scaling: f32,
        direction: Vec2,
    ) {
        let tuning = self.tuning;
        let magnitude = base_knockback
            + damage_dealt * self.damage * tuning.damage_scaling * knockback_scaling;
        let mut velocity = direction * magnitude;
        velocity.y = velocity.y.clamp(-tuning.max_knockback_y, tuning.max_knockback_y);
        self.velocity = velocity;
        self.hitstun_frames = (magnitude * tuning.hitstun_multiplier).floor() as u32;
        self.release_grab();
        self.reset_attack();
        self.grounded = false;
        self.change_state(CharacterState::Hitstun);
    }

    fn shield_block(
        &mut self,
        damage: f32,
        bonus_stun: u32,
        attacker: CharacterId,
        events: &mut EventQueue,
    ) {
        let tuning = self.tuning;
        self.shield_health -= damage * tuning.shield_damage_multiplier;
        if self.shield_health <= 0.0 {
            self.shield_health = 0.0;
            self.hitstun_frames = tuning.shield_break_stun;
            self.velocity.y = -tuning.shield_break_kick;
            self.change_state(CharacterState::Hitstun);
            debug!("{}'s shield broke", self.name);
            events.push(CombatEvent::ShieldBreak { defender: self.id });
        } else {
            self.hitstun_frames = tuning.shield_stun_frames + bonus_stun;
            self.change_state(CharacterState::Hitstun);
            events.push(CombatEvent::ShieldHit {
                attacker,
                defender: self.id,
                shield_health: self.shield_health,
            });
        }
    }

    // ---- Grab session ----------------------------------------------------

    /// Teleport the held character adjacent and freeze it for one frame.
    /// Re-applied every tick while the grab lasts.
    pub(crate) fn pin_held(&mut self, target: &mut Character) {
        let direction = if self.facing_right { 1.0 } else { -1.0 };
        target.position = Vec2::new(
            self.position.x + direction * self.stats.width,
            self.position.y,
        );
        target.hold_frozen();
    }

    fn hold_frozen(&mut self) {
        self.velocity = Vec2::ZERO;
        self.hitstun_frames = 1;
        self.change_state(CharacterState::Hitstun);
    }

    /// The single point that clears the grab relationship
    pub(crate) fn release_grab(&mut self) {
        self.grabbed = None;
        self.grab_frame = 0;
    }

    /// Advance the grab hold timer, returns the new frame count
    pub(crate) fn tick_grab(&mut self) -> u32 {
        self.grab_frame += 1;
        self.grab_frame
    }

    // ---- Death and respawn -----------------------------------------------

    /// Begin the death animation: capture the current velocity with a
    /// forced upward component, spend a stock and enter `Dying`. Also
    /// the entry point for externally-detected terminal conditions.
    pub fn start_death(&mut self, events: &mut EventQueue) {
        if self.is_dying() {
            return;
        }
        let tuning = self.tuning;
        self.stocks = self.stocks.saturating_sub(1);
        self.release_grab();
        self.reset_attack();
        let launch = Vec2::new(
            self.velocity.x,
            -self.velocity.y.abs().max(tuning.death_min_launch),
        );
        self.death = Some(DeathAnimation {
            frame: 0,
            position: self.position,
            velocity: launch,
            rotation: 0.0,
            scale: 1.0,
        });
        self.change_state(CharacterState::Dying);
        log::info!("{} lost a stock ({} left)", self.name, self.stocks);
        events.push(CombatEvent::DeathStart {
            character: self.id,
            stocks_remaining: self.stocks,
        });
        events.push(CombatEvent::ParticleBurst {
            position: self.rect().center(),
            count: tuning.death_particle_count,
            color: self.stats.color,
        });
    }

    fn update_death(&mut self, events: &mut EventQueue) {
        let tuning = self.tuning;
        let Some(death) = self.death.as_mut() else {
            return;
        };

        // An eliminated character holds its final pose
        if death.frame >= tuning.death_duration {
            return;
        }

        // Ballistic arc at half gravity with spin and shrink
        death.velocity.y += tuning.gravity * 0.5;
        death.position += death.velocity;
        death.rotation += tuning.death_spin;
        death.frame += 1;
        let progress = (death.frame as f32 / tuning.death_duration as f32).min(1.0);
        death.scale = lerp(1.0, 0.0, progress);

        if death.frame >= tuning.death_duration {
            if self.stocks > 0 {
                self.respawn(events);
            } else {
                debug!("{} eliminated", self.name);
                events.push(CombatEvent::Eliminated { character: self.id });
            }
        }
    }

    fn respawn(&mut self, events: &mut EventQueue) {
        let tuning = self.tuning;
        self.death = None;
        self.damage = 0.0;
        self.shield_health = tuning.max_shield_health;
        self.invincible_frames = tuning.respawn_invincibility;
        self.position = tuning.respawn_point;
        self.velocity = Vec2::ZERO;
        self.hitstun_frames = 0;
        self.fast_falling = false;
        self.has_double_jump = true;
        self.grounded = false;
        self.reset_attack();
        // Nothing transitions out of Dying; respawn rebuilds the state
        self.state = CharacterState::Falling;
        events.push(CombatEvent::Respawn { character: self.id });
    }

    // ---- Queries ---------------------------------------------------------

    pub fn damage(&self) -> f32 {
        self.damage
    }

    pub fn stocks(&self) -> u32 {
        self.stocks
    }

    pub fn shield_health(&self) -> f32 {
        self.shield_health
    }

    pub fn state(&self) -> CharacterState {
        self.state
    }

    pub fn is_dying(&self) -> bool {
        self.state == CharacterState::Dying
    }

    /// Out of stocks and finished dying: stays out for the rest of the match
    pub fn is_eliminated(&self) -> bool {
        self.stocks == 0
            && self
                .death
                .map_or(false, |death| death.frame >= self.tuning.death_duration)
    }

    pub fn is_shielding(&self) -> bool {
        self.state == CharacterState::Shielding
    }

    pub fn is_grabbing(&self) -> bool {
        self.grabbed.is_some()
    }

    /// Handle of the held character, while a grab session is active
    pub fn grabbed(&self) -> Option<CharacterId> {
        self.grabbed
    }

    /// Respawn frames, or the invincible sub-window of an active dodge
    pub fn is_invincible(&self) -> bool {
        if self.invincible_frames > 0 {
            return true;
        }
        self.state == CharacterState::Dodging
            && self.dodge_frame >= self.tuning.dodge_invincible_start
            && self.dodge_frame <= self.tuning.dodge_invincible_end
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn hitstun_frames(&self) -> u32 {
        self.hitstun_frames
    }

    pub fn can_attack(&self) -> bool {
        self.can_attack
    }

    pub fn attack(&self) -> Option<AttackKind> {
        self.attack
    }

    pub fn attack_boxes(&self) -> &[AttackBox] {
        &self.attack_boxes
    }

    /// Visual rectangle
    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.stats.width, self.stats.height)
    }

    /// Rectangle incoming attacks are tested against (85% of the visual box)
    pub fn hurtbox(&self) -> Rect {
        self.rect().scaled(self.tuning.hurtbox_scale)
    }

    /// Death animation pose for the renderer, while dying
    pub fn death_pose(&self) -> Option<DeathAnimation> {
        self.death
    }

    pub fn hit_effects(&self) -> &[HitEffect] {
        &self.hit_effects
    }
}
