// Combat events
//
// The simulation never calls a renderer, HUD or particle system directly.
// Everything cosmetic or match-level that happens during a tick is pushed
// onto the event queue, and the host drains it once per tick.

use glam::Vec2;

use super::characters::{CharacterId, Color, ThrowKind};

/// Facts produced by the simulation during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CombatEvent {
    /// An attack connected with an unshielded defender
    Hit {
        attacker: CharacterId,
        defender: CharacterId,
        damage: f32,
        position: Vec2,
    },

    /// An attack was blocked by the defender's shield
    ShieldHit {
        attacker: CharacterId,
        defender: CharacterId,
        shield_health: f32,
    },

    /// The defender's shield health reached zero
    ShieldBreak { defender: CharacterId },

    /// A grab connected
    GrabStart {
        attacker: CharacterId,
        defender: CharacterId,
    },

    /// A grab ended without a throw
    GrabRelease { attacker: CharacterId },

    /// A held character was thrown
    Throw {
        attacker: CharacterId,
        defender: CharacterId,
        kind: ThrowKind,
    },

    /// A character crossed a blast zone and started the death animation
    DeathStart {
        character: CharacterId,
        stocks_remaining: u32,
    },

    /// A character finished the death animation with stocks left
    Respawn { character: CharacterId },

    /// A character finished the death animation with no stocks left
    Eliminated { character: CharacterId },

    /// Request for decorative particles at a position
    ParticleBurst {
        position: Vec2,
        count: u32,
        color: Color,
    },
}

/// Queue of combat events for one tick
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<CombatEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    /// Add an event
    pub fn push(&mut self, event: CombatEvent) {
        self.events.push(event);
    }

    /// Take all queued events, leaving the queue empty
    pub fn drain(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events queued so far this tick
    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
