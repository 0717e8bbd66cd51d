// Match session orchestration
//
// Owns the characters, the stage platforms and the event queue. The
// per-tick ordering is strict: every character finishes its physics
// update before any pairwise hit resolution runs, so an attacker never
// evaluates hits against a stale defender position. Grab upkeep sits
// between the two because it rewrites the held character's position.

use glam::Vec2;
use log::debug;

use crate::engine::physics::Platform;

use super::characters::{Character, CharacterId, CharacterStats, ThrowKind};
use super::events::{CombatEvent, EventQueue};
use super::tuning::Tuning;

/// One running match
pub struct MatchSession {
    tuning: Tuning,
    platforms: Vec<Platform>,
    characters: Vec<Character>,
    events: EventQueue,
    next_id: CharacterId,
    tick_count: u64,
}

impl MatchSession {
    pub fn new(tuning: Tuning, platforms: Vec<Platform>) -> Self {
        Self {
            tuning,
            platforms,
            characters: Vec::new(),
            events: EventQueue::new(),
            next_id: 0,
            tick_count: 0,
        }
    }

    /// Add a participant at a spawn point
    pub fn spawn_character(
        &mut self,
        name: &str,
        stats: CharacterStats,
        spawn: Vec2,
    ) -> CharacterId {
        let id = self.next_id;
        self.next_id += 1;
        debug!("spawning {} at {:?}", name, spawn);
        self.characters
            .push(Character::new(id, name, stats, self.tuning, spawn));
        id
    }

    /// Get a character by ID
    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|character| character.id == id)
    }

    /// Get a mutable character by ID
    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters
            .iter_mut()
            .find(|character| character.id == id)
    }

    /// Get all characters
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Get all characters mutably
    pub fn characters_mut(&mut self) -> &mut [Character] {
        &mut self.characters
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Advance the match one tick: update all, maintain grabs, then
    /// resolve hits for every ordered attacker/defender pair
    pub fn tick(&mut self) {
        for character in &mut self.characters {
            character.update(&self.platforms, &mut self.events);
        }

        self.maintain_grabs();
        self.resolve_hits();

        self.tick_count += 1;
    }

    fn maintain_grabs(&mut self) {
        for holder in 0..self.characters.len() {
            let Some(target_id) = self.characters[holder].grabbed() else {
                continue;
            };
            let holder_dying = self.characters[holder].is_dying();
            let target = self
                .characters
                .iter()
                .position(|character| character.id == target_id);

            match target {
                Some(held) if held != holder && !holder_dying && !self.characters[held].is_dying() => {
                    if self.characters[holder].tick_grab() > self.tuning.grab_hold_frames {
                        self.release(holder);
                    } else {
                        let (holder, held) = pair_mut(&mut self.characters, holder, held);
                        holder.pin_held(held);
                    }
                }
                // Fail-safe: the handle no longer resolves to a live,
                // distinct target, so force-release instead of holding a
                // dangling grab
                _ => self.release(holder),
            }
        }
    }

    fn release(&mut self, holder: usize) {
        let id = self.characters[holder].id;
        self.characters[holder].release_grab();
        self.events.push(CombatEvent::GrabRelease { attacker: id });
    }

    fn resolve_hits(&mut self) {
        let count = self.characters.len();
        for attacker in 0..count {
            for defender in 0..count {
                if attacker == defender {
                    continue;
                }
                let (attacker, defender) = pair_mut(&mut self.characters, attacker, defender);
                attacker.check_hit(defender, &mut self.events);
            }
        }
    }

    /// Pummel the character held by `attacker`, if any
    pub fn pummel(&mut self, attacker: CharacterId) {
        if let Some((holder, held)) = self.grab_pair(attacker) {
            let (holder, held) = pair_mut(&mut self.characters, holder, held);
            holder.pummel(held, &mut self.events);
        }
    }

    /// Throw the character held by `attacker`, if any
    pub fn throw(&mut self, attacker: CharacterId, kind: ThrowKind) {
        if let Some((holder, held)) = self.grab_pair(attacker) {
            let (holder, held) = pair_mut(&mut self.characters, holder, held);
            holder.throw(kind, held, &mut self.events);
        }
    }

    fn grab_pair(&self, attacker: CharacterId) -> Option<(usize, usize)> {
        let holder = self
            .characters
            .iter()
            .position(|character| character.id == attacker)?;
        let target_id = self.characters[holder].grabbed()?;
        let held = self
            .characters
            .iter()
            .position(|character| character.id == target_id)?;
        (holder != held).then_some((holder, held))
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        self.events.drain()
    }

    /// Characters still holding at least one stock or mid-death-animation
    pub fn alive_count(&self) -> usize {
        self.characters
            .iter()
            .filter(|character| !character.is_eliminated())
            .count()
    }

    /// The last character standing, once everyone else is eliminated
    pub fn winner(&self) -> Option<CharacterId> {
        if self.characters.len() < 2 {
            return None;
        }
        let mut alive = self
            .characters
            .iter()
            .filter(|character| !character.is_eliminated());
        match (alive.next(), alive.next()) {
            (Some(last), None) => Some(last.id),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.characters.len() >= 2 && self.alive_count() <= 1
    }
}

/// Split-borrow two distinct characters from the roster
fn pair_mut(characters: &mut [Character], a: usize, b: usize) -> (&mut Character, &mut Character) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = characters.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = characters.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
