// Character state machine

/// Represents the current state of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterState {
    /// Standing still on ground
    Idle,
    /// Moving horizontally on ground
    Running,
    /// In the air, moving upward
    Jumping,
    /// In the air, moving downward
    Falling,
    /// An attack session is running
    Attacking,
    /// Blocking behind the shield
    Shielding,
    /// Dodge roll / spot dodge / air dodge
    Dodging,
    /// Taking knockback, cannot act
    Hitstun,
    /// Death animation, regular update path suppressed
    Dying,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::Idle
    }
}

impl CharacterState {
    /// Check if this is one of the four movement states
    pub fn is_movement(&self) -> bool {
        matches!(self, Self::Idle | Self::Running | Self::Jumping | Self::Falling)
    }

    /// Check if this is an airborne movement state
    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Jumping | Self::Falling)
    }

    /// Check if this is a grounded movement state
    pub fn is_grounded_movement(&self) -> bool {
        matches!(self, Self::Idle | Self::Running)
    }

    /// Check if the character can accept movement input
    pub fn can_move(&self) -> bool {
        self.is_movement()
    }
}

/// Whether a transition out of `from` into `to` is allowed.
///
/// Hitstun and attacks are commitments: a character in hitstun with
/// frames remaining can only be pulled out by death, and a character
/// mid-attack can only be interrupted by hitstun or death. Nothing
/// leaves `Dying` through a transition; respawn rebuilds the state
/// directly.
pub fn transition_allowed(
    from: CharacterState,
    to: CharacterState,
    attack_committed: bool,
    hitstun_committed: bool,
) -> bool {
    if from == to {
        return true;
    }
    match from {
        CharacterState::Dying => false,
        CharacterState::Hitstun if hitstun_committed => to == CharacterState::Dying,
        CharacterState::Attacking if attack_committed => {
            matches!(to, CharacterState::Hitstun | CharacterState::Dying)
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CharacterState::*;

    #[test]
    fn test_movement_predicates() {
        assert!(Idle.is_movement());
        assert!(Running.is_grounded_movement());
        assert!(Jumping.is_airborne());
        assert!(Falling.is_airborne());
        assert!(!Attacking.is_movement());
        assert!(!Hitstun.can_move());
        assert!(!Dying.can_move());
    }

    #[test]
    fn test_free_transitions() {
        assert!(transition_allowed(Idle, Running, false, false));
        assert!(transition_allowed(Falling, Idle, false, false));
        assert!(transition_allowed(Shielding, Hitstun, false, false));
    }

    #[test]
    fn test_attack_commitment() {
        // Mid-attack, only hitstun and death break through
        assert!(!transition_allowed(Attacking, Shielding, true, false));
        assert!(!transition_allowed(Attacking, Idle, true, false));
        assert!(transition_allowed(Attacking, Hitstun, true, false));
        assert!(transition_allowed(Attacking, Dying, true, false));

        // A finished attack resolves freely
        assert!(transition_allowed(Attacking, Idle, false, false));
    }

    #[test]
    fn test_hitstun_commitment() {
        assert!(!transition_allowed(Hitstun, Idle, false, true));
        assert!(!transition_allowed(Hitstun, Attacking, false, true));
        assert!(transition_allowed(Hitstun, Dying, false, true));

        // Hitstun with no frames left resolves freely
        assert!(transition_allowed(Hitstun, Falling, false, false));
    }

    #[test]
    fn test_nothing_leaves_dying() {
        for to in [Idle, Running, Jumping, Falling, Attacking, Shielding, Dodging, Hitstun] {
            assert!(!transition_allowed(Dying, to, false, false));
        }
    }

    #[test]
    fn test_same_state_always_allowed() {
        assert!(transition_allowed(Hitstun, Hitstun, false, true));
        assert!(transition_allowed(Attacking, Attacking, true, false));
    }
}
