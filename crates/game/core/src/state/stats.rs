//! Mutable numeric attributes of one character.

/// Hit points, combat stats and the per-turn defense modifier.
///
/// Invariant: `hp <= max_hp`. All stats are unsigned, so they never go
/// negative.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    max_hp: u32,
    hp: u32,
    attack: u32,
    defense: u32,
    speed: u32,
    temp_defense_bonus: u32,
}

impl StatBlock {
    /// Creates a stat block at full health.
    pub fn new(max_hp: u32, attack: u32, defense: u32, speed: u32) -> Self {
        Self {
            max_hp,
            hp: max_hp,
            attack,
            defense,
            speed,
            temp_defense_bonus: 0,
        }
    }

    /// Starts the block at `hp` instead of full health (clamped to `max_hp`).
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn temp_defense_bonus(&self) -> u32 {
        self.temp_defense_bonus
    }

    /// Base defense plus the temporary bonus.
    pub fn effective_defense(&self) -> u32 {
        self.defense.saturating_add(self.temp_defense_bonus)
    }

    /// Reduces `amount` by effective defense and subtracts the rest from hp.
    ///
    /// Returns the hp actually lost.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let effective = crate::combat::reduced_damage(amount, self.effective_defense());
        let before = self.hp;
        self.hp = self.hp.saturating_sub(effective);
        before - self.hp
    }

    /// Restores up to `amount` hp without exceeding `max_hp`. Returns hp restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    pub fn add_temporary_defense(&mut self, amount: u32) {
        self.temp_defense_bonus = self.temp_defense_bonus.saturating_add(amount);
    }

    /// Clears modifiers that expire when the owner's turn starts.
    pub fn reset_turn_modifiers(&mut self) {
        self.temp_defense_bonus = 0;
    }
}
