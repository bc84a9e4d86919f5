use crate::action::{ActionContext, ActionError, InvalidReason};
use crate::combat;

use super::{Ability, CharacterId, Position, Side, StatBlock};

/// A combatant on the board.
///
/// `alive` flips to false exactly when hp reaches zero and never reverts for
/// the rest of the battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    id: CharacterId,
    name: String,
    kind: String,
    side: Side,
    position: Position,
    stats: StatBlock,
    abilities: Vec<Ability>,
    alive: bool,
}

/// Result of damage landing on a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageReport {
    /// Damage before defense reduction.
    pub raw: u32,
    /// Hp actually lost.
    pub dealt: u32,
    /// Hp left afterwards.
    pub remaining_hp: u32,
    /// True if this hit flipped the alive flag.
    pub defeated: bool,
}

impl Character {
    pub fn new(
        id: CharacterId,
        name: impl Into<String>,
        side: Side,
        position: Position,
        stats: StatBlock,
    ) -> Self {
        let alive = stats.hp() > 0;
        Self {
            id,
            name: name.into(),
            kind: String::from("Custom"),
            side,
            position,
            stats,
            abilities: Vec::new(),
            alive,
        }
    }

    /// Records the factory type name ("Warrior", "Archer", ...).
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    #[must_use]
    pub fn with_abilities(mut self, abilities: impl IntoIterator<Item = Ability>) -> Self {
        self.abilities.extend(abilities);
        self
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn hp(&self) -> u32 {
        self.stats.hp()
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    /// Looks up an unlocked ability by name.
    pub fn ability(&self, name: &str) -> Option<&Ability> {
        self.abilities.iter().find(|ability| ability.name() == name)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn set_side(&mut self, side: Side) {
        self.side = side;
    }

    pub(crate) fn relocate(&mut self, position: Position) {
        self.position = position;
    }

    /// Fails with `DeadCharacter` unless this character is alive.
    pub fn ensure_alive(&self) -> Result<(), ActionError> {
        if self.alive {
            Ok(())
        } else {
            Err(ActionError::DeadCharacter { character: self.id })
        }
    }

    /// Applies `amount` raw damage, reduced by effective defense.
    pub fn apply_damage(&mut self, amount: u32) -> DamageReport {
        let dealt = self.stats.apply_damage(amount);
        let was_alive = self.alive;
        self.alive = self.alive && self.stats.hp() > 0;
        DamageReport {
            raw: amount,
            dealt,
            remaining_hp: self.stats.hp(),
            defeated: was_alive && !self.alive,
        }
    }

    /// Restores hp. Defeated characters cannot be healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.alive {
            return 0;
        }
        self.stats.heal(amount)
    }

    pub fn add_temporary_defense(&mut self, amount: u32) {
        self.stats.add_temporary_defense(amount);
    }

    /// Clears modifiers that expire at the start of this character's turn.
    pub fn reset_turn_modifiers(&mut self) {
        self.stats.reset_turn_modifiers();
    }

    /// Basic attack against an opposing character.
    ///
    /// Fails with `DeadCharacter` if either side is defeated and with
    /// `InvalidAction` if `target` fights on the same side. Only the target is
    /// mutated.
    pub fn attack(
        &self,
        target: &mut Character,
        ctx: &mut ActionContext<'_>,
    ) -> Result<DamageReport, ActionError> {
        self.strike(target, 0, ctx)
    }

    /// Attack with `power` added to the raw attack stat.
    pub fn strike(
        &self,
        target: &mut Character,
        power: u32,
        ctx: &mut ActionContext<'_>,
    ) -> Result<DamageReport, ActionError> {
        self.ensure_alive()?;
        target.ensure_alive()?;
        if target.side == self.side {
            return Err(ActionError::invalid(InvalidReason::NotAnOpponent {
                target: target.id,
            }));
        }

        let raw = combat::roll_attack(
            self.stats.attack().saturating_add(power),
            ctx.config.damage_variance,
            &mut *ctx.rng,
        );
        Ok(target.apply_damage(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::rng::PcgRandom;

    fn warrior() -> Character {
        Character::new(
            CharacterId(1),
            "Warrior",
            Side::Human,
            Position::new(0, 0),
            StatBlock::new(30, 10, 2, 3),
        )
    }

    fn archer() -> Character {
        Character::new(
            CharacterId(2),
            "Archer",
            Side::Ai,
            Position::new(3, 0),
            StatBlock::new(20, 8, 1, 4),
        )
    }

    #[test]
    fn alive_flag_tracks_hp() {
        let mut target = archer();
        let report = target.apply_damage(100);
        assert!(report.defeated);
        assert_eq!(report.remaining_hp, 0);
        assert!(!target.is_alive());

        // A second lethal hit does not report another defeat.
        let again = target.apply_damage(100);
        assert!(!again.defeated);
        assert!(!target.is_alive());
    }

    #[test]
    fn defeated_characters_cannot_be_healed() {
        let mut target = archer();
        target.apply_damage(100);
        assert_eq!(target.heal(10), 0);
        assert!(!target.is_alive());
        assert_eq!(target.hp(), 0);
    }

    #[test]
    fn attack_reduces_target_hp_only() {
        let config = GameConfig::default();
        let mut rng = PcgRandom::new(0);
        let mut ctx = ActionContext::new(&config, &mut rng);

        let attacker = warrior();
        let mut target = archer();
        let report = attacker.attack(&mut target, &mut ctx).unwrap();

        assert_eq!(report.dealt, 9);
        assert_eq!(target.hp(), 11);
        assert_eq!(attacker.hp(), 30);
    }

    #[test]
    fn attack_on_ally_is_invalid() {
        let config = GameConfig::default();
        let mut rng = PcgRandom::new(0);
        let mut ctx = ActionContext::new(&config, &mut rng);

        let attacker = warrior();
        let mut ally = archer();
        ally.set_side(Side::Human);

        let err = attacker.attack(&mut ally, &mut ctx).unwrap_err();
        assert!(matches!(err, ActionError::InvalidAction { .. }));
        assert_eq!(ally.hp(), 20);
    }

    #[test]
    fn ability_lookup_by_name() {
        use crate::state::AbilityEffect;

        let character = warrior().with_abilities([
            Ability::new("PowerStrike", AbilityEffect::Strike { power: 4 }),
            Ability::new("PowerStrike", AbilityEffect::Strike { power: 4 }),
        ]);
        assert_eq!(character.abilities().len(), 2);
        assert!(character.ability("PowerStrike").is_some());
        assert!(character.ability("Heal").is_none());
    }
}
