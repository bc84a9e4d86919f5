//! Damage rolls.
//!
//! Pure functions over stats and a [`RandomProvider`]. Defense reduction is
//! applied by the target's stat block, so these functions only decide the raw
//! amount an attack carries.

use crate::config::DamageVariance;
use crate::rng::RandomProvider;

/// Damage an attack deals before defense, given the attacker's attack value.
///
/// # Formula
///
/// ```text
/// None:               raw = attack
/// Scatter{percent}:   raw = floor(attack * roll / 100), roll in [100 - p, 100 + p]
/// ```
///
/// `percent` is capped at 100. `Scatter { percent: 0 }` still consumes one draw
/// so the random stream does not depend on the configured spread.
pub fn roll_attack(attack: u32, variance: DamageVariance, rng: &mut dyn RandomProvider) -> u32 {
    match variance {
        DamageVariance::None => attack,
        DamageVariance::Scatter { percent } => {
            let spread = percent.min(100);
            let roll = 100 - spread + rng.next_int(2 * spread + 1);
            let scaled = u64::from(attack) * u64::from(roll) / 100;
            u32::try_from(scaled).unwrap_or(u32::MAX)
        }
    }
}

/// Damage left after subtracting effective defense.
pub fn reduced_damage(raw: u32, effective_defense: u32) -> u32 {
    raw.saturating_sub(effective_defense)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRandom;

    #[test]
    fn no_variance_returns_attack_without_drawing() {
        let mut rng = PcgRandom::new(5);
        let untouched = rng.clone();
        assert_eq!(roll_attack(10, DamageVariance::None, &mut rng), 10);
        assert_eq!(rng, untouched);
    }

    #[test]
    fn scatter_stays_within_bounds() {
        let mut rng = PcgRandom::new(11);
        for _ in 0..200 {
            let raw = roll_attack(20, DamageVariance::Scatter { percent: 25 }, &mut rng);
            assert!((15..=25).contains(&raw), "raw {raw} out of range");
        }
    }

    #[test]
    fn scatter_is_deterministic_per_seed() {
        let variance = DamageVariance::Scatter { percent: 50 };
        let mut a = PcgRandom::new(3);
        let mut b = PcgRandom::new(3);
        let left: Vec<u32> = (0..10).map(|_| roll_attack(12, variance, &mut a)).collect();
        let right: Vec<u32> = (0..10).map(|_| roll_attack(12, variance, &mut b)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn zero_scatter_still_draws_once() {
        let mut rng = PcgRandom::new(9);
        let mut reference = rng.clone();
        assert_eq!(roll_attack(10, DamageVariance::Scatter { percent: 0 }, &mut rng), 10);
        reference.next_u32();
        assert_eq!(rng, reference);
    }

    #[test]
    fn reduction_clamps_at_zero() {
        assert_eq!(reduced_damage(10, 1), 9);
        assert_eq!(reduced_damage(3, 7), 0);
    }
}
