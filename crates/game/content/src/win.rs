//! Win-condition factory keyed by type string.

use tactics_core::{SetupError, Side, Team, WinCondition};

use crate::specs::WinConditionSpec;

/// Type strings accepted in level files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString, strum::EnumIter)]
pub enum WinConditionType {
    EliminateAllEnemies,
    SurviveRounds,
    DefeatLeader,
}

pub struct WinConditionFactory;

impl WinConditionFactory {
    /// Resolves `spec` against the already built enemy team.
    ///
    /// # Errors
    ///
    /// - `UnknownWinConditionType` for an unrecognised type string
    /// - `MissingWinConditionParameter` when `rounds`/`leader` is required but absent
    /// - `UnknownCharacterName` when the leader is not on `enemies`
    pub fn create(spec: &WinConditionSpec, enemies: &Team) -> Result<WinCondition, SetupError> {
        let kind: WinConditionType = spec
            .kind
            .parse()
            .map_err(|_| SetupError::UnknownWinConditionType(spec.kind.clone()))?;

        let missing = |parameter| SetupError::MissingWinConditionParameter {
            condition: spec.kind.clone(),
            parameter,
        };

        match kind {
            WinConditionType::EliminateAllEnemies => Ok(WinCondition::EliminateAllEnemies),
            WinConditionType::SurviveRounds => {
                let rounds = spec.rounds.ok_or_else(|| missing("rounds"))?;
                Ok(WinCondition::SurviveRounds { rounds })
            }
            WinConditionType::DefeatLeader => {
                let name = spec.leader.as_deref().ok_or_else(|| missing("leader"))?;
                let leader = enemies
                    .members()
                    .iter()
                    .find(|character| character.name() == name)
                    .ok_or_else(|| SetupError::UnknownCharacterName {
                        name: name.to_string(),
                        side: Side::Ai,
                    })?;
                Ok(WinCondition::DefeatLeader {
                    leader: leader.id(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characters::CharacterFactory;
    use tactics_core::{CharacterId, Position};

    fn enemies() -> Team {
        let mut factory = CharacterFactory::new();
        Team::new("raiders", Side::Ai)
            .with_member(
                factory
                    .create("Archer", Side::Ai, Position::new(0, 0), None)
                    .unwrap(),
            )
            .with_member(
                factory
                    .create("Master", Side::Ai, Position::new(1, 0), Some("Warlord"))
                    .unwrap(),
            )
    }

    #[test]
    fn resolves_each_type() {
        let team = enemies();
        assert_eq!(
            WinConditionFactory::create(&WinConditionSpec::default(), &team),
            Ok(WinCondition::EliminateAllEnemies)
        );

        let survive = WinConditionSpec {
            rounds: Some(5),
            ..WinConditionSpec::new("SurviveRounds")
        };
        assert_eq!(
            WinConditionFactory::create(&survive, &team),
            Ok(WinCondition::SurviveRounds { rounds: 5 })
        );

        let leader = WinConditionSpec {
            leader: Some("Warlord".into()),
            ..WinConditionSpec::new("DefeatLeader")
        };
        assert_eq!(
            WinConditionFactory::create(&leader, &team),
            Ok(WinCondition::DefeatLeader {
                leader: CharacterId(2)
            })
        );
    }

    #[test]
    fn reports_bad_specs() {
        let team = enemies();
        assert_eq!(
            WinConditionFactory::create(&WinConditionSpec::new("CaptureFlag"), &team),
            Err(SetupError::UnknownWinConditionType("CaptureFlag".into()))
        );
        assert!(matches!(
            WinConditionFactory::create(&WinConditionSpec::new("SurviveRounds"), &team),
            Err(SetupError::MissingWinConditionParameter {
                parameter: "rounds",
                ..
            })
        ));

        let ghost = WinConditionSpec {
            leader: Some("Nobody".into()),
            ..WinConditionSpec::new("DefeatLeader")
        };
        assert!(matches!(
            WinConditionFactory::create(&ghost, &team),
            Err(SetupError::UnknownCharacterName { .. })
        ));
    }
}
