//! Battle orchestration.
//!
//! [`GameEngine`] owns the battle state, both players, the win condition and
//! the random source, and drives the turn state machine:
//!
//! ```text
//! Setup ──▶ InProgress ──▶ Won
//!                     └──▶ Lost
//! ```
//!
//! The human side moves first and the sides alternate. Each turn the engine
//! clears the active side's expiring modifiers, asks the player for an action,
//! executes it, publishes the resulting events and evaluates the win
//! condition. A failing strategy or a rejected action costs the player its
//! turn and nothing else.

use serde::{Deserialize, Serialize};
use tactics_core::{
    Action, ActionContext, ActionError, BattleState, GameConfig, GameError, InvalidReason,
    PcgRandom, RandomProvider, Side, WinCondition,
};

use crate::api::{Component, EngineError, Result};
use crate::events::{
    ActionResolved, BattleEnded, BattleStarted, EventBus, TurnSkipped, TurnStarted, extract_kills,
};
use crate::narration::{self, LogSink, TracingLogSink};
use crate::players::Player;

/// Lifecycle of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattlePhase {
    Setup,
    InProgress,
    /// The human side won.
    Won,
    /// The AI side won.
    Lost,
}

impl BattlePhase {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::InProgress => "in_progress",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

/// Summary of a finished battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub outcome: BattlePhase,
    pub winner: Side,
    /// Completed rounds.
    pub rounds: u32,
    /// Turns played by both sides, skipped turns included.
    pub turns: u32,
}

pub struct GameEngine {
    state: BattleState,
    human: Player,
    ai: Player,
    win_condition: WinCondition,
    config: GameConfig,
    rng: Box<dyn RandomProvider>,
    bus: EventBus,
    log_sink: Box<dyn LogSink>,
    phase: BattlePhase,
    active: Side,
    turns: u32,
}

impl GameEngine {
    pub fn builder() -> GameEngineBuilder {
        GameEngineBuilder::new()
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn win_condition(&self) -> &WinCondition {
        &self.win_condition
    }

    /// Handle to the engine's bus; subscribe here to observe the battle.
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn human_player(&self) -> &Player {
        &self.human
    }

    pub fn ai_player(&self) -> &Player {
        &self.ai
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Human => &self.human,
            Side::Ai => &self.ai,
        }
    }

    pub fn opponent_of(&self, player: &Player) -> &Player {
        self.player(player.side().opponent())
    }

    /// Side whose turn is next.
    pub fn active_side(&self) -> Side {
        self.active
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            BattlePhase::Won => Some(Side::Human),
            BattlePhase::Lost => Some(Side::Ai),
            BattlePhase::Setup | BattlePhase::InProgress => None,
        }
    }

    /// Report of the finished battle, `None` while it is still running.
    pub fn report(&self) -> Option<BattleReport> {
        self.winner().map(|winner| BattleReport {
            outcome: self.phase,
            winner,
            rounds: self.state.round(),
            turns: self.turns,
        })
    }

    /// Plays the battle until it reaches a terminal phase.
    ///
    /// Returns immediately with the report if the battle already finished.
    ///
    /// # Errors
    ///
    /// `RoundLimitReached` when `config.max_rounds` rounds complete without a
    /// result. The phase stays `InProgress`.
    pub fn run(&mut self) -> Result<BattleReport> {
        loop {
            if let Some(report) = self.report() {
                return Ok(report);
            }
            let round = self.state.round();
            if let Some(limit) = self.config.max_rounds.filter(|&limit| round >= limit) {
                tracing::warn!(
                    target: "tactics::engine",
                    limit,
                    turns = self.turns,
                    "Round limit reached without a result"
                );
                return Err(EngineError::RoundLimitReached { limit });
            }
            self.step()?;
        }
    }

    /// Plays exactly one turn and returns the resulting phase.
    ///
    /// The first call also starts the battle. If the starting state is
    /// already decided, that call ends the battle without playing a turn.
    ///
    /// # Errors
    ///
    /// `BattleFinished` once the battle reached `Won` or `Lost`.
    pub fn step(&mut self) -> Result<BattlePhase> {
        match self.phase {
            BattlePhase::Won => {
                return Err(EngineError::BattleFinished {
                    winner: Side::Human,
                });
            }
            BattlePhase::Lost => return Err(EngineError::BattleFinished { winner: Side::Ai }),
            BattlePhase::Setup => {
                self.start();
                if self.phase.is_terminal() {
                    return Ok(self.phase);
                }
            }
            BattlePhase::InProgress => {}
        }

        self.play_turn();
        Ok(self.phase)
    }

    fn start(&mut self) {
        self.phase = BattlePhase::InProgress;
        tracing::info!(
            target: "tactics::engine",
            human = self.human.name(),
            ai = self.ai.name(),
            win_condition = self.win_condition.type_name(),
            "Battle started"
        );
        self.log_sink.log(&format!(
            "{} faces {} ({})",
            self.human.name(),
            self.ai.name(),
            self.win_condition.type_name()
        ));
        self.bus.post(&BattleStarted {
            human: self.human.name().to_string(),
            ai: self.ai.name().to_string(),
        });

        if let Some(winner) = self.win_condition.winner(&self.state) {
            self.finish(winner);
        }
    }

    fn play_turn(&mut self) {
        let side = self.active;
        self.state.reset_turn_modifiers(side);
        self.bus.post(&TurnStarted {
            round: self.state.round(),
            side,
        });

        let decision = match side {
            Side::Human => self.human.take_turn(&self.state, self.rng.as_mut()),
            Side::Ai => self.ai.take_turn(&self.state, self.rng.as_mut()),
        };
        match decision {
            Ok(Some(action)) => self.resolve(side, action),
            Ok(None) => self.skip(side, "no action taken".to_string(), None),
            Err(error) => {
                if error.severity().is_turn_local() {
                    tracing::warn!(
                        target: "tactics::engine",
                        side = %side,
                        round = self.state.round(),
                        error_code = error.error_code(),
                        error = %error,
                        "Player choice rejected; turn skipped"
                    );
                } else {
                    tracing::error!(
                        target: "tactics::engine",
                        side = %side,
                        round = self.state.round(),
                        error_code = error.error_code(),
                        severity = %error.severity(),
                        error = %error,
                        "Strategy failed; turn skipped"
                    );
                }
                self.skip(side, error.to_string(), Some(error.error_code()));
            }
        }

        self.turns += 1;
        if side == Side::Ai {
            self.state.advance_round();
        }

        match self.win_condition.winner(&self.state) {
            Some(winner) => self.finish(winner),
            None => self.active = side.opponent(),
        }
    }

    /// Executes `action` on a staging copy and commits it only on success.
    fn resolve(&mut self, side: Side, action: Action) {
        let actor = action.actor();
        let checked = match self.state.side_of(actor) {
            None => Err(ActionError::CharacterNotFound { character: actor }),
            Some(owner) if owner != side => {
                Err(ActionError::invalid(InvalidReason::NotOnActingSide { actor }))
            }
            Some(_) => Ok(()),
        };

        let alive_before = self.state.alive_ids();
        let mut staging = self.state.clone();
        let result = checked.and_then(|()| {
            let mut ctx = ActionContext::new(&self.config, self.rng.as_mut());
            action.execute(&mut staging, &mut ctx)
        });

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::warn!(
                    target: "tactics::engine",
                    side = %side,
                    round = self.state.round(),
                    action = action.name(),
                    actor = %actor,
                    target = ?action.target(),
                    error_code = error.error_code(),
                    severity = %error.severity(),
                    error = %error,
                    "Action rejected; turn skipped"
                );
                self.skip(side, error.to_string(), Some(error.error_code()));
                return;
            }
        };
        self.state = staging;

        tracing::debug!(
            target: "tactics::engine",
            side = %side,
            round = self.state.round(),
            action = action.name(),
            actor = %actor,
            target = ?action.target(),
            "Action resolved"
        );
        self.log_sink.log(&narration::describe(&self.state, &outcome));
        self.bus.post(&ActionResolved { side, outcome });

        for kill in extract_kills(&alive_before, &self.state, actor) {
            tracing::info!(
                target: "tactics::engine",
                victim = %kill.victim,
                killer = %kill.killer,
                "Character killed"
            );
            self.log_sink.log(&format!(
                "{} is defeated by {}",
                kill.victim_name, kill.killer_name
            ));
            self.bus.post(&kill);
        }
    }

    fn skip(&mut self, side: Side, reason: String, error_code: Option<&'static str>) {
        self.log_sink.log(&format!(
            "{} loses the turn: {reason}",
            self.player(side).name()
        ));
        self.bus.post(&TurnSkipped {
            side,
            reason,
            error_code: error_code.map(str::to_string),
        });
    }

    fn finish(&mut self, winner: Side) {
        let loser = winner.opponent();
        self.phase = match winner {
            Side::Human => BattlePhase::Won,
            Side::Ai => BattlePhase::Lost,
        };
        let winner_name = self.player(winner).name().to_string();
        let loser_name = self.player(loser).name().to_string();

        tracing::info!(
            target: "tactics::engine",
            winner = %winner,
            outcome = self.phase.as_str(),
            rounds = self.state.round(),
            turns = self.turns,
            "Battle ended"
        );
        self.log_sink.log(&format!(
            "{winner_name} defeats {loser_name} after {} rounds",
            self.state.round()
        ));
        self.bus.post(&BattleEnded {
            winner,
            loser,
            winner_name,
            loser_name,
            rounds: self.state.round(),
        });
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("phase", &self.phase)
            .field("active", &self.active)
            .field("round", &self.state.round())
            .field("turns", &self.turns)
            .field("human", &self.human)
            .field("ai", &self.ai)
            .finish_non_exhaustive()
    }
}

/// Builder for [`GameEngine`].
///
/// State, both players and the win condition are required. The remaining
/// parts default to [`GameConfig::default`], `PcgRandom::new(0)`, a fresh
/// [`EventBus`] and a [`TracingLogSink`].
#[derive(Default)]
pub struct GameEngineBuilder {
    state: Option<BattleState>,
    human: Option<Player>,
    ai: Option<Player>,
    win_condition: Option<WinCondition>,
    config: Option<GameConfig>,
    rng: Option<Box<dyn RandomProvider>>,
    bus: Option<EventBus>,
    log_sink: Option<Box<dyn LogSink>>,
}

impl GameEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(mut self, state: BattleState) -> Self {
        self.state = Some(state);
        self
    }

    /// Player for the human side.
    pub fn human(mut self, player: Player) -> Self {
        self.human = Some(player);
        self
    }

    /// Player for the AI side.
    pub fn ai(mut self, player: Player) -> Self {
        self.ai = Some(player);
        self
    }

    pub fn win_condition(mut self, win_condition: WinCondition) -> Self {
        self.win_condition = Some(win_condition);
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn rng(mut self, rng: impl RandomProvider + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Shorthand for `rng(PcgRandom::new(seed))`.
    pub fn seed(self, seed: u64) -> Self {
        self.rng(PcgRandom::new(seed))
    }

    /// Publishes on `bus` instead of a private one, so subscriptions made
    /// before building observe the whole battle.
    pub fn bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn log_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.log_sink = Some(Box::new(sink));
        self
    }

    pub fn build(self) -> Result<GameEngine> {
        let state = self.state.ok_or(EngineError::MissingComponent {
            component: Component::State,
        })?;
        let human = self.human.ok_or(EngineError::MissingComponent {
            component: Component::HumanPlayer,
        })?;
        let ai = self.ai.ok_or(EngineError::MissingComponent {
            component: Component::AiPlayer,
        })?;
        let win_condition = self.win_condition.ok_or(EngineError::MissingComponent {
            component: Component::WinCondition,
        })?;

        for (player, expected) in [(&human, Side::Human), (&ai, Side::Ai)] {
            if player.side() != expected {
                return Err(EngineError::PlayerSideMismatch {
                    player: player.name().to_string(),
                    expected,
                    actual: player.side(),
                });
            }
        }

        Ok(GameEngine {
            state,
            human,
            ai,
            win_condition,
            config: self.config.unwrap_or_default(),
            rng: self.rng.unwrap_or_else(|| Box::new(PcgRandom::new(0))),
            bus: self.bus.unwrap_or_default(),
            log_sink: self.log_sink.unwrap_or_else(|| Box::new(TracingLogSink)),
            phase: BattlePhase::Setup,
            active: Side::Human,
            turns: 0,
        })
    }
}
