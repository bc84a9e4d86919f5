//! Runtime orchestration for deterministic tactical battles.
//!
//! This crate wires the pure rules of `tactics-core` into a playable battle:
//! players pick actions, the [`GameEngine`] executes them turn by turn, and
//! observers follow along through the type-keyed [`EventBus`].
//!
//! Modules are organized by responsibility:
//! - [`engine`] hosts the turn state machine and its builder
//! - [`players`] and [`strategies`] decide what each side does
//! - [`events`] provides the event bus, event types and telemetry recorders
//! - [`narration`] turns outcomes into human-readable log lines
//! - [`api`] exposes the error types downstream clients interact with
pub mod api;
pub mod engine;
pub mod events;
pub mod narration;
pub mod players;
pub mod strategies;

pub use api::{Component, EngineError, Result, StrategyError};
pub use engine::{BattlePhase, BattleReport, GameEngine, GameEngineBuilder};
pub use events::{
    ActionResolved, BattleEnded, BattleStarted, CharacterKilled, EventBus, EventLog,
    JsonlRecorder, RecordedEvent, Subscription, TurnSkipped, TurnStarted,
};
pub use narration::{LogSink, MemoryLogSink, TracingLogSink};
pub use players::{
    Controller, HumanChoice, HumanController, HumanInput, Player, Rosters, ScriptedInput,
};
pub use strategies::{AiStrategy, SimpleAiStrategy, TacticalAiStrategy};
