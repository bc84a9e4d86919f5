//! Public runtime API surface.
//!
//! Error types shared by the engine, players and strategies live here so the
//! other modules can stay focused on orchestration.

pub mod errors;

pub use errors::{Component, EngineError, Result, StrategyError};
