//! Human-readable turn narration.
//!
//! The engine hands one line per occurrence to a [`LogSink`] and never reads
//! anything back.

use std::cell::RefCell;
use std::rc::Rc;

use tactics_core::{ActionEffect, ActionOutcome, BattleState, CharacterId};

/// Append-only receiver of narration lines.
pub trait LogSink {
    fn log(&mut self, line: &str);
}

/// Forwards narration to `tracing` under the `tactics::narration` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn log(&mut self, line: &str) {
        tracing::info!(target: "tactics::narration", "{}", line);
    }
}

/// Keeps every line in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogSink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl LogSink for MemoryLogSink {
    fn log(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

fn name_of(state: &BattleState, id: CharacterId) -> String {
    state
        .character(id)
        .map(|character| character.name().to_string())
        .unwrap_or_else(|| id.to_string())
}

/// One-line description of a resolved action.
pub fn describe(state: &BattleState, outcome: &ActionOutcome) -> String {
    let actor = name_of(state, outcome.actor);
    let target = outcome
        .target
        .map(|id| name_of(state, id))
        .unwrap_or_default();
    let verb = match &outcome.ability {
        Some(ability) => format!("uses {ability} on"),
        None => "attacks".to_string(),
    };

    match outcome.effect {
        ActionEffect::Damage(report) => format!(
            "{actor} {verb} {target} for {} damage ({} hp left)",
            report.dealt, report.remaining_hp
        ),
        ActionEffect::Healed { amount, hp } => {
            format!("{actor} {verb} {target}, restoring {amount} hp ({hp} hp)")
        }
        ActionEffect::Fortified {
            bonus,
            effective_defense,
        } if outcome.target.is_some() => format!(
            "{actor} {verb} {target}: +{bonus} defense (now {effective_defense})"
        ),
        ActionEffect::Fortified {
            bonus,
            effective_defense,
        } => format!("{actor} defends: +{bonus} defense (now {effective_defense})"),
        ActionEffect::Moved { from, to } => format!("{actor} moves from {from} to {to}"),
    }
}
