//! Type-keyed event bus and battle events.
//!
//! The engine publishes one value per occurrence; observers subscribe to the
//! concrete event types they care about.

mod bus;
mod extractor;
mod recorder;
mod types;

pub use bus::{EventBus, Subscription};
pub use extractor::extract_kills;
pub use recorder::{EventLog, JsonlRecorder, Recordable, RecordedEvent, subscribe_all};
pub use types::{
    ActionResolved, BattleEnded, BattleStarted, CharacterKilled, TurnSkipped, TurnStarted,
};
