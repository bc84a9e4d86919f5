//! Telemetry observers.
//!
//! Recorders subscribe to every battle event and keep or forward a
//! serializable copy. They never mutate battle state, and I/O failures are
//! logged instead of reaching the engine.

use std::cell::{Cell, RefCell};
use std::io::Write;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::bus::{EventBus, Subscription};
use super::types::{
    ActionResolved, BattleEnded, BattleStarted, CharacterKilled, TurnSkipped, TurnStarted,
};

/// Any battle event, tagged for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RecordedEvent {
    BattleStarted(BattleStarted),
    TurnStarted(TurnStarted),
    ActionResolved(ActionResolved),
    TurnSkipped(TurnSkipped),
    CharacterKilled(CharacterKilled),
    BattleEnded(BattleEnded),
}

/// Event types that can be captured as a [`RecordedEvent`].
pub trait Recordable: 'static {
    fn record(&self) -> RecordedEvent;
}

macro_rules! recordable {
    ($($event:ident),* $(,)?) => {
        $(
            impl Recordable for $event {
                fn record(&self) -> RecordedEvent {
                    RecordedEvent::$event(self.clone())
                }
            }
        )*
    };
}

recordable!(
    BattleStarted,
    TurnStarted,
    ActionResolved,
    TurnSkipped,
    CharacterKilled,
    BattleEnded,
);

/// Subscribes `sink` to every battle event type.
///
/// Events reach the sink in dispatch order.
pub fn subscribe_all<F>(bus: &EventBus, sink: F) -> Vec<Subscription>
where
    F: FnMut(RecordedEvent) + 'static,
{
    let sink = Rc::new(RefCell::new(sink));
    vec![
        forward::<BattleStarted, F>(bus, &sink),
        forward::<TurnStarted, F>(bus, &sink),
        forward::<ActionResolved, F>(bus, &sink),
        forward::<TurnSkipped, F>(bus, &sink),
        forward::<CharacterKilled, F>(bus, &sink),
        forward::<BattleEnded, F>(bus, &sink),
    ]
}

fn forward<E, F>(bus: &EventBus, sink: &Rc<RefCell<F>>) -> Subscription
where
    E: Recordable,
    F: FnMut(RecordedEvent) + 'static,
{
    let sink = Rc::clone(sink);
    bus.subscribe(move |event: &E| (&mut *sink.borrow_mut())(event.record()))
}

/// In-memory log of every event in dispatch order.
pub struct EventLog {
    events: Rc<RefCell<Vec<RecordedEvent>>>,
    subscriptions: Vec<Subscription>,
}

impl EventLog {
    pub fn attach(bus: &EventBus) -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let subscriptions = subscribe_all(bus, move |event| sink.borrow_mut().push(event));
        Self {
            events,
            subscriptions,
        }
    }

    /// Copy of everything recorded so far.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Stops recording. Already recorded events are kept.
    pub fn detach(&self) {
        for subscription in &self.subscriptions {
            subscription.unsubscribe();
        }
    }
}

/// Writes one JSON object per event and line.
pub struct JsonlRecorder<W: Write + 'static> {
    writer: Rc<RefCell<W>>,
    written: Rc<Cell<usize>>,
    subscriptions: Vec<Subscription>,
}

impl<W: Write + 'static> JsonlRecorder<W> {
    pub fn attach(bus: &EventBus, writer: W) -> Self {
        let writer = Rc::new(RefCell::new(writer));
        let written = Rc::new(Cell::new(0));

        let sink_writer = Rc::clone(&writer);
        let sink_written = Rc::clone(&written);
        let subscriptions = subscribe_all(bus, move |event| {
            let mut writer = sink_writer.borrow_mut();
            match write_line(&mut *writer, &event) {
                Ok(()) => sink_written.set(sink_written.get() + 1),
                Err(error) => tracing::warn!(
                    target: "tactics::telemetry",
                    error = %error,
                    "Failed to record event"
                ),
            }
        });

        Self {
            writer,
            written,
            subscriptions,
        }
    }

    /// Number of lines written successfully.
    pub fn written(&self) -> usize {
        self.written.get()
    }

    pub fn flush(&self) {
        if let Err(error) = self.writer.borrow_mut().flush() {
            tracing::warn!(
                target: "tactics::telemetry",
                error = %error,
                "Failed to flush event log"
            );
        }
    }

    /// Runs `f` with the underlying writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        f(&self.writer.borrow())
    }

    pub fn detach(&self) {
        for subscription in &self.subscriptions {
            subscription.unsubscribe();
        }
        self.flush();
    }
}

fn write_line<W: Write>(writer: &mut W, event: &RecordedEvent) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, event)?;
    writer.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::Side;

    fn sample() -> (BattleStarted, TurnStarted) {
        (
            BattleStarted {
                human: "Heroes".into(),
                ai: "Raiders".into(),
            },
            TurnStarted {
                round: 0,
                side: Side::Human,
            },
        )
    }

    #[test]
    fn event_log_keeps_dispatch_order() {
        let bus = EventBus::new();
        let log = EventLog::attach(&bus);
        let (started, turn) = sample();

        bus.post(&started);
        bus.post(&turn);

        assert_eq!(
            log.events(),
            vec![
                RecordedEvent::BattleStarted(started),
                RecordedEvent::TurnStarted(turn)
            ]
        );

        log.detach();
        bus.post(&turn);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn jsonl_writes_one_tagged_object_per_line() {
        let bus = EventBus::new();
        let recorder = JsonlRecorder::attach(&bus, Vec::new());
        let (started, turn) = sample();

        bus.post(&started);
        bus.post(&turn);
        assert_eq!(recorder.written(), 2);

        let text = recorder.with_writer(|bytes| String::from_utf8(bytes.clone()).unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["event"], "battle_started");
        assert_eq!(first["human"], "Heroes");

        let second: RecordedEvent = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second, RecordedEvent::TurnStarted(turn));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_do_not_propagate() {
        let bus = EventBus::new();
        let recorder = JsonlRecorder::attach(&bus, BrokenPipe);
        let (started, _) = sample();

        bus.post(&started);
        assert_eq!(recorder.written(), 0);
    }
}
