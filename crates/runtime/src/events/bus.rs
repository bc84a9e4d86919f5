//! Type-keyed event bus implementation.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

type Handler<E> = Rc<RefCell<dyn FnMut(&E)>>;

struct Slot {
    id: u64,
    /// Always a `Handler<E>` for the `TypeId` this slot is filed under.
    handler: Box<dyn Any>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: HashMap<TypeId, Vec<Slot>>,
}

impl Registry {
    fn remove(&mut self, kind: TypeId, id: u64) -> bool {
        let Some(slots) = self.handlers.get_mut(&kind) else {
            return false;
        };
        let before = slots.len();
        slots.retain(|slot| slot.id != id);
        let removed = slots.len() != before;
        if slots.is_empty() {
            self.handlers.remove(&kind);
        }
        removed
    }
}

/// Synchronous publish/subscribe bus keyed by the concrete event type.
///
/// Handlers for an event type run in registration order on the calling thread.
/// Dispatch iterates over a snapshot taken when [`post`](Self::post) starts, so
/// handlers may subscribe, unsubscribe or post further events while running.
///
/// Cloning the bus yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Rc<RefCell<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for events of exactly type `E`.
    pub fn subscribe<E, F>(&self, handler: F) -> Subscription
    where
        E: 'static,
        F: FnMut(&E) + 'static,
    {
        let kind = TypeId::of::<E>();
        let handler: Handler<E> = Rc::new(RefCell::new(handler));

        let mut registry = self.registry.borrow_mut();
        registry.next_id += 1;
        let id = registry.next_id;
        registry.handlers.entry(kind).or_default().push(Slot {
            id,
            handler: Box::new(handler),
        });

        tracing::trace!(
            target: "tactics::events",
            event = std::any::type_name::<E>(),
            subscription = id,
            "Handler subscribed"
        );

        Subscription {
            registry: Rc::downgrade(&self.registry),
            kind,
            id,
        }
    }

    /// Dispatches `event` to every handler registered for `E`.
    ///
    /// A handler that is already running (the same handler re-entered through a
    /// nested `post`) is skipped for the nested event.
    pub fn post<E: 'static>(&self, event: &E) {
        let snapshot = self.snapshot::<E>();
        tracing::trace!(
            target: "tactics::events",
            event = std::any::type_name::<E>(),
            handlers = snapshot.len(),
            "Dispatching event"
        );

        for handler in snapshot {
            match handler.try_borrow_mut() {
                Ok(mut handler) => (*handler)(event),
                Err(_) => tracing::warn!(
                    target: "tactics::events",
                    event = std::any::type_name::<E>(),
                    "Skipping re-entrant handler"
                ),
            }
        }
    }

    /// Number of handlers currently registered for `E`.
    pub fn handler_count<E: 'static>(&self) -> usize {
        self.registry
            .borrow()
            .handlers
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }

    fn snapshot<E: 'static>(&self) -> Vec<Handler<E>> {
        let registry = self.registry.borrow();
        registry
            .handlers
            .get(&TypeId::of::<E>())
            .map(|slots| {
                slots
                    .iter()
                    .filter_map(|slot| slot.handler.downcast_ref::<Handler<E>>().cloned())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Handle that deregisters exactly one handler.
///
/// Dropping the handle does not unsubscribe. Unsubscribing more than once, or
/// after the bus is gone, is a no-op.
#[derive(Clone, Debug)]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    kind: TypeId,
    id: u64,
}

impl Subscription {
    /// Removes the handler. Returns true only for the call that removed it.
    pub fn unsubscribe(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let removed = registry.borrow_mut().remove(self.kind, self.id);
        if removed {
            tracing::trace!(
                target: "tactics::events",
                subscription = self.id,
                "Handler unsubscribed"
            );
        }
        removed
    }

    pub fn is_active(&self) -> bool {
        self.registry.upgrade().is_some_and(|registry| {
            registry
                .borrow()
                .handlers
                .get(&self.kind)
                .is_some_and(|slots| slots.iter().any(|slot| slot.id == self.id))
        })
    }
}
