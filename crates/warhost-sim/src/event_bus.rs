//! Event bus: typed publish/subscribe plus a bounded in-memory log.
//!
//! Listeners are registered per event tag and unregistered by explicit
//! token, so double registration of the same closure is unambiguous.
//! Delivery is synchronous, in registration order, during `publish`.

use std::collections::VecDeque;

use warhost_core::events::{BattleEvent, BattleEventKind, EventTag};

/// Handle returned by `on`, used to unregister the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerToken(u64);

type Callback = Box<dyn FnMut(&BattleEvent)>;

/// Publish/subscribe hub and bounded event log, owned by the engine.
pub struct EventBus {
    listeners: Vec<(ListenerToken, EventTag, Callback)>,
    log: VecDeque<BattleEvent>,
    capacity: usize,
    next_token: u64,
    next_event_id: u64,
}

impl EventBus {
    /// Create a bus whose log holds at most `capacity` events.
    pub fn new(capacity: usize) -> Self {
        Self {
            listeners: Vec::new(),
            log: VecDeque::with_capacity(capacity.min(1024)),
            capacity: capacity.max(1),
            next_token: 0,
            next_event_id: 0,
        }
    }

    /// Register a listener for one event tag. Returns the unregister token.
    pub fn on(&mut self, tag: EventTag, callback: impl FnMut(&BattleEvent) + 'static) -> ListenerToken {
        let token = ListenerToken(self.next_token);
        self.next_token += 1;
        self.listeners.push((token, tag, Box::new(callback)));
        token
    }

    /// Unregister a listener. Idempotent: unknown or already-removed
    /// tokens are ignored.
    pub fn off(&mut self, token: ListenerToken) {
        self.listeners.retain(|(t, _, _)| *t != token);
    }

    /// Emit an event: assign its id, deliver to matching listeners, and
    /// append to the log (evicting the oldest entry when full).
    pub fn publish(&mut self, tick: u64, elapsed_secs: f64, kind: BattleEventKind) {
        let event = BattleEvent {
            id: self.next_event_id,
            tick,
            elapsed_secs,
            kind,
        };
        self.next_event_id += 1;

        let tag = event.kind.tag();
        for (_, listener_tag, callback) in self.listeners.iter_mut() {
            if *listener_tag == tag {
                callback(&event);
            }
        }

        if self.log.len() == self.capacity {
            self.log.pop_front();
        }
        self.log.push_back(event);
    }

    /// Snapshot of the log, oldest first.
    pub fn events(&self) -> Vec<BattleEvent> {
        self.log.iter().cloned().collect()
    }

    /// Configured log capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of events currently retained.
    pub fn len(&self) -> usize {
        self.log.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}
