//! Synchronous fan-out event channels.
//!
//! [`EventBus`] delivers one value to every subscriber, in subscription
//! order, on the broadcasting thread. There is no queue and no delivery
//! guarantee beyond "each current subscriber is called once per broadcast" --
//! it is fire-and-forget plumbing between the loop, the engine, and the
//! host.
//!
//! `broadcast` takes `&mut self`, which makes mutating the subscriber list
//! from inside a handler impossible in safe Rust: a handler never holds a
//! second reference to the bus it is being called from. Handler panics are
//! not isolated here; the engine catches them at its pass boundaries.

// ---------------------------------------------------------------------------
// SubscriberId
// ---------------------------------------------------------------------------

/// Opaque handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// A synchronous broadcast channel carrying values of type `T`.
pub struct EventBus<T> {
    subscribers: Vec<(SubscriberId, Box<dyn FnMut(&T)>)>,
    next_id: u64,
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> std::fmt::Debug for EventBus<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T> EventBus<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; it stays registered until unsubscribed.
    pub fn subscribe(&mut self, handler: impl FnMut(&T) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler. Returns `false` if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Call every subscriber with `value`, in subscription order.
    pub fn broadcast(&mut self, value: &T) {
        for (_, handler) in &mut self.subscribers {
            handler(value);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
