//! Change notification for store mutations.
//!
//! An explicit subscription rather than a process-wide broadcast: interested
//! views subscribe, mutators publish after a successful write, and everything
//! else relies on the mutator's return value instead.

use std::sync::{Mutex, mpsc};

/// What changed in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    CatalogChanged,
    CartChanged,
}

/// A subscription to store change events.
#[derive(Debug)]
pub struct Subscription {
    receiver: mpsc::Receiver<StoreEvent>,
}

impl Subscription {
    /// Try to receive a change notification without blocking.
    pub fn try_recv(&self) -> Result<StoreEvent, mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain everything currently queued.
    pub fn drain(&self) -> Vec<StoreEvent> {
        let mut events = Vec::new();
        while let Ok(ev) = self.receiver.try_recv() {
            events.push(ev);
        }
        events
    }
}

/// Fan-out of store change events to any number of subscribers.
///
/// Best-effort: dead subscribers are dropped on publish, and a publish with
/// no subscribers is a successful no-op.
#[derive(Debug, Default)]
pub struct StoreWatch {
    subscribers: Mutex<Vec<mpsc::Sender<StoreEvent>>>,
}

impl StoreWatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, event: StoreEvent) {
        match self.subscribers.lock() {
            Ok(mut subs) => {
                subs.retain(|tx| tx.send(event).is_ok());
            }
            Err(_) => {
                tracing::warn!(?event, "store watch lock poisoned; dropping notification");
            }
        }
    }

    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }
        Subscription { receiver: rx }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_see_published_events() {
        let watch = StoreWatch::new();
        let sub = watch.subscribe();

        watch.publish(StoreEvent::CartChanged);
        watch.publish(StoreEvent::CatalogChanged);

        assert_eq!(
            sub.drain(),
            vec![StoreEvent::CartChanged, StoreEvent::CatalogChanged]
        );
    }

    #[test]
    fn each_subscriber_gets_its_own_copy() {
        let watch = StoreWatch::new();
        let a = watch.subscribe();
        let b = watch.subscribe();

        watch.publish(StoreEvent::CartChanged);

        assert_eq!(a.try_recv().unwrap(), StoreEvent::CartChanged);
        assert_eq!(b.try_recv().unwrap(), StoreEvent::CartChanged);
    }

    #[test]
    fn publish_without_subscribers_is_a_noop() {
        let watch = StoreWatch::new();
        watch.publish(StoreEvent::CatalogChanged);
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let watch = StoreWatch::new();
        let sub = watch.subscribe();
        drop(sub);

        watch.publish(StoreEvent::CartChanged);

        let alive = watch.subscribe();
        watch.publish(StoreEvent::CatalogChanged);
        assert_eq!(alive.drain(), vec![StoreEvent::CatalogChanged]);
    }
}
