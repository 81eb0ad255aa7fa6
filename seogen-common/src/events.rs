//! Progress events and the broadcast event bus
//!
//! The batch orchestrator reports progress once per completed batch through a
//! [`ProgressObserver`]. Closures implement the trait directly; the
//! [`EventBus`] implements it by broadcasting [`GenerationEvent`]s so that a
//! CLI, a log sink or a test can subscribe without knowing anything about the
//! pipeline internals.

use crate::kinds::EntityKind;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Point-in-time view of a running phase, emitted after each batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Phase being processed
    pub kind: EntityKind,
    /// 1-based index of the batch that just completed
    pub batch: usize,
    /// Total number of batches in this phase
    pub total_batches: usize,
    /// Total items in this phase
    pub total: usize,
    /// Items settled so far (any outcome)
    pub processed: usize,
    /// Items persisted
    pub successful: usize,
    /// Items rejected by the quality gate
    pub rejected: usize,
    /// Items that errored (malformed input, I/O)
    pub failed: usize,
    /// Milliseconds since the phase started
    pub elapsed_ms: u64,
    /// Extrapolated from the average time per processed item
    pub estimated_remaining_ms: u64,
}

impl ProgressSnapshot {
    /// Fraction of the phase completed (0.0-1.0)
    pub fn fraction_complete(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.processed as f64 / self.total as f64
        }
    }

    /// Items that did not end up persisted
    pub fn unsuccessful(&self) -> usize {
        self.rejected + self.failed
    }
}

/// Events broadcast over the [`EventBus`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GenerationEvent {
    /// A phase is about to start
    PhaseStarted {
        /// Phase kind
        kind: EntityKind,
        /// Items in the phase
        total: usize,
    },

    /// A batch finished
    Progress(ProgressSnapshot),

    /// A phase finished
    PhaseCompleted {
        /// Phase kind
        kind: EntityKind,
        /// Items persisted
        successful: usize,
        /// Items not persisted
        unsuccessful: usize,
    },
}

/// Broadcast bus for generation events
///
/// Cloning the bus shares the underlying channel.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<GenerationEvent>,
    capacity: usize,
}

impl EventBus {
    /// Creates a new EventBus buffering up to `capacity` events per subscriber
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx, capacity }
    }

    /// Subscribe to all future events
    pub fn subscribe(&self) -> broadcast::Receiver<GenerationEvent> {
        self.tx.subscribe()
    }

    /// Emit an event to all subscribers
    ///
    /// Returns `Ok(subscriber_count)` if at least one subscriber exists.
    #[allow(clippy::result_large_err)]
    pub fn emit(
        &self,
        event: GenerationEvent,
    ) -> Result<usize, broadcast::error::SendError<GenerationEvent>> {
        self.tx.send(event)
    }

    /// Emit an event, ignoring if no subscribers are listening
    pub fn emit_lossy(&self, event: GenerationEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!("No subscribers for generation event");
        }
    }

    /// Configured channel capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Receives progress from a running generation phase
///
/// `on_progress` fires exactly once per completed batch. The phase hooks
/// default to no-ops.
pub trait ProgressObserver: Send + Sync {
    /// A batch finished
    fn on_progress(&self, snapshot: &ProgressSnapshot);

    /// A phase is about to start
    fn on_phase_started(&self, _kind: EntityKind, _total: usize) {}

    /// A phase finished
    fn on_phase_completed(&self, _kind: EntityKind, _successful: usize, _unsuccessful: usize) {}
}

impl<F> ProgressObserver for F
where
    F: Fn(&ProgressSnapshot) + Send + Sync,
{
    fn on_progress(&self, snapshot: &ProgressSnapshot) {
        self(snapshot)
    }
}

impl ProgressObserver for EventBus {
    fn on_progress(&self, snapshot: &ProgressSnapshot) {
        self.emit_lossy(GenerationEvent::Progress(snapshot.clone()));
    }

    fn on_phase_started(&self, kind: EntityKind, total: usize) {
        self.emit_lossy(GenerationEvent::PhaseStarted { kind, total });
    }

    fn on_phase_completed(&self, kind: EntityKind, successful: usize, unsuccessful: usize) {
        self.emit_lossy(GenerationEvent::PhaseCompleted {
            kind,
            successful,
            unsuccessful,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(processed: usize, total: usize) -> ProgressSnapshot {
        ProgressSnapshot {
            kind: EntityKind::Game,
            batch: 1,
            total_batches: 3,
            total,
            processed,
            successful: processed.saturating_sub(1),
            rejected: 1,
            failed: 0,
            elapsed_ms: 100,
            estimated_remaining_ms: 200,
        }
    }

    #[test]
    fn test_fraction_complete() {
        assert_eq!(snapshot(5, 10).fraction_complete(), 0.5);
        assert_eq!(snapshot(0, 0).fraction_complete(), 1.0);
        assert_eq!(snapshot(5, 10).unsuccessful(), 1);
    }

    #[test]
    fn test_emit_without_subscribers_fails() {
        let bus = EventBus::new(10);
        assert!(bus.emit(GenerationEvent::Progress(snapshot(1, 2))).is_err());
        bus.emit_lossy(GenerationEvent::Progress(snapshot(1, 2)));
    }

    #[tokio::test]
    async fn test_subscriber_receives_events() {
        let bus = EventBus::new(10);
        let mut rx = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);

        bus.emit(GenerationEvent::PhaseStarted {
            kind: EntityKind::Tag,
            total: 4,
        })
        .unwrap();

        match rx.recv().await.unwrap() {
            GenerationEvent::PhaseStarted { kind, total } => {
                assert_eq!(kind, EntityKind::Tag);
                assert_eq!(total, 4);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_closure_observer() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = AtomicUsize::new(0);
        let observer = |s: &ProgressSnapshot| {
            calls.fetch_add(s.processed, Ordering::SeqCst);
        };
        observer.on_progress(&snapshot(4, 10));
        observer.on_phase_started(EntityKind::Game, 10);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_event_bus_as_observer() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();
        let observer: &dyn ProgressObserver = &bus;

        observer.on_phase_started(EntityKind::Category, 2);
        observer.on_progress(&snapshot(2, 2));
        observer.on_phase_completed(EntityKind::Category, 2, 0);

        assert!(matches!(rx.recv().await.unwrap(), GenerationEvent::PhaseStarted { .. }));
        assert!(matches!(rx.recv().await.unwrap(), GenerationEvent::Progress(_)));
        assert!(matches!(
            rx.recv().await.unwrap(),
            GenerationEvent::PhaseCompleted { successful: 2, .. }
        ));
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let json = serde_json::to_value(GenerationEvent::PhaseCompleted {
            kind: EntityKind::Game,
            successful: 3,
            unsuccessful: 1,
        })
        .unwrap();
        assert_eq!(json["type"], "PhaseCompleted");
        assert_eq!(json["kind"], "game");
    }
}
