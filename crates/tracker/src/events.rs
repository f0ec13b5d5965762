//! State-change notifications.
//!
//! The tracker publishes an event after each committed mutation so a
//! rendering layer can observe state without coupling to any particular UI
//! technology. Built on a broadcast channel; events published with no
//! subscribers are dropped.

use tokio::sync::broadcast;

use crate::alerts::CommuteAlert;
use crate::identifiers::{ProfileIdentifier, RouteIdentifier};
use crate::models::window::CommuteWindow;

/// Everything the tracker announces to the outside world.
#[derive(Clone, Debug)]
pub enum TrackerEvent {
    /// A new profile replaced whatever was there before.
    ProfileCreated { profile_id: ProfileIdentifier },

    /// The preferred commute window was set or cleared.
    PreferredWindowChanged { window: Option<CommuteWindow> },

    /// A search replaced the suggested batch.
    SuggestionsReplaced { count: usize },

    /// A suggested route moved into the completed history.
    RouteCompleted {
        route_id: RouteIdentifier,
        distance_km: f64,
        co2_saved_grams: f64,
    },

    /// Profile totals were recomputed from the history.
    MetricsRecomputed {
        total_green_kilometers: f64,
        total_co2_saved_grams: f64,
    },

    /// A route's conditions tripped an alert rule.
    AlertRaised {
        route_id: RouteIdentifier,
        alert: CommuteAlert,
    },
}

pub struct EventBus {
    sender: broadcast::Sender<TrackerEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn publish(&self, event: TrackerEvent) {
        match self.sender.send(event) {
            Ok(receivers) => tracing::trace!(receivers, "tracker event published"),
            // No subscribers; the event is dropped.
            Err(_) => tracing::trace!("tracker event published with no subscribers"),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TrackerEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_and_receive() {
        let bus = EventBus::new(16);
        let mut receiver = bus.subscribe();

        bus.publish(TrackerEvent::SuggestionsReplaced { count: 4 });

        match receiver.recv().await {
            Ok(TrackerEvent::SuggestionsReplaced { count }) => assert_eq!(count, 4),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_multiple_subscribers_each_receive() {
        let bus = EventBus::new(16);
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        bus.publish(TrackerEvent::MetricsRecomputed {
            total_green_kilometers: 4.8,
            total_co2_saved_grams: 1500.0,
        });

        assert!(first.try_recv().is_ok());
        assert!(second.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_fine() {
        let bus = EventBus::new(16);
        bus.publish(TrackerEvent::SuggestionsReplaced { count: 0 });
    }
}
