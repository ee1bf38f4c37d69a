//! Single-consumer queue between the ad network and the coordinator.
//!
//! SDK callbacks arrive on the SDK's own threads. They only ever push onto
//! this queue; the coordinator drains it on its owning context, which is the
//! one place rewarded-ad state is mutated and consumer callbacks run.

use pinball_ads_domain::AdEvent;
use tokio::sync::mpsc;

/// Raised when the coordinator (and its receiver) has been dropped.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Rewarded ad event queue is closed; dropped {kind} event")]
pub struct EventChannelClosed {
    pub kind: &'static str,
}

/// Create a connected sender/receiver pair.
pub fn channel() -> (AdEventSender, AdEventReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (AdEventSender { tx }, AdEventReceiver { rx })
}

/// Cloneable producer handle given to network backends. Safe to use from any
/// thread, with or without a Tokio runtime.
#[derive(Debug, Clone)]
pub struct AdEventSender {
    tx: mpsc::UnboundedSender<AdEvent>,
}

impl AdEventSender {
    pub fn send(&self, event: AdEvent) -> Result<(), EventChannelClosed> {
        self.tx.send(event).map_err(|err| EventChannelClosed {
            kind: err.0.kind(),
        })
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consumer half, owned by the coordinator.
#[derive(Debug)]
pub struct AdEventReceiver {
    rx: mpsc::UnboundedReceiver<AdEvent>,
}

impl AdEventReceiver {
    /// Next queued event without waiting (frame-loop polling).
    pub fn try_next(&mut self) -> Option<AdEvent> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next event. `None` once every sender is gone and the
    /// queue is empty.
    pub async fn next(&mut self) -> Option<AdEvent> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinball_ads_domain::Reward;

    #[test]
    fn events_from_another_thread_keep_arrival_order() {
        let (tx, mut rx) = channel();

        let producer = std::thread::spawn(move || {
            tx.send(AdEvent::Opened).unwrap();
            tx.send(AdEvent::Started).unwrap();
            tx.send(AdEvent::rewarded(Reward::new(1.0, "ball"))).unwrap();
            tx.send(AdEvent::Closed).unwrap();
        });
        producer.join().unwrap();

        let drained: Vec<_> = std::iter::from_fn(|| rx.try_next()).collect();
        assert_eq!(
            drained,
            vec![
                AdEvent::Opened,
                AdEvent::Started,
                AdEvent::rewarded(Reward::new(1.0, "ball")),
                AdEvent::Closed,
            ]
        );
    }

    #[test]
    fn send_after_receiver_dropped_reports_event_kind() {
        let (tx, rx) = channel();
        drop(rx);

        assert!(tx.is_closed());
        let err = tx.send(AdEvent::Loaded).unwrap_err();
        assert_eq!(err.kind, "loaded");
        assert!(err.to_string().contains("loaded"));
    }

    #[tokio::test]
    async fn next_returns_none_when_all_senders_dropped() {
        let (tx, mut rx) = channel();
        tx.send(AdEvent::Loaded).unwrap();
        drop(tx);

        assert_eq!(rx.next().await, Some(AdEvent::Loaded));
        assert_eq!(rx.next().await, None);
    }
}
