//! Cross-component invalidation, keyed by resource kind. A mutation on one
//! screen (role created, CV uploaded) publishes the affected resources;
//! screens holding that data subscribe and refetch. Replaces a global
//! refresh counter watched by every consumer.

use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Roles,
    Candidates,
    Evaluations,
    Dashboard,
}

#[derive(Debug, Clone)]
pub struct InvalidationBus {
    tx: broadcast::Sender<Resource>,
}

impl Default for InvalidationBus {
    fn default() -> Self {
        Self::new()
    }
}

impl InvalidationBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(32);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Resource> {
        self.tx.subscribe()
    }

    /// Publishes an invalidation. With no subscribers this is a no-op.
    pub fn publish(&self, resource: Resource) {
        let _ = self.tx.send(resource);
    }

    /// A role was created or edited: role lists and the dashboard are stale.
    pub fn role_created(&self) {
        self.publish(Resource::Roles);
        self.publish(Resource::Dashboard);
    }

    /// A CV was uploaded: candidate lists, evaluation stats, and the
    /// dashboard are stale.
    pub fn cv_uploaded(&self) {
        self.publish(Resource::Candidates);
        self.publish(Resource::Evaluations);
        self.publish(Resource::Dashboard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_published_resources() {
        let bus = InvalidationBus::new();
        let mut rx = bus.subscribe();

        bus.publish(Resource::Roles);
        assert_eq!(rx.recv().await.unwrap(), Resource::Roles);
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_a_noop() {
        let bus = InvalidationBus::new();
        bus.publish(Resource::Dashboard); // must not panic or error
    }

    #[tokio::test]
    async fn cv_upload_touches_candidates_evaluations_and_dashboard() {
        let bus = InvalidationBus::new();
        let mut rx = bus.subscribe();

        bus.cv_uploaded();
        assert_eq!(rx.recv().await.unwrap(), Resource::Candidates);
        assert_eq!(rx.recv().await.unwrap(), Resource::Evaluations);
        assert_eq!(rx.recv().await.unwrap(), Resource::Dashboard);
    }

    #[tokio::test]
    async fn each_subscriber_sees_every_event() {
        let bus = InvalidationBus::new();
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();

        bus.role_created();
        assert_eq!(a.recv().await.unwrap(), Resource::Roles);
        assert_eq!(b.recv().await.unwrap(), Resource::Roles);
    }
}
