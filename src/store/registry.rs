use std::{
    fmt,
    sync::{
        Arc, PoisonError, RwLock, Weak,
        atomic::{AtomicBool, Ordering},
    },
};

use tracing::debug;

use super::{StateChange, StatePath};

/// Callback stored for every registration.
pub(super) type Callback = Box<dyn Fn(&StateChange) + Send + Sync>;

/// Identifier of one registration, unique within its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// The raw numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SubscriptionId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// One registered callback.
///
/// The `active` flag is cleared on removal so that a notification pass that
/// already snapshotted this subscriber skips it.
pub(super) struct Subscriber {
    id: SubscriptionId,
    path: StatePath,
    callback: Callback,
    active: AtomicBool,
}

impl Subscriber {
    pub(super) fn id(&self) -> SubscriptionId {
        self.id
    }

    pub(super) fn path(&self) -> &StatePath {
        &self.path
    }

    pub(super) fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub(super) fn invoke(&self, change: &StateChange) {
        (self.callback)(change);
    }

    fn deactivate(&self) {
        self.active.store(false, Ordering::Release);
    }
}

/// Ordered list of subscribers for one store.
///
/// Registration order is notification order.
pub(super) struct SubscriptionRegistry {
    subscribers: Vec<Arc<Subscriber>>,
    next_id: u64,
}

impl SubscriptionRegistry {
    pub(super) fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 1,
        }
    }

    pub(super) fn register(&mut self, path: StatePath, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        debug!(%id, path = %path, "Registering subscriber");
        self.subscribers.push(Arc::new(Subscriber {
            id,
            path,
            callback,
            active: AtomicBool::new(true),
        }));

        id
    }

    /// Removes a registration. Returns false if it was already gone.
    pub(super) fn remove(&mut self, id: SubscriptionId) -> bool {
        let Some(index) = self.subscribers.iter().position(|sub| sub.id == id) else {
            return false;
        };

        let removed = self.subscribers.remove(index);
        removed.deactivate();
        debug!(%id, path = %removed.path, "Removed subscriber");

        true
    }

    /// Snapshot of every subscriber whose path is `path` or one of its ancestors.
    pub(super) fn matching(&self, path: &StatePath) -> Vec<Arc<Subscriber>> {
        self.subscribers
            .iter()
            .filter(|sub| sub.path.covers(path))
            .cloned()
            .collect()
    }

    pub(super) fn contains(&self, id: SubscriptionId) -> bool {
        self.subscribers.iter().any(|sub| sub.id == id)
    }

    pub(super) fn len(&self) -> usize {
        self.subscribers.len()
    }
}

/// Handle returned by `subscribe` and `watch`.
///
/// Dropping the handle keeps the subscription alive; call
/// [`Subscription::unsubscribe`] to end it. The handle does not keep the store
/// alive.
pub struct Subscription {
    id: SubscriptionId,
    path: StatePath,
    registry: Weak<RwLock<SubscriptionRegistry>>,
}

impl Subscription {
    pub(super) fn new(
        id: SubscriptionId,
        path: StatePath,
        registry: &Arc<RwLock<SubscriptionRegistry>>,
    ) -> Self {
        Self {
            id,
            path,
            registry: Arc::downgrade(registry),
        }
    }

    /// The registration id.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// The watched path.
    pub fn path(&self) -> &StatePath {
        &self.path
    }

    /// Whether the registration is still present in a live store.
    pub fn is_active(&self) -> bool {
        self.registry.upgrade().is_some_and(|registry| {
            registry
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .contains(self.id)
        })
    }

    /// Removes the registration.
    ///
    /// Calling this more than once, or after the store is gone, does nothing.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("path", &self.path.as_str())
            .finish()
    }
}
