use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{
    config::Config,
    store::{PathStore, Subscription, SubscriptionId},
};

/// Lines produced by watch subscriptions, waiting to be printed.
///
/// Subscribers push into the sink while a command runs; the session drains
/// it after the command returns so notifications follow the command output.
#[derive(Clone, Default)]
pub struct EventSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl EventSink {
    /// Appends a line.
    pub fn push(&self, line: String) {
        self.lock().push(line);
    }

    /// Takes every pending line, oldest first.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// State shared by every command of one session.
pub struct CliContext {
    store: PathStore,
    config: Config,
    events: EventSink,
    watches: Mutex<BTreeMap<SubscriptionId, Subscription>>,
}

impl CliContext {
    /// Creates a context around a store and the configuration it was built from.
    pub fn new(store: PathStore, config: Config) -> Self {
        Self {
            store,
            config,
            events: EventSink::default(),
            watches: Mutex::new(BTreeMap::new()),
        }
    }

    /// The store commands operate on.
    pub fn store(&self) -> &PathStore {
        &self.store
    }

    /// The loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sink that watch subscriptions write to.
    pub fn events(&self) -> &EventSink {
        &self.events
    }

    /// Keeps a watch handle so it can be cancelled by id later.
    pub fn add_watch(&self, subscription: Subscription) {
        self.lock_watches().insert(subscription.id(), subscription);
    }

    /// Forgets a watch handle and returns it.
    pub fn take_watch(&self, id: SubscriptionId) -> Option<Subscription> {
        self.lock_watches().remove(&id)
    }

    /// Watches started in this session and still running, by ascending id.
    pub fn active_watches(&self) -> Vec<(SubscriptionId, String)> {
        self.lock_watches()
            .values()
            .map(|sub| (sub.id(), sub.path().to_string()))
            .collect()
    }

    fn lock_watches(&self) -> MutexGuard<'_, BTreeMap<SubscriptionId, Subscription>> {
        self.watches.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
