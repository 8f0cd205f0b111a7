use std::{
    any,
    cell::RefCell,
    collections::HashMap,
    fmt,
    panic::{self, AssertUnwindSafe},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tracing::{debug, error, instrument, trace, warn};

use crate::config::{ChangePolicy, StoreOptions};

use super::{
    StateChange, StatePath, StoreError, Subscription, SubscriptionId,
    path_ops::{navigate_path, remove_value_at_path, set_value_at_path},
    registry::{Subscriber, SubscriptionRegistry},
};

/// A subscriber paired with the change it is about to receive.
type Notification = (Arc<Subscriber>, Arc<StateChange>);

thread_local! {
    /// Notification passes running on this thread, per store.
    static NOTIFY_DEPTH: RefCell<HashMap<usize, usize>> = RefCell::new(HashMap::new());
}

/// Reactive application state addressed by dot-separated paths.
///
/// Every `PathStore::new` owns its own tree and subscriber registry. Cloning a
/// store produces another handle to the same tree, which is how several
/// components share one application state.
///
/// Writes notify subscribers synchronously: a subscriber on `"app"` hears about
/// `set("app.config.theme", ..)` and receives the updated `"app"` subtree,
/// while a subscriber on `"app.config.theme"` receives the new leaf. No lock
/// is held while callbacks run, so callbacks may read and write the store.
///
/// Nesting is counted per thread: a write made from inside a callback is
/// nested in the pass that called it, while passes running on other threads
/// are independent of each other.
#[derive(Clone)]
pub struct PathStore {
    tree: Arc<RwLock<Value>>,
    registry: Arc<RwLock<SubscriptionRegistry>>,
    options: StoreOptions,
}

impl PathStore {
    /// Creates an empty store with default options.
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Creates an empty store with the given options.
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            tree: Arc::new(RwLock::new(Value::Object(Map::new()))),
            registry: Arc::new(RwLock::new(SubscriptionRegistry::new())),
            options,
        }
    }

    /// The options this store was created with.
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Retrieves the value at the specified path
    ///
    /// Returns `None` when any segment is missing, when an intermediate value is
    /// not a mapping, or when the path is malformed. Never modifies the tree.
    ///
    /// # Arguments
    /// * `path` - Dot-separated path (e.g., "app.config.theme")
    pub fn get(&self, path: &str) -> Option<Value> {
        let path = match StatePath::parse(path) {
            Ok(path) => path,
            Err(e) => {
                debug!(error = %e, "Ignoring read of malformed path");
                return None;
            }
        };

        navigate_path(&self.read_tree(), path.segments()).cloned()
    }

    /// Retrieves the value at the specified path as a specific type
    ///
    /// # Errors
    /// * `StoreError::TypeMismatch` - If the stored value cannot be deserialized into `T`
    pub fn get_as<T>(&self, path: &str) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let Some(value) = self.get(path) else {
            return Ok(None);
        };

        serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|_| StoreError::TypeMismatch {
                path: path.to_string(),
                expected_type: any::type_name::<T>(),
                actual_value: value,
            })
    }

    /// Returns true if a value is stored at the path.
    pub fn contains(&self, path: &str) -> bool {
        StatePath::parse(path)
            .is_ok_and(|path| navigate_path(&self.read_tree(), path.segments()).is_some())
    }

    /// Returns a copy of the whole tree.
    pub fn snapshot(&self) -> Value {
        self.read_tree().clone()
    }

    /// Sets a value at the specified path and notifies matching subscribers
    ///
    /// Missing intermediate mappings are created, and intermediate values that
    /// are not mappings are replaced by mappings. Subscribers on the path and
    /// on each of its ancestors run before this returns, in registration order.
    ///
    /// # Arguments
    /// * `path` - Dot-separated path (e.g., "app.config.theme")
    /// * `value` - The value to store; any JSON value, including whole subtrees
    ///
    /// # Errors
    /// * `StoreError::InvalidPath` - If the path is malformed
    #[instrument(level = "debug", skip(self, value))]
    pub fn set(&self, path: &str, value: impl Into<Value>) -> Result<(), StoreError> {
        let path = StatePath::parse(path)?;
        self.write(&path, Some(value.into()));

        Ok(())
    }

    /// Serializes a typed value and stores it at the specified path
    ///
    /// # Errors
    /// * `StoreError::Serialization` - If the value cannot be represented as JSON
    /// * `StoreError::InvalidPath` - If the path is malformed
    pub fn set_serialized<T>(&self, path: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value).map_err(|e| StoreError::Serialization {
            path: path.to_string(),
            details: e.to_string(),
        })?;

        self.set(path, value)
    }

    /// Computes a new value from the current one and stores it
    ///
    /// # Errors
    /// * `StoreError::InvalidPath` - If the path is malformed
    pub fn update<F>(&self, path: &str, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(Option<&Value>) -> Value,
    {
        let path = StatePath::parse(path)?;
        let current = navigate_path(&self.read_tree(), path.segments()).cloned();

        self.write(&path, Some(f(current.as_ref())));

        Ok(())
    }

    /// Removes the value at the specified path and returns it
    ///
    /// Removing a path that holds nothing is a no-op and notifies nobody.
    ///
    /// # Errors
    /// * `StoreError::InvalidPath` - If the path is malformed
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&self, path: &str) -> Result<Option<Value>, StoreError> {
        let path = StatePath::parse(path)?;

        Ok(self.write(&path, None))
    }

    /// Subscribes to changes at a path and below
    ///
    /// The callback receives `(new, old)` read at `path`: for a write to a
    /// descendant, that is the whole subtree at `path` after and before the
    /// write.
    ///
    /// # Errors
    /// * `StoreError::InvalidPath` - If the path is malformed
    pub fn subscribe<F>(&self, path: &str, callback: F) -> Result<Subscription, StoreError>
    where
        F: Fn(Option<&Value>, Option<&Value>) + Send + Sync + 'static,
    {
        self.watch(path, move |change: &StateChange| {
            callback(change.new_value.as_ref(), change.old_value.as_ref());
        })
    }

    /// Subscribes to changes at a path and below, receiving full change records
    ///
    /// # Errors
    /// * `StoreError::InvalidPath` - If the path is malformed
    pub fn watch<F>(&self, path: &str, callback: F) -> Result<Subscription, StoreError>
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        let path = StatePath::parse(path)?;
        let id = self
            .write_registry()
            .register(path.clone(), Box::new(callback));

        Ok(Subscription::new(id, path, &self.registry))
    }

    /// Removes a registration by id. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.write_registry().remove(id)
    }

    /// Number of live registrations.
    pub fn subscriber_count(&self) -> usize {
        self.read_registry().len()
    }

    /// Applies a write (`Some`) or removal (`None`) and runs the notification pass.
    ///
    /// Returns the value previously stored at `path`.
    fn write(&self, path: &StatePath, value: Option<Value>) -> Option<Value> {
        let subscribers = self.read_registry().matching(path);

        let (previous, notifications) = {
            let mut tree = self.write_tree();

            let current = navigate_path(&tree, path.segments());
            if current == value.as_ref() {
                if value.is_none() {
                    trace!(path = %path, "Nothing stored, remove is a no-op");
                    return None;
                }

                if self.options.change_policy == ChangePolicy::SkipUnchanged {
                    trace!(path = %path, "Value unchanged, skipping notification");
                    return current.cloned();
                }
            }

            let before = capture_scopes(&tree, &subscribers);

            let previous = match value {
                Some(value) => set_value_at_path(&mut tree, path.segments(), value),
                None => remove_value_at_path(&mut tree, path.segments()),
            };

            debug!(path = %path, subscribers = subscribers.len(), "State updated");

            let changes: Vec<Arc<StateChange>> = before
                .into_iter()
                .map(|(scope, old_value)| {
                    let new_value = navigate_path(&tree, scope.segments()).cloned();
                    Arc::new(StateChange::new(
                        path.to_string(),
                        scope.to_string(),
                        old_value,
                        new_value,
                    ))
                })
                .collect();

            let notifications: Vec<Notification> = subscribers
                .into_iter()
                .filter_map(|subscriber| {
                    let change = changes
                        .iter()
                        .find(|change| change.scope == subscriber.path().as_str())?;

                    Some((subscriber, Arc::clone(change)))
                })
                .collect();

            (previous, notifications)
        };

        self.dispatch(path, notifications);

        previous
    }

    /// Runs one notification pass.
    ///
    /// Each callback is isolated: a panicking subscriber is logged and the
    /// rest of the pass continues.
    fn dispatch(&self, path: &StatePath, notifications: Vec<Notification>) {
        if notifications.is_empty() {
            return;
        }

        let guard = DepthGuard::enter(Arc::as_ptr(&self.tree).addr());
        if guard.nested() > self.options.max_notify_depth {
            warn!(
                path = %path,
                nested = guard.nested(),
                limit = self.options.max_notify_depth,
                "Nested notification depth exceeded, skipping subscribers"
            );
            return;
        }

        for (subscriber, change) in notifications {
            if !subscriber.is_active() {
                trace!(id = %subscriber.id(), "Subscriber removed during dispatch, skipping");
                continue;
            }

            trace!(id = %subscriber.id(), scope = %change.scope, "Notifying subscriber");

            let outcome = panic::catch_unwind(AssertUnwindSafe(|| subscriber.invoke(&change)));
            if outcome.is_err() {
                error!(
                    id = %subscriber.id(),
                    scope = %subscriber.path(),
                    path = %path,
                    "Subscriber panicked during notification"
                );
            }
        }
    }

    fn read_tree(&self) -> RwLockReadGuard<'_, Value> {
        self.tree.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_tree(&self) -> RwLockWriteGuard<'_, Value> {
        self.tree.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_registry(&self) -> RwLockReadGuard<'_, SubscriptionRegistry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_registry(&self) -> RwLockWriteGuard<'_, SubscriptionRegistry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PathStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PathStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathStore")
            .field("options", &self.options)
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}

/// Reads the value at every distinct subscriber path, in first-seen order.
fn capture_scopes(tree: &Value, subscribers: &[Arc<Subscriber>]) -> Vec<(StatePath, Option<Value>)> {
    let mut scopes: Vec<(StatePath, Option<Value>)> = Vec::new();

    for subscriber in subscribers {
        if scopes.iter().any(|(scope, _)| scope == subscriber.path()) {
            continue;
        }

        let value = navigate_path(tree, subscriber.path().segments()).cloned();
        scopes.push((subscriber.path().clone(), value));
    }

    scopes
}

/// Counts the notification passes of one store running on the current thread.
struct DepthGuard {
    store: usize,
    depth: usize,
}

impl DepthGuard {
    fn enter(store: usize) -> Self {
        let depth = NOTIFY_DEPTH.with(|depths| {
            let mut depths = depths.borrow_mut();
            let depth = depths.entry(store).or_insert(0);
            *depth += 1;
            *depth
        });

        Self { store, depth }
    }

    /// Passes that were already running when this one started.
    fn nested(&self) -> usize {
        self.depth - 1
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        NOTIFY_DEPTH.with(|depths| {
            let mut depths = depths.borrow_mut();

            if let Some(depth) = depths.get_mut(&self.store) {
                *depth -= 1;
                if *depth == 0 {
                    depths.remove(&self.store);
                }
            }
        });
    }
}
