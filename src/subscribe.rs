//! Subscriber registry shared by all state containers
//!
//! Each store embeds one `Subscribers` registry and fires it after a
//! mutation has fully landed in the store's internal collections. Listeners
//! therefore always observe a consistent post-mutation snapshot when they
//! re-read the store (read-your-writes).

/// Handle returned by `subscribe`, used to unsubscribe later
pub type SubscriberId = u64;

/// A registry of change listeners
///
/// Listeners are plain `FnMut()` callbacks: they carry no payload because
/// the presentation layer is expected to re-derive its views from the
/// store's current state rather than cache what a notification delivered.
/// Listeners are invoked in subscription order.
#[derive(Default)]
pub struct Subscribers {
    next_id: SubscriberId,
    listeners: Vec<(SubscriberId, Box<dyn FnMut()>)>,
}

impl Subscribers {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener and return its id
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) -> SubscriberId {
        self.next_id += 1;
        let id = self.next_id;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener by id
    ///
    /// # Returns
    /// True if a listener with that id was registered
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Invoke every listener, in subscription order
    ///
    /// Stores must call this only after their internal collections are
    /// fully updated.
    pub fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener();
        }
    }
}
