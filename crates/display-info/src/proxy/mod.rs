mod callbacks;

use alloc::sync::{Arc, Weak};
use core::{
    fmt,
    sync::atomic::{AtomicU32, Ordering},
};

use parking_lot::Mutex;
use tracing::{debug, trace};

pub use callbacks::CallbackId;

use crate::{ConnectionProperties, HdcpProtection, HdrType, Subscription, UpdateSink};
use callbacks::Callbacks;

/// The local stand-in for one remote display.
///
/// Owned by a [`crate::Registry`], which hands out [`crate::Display`] handles to it. Property
/// accessors go straight to the provider, nothing is cached.
pub struct DisplayProxy {
    name: String,
    provider: Arc<dyn ConnectionProperties>,
    subscription: Mutex<Option<Subscription>>,
    references: AtomicU32,
    callbacks: Callbacks,
}

impl DisplayProxy {
    /// A proxy holding one reference.
    pub(crate) fn new(name: &str, provider: Arc<dyn ConnectionProperties>) -> Self {
        Self {
            name: name.to_owned(),
            provider,
            subscription: Mutex::new(None),
            references: AtomicU32::new(1),
            callbacks: Callbacks::default(),
        }
    }

    /// Subscribes to provider updates. The provider only gets a weak reference.
    pub(crate) fn subscribe(self: &Arc<Self>) {
        let this: Weak<Self> = Arc::downgrade(self);
        let sink: Weak<dyn UpdateSink> = this;

        let subscription = self.provider.subscribe(sink);
        trace!("{}: subscribed as {:?}", self.name, subscription);

        if let Some(previous) = self.subscription.lock().replace(subscription) {
            self.provider.unsubscribe(previous);
        }
    }

    pub(crate) fn unsubscribe(&self) {
        if let Some(subscription) = self.subscription.lock().take() {
            self.provider.unsubscribe(subscription);
            trace!("{}: unsubscribed {:?}", self.name, subscription);
        }
    }

    pub(crate) fn add_ref(&self) {
        self.references.fetch_add(1, Ordering::AcqRel);
    }

    /// Drops one reference, returns the count that remains.
    pub(crate) fn release_ref(&self) -> u32 {
        let previous = self.references.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(previous > 0, "{} released more often than acquired", self.name);
        previous.saturating_sub(1)
    }

    /// The display name this proxy was created for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outstanding references to this proxy.
    pub fn references(&self) -> u32 {
        self.references.load(Ordering::Acquire)
    }

    /// Registers a callback that runs on every provider update, returns its id.
    pub fn register<F>(&self, callback: F) -> CallbackId
    where
        F: Fn(&Self) + Send + Sync + 'static,
    {
        let id = self.callbacks.next_id();
        self.callbacks.insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback under a caller chosen id.
    ///
    /// Returns `false` and keeps the existing callback when `id` is already registered.
    pub fn register_as<F>(&self, id: CallbackId, callback: F) -> bool
    where
        F: Fn(&Self) + Send + Sync + 'static,
    {
        self.callbacks.insert(id, Arc::new(callback))
    }

    /// Removes a callback, returns `false` if it was not registered.
    pub fn unregister(&self, id: CallbackId) -> bool {
        self.callbacks.remove(id)
    }

    /// Number of registered callbacks.
    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether audio is passed through to the display untouched.
    pub fn is_audio_passthrough(&self) -> bool {
        self.provider.is_audio_passthrough()
    }

    /// Whether a display is connected.
    pub fn connected(&self) -> bool {
        self.provider.connected()
    }

    /// Horizontal resolution in pixels.
    pub fn width(&self) -> u32 {
        self.provider.width()
    }

    /// Vertical resolution in pixels.
    pub fn height(&self) -> u32 {
        self.provider.height()
    }

    /// Vertical refresh rate in Hz.
    pub fn vertical_frequency(&self) -> u32 {
        self.provider.vertical_frequency()
    }

    /// The current HDR mode.
    pub fn hdr(&self) -> HdrType {
        HdrType::from_raw(self.provider.hdr_type())
    }

    /// The current HDCP protection level.
    pub fn hdcp_protection(&self) -> HdcpProtection {
        HdcpProtection::from_raw(self.provider.hdcp_protection())
    }
}

impl UpdateSink for DisplayProxy {
    fn updated(&self) {
        let callbacks = self.callbacks.snapshot();
        debug!("{}: updated, notifying {} callbacks", self.name, callbacks.len());

        for callback in callbacks {
            callback(self);
        }
    }
}

impl Drop for DisplayProxy {
    fn drop(&mut self) {
        self.unsubscribe();
        debug!("{}: destroyed", self.name);
    }
}

impl fmt::Debug for DisplayProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayProxy")
            .field("name", &self.name)
            .field("references", &self.references())
            .field("callbacks", &self.callbacks.len())
            .finish_non_exhaustive()
    }
}
