use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use super::DisplayProxy;

/// Identifies a callback registered on a [`DisplayProxy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(Key);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Key {
    Token(u64),
    Address(usize),
}

impl CallbackId {
    /// An id derived from the address of a foreign callback, registering the same address twice
    /// on one display is a no-op.
    pub const fn from_address(address: usize) -> Self {
        Self(Key::Address(address))
    }
}

pub(super) type Callback = Arc<dyn Fn(&DisplayProxy) + Send + Sync>;

/// Registered callbacks in registration order.
#[derive(Default)]
pub(super) struct Callbacks {
    next_token: AtomicU64,
    entries: Mutex<Vec<(CallbackId, Callback)>>,
}

impl Callbacks {
    pub fn next_id(&self) -> CallbackId {
        CallbackId(Key::Token(self.next_token.fetch_add(1, Ordering::Relaxed)))
    }

    /// Inserts the callback unless `id` is already present.
    pub fn insert(&self, id: CallbackId, callback: Callback) -> bool {
        let mut entries = self.entries.lock();

        if entries.iter().any(|(existing, _)| *existing == id) {
            return false;
        }

        entries.push((id, callback));
        true
    }

    pub fn remove(&self, id: CallbackId) -> bool {
        let mut entries = self.entries.lock();

        match entries.iter().position(|(existing, _)| *existing == id) {
            Some(index) => {
                entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// The callbacks registered right now, so they can be invoked without holding the lock.
    pub fn snapshot(&self) -> Vec<Callback> {
        self.entries
            .lock()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }
}
