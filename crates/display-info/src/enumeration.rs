use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::Registry;

/// Index based walk over the display names of a registry.
///
/// Index `0` takes a fresh snapshot, every later index reads from that snapshot so one walk
/// sees a stable list even while modules come and go. Each cache serves one walk at a time,
/// callers walking independently should use separate caches.
#[derive(Debug, Default)]
pub struct EnumerationCache {
    names: Mutex<Vec<String>>,
}

impl EnumerationCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The name at `index`, or `None` past the end of the snapshot.
    ///
    /// A failed enumeration leaves the snapshot empty.
    pub fn name_at(&self, registry: &Registry, index: usize) -> Option<String> {
        let mut names = self.names.lock();

        if index == 0 {
            names.clear();

            match registry.enumerate() {
                Ok(found) => {
                    debug!("Enumerated {} displays", found.len());
                    *names = found;
                }
                Err(e) => warn!("Could not enumerate displays: {e}"),
            }
        }

        names.get(index).cloned()
    }

    /// Length of the current snapshot.
    pub fn len(&self) -> usize {
        self.names.lock().len()
    }

    /// Whether the current snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.names.lock().is_empty()
    }
}
