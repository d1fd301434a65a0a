mod display;
mod drop;
mod enumerate;
mod instance;
mod release;

use alloc::sync::Arc;
use core::fmt;
use std::collections::HashMap;

use parking_lot::Mutex;

pub use display::Display;
pub use enumerate::EnumerateError;

use crate::{Config, DisplayProxy, ProviderDirectory};

/// The instance name used when a caller does not ask for a specific display.
pub const DEFAULT_DISPLAY: &str = "DisplayInfo";

/// Table of live display proxies, at most one per display name.
///
/// Creation and release are serialized by the table lock, resolution through the
/// [`ProviderDirectory`] included, so two callers asking for the same new display can never
/// both create a proxy. The registry must outlive every handle it gave out, dropping it while
/// proxies are still referenced panics.
pub struct Registry {
    config: Config,
    directory: Arc<dyn ProviderDirectory>,
    displays: Mutex<HashMap<String, Arc<DisplayProxy>>>,
}

/// The outcome of releasing a [`Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::exhaustive_enums)]
pub enum Released {
    /// Other references remain, the proxy is still registered.
    Retained,

    /// That was the last reference, the proxy was unsubscribed and removed.
    Destroyed,
}

impl Registry {
    /// Create an empty registry resolving displays through `directory`.
    ///
    /// The config is kept for the registry's lifetime and passed to every resolution.
    pub fn new(config: Config, directory: Arc<dyn ProviderDirectory>) -> Self {
        Self {
            config,
            directory,
            displays: Mutex::new(HashMap::new()),
        }
    }

    /// The transport config every resolution uses.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of live proxies.
    pub fn len(&self) -> usize {
        self.displays.lock().len()
    }

    /// Whether no proxies are live.
    pub fn is_empty(&self) -> bool {
        self.displays.lock().is_empty()
    }

    /// Whether a proxy for `name` is live.
    pub fn contains(&self, name: &str) -> bool {
        self.displays.lock().contains_key(name)
    }

    /// Reclaims a reference previously leaked with [`Display::into_raw`].
    ///
    /// Returns `None` when `proxy` is not a live proxy of this registry. Reclaiming more
    /// references than were leaked corrupts the reference count.
    pub fn display_from_raw(&self, proxy: *const DisplayProxy) -> Option<Display<'_>> {
        let displays = self.displays.lock();

        displays
            .values()
            .find(|live| core::ptr::eq(Arc::as_ptr(live), proxy))
            .map(|live| Display::adopt(self, Arc::clone(live)))
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let displays = self.displays.lock();
        let names: Vec<&str> = displays.keys().map(String::as_str).collect();

        f.debug_struct("Registry")
            .field("endpoint", &self.config.endpoint)
            .field("displays", &names)
            .finish_non_exhaustive()
    }
}
