use alloc::sync::Arc;

use tracing::{Level, debug, instrument, warn};

use super::{Display, Registry};
use crate::{DisplayProxy, ResolveError};

impl Registry {
    /// Returns a handle to the display called `name`, creating its proxy on first use.
    ///
    /// A live proxy gains a reference. Otherwise the name is resolved through the directory
    /// while the table is locked; `None` means no provider could be reached for it and nothing
    /// was registered.
    #[instrument("Registry::instance", level = Level::DEBUG, skip(self))]
    pub fn instance(&self, name: &str) -> Option<Display<'_>> {
        let mut displays = self.displays.lock();

        if let Some(proxy) = displays.get(name) {
            proxy.add_ref();
            debug!("Found existing display, {} references", proxy.references());
            return Some(Display::adopt(self, Arc::clone(proxy)));
        }

        let provider = match self.directory.resolve(&self.config, name) {
            Ok(provider) => provider,
            Err(ResolveError::NotFound(_)) => {
                debug!("No provider for display");
                return None;
            }
            Err(e) => {
                warn!("Could not resolve display {name}: {e}");
                return None;
            }
        };

        let proxy = Arc::new(DisplayProxy::new(name, provider));
        displays.insert(name.to_owned(), Arc::clone(&proxy));
        proxy.subscribe();

        debug!("Created display");

        Some(Display::adopt(self, proxy))
    }
}
