use alloc::sync::Arc;

use tracing::{debug, error};

use super::{Registry, Released};
use crate::DisplayProxy;

impl Registry {
    /// Drops one reference to `proxy`. At zero the proxy leaves the table and unsubscribes,
    /// the provider goes with the last `Arc`.
    pub(super) fn release(&self, proxy: &Arc<DisplayProxy>) -> Released {
        let mut displays = self.displays.lock();

        if proxy.release_ref() > 0 {
            return Released::Retained;
        }

        match displays.get(proxy.name()) {
            Some(live) if Arc::ptr_eq(live, proxy) => {
                displays.remove(proxy.name());
            }
            _ => error!("{}: released proxy was not registered", proxy.name()),
        }

        proxy.unsubscribe();
        debug!("{}: last reference released", proxy.name());

        Released::Destroyed
    }
}
