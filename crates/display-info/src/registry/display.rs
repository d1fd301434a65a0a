use alloc::sync::Arc;
use core::{fmt, ops::Deref};

use super::{Registry, Released};
use crate::DisplayProxy;

/// One counted reference to a [`DisplayProxy`].
///
/// Dropping the handle releases the reference, [`Display::release`] does the same and reports
/// whether the proxy was destroyed. Cloning acquires another reference.
#[must_use]
pub struct Display<'registry> {
    registry: &'registry Registry,
    proxy: Arc<DisplayProxy>,
    released: bool,
}

impl<'registry> Display<'registry> {
    /// Wraps a reference the caller already accounted for.
    pub(super) fn adopt(registry: &'registry Registry, proxy: Arc<DisplayProxy>) -> Self {
        Self {
            registry,
            proxy,
            released: false,
        }
    }

    /// Releases this reference.
    pub fn release(mut self) -> Released {
        self.released = true;
        self.registry.release(&self.proxy)
    }

    /// Leaks the reference and returns the proxy address.
    ///
    /// The address stays valid until the reference is reclaimed with
    /// [`Registry::display_from_raw`] and released.
    pub fn into_raw(mut self) -> *const DisplayProxy {
        self.released = true;
        Arc::as_ptr(&self.proxy)
    }

    /// Whether two handles refer to the same proxy.
    pub fn same_proxy(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.proxy, &other.proxy)
    }
}

impl Deref for Display<'_> {
    type Target = DisplayProxy;

    fn deref(&self) -> &Self::Target {
        &self.proxy
    }
}

impl Clone for Display<'_> {
    fn clone(&self) -> Self {
        self.proxy.add_ref();
        Self::adopt(self.registry, Arc::clone(&self.proxy))
    }
}

impl Drop for Display<'_> {
    fn drop(&mut self) {
        if !self.released {
            self.released = true;
            let _ = self.registry.release(&self.proxy);
        }
    }
}

impl fmt::Debug for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Display").field(&*self.proxy).finish()
    }
}
