use alloc::sync::Arc;
use core::{
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    time::Duration,
};
use std::{collections::HashMap, thread};

use display_info::{
    Config, ConnectionProperties, Endpoint, ModuleHost, ProviderDirectory, ResolveError,
};
use parking_lot::Mutex;
use tracing::trace;

use super::{FakeDisplay, FakeHost, FakeModule};

/// A directory serving [`FakeDisplay`]s by name from memory.
///
/// Every display added also loads a module of the same name into the [`FakeHost`].
#[derive(Default)]
pub struct FakeDirectory {
    displays: Mutex<HashMap<String, Arc<FakeDisplay>>>,
    host: Arc<FakeHost>,
    resolves: AtomicUsize,
    resolve_delay: Mutex<Option<Duration>>,
    endpoints: Mutex<Vec<Endpoint>>,
    unreachable: AtomicBool,
}

impl FakeDirectory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_display(&self, name: &str, display: Arc<FakeDisplay>) {
        self.displays
            .lock()
            .insert(name.to_owned(), Arc::clone(&display));
        self.host.load(FakeModule::new(name, Some(display)));
    }

    /// Removes a display from lookups and unloads its module.
    pub fn remove_display(&self, name: &str) {
        self.displays.lock().remove(name);
        self.host.unload(name);
    }

    /// Loads a module that does not provide display properties.
    pub fn add_module(&self, name: &str) {
        self.host.load(FakeModule::new(name, None));
    }

    pub fn fake_host(&self) -> &Arc<FakeHost> {
        &self.host
    }

    /// Makes every resolution sleep first. A delay past the config timeout fails the
    /// resolution with [`ResolveError::Timeout`].
    pub fn set_resolve_delay(&self, delay: Duration) {
        *self.resolve_delay.lock() = Some(delay);
    }

    /// Makes every call fail as if the service was down.
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::Release);
    }

    /// Number of display resolutions attempted.
    pub fn resolves(&self) -> usize {
        self.resolves.load(Ordering::Acquire)
    }

    /// The endpoint of every call, in call order.
    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.endpoints.lock().clone()
    }

    fn connect(&self, config: &Config) -> Result<(), ResolveError> {
        self.endpoints.lock().push(config.endpoint.clone());

        if self.unreachable.load(Ordering::Acquire) {
            return Err(ResolveError::Unreachable {
                endpoint: config.endpoint.clone(),
                reason: String::from("connection refused"),
            });
        }

        Ok(())
    }
}

impl ProviderDirectory for FakeDirectory {
    fn resolve(
        &self,
        config: &Config,
        name: &str,
    ) -> Result<Arc<dyn ConnectionProperties>, ResolveError> {
        self.resolves.fetch_add(1, Ordering::AcqRel);
        self.connect(config)?;

        let delay = *self.resolve_delay.lock();
        if let Some(delay) = delay {
            if delay > config.timeout() {
                thread::sleep(config.timeout());
                return Err(ResolveError::Timeout(config.timeout_ms));
            }

            thread::sleep(delay);
        }

        trace!("Resolving {name} at {}", config.endpoint);

        let display = self
            .displays
            .lock()
            .get(name)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(name.to_owned()))?;

        Ok(display as Arc<dyn ConnectionProperties>)
    }

    fn host(&self, config: &Config) -> Result<Arc<dyn ModuleHost>, ResolveError> {
        self.connect(config)?;

        let host = Arc::clone(&self.host);
        Ok(host as Arc<dyn ModuleHost>)
    }
}
