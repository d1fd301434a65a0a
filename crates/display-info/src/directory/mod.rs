mod snapshot;

use alloc::sync::Arc;

use thiserror::Error;

use crate::{Config, ConnectionProperties, Endpoint};

/// Locates display-property providers behind the transport.
pub trait ProviderDirectory: Send + Sync {
    /// Opens the connection-properties interface of the instance called `name`.
    fn resolve(
        &self,
        config: &Config,
        name: &str,
    ) -> Result<Arc<dyn ConnectionProperties>, ResolveError>;

    /// Opens the plugin host that owns the module catalog.
    fn host(&self, config: &Config) -> Result<Arc<dyn ModuleHost>, ResolveError>;
}

/// A module loaded by the plugin host.
pub trait Module: Send + Sync {
    /// The name the module is addressed by.
    fn callsign(&self) -> &str;

    /// The module's display-properties interface, if it exposes one.
    fn connection_properties(&self) -> Option<Arc<dyn ConnectionProperties>>;
}

/// Receives module state changes from a [`ModuleHost`].
pub trait ModuleObserver: Send + Sync {
    /// A module changed state.
    fn state_change(&self, module: Arc<dyn Module>);
}

/// The plugin host's live module list.
pub trait ModuleHost: Send + Sync {
    /// Registers an observer.
    ///
    /// Before returning, the host reports every currently loaded module to the observer.
    fn register(&self, observer: &Arc<dyn ModuleObserver>);

    /// Removes an observer, it receives no further state changes.
    fn unregister(&self, observer: &Arc<dyn ModuleObserver>);

    /// The currently loaded modules and whether each provides display properties.
    ///
    /// Hosts without a native index answer this with a register and immediate unregister
    /// probe.
    fn snapshot(&self) -> Vec<ModuleEntry> {
        snapshot::probe(self)
    }
}

/// One module reported by [`ModuleHost::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    /// The module's callsign.
    pub name: String,

    /// Whether the module exposes the display-properties interface.
    pub display_properties: bool,
}

/// Failure to open a remote interface.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolveError {
    #[error("No provider is registered as \"{0}\"")]
    NotFound(String),

    #[error("Failed to reach {endpoint}:\n{reason}")]
    Unreachable { endpoint: Endpoint, reason: String },

    #[error("Timed out after {0}ms")]
    Timeout(u64),
}
