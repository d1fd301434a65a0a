//! # Display Info
//! Client-side registry for remote display-property providers.
//!
//! A [`Registry`] hands out reference-counted [`Display`] handles, one shared [`DisplayProxy`]
//! per display name, and fans provider update events out to the callbacks registered on each
//! proxy. Reaching the providers is delegated to a [`ProviderDirectory`].
//!

extern crate alloc;

pub use config::{Config, ENDPOINT_VARIABLE, Endpoint, LoadError};
pub use directory::{
    Module, ModuleEntry, ModuleHost, ModuleObserver, ProviderDirectory, ResolveError,
};
pub use enumeration::EnumerationCache;
pub use properties::{HdcpProtection, HdrType, raw};
pub use provider::{ConnectionProperties, Subscription, UpdateSink};
pub use proxy::{CallbackId, DisplayProxy};
pub use registry::{DEFAULT_DISPLAY, Display, EnumerateError, Registry, Released};

mod config;
mod directory;
mod enumeration;
mod properties;
mod provider;
mod proxy;
mod registry;
