//! # Display Info C API
//! C-callable surface over a process-wide [`Registry`].
//!
//! The host process installs a [`ProviderDirectory`] once with [`install`]; until then every
//! function returns its failure value. Handles are the addresses of the shared display proxies,
//! so every `displayinfo_instance` call for the same name yields the same pointer.
//!

#![allow(non_camel_case_types)]

extern crate alloc;

mod buffer;
mod lifecycle;
mod properties;
mod types;

use alloc::sync::Arc;
use std::sync::{LazyLock, OnceLock};

use display_info::{Config, EnumerationCache, ProviderDirectory, Registry};
use thiserror::Error;
use tracing::info;

pub use buffer::copy_truncated;
pub use lifecycle::{
    displayinfo_enumerate, displayinfo_instance, displayinfo_register, displayinfo_release,
    displayinfo_unregister,
};
pub use properties::{
    displayinfo_connected, displayinfo_hdcp_protection, displayinfo_hdr, displayinfo_height,
    displayinfo_is_audio_passthrough, displayinfo_name, displayinfo_vertical_frequency,
    displayinfo_width,
};
pub use types::{
    displayinfo_hdcp_protection_t, displayinfo_hdr_t, displayinfo_type, displayinfo_updated_cb,
};

static REGISTRY: OnceLock<Registry> = OnceLock::new();
static ENUMERATION: LazyLock<EnumerationCache> = LazyLock::new(EnumerationCache::new);

/// Failure to install the process-wide registry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InstallError {
    #[error("A display registry is already installed")]
    AlreadyInstalled,
}

/// Installs the process-wide registry, reading the endpoint from the environment.
pub fn install(directory: Arc<dyn ProviderDirectory>) -> Result<&'static Registry, InstallError> {
    install_with_config(Config::from_env(), directory)
}

/// Installs the process-wide registry with an explicit config.
pub fn install_with_config(
    config: Config,
    directory: Arc<dyn ProviderDirectory>,
) -> Result<&'static Registry, InstallError> {
    let mut installed = false;

    let registry = REGISTRY.get_or_init(|| {
        installed = true;
        info!("Installing display registry for {}", config.endpoint);
        Registry::new(config, directory)
    });

    if installed {
        Ok(registry)
    } else {
        Err(InstallError::AlreadyInstalled)
    }
}

/// The installed registry, if any.
pub fn registry() -> Option<&'static Registry> {
    REGISTRY.get()
}
