use thiserror::Error;
use tracing::instrument;

use super::Registry;
use crate::ResolveError;

impl Registry {
    /// Names of the loaded modules that provide display properties, in catalog order.
    ///
    /// Queries the plugin host directly, the names need not have live proxies.
    #[instrument("Registry::enumerate", skip_all, err)]
    pub fn enumerate(&self) -> Result<Vec<String>, EnumerateError> {
        let host = self
            .directory
            .host(&self.config)
            .map_err(EnumerateError::Host)?;

        let names = host
            .snapshot()
            .into_iter()
            .filter(|module| module.display_properties)
            .map(|module| module.name)
            .collect();

        Ok(names)
    }
}

/// Failure to enumerate displays.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnumerateError {
    #[error("Failed to open the plugin host:\n{0}")]
    Host(#[source] ResolveError),
}
