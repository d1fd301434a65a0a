use core::{fmt, net::SocketAddr, time::Duration};
use std::{
    env, fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The environment variable naming the transport endpoint.
pub const ENDPOINT_VARIABLE: &str = "COMMUNICATOR_PATH";

const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Where the out-of-process display service listens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Endpoint {
    /// A Unix domain socket path.
    Unix(PathBuf),

    /// A TCP socket address.
    Tcp(SocketAddr),
}

impl Endpoint {
    /// Parses an endpoint, anything that is not a socket address is treated as a path.
    pub fn parse(value: &str) -> Self {
        match value.parse::<SocketAddr>() {
            Ok(address) => Self::Tcp(address),
            Err(_) => Self::Unix(PathBuf::from(value)),
        }
    }
}

impl Default for Endpoint {
    #[cfg(windows)]
    fn default() -> Self {
        Self::Tcp(SocketAddr::from(([127, 0, 0, 1], 62000)))
    }

    #[cfg(not(windows))]
    fn default() -> Self {
        Self::Unix(PathBuf::from("/tmp/communicator"))
    }
}

impl From<String> for Endpoint {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Endpoint> for String {
    fn from(value: Endpoint) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix(path) => write!(f, "{}", path.display()),
            Self::Tcp(address) => write!(f, "{address}"),
        }
    }
}

/// Transport settings shared by every resolution a registry performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The endpoint of the display service.
    pub endpoint: Endpoint,

    /// Upper bound for a single remote call, in milliseconds.
    pub timeout_ms: u64,
}

/// Failure to load a [`Config`] file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open config file:\n{0}")]
    OpenFile(#[source] io::Error),

    #[error("Failed to read config file:\n{0}")]
    ReadFile(#[source] io::Error),

    #[error("Failed to deserialize config:\n{0}")]
    Deserialize(#[from] toml::de::Error),
}

impl Config {
    /// The default config with the endpoint taken from [`ENDPOINT_VARIABLE`] when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Loads the config from a TOML file, a missing file yields the defaults.
    /// [`ENDPOINT_VARIABLE`] overrides the endpoint from the file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = fs::File::open(path);

        if file
            .as_ref()
            .is_err_and(|e| e.kind() == io::ErrorKind::NotFound)
        {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::from_env());
        }

        let mut file = file.map_err(LoadError::OpenFile)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(LoadError::ReadFile)?;

        let mut config = Self::from_toml(&contents)?;
        config.apply_env();

        Ok(config)
    }

    /// Parses a config from TOML without consulting the environment.
    pub fn from_toml(contents: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(contents)?)
    }

    /// The remote call timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    fn apply_env(&mut self) {
        if let Some(value) = env::var_os(ENDPOINT_VARIABLE) {
            self.endpoint = Endpoint::parse(&value.to_string_lossy());
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}
