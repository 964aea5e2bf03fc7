// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config service and storage port for sortviz drivers.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::prefs::{PrefsError, VisualizerPrefs};

/// Key under which [`VisualizerPrefs`] are stored.
pub const PREFS_KEY: &str = "prefs";

/// Storage port for raw config blobs (keyed by logical name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw config blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Stored or supplied preferences failed validation.
    #[error("invalid prefs: {0}")]
    Invalid(#[from] PrefsError),
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}

/// Serializes config values as JSON and delegates storage to a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the service and return the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Load and deserialize a config value for `key`. Returns `Ok(None)` if
    /// missing or empty.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(ConfigError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Serialize and persist a config value for `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }

    /// Load saved prefs, falling back to defaults when none are stored.
    ///
    /// Stored prefs that fail validation are an error rather than being
    /// silently replaced.
    pub fn load_prefs(&self) -> Result<VisualizerPrefs, ConfigError> {
        let Some(prefs) = self.load::<VisualizerPrefs>(PREFS_KEY)? else {
            debug!("no saved prefs; using defaults");
            return Ok(VisualizerPrefs::default());
        };
        prefs.validate()?;
        debug!(?prefs, "loaded prefs");
        Ok(prefs)
    }

    /// Validate and persist prefs.
    pub fn save_prefs(&self, prefs: &VisualizerPrefs) -> Result<(), ConfigError> {
        prefs.validate()?;
        self.save(PREFS_KEY, prefs)?;
        debug!(?prefs, "saved prefs");
        Ok(())
    }
}
