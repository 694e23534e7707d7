//! Entry point holding the server location and the signing key
//!
//! A [`Thumbor`] is immutable once created and can be shared freely; every
//! call to [`Thumbor::build_image`] hands out an independent builder.

use std::fmt;

use crate::config::ThumborConfig;
use crate::constants::DEFAULT_HOST;
use crate::error::UrlError;
use crate::url::{SigningKey, UrlBuilder};

#[derive(Clone)]
pub struct Thumbor {
    host: String,
    key: Option<SigningKey>,
    legacy: bool,
}

impl Thumbor {
    /// Unkeyed instance; every URL it builds is unsafe
    pub fn new(host: impl AsRef<str>) -> Result<Self, UrlError> {
        Ok(Self {
            host: normalize_host(host.as_ref())?,
            key: None,
            legacy: false,
        })
    }

    /// Keyed instance; URLs are signed unless explicitly built unsafe
    pub fn with_key(host: impl AsRef<str>, key: impl AsRef<str>) -> Result<Self, UrlError> {
        let key = key.as_ref();
        if key.trim().is_empty() {
            return Err(UrlError::invalid_argument("key", "must not be blank"));
        }
        Ok(Self {
            host: normalize_host(host.as_ref())?,
            key: Some(SigningKey::new(key)?),
            legacy: false,
        })
    }

    /// Build from loaded configuration
    ///
    /// A missing host falls back to `/`. With `legacy: true` every builder
    /// starts with the legacy flag set.
    pub fn from_config(config: &ThumborConfig) -> Result<Self, UrlError> {
        let host = config.host.as_deref().unwrap_or(DEFAULT_HOST);
        let mut thumbor = match &config.key {
            Some(key) => Self::with_key(host, key)?,
            None => Self::new(host)?,
        };

        if config.legacy {
            if thumbor.key.is_none() {
                return Err(UrlError::invalid_argument(
                    "legacy",
                    "requires a signing key",
                ));
            }
            thumbor.legacy = true;
        }

        tracing::debug!(
            host = %thumbor.host,
            signed = thumbor.key.is_some(),
            legacy = thumbor.legacy,
            "Thumbor instance configured"
        );

        Ok(thumbor)
    }

    /// Begin building a URL for `image`
    pub fn build_image(&self, image: impl Into<String>) -> Result<UrlBuilder, UrlError> {
        let image = image.into();
        if image.trim().is_empty() {
            return Err(UrlError::invalid_argument("image", "must not be blank"));
        }

        let builder = UrlBuilder::new(self.host.clone(), self.key.clone(), image);
        Ok(if self.legacy { builder.legacy() } else { builder })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn key(&self) -> Option<&SigningKey> {
        self.key.as_ref()
    }

    pub fn is_legacy(&self) -> bool {
        self.legacy
    }
}

impl Default for Thumbor {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            key: None,
            legacy: false,
        }
    }
}

impl fmt::Debug for Thumbor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thumbor")
            .field("host", &self.host)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("legacy", &self.legacy)
            .finish()
    }
}

/// Collapse any trailing slashes into exactly one
fn normalize_host(host: &str) -> Result<String, UrlError> {
    if host.trim().is_empty() {
        return Err(UrlError::invalid_argument("host", "must not be blank"));
    }
    let mut host = host.trim_end_matches('/').to_string();
    host.push('/');
    Ok(host)
}
