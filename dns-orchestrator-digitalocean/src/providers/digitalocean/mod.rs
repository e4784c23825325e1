//! DigitalOcean DNS Provider

mod cache;
mod client;
mod error;
mod http;
mod pagination;
mod provider;
mod translate;
mod types;

use std::sync::Arc;

use crate::error::Result;
use crate::traits::HttpTransport;
use crate::types::ProviderCredentials;
use crate::utils::log_sanitizer::mask_secret;

use cache::ZoneCache;
use client::DigitalOceanClient;

pub use http::DigitalOceanHttp;
pub use types::{RecordParams, WireRecord};

pub(crate) const DO_API_BASE: &str = "https://api.digitalocean.com/v2";
pub(crate) const PROVIDER_NAME: &str = "digitalocean";
pub(crate) const USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
/// Address required by `POST /domains`; TEST-NET-1, removed right after creation.
pub const PLACEHOLDER_IP: &str = "192.0.2.1";

/// DigitalOcean DNS Provider
pub struct DigitalOceanProvider {
    pub(crate) id: String,
    pub(crate) client: DigitalOceanClient,
    pub(crate) cache: ZoneCache,
}

impl DigitalOceanProvider {
    /// Provider talking to the public API with the given credentials.
    pub fn new(id: impl Into<String>, credentials: ProviderCredentials) -> Result<Self> {
        let ProviderCredentials::DigitalOcean { api_token } = credentials;
        let id = id.into();
        log::debug!(
            "[{PROVIDER_NAME}:{id}] new: token={}",
            mask_secret(&api_token)
        );
        Ok(Self::with_transport(
            id,
            Arc::new(DigitalOceanHttp::new(api_token)?),
        ))
    }

    /// Provider over an arbitrary transport.
    pub fn with_transport(id: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            id: id.into(),
            client: DigitalOceanClient::new(transport),
            cache: ZoneCache::new(),
        }
    }
}
