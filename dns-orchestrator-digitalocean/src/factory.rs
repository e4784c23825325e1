//! Provider factory functions and metadata.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::DigitalOceanProvider;
use crate::traits::DnsProvider;
use crate::types::{ProviderCredentials, ProviderMetadata};

/// Creates a [`DnsProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`] variant.
/// The returned provider is wrapped in `Arc<dyn DnsProvider>` for easy sharing
/// across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use dns_orchestrator_digitalocean::{create_provider, ProviderCredentials};
///
/// let provider = create_provider("digitalocean", ProviderCredentials::DigitalOcean {
///     api_token: "your-token".to_string(),
/// }).unwrap();
/// ```
pub fn create_provider(
    id: impl Into<String>,
    credentials: ProviderCredentials,
) -> Result<Arc<dyn DnsProvider>> {
    match credentials {
        credentials @ ProviderCredentials::DigitalOcean { .. } => {
            Ok(Arc::new(DigitalOceanProvider::new(id, credentials)?))
        }
    }
}

/// Returns metadata for every provider this crate ships.
pub fn get_all_provider_metadata() -> Vec<ProviderMetadata> {
    vec![DigitalOceanProvider::metadata()]
}
