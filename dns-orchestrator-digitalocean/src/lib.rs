//! # dns-orchestrator-digitalocean
//!
//! A DigitalOcean DNS provider: reads the records of a zone into a
//! provider-neutral model and applies create/update/delete plans back through
//! the DigitalOcean v2 domains API.
//!
//! ## Supported Record Types
//!
//! `A`, `AAAA`, `CAA`, `CNAME`, `MX`, `NS`, `SRV`, `TXT`. Anything else the API
//! reports (for example `SOA`) is skipped with a warning.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation and Android targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_orchestrator_digitalocean::{
//!     create_provider, Change, DnsProvider, GenericRecord, Plan, ProviderCredentials,
//!     RecordData, Zone,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Create a provider from credentials
//!     let credentials = ProviderCredentials::DigitalOcean {
//!         api_token: "your-token".to_string(),
//!     };
//!     let provider = create_provider("digitalocean", credentials)?;
//!
//!     // 2. Read the current state of a zone
//!     let mut current = Zone::new("example.com.");
//!     let exists = provider.populate(&mut current, true).await?;
//!     println!("{} records, exists={exists}", current.records.len());
//!
//!     // 3. Apply a plan
//!     let www = GenericRecord::new(
//!         "www",
//!         300,
//!         RecordData::A { values: vec!["203.0.113.10".to_string()] },
//!     );
//!     let mut desired = Zone::new("example.com.");
//!     desired.add_record(www.clone());
//!     let plan = Plan::new(desired, vec![Change::Create { new: www }], exists);
//!     let applied = provider.apply(&plan).await?;
//!     println!("applied {applied} changes");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Testing Without The Network
//!
//! [`DigitalOceanProvider::with_transport`] accepts any [`HttpTransport`], so
//! tests can script API responses and inspect the exact requests sent.
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::InvalidCredentials`]: the API answered 401
//! - [`ProviderError::NotFound`]: the API answered 404
//! - [`ProviderError::HttpStatus`]: any other non-2xx answer
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`]: transport failures
//!
//! Requests are never retried and an `apply` stops at the first failing change.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::{create_provider, get_all_provider_metadata};

// Re-export public traits (the error mapper stays internal)
pub use traits::{ApiRequest, DnsProvider, HttpMethod, HttpTransport};

// Re-export types
pub use types::{
    CaaValue, Change, CredentialValidationError, DnsRecordType, FieldType, GenericRecord,
    MxValue, Plan, ProviderCredentialField, ProviderCredentials, ProviderFeatures,
    ProviderMetadata, ProviderType, RecordData, SrvValue, Zone,
};

// Re-export utils module
pub use utils::log_sanitizer;

// Re-export the concrete provider
pub use providers::{
    DigitalOceanHttp, DigitalOceanProvider, PLACEHOLDER_IP, RecordParams, WireRecord,
};
