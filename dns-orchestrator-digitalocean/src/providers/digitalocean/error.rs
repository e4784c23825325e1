//! DigitalOcean error mapping

use serde::Deserialize;

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::PROVIDER_NAME;
use super::http::DigitalOceanHttp;

/// Error body returned by the API: `{"id": "not_found", "message": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Prefer the API's `message` field, fall back to the raw body.
fn error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }
    Some(
        serde_json::from_str::<ErrorBody>(body)
            .map_or_else(|_| body.to_string(), |e| e.message),
    )
}

/// DigitalOcean status mapping
/// Reference: <https://docs.digitalocean.com/reference/api/api-reference/#section/Introduction/HTTP-Statuses>
impl ProviderErrorMapper for DigitalOceanHttp {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let raw_message = error_message(&raw.message);
        match raw.status {
            401 => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message,
            },
            404 => ProviderError::NotFound {
                provider: self.provider_name().to_string(),
                resource: context.resource.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message,
            },
            status => ProviderError::HttpStatus {
                provider: self.provider_name().to_string(),
                status,
                raw_message,
            },
        }
    }
}
