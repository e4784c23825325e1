//! DigitalOcean HTTP 传输层

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::Result;
use crate::http_client::{HttpUtils, create_http_client};
use crate::traits::{
    ApiRequest, ErrorContext, HttpMethod, HttpTransport, ProviderErrorMapper, RawApiError,
};

use super::{DO_API_BASE, PROVIDER_NAME, USER_AGENT};

/// reqwest-backed transport for the DigitalOcean v2 API.
pub struct DigitalOceanHttp {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    pub(crate) base_url: String,
}

impl DigitalOceanHttp {
    pub fn new(api_token: String) -> Result<Self> {
        Self::with_base_url(api_token, DO_API_BASE)
    }

    /// Transport against a different API root (proxies, test servers).
    pub fn with_base_url(api_token: String, base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: create_http_client(PROVIDER_NAME, USER_AGENT)?,
            api_token,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl HttpTransport for DigitalOceanHttp {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        }
        .bearer_auth(&self.api_token);

        if let Some(page) = request.page {
            builder = builder.query(&[("page", page)]);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let (status, text) =
            HttpUtils::execute_request(builder, PROVIDER_NAME, request.method.as_str(), &url)
                .await?;

        if !HttpUtils::is_success(status) {
            return Err(self.map_error(
                RawApiError::new(status, text),
                ErrorContext {
                    resource: Some(request.path),
                },
            ));
        }

        HttpUtils::parse_json(&text, PROVIDER_NAME)
    }
}
