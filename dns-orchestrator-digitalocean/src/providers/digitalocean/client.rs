//! DigitalOcean domains API calls

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::traits::{ApiRequest, HttpTransport};

use super::pagination::list_all;
use super::translate::normalize_wire_records;
use super::types::{
    AccountResponse, DigitalOceanDomain, DomainCreateParams, DomainResponse, RecordParams,
    WireRecord,
};
use super::{PLACEHOLDER_IP, PROVIDER_NAME};

/// Thin typed wrapper over the transport, one method per endpoint.
#[derive(Clone)]
pub(crate) struct DigitalOceanClient {
    transport: Arc<dyn HttpTransport>,
}

fn domain_path(name: &str) -> String {
    format!("/domains/{}", urlencoding::encode(name))
}

fn records_path(domain: &str) -> String {
    format!("{}/records", domain_path(domain))
}

fn to_body<B: Serialize>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| ProviderError::SerializationError {
        provider: PROVIDER_NAME.to_string(),
        detail: e.to_string(),
    })
}

fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| ProviderError::ParseError {
        provider: PROVIDER_NAME.to_string(),
        detail: format!("{what}: {e}"),
    })
}

impl DigitalOceanClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn account_status(&self) -> Result<String> {
        let value = self.transport.send(ApiRequest::get("/account")).await?;
        let resp: AccountResponse = decode(value, "account")?;
        Ok(resp.account.status)
    }

    /// Every domain in the account.
    pub async fn domains(&self) -> Result<Vec<DigitalOceanDomain>> {
        list_all(self.transport.as_ref(), "/domains", "domains").await
    }

    pub async fn domain(&self, name: &str) -> Result<DigitalOceanDomain> {
        let value = self.transport.send(ApiRequest::get(domain_path(name))).await?;
        let resp: DomainResponse = decode(value, "domain")?;
        Ok(resp.domain)
    }

    /// Creates a domain. The API insists on an address, so this also creates
    /// an apex A record pointing at [`PLACEHOLDER_IP`].
    pub async fn domain_create(&self, name: &str) -> Result<()> {
        let body = to_body(&DomainCreateParams {
            name,
            ip_address: PLACEHOLDER_IP,
        })?;
        self.transport
            .send(ApiRequest::post("/domains", body))
            .await?;
        Ok(())
    }

    /// Every record of a domain, apex names and targets normalized.
    pub async fn records(&self, domain: &str) -> Result<Vec<WireRecord>> {
        let records = list_all(self.transport.as_ref(), &records_path(domain), "domain_records")
            .await?;
        Ok(normalize_wire_records(records, domain))
    }

    pub async fn record_create(&self, domain: &str, params: &RecordParams) -> Result<()> {
        let body = to_body(params)?;
        self.transport
            .send(ApiRequest::post(records_path(domain), body))
            .await?;
        Ok(())
    }

    pub async fn record_delete(&self, domain: &str, record_id: u64) -> Result<()> {
        self.transport
            .send(ApiRequest::delete(format!(
                "{}/{record_id}",
                records_path(domain)
            )))
            .await?;
        Ok(())
    }
}
