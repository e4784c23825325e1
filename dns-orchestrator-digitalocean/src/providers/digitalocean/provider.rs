//! DigitalOcean DnsProvider trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::ensure_trailing_dot;
use crate::traits::DnsProvider;
use crate::types::{
    Change, DnsRecordType, FieldType, GenericRecord, Plan, ProviderCredentialField,
    ProviderFeatures, ProviderMetadata, ProviderType, Zone,
};

use super::translate::{group_records, to_generic, to_wire};
use super::types::WireRecord;
use super::{DigitalOceanProvider, PROVIDER_NAME};

impl DigitalOceanProvider {
    /// Remote rows of `zone`, read once per run and then served from the cache.
    pub(crate) async fn zone_records(&self, zone: &Zone) -> Result<Vec<WireRecord>> {
        let domain = zone.domain_name();
        self.cache
            .get_or_fetch(&zone.name, || self.client.records(domain))
            .await
    }

    /// Makes sure the domain exists, creating it when the API reports it missing.
    ///
    /// Creation forces an apex A record at the placeholder address; every apex
    /// A row of the fresh domain is removed again before any change is applied.
    /// Returns whether the domain was created.
    async fn ensure_domain(&self, domain: &str) -> Result<bool> {
        match self.client.domain(domain).await {
            Ok(_) => Ok(false),
            Err(e) if e.is_not_found() => {
                log::debug!(
                    "[{PROVIDER_NAME}:{}] apply: no matching zone, creating domain",
                    self.id
                );
                self.client.domain_create(domain).await?;

                let apex_a = DnsRecordType::A.as_str();
                for record in self.client.records(domain).await? {
                    if record.name.is_empty() && record.record_type == apex_a {
                        self.client.record_delete(domain, record.id).await?;
                    }
                }
                Ok(true)
            }
            Err(e) => Err(e),
        }
    }

    async fn apply_create(&self, zone: &Zone, new: &GenericRecord) -> Result<()> {
        let domain = zone.domain_name();
        for params in to_wire(new) {
            self.client.record_create(domain, &params).await?;
        }
        Ok(())
    }

    /// Deletes every cached row sharing `existing`'s `(name, type)`.
    ///
    /// Matching goes by identity, not value: a stale cache under- or over-deletes.
    async fn apply_delete(&self, zone: &Zone, existing: &GenericRecord) -> Result<()> {
        let domain = zone.domain_name();
        let record_type = existing.record_type().as_str();
        let records = self.zone_records(zone).await?;

        for record in records
            .iter()
            .filter(|r| r.name == existing.name && r.record_type == record_type)
        {
            self.client.record_delete(domain, record.id).await?;
        }
        Ok(())
    }

    async fn apply_change(&self, zone: &Zone, change: &Change) -> Result<()> {
        match change {
            Change::Create { new } => self.apply_create(zone, new).await,
            Change::Update { existing, new } => {
                // Not atomic: a failed create leaves the old rows deleted.
                self.apply_delete(zone, existing).await?;
                self.apply_create(zone, new).await
            }
            Change::Delete { existing } => self.apply_delete(zone, existing).await,
        }
    }
}

#[async_trait]
impl DnsProvider for DigitalOceanProvider {
    fn id(&self) -> &str {
        &self.id
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: ProviderType::DigitalOcean,
            name: "DigitalOcean".to_string(),
            description: "DigitalOcean DNS".to_string(),
            required_fields: vec![ProviderCredentialField {
                key: "apiToken".to_string(),
                label: "API Token".to_string(),
                field_type: FieldType::Password,
                placeholder: Some("dop_v1_...".to_string()),
                help_text: Some("Personal access token with read and write scope".to_string()),
            }],
            supported_types: DnsRecordType::ALL.to_vec(),
            features: ProviderFeatures {
                root_ns: true,
                geo: false,
                dynamic: false,
            },
        }
    }

    async fn validate_credentials(&self) -> Result<bool> {
        match self.client.account_status().await {
            Ok(status) => Ok(status == "active"),
            Err(ProviderError::InvalidCredentials { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn list_zones(&self) -> Result<Vec<String>> {
        log::debug!("[{PROVIDER_NAME}:{}] list_zones:", self.id);
        let mut zones: Vec<String> = self
            .client
            .domains()
            .await?
            .into_iter()
            .map(|d| ensure_trailing_dot(&d.name))
            .collect();
        zones.sort();
        Ok(zones)
    }

    async fn populate(&self, zone: &mut Zone, target: bool) -> Result<bool> {
        log::debug!(
            "[{PROVIDER_NAME}:{}] populate: name={}, target={target}",
            self.id,
            zone.name
        );

        let records = self.zone_records(zone).await?;
        let before = zone.records.len();
        for group in group_records(&records) {
            zone.add_record(to_generic(&group)?);
        }

        let exists = self.cache.contains(&zone.name).await;
        log::info!(
            "[{PROVIDER_NAME}:{}] populate:   found {} records, exists={exists}",
            self.id,
            zone.records.len() - before
        );
        Ok(exists)
    }

    async fn apply(&self, plan: &Plan) -> Result<usize> {
        let desired = &plan.desired;
        log::debug!(
            "[{PROVIDER_NAME}:{}] apply: zone={}, len(changes)={}",
            self.id,
            desired.name,
            plan.changes.len()
        );

        self.ensure_domain(desired.domain_name()).await?;

        for change in &plan.changes {
            self.apply_change(desired, change).await?;
        }

        self.cache.invalidate(&desired.name).await;
        Ok(plan.changes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_lists_supported_types() {
        let meta = DigitalOceanProvider::metadata();
        assert_eq!(meta.id, ProviderType::DigitalOcean);
        assert_eq!(meta.supported_types.len(), 8);
        assert!(meta.supported_types.contains(&DnsRecordType::Srv));
        assert!(meta.features.root_ns);
        assert!(!meta.features.dynamic);
        assert_eq!(meta.required_fields[0].key, "apiToken");
    }
}
