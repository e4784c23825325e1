use serde::{Deserialize, Serialize};

// ============ Record Types ============

/// DNS record types this provider can manage.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.).
/// Any other type found in a remote zone is skipped during population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Certificate Authority Authorization record.
    Caa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Name server record.
    Ns,
    /// Service locator record.
    Srv,
    /// Text record.
    Txt,
}

impl DnsRecordType {
    /// Every supported record type, in wire-name order.
    pub const ALL: [Self; 8] = [
        Self::A,
        Self::Aaaa,
        Self::Caa,
        Self::Cname,
        Self::Mx,
        Self::Ns,
        Self::Srv,
        Self::Txt,
    ];

    /// Uppercase wire name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Caa => "CAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
        }
    }
}

impl std::fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Generic Record Model ============

/// One CAA value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaaValue {
    /// Issuer critical flag (0 or 128).
    pub flags: u8,
    /// Property tag (`"issue"`, `"issuewild"`, or `"iodef"`).
    pub tag: String,
    /// CA domain or reporting URI.
    pub value: String,
}

/// One MX value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MxValue {
    /// Preference (lower = preferred).
    pub preference: u16,
    /// Fully qualified mail server hostname.
    pub exchange: String,
}

/// One SRV value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrvValue {
    /// Priority (lower = preferred).
    pub priority: u16,
    /// Weight for load balancing among same-priority targets.
    pub weight: u16,
    /// TCP/UDP port number.
    pub port: u16,
    /// Fully qualified target, or `"."` when the service is not available.
    pub target: String,
}

/// Type-structured record data.
///
/// CNAME carries a single `value`; every other type carries a list of `values`
/// whose shape depends on the type. Use [`record_type()`](Self::record_type) to get
/// the [`DnsRecordType`] discriminant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RecordData {
    /// IPv4 addresses.
    A {
        /// Addresses (e.g., `"1.2.3.4"`).
        values: Vec<String>,
    },
    /// IPv6 addresses.
    AAAA {
        /// Addresses (e.g., `"2001:db8::1"`).
        values: Vec<String>,
    },
    /// Certificate Authority Authorization values.
    CAA {
        /// CAA values.
        values: Vec<CaaValue>,
    },
    /// Alias to a single fully qualified name.
    CNAME {
        /// Target hostname, with trailing dot.
        value: String,
    },
    /// Mail exchangers.
    MX {
        /// MX values.
        values: Vec<MxValue>,
    },
    /// Authoritative name servers.
    NS {
        /// Fully qualified name server hostnames.
        values: Vec<String>,
    },
    /// Service locators.
    SRV {
        /// SRV values.
        values: Vec<SrvValue>,
    },
    /// Text values, with `;` escaped as `\;`.
    TXT {
        /// Escaped text values.
        values: Vec<String>,
    },
}

impl RecordData {
    /// Returns the [`DnsRecordType`] discriminant for this record data.
    pub fn record_type(&self) -> DnsRecordType {
        match self {
            Self::A { .. } => DnsRecordType::A,
            Self::AAAA { .. } => DnsRecordType::Aaaa,
            Self::CAA { .. } => DnsRecordType::Caa,
            Self::CNAME { .. } => DnsRecordType::Cname,
            Self::MX { .. } => DnsRecordType::Mx,
            Self::NS { .. } => DnsRecordType::Ns,
            Self::SRV { .. } => DnsRecordType::Srv,
            Self::TXT { .. } => DnsRecordType::Txt,
        }
    }

    /// Number of individual values carried.
    pub fn len(&self) -> usize {
        match self {
            Self::A { values } | Self::AAAA { values } | Self::NS { values } | Self::TXT { values } => {
                values.len()
            }
            Self::CAA { values } => values.len(),
            Self::CNAME { .. } => 1,
            Self::MX { values } => values.len(),
            Self::SRV { values } => values.len(),
        }
    }

    /// Whether no values are carried.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A provider-agnostic DNS record: every value sharing one `(name, type)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericRecord {
    /// Name relative to the zone; `""` is the apex.
    pub name: String,
    /// Time to live in seconds.
    pub ttl: u32,
    /// Type-specific record data.
    #[serde(flatten)]
    pub data: RecordData,
}

impl GenericRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    /// Returns the record type.
    pub fn record_type(&self) -> DnsRecordType {
        self.data.record_type()
    }

    /// The `(name, type)` identity used for grouping and delete matching.
    pub fn key(&self) -> (&str, DnsRecordType) {
        (&self.name, self.record_type())
    }
}

/// A generic zone: a fully qualified name (with trailing dot) and its records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone name, e.g. `"example.com."`.
    pub name: String,
    /// Records in insertion order.
    #[serde(default)]
    pub records: Vec<GenericRecord>,
}

impl Zone {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Zone name as the provider API expects it (no trailing dot).
    pub fn domain_name(&self) -> &str {
        self.name.strip_suffix('.').unwrap_or(&self.name)
    }

    pub fn add_record(&mut self, record: GenericRecord) {
        self.records.push(record);
    }

    /// Looks up the record with the given identity.
    pub fn find(&self, name: &str, record_type: DnsRecordType) -> Option<&GenericRecord> {
        self.records
            .iter()
            .find(|r| r.key() == (name, record_type))
    }
}

// ============ Changes & Plans ============

/// One reconciliation step. `existing` and `new` always share `(name, type)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Change {
    /// Record absent remotely, present in the desired zone.
    Create {
        /// Desired record.
        new: GenericRecord,
    },
    /// Record present on both sides with differing content.
    Update {
        /// Remote record.
        existing: GenericRecord,
        /// Desired record.
        new: GenericRecord,
    },
    /// Record present remotely, absent from the desired zone.
    Delete {
        /// Remote record.
        existing: GenericRecord,
    },
}

impl Change {
    /// The record identifying this change (the desired one when there is one).
    pub fn record(&self) -> &GenericRecord {
        match self {
            Self::Create { new } | Self::Update { new, .. } => new,
            Self::Delete { existing } => existing,
        }
    }
}

/// An ordered change set produced by an external planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// The desired zone state.
    pub desired: Zone,
    /// Changes, applied strictly in this order.
    pub changes: Vec<Change>,
    /// Whether the zone existed remotely when the plan was computed.
    #[serde(default)]
    pub exists: bool,
}

impl Plan {
    pub fn new(desired: Zone, changes: Vec<Change>, exists: bool) -> Self {
        Self {
            desired,
            changes,
            exists,
        }
    }
}

// ============ Provider Types ============

/// Identifies which DNS provider implementation to use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// DigitalOcean DNS.
    #[serde(rename = "digitalocean")]
    DigitalOcean,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DigitalOcean => write!(f, "digitalocean"),
        }
    }
}

// ============ Provider Metadata Types ============

/// The input type of a credential field (affects UI rendering).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Plain text input.
    Text,
    /// Masked/password input.
    Password,
}

/// Definition of a single credential field required by a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCredentialField {
    /// Machine-readable field key (e.g., `"apiToken"`).
    pub key: String,
    /// Human-readable label (e.g., `"API Token"`).
    pub label: String,
    /// Input type for UI rendering.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Optional placeholder text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Optional help/description text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

/// Provider-specific feature support flags.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProviderFeatures {
    /// Whether NS records at the zone apex may be managed.
    pub root_ns: bool,
    /// Whether geo-aware records are supported.
    pub geo: bool,
    /// Whether dynamic (health-checked, weighted) records are supported.
    pub dynamic: bool,
}

/// Static metadata describing a DNS provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    /// Provider type identifier.
    pub id: ProviderType,
    /// Human-readable provider name.
    pub name: String,
    /// Short description of the provider.
    pub description: String,
    /// Credential fields required to authenticate with this provider.
    pub required_fields: Vec<ProviderCredentialField>,
    /// Record types the provider can read and write.
    pub supported_types: Vec<DnsRecordType>,
    /// Feature flags for this provider.
    pub features: ProviderFeatures,
}

// ============ Credential Types ============

/// Validation error for provider credentials.
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    #[error("Missing required field: {label}")]
    MissingField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field is present but empty/whitespace-only.
    #[error("Field must not be empty: {label}")]
    EmptyField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
}

/// Type-safe credential container.
///
/// Serialized as a tagged enum with `"provider"` as the tag and `"credentials"` as the content:
///
/// ```json
/// { "provider": "digitalocean", "credentials": { "api_token": "..." } }
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// DigitalOcean personal access token.
    #[serde(rename = "digitalocean")]
    DigitalOcean {
        /// API token with read/write scope.
        api_token: String,
    },
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DigitalOcean { .. } => f
                .debug_struct("DigitalOcean")
                .field("api_token", &"***")
                .finish(),
        }
    }
}

impl ProviderCredentials {
    /// Construct credentials from a `HashMap`, validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialValidationError`] if a required field is missing or empty.
    pub fn from_map(
        provider: &ProviderType,
        map: &std::collections::HashMap<String, String>,
    ) -> Result<Self, CredentialValidationError> {
        match provider {
            ProviderType::DigitalOcean => Ok(Self::DigitalOcean {
                api_token: Self::get_required_field(provider, map, "apiToken", "API Token")?,
            }),
        }
    }

    /// Obtain required fields from `HashMap` and verify that it is not empty
    fn get_required_field(
        provider: &ProviderType,
        map: &std::collections::HashMap<String, String>,
        key: &str,
        label: &str,
    ) -> Result<String, CredentialValidationError> {
        match map.get(key) {
            None => Err(CredentialValidationError::MissingField {
                provider: provider.clone(),
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) if v.trim().is_empty() => Err(CredentialValidationError::EmptyField {
                provider: provider.clone(),
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) => Ok(v.trim().to_string()),
        }
    }

    /// Convert credentials to a `HashMap` for flat key-value storage.
    pub fn to_map(&self) -> std::collections::HashMap<String, String> {
        match self {
            Self::DigitalOcean { api_token } => {
                [("apiToken".to_string(), api_token.clone())].into()
            }
        }
    }

    /// Returns the [`ProviderType`] corresponding to this credential variant.
    pub fn provider_type(&self) -> ProviderType {
        match self {
            Self::DigitalOcean { .. } => ProviderType::DigitalOcean,
        }
    }
}
