//! DigitalOcean API 类型定义

use serde::{Deserialize, Serialize};

/// DigitalOcean 域名记录（响应）
///
/// A flat, type-agnostic row: which optional fields are set depends on `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRecord {
    /// Provider-assigned record id.
    pub id: u64,
    #[serde(rename = "type")]
    pub record_type: String,
    /// Relative name; `"@"` (or `""` once normalized) is the apex.
    pub name: String,
    pub data: String,
    pub ttl: u32,
    #[serde(default)]
    pub priority: Option<u16>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub weight: Option<u16>,
    #[serde(default)]
    pub flags: Option<u8>,
    #[serde(default)]
    pub tag: Option<String>,
}

/// 创建记录请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordParams {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub data: String,
    pub ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl RecordParams {
    /// Params carrying only the common fields.
    pub fn simple(name: &str, record_type: &str, data: String, ttl: u32) -> Self {
        Self {
            name: name.to_string(),
            record_type: record_type.to_string(),
            data,
            ttl,
            priority: None,
            port: None,
            weight: None,
            flags: None,
            tag: None,
        }
    }
}

/// DigitalOcean 域名
#[derive(Debug, Clone, Deserialize)]
pub struct DigitalOceanDomain {
    pub name: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub ttl: Option<u32>,
}

/// `GET /domains/{name}` 响应
#[derive(Debug, Deserialize)]
pub struct DomainResponse {
    pub domain: DigitalOceanDomain,
}

/// 创建域名请求体
#[derive(Debug, Serialize)]
pub struct DomainCreateParams<'a> {
    pub name: &'a str,
    pub ip_address: &'a str,
}

/// `GET /account` 响应
#[derive(Debug, Deserialize)]
pub struct AccountResponse {
    pub account: DigitalOceanAccount,
}

#[derive(Debug, Deserialize)]
pub struct DigitalOceanAccount {
    pub status: String,
}
