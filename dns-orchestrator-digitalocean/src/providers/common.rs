//! Provider 公共工具函数

use crate::error::{ProviderError, Result};
use crate::types::DnsRecordType;

// ============ 记录类型转换 ============

/// 将字符串转换为 `DnsRecordType`
///
/// Wire types are matched case-sensitively: the API always reports uppercase
/// names, and anything else is treated as unsupported.
pub fn parse_record_type(record_type: &str, provider: &str) -> Result<DnsRecordType> {
    DnsRecordType::ALL
        .into_iter()
        .find(|t| t.as_str() == record_type)
        .ok_or_else(|| ProviderError::UnsupportedRecordType {
            provider: provider.to_string(),
            record_type: record_type.to_string(),
        })
}

// ============ 域名名称处理 ============

/// 补全末尾的点
/// 如: "mail.example.com" -> "mail.example.com."
/// 如: "." -> "."
pub fn ensure_trailing_dot(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}
