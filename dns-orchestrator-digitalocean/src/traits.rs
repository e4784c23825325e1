use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::types::{Plan, ProviderMetadata, Zone};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP 状态码
    pub status: u16,
    /// 原始响应体
    pub message: String,
}

impl RawApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 请求路径（用于 `NotFound`）
    pub resource: Option<String>,
}

/// Provider 错误映射 Trait（内部使用）
/// 将非 2xx 响应映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;
}

/// HTTP verbs used by the DNS API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A single API call, relative to the API base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path such as `/domains/example.com/records`.
    pub path: String,
    /// 1-based page number for list endpoints.
    pub page: Option<u32>,
    /// JSON body for `POST`.
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            page: None,
            body: None,
        }
    }

    pub fn get_page(path: impl Into<String>, page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::get(path)
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            page: None,
            body: Some(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Delete,
            path: path.into(),
            page: None,
            body: None,
        }
    }
}

/// Transport seam between the provider and the remote API.
///
/// Implementations send one request and return the decoded JSON body
/// (`Value::Null` for empty bodies). HTTP 401 must surface as
/// [`ProviderError::InvalidCredentials`], HTTP 404 as [`ProviderError::NotFound`]
/// and any other non-2xx status as [`ProviderError::HttpStatus`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value>;
}

/// DNS 区域提供商 Trait
///
/// Calls are issued one at a time: every request is awaited before the next
/// one is sent, and changes are applied in plan order.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 实例标识符（用于日志）
    fn id(&self) -> &str;

    /// 获取 Provider 元数据（类型级别）
    fn metadata() -> ProviderMetadata
    where
        Self: Sized;

    /// 验证凭证是否有效
    async fn validate_credentials(&self) -> Result<bool>;

    /// Lists every zone in the account, sorted, each with a trailing dot.
    async fn list_zones(&self) -> Result<Vec<String>>;

    /// Appends the remote records of `zone` to it.
    ///
    /// Returns whether the zone exists remotely. A missing zone is not an error.
    async fn populate(&self, zone: &mut Zone, target: bool) -> Result<bool>;

    /// Applies `plan` and returns the number of changes applied.
    ///
    /// Creates the domain first when it does not exist. Not transactional:
    /// a failure leaves earlier changes in place.
    async fn apply(&self, plan: &Plan) -> Result<usize>;
}
