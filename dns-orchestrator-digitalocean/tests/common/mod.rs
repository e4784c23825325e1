//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::env;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use dns_orchestrator_digitalocean::{
    ApiRequest, DigitalOceanProvider, DnsProvider, HttpMethod, HttpTransport, ProviderCredentials,
    ProviderError, Result, create_provider,
};

pub const RECORDS_PAGE_1: &str = include_str!("../fixtures/records-page-1.json");
pub const RECORDS_PAGE_2: &str = include_str!("../fixtures/records-page-2.json");
pub const DOMAINS_PAGE_1: &str = include_str!("../fixtures/domains-page-1.json");
pub const DOMAINS_PAGE_2: &str = include_str!("../fixtures/domains-page-2.json");

pub const RECORDS_PATH: &str = "/domains/unit.tests/records";

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 解析 JSON fixture
pub fn fixture(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or(Value::Null)
}

pub fn not_found(resource: &str) -> ProviderError {
    ProviderError::NotFound {
        provider: "digitalocean".to_string(),
        resource: resource.to_string(),
        raw_message: Some("The resource you were accessing could not be found.".to_string()),
    }
}

pub fn unauthorized() -> ProviderError {
    ProviderError::InvalidCredentials {
        provider: "digitalocean".to_string(),
        raw_message: Some("Unable to authenticate you".to_string()),
    }
}

pub fn http_status(status: u16, message: &str) -> ProviderError {
    ProviderError::HttpStatus {
        provider: "digitalocean".to_string(),
        status,
        raw_message: Some(message.to_string()),
    }
}

/// A list page holding `items` under `key`, with no further pages.
pub fn single_page(key: &str, items: Value) -> Value {
    serde_json::json!({ key: items, "links": {}, "meta": { "total": 0 } })
}

type RouteKey = (HttpMethod, String, Option<u32>);

/// Scripted transport that records every request it receives.
///
/// Responses are queued per `(method, path, page)`. The last queued response
/// for a route keeps being served. Unrouted requests get the fallback, or
/// `NotFound` for `GET` and an empty body for everything else.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<RouteKey, VecDeque<Result<Value>>>>,
    fallback: Mutex<Option<Result<Value>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues a response for a route.
    pub fn on(&self, method: HttpMethod, path: &str, page: Option<u32>, response: Result<Value>) {
        lock(&self.routes)
            .entry((method, path.to_string(), page))
            .or_default()
            .push_back(response);
    }

    pub fn on_get(&self, path: &str, response: Result<Value>) {
        self.on(HttpMethod::Get, path, None, response);
    }

    pub fn on_page(&self, path: &str, page: u32, response: Result<Value>) {
        self.on(HttpMethod::Get, path, Some(page), response);
    }

    /// Response for every request without a route.
    pub fn fallback(&self, response: Result<Value>) {
        *lock(&self.fallback) = Some(response);
    }

    /// Serves the two-page `unit.tests` record fixtures.
    pub fn with_record_pages(&self) {
        self.on_page(RECORDS_PATH, 1, Ok(fixture(RECORDS_PAGE_1)));
        self.on_page(RECORDS_PATH, 2, Ok(fixture(RECORDS_PAGE_2)));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Requests that are not plain reads.
    pub fn writes(&self) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method != HttpMethod::Get)
            .collect()
    }

    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        lock(&self.requests).push(request.clone());

        let key = (request.method, request.path.clone(), request.page);
        if let Some(queue) = lock(&self.routes).get_mut(&key) {
            let response = if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            };
            if let Some(response) = response {
                return response;
            }
        }

        if let Some(response) = lock(&self.fallback).clone() {
            return response;
        }

        match request.method {
            HttpMethod::Get => Err(not_found(&request.path)),
            HttpMethod::Post | HttpMethod::Delete => Ok(Value::Null),
        }
    }
}

/// Provider over a fresh mock transport.
pub fn mock_provider() -> (DigitalOceanProvider, Arc<MockTransport>) {
    let transport = MockTransport::new();
    let provider = DigitalOceanProvider::with_transport("test", transport.clone());
    (provider, transport)
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 测试上下文 - 封装 Provider 和测试域名
pub struct TestContext {
    pub provider: Arc<dyn DnsProvider>,
    /// Zone name with the trailing dot.
    pub zone: String,
}

impl TestContext {
    /// 创建 DigitalOcean 测试上下文
    pub fn digitalocean() -> Option<Self> {
        let api_token = env::var("DIGITALOCEAN_TOKEN").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;

        let credentials = ProviderCredentials::DigitalOcean { api_token };
        let provider = create_provider("live", credentials).ok()?;

        Some(Self {
            provider,
            zone: format!("{}.", domain.trim_end_matches('.')),
        })
    }
}
