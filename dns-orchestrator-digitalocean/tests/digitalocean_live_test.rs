//! DigitalOcean DNS Provider 集成测试
//!
//! 运行方式:
//! ```bash
//! DIGITALOCEAN_TOKEN=xxx TEST_DOMAIN=example.com \
//!     cargo test -p dns-orchestrator-digitalocean --test digitalocean_live_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::{TestContext, generate_test_record_name};
use dns_orchestrator_digitalocean::{Change, DnsRecordType, GenericRecord, Plan, RecordData, Zone};

#[tokio::test]
#[ignore = "integration test: requires DIGITALOCEAN_TOKEN and TEST_DOMAIN"]
async fn test_digitalocean_validate_credentials() {
    skip_if_no_credentials!("DIGITALOCEAN_TOKEN", "TEST_DOMAIN");

    let ctx = require_some!(TestContext::digitalocean(), "创建测试上下文失败");
    let valid = require_ok!(
        ctx.provider.validate_credentials().await,
        "validate_credentials 调用失败"
    );
    assert!(valid, "凭证应该有效");

    println!("✓ validate_credentials 测试通过");
}

#[tokio::test]
#[ignore = "integration test: requires DIGITALOCEAN_TOKEN and TEST_DOMAIN"]
async fn test_digitalocean_list_zones() {
    skip_if_no_credentials!("DIGITALOCEAN_TOKEN", "TEST_DOMAIN");

    let ctx = require_some!(TestContext::digitalocean(), "创建测试上下文失败");
    let zones = require_ok!(ctx.provider.list_zones().await, "list_zones 调用失败");
    assert!(zones.contains(&ctx.zone), "测试域名应在列表中");

    println!("✓ list_zones 测试通过，共 {} 个域名", zones.len());
}

#[tokio::test]
#[ignore = "integration test: requires DIGITALOCEAN_TOKEN and TEST_DOMAIN"]
async fn test_digitalocean_txt_lifecycle() {
    skip_if_no_credentials!("DIGITALOCEAN_TOKEN", "TEST_DOMAIN");

    let ctx = require_some!(TestContext::digitalocean(), "创建测试上下文失败");
    let name = generate_test_record_name();
    let record = |value: &str| {
        GenericRecord::new(
            name.clone(),
            600,
            RecordData::TXT {
                values: vec![value.to_string()],
            },
        )
    };

    let mut current = Zone::new(ctx.zone.clone());
    let exists = require_ok!(ctx.provider.populate(&mut current, true).await, "populate 调用失败");
    assert!(exists, "测试域名应已存在");

    // create
    let mut desired = current.clone();
    desired.add_record(record("integration-test"));
    let plan = Plan::new(
        desired,
        vec![Change::Create {
            new: record("integration-test"),
        }],
        exists,
    );
    require_ok!(ctx.provider.apply(&plan).await, "apply(create) 调用失败");

    // update
    let plan = Plan::new(
        Zone::new(ctx.zone.clone()),
        vec![Change::Update {
            existing: record("integration-test"),
            new: record("integration-test-updated"),
        }],
        true,
    );
    require_ok!(ctx.provider.apply(&plan).await, "apply(update) 调用失败");

    let mut after = Zone::new(ctx.zone.clone());
    require_ok!(ctx.provider.populate(&mut after, true).await, "populate 调用失败");
    let found = require_some!(
        after.find(&name, DnsRecordType::Txt),
        "更新后的记录应存在"
    );
    assert_eq!(found.data, record("integration-test-updated").data);

    // delete
    let plan = Plan::new(
        Zone::new(ctx.zone.clone()),
        vec![Change::Delete {
            existing: found.clone(),
        }],
        true,
    );
    require_ok!(ctx.provider.apply(&plan).await, "apply(delete) 调用失败");

    println!("✓ TXT 记录生命周期测试通过: {name}");
}
