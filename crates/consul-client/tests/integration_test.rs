//! Consul Client Integration Tests
//!
//! These tests require a running Consul agent.
//!
//! To run these tests:
//! 1. Start an agent: `consul agent -dev`
//!    (for the ACL test, start it with ACLs enabled and export the management
//!    token as `CONSUL_HTTP_TOKEN`)
//! 2. Run: cargo test --test integration_test -- --ignored

use std::time::Duration;

use consul_client::{
    AclTokenRequest, AclTokenType, Consul, ConsulError, HealthServiceOptions, HealthStatus,
    KvDeleteOptions, KvPutOptions, QueryOptions, ServiceRegistration,
};
use futures::StreamExt;

fn create_client() -> anyhow::Result<Consul> {
    Ok(Consul::from_env()?)
}

fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}

// ============== KV Tests ==============

#[tokio::test]
#[ignore]
async fn test_kv_put_get_delete() -> anyhow::Result<()> {
    let consul = create_client()?;
    let kv = consul.kv();
    let key = unique("kv");

    let missing = kv.get(&key, &QueryOptions::new()).await?;
    assert!(missing.value.is_none());

    assert!(kv.put(&key, "bar", &KvPutOptions::new()).await?);
    let (index, entry) = kv.get(&key, &QueryOptions::new()).await?.into_parts();
    let entry = entry.expect("key was just written");
    assert_eq!(entry.value_str(), Some("bar"));
    assert!(index > 0);

    assert!(kv.delete(&key, &KvDeleteOptions::new()).await?);
    assert!(kv.get(&key, &QueryOptions::new()).await?.value.is_none());
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_kv_cas_and_flags() -> anyhow::Result<()> {
    let consul = create_client()?;
    let kv = consul.kv();
    let key = unique("cas");

    assert!(kv.put(&key, "bar", &KvPutOptions::new().with_flags(50)).await?);
    let entry = kv.get(&key, &QueryOptions::new()).await?.value.expect("written");
    assert_eq!(entry.flags, 50);

    // cas=0 only writes when the key does not exist
    assert!(!kv.put(&key, "bar2", &KvPutOptions::new().with_cas(0)).await?);
    assert!(
        kv.put(&key, "bar2", &KvPutOptions::new().with_cas(entry.modify_index))
            .await?
    );
    let entry = kv.get(&key, &QueryOptions::new()).await?.value.expect("written");
    assert_eq!(entry.value_str(), Some("bar2"));

    kv.delete(&key, &KvDeleteOptions::new()).await?;
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_kv_recursive() -> anyhow::Result<()> {
    let consul = create_client()?;
    let kv = consul.kv();
    let prefix = format!("{}/", unique("tree"));

    for i in 1..=3 {
        kv.put(&format!("{prefix}{i}"), i.to_string(), &KvPutOptions::new())
            .await?;
    }

    let entries = kv.list(&prefix, &QueryOptions::new()).await?.value.expect("written");
    let values: Vec<_> = entries.iter().filter_map(|e| e.value_str()).collect();
    assert_eq!(values, vec!["1", "2", "3"]);

    let keys = kv.keys(&prefix, None, &QueryOptions::new()).await?.value.expect("written");
    assert_eq!(keys.len(), 3);

    assert!(kv.delete(&prefix, &KvDeleteOptions::recursive()).await?);
    assert!(kv.list(&prefix, &QueryOptions::new()).await?.value.is_none());
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_kv_blocking_get() -> anyhow::Result<()> {
    let consul = create_client()?;
    let key = unique("block");
    consul.kv().put(&key, "v1", &KvPutOptions::new()).await?;
    let index = consul.kv().get(&key, &QueryOptions::new()).await?.index;

    let writer = consul.clone();
    let writer_key = key.clone();
    let handle = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        writer
            .kv()
            .put(&writer_key, "v2", &KvPutOptions::new())
            .await
    });

    let opts = QueryOptions::new()
        .with_index(index)
        .with_wait(Duration::from_secs(5));
    let changed = consul.kv().get(&key, &opts).await?;
    handle.await??;

    assert!(changed.index > index);
    assert_eq!(changed.value.expect("written").value_str(), Some("v2"));

    consul.kv().delete(&key, &KvDeleteOptions::new()).await?;
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_kv_watch() -> anyhow::Result<()> {
    let consul = create_client()?;
    let key = unique("watch");
    consul.kv().put(&key, "v1", &KvPutOptions::new()).await?;

    let kv = consul.kv();
    let stream = kv.watch(&key, &QueryOptions::new());
    futures::pin_mut!(stream);

    let first = stream.next().await.expect("stream open")?;
    assert_eq!(first.value.expect("written").value_str(), Some("v1"));

    consul.kv().put(&key, "v2", &KvPutOptions::new()).await?;
    let second = stream.next().await.expect("stream open")?;
    assert!(second.index > first.index);
    assert_eq!(second.value.expect("written").value_str(), Some("v2"));

    consul.kv().delete(&key, &KvDeleteOptions::new()).await?;
    Ok(())
}

// ============== Agent / Health Tests ==============

#[tokio::test]
#[ignore]
async fn test_agent_service_ttl_lifecycle() -> anyhow::Result<()> {
    let consul = create_client()?;
    let name = unique("svc");
    let registration = ServiceRegistration::new(&name).with_ttl(Duration::from_secs(2));

    assert!(consul.agent().service().register(&registration).await?);
    assert!(consul.agent().services().await?.contains_key(&name));

    let passing = consul
        .health()
        .service(&name, &HealthServiceOptions::passing())
        .await?;
    assert!(passing.value.is_empty());

    consul
        .agent()
        .check()
        .ttl_pass(&registration.check_id(), Some("up"))
        .await?;
    let passing = consul
        .health()
        .service(&name, &HealthServiceOptions::passing())
        .await?;
    assert_eq!(passing.value.len(), 1);

    let checks = consul.health().checks(&name, &QueryOptions::new()).await?;
    assert_eq!(checks.value[0].status, HealthStatus::Passing);

    // No heartbeat within the TTL: the instance drops out again
    tokio::time::sleep(Duration::from_secs(3)).await;
    let passing = consul
        .health()
        .service(&name, &HealthServiceOptions::passing())
        .await?;
    assert!(passing.value.is_empty());
    let checks = consul.health().checks(&name, &QueryOptions::new()).await?;
    assert_eq!(checks.value[0].status, HealthStatus::Critical);

    assert!(consul.agent().service().deregister(&name).await?);
    Ok(())
}

// ============== Catalog / Status Tests ==============

#[tokio::test]
#[ignore]
async fn test_catalog_and_status() -> anyhow::Result<()> {
    let consul = create_client()?;

    let info = consul.agent().self_info().await?;
    let dc = info.datacenter().unwrap_or("dc1").to_string();
    assert!(consul.catalog().datacenters().await?.contains(&dc));

    let nodes = consul.catalog().nodes(&QueryOptions::new()).await?;
    assert!(!nodes.value.is_empty());

    let node_name = info.node_name().unwrap_or_default().to_string();
    let node = consul.catalog().node(&node_name, &QueryOptions::new()).await?;
    assert!(node.value.is_some());

    let missing = consul
        .catalog()
        .nodes(&QueryOptions::new().with_datacenter("no-such-dc"))
        .await;
    assert!(matches!(missing, Err(ConsulError::Consul { status: 500, .. })));

    assert!(!consul.status().leader().await?.is_empty());
    assert!(!consul.status().peers().await?.is_empty());
    Ok(())
}

// ============== ACL Tests ==============

#[tokio::test]
#[ignore]
async fn test_acl_token_lifecycle() -> anyhow::Result<()> {
    let consul = create_client()?;
    let acl = consul.acl();

    // Without a management token the agent reports ACLs as disabled
    if let Err(ConsulError::AclDisabled(_)) = acl.list(None).await {
        return Ok(());
    }

    let request = AclTokenRequest::new()
        .with_name(&unique("acl"))
        .with_type(AclTokenType::Client)
        .with_rules(r#"key "" { policy = "read" }"#);
    let id = acl.create(&request, None).await?;

    let token = acl.info(&id, None).await?.expect("created");
    assert_eq!(token.token_type, AclTokenType::Client);

    let clone = acl.clone_token(&id, None).await?;
    assert_ne!(clone, id);

    assert!(acl.destroy(&clone, None).await?);
    assert!(acl.destroy(&id, None).await?);
    assert!(acl.info(&id, None).await?.is_none());
    Ok(())
}
