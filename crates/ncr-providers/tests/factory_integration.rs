//! End-to-end factory behavior over the standard provider set

use ncr_core::{ClientFactory, ContextSpecification};
use ncr_domain::ports::config::keys;
use ncr_domain::{
    Client, ClientConfig, ClientRequest, Error, LoadBalancer, LoadBalancerContext, NamedComponent,
    Server,
};
use ncr_providers::{standard_client_factory, StandardDefinitionProvider};
use std::sync::Arc;
use std::thread;

fn factory_with_servers(name: &str, servers: &str) -> ClientFactory {
    let provider = StandardDefinitionProvider::new().with_specification(
        name,
        ContextSpecification::new().with_property(keys::SERVERS, servers),
    );
    ClientFactory::new(Arc::new(provider))
}

#[test]
fn config_is_a_singleton_per_name() {
    let factory = standard_client_factory();

    let first = factory.get_client_config("serviceA").unwrap();
    let second = factory.get_client_config("serviceA").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.client_name(), "serviceA");

    let other = factory.get_client_config("serviceB").unwrap();
    assert!(!Arc::ptr_eq(&first, &other));
    assert_eq!(other.client_name(), "serviceB");
}

#[test]
fn names_do_not_leak_configuration_into_each_other() {
    let provider = StandardDefinitionProvider::new()
        .with_specification(
            "serviceA",
            ContextSpecification::new().with_property(keys::SERVERS, "a1:7001,a2:7002"),
        )
        .with_specification(
            "serviceB",
            ContextSpecification::new().with_property(keys::SERVERS, "b1:8001"),
        );
    let factory = ClientFactory::new(Arc::new(provider));

    let a = factory.get_load_balancer("serviceA").unwrap();
    let b = factory.get_load_balancer("serviceB").unwrap();
    assert_eq!(
        a.servers(),
        vec![Server::new("a1", 7001), Server::new("a2", 7002)]
    );
    assert_eq!(b.servers(), vec![Server::new("b1", 8001)]);

    let c = factory.get_load_balancer("serviceC").unwrap();
    assert!(c.servers().is_empty());
}

#[test]
fn round_robin_balancer_is_seeded_through_the_init_hook() {
    let factory = factory_with_servers("serviceA", "a1:7001,a2:7002");

    let balancer = factory.get_load_balancer("serviceA").unwrap();
    assert_eq!(balancer.component_name(), "round_robin");
    assert_eq!(
        balancer.servers(),
        vec![Server::new("a1", 7001), Server::new("a2", 7002)]
    );
    assert_eq!(balancer.choose(), Some(Server::new("a1", 7001)));
    assert_eq!(balancer.choose(), Some(Server::new("a2", 7002)));
    assert_eq!(balancer.choose(), Some(Server::new("a1", 7001)));
}

#[test]
fn direct_client_is_built_from_the_resolved_config() {
    let factory = factory_with_servers("serviceA", "a1:7001");

    let client = factory.get_client("serviceA").unwrap();
    assert_eq!(client.component_name(), "direct");
    let response = client.execute(&ClientRequest::new("/ping")).unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, "/ping -> a1:7001");
}

#[test]
fn client_implementation_is_selected_through_properties() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clients.toml");
    std::fs::write(
        &path,
        r#"
[quiet]
client = "null"
load_balancer = "null"
"#,
    )
    .unwrap();

    let provider = StandardDefinitionProvider::new().with_config_path(&path);
    let factory = ClientFactory::new(Arc::new(provider));

    let client = factory.get_client("quiet").unwrap();
    assert_eq!(client.component_name(), "null");
    let response = client.execute(&ClientRequest::new("/ping")).unwrap();
    assert_eq!(response.status, 204);

    let balancer = factory.get_load_balancer("quiet").unwrap();
    assert_eq!(balancer.component_name(), "null");
    assert_eq!(balancer.choose(), None);

    // Names the file does not mention keep the standard selection
    let other = factory.get_client("loud").unwrap();
    assert_eq!(other.component_name(), "direct");
}

#[test]
fn load_balancer_context_shares_the_cached_components() {
    let factory = factory_with_servers("serviceA", "a1:7001,a2:7002");

    let context = factory.get_load_balancer_context("serviceA").unwrap();
    let balancer = factory.get_load_balancer("serviceA").unwrap();
    let config = factory.get_client_config("serviceA").unwrap();

    let injected_balancer = context.load_balancer().unwrap();
    let injected_config = context.client_config().unwrap();
    assert!(Arc::ptr_eq(&balancer, &injected_balancer));
    assert!(Arc::ptr_eq(&config, &injected_config));

    assert!(context.choose_server().is_ok());
}

#[test]
fn context_without_servers_cannot_choose() {
    let factory = standard_client_factory();
    let context = factory.get_load_balancer_context("empty").unwrap();
    let error = context.choose_server().unwrap_err();
    assert!(matches!(error, Error::NoAvailableServers { .. }));
}

#[test]
fn context_names_and_disposal() {
    let factory = factory_with_servers("serviceA", "a1:7001");

    let first = factory.get_load_balancer("serviceA").unwrap();
    assert_eq!(factory.context_names(), vec!["serviceA".to_string()]);

    assert!(factory.dispose("serviceA"));
    assert!(factory.context_names().is_empty());

    // A fresh context produces a fresh instance
    let second = factory.get_load_balancer("serviceA").unwrap();
    assert!(!Arc::ptr_eq(&first, &second));

    factory.dispose_all();
    assert!(factory.context_names().is_empty());
}

#[test]
fn concurrent_resolution_yields_one_shared_instance() {
    let factory = Arc::new(factory_with_servers("shared", "a1:7001"));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let factory = Arc::clone(&factory);
            thread::spawn(move || factory.get_load_balancer("shared").unwrap())
        })
        .collect();
    let balancers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for balancer in &balancers[1..] {
        assert!(Arc::ptr_eq(&balancers[0], balancer));
    }
    assert_eq!(balancers[0].servers(), vec![Server::new("a1", 7001)]);
}
