//! Common test utilities and helpers

use odxproxy::{Client, ClientConfig, InstanceInfo, TimeoutPolicy};
use std::path::Path;
use std::time::Duration;

/// API key every test instance carries
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "odoo-test-key-0123456789";

/// Load a response fixture
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(format!("{}.json", name));

    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    })
}

/// Instance descriptor used across tests
#[allow(dead_code)]
pub fn test_instance() -> InstanceInfo {
    InstanceInfo::new("https://erp.example.com", 2, "prod", TEST_API_KEY)
}

/// Configuration pointing at a mock gateway
#[allow(dead_code)]
pub fn test_config(gateway_url: &str) -> ClientConfig {
    ClientConfig::builder()
        .instance(test_instance())
        .gateway_url(gateway_url)
        .build()
        .expect("Failed to build config")
}

/// Client pointing at a mock gateway
#[allow(dead_code)]
pub fn test_client(gateway_url: &str) -> Client {
    Client::new(test_config(gateway_url)).expect("Failed to build client")
}

/// Client with budgets short enough to trip on a delayed mock
#[allow(dead_code)]
pub fn impatient_client(gateway_url: &str) -> Client {
    let config = ClientConfig::builder()
        .instance(test_instance())
        .gateway_url(gateway_url)
        .timeouts(TimeoutPolicy::new(
            Duration::from_millis(200),
            Duration::from_millis(100),
            Duration::from_millis(100),
        ))
        .build()
        .expect("Failed to build config");

    Client::new(config).expect("Failed to build client")
}
