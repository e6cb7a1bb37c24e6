// bodega-client/tests/client_integration.rs

use bodega_client::{ClientConfig, HttpClient};

#[tokio::test]
async fn test_client_creation() {
    let config = ClientConfig::new("http://localhost:8080");
    let client = HttpClient::new(&config);
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_base_url_trailing_slash_is_normalized() {
    let config = ClientConfig::new("http://localhost:8080/");
    let client = config.build_http_client();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_config_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout, 30);

    let config = ClientConfig::new("https://api.example.com").with_timeout(5);
    assert_eq!(config.timeout, 5);
}

#[tokio::test]
async fn test_config_from_env_falls_back_to_default() {
    // Only meaningful when the variable is unset in the test environment
    if std::env::var(bodega_client::config::API_URL_ENV).is_err() {
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, bodega_client::config::DEFAULT_API_URL);
    }
}
