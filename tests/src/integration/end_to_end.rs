//! # End-to-End Flows
//!
//! Each test binds a scan service to `127.0.0.1:0` with a seeded generator and
//! no artificial delay, then talks to it the way the dashboard does.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::{TimeZone, Utc};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    use scan_service::domain::error::messages;
    use scan_service::domain::{CATALOG, JITTER_DBM};
    use scan_service::{ScanDelayConfig, ScanService, SeededRng, ServiceConfig};
    use shared_types::{NetworkRecord, MASK_TOKEN};
    use sniffer_dashboard::domain::scanner::{DETAILS_UNREACHABLE, SCAN_UNREACHABLE};
    use sniffer_dashboard::domain::{ExportFormat, Scanner};
    use sniffer_dashboard::{App, ClientError, ScanApi, ScanApiClient};

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    /// A running service; dropping it stops the server.
    struct TestServer {
        addr: SocketAddr,
        _shutdown: oneshot::Sender<()>,
    }

    impl TestServer {
        fn api_url(&self) -> String {
            format!("http://{}/api", self.addr)
        }

        fn client(&self) -> ScanApiClient {
            ScanApiClient::new(&self.api_url()).unwrap()
        }
    }

    fn test_config() -> ServiceConfig {
        let mut config = ServiceConfig::default();
        config.scan_delay = ScanDelayConfig::none();
        config
    }

    async fn spawn_server(config: ServiceConfig, seed: u64) -> TestServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let service = ScanService::with_rng(config, Arc::new(SeededRng::new(seed))).unwrap();

        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(service.serve(listener, async move {
            let _ = rx.await;
        }));

        TestServer {
            addr,
            _shutdown: tx,
        }
    }

    fn assert_masked(network: &NetworkRecord) {
        let parts: Vec<&str> = network.mac.split(':').collect();
        assert_eq!(parts.len(), 6, "{}", network.mac);
        assert_eq!(parts[2], MASK_TOKEN);
        assert_eq!(parts[3], MASK_TOKEN);
    }

    // =========================================================================
    // LIST
    // =========================================================================

    #[tokio::test]
    async fn test_list_returns_masked_catalog() {
        let server = spawn_server(test_config(), 1).await;
        let before = Utc::now();

        let response = server.client().scan().await.unwrap();

        assert_eq!(response.networks.len(), 8);
        assert_eq!(response.networks[0].ssid, "HomeNetwork_5G");
        for network in &response.networks {
            assert_masked(network);
            assert!(network.signal_quality.is_none());
            assert!(network.security_details.is_none());
        }
        assert!(response.scan_time >= before - chrono::Duration::seconds(1));
    }

    #[tokio::test]
    async fn test_same_seed_same_signal_readings() {
        let first = spawn_server(test_config(), 42).await;
        let second = spawn_server(test_config(), 42).await;

        let a = first.client().scan().await.unwrap();
        let b = second.client().scan().await.unwrap();

        let rssi = |networks: &[NetworkRecord]| -> Vec<i32> {
            networks.iter().map(|n| n.rssi).collect()
        };
        assert_eq!(rssi(&a.networks), rssi(&b.networks));
    }

    #[tokio::test]
    async fn test_consecutive_lists_keep_identity_and_jitter_bounds() {
        let server = spawn_server(test_config(), 2).await;
        let client = server.client();

        let first = client.scan().await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = client.scan().await.unwrap();

        let identities = |networks: &[NetworkRecord]| -> BTreeSet<(String, String)> {
            networks
                .iter()
                .map(|n| (n.ssid.clone(), n.mac.clone()))
                .collect()
        };
        assert_eq!(identities(&first.networks), identities(&second.networks));
        assert_eq!(identities(&second.networks).len(), CATALOG.len());

        for response in [&first, &second] {
            for network in &response.networks {
                let entry = CATALOG.iter().find(|e| e.ssid == network.ssid).unwrap();
                assert!(
                    (network.rssi - entry.base_rssi).abs() <= JITTER_DBM,
                    "{} at {} dBm",
                    network.ssid,
                    network.rssi
                );
                assert_eq!(network.last_seen, response.scan_time);
            }
        }
        assert!(second.scan_time > first.scan_time);
    }

    // =========================================================================
    // DETAIL
    // =========================================================================

    #[tokio::test]
    async fn test_detail_is_augmented_and_masked() {
        let server = spawn_server(test_config(), 3).await;

        let network = server.client().details("Enterprise_Secure").await.unwrap();

        assert_eq!(network.ssid, "Enterprise_Secure");
        assert_masked(&network);
        assert_eq!(network.signal_quality, Some(network.quality()));
        let security = network.security_details.as_ref().unwrap();
        assert_eq!(security.encryption, network.encryption);
        assert!(security.authenticated);
    }

    #[tokio::test]
    async fn test_detail_unknown_network() {
        let server = spawn_server(test_config(), 4).await;

        let err = server.client().details("Nope").await.unwrap_err();

        match &err {
            ClientError::Service(Some(message)) => {
                assert_eq!(message, messages::NETWORK_NOT_FOUND)
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.user_message("fallback", "unreachable"), "Network not found");
    }

    #[tokio::test]
    async fn test_detail_name_is_percent_encoded() {
        let server = spawn_server(test_config(), 5).await;

        // A name with a slash must still reach the Detail route as one segment.
        let err = server.client().details("Home/Network 5G").await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Service(Some(ref message)) if message == messages::NETWORK_NOT_FOUND
        ));
    }

    // =========================================================================
    // HEALTH AND MIDDLEWARE
    // =========================================================================

    #[tokio::test]
    async fn test_health_over_http() {
        let server = spawn_server(test_config(), 6).await;

        let response = reqwest::get(format!("{}/health", server.api_url()))
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["status"], "healthy");
        assert!(body["uptime"].as_f64().unwrap() >= 0.0);
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn test_rate_limit_reaches_client_as_service_error() {
        let mut config = test_config();
        config.rate_limit.max_requests = 2;
        let server = spawn_server(config, 7).await;
        let client = server.client();

        client.scan().await.unwrap();
        client.scan().await.unwrap();
        let err = client.scan().await.unwrap_err();

        assert_eq!(
            err.user_message("fallback", "unreachable"),
            messages::RATE_LIMITED
        );
    }

    // =========================================================================
    // DASHBOARD FLOWS
    // =========================================================================

    #[tokio::test]
    async fn test_scanner_cycle_against_live_service() {
        let server = spawn_server(test_config(), 8).await;
        let mut scanner = Scanner::new(Arc::new(server.client()));

        scanner.scan().await;
        assert!(!scanner.state().scanning);
        assert!(scanner.state().error.is_none());
        assert_eq!(scanner.state().networks.len(), 8);
        assert!(scanner.state().last_scan_time.is_some());

        let missing = scanner.details("Nope").await;
        assert!(missing.is_none());
        assert_eq!(scanner.state().error.as_deref(), Some("Network not found"));
        assert_eq!(scanner.state().networks.len(), 8);
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ScanApiClient::new(&format!("http://{}/api", addr)).unwrap();
        let mut scanner = Scanner::new(Arc::new(client));

        scanner.scan().await;
        assert_eq!(scanner.state().error.as_deref(), Some(SCAN_UNREACHABLE));
        assert!(scanner.state().networks.is_empty());

        scanner.details("HomeNetwork_5G").await;
        assert_eq!(scanner.state().error.as_deref(), Some(DETAILS_UNREACHABLE));
    }

    #[tokio::test]
    async fn test_scan_then_export_json() {
        let server = spawn_server(test_config(), 9).await;
        let dir = tempfile::tempdir().unwrap();

        let mut app = App::new(dir.path(), server.api_url());
        app.request_scan();
        let result = server.client().scan().await;
        app.scanner.complete_scan(result);
        app.on_scan_applied();

        let now = Utc.with_ymd_and_hms(2024, 7, 4, 9, 30, 0).unwrap();
        app.export(ExportFormat::Json, now);

        let raw = std::fs::read_to_string(dir.path().join("wifi-scan-2024-07-04.json")).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["totalNetworks"], 8);
        assert_eq!(doc["networks"].as_array().unwrap().len(), 8);
        assert_eq!(doc["scanTime"], "2024-07-04T09:30:00.000Z");
        assert!(app.notice.unwrap().starts_with("Exported 8 networks as JSON"));
    }
}
