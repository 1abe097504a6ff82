//! Signed payloads accepted end to end.

#[cfg(test)]
mod tests {
    use hmacgate_client::SigningClient;
    use hmacgate_core::{Canonicalization, Payload, SigningConfig};

    use crate::{TestServer, demo_payload};

    #[tokio::test]
    async fn test_should_accept_demo_payload_signed_by_client() {
        let config = SigningConfig::new("rahasia");
        let server = TestServer::start(config.clone()).await;

        let response = SigningClient::new(&config)
            .send(&demo_payload(), &server.url("/"))
            .await
            .expect("send");

        assert_eq!(response.status, reqwest::StatusCode::OK);
        assert_eq!(response.body, "Valid!");
        server.stop().await;
    }

    #[tokio::test]
    async fn test_should_accept_empty_secret_on_both_sides() {
        let config = SigningConfig::default();
        let server = TestServer::start(config.clone()).await;

        let response = SigningClient::new(&config)
            .send(&demo_payload(), &server.url("/"))
            .await
            .expect("send");

        assert_eq!(response.status, reqwest::StatusCode::OK);
        server.stop().await;
    }

    #[tokio::test]
    async fn test_should_accept_field_joined_signature() {
        let config =
            SigningConfig::new("rahasia").with_canonicalization(Canonicalization::FieldJoined);
        let server = TestServer::start(config.clone()).await;

        let response = SigningClient::new(&config)
            .send(&demo_payload(), &server.url("/"))
            .await
            .expect("send");

        assert_eq!(response.status, reqwest::StatusCode::OK);
        assert_eq!(response.body, "Valid!");
        server.stop().await;
    }

    #[tokio::test]
    async fn test_should_accept_non_ascii_payload() {
        let config = SigningConfig::new("rahasia");
        let server = TestServer::start(config.clone()).await;
        let payload = Payload::stamped_now("Zoë Ñúñez <&>", "req-ünï");

        let response = SigningClient::new(&config)
            .send(&payload, &server.url("/"))
            .await
            .expect("send");

        assert_eq!(response.status, reqwest::StatusCode::OK);
        server.stop().await;
    }

    #[tokio::test]
    async fn test_should_guard_every_path() {
        let config = SigningConfig::new("rahasia");
        let server = TestServer::start(config.clone()).await;
        let client = SigningClient::new(&config);

        for path in ["/", "/orders", "/a/b/c?x=1"] {
            let response = client
                .send(&demo_payload(), &server.url(path))
                .await
                .expect("send");
            assert_eq!(response.status, reqwest::StatusCode::OK, "path {path}");
        }
        server.stop().await;
    }

    #[tokio::test]
    async fn test_should_serve_concurrent_clients() {
        let config = SigningConfig::new("rahasia");
        let server = TestServer::start(config.clone()).await;
        let url = server.url("/");

        let mut tasks = Vec::new();
        for i in 0..16 {
            let client = SigningClient::new(&config);
            let url = url.clone();
            tasks.push(tokio::spawn(async move {
                let payload = Payload::new("2024-08-15T14:00:00Z", "John Doe", i.to_string());
                client.send(&payload, &url).await.expect("send").status
            }));
        }

        for task in tasks {
            assert_eq!(task.await.expect("join"), reqwest::StatusCode::OK);
        }
        server.stop().await;
    }
}
