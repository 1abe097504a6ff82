//! Requests the server must refuse.

#[cfg(test)]
mod tests {
    use hmacgate_auth::SIGNATURE_HEADER;
    use hmacgate_client::SigningClient;
    use hmacgate_core::{Canonicalization, SigningConfig};

    use crate::{TestServer, demo_payload};

    const DEMO_BODY: &str = r#"{"transaction_datetime":"2024-08-15T14:00:00Z","customer_name":"John Doe","request_id":"123456789"}"#;

    async fn post(url: &str, signature: Option<&str>, body: &'static str) -> (u16, String) {
        let mut request = reqwest::Client::new()
            .post(url)
            .header("content-type", "application/json")
            .body(body);
        if let Some(sig) = signature {
            request = request.header(SIGNATURE_HEADER, sig);
        }
        let response = request.send().await.expect("send");
        let status = response.status().as_u16();
        (status, response.text().await.expect("body"))
    }

    #[tokio::test]
    async fn test_should_reject_missing_signature() {
        let server = TestServer::start(SigningConfig::new("rahasia")).await;

        let (status, body) = post(&server.url("/"), None, DEMO_BODY).await;

        assert_eq!(status, 403);
        assert_eq!(body, "Invalid Signature\n");
        server.stop().await;
    }

    #[tokio::test]
    async fn test_should_reject_empty_signature() {
        let server = TestServer::start(SigningConfig::new("rahasia")).await;

        let (status, body) = post(&server.url("/"), Some(""), DEMO_BODY).await;

        assert_eq!(status, 403);
        assert_eq!(body, "Invalid Signature\n");
        server.stop().await;
    }

    #[tokio::test]
    async fn test_should_reject_wrong_signature() {
        let server = TestServer::start(SigningConfig::new("rahasia")).await;

        let (status, body) = post(&server.url("/"), Some("invalid_signature"), DEMO_BODY).await;

        assert_eq!(status, 403);
        assert_eq!(body, "Invalid Signature\n");
        server.stop().await;
    }

    #[tokio::test]
    async fn test_should_reject_signature_for_tampered_body() {
        let config = SigningConfig::new("rahasia");
        let server = TestServer::start(config.clone()).await;
        let signed = SigningClient::new(&config)
            .sign_payload(&demo_payload())
            .expect("sign");

        let tampered = r#"{"transaction_datetime":"2024-08-15T14:00:00Z","customer_name":"John Doe","request_id":"123456780"}"#;
        let (status, body) = post(&server.url("/"), Some(&signed.signature), tampered).await;

        assert_eq!(status, 403);
        assert_eq!(body, "Invalid Signature\n");
        server.stop().await;
    }

    #[tokio::test]
    async fn test_should_reject_client_with_different_key() {
        let server = TestServer::start(SigningConfig::new("rahasia")).await;

        let response = SigningClient::new(&SigningConfig::new("not-rahasia"))
            .send(&demo_payload(), &server.url("/"))
            .await
            .expect("send");

        assert_eq!(response.status, reqwest::StatusCode::FORBIDDEN);
        assert_eq!(response.body, "Invalid Signature\n");
        server.stop().await;
    }

    #[tokio::test]
    async fn test_should_reject_mismatched_canonicalization() {
        let server = TestServer::start(
            SigningConfig::new("rahasia").with_canonicalization(Canonicalization::FieldJoined),
        )
        .await;

        let response = SigningClient::new(&SigningConfig::new("rahasia"))
            .send(&demo_payload(), &server.url("/"))
            .await
            .expect("send");

        assert_eq!(response.status, reqwest::StatusCode::FORBIDDEN);
        server.stop().await;
    }

    #[tokio::test]
    async fn test_should_reject_non_json_body_in_fields_mode() {
        let config =
            SigningConfig::new("rahasia").with_canonicalization(Canonicalization::FieldJoined);
        let server = TestServer::start(config).await;

        // What a lenient verifier would accept for an unparseable body: "::".
        let lenient = hmacgate_auth::sign(b"::", b"rahasia");
        let (status, body) = post(&server.url("/"), Some(&lenient), "not json").await;

        assert_eq!(status, 403);
        assert_eq!(body, "Invalid Signature\n");
        server.stop().await;
    }

    #[tokio::test]
    async fn test_should_tag_rejections_without_leaking_expected_token() {
        let config = SigningConfig::new("rahasia");
        let server = TestServer::start(config.clone()).await;
        let expected = hmacgate_auth::sign(DEMO_BODY.as_bytes(), b"rahasia");

        let response = reqwest::Client::new()
            .post(server.url("/"))
            .header(SIGNATURE_HEADER, "nope")
            .body(DEMO_BODY)
            .send()
            .await
            .expect("send");

        assert_eq!(response.status().as_u16(), 403);
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );
        for value in response.headers().values() {
            assert_ne!(value.as_bytes(), expected.as_bytes());
        }
        let body = response.text().await.expect("body");
        assert!(!body.contains(&expected));
        server.stop().await;
    }
}
