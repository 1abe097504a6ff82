//! Payload signing and transmission.

use hmacgate_auth::{SIGNATURE_HEADER, sign_body};
use hmacgate_core::{Payload, SigningConfig};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{StatusCode, Url};
use tracing::{debug, info};

use crate::error::ClientError;

const JSON_CONTENT_TYPE: &str = "application/json";

/// A serialized payload and the token computed over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    /// Exact body bytes to transmit.
    pub body: Vec<u8>,
    /// Value for the `x-signature` header.
    pub signature: String,
}

/// Status and body returned by the verifying server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response body as text.
    pub body: String,
}

/// HTTP client that signs every payload it sends.
#[derive(Debug, Clone)]
pub struct SigningClient {
    http: reqwest::Client,
    config: SigningConfig,
}

impl SigningClient {
    /// Create a client signing with `config`.
    #[must_use]
    pub fn new(config: &SigningConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Create a client on top of a preconfigured `reqwest::Client`.
    #[must_use]
    pub fn with_http_client(http: reqwest::Client, config: &SigningConfig) -> Self {
        Self {
            http,
            config: config.clone(),
        }
    }

    /// Serialize `payload` and compute its token.
    ///
    /// The token is derived from the serialized body exactly as the verifier
    /// derives it from the received body.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Serialize`] if the payload cannot be encoded
    /// - [`ClientError::Canonicalize`] if the encoded body cannot be
    ///   canonicalized
    pub fn sign_payload(&self, payload: &Payload) -> Result<SignedPayload, ClientError> {
        let body = payload.to_bytes()?;
        let signature = sign_body(&body, &self.config)?;
        Ok(SignedPayload { body, signature })
    }

    /// Build a signed `POST` of `payload` to `endpoint` without sending it.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Serialize`] or [`ClientError::Canonicalize`] if the
    ///   payload cannot be signed
    /// - [`ClientError::InvalidEndpoint`] if `endpoint` is not an absolute URL
    /// - [`ClientError::Transport`] if the request cannot be assembled
    pub fn build_request(
        &self,
        payload: &Payload,
        endpoint: &str,
    ) -> Result<reqwest::Request, ClientError> {
        let url = Url::parse(endpoint).map_err(|e| ClientError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        let signed = self.sign_payload(payload)?;

        // Base64 tokens are always valid header values.
        let signature = HeaderValue::from_str(&signed.signature)
            .expect("base64 token is a valid header value");

        let request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(SIGNATURE_HEADER, signature)
            .body(signed.body)
            .build()?;
        Ok(request)
    }

    /// Sign `payload`, post it to `endpoint` and return the server's answer.
    ///
    /// Any HTTP status is a successful send; only delivery failures are errors.
    ///
    /// # Errors
    ///
    /// See [`build_request`](Self::build_request). Connection and read
    /// failures surface as [`ClientError::Transport`].
    pub async fn send(
        &self,
        payload: &Payload,
        endpoint: &str,
    ) -> Result<SignedResponse, ClientError> {
        let request = self.build_request(payload, endpoint)?;
        debug!(
            endpoint,
            request_id = %payload.request_id,
            mode = %self.config.canonicalization,
            "sending signed payload"
        );

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        info!(endpoint, status = status.as_u16(), "received response");
        Ok(SignedResponse { status, body })
    }
}
