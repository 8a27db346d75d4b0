//! HTTP client for the bridge's local API.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};
use serde_json::Value;
use tokio::time::sleep;

use crate::config::BridgeConfig;
use crate::errors::{ApiError, Error};
use crate::limiter::RateLimiter;
use crate::state::StateUpdate;
use crate::types::LightId;

type Result<T> = std::result::Result<T, Error>;

/// HTTP method for a bridge call.
///
/// The bridge only ever sees reads and state writes, so the dialect is GET
/// and PUT — nothing is created or deleted through this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Put,
}

/// Decoded bridge response envelope.
///
/// GET returns bare data while PUT returns a list of per-field outcomes, so
/// the decode path is chosen by call site rather than inferred from shape.
#[derive(Debug)]
pub(crate) enum Envelope {
    /// First element of a PUT response list carrying a `success` entry.
    Success(Value),
    /// The bridge reported a structured error object.
    Error(ApiError),
    /// Anything else, returned unmodified.
    Data(Value),
}

impl Envelope {
    /// Decode a GET response body.
    pub(crate) fn decode_get(value: Value) -> Envelope {
        if let Some(error) = leading_error(&value) {
            return Envelope::Error(error);
        }
        Envelope::Data(value)
    }

    /// Decode a PUT response body.
    ///
    /// A list whose first element carries `success` collapses to that
    /// element; a leading `error` becomes [`Envelope::Error`]; an empty or
    /// unexpected list passes through unmodified.
    pub(crate) fn decode_put(value: Value) -> Envelope {
        if let Some(error) = leading_error(&value) {
            return Envelope::Error(error);
        }
        if let Value::Array(items) = &value {
            if let Some(first) = items.first() {
                if first.get("success").is_some() {
                    return Envelope::Success(first.clone());
                }
            }
        }
        Envelope::Data(value)
    }
}

/// Extract the bridge error object from a `[{"error": {..}}]` body.
fn leading_error(value: &Value) -> Option<ApiError> {
    let error = value.as_array()?.first()?.get("error")?;
    Some(
        serde_json::from_value(error.clone()).unwrap_or_else(|_| ApiError {
            code: 0,
            address: String::new(),
            description: error.to_string(),
        }),
    )
}

/// Async HTTP client for a Hue bridge.
///
/// Owns a pooled [`reqwest::Client`] configured from [`BridgeConfig`] and a
/// shared [`RateLimiter`] handle. Every call goes through one request
/// executor that classifies HTTP status codes, retries transient failures
/// with exponential backoff, and decodes the bridge's response envelope.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use hue_lights_rs::{BridgeClient, BridgeConfig, RateLimiter};
///
/// # async fn connect() -> Result<(), hue_lights_rs::Error> {
/// let config = BridgeConfig::from_env()?;
/// let limiter = Arc::new(RateLimiter::from_config(&config));
/// let client = BridgeClient::new(&config, limiter)?;
/// if client.test_connection().await {
///     let lights = client.get_lights().await?;
///     println!("{lights:#}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BridgeClient {
    base_url: String,
    http: reqwest::Client,
    limiter: Arc<RateLimiter>,
}

impl BridgeClient {
    const MAX_RETRIES: u32 = 3;

    /// Build a client for the configured bridge.
    ///
    /// The limiter is taken as an `Arc` so every client talking to the same
    /// bridge shares one set of counters.
    pub fn new(config: &BridgeConfig, limiter: Arc<RateLimiter>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.timeout_connect)
            .timeout(config.timeout_read)
            .pool_max_idle_per_host(config.max_keepalive)
            .build()
            .map_err(Error::ClientBuild)?;

        Ok(BridgeClient {
            base_url: config.base_url(),
            http,
            limiter,
        })
    }

    /// Get all lights as a map of light-id to light document.
    pub async fn get_lights(&self) -> Result<Value> {
        self.request("/lights", Method::Get, None).await
    }

    /// Get the full document of a single light.
    pub async fn get_light(&self, id: LightId) -> Result<Value> {
        self.request(&format!("/lights/{}", id.value()), Method::Get, None)
            .await
    }

    /// Apply a state update to a single light, respecting the per-light
    /// token bucket.
    pub async fn control_light(&self, id: LightId, state: &StateUpdate) -> Result<Value> {
        self.limiter.acquire_light_slot().await;
        let body = serde_json::to_value(state).map_err(Error::JsonDump)?;
        self.request(
            &format!("/lights/{}/state", id.value()),
            Method::Put,
            Some(body),
        )
        .await
    }

    /// Apply a state update to a group, respecting the group interval gate.
    ///
    /// Group id 0 addresses every light on the bridge.
    pub async fn control_group(&self, group_id: u8, state: &StateUpdate) -> Result<Value> {
        self.limiter.acquire_group_slot().await;
        let body = serde_json::to_value(state).map_err(Error::JsonDump)?;
        self.request(&format!("/groups/{group_id}/action"), Method::Put, Some(body))
            .await
    }

    /// Get all groups known to the bridge.
    pub async fn get_groups(&self) -> Result<Value> {
        self.request("/groups", Method::Get, None).await
    }

    /// Get the bridge configuration document.
    pub async fn get_config(&self) -> Result<Value> {
        self.request("/config", Method::Get, None).await
    }

    /// Check whether the bridge is reachable with the configured credential.
    ///
    /// Never fails; any error is logged and reported as `false`.
    pub async fn test_connection(&self) -> bool {
        match self.get_config().await {
            Ok(_) => {
                info!("successfully connected to Hue bridge");
                true
            }
            Err(e) => {
                error!("failed to connect to Hue bridge: {e}");
                false
            }
        }
    }

    /// Shared request executor with retry, backoff, and status
    /// classification.
    ///
    /// 429 backs off `1.0 * 2^attempt` seconds and retries; 404 and 401 fail
    /// immediately; other non-success statuses and transport faults retry
    /// with `0.5 * 2^attempt` seconds of backoff before the typed error is
    /// returned.
    async fn request(&self, endpoint: &str, method: Method, body: Option<Value>) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut last_error = None;

        for attempt in 0..Self::MAX_RETRIES {
            debug!("{method:?} {endpoint} (attempt {})", attempt + 1);

            let builder = match method {
                Method::Get => self.http.get(&url),
                Method::Put => self.http.put(&url).json(body.as_ref().unwrap_or(&Value::Null)),
            };

            let response = match builder.send().await {
                Ok(response) => response,
                Err(e) => {
                    if attempt + 1 == Self::MAX_RETRIES {
                        return Err(classify_transport(e, Self::MAX_RETRIES));
                    }
                    sleep(transport_backoff(attempt)).await;
                    continue;
                }
            };

            let status = response.status().as_u16();
            match status {
                429 => {
                    let wait = Duration::from_secs_f64(2f64.powi(attempt as i32));
                    warn!("bridge rate limited {endpoint}, backing off {wait:?}");
                    sleep(wait).await;
                    continue;
                }
                404 => return Err(Error::not_found(endpoint)),
                401 => return Err(Error::Unauthorized),
                _ if !(200..300).contains(&status) => {
                    last_error = Some(Error::unexpected_status(status, endpoint));
                    if attempt + 1 < Self::MAX_RETRIES {
                        sleep(transport_backoff(attempt)).await;
                    }
                    continue;
                }
                _ => {}
            }

            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    if attempt + 1 == Self::MAX_RETRIES {
                        return Err(classify_transport(e, Self::MAX_RETRIES));
                    }
                    sleep(transport_backoff(attempt)).await;
                    continue;
                }
            };
            let value: Value = serde_json::from_str(&text).map_err(Error::JsonLoad)?;

            let envelope = match method {
                Method::Get => Envelope::decode_get(value),
                Method::Put => Envelope::decode_put(value),
            };
            return match envelope {
                Envelope::Success(value) | Envelope::Data(value) => {
                    debug!("{method:?} {endpoint} succeeded");
                    Ok(value)
                }
                Envelope::Error(api_error) => Err(Error::Bridge(api_error)),
            };
        }

        Err(last_error.unwrap_or(Error::RetriesExhausted))
    }
}

/// Map a transport failure that survived the retry budget to its typed
/// error.
fn classify_transport(source: reqwest::Error, attempts: u32) -> Error {
    if source.is_timeout() {
        Error::Timeout { attempts, source }
    } else {
        Error::Connection { attempts, source }
    }
}

fn transport_backoff(attempt: u32) -> Duration {
    Duration::from_secs_f64(0.5 * 2f64.powi(attempt as i32))
}

#[cfg(test)]
impl BridgeClient {
    /// Client pointed at an arbitrary base URL with short timeouts.
    pub(crate) fn for_tests(base_url: impl Into<String>, limiter: Arc<RateLimiter>) -> Self {
        BridgeClient {
            base_url: base_url.into(),
            http: reqwest::Client::builder()
                .connect_timeout(Duration::from_millis(500))
                .timeout(Duration::from_millis(500))
                .build()
                .expect("failed to build test client"),
            limiter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::net::SocketAddr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn limiter() -> Arc<RateLimiter> {
        Arc::new(RateLimiter::new(100, Duration::from_millis(1)))
    }

    fn client(base_url: &str) -> BridgeClient {
        BridgeClient::for_tests(base_url, limiter())
    }

    #[test]
    fn test_put_envelope_success() {
        let value = json!([{"success": {"/lights/1/state/on": true}}]);
        match Envelope::decode_put(value) {
            Envelope::Success(first) => {
                assert_eq!(first["success"]["/lights/1/state/on"], true);
            }
            other => panic!("expected success envelope, got {other:?}"),
        }
    }

    #[test]
    fn test_put_envelope_error() {
        let value = json!([{"error": {
            "type": 201,
            "address": "/lights/1/state/bri",
            "description": "parameter, bri, is not modifiable",
        }}]);
        match Envelope::decode_put(value) {
            Envelope::Error(error) => {
                assert_eq!(error.code, 201);
                assert_eq!(error.description, "parameter, bri, is not modifiable");
            }
            other => panic!("expected error envelope, got {other:?}"),
        }
    }

    #[test]
    fn test_put_envelope_passthrough() {
        match Envelope::decode_put(json!([])) {
            Envelope::Data(value) => assert_eq!(value, json!([])),
            other => panic!("expected data envelope, got {other:?}"),
        }
    }

    #[test]
    fn test_get_envelope_is_bare_data() {
        let value = json!({"1": {"name": "neals_lamp"}});
        match Envelope::decode_get(value.clone()) {
            Envelope::Data(data) => assert_eq!(data, value),
            other => panic!("expected data envelope, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_lights() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/lights")
            .with_status(200)
            .with_body(r#"{"1": {"name": "neals_lamp", "type": "Dimmable light"}}"#)
            .expect(1)
            .create_async()
            .await;

        let lights = client(&server.url()).get_lights().await.unwrap();
        assert_eq!(lights["1"]["name"], "neals_lamp");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_control_light_returns_success_object() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/lights/3/state")
            .match_body(mockito::Matcher::PartialJson(json!({"on": true})))
            .with_status(200)
            .with_body(r#"[{"success": {"/lights/3/state/on": true}}]"#)
            .expect(1)
            .create_async()
            .await;

        let mut state = StateUpdate::new();
        state.on(true);
        let id = LightId::create(3).unwrap();
        let result = client(&server.url()).control_light(id, &state).await.unwrap();
        assert_eq!(result["success"]["/lights/3/state/on"], true);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_bridge_error_is_not_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/lights/3/state")
            .with_status(200)
            .with_body(r#"[{"error": {"type": 7, "address": "/lights/3/state", "description": "invalid value"}}]"#)
            .expect(1)
            .create_async()
            .await;

        let mut state = StateUpdate::new();
        state.on(true);
        let id = LightId::create(3).unwrap();
        let error = client(&server.url())
            .control_light(id, &state)
            .await
            .unwrap_err();
        assert_eq!(error.kind(), "bridge");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_404_fails_without_retry() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/lights/9")
            .with_status(404)
            .expect(1)
            .create_async()
            .await;

        let id = LightId::create(9).unwrap();
        let error = client(&server.url()).get_light(id).await.unwrap_err();
        assert_eq!(error.kind(), "validation");
        assert!(error.to_string().contains("/lights/9"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_401_fails_without_retry() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/config")
            .with_status(401)
            .expect(1)
            .create_async()
            .await;

        let error = client(&server.url()).get_config().await.unwrap_err();
        assert_eq!(error.kind(), "connection");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_test_connection_swallows_failures() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/config")
            .with_status(401)
            .create_async()
            .await;

        assert!(!client(&server.url()).test_connection().await);

        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/config")
            .with_status(200)
            .with_body(r#"{"name": "Philips hue"}"#)
            .create_async()
            .await;

        assert!(client(&server.url()).test_connection().await);
    }

    /// Serve one scripted raw response per accepted connection, counting
    /// connections. Responses carry `connection: close`, so every attempt
    /// shows up as a new accept.
    async fn scripted_server(responses: Vec<String>) -> (SocketAddr, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        tokio::spawn(async move {
            for response in responses {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                counter.fetch_add(1, Ordering::SeqCst);
                let mut buffer = [0u8; 4096];
                let _ = stream.read(&mut buffer).await;
                let _ = stream.write_all(response.as_bytes()).await;
            }
        });

        (addr, hits)
    }

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\n\
             content-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    #[tokio::test]
    async fn test_429_retries_and_returns_payload() {
        let (addr, hits) = scripted_server(vec![
            http_response("429 Too Many Requests", ""),
            http_response("200 OK", r#"{"name": "Philips hue"}"#),
        ])
        .await;

        let config = client(&format!("http://{addr}")).get_config().await.unwrap();
        assert_eq!(config["name"], "Philips hue");
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    /// Accept connections, read the request, and never answer.
    async fn silent_server() -> (SocketAddr, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        tokio::spawn(async move {
            let mut connections = Vec::new();
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                counter.fetch_add(1, Ordering::SeqCst);
                let mut buffer = [0u8; 4096];
                let _ = stream.read(&mut buffer).await;
                connections.push(stream);
            }
        });

        (addr, hits)
    }

    #[tokio::test]
    async fn test_persistent_timeout_exhausts_retries() {
        let (addr, hits) = silent_server().await;

        let error = client(&format!("http://{addr}"))
            .get_lights()
            .await
            .unwrap_err();
        assert_eq!(error.kind(), "timeout");
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_connection_refused_is_connection_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let error = client(&format!("http://{addr}"))
            .get_lights()
            .await
            .unwrap_err();
        assert_eq!(error.kind(), "connection");
    }
}
