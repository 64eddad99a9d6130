use crate::config::ClientConfig;
use crate::error::{Result, TrackerError};
use crate::limit::Pacer;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::multipart::Form;
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Shared REST plumbing: a reqwest client carrying the service's default
/// headers, base-url joining, request pacing and uniform response handling.
#[derive(Clone)]
pub struct RestClient {
    http: HttpClient,
    config: ClientConfig,
    pacer: Pacer,
}

impl RestClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        let pacer = Pacer::new(config.pace);
        Ok(Self {
            http,
            config,
            pacer,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.get_with_query(path, &[]).await
    }

    pub async fn get_with_query<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.pacer.hit().await;
        let mut request = self.http.get(self.url_for(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        Self::parse_json(response).await
    }

    /// GET that also hands back the response headers, for endpoints whose
    /// interesting data travels out of band (token scope listings).
    pub async fn get_with_headers<T>(&self, path: &str) -> Result<(T, HeaderMap)>
    where
        T: DeserializeOwned,
    {
        self.pacer.hit().await;
        let response = self.http.get(self.url_for(path)).send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        if status.is_success() {
            let parsed = response.json::<T>().await.map_err(TrackerError::from)?;
            Ok((parsed, headers))
        } else {
            Err(Self::error_for(status, response).await)
        }
    }

    /// POST a JSON payload, requiring the exact status the service documents
    /// for a successful create (both trackers use 201).
    pub async fn post_expect<B, T>(&self, path: &str, body: &B, expected: StatusCode) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.pacer.hit().await;
        let response = self
            .http
            .post(self.url_for(path))
            .json(body)
            .send()
            .await?;
        let status = response.status();
        if status == expected {
            response.json::<T>().await.map_err(TrackerError::from)
        } else {
            Err(Self::error_for(status, response).await)
        }
    }

    /// POST a multipart form (file uploads).
    pub async fn post_multipart<T>(&self, path: &str, form: Form) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.pacer.hit().await;
        let response = self
            .http
            .post(self.url_for(path))
            .multipart(form)
            .send()
            .await?;
        Self::parse_json(response).await
    }

    /// POST a raw binary body with an explicit content type.
    pub async fn post_bytes<T>(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.pacer.hit().await;
        let response = self
            .http
            .post(self.url_for(path))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;
        Self::parse_json(response).await
    }

    fn url_for(&self, path: &str) -> String {
        let mut base = self.config.api_root();
        base.push_str(path.trim_start_matches('/'));
        base
    }

    async fn parse_json<T>(response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(TrackerError::from)
        } else {
            Err(Self::error_for(status, response).await)
        }
    }

    async fn error_for(status: StatusCode, response: Response) -> TrackerError {
        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, body = %body, "request failed");
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            TrackerError::Authentication(format!("access denied ({status}) - {body}"))
        } else {
            TrackerError::http(status, &body)
        }
    }
}

fn build_http_client(config: &ClientConfig) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();

    let auth_name = HeaderName::from_bytes(config.auth_scheme.header_name().as_bytes())
        .map_err(|err| TrackerError::Other(err.to_string()))?;
    headers.insert(
        auth_name,
        header_value(config.auth_scheme.header_value(&config.token))?,
    );

    if let Some(accept) = &config.accept {
        headers.insert(ACCEPT, header_value(accept.clone())?);
    }

    headers.insert(USER_AGENT, header_value(config.user_agent.clone())?);

    HttpClient::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .map_err(|err| TrackerError::Other(err.to_string()))
}

fn header_value(value: String) -> Result<HeaderValue> {
    HeaderValue::from_str(&value).map_err(|err| TrackerError::Other(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::RestClient;
    use crate::config::{AuthScheme, ClientConfig};
    use crate::error::TrackerError;
    use serde::Deserialize;
    use std::time::Duration;

    #[derive(Debug, Deserialize)]
    struct Probe {
        ok: bool,
    }

    fn test_config(base: &str, scheme: AuthScheme) -> ClientConfig {
        ClientConfig::new(base, "t0ken", scheme).with_pace(Duration::ZERO)
    }

    #[tokio::test]
    async fn get_sends_token_auth_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/probe")
            .match_header("authorization", "token t0ken")
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let client = RestClient::new(test_config(&server.url(), AuthScheme::Token)).unwrap();
        let probe: Probe = client.get("probe").await.unwrap();
        assert!(probe.ok);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn get_sends_private_token_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/probe")
            .match_header("private-token", "t0ken")
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let client = RestClient::new(test_config(&server.url(), AuthScheme::PrivateToken)).unwrap();
        let _: Probe = client.get("probe").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unauthorized_maps_to_authentication_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/probe")
            .with_status(401)
            .with_body(r#"{"message": "Bad credentials"}"#)
            .create_async()
            .await;

        let client = RestClient::new(test_config(&server.url(), AuthScheme::Token)).unwrap();
        let err = client.get::<Probe>("probe").await.unwrap_err();
        assert!(matches!(err, TrackerError::Authentication(_)));
    }

    #[tokio::test]
    async fn post_expect_rejects_unexpected_success_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/things")
            .with_status(200)
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let client = RestClient::new(test_config(&server.url(), AuthScheme::Token)).unwrap();
        let err = client
            .post_expect::<_, Probe>("things", &serde_json::json!({}), reqwest::StatusCode::CREATED)
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::Http { .. }));
    }

    #[tokio::test]
    async fn error_body_message_is_extracted() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/probe")
            .with_status(422)
            .with_body(r#"{"message": "Validation Failed"}"#)
            .create_async()
            .await;

        let client = RestClient::new(test_config(&server.url(), AuthScheme::Token)).unwrap();
        let err = client.get::<Probe>("probe").await.unwrap_err();
        assert_eq!(err.to_string(), "http 422 Unprocessable Entity: Validation Failed");
    }
}
