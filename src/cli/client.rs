use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Thin JSON client for the Mod API.
///
/// Non-2xx responses become errors carrying the server's `message` field.
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let mut base = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid server URL '{}': {}", base_url, e))?;
        // join() replaces the last segment unless the base ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            base,
            http: reqwest::Client::new(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    /// Relative path built from raw segments, each percent-encoded so `/`, `?`
    /// and `#` inside an id stay part of that segment
    pub fn path(segments: &[&str]) -> anyhow::Result<String> {
        let mut url = Url::parse("http://localhost/")?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("cannot build path from {:?}", segments))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.path().trim_start_matches('/').to_string())
    }

    pub fn url(&self, path: &str) -> anyhow::Result<Url> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }

    pub async fn get(&self, path: &str) -> anyhow::Result<Value> {
        self.send::<()>(Method::GET, path, None).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> anyhow::Result<Value> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> anyhow::Result<Value> {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> anyhow::Result<Value> {
        self.send::<()>(Method::DELETE, path, None).await
    }

    async fn send<B: Serialize>(&self, method: Method, path: &str, body: Option<&B>) -> anyhow::Result<Value> {
        let url = self.url(path)?;
        let mut request = self.http.request(method.clone(), url.clone());

        if let Some(token) = &self.token {
            // raw token, no Bearer prefix
            request = request.header(reqwest::header::AUTHORIZATION, token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("{} {} failed: {}", method, url, e))?;

        let status = response.status();
        let payload = response.json::<Value>().await.unwrap_or(Value::Null);

        if status.is_success() {
            return Ok(payload);
        }

        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed"));

        match status {
            StatusCode::UNAUTHORIZED => anyhow::bail!("{} ({}); session may have expired", message, status),
            _ => anyhow::bail!("{} ({})", message, status),
        }
    }
}
