use crate::models::ApiEnvelope;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, CONTENT_TYPE, EXPIRES, PRAGMA};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API base URL '{0}'")]
    InvalidBaseUrl(String),
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Backend responded with {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("Malformed response envelope: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Headers attached to every backend request.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store, must-revalidate"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(EXPIRES, HeaderValue::from_static("0"));
    headers
}

/// The one configured client for the REST backend. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;
        let http = Client::builder().default_headers(default_headers()).build()?;
        Ok(ApiClient { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, keeping any path prefix it already has.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<ApiEnvelope<T>, ApiError> {
        let url = self.endpoint(segments)?;
        self.send(self.http.get(url)).await
    }

    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<ApiEnvelope<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        self.send(self.http.post(url).json(body)).await
    }

    pub async fn put<B, T>(&self, segments: &[&str], body: &B) -> Result<ApiEnvelope<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        self.send(self.http.put(url).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<ApiEnvelope<T>, ApiError> {
        let url = self.endpoint(segments)?;
        self.send(self.http.delete(url)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<ApiEnvelope<T>, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(ApiEnvelope::empty());
        }

        let envelope: ApiEnvelope<T> = serde_json::from_slice(&body)?;
        if !envelope.success {
            log::warn!(
                "Backend reported success=false: {}",
                envelope.error.as_deref().or(envelope.message.as_deref()).unwrap_or("no message")
            );
        }
        Ok(envelope)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw.trim()).map_err(|_| ApiError::InvalidBaseUrl(raw.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(url)
}

// Prefer the envelope's own error text; fall back to the raw body.
fn status_error(status: StatusCode, body: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<ApiEnvelope<serde::de::IgnoredAny>>(body)
        .ok()
        .and_then(|envelope| envelope.error.or(envelope.message))
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string());
    ApiError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://localhost:3001/api", "http://localhost:3001/api/categories/5")]
    #[case("http://localhost:3001/api/", "http://localhost:3001/api/categories/5")]
    #[case("https://blog.example", "https://blog.example/categories/5")]
    fn endpoint_keeps_base_path(#[case] base: &str, #[case] expected: &str) {
        let client = ApiClient::new(base).unwrap();
        assert_eq!(client.endpoint(&["categories", "5"]).unwrap().as_str(), expected);
    }

    #[rstest]
    #[case("not a url")]
    #[case("mailto:admin@example.com")]
    #[case("ftp://files.example/api")]
    fn rejects_unusable_base_urls(#[case] base: &str) {
        assert!(matches!(ApiClient::new(base), Err(ApiError::InvalidBaseUrl(_))));
    }

    #[test]
    fn default_headers_disable_caching() {
        let headers = default_headers();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[CACHE_CONTROL], "no-cache, no-store, must-revalidate");
        assert_eq!(headers[PRAGMA], "no-cache");
        assert_eq!(headers[EXPIRES], "0");
    }

    #[test]
    fn status_error_prefers_envelope_message() {
        let err = status_error(StatusCode::BAD_REQUEST, br#"{"success":false,"error":"name is required"}"#);
        assert_eq!(err.to_string(), "Backend responded with 400 Bad Request: name is required");

        let err = status_error(StatusCode::BAD_GATEWAY, b"upstream down");
        assert_eq!(err.to_string(), "Backend responded with 502 Bad Gateway: upstream down");
    }
}
