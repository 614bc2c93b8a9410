pub mod error;
pub mod wire;

pub use error::{ClientError, Result};
pub use wire::{ServerInfo, UpdateResult, UpdateStatus};

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use vecprobe_core::{validate_name, CollectionSpec, PointId, PointRecord, ProbeConfig};
use wire::{
    ApiResponse, CountPoints, CountResult, CreateCollection, ErrorResponse, GetPoints,
    UpsertPoints, VectorParams,
};

/// Connection settings for [`Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub url: String,
    pub timeout: Duration,
    pub api_key: Option<String>,
}

impl From<&ProbeConfig> for ClientConfig {
    fn from(cfg: &ProbeConfig) -> Self {
        Self {
            url: cfg.url.clone(),
            timeout: cfg.timeout,
            api_key: cfg.api_key.clone(),
        }
    }
}

/// Session against a Qdrant-compatible REST endpoint.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    api_key: Option<String>,
}

impl Client {
    /// Builds the HTTP session. No request is sent until the first call.
    pub fn connect(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            api_key: config.api_key,
        })
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Liveness check against the root endpoint.
    pub async fn health_check(&self) -> Result<ServerInfo> {
        let body = self.execute(self.request(Method::GET, "/")).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Drops a collection. `Ok(false)` means the server reported nothing to delete.
    pub async fn delete_collection(&self, name: &str) -> Result<bool> {
        let path = collection_path(name, "")?;
        self.call(self.request(Method::DELETE, &path)).await
    }

    pub async fn create_collection(&self, spec: &CollectionSpec) -> Result<bool> {
        let path = collection_path(spec.name(), "")?;
        let body = CreateCollection {
            vectors: VectorParams {
                size: spec.size(),
                distance: spec.distance(),
            },
        };
        self.call_with(Method::PUT, &path, &body).await
    }

    /// Upserts a batch. With `wait` the server answers only once the
    /// operation is applied.
    pub async fn upsert_points(
        &self,
        name: &str,
        points: &[PointRecord],
        wait: bool,
    ) -> Result<UpdateResult> {
        let path = collection_path(name, &format!("/points?wait={wait}"))?;
        self.call_with(Method::PUT, &path, &UpsertPoints { points })
            .await
    }

    pub async fn count_points(&self, name: &str, exact: bool) -> Result<u64> {
        let path = collection_path(name, "/points/count")?;
        let res: CountResult = self
            .call_with(Method::POST, &path, &CountPoints { exact })
            .await?;
        Ok(res.count)
    }

    /// Fetches points by id with payload and vector.
    pub async fn get_points(&self, name: &str, ids: &[PointId]) -> Result<Vec<PointRecord>> {
        let path = collection_path(name, "/points")?;
        let body = GetPoints {
            ids,
            with_payload: true,
            with_vector: true,
        };
        self.call_with(Method::POST, &path, &body).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "request");
        let req = self.http.request(method, url);
        match &self.api_key {
            Some(key) => req.header("api-key", key),
            None => req,
        }
    }

    async fn call_with<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(self.request(method, path).json(body)).await
    }

    async fn call<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        let body = self.execute(req).await?;
        let envelope: ApiResponse<T> = serde_json::from_slice(&body)?;
        Ok(envelope.result)
    }

    /// Sends the request and returns the raw body of a 2xx answer.
    async fn execute(&self, req: RequestBuilder) -> Result<Vec<u8>> {
        let resp = req.send().await.map_err(|e| self.classify(e))?;
        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| self.classify(e))?;
        debug!(status = status.as_u16(), bytes = body.len(), "response");

        if status.is_success() {
            return Ok(body.to_vec());
        }

        let message = match serde_json::from_slice::<ErrorResponse>(&body) {
            Ok(err) => err.status.error,
            Err(_) => String::from_utf8_lossy(&body).into_owned(),
        };
        if status == StatusCode::NOT_FOUND {
            Err(ClientError::NotFound(message))
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    fn classify(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout {
                url: self.base_url.clone(),
                timeout: self.timeout,
            }
        } else if err.is_connect() {
            ClientError::Connect {
                url: self.base_url.clone(),
                source: err,
            }
        } else {
            ClientError::Transport(err)
        }
    }
}

/// `/collections/{name}{suffix}`, refusing names that would leave the path segment.
fn collection_path(name: &str, suffix: &str) -> Result<String> {
    validate_name(name)?;
    Ok(format!("/collections/{name}{suffix}"))
}
