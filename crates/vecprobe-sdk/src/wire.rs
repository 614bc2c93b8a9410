//! Request and response bodies of the REST API.

use serde::{Deserialize, Serialize};
use std::fmt;
use vecprobe_core::{Distance, PointId, PointRecord};

/// Success envelope: `{"result": ..., "status": "ok", "time": ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub result: T,
}

/// Error envelope: `{"status": {"error": "..."}, "time": ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub status: ErrorStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorStatus {
    pub error: String,
}

/// Answer of the root endpoint, used as the liveness probe.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStatus {
    Acknowledged,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateResult {
    pub operation_id: Option<u64>,
    pub status: UpdateStatus,
}

impl fmt::Display for UpdateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self.status {
            UpdateStatus::Acknowledged => "acknowledged",
            UpdateStatus::Completed => "completed",
        };
        match self.operation_id {
            Some(id) => write!(f, "operation_id={id} status={status}"),
            None => write!(f, "status={status}"),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateCollection {
    pub vectors: VectorParams,
}

#[derive(Debug, Serialize)]
pub(crate) struct VectorParams {
    pub size: usize,
    pub distance: Distance,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpsertPoints<'a> {
    pub points: &'a [PointRecord],
}

#[derive(Debug, Serialize)]
pub(crate) struct CountPoints {
    pub exact: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CountResult {
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetPoints<'a> {
    pub ids: &'a [PointId],
    pub with_payload: bool,
    pub with_vector: bool,
}
