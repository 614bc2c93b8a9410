//! In-process stand-in for the vector database REST API.

#![allow(dead_code)]

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;
use vecprobe_core::ProbeConfig;

#[derive(Debug)]
pub struct FakeCollection {
    pub size: usize,
    pub distance: String,
    pub points: BTreeMap<u64, Value>,
}

/// Server state plus knobs the tests flip to inject failures.
#[derive(Debug)]
pub struct FakeState {
    pub collections: HashMap<String, FakeCollection>,
    /// create, delete and upsert calls that changed something
    pub mutations: usize,
    pub healthy: bool,
    /// answer deletes of unknown collections with 404 instead of `false`
    pub missing_as_404: bool,
    pub fail_delete: bool,
    /// acknowledge creates with `false` and store nothing
    pub create_returns_false: bool,
    /// upsert requests received, applied or not
    pub upserts: usize,
    pub count_override: Option<u64>,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            collections: HashMap::new(),
            mutations: 0,
            healthy: true,
            missing_as_404: false,
            fail_delete: false,
            create_returns_false: false,
            upserts: 0,
            count_override: None,
        }
    }
}

type Shared = Arc<Mutex<FakeState>>;

pub struct FakeServer {
    pub url: String,
    state: Shared,
}

impl FakeServer {
    pub async fn start() -> Self {
        let state: Shared = Arc::new(Mutex::new(FakeState::default()));
        let app = Router::new()
            .route("/", get(root))
            .route(
                "/collections/{name}",
                put(create_collection).delete(delete_collection),
            )
            .route("/collections/{name}/points", put(upsert).post(get_points))
            .route("/collections/{name}/points/count", post(count))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake server");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake server");
        });

        Self {
            url: format!("http://{addr}"),
            state,
        }
    }

    pub fn configure(&self, f: impl FnOnce(&mut FakeState)) {
        f(&mut self.state.lock());
    }

    pub fn mutations(&self) -> usize {
        self.state.lock().mutations
    }

    pub fn upserts(&self) -> usize {
        self.state.lock().upserts
    }

    pub fn point_count(&self, name: &str) -> Option<usize> {
        self.state.lock().collections.get(name).map(|c| c.points.len())
    }

    pub fn collection_shape(&self, name: &str) -> Option<(usize, String)> {
        self.state
            .lock()
            .collections
            .get(name)
            .map(|c| (c.size, c.distance.clone()))
    }

    pub fn config(&self) -> ProbeConfig {
        config_for(&self.url)
    }
}

pub fn config_for(url: &str) -> ProbeConfig {
    ProbeConfig {
        url: url.to_string(),
        timeout: Duration::from_secs(5),
        ..ProbeConfig::default()
    }
}

/// URL of a local port nobody listens on.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn ok(result: Value) -> Response {
    Json(json!({"result": result, "status": "ok", "time": 0.001})).into_response()
}

fn err(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"status": {"error": message}, "time": 0.001}))).into_response()
}

async fn root(State(state): State<Shared>) -> Response {
    if !state.lock().healthy {
        return err(StatusCode::SERVICE_UNAVAILABLE, "starting up");
    }
    Json(json!({"title": "fake vector search engine", "version": "1.9.0"})).into_response()
}

async fn delete_collection(State(state): State<Shared>, Path(name): Path<String>) -> Response {
    let mut st = state.lock();
    if st.fail_delete {
        return err(StatusCode::INTERNAL_SERVER_ERROR, "storage is read-only");
    }
    if st.collections.remove(&name).is_some() {
        st.mutations += 1;
        return ok(json!(true));
    }
    if st.missing_as_404 {
        return err(
            StatusCode::NOT_FOUND,
            &format!("Not found: Collection `{name}` doesn't exist!"),
        );
    }
    ok(json!(false))
}

async fn create_collection(
    State(state): State<Shared>,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut st = state.lock();
    if st.create_returns_false {
        return ok(json!(false));
    }
    if st.collections.contains_key(&name) {
        return err(
            StatusCode::CONFLICT,
            &format!("Wrong input: Collection `{name}` already exists!"),
        );
    }
    let (Some(size), Some(distance)) = (
        body["vectors"]["size"].as_u64(),
        body["vectors"]["distance"].as_str(),
    ) else {
        return err(StatusCode::BAD_REQUEST, "missing vectors config");
    };
    st.collections.insert(
        name,
        FakeCollection {
            size: size as usize,
            distance: distance.to_string(),
            points: BTreeMap::new(),
        },
    );
    st.mutations += 1;
    ok(json!(true))
}

async fn upsert(
    State(state): State<Shared>,
    Path(name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    let mut st = state.lock();
    st.upserts += 1;
    let Some(col) = st.collections.get_mut(&name) else {
        return err(
            StatusCode::NOT_FOUND,
            &format!("Not found: Collection `{name}` doesn't exist!"),
        );
    };
    let Some(points) = body["points"].as_array() else {
        return err(StatusCode::BAD_REQUEST, "missing points");
    };
    for point in points {
        let dim = point["vector"].as_array().map_or(0, Vec::len);
        if dim != col.size {
            return err(
                StatusCode::BAD_REQUEST,
                &format!("Wrong input: Vector dimension error: expected dim: {}, got {dim}", col.size),
            );
        }
    }
    for point in points {
        if let Some(id) = point["id"].as_u64() {
            col.points.insert(id, point.clone());
        }
    }
    st.mutations += 1;

    let status = if params.get("wait").map(String::as_str) == Some("true") {
        "completed"
    } else {
        "acknowledged"
    };
    let op = st.mutations;
    ok(json!({"operation_id": op, "status": status}))
}

async fn count(State(state): State<Shared>, Path(name): Path<String>) -> Response {
    let st = state.lock();
    let Some(col) = st.collections.get(&name) else {
        return err(StatusCode::NOT_FOUND, "collection not found");
    };
    let count = st.count_override.unwrap_or(col.points.len() as u64);
    ok(json!({"count": count}))
}

async fn get_points(
    State(state): State<Shared>,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let st = state.lock();
    let Some(col) = st.collections.get(&name) else {
        return err(StatusCode::NOT_FOUND, "collection not found");
    };
    let found: Vec<Value> = body["ids"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(Value::as_u64)
        .filter_map(|id| col.points.get(&id).cloned())
        .collect();
    ok(Value::Array(found))
}
