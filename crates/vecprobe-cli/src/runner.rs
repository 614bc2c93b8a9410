use crate::Reporter;
use std::io::{self, Write};
use tracing::{debug, error, info};
use vecprobe_core::{sample_points, CoreError, ProbeConfig};
use vecprobe_sdk::{Client, ClientConfig, ClientError};

pub type Result<T> = std::result::Result<T, RunError>;

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Cannot connect to vector database at {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: ClientError,
    },

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("server did not create collection '{0}'")]
    NotCreated(String),

    #[error("collection '{collection}' has {actual} points, expected {expected}")]
    CountMismatch {
        collection: String,
        expected: u64,
        actual: u64,
    },

    #[error("cannot write report: {0}")]
    Io(#[from] io::Error),
}

impl RunError {
    /// Failures past the liveness check that still come down to reachability.
    pub fn is_connection(&self) -> bool {
        matches!(self, RunError::Client(e) if e.is_connection())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Passed,
    Failed,
}

impl RunOutcome {
    pub fn exit_code(self) -> u8 {
        match self {
            RunOutcome::Passed => 0,
            RunOutcome::Failed => 1,
        }
    }
}

/// Runs the probe once, writing status lines to `out`.
///
/// Every failure ends up here: it is printed and turned into
/// [`RunOutcome::Failed`]. Nothing is retried.
pub async fn run<W: Write>(config: &ProbeConfig, out: W) -> RunOutcome {
    let mut report = Reporter::new(out);
    match steps(config, &mut report).await {
        Ok(count) => {
            info!(collection = %config.collection, count, "probe passed");
            RunOutcome::Passed
        }
        Err(err) => {
            error!(error = %err, "probe failed");
            let _ = report.failure(&err);
            RunOutcome::Failed
        }
    }
}

async fn steps<W: Write>(config: &ProbeConfig, report: &mut Reporter<W>) -> Result<u64> {
    let spec = config.collection_spec()?;
    let points = sample_points();
    spec.validate_batch(&points)?;

    let client = Client::connect(ClientConfig::from(config))?;

    let info = client
        .health_check()
        .await
        .map_err(|source| RunError::Unreachable {
            url: client.url().to_string(),
            source,
        })?;
    info!(url = client.url(), version = %info.version, "connected");
    report.ok(format_args!(
        "Connected to vector database at {} (version {})",
        client.url(),
        info.version
    ))?;

    // only a missing collection is tolerated here
    match client.delete_collection(spec.name()).await {
        Ok(true) => report.ok(format_args!(
            "Cleaned up existing collection '{}'",
            spec.name()
        ))?,
        Ok(false) => debug!(collection = spec.name(), "nothing to clean up"),
        Err(e) if e.is_not_found() => debug!(collection = spec.name(), "nothing to clean up"),
        Err(e) => return Err(e.into()),
    }

    if !client.create_collection(&spec).await? {
        return Err(RunError::NotCreated(spec.name().to_string()));
    }
    report.ok(format_args!(
        "Created collection '{}' (size {}, distance {})",
        spec.name(),
        spec.size(),
        spec.distance()
    ))?;

    let update = client.upsert_points(spec.name(), &points, true).await?;
    info!(points = points.len(), %update, "upserted");
    report.ok(format_args!("Inserted {} points: {update}", points.len()))?;

    let count = client.count_points(spec.name(), true).await?;
    report.ok(format_args!("Collection has {count} points"))?;

    let expected = points.len() as u64;
    if count != expected {
        return Err(RunError::CountMismatch {
            collection: spec.name().to_string(),
            expected,
            actual: count,
        });
    }

    report.passed()?;
    Ok(count)
}
