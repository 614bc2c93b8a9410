pub mod collection;
pub mod config;
pub mod error;
pub mod point;

pub use collection::{validate_name, CollectionSpec, Distance};
pub use config::ProbeConfig;
pub use error::{CoreError, Result};
pub use point::{sample_points, Payload, PointId, PointRecord, SAMPLE_DIMENSION};

/// Element type of every vector sent to the service.
pub type VectorElement = f32;
