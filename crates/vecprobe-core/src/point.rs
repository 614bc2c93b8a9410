use crate::VectorElement;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type PointId = u64;

/// Vector size of the fixed sample batch.
pub const SAMPLE_DIMENSION: usize = 4;
pub type Payload = HashMap<String, String>;

/// A single point: integer id, dense vector and string payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub id: PointId,
    pub vector: Vec<VectorElement>,
    #[serde(default)]
    pub payload: Payload,
}

impl PointRecord {
    pub fn new(id: PointId, vector: Vec<VectorElement>, payload: Payload) -> Self {
        Self {
            id,
            vector,
            payload,
        }
    }

    /// Point with a single `city` payload entry.
    pub fn with_city(id: PointId, vector: [VectorElement; SAMPLE_DIMENSION], city: &str) -> Self {
        Self::new(
            id,
            vector.to_vec(),
            [("city".to_string(), city.to_string())].into(),
        )
    }
}

/// The fixed batch inserted by every run.
pub fn sample_points() -> Vec<PointRecord> {
    vec![
        PointRecord::with_city(1, [0.05, 0.61, 0.76, 0.74], "Berlin"),
        PointRecord::with_city(2, [0.19, 0.81, 0.75, 0.11], "London"),
        PointRecord::with_city(3, [0.36, 0.55, 0.47, 0.94], "Moscow"),
        PointRecord::with_city(4, [0.18, 0.01, 0.85, 0.80], "New York"),
        PointRecord::with_city(5, [0.24, 0.18, 0.22, 0.44], "Beijing"),
        PointRecord::with_city(6, [0.35, 0.08, 0.11, 0.44], "Mumbai"),
    ]
}
