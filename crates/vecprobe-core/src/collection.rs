use crate::{CoreError, PointRecord, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Similarity function the service uses to compare vectors.
///
/// Serialized with the names the REST API expects (`"Dot"`, `"Cosine"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Distance {
    Cosine,
    Euclid,
    Dot,
    Manhattan,
}

impl Distance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Distance::Cosine => "Cosine",
            Distance::Euclid => "Euclid",
            Distance::Dot => "Dot",
            Distance::Manhattan => "Manhattan",
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collection names end up as a URL path segment, so anything that could
/// change the request target (`/`, `?`, `#`, `%`, whitespace, ...) is refused.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CoreError::EmptyName);
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-';
    if !name.chars().all(allowed) {
        return Err(CoreError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Name and vector configuration of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSpec {
    name: String,
    size: usize,
    distance: Distance,
}

impl CollectionSpec {
    pub fn new(name: impl Into<String>, size: usize, distance: Distance) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        if size == 0 {
            return Err(CoreError::ZeroDimension);
        }
        Ok(Self {
            name,
            size,
            distance,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Checks a batch before it is sent: every vector must match the
    /// collection size and ids must be unique, otherwise the stored count
    /// would not equal the batch length.
    pub fn validate_batch(&self, points: &[PointRecord]) -> Result<()> {
        let mut seen = HashSet::with_capacity(points.len());
        for point in points {
            if point.vector.len() != self.size {
                return Err(CoreError::DimensionMismatch {
                    id: point.id,
                    expected: self.size,
                    actual: point.vector.len(),
                });
            }
            if !seen.insert(point.id) {
                return Err(CoreError::DuplicateId(point.id));
            }
        }
        Ok(())
    }
}
