use std::collections::BTreeMap;
use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::indicator::IndicatorValue;

/// TopoJSON property key carrying the two-letter region code.
pub const CODE_PROPERTY: &str = "postal";
/// TopoJSON property key carrying the region display name.
pub const NAME_PROPERTY: &str = "name";

/// Opaque handle to one feature in the rendering layer's geometry
/// collection. The engine never looks inside the geometry; it only carries
/// the index so the drawing surface can find its polygon again.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct GeometryHandle(pub usize);

/// Joined entity combining geometry and indicator values for one region.
///
/// Created once per load cycle from the geometry collection; the join
/// attaches attribute values in place. `code` is unique across records.
#[derive(Debug, PartialEq, Clone)]
pub struct RegionRecord {
    pub code: String,
    pub name: String,
    pub geometry: GeometryHandle,
    pub values: BTreeMap<String, IndicatorValue>,
}

impl RegionRecord {
    pub fn new(code: &str, name: &str, geometry: GeometryHandle) -> Self {
        RegionRecord {
            code: code.to_string(),
            name: name.to_string(),
            geometry,
            values: BTreeMap::new(),
        }
    }

    /// The region's value for an attribute. Absent entries read as `NoData`.
    pub fn value(&self, attribute: &str) -> IndicatorValue {
        self.values
            .get(attribute)
            .copied()
            .unwrap_or(IndicatorValue::NoData)
    }
}

/// Errors from reading region records out of a TopoJSON text.
#[derive(Debug)]
pub enum RegionSourceError {
    Parse(serde_json::Error),
    MissingObject(String),
}

impl fmt::Display for RegionSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionSourceError::Parse(e) => write!(f, "geometry parse error: {}", e),
            RegionSourceError::MissingObject(key) => {
                write!(f, "geometry object {} not found", key)
            }
        }
    }
}

impl std::error::Error for RegionSourceError {}

impl From<serde_json::Error> for RegionSourceError {
    fn from(e: serde_json::Error) -> Self {
        RegionSourceError::Parse(e)
    }
}

/// Extract one region record per named feature from a TopoJSON text.
///
/// Only the `postal`/`name` properties and the feature index are read; the
/// polygon data stays with the rendering layer. Features without a code
/// property, and features repeating an already-seen code, are skipped so
/// that codes stay unique.
pub fn regions_from_topojson(
    topojson: &str,
    object_key: &str,
) -> Result<Vec<RegionRecord>, RegionSourceError> {
    let root: serde_json::Value = serde_json::from_str(topojson)?;
    let geometries = root
        .get("objects")
        .and_then(|objects| objects.get(object_key))
        .and_then(|object| object.get("geometries"))
        .and_then(|geometries| geometries.as_array())
        .ok_or_else(|| RegionSourceError::MissingObject(object_key.to_string()))?;

    let mut regions: Vec<RegionRecord> = Vec::with_capacity(geometries.len());
    for (index, geometry) in geometries.iter().enumerate() {
        let properties = geometry.get("properties");
        let code = properties
            .and_then(|p| p.get(CODE_PROPERTY))
            .and_then(|c| c.as_str())
            .map(str::trim)
            .unwrap_or("");
        if code.is_empty() {
            warn!("feature {} has no {} property, skipped", index, CODE_PROPERTY);
            continue;
        }
        if regions.iter().any(|r| r.code == code) {
            warn!("feature {} repeats region code {}, skipped", index, code);
            continue;
        }
        let name = properties
            .and_then(|p| p.get(NAME_PROPERTY))
            .and_then(|n| n.as_str())
            .unwrap_or(code);
        regions.push(RegionRecord::new(code, name, GeometryHandle(index)));
    }
    Ok(regions)
}
