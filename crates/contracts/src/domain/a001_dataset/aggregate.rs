use crate::domain::common::{AggregateId, EntityMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a catalog dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetId(pub Uuid);

impl DatasetId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for DatasetId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(DatasetId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Field values
// ============================================================================

/// Value of a dataset attribute looked up by field key
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

// ============================================================================
// Aggregate
// ============================================================================

/// One acquisition in the imaging catalog (4D-STEM scan, EELS map, CL spectra...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: DatasetId,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub measurement_type: String,
    pub detector: String,
    pub voltage_kv: f64,
    pub file_size_mb: f64,
    #[serde(default)]
    pub sample: String,
    #[serde(default)]
    pub acquired_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub file_path: String,
    #[serde(default)]
    pub metadata: EntityMetadata,
}

/// Payload for creating a dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetDto {
    pub code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub measurement_type: String,
    pub detector: String,
    pub voltage_kv: f64,
    pub file_size_mb: f64,
    #[serde(default)]
    pub sample: String,
    #[serde(default)]
    pub acquired_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub file_path: String,
}

impl Dataset {
    pub fn new_for_insert(dto: DatasetDto) -> Self {
        let id = DatasetId::new_v4();
        let code = dto
            .code
            .unwrap_or_else(|| format!("DS-{}", &id.as_string()[..8]));
        Self {
            id,
            code,
            name: dto.name,
            description: dto.description,
            measurement_type: dto.measurement_type,
            detector: dto.detector,
            voltage_kv: dto.voltage_kv,
            file_size_mb: dto.file_size_mb,
            sample: dto.sample,
            acquired_at: dto.acquired_at,
            file_path: dto.file_path,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Dataset name must not be empty".into());
        }
        if !self.voltage_kv.is_finite() || self.voltage_kv < 0.0 {
            return Err(format!("Invalid voltage: {}", self.voltage_kv));
        }
        if !self.file_size_mb.is_finite() || self.file_size_mb < 0.0 {
            return Err(format!("Invalid file size: {}", self.file_size_mb));
        }
        Ok(())
    }

    /// Attribute lookup by filter field key. Unknown keys yield `None`.
    pub fn field_value(&self, field: &str) -> Option<FieldValue> {
        let text = |s: &str| Some(FieldValue::Text(s.to_string()));
        match field {
            "code" => text(&self.code),
            "name" => text(&self.name),
            "description" => text(&self.description),
            "measurement_type" => text(&self.measurement_type),
            "detector" => text(&self.detector),
            "sample" => text(&self.sample),
            "file_path" => text(&self.file_path),
            "voltage_kv" => Some(FieldValue::Number(self.voltage_kv)),
            "file_size_mb" => Some(FieldValue::Number(self.file_size_mb)),
            "acquired_at" => self
                .acquired_at
                .map(|d| FieldValue::Text(d.to_rfc3339())),
            _ => None,
        }
    }

    /// Case-insensitive free-text match. A blank term matches every record.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [
            &self.code,
            &self.name,
            &self.description,
            &self.measurement_type,
            &self.detector,
            &self.sample,
        ]
        .iter()
        .any(|s| s.to_lowercase().contains(&term))
    }

    pub fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match (self.field_value(field), other.field_value(field)) {
            (Some(FieldValue::Number(a)), Some(FieldValue::Number(b))) => {
                a.partial_cmp(&b).unwrap_or(Ordering::Equal)
            }
            (Some(FieldValue::Text(a)), Some(FieldValue::Text(b))) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_dataset(
    name: &str,
    measurement_type: &str,
    detector: &str,
    voltage_kv: f64,
    file_size_mb: f64,
) -> Dataset {
    Dataset::new_for_insert(DatasetDto {
        code: None,
        name: name.to_string(),
        description: String::new(),
        measurement_type: measurement_type.to_string(),
        detector: detector.to_string(),
        voltage_kv,
        file_size_mb,
        sample: "MoS2 flake".to_string(),
        acquired_at: None,
        file_path: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_lookup() {
        let ds = sample_dataset("Scan 1", "4D-STEM", "EMPAD", 300.0, 1024.0);
        assert_eq!(
            ds.field_value("measurement_type"),
            Some(FieldValue::Text("4D-STEM".into()))
        );
        assert_eq!(ds.field_value("voltage_kv"), Some(FieldValue::Number(300.0)));
        assert_eq!(ds.field_value("acquired_at"), None);
        assert_eq!(ds.field_value("no_such_field"), None);
    }

    #[test]
    fn test_matches_search() {
        let ds = sample_dataset(
            "Graphene EELS map",
            "EELS Hyperspectral",
            "Continuum K3-IS",
            80.0,
            512.0,
        );
        assert!(ds.matches_search(""));
        assert!(ds.matches_search("   "));
        assert!(ds.matches_search("graphene"));
        assert!(ds.matches_search("  k3-is "));
        assert!(ds.matches_search("mos2"));
        assert!(!ds.matches_search("haadf"));
    }

    #[test]
    fn test_compare_by_field() {
        let a = sample_dataset("alpha", "ADF", "EMPAD", 60.0, 10.0);
        let b = sample_dataset("Beta", "TEM", "EMPAD", 200.0, 5.0);
        assert_eq!(a.compare_by_field(&b, "voltage_kv"), Ordering::Less);
        assert_eq!(a.compare_by_field(&b, "file_size_mb"), Ordering::Greater);
        assert_eq!(a.compare_by_field(&b, "name"), Ordering::Less);
        assert_eq!(a.compare_by_field(&b, "unknown"), Ordering::Equal);
    }

    #[test]
    fn test_validate() {
        let mut ds = sample_dataset("ok", "TEM", "Ceta-S CMOS", 200.0, 1.0);
        assert!(ds.validate().is_ok());
        ds.voltage_kv = -1.0;
        assert!(ds.validate().is_err());
        ds.voltage_kv = 200.0;
        ds.name = "  ".into();
        assert!(ds.validate().is_err());
    }

    #[test]
    fn test_generated_code_prefix() {
        let ds = sample_dataset("x", "TEM", "EMPAD", 1.0, 1.0);
        assert!(ds.code.starts_with("DS-"));
        assert_eq!(ds.code.len(), 11);
    }
}
