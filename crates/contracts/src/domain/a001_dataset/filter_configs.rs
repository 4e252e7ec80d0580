//! Filterable attributes of the imaging catalog.
//!
//! Both the filters panel and the catalog query read this list, so a field
//! key here must match a key understood by `Dataset::field_value`.

use crate::shared::filters::{FilterConfig, FilterOption};

pub const MEASUREMENT_TYPES: &[&str] = &[
    "4D-STEM",
    "4D-STEM/CBED",
    "EDS Hyperspectral Map",
    "EELS Hyperspectral",
    "CL Point Spectra",
    "CL Hyperspectral",
    "HAADF",
    "ADF",
    "TEM",
    "Diffraction",
];

pub const DETECTORS: &[&str] = &[
    "EMPAD",
    "Ultra-X EDS",
    "Continuum K3-IS",
    "Ceta-S CMOS",
    "Attolight CL Mirror",
];

/// Filter definitions in display order
pub fn filter_configs() -> Vec<FilterConfig> {
    vec![
        FilterConfig::checkbox_list(
            "measurement_type",
            "Measurement Type",
            MEASUREMENT_TYPES.iter().map(|v| FilterOption::same(*v)).collect(),
        ),
        FilterConfig::checkbox_list(
            "detector",
            "Detector",
            DETECTORS.iter().map(|v| FilterOption::same(*v)).collect(),
        ),
        FilterConfig::range_slider("voltage_kv", "Voltage (kV)", 0.0, 300.0),
        FilterConfig::range_slider("file_size_mb", "File Size (MB)", 0.0, 2500.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_dataset::aggregate::sample_dataset;
    use crate::shared::filters::{validate_filter_configs, FilterOperator};

    #[test]
    fn test_shipped_configs_are_valid() {
        assert_eq!(validate_filter_configs(&filter_configs()), Ok(()));
    }

    #[test]
    fn test_order_and_operators() {
        let configs = filter_configs();
        let fields: Vec<&str> = configs.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["measurement_type", "detector", "voltage_kv", "file_size_mb"]
        );
        assert_eq!(configs[0].operator(), FilterOperator::ContainsOneOf);
        assert_eq!(configs[3].operator(), FilterOperator::BetweenInclusive);
        assert_eq!(configs[3].bounds(), Some((0.0, 2500.0)));
    }

    #[test]
    fn test_every_field_resolves_on_dataset() {
        let ds = sample_dataset("x", "TEM", "EMPAD", 200.0, 10.0);
        for config in filter_configs() {
            assert!(
                ds.field_value(&config.field).is_some(),
                "field {} is not a dataset attribute",
                config.field
            );
        }
    }
}
