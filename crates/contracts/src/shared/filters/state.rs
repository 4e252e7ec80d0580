use super::config::{FilterConfig, FilterOperator};
use crate::domain::a001_dataset::aggregate::{Dataset, FieldValue};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Constraint currently applied to one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterValue {
    OneOf { values: BTreeSet<String> },
    Between { from: f64, to: f64 },
}

impl FilterValue {
    pub fn operator(&self) -> FilterOperator {
        match self {
            FilterValue::OneOf { .. } => FilterOperator::ContainsOneOf,
            FilterValue::Between { .. } => FilterOperator::BetweenInclusive,
        }
    }

    pub fn matches(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (FilterValue::OneOf { values }, FieldValue::Text(text)) => values.contains(text),
            (FilterValue::Between { from, to }, FieldValue::Number(n)) => *from <= *n && *n <= *to,
            _ => false,
        }
    }

    /// Short human-readable form for filter chips
    pub fn display_text(&self, config: &FilterConfig) -> String {
        match self {
            FilterValue::OneOf { values } => {
                let labels: Vec<&str> = values.iter().map(|v| config.option_label(v)).collect();
                if labels.len() <= 3 {
                    format!("{}: {}", config.label, labels.join(", "))
                } else {
                    format!("{}: {} selected", config.label, labels.len())
                }
            }
            FilterValue::Between { from, to } => {
                format!("{}: {} – {}", config.label, from, to)
            }
        }
    }
}

/// Selected filter values keyed by field.
///
/// A field without an entry is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub values: BTreeMap<String, FilterValue>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to the selection of `field`, or remove it if present.
    /// Removing the last value drops the constraint.
    pub fn toggle_option(&mut self, field: &str, value: &str) {
        if let Some(FilterValue::OneOf { values }) = self.values.get_mut(field) {
            if !values.remove(value) {
                values.insert(value.to_string());
            }
            if values.is_empty() {
                self.values.remove(field);
            }
            return;
        }

        let mut values = BTreeSet::new();
        values.insert(value.to_string());
        self.values
            .insert(field.to_string(), FilterValue::OneOf { values });
    }

    /// Store an inclusive range; reversed bounds are swapped.
    pub fn set_range(&mut self, field: &str, from: f64, to: f64) {
        let (from, to) = if from <= to { (from, to) } else { (to, from) };
        self.values
            .insert(field.to_string(), FilterValue::Between { from, to });
    }

    /// Like `set_range`, but a range covering the full widget bounds
    /// removes the constraint instead.
    pub fn set_range_within(&mut self, config: &FilterConfig, from: f64, to: f64) {
        match config.bounds() {
            Some((min, max)) if from.min(to) <= min && from.max(to) >= max => {
                self.clear_field(&config.field);
            }
            _ => self.set_range(&config.field, from, to),
        }
    }

    pub fn clear_field(&mut self, field: &str) {
        self.values.remove(field);
    }

    pub fn clear_all(&mut self) {
        self.values.clear();
    }

    pub fn is_selected(&self, field: &str, value: &str) -> bool {
        matches!(
            self.values.get(field),
            Some(FilterValue::OneOf { values }) if values.contains(value)
        )
    }

    pub fn range_for(&self, field: &str) -> Option<(f64, f64)> {
        match self.values.get(field) {
            Some(FilterValue::Between { from, to }) => Some((*from, *to)),
            _ => None,
        }
    }

    /// Number of constrained fields
    pub fn active_count(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Conjunction of every constraint whose field is configured.
    /// Constraints on fields missing from `configs` are ignored.
    pub fn matches(&self, record: &Dataset, configs: &[FilterConfig]) -> bool {
        self.values.iter().all(|(field, constraint)| {
            let configured = configs
                .iter()
                .any(|c| &c.field == field && c.operator() == constraint.operator());
            if !configured {
                return true;
            }
            record
                .field_value(field)
                .map(|v| constraint.matches(&v))
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_dataset::aggregate::sample_dataset;
    use crate::domain::a001_dataset::filter_configs;

    #[test]
    fn test_toggle_option_adds_and_removes() {
        let mut state = FilterState::new();
        state.toggle_option("detector", "EMPAD");
        state.toggle_option("detector", "Ultra-X EDS");
        assert!(state.is_selected("detector", "EMPAD"));
        assert_eq!(state.active_count(), 1);

        state.toggle_option("detector", "EMPAD");
        assert!(!state.is_selected("detector", "EMPAD"));
        state.toggle_option("detector", "Ultra-X EDS");
        assert!(state.is_empty());
    }

    #[test]
    fn test_set_range_normalizes() {
        let mut state = FilterState::new();
        state.set_range("voltage_kv", 200.0, 60.0);
        assert_eq!(state.range_for("voltage_kv"), Some((60.0, 200.0)));
    }

    #[test]
    fn test_full_range_clears_constraint() {
        let configs = filter_configs();
        let voltage = configs.iter().find(|c| c.field == "voltage_kv").unwrap();
        let mut state = FilterState::new();
        state.set_range_within(voltage, 60.0, 300.0);
        assert_eq!(state.active_count(), 1);
        state.set_range_within(voltage, 0.0, 300.0);
        assert!(state.is_empty());
    }

    #[test]
    fn test_matches_contains_one_of() {
        let configs = filter_configs();
        let empad = sample_dataset("a", "4D-STEM", "EMPAD", 300.0, 800.0);
        let k3 = sample_dataset("b", "EELS Hyperspectral", "Continuum K3-IS", 60.0, 200.0);

        let mut state = FilterState::new();
        assert!(state.matches(&empad, &configs));

        state.toggle_option("detector", "EMPAD");
        assert!(state.matches(&empad, &configs));
        assert!(!state.matches(&k3, &configs));

        state.toggle_option("detector", "Continuum K3-IS");
        assert!(state.matches(&k3, &configs));
    }

    #[test]
    fn test_matches_between_inclusive_bounds() {
        let configs = filter_configs();
        let mut state = FilterState::new();
        state.set_range("voltage_kv", 60.0, 200.0);

        let low = sample_dataset("low", "TEM", "Ceta-S CMOS", 60.0, 1.0);
        let high = sample_dataset("high", "TEM", "Ceta-S CMOS", 200.0, 1.0);
        let outside = sample_dataset("out", "TEM", "Ceta-S CMOS", 300.0, 1.0);
        assert!(state.matches(&low, &configs));
        assert!(state.matches(&high, &configs));
        assert!(!state.matches(&outside, &configs));
    }

    #[test]
    fn test_matches_is_conjunction() {
        let configs = filter_configs();
        let mut state = FilterState::new();
        state.toggle_option("measurement_type", "HAADF");
        state.set_range("file_size_mb", 0.0, 100.0);

        let small = sample_dataset("s", "HAADF", "EMPAD", 300.0, 50.0);
        let large = sample_dataset("l", "HAADF", "EMPAD", 300.0, 500.0);
        assert!(state.matches(&small, &configs));
        assert!(!state.matches(&large, &configs));
    }

    #[test]
    fn test_unconfigured_constraint_ignored() {
        let mut state = FilterState::new();
        state.toggle_option("sample", "nothing");
        let ds = sample_dataset("x", "TEM", "EMPAD", 1.0, 1.0);
        assert!(state.matches(&ds, &filter_configs()));
    }

    #[test]
    fn test_display_text() {
        let configs = filter_configs();
        let detector = configs.iter().find(|c| c.field == "detector").unwrap();
        let mut state = FilterState::new();
        state.toggle_option("detector", "EMPAD");
        let text = state.values["detector"].display_text(detector);
        assert_eq!(text, "Detector: EMPAD");
    }
}
