use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Comparison semantics of a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterOperator {
    /// Field value is one of the selected values
    ContainsOneOf,
    /// Numeric field value lies within `from..=to`
    BetweenInclusive,
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::ContainsOneOf => "contains-one-of",
            FilterOperator::BetweenInclusive => "between-inclusive",
        }
    }
}

/// One checkbox entry of a `CheckboxList` widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Option whose label is the stored value itself
    pub fn same(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Rendering widget together with its parameters.
///
/// The operator is implied by the variant, so a checkbox list can never be
/// paired with a range comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum FilterWidget {
    CheckboxList { options: Vec<FilterOption> },
    RangeSlider { min: f64, max: f64 },
}

impl FilterWidget {
    pub fn operator(&self) -> FilterOperator {
        match self {
            FilterWidget::CheckboxList { .. } => FilterOperator::ContainsOneOf,
            FilterWidget::RangeSlider { .. } => FilterOperator::BetweenInclusive,
        }
    }

    pub fn component_name(&self) -> &'static str {
        match self {
            FilterWidget::CheckboxList { .. } => "CheckboxList",
            FilterWidget::RangeSlider { .. } => "RangeSlider",
        }
    }
}

/// Declarative description of one filterable dataset attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub field: String,
    pub label: String,
    pub widget: FilterWidget,
}

impl FilterConfig {
    pub fn checkbox_list(
        field: impl Into<String>,
        label: impl Into<String>,
        options: Vec<FilterOption>,
    ) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            widget: FilterWidget::CheckboxList { options },
        }
    }

    pub fn range_slider(
        field: impl Into<String>,
        label: impl Into<String>,
        min: f64,
        max: f64,
    ) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            widget: FilterWidget::RangeSlider { min, max },
        }
    }

    pub fn operator(&self) -> FilterOperator {
        self.widget.operator()
    }

    /// Bounds of a range widget, `None` for checkbox lists
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self.widget {
            FilterWidget::RangeSlider { min, max } => Some((min, max)),
            FilterWidget::CheckboxList { .. } => None,
        }
    }

    /// Label of an option value, falling back to the value itself
    pub fn option_label<'a>(&'a self, value: &'a str) -> &'a str {
        match &self.widget {
            FilterWidget::CheckboxList { options } => options
                .iter()
                .find(|o| o.value == value)
                .map(|o| o.label.as_str())
                .unwrap_or(value),
            FilterWidget::RangeSlider { .. } => value,
        }
    }
}

/// Problems found in a filter configuration list
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterConfigError {
    #[error("duplicate filter field: {0}")]
    DuplicateField(String),

    #[error("filter {0} has no options")]
    EmptyOptions(String),

    #[error("filter {field} has invalid bounds {min}..{max}")]
    InvalidBounds { field: String, min: f64, max: f64 },
}

/// Check field uniqueness and widget parameters.
///
/// Consumers render whatever they are given; this is only a sanity pass
/// over hand-written configuration.
pub fn validate_filter_configs(configs: &[FilterConfig]) -> Result<(), FilterConfigError> {
    let mut seen = HashSet::new();
    for config in configs {
        if !seen.insert(config.field.as_str()) {
            return Err(FilterConfigError::DuplicateField(config.field.clone()));
        }
        match &config.widget {
            FilterWidget::CheckboxList { options } if options.is_empty() => {
                return Err(FilterConfigError::EmptyOptions(config.field.clone()));
            }
            FilterWidget::RangeSlider { min, max }
                if !(min.is_finite() && max.is_finite() && min <= max) =>
            {
                return Err(FilterConfigError::InvalidBounds {
                    field: config.field.clone(),
                    min: *min,
                    max: *max,
                });
            }
            _ => {}
        }
    }
    Ok(())
}
