//! Reactive handle over the selected filter values of one page.
//!
//! The handle is created by the page and passed down explicitly, so every
//! consumer on the page mutates the same [`FilterState`].
use contracts::shared::filters::{FilterConfig, FilterState};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct FilterContext {
    state: RwSignal<FilterState>,
}

impl FilterContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FilterState::new()),
        }
    }

    /// Current values, tracked
    pub fn snapshot(&self) -> FilterState {
        self.state.get()
    }

    pub fn toggle_option(&self, field: &str, value: &str) {
        self.state.update(|s| s.toggle_option(field, value));
    }

    pub fn set_range(&self, config: &FilterConfig, from: f64, to: f64) {
        self.state.update(|s| s.set_range_within(config, from, to));
    }

    pub fn clear_field(&self, field: &str) {
        self.state.update(|s| s.clear_field(field));
    }

    pub fn clear_all(&self) {
        self.state.update(|s| s.clear_all());
    }

    pub fn is_selected(&self, field: &str, value: &str) -> bool {
        self.state.with(|s| s.is_selected(field, value))
    }

    pub fn range_for(&self, field: &str) -> Option<(f64, f64)> {
        self.state.with(|s| s.range_for(field))
    }

    pub fn active_count(&self) -> usize {
        self.state.with(|s| s.active_count())
    }
}

impl Default for FilterContext {
    fn default() -> Self {
        Self::new()
    }
}
