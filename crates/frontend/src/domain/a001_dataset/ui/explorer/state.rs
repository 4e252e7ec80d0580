use super::layout::{compose_layout, PageLayout};
use crate::shared::filter_context::FilterContext;
use contracts::domain::a001_dataset::aggregate::Dataset;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelVisibility {
    Visible,
    Hidden,
}

impl PanelVisibility {
    pub fn flipped(self) -> Self {
        match self {
            PanelVisibility::Visible => PanelVisibility::Hidden,
            PanelVisibility::Hidden => PanelVisibility::Visible,
        }
    }

    pub fn is_visible(self) -> bool {
        self == PanelVisibility::Visible
    }
}

/// Local UI state of the explorer page; lives as long as the page is mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerState<T> {
    pub search_term: String,
    pub preview_item: Option<T>,
    pub filters_panel: PanelVisibility,
}

impl<T> Default for ExplorerState<T> {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            preview_item: None,
            filters_panel: PanelVisibility::Visible,
        }
    }
}

impl<T> ExplorerState<T> {
    /// Stored as typed, without trimming
    pub fn set_search_term(&mut self, value: String) {
        self.search_term = value;
    }

    pub fn open_filters_panel(&mut self) {
        self.filters_panel = PanelVisibility::Visible;
    }

    pub fn close_filters_panel(&mut self) {
        self.filters_panel = PanelVisibility::Hidden;
    }

    pub fn toggle_filters_panel(&mut self) {
        self.filters_panel = self.filters_panel.flipped();
    }

    pub fn show_filters_panel(&self) -> bool {
        self.filters_panel.is_visible()
    }

    pub fn set_preview_item(&mut self, item: T) {
        self.preview_item = Some(item);
    }

    pub fn close_preview(&mut self) {
        self.preview_item = None;
    }

    pub fn layout(&self) -> PageLayout {
        compose_layout(self.show_filters_panel(), self.preview_item.is_some())
    }
}

/// Reactive page state: one signal per mounted page plus the filter handle
/// shared by the filters panel and the data view.
#[derive(Clone, Copy)]
pub struct ExplorerPage {
    state: RwSignal<ExplorerState<Dataset>>,
    pub filters: FilterContext,
}

impl ExplorerPage {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ExplorerState::default()),
            filters: FilterContext::new(),
        }
    }

    pub fn search_term(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.search_term.clone()))
    }

    pub fn preview_item(&self) -> Signal<Option<Dataset>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.preview_item.clone()))
    }

    pub fn layout(&self) -> Memo<PageLayout> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.layout()))
    }

    pub fn on_search(&self) -> Callback<String> {
        let state = self.state;
        Callback::new(move |value: String| state.update(|s| s.set_search_term(value)))
    }

    pub fn on_toggle_filters(&self) -> Callback<()> {
        let state = self.state;
        Callback::new(move |_| state.update(|s| s.toggle_filters_panel()))
    }

    pub fn on_close_filters(&self) -> Callback<()> {
        let state = self.state;
        Callback::new(move |_| state.update(|s| s.close_filters_panel()))
    }

    pub fn on_preview(&self) -> Callback<Dataset> {
        let state = self.state;
        Callback::new(move |item: Dataset| state.update(|s| s.set_preview_item(item)))
    }

    pub fn on_close_preview(&self) -> Callback<()> {
        let state = self.state;
        Callback::new(move |_| state.update(|s| s.close_preview()))
    }
}

impl Default for ExplorerPage {
    fn default() -> Self {
        Self::new()
    }
}
