//! Explore Data page: filters panel, catalog table and preview side by side.

pub mod data_view;
pub mod data_view_header;
pub mod filter_configs;
pub mod filters_panel;
pub mod layout;
pub mod preview_panel;
pub mod state;

use crate::shared::components::page_header::PageHeader;
use data_view::DataView;
use data_view_header::DataViewHeader;
use filter_configs::explorer_filter_configs;
use filters_panel::FiltersPanel;
use layout::LayoutSlot;
use leptos::prelude::*;
use preview_panel::PreviewPanel;
use state::ExplorerPage;

pub const PAGE_TITLE: &str = "Explore Data App";
pub const PAGE_DESCRIPTION: &str = "Exploring mult-dimensional 4DStem, EELS, and CL datasets";

#[component]
pub fn DataExplorer() -> impl IntoView {
    let page = ExplorerPage::new();
    let filters = page.filters;
    let layout = page.layout();
    let configs = Signal::derive(|| explorer_filter_configs().to_vec());
    let search_term = page.search_term();

    let has_slot = move |slot: LayoutSlot| layout.with(|l| l.has(slot));

    view! {
        <div class="explorer">
            <PageHeader title=PAGE_TITLE description=PAGE_DESCRIPTION />
            <div class="explorer__body" style="display: flex; gap: 16px; align-items: stretch;">
                <Show when=move || has_slot(LayoutSlot::FiltersPanel)>
                    <div
                        class=LayoutSlot::FiltersPanel.class()
                        style=LayoutSlot::FiltersPanel.style()
                    >
                        <FiltersPanel
                            configs=configs
                            filters=filters
                            on_close=page.on_close_filters()
                        />
                    </div>
                </Show>
                <div
                    class=LayoutSlot::DataSurface.class()
                    style=LayoutSlot::DataSurface.style()
                >
                    <DataViewHeader
                        search_term=search_term
                        on_search=page.on_search()
                        on_toggle_filters=page.on_toggle_filters()
                        filters_visible=Signal::derive(move || {
                            has_slot(LayoutSlot::FiltersPanel)
                        })
                        active_filter_count=Signal::derive(move || filters.active_count())
                    />
                    <DataView
                        configs=configs
                        filters=filters
                        search_term=search_term
                        on_preview=page.on_preview()
                    />
                </div>
                <Show when=move || has_slot(LayoutSlot::Preview)>
                    <div class=LayoutSlot::Preview.class() style=LayoutSlot::Preview.style()>
                        <PreviewPanel
                            item=page.preview_item()
                            on_close=page.on_close_preview()
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}
