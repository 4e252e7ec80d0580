use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Search box and filters-panel toggle above the data table
#[component]
pub fn DataViewHeader(
    #[prop(into)]
    search_term: Signal<String>,
    on_search: Callback<String>,
    on_toggle_filters: Callback<()>,
    #[prop(into)]
    filters_visible: Signal<bool>,
    #[prop(into)]
    active_filter_count: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="data-view-header">
            <Input
                value=search_term
                on_input=on_search
                placeholder="Search datasets..."
                leading_icon="search"
                class="data-view-header__search"
            />
            <Button
                variant="secondary"
                active=filters_visible
                title="Show or hide filters"
                on_click=Callback::new(move |_| on_toggle_filters.run(()))
            >
                {icon("filter")}
                <span>"Filters"</span>
                <Show when=move || { active_filter_count.get() > 0 }>
                    <span class="badge badge--primary">{move || active_filter_count.get()}</span>
                </Show>
            </Button>
        </div>
    }
}
