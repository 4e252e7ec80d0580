use crate::shared::components::filter_tag::FilterTag;
use crate::shared::components::ui::{Button, Checkbox};
use crate::shared::filter_context::FilterContext;
use crate::shared::icons::icon;
use contracts::shared::filters::{FilterConfig, FilterOption, FilterWidget};
use leptos::ev::Event;
use leptos::prelude::*;

/// Keep a dragged handle inside the widget bounds and on its side of the
/// other handle.
fn clamp_handle(value: f64, min: f64, max: f64, other: f64, is_from: bool) -> f64 {
    let value = value.clamp(min, max);
    if is_from {
        value.min(other)
    } else {
        value.max(other)
    }
}

#[component]
fn CheckboxListFilter(
    field: String,
    options: Vec<FilterOption>,
    filters: FilterContext,
) -> impl IntoView {
    view! {
        <div class="filter-section__options">
            {options.into_iter().map(|option| {
                let id = format!("filter-{}-{}", field, option.value);
                let field_for_checked = field.clone();
                let field_for_change = field.clone();
                let value_for_checked = option.value.clone();
                let value_for_change = option.value.clone();
                view! {
                    <Checkbox
                        id=id
                        label=option.label
                        checked=Signal::derive(move || {
                            filters.is_selected(&field_for_checked, &value_for_checked)
                        })
                        on_change=Callback::new(move |_checked: bool| {
                            filters.toggle_option(&field_for_change, &value_for_change)
                        })
                    />
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn RangeSliderFilter(
    config: FilterConfig,
    min: f64,
    max: f64,
    filters: FilterContext,
) -> impl IntoView {
    let field = StoredValue::new(config.field.clone());
    let config = StoredValue::new(config);
    let current = move || field.with_value(|f| filters.range_for(f)).unwrap_or((min, max));

    let on_from = move |ev: Event| {
        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
            let (_, to) = current();
            let from = clamp_handle(value, min, max, to, true);
            config.with_value(|c| filters.set_range(c, from, to));
        }
    };
    let on_to = move |ev: Event| {
        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
            let (from, _) = current();
            let to = clamp_handle(value, min, max, from, false);
            config.with_value(|c| filters.set_range(c, from, to));
        }
    };

    view! {
        <div class="filter-section__range">
            <div class="filter-section__range-values">
                <span>{move || current().0}</span>
                <span>" – "</span>
                <span>{move || current().1}</span>
            </div>
            <input
                type="range"
                class="filter-section__slider"
                aria-label="From"
                min=min.to_string()
                max=max.to_string()
                step="1"
                prop:value=move || current().0.to_string()
                on:input=on_from
            />
            <input
                type="range"
                class="filter-section__slider"
                aria-label="To"
                min=min.to_string()
                max=max.to_string()
                step="1"
                prop:value=move || current().1.to_string()
                on:input=on_to
            />
        </div>
    }
}

/// One section per configured filter, active filter chips and reset
#[component]
pub fn FiltersPanel(
    #[prop(into)]
    configs: Signal<Vec<FilterConfig>>,
    filters: FilterContext,
    on_close: Callback<()>,
) -> impl IntoView {
    let active_tags = move || {
        let state = filters.snapshot();
        configs
            .get()
            .into_iter()
            .filter_map(|config| {
                state.values.get(&config.field).map(|value| {
                    let label = value.display_text(&config);
                    let field = config.field.clone();
                    view! {
                        <FilterTag
                            label=label
                            on_remove=Callback::new(move |_| filters.clear_field(&field))
                        />
                    }
                })
            })
            .collect_view()
    };

    view! {
        <aside class="filters-panel">
            <div class="filters-panel__header">
                {icon("filter")}
                <span class="filters-panel__title">"Filters"</span>
                <button
                    class="filters-panel__close"
                    title="Hide filters"
                    on:click=move |_| on_close.run(())
                >
                    {icon("x")}
                </button>
            </div>

            <Show when=move || { filters.active_count() > 0 }>
                <div class="filters-panel__tags">
                    {active_tags}
                </div>
                <Button
                    variant="ghost"
                    on_click=Callback::new(move |_| filters.clear_all())
                >
                    "Reset all"
                </Button>
            </Show>

            <For
                each=move || configs.get()
                key=|config| config.field.clone()
                children=move |config| {
                    let field = config.field.clone();
                    let field_for_active = config.field.clone();
                    let operator = config.operator().as_str();
                    let widget = config.widget.component_name();
                    let body = match config.widget.clone() {
                        FilterWidget::CheckboxList { options } => view! {
                            <CheckboxListFilter field=field.clone() options=options filters=filters />
                        }.into_any(),
                        FilterWidget::RangeSlider { min, max } => view! {
                            <RangeSliderFilter config=config.clone() min=min max=max filters=filters />
                        }.into_any(),
                    };
                    view! {
                        <section class="filter-section" data-operator=operator data-widget=widget>
                            <div class="filter-section__header">
                                <span class="filter-section__label">{config.label.clone()}</span>
                                <Show when=move || {
                                    filters.snapshot().values.contains_key(&field_for_active)
                                }>
                                    {
                                        let field = field.clone();
                                        view! {
                                            <button
                                                class="filter-section__clear"
                                                on:click=move |_| filters.clear_field(&field)
                                            >
                                                "Clear"
                                            </button>
                                        }
                                    }
                                </Show>
                            </div>
                            {body}
                        </section>
                    }
                }
            />
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_handle_bounds() {
        assert_eq!(clamp_handle(-5.0, 0.0, 300.0, 300.0, true), 0.0);
        assert_eq!(clamp_handle(400.0, 0.0, 300.0, 0.0, false), 300.0);
    }

    #[test]
    fn test_clamp_handle_does_not_cross() {
        assert_eq!(clamp_handle(250.0, 0.0, 300.0, 200.0, true), 200.0);
        assert_eq!(clamp_handle(100.0, 0.0, 300.0, 200.0, false), 200.0);
        assert_eq!(clamp_handle(150.0, 0.0, 300.0, 200.0, true), 150.0);
    }
}
