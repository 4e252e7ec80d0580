use crate::domain::a001_dataset::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{
    format_file_size, format_number_with_decimals, format_voltage, SortableHeaderCell,
};
use crate::shared::filter_context::FilterContext;
use crate::shared::list_utils::{highlight_matches, next_sort};
use contracts::domain::a001_dataset::aggregate::{Dataset, FieldValue};
use contracts::shared::filters::{DatasetPage, DatasetQuery, FilterConfig, DEFAULT_PAGE_SIZE};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Flex, FlexAlign, FlexGap, FlexJustify, Spinner, Table, TableBody, TableCell, TableCellLayout,
    TableHeader, TableHeaderCell, TableRow,
};

/// Typing pause before a query is sent
const DEBOUNCE_MS: u32 = 250;

/// Hands out increasing request ids; only the latest id may update the view.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.latest == id
    }
}

/// Cell text for a configured field
pub fn format_cell(field: &str, value: &FieldValue) -> String {
    match (field, value) {
        (_, FieldValue::Text(text)) => text.clone(),
        ("voltage_kv", FieldValue::Number(n)) => format_voltage(*n),
        ("file_size_mb", FieldValue::Number(n)) => format_file_size(*n),
        (_, FieldValue::Number(n)) => format_number_with_decimals(*n, 1),
    }
}

/// Formatted values of the configured columns, in column order
pub fn column_texts(dataset: &Dataset, columns: &[FilterConfig]) -> Vec<String> {
    columns
        .iter()
        .map(|config| {
            dataset
                .field_value(&config.field)
                .map(|v| format_cell(&config.field, &v))
                .unwrap_or_default()
        })
        .collect()
}

fn format_acquired(dataset: &Dataset) -> String {
    dataset
        .acquired_at
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "—".to_string())
}

/// Catalog table driven by search, filters, sort and page
#[component]
pub fn DataView(
    #[prop(into)]
    configs: Signal<Vec<FilterConfig>>,
    filters: FilterContext,
    #[prop(into)]
    search_term: Signal<String>,
    on_preview: Callback<Dataset>,
) -> impl IntoView {
    let sort_field = RwSignal::new("name".to_string());
    let sort_ascending = RwSignal::new(true);
    let page = RwSignal::new(0usize);
    let page_size = RwSignal::new(DEFAULT_PAGE_SIZE);

    let data = RwSignal::new(None::<DatasetPage>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let requests = StoredValue::new(RequestTracker::default());

    // New search text or filters start over at the first page
    Effect::new(move |_| {
        search_term.track();
        filters.snapshot();
        page.set(0);
    });

    let query = Memo::new(move |_| DatasetQuery {
        search: search_term.get(),
        filters: filters.snapshot(),
        sort_field: sort_field.get(),
        sort_ascending: sort_ascending.get(),
        page: page.get(),
        page_size: page_size.get(),
    });

    Effect::new(move |_| {
        let query = query.get();
        let mut request_id = 0;
        requests.update_value(|r| request_id = r.issue());

        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            let is_current =
                move || requests.try_with_value(|r| r.is_current(request_id)) == Some(true);
            if !is_current() {
                return;
            }

            loading.set(true);
            let result = api::query_datasets(&query).await;
            if !is_current() {
                log::debug!("Dropping stale dataset response #{}", request_id);
                return;
            }
            loading.set(false);

            match result {
                Ok(result_page) => {
                    log::debug!(
                        "Loaded {} of {} datasets",
                        result_page.items.len(),
                        result_page.total_count
                    );
                    error.set(None);
                    data.set(Some(result_page));
                }
                Err(e) => {
                    log::error!("Failed to query datasets: {}", e);
                    error.set(Some(e));
                }
            }
        });
    });

    let on_sort = Callback::new(move |field: String| {
        let (field, ascending) = next_sort(
            &sort_field.get_untracked(),
            sort_ascending.get_untracked(),
            &field,
        );
        sort_field.set(field);
        sort_ascending.set(ascending);
        page.set(0);
    });

    let column_count = move || configs.with(|c| c.len()) + 3;
    let total_pages =
        Signal::derive(move || data.with(|d| d.as_ref().map_or(0, |p| p.total_pages)));
    let total_count =
        Signal::derive(move || data.with(|d| d.as_ref().map_or(0, |p| p.total_count)));

    let rows = move || {
        if let Some(message) = error.get() {
            return view! {
                <TableRow>
                    <TableCell attr:colspan=column_count().to_string() attr:class="data-view__error">
                        {format!("Could not load datasets: {}", message)}
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }

        let items = data.with(|d| d.as_ref().map(|p| p.items.clone()).unwrap_or_default());
        if items.is_empty() {
            let text = if loading.get() {
                "Loading..."
            } else {
                "No datasets match the current search and filters"
            };
            return view! {
                <TableRow>
                    <TableCell attr:colspan=column_count().to_string() attr:class="data-view__empty">
                        {text}
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }

        let term = search_term.get();
        let columns = configs.get();
        items
            .into_iter()
            .map(|dataset| {
                let cells = column_texts(&dataset, &columns)
                    .into_iter()
                    .map(|text| {
                        let cell = highlight_matches(&text, &term);
                        view! {
                            <TableCell>
                                <TableCellLayout truncate=true>{cell}</TableCellLayout>
                            </TableCell>
                        }
                    })
                    .collect_view();
                let name = highlight_matches(&dataset.name, &term);
                let code = highlight_matches(&dataset.code, &term);
                let acquired = format_acquired(&dataset);
                let row_item = dataset.clone();

                view! {
                    <TableRow
                        on:click=move |_| on_preview.run(row_item.clone())
                        attr:style="cursor: pointer;"
                    >
                        <TableCell>
                            <TableCellLayout truncate=true>
                                <a href="#" class="table__link" on:click=|e| e.prevent_default()>
                                    {name}
                                </a>
                            </TableCellLayout>
                        </TableCell>
                        <TableCell>{code}</TableCell>
                        {cells}
                        <TableCell>{acquired}</TableCell>
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="data-view">
            <div class="data-view__toolbar">
                <Show when=move || loading.get()>
                    <Flex justify=FlexJustify::Start align=FlexAlign::Center gap=FlexGap::Small>
                        <Spinner />
                        <span>"Loading..."</span>
                    </Flex>
                </Show>
                <PaginationControls
                    current_page=page
                    total_pages=total_pages
                    total_count=total_count
                    page_size=page_size
                    on_page_change=Callback::new(move |p: usize| page.set(p))
                    on_page_size_change=Callback::new(move |size: usize| {
                        page_size.set(size);
                        page.set(0);
                    })
                />
            </div>
            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell
                                label="Name"
                                sort_field="name"
                                current_sort_field=sort_field
                                sort_ascending=sort_ascending
                                on_sort=on_sort
                                min_width=220.0
                            />
                            <SortableHeaderCell
                                label="Code"
                                sort_field="code"
                                current_sort_field=sort_field
                                sort_ascending=sort_ascending
                                on_sort=on_sort
                            />
                            {move || {
                                configs
                                    .get()
                                    .into_iter()
                                    .map(|config| {
                                        let align =
                                            if config.bounds().is_some() { "right" } else { "left" };
                                        view! {
                                            <SortableHeaderCell
                                                label=config.label
                                                sort_field=config.field
                                                current_sort_field=sort_field
                                                sort_ascending=sort_ascending
                                                on_sort=on_sort
                                                align=align
                                            />
                                        }
                                    })
                                    .collect_view()
                            }}
                            <TableHeaderCell min_width=110.0>"Acquired"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows}</TableBody>
                </Table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_tracker_keeps_latest_only() {
        let mut tracker = RequestTracker::default();
        let first = tracker.issue();
        let second = tracker.issue();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_column_texts_follow_configs() {
        use contracts::domain::a001_dataset::aggregate::DatasetDto;
        use contracts::domain::a001_dataset::filter_configs;

        let dataset = Dataset::new_for_insert(DatasetDto {
            code: Some("DS-0001".into()),
            name: "Twisted bilayer WSe2 ptychography".into(),
            description: String::new(),
            measurement_type: "4D-STEM".into(),
            detector: "EMPAD".into(),
            voltage_kv: 80.0,
            file_size_mb: 2048.0,
            sample: String::new(),
            acquired_at: None,
            file_path: String::new(),
        });
        let mut columns = filter_configs();
        columns.push(FilterConfig::range_slider("unknown_field", "Unknown", 0.0, 1.0));

        assert_eq!(
            column_texts(&dataset, &columns),
            vec!["4D-STEM", "EMPAD", "80 kV", "2.00 GB", ""]
        );
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(
            format_cell("detector", &FieldValue::Text("EMPAD".into())),
            "EMPAD"
        );
        assert_eq!(format_cell("voltage_kv", &FieldValue::Number(200.0)), "200 kV");
        assert_eq!(
            format_cell("file_size_mb", &FieldValue::Number(2048.0)),
            "2.00 GB"
        );
        assert_eq!(format_cell("other", &FieldValue::Number(1234.0)), "1 234.0");
    }
}
