use crate::domain::a001_dataset::api;
use crate::shared::components::table::{format_file_size, format_voltage};
use crate::shared::icons::icon;
use contracts::domain::a001_dataset::aggregate::Dataset;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Label/value rows shown for a dataset
pub fn detail_rows(dataset: &Dataset) -> Vec<(&'static str, String)> {
    let or_dash = |s: &str| {
        if s.trim().is_empty() {
            "—".to_string()
        } else {
            s.to_string()
        }
    };
    vec![
        ("Code", or_dash(&dataset.code)),
        ("Measurement type", or_dash(&dataset.measurement_type)),
        ("Detector", or_dash(&dataset.detector)),
        ("Voltage", format_voltage(dataset.voltage_kv)),
        ("File size", format_file_size(dataset.file_size_mb)),
        ("Sample", or_dash(&dataset.sample)),
        (
            "Acquired",
            dataset
                .acquired_at
                .map(|d| d.format("%Y-%m-%d %H:%M UTC").to_string())
                .unwrap_or_else(|| "—".to_string()),
        ),
        ("File", or_dash(&dataset.file_path)),
    ]
}

/// Details of the selected dataset.
///
/// The row copy is shown immediately and replaced by the stored record once
/// it has been fetched; a failed fetch keeps the row copy.
#[component]
pub fn PreviewPanel(
    #[prop(into)]
    item: Signal<Option<Dataset>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let latest = RwSignal::new(None::<Dataset>);

    Effect::new(move |_| {
        latest.set(None);
        let Some(id) = item.with(|i| i.as_ref().map(|d| d.to_string_id())) else {
            return;
        };
        spawn_local(async move {
            match api::fetch_dataset(&id).await {
                Ok(dataset) => {
                    let still_selected = item
                        .try_with_untracked(|i| i.as_ref().map(|d| d.to_string_id()))
                        .flatten()
                        == Some(dataset.to_string_id());
                    if still_selected {
                        latest.set(Some(dataset));
                    }
                }
                Err(e) => log::warn!("Failed to refresh dataset {}: {}", id, e),
            }
        });
    });

    let shown = move || latest.get().or_else(|| item.get());

    view! {
        <aside class="preview-panel">
            <div class="preview-panel__header">
                <h2 class="preview-panel__title">
                    {move || shown().map(|d| d.name).unwrap_or_default()}
                </h2>
                <button
                    class="preview-panel__close"
                    title="Close preview"
                    on:click=move |_| on_close.run(())
                >
                    {icon("x")}
                </button>
            </div>
            {move || shown().map(|dataset| {
                let description = dataset.description.clone();
                view! {
                    <p class="preview-panel__description">{description}</p>
                    <dl class="preview-panel__details">
                        {detail_rows(&dataset)
                            .into_iter()
                            .map(|(label, value)| view! {
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            })
                            .collect_view()}
                    </dl>
                }
            })}
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_dataset::aggregate::DatasetDto;

    #[test]
    fn test_detail_rows() {
        let dataset = Dataset::new_for_insert(DatasetDto {
            code: Some("DS-0042".into()),
            name: "Perovskite oxygen K-edge".into(),
            description: String::new(),
            measurement_type: "EELS Hyperspectral".into(),
            detector: "Continuum K3-IS".into(),
            voltage_kv: 200.0,
            file_size_mb: 980.0,
            sample: " ".into(),
            acquired_at: None,
            file_path: String::new(),
        });
        let rows = detail_rows(&dataset);
        assert_eq!(rows[0], ("Code", "DS-0042".to_string()));
        assert!(rows.contains(&("Voltage", "200 kV".to_string())));
        assert!(rows.contains(&("File size", "980.0 MB".to_string())));
        assert!(rows.contains(&("Sample", "—".to_string())));
        assert!(rows.contains(&("Acquired", "—".to_string())));
    }
}
