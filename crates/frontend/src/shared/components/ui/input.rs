use crate::shared::icons::icon;
use leptos::prelude::*;

/// Text input with an optional leading icon and a clear button
#[component]
pub fn Input(
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Name of an icon from `shared::icons`
    #[prop(optional)]
    leading_icon: Option<&'static str>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();
    let has_text = move || !value.get().is_empty();

    view! {
        <div class=move || format!("form__input-wrapper {}", additional_class())>
            {leading_icon.map(|name| view! {
                <span class="form__input-icon">{icon(name)}</span>
            })}
            <input
                type="text"
                class="form__input"
                placeholder=move || placeholder.get().unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=has_text>
                <button
                    type="button"
                    class="form__input-clear"
                    title="Clear"
                    on:click=move |_| on_input.run(String::new())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
