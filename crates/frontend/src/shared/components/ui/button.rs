use leptos::prelude::*;

/// Button with "primary" (default), "secondary" or "ghost" variants
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Pressed look for toggle buttons
    #[prop(optional, into)]
    active: Option<Signal<bool>>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };
    let is_active = move || active.map(|a| a.get()).unwrap_or(false);
    let active_class = move || if is_active() { "button--active" } else { "" };
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("button {} {} {}", variant_class(), active_class(), additional_class())
            title=move || title.get()
            aria-pressed=move || is_active().to_string()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
