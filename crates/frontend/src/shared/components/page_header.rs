use leptos::prelude::*;

/// Title block at the top of a page
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    description: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || description.get().map(|d| view! {
                        <div class="page-header__subtitle">{d}</div>
                    })}
                </div>
            </div>
        </div>
    }
}
