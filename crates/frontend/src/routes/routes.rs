use crate::domain::a001_dataset::ui::explorer::DataExplorer;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <p class="page__empty">"Page not found"</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/explore-data" /> } />
                    <Route path=path!("/explore-data") view=DataExplorer />
                </Routes>
            </main>
        </Router>
    }
}
