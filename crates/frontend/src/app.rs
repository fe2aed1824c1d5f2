use crate::domain::a001_catalogue::ui::panel::CataloguePanel;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <CataloguePanel />
    }
}
