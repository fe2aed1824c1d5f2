use crate::shared::icons::icon;
use crate::shared::list_utils::page_label;
use leptos::prelude::*;

/// PaginationControls component - prev / "Page X of Y" / next
///
/// Границы проверяет владелец состояния, кнопки лишь блокируются на краях.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (0 for an empty view)
    #[prop(into)]
    total_pages: Signal<usize>,

    on_prev: Callback<()>,

    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span id="page_info" class="pagination-info">
                {move || page_label(current_page.get(), total_pages.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
