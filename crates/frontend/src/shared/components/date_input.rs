use leptos::prelude::*;

/// DateInput component with native date picker
/// Value is always exchanged in yyyy-mm-dd format
#[component]
pub fn DateInput(
    /// DOM id of the input
    id: &'static str,
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <input
            type="date"
            id=id
            class="form-control"
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
