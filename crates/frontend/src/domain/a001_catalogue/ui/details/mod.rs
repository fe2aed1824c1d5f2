//! Форма создания / редактирования каталога
//!
//! Поля: `c_name`, `c_desc`, `c_from`, `c_to`, `c_status`. Кнопка сохранения
//! отправляет create или update в зависимости от режима формы.

use crate::domain::a001_catalogue::ui::panel::state::Section;
use crate::domain::a001_catalogue::ui::panel::CataloguePanelViewModel;
use crate::shared::components::date_input::DateInput;
use crate::shared::icons::icon;
use contracts::enums::catalogue_status::CatalogueStatus;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CatalogueForm(vm: CataloguePanelViewModel) -> impl IntoView {
    let state = vm.state;

    view! {
        <div class="details-container catalogue-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_editing() { "Edit catalogue" } else { "New catalogue" }}
                </h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="c_name">"Name"</label>
                    <input
                        type="text"
                        id="c_name"
                        prop:value=move || state.with(|s| s.form().name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.form_mut().name = value);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="c_desc">"Description"</label>
                    <textarea
                        id="c_desc"
                        rows="3"
                        prop:value=move || state.with(|s| s.form().description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.form_mut().description = value);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="c_from">"Effective from"</label>
                    <DateInput
                        id="c_from"
                        value=Signal::derive(move || state.with(|s| s.form().effective_from.clone()))
                        on_change=move |value: String| state.update(|s| s.form_mut().effective_from = value)
                    />
                </div>

                <div class="form-group">
                    <label for="c_to">"Effective to"</label>
                    <DateInput
                        id="c_to"
                        value=Signal::derive(move || state.with(|s| s.form().effective_to.clone()))
                        on_change=move |value: String| state.update(|s| s.form_mut().effective_to = value)
                    />
                </div>

                <div class="form-group">
                    <label for="c_status">"Status"</label>
                    <select
                        id="c_status"
                        prop:value=move || state.with(|s| s.form().status.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.form_mut().status = value);
                        }
                    >
                        <option value="">"Select status"</option>
                        {CatalogueStatus::all().into_iter().map(|status| view! {
                            <option value={status.code()}>{status.display_name()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <button class="button button--primary" on:click=move |_| vm.save_command()>
                    {icon("save")}
                    {move || if vm.is_editing() { "Update" } else { "Save" }}
                </button>
                <button class="button button--secondary" on:click=move |_| vm.reset_form_command()>
                    {icon("x")}
                    "Clear"
                </button>
                <button class="button button--secondary" on:click=move |_| vm.show_section(Section::AllCatalogues)>
                    "Back to list"
                </button>
            </div>
        </div>
    }
}
