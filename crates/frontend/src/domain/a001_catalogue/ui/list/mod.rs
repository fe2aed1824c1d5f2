use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_iso_date;
use crate::shared::icons::icon;
use contracts::domain::a001_catalogue::aggregate::Catalogue;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogueRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub effective_from: String,
    pub effective_to: String,
    pub status: String,
}

impl From<&Catalogue> for CatalogueRow {
    fn from(c: &Catalogue) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            description: c.description.clone(),
            effective_from: format_iso_date(&c.effective_from),
            effective_to: format_iso_date(&c.effective_to),
            status: c.status.clone(),
        }
    }
}

/// Таблица одной страницы каталогов
#[component]
#[allow(non_snake_case)]
pub fn CatalogueTable(
    #[prop(into)] rows: Signal<Vec<CatalogueRow>>,
    on_edit: Callback<i64>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="table-container">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"ID"</th>
                        <th class="table__header-cell">"Name"</th>
                        <th class="table__header-cell">"Description"</th>
                        <th class="table__header-cell">"Effective from"</th>
                        <th class="table__header-cell">"Effective to"</th>
                        <th class="table__header-cell">"Status"</th>
                        <th class="table__header-cell">"Actions"</th>
                    </tr>
                </thead>
                <tbody id="all_data">
                    {move || rows.get().into_iter().map(|row| {
                        let id = row.id;
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{row.id.to_string()}</td>
                                <td class="table__cell">{row.name}</td>
                                <td class="table__cell">{row.description}</td>
                                <td class="table__cell">{row.effective_from}</td>
                                <td class="table__cell">{row.effective_to}</td>
                                <td class="table__cell">
                                    <StatusBadge status=row.status />
                                </td>
                                <td class="table__cell">
                                    <button class="action-btn" title="Edit" on:click=move |_| on_edit.run(id)>
                                        {icon("edit")}
                                    </button>
                                    <button class="emoji-btn" title="Delete" on:click=move |_| on_delete.run(id)>
                                        {icon("delete")}
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
            {move || rows.with(|r| r.is_empty()).then(|| view! {
                <div class="table__empty">"No catalogues"</div>
            })}
        </div>
    }
}
