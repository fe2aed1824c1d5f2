use super::state::Section;
use super::view_model::CataloguePanelViewModel;
use crate::domain::a001_catalogue::api::HttpCatalogueApi;
use crate::domain::a001_catalogue::ui::details::CatalogueForm;
use crate::domain::a001_catalogue::ui::list::CatalogueTable;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use contracts::enums::catalogue_status::CatalogueStatus;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CataloguePanel() -> impl IntoView {
    let vm = CataloguePanelViewModel::new(HttpCatalogueApi::new());
    vm.show_section(Section::AllCatalogues);

    let on_edit = Callback::new(move |id: i64| vm.begin_edit_command(id));
    let on_delete = Callback::new(move |id: i64| vm.delete_command(id));
    let on_prev = Callback::new(move |_: ()| vm.prev_page());
    let on_next = Callback::new(move |_: ()| vm.next_page());

    view! {
        <div class="content">
            <div class="header">
                <h2>"Catalogues"</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| vm.show_section(Section::Create)>
                        {icon("plus")}
                        "New catalogue"
                    </button>
                    <button class="button button--secondary" on:click=move |_| vm.show_section(Section::AllCatalogues)>
                        {icon("refresh")}
                        "All catalogues"
                    </button>
                    <button class="button button--secondary" on:click=move |_| vm.logout_command()>
                        {icon("log-out")}
                        "Logout"
                    </button>
                    <button class="button button--secondary" on:click=move |_| vm.exit_command()>
                        {icon("x")}
                        "Exit"
                    </button>
                </div>
            </div>

            <Show when=move || vm.section() == Section::AllCatalogues>
                <section id={Section::AllCatalogues.dom_id()} class="section">
                    <div class="filter-panel">
                        <input
                            type="text"
                            id="get_id"
                            placeholder="Catalogue ID"
                            prop:value=move || vm.search_id.get()
                            on:input=move |ev| vm.search_id.set(event_target_value(&ev))
                        />
                        <button class="button button--secondary" on:click=move |_| vm.search_command()>
                            {icon("search")}
                            "Search"
                        </button>
                        {CatalogueStatus::all().into_iter().map(|status| {
                            let code = status.code();
                            view! {
                                <button
                                    class=move || if vm.active_filter().as_deref() == Some(code) {
                                        "button button--primary"
                                    } else {
                                        "button button--secondary"
                                    }
                                    on:click=move |_| vm.filter_command(code.to_string())
                                >
                                    {status.display_name()}
                                </button>
                            }
                        }).collect_view()}
                        <button class="button button--secondary" on:click=move |_| vm.clear_filter_command()>
                            "All statuses"
                        </button>
                    </div>

                    <CatalogueTable
                        rows=Signal::derive(move || vm.rows())
                        on_edit=on_edit
                        on_delete=on_delete
                    />

                    <PaginationControls
                        current_page=Signal::derive(move || vm.current_page())
                        total_pages=Signal::derive(move || vm.total_pages())
                        on_prev=on_prev
                        on_next=on_next
                    />
                </section>
            </Show>

            <Show when=move || vm.section() == Section::Create>
                <section id={Section::Create.dom_id()} class="section">
                    <CatalogueForm vm=vm />
                </section>
            </Show>
        </div>
    }
}
