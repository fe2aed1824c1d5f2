use super::commands::{self, Notice};
use super::state::{CataloguePanelState, Section};
use crate::domain::a001_catalogue::api::HttpCatalogueApi;
use crate::domain::a001_catalogue::ui::list::CatalogueRow;
use crate::shared::dialogs;
use crate::shared::navigation;
use crate::system::auth;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this catalogue?";

/// ViewModel for the catalogue panel
#[derive(Clone, Copy)]
pub struct CataloguePanelViewModel {
    pub state: RwSignal<CataloguePanelState>,
    pub search_id: RwSignal<String>,
    api: StoredValue<HttpCatalogueApi>,
}

impl CataloguePanelViewModel {
    pub fn new(api: HttpCatalogueApi) -> Self {
        Self {
            state: RwSignal::new(CataloguePanelState::default()),
            search_id: RwSignal::new(String::new()),
            api: StoredValue::new(api),
        }
    }

    // ------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------

    pub fn section(&self) -> Section {
        self.state.with(|s| s.section())
    }

    pub fn rows(&self) -> Vec<CatalogueRow> {
        self.state
            .with(|s| s.page_rows().iter().map(CatalogueRow::from).collect())
    }

    pub fn current_page(&self) -> usize {
        self.state.with(|s| s.page())
    }

    pub fn total_pages(&self) -> usize {
        self.state.with(|s| s.total_pages())
    }

    pub fn is_editing(&self) -> bool {
        self.state.with(|s| s.is_editing())
    }

    pub fn active_filter(&self) -> Option<String> {
        self.state.with(|s| s.status_filter().map(str::to_string))
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Показ списка всегда перечитывает коллекцию
    pub fn show_section(&self, section: Section) {
        self.state.update(|s| s.show(section));
        if section == Section::AllCatalogues {
            self.load_all_command();
        }
    }

    pub fn load_all_command(&self) {
        let api = self.api.get_value();
        let state = self.state;
        spawn_local(async move {
            let result = commands::load_all(&api).await;
            let mut notice = None;
            state.maybe_update(|s| {
                notice = s.apply_load(result);
                notice.is_none()
            });
            if let Some(notice) = notice {
                dialogs::alert(&notice.message());
            }
        });
    }

    pub fn search_command(&self) {
        let raw_id = self.search_id.get_untracked();
        let api = self.api.get_value();
        let state = self.state;
        spawn_local(async move {
            let result = commands::load_by_id(&api, &raw_id).await;
            let mut notice = None;
            state.maybe_update(|s| {
                notice = s.apply_search(result);
                notice.is_none()
            });
            if let Some(notice) = notice {
                dialogs::alert(&notice.message());
            }
        });
    }

    pub fn filter_command(&self, status: String) {
        self.state.update(|s| s.filter_by_status(&status));
    }

    pub fn clear_filter_command(&self) {
        self.state.update(|s| s.clear_filter());
    }

    pub fn next_page(&self) {
        self.state.maybe_update(|s| s.next_page());
    }

    pub fn prev_page(&self) {
        self.state.maybe_update(|s| s.prev_page());
    }

    pub fn begin_edit_command(&self, id: i64) {
        let mut result = Ok(());
        self.state.maybe_update(|s| {
            result = s.begin_edit(id);
            result.is_ok()
        });
        if let Err(e) = result {
            log::warn!("Edit requested for catalogue {} which is not cached: {}", id, e);
            dialogs::alert(&Notice::NotFound.message());
        }
    }

    pub fn reset_form_command(&self) {
        self.state.update(|s| s.reset_form());
    }

    /// Save form data to server (create or update, depending on edit mode)
    pub fn save_command(&self) {
        let action = self.state.with_untracked(|s| s.save_action());
        let api = self.api.get_value();
        let state = self.state;
        spawn_local(async move {
            let outcome = commands::save(&api, action).await;
            let mut notices = Vec::new();
            state.update(|s| notices = s.finish_mutation(outcome));
            for notice in notices {
                dialogs::alert(&notice.message());
            }
        });
    }

    pub fn delete_command(&self, id: i64) {
        if !dialogs::confirm(DELETE_CONFIRMATION) {
            return;
        }
        let api = self.api.get_value();
        let state = self.state;
        spawn_local(async move {
            let outcome = commands::remove(&api, id).await;
            let mut notices = Vec::new();
            state.update(|s| notices = s.finish_mutation(outcome));
            for notice in notices {
                dialogs::alert(&notice.message());
            }
        });
    }

    pub fn logout_command(&self) {
        spawn_local(async move {
            match auth::api::logout().await {
                Ok(response) => {
                    dialogs::alert(response.message_or_default());
                    auth::redirect_to_login();
                }
                Err(e) => {
                    log::error!("Logout failed: {}", e);
                    dialogs::alert(&Notice::LogoutFailed.message());
                }
            }
        });
    }

    pub fn exit_command(&self) {
        navigation::reload_page();
    }
}
