use super::commands::{MutationOutcome, Notice};
use crate::domain::a001_catalogue::error::CatalogueError;
use crate::shared::date_utils::format_iso_date;
use crate::shared::list_utils::{page_count, page_label, page_slice};
use contracts::domain::a001_catalogue::aggregate::{Catalogue, CatalogueDto};

/// Строк на странице таблицы
pub const PAGE_SIZE: usize = 5;

/// Режим формы: новая запись или редактирование существующей
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Creating,
    Editing(i64),
}

/// Видимая секция панели
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    AllCatalogues,
    Create,
}

impl Section {
    pub fn dom_id(&self) -> &'static str {
        match self {
            Section::AllCatalogues => "all_catalogues",
            Section::Create => "create",
        }
    }
}

/// Что отправить на сервер по кнопке "Сохранить"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveAction {
    Create(CatalogueDto),
    Update(i64, CatalogueDto),
}

/// Состояние панели каталогов
///
/// `records` - кэш последней полной (или одиночной) загрузки в порядке
/// "новые сверху". Фильтр по статусу только сужает видимую выборку,
/// кэш при этом не меняется.
#[derive(Debug, Clone)]
pub struct CataloguePanelState {
    records: Vec<Catalogue>,
    status_filter: Option<String>,
    page: usize,
    page_size: usize,
    mode: EditMode,
    section: Section,
    form: CatalogueDto,
}

impl Default for CataloguePanelState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl CataloguePanelState {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            status_filter: None,
            page: 1,
            page_size: page_size.max(1),
            mode: EditMode::Creating,
            section: Section::AllCatalogues,
            form: CatalogueDto::default(),
        }
    }

    pub fn records(&self) -> &[Catalogue] {
        &self.records
    }

    pub fn status_filter(&self) -> Option<&str> {
        self.status_filter.as_deref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn form(&self) -> &CatalogueDto {
        &self.form
    }

    /// Правка полей формы; режим (create / edit) при этом не меняется
    pub fn form_mut(&mut self) -> &mut CatalogueDto {
        &mut self.form
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing(_))
    }

    // ------------------------------------------------------------------
    // Cache
    // ------------------------------------------------------------------

    /// Заменить кэш ответом `GET /catalogues` (сервер отдаёт старые первыми)
    pub fn replace_all(&mut self, mut server_order: Vec<Catalogue>) {
        server_order.reverse();
        self.records = server_order;
        self.status_filter = None;
        self.page = 1;
    }

    /// Результат поиска по id становится всем кэшем
    pub fn replace_with_single(&mut self, record: Catalogue) {
        self.records = vec![record];
        self.status_filter = None;
        self.page = 1;
    }

    pub fn find(&self, id: i64) -> Option<&Catalogue> {
        self.records.iter().find(|c| c.id == id)
    }

    /// Применить результат `GET /catalogues`
    ///
    /// При ошибке кэш, страница и фильтр остаются прежними.
    pub fn apply_load(&mut self, result: Result<Vec<Catalogue>, CatalogueError>) -> Option<Notice> {
        match result {
            Ok(records) => {
                self.replace_all(records);
                None
            }
            Err(e) => Some(Notice::LoadFailed(e.to_string())),
        }
    }

    /// Применить результат поиска по id
    pub fn apply_search(&mut self, result: Result<Catalogue, CatalogueError>) -> Option<Notice> {
        match result {
            Ok(record) => {
                self.replace_with_single(record);
                None
            }
            Err(e) => Some(Notice::for_search_error(&e)),
        }
    }

    /// Завершить мутацию: при успехе сброс формы, возврат к списку и
    /// перезагруженный кэш; при ошибке форма остаётся заполненной.
    /// Возвращает уведомления в порядке показа.
    pub fn finish_mutation(&mut self, outcome: MutationOutcome) -> Vec<Notice> {
        let mut notices = vec![outcome.notice];
        if let Some(reload) = outcome.reload {
            self.reset_form();
            self.show(Section::AllCatalogues);
            notices.extend(self.apply_load(reload));
        }
        notices
    }

    // ------------------------------------------------------------------
    // Filtering and paging
    // ------------------------------------------------------------------

    pub fn filter_by_status(&mut self, status: &str) {
        self.status_filter = Some(status.to_string());
        self.page = 1;
    }

    pub fn clear_filter(&mut self) {
        self.status_filter = None;
        self.page = 1;
    }

    /// Записи кэша с точным совпадением статуса, в исходном порядке
    pub fn filtered(&self, status: &str) -> Vec<&Catalogue> {
        self.records.iter().filter(|c| c.status == status).collect()
    }

    /// Текущая выборка: весь кэш или отфильтрованная часть
    pub fn current_view(&self) -> Vec<&Catalogue> {
        match self.status_filter.as_deref() {
            Some(status) => self.filtered(status),
            None => self.records.iter().collect(),
        }
    }

    pub fn total_pages(&self) -> usize {
        page_count(self.current_view().len(), self.page_size)
    }

    /// Строки текущей страницы
    pub fn page_rows(&self) -> Vec<Catalogue> {
        let view = self.current_view();
        page_slice(&view, self.page, self.page_size)
            .iter()
            .map(|c| (*c).clone())
            .collect()
    }

    pub fn page_label(&self) -> String {
        page_label(self.page, self.total_pages())
    }

    /// `true`, если страница действительно сменилась
    pub fn next_page(&mut self) -> bool {
        if self.page < self.total_pages() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// `true`, если страница действительно сменилась
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    // ------------------------------------------------------------------
    // Sections and form
    // ------------------------------------------------------------------

    /// Переключить секцию; открытие формы начинает новую запись
    pub fn show(&mut self, section: Section) {
        self.section = section;
        if section == Section::Create {
            self.reset_form();
        }
    }

    pub fn reset_form(&mut self) {
        self.form = CatalogueDto::default();
        self.mode = EditMode::Creating;
    }

    /// Открыть форму на редактирование записи из кэша
    ///
    /// Ищем во всём кэше, а не в отфильтрованной выборке.
    pub fn begin_edit(&mut self, id: i64) -> Result<(), CatalogueError> {
        let record = self.find(id).cloned().ok_or(CatalogueError::NotFound)?;

        self.show(Section::Create);
        self.form = CatalogueDto {
            name: record.name,
            description: record.description,
            effective_from: format_iso_date(&record.effective_from),
            effective_to: format_iso_date(&record.effective_to),
            status: record.status,
        };
        self.mode = EditMode::Editing(id);
        Ok(())
    }

    pub fn save_action(&self) -> SaveAction {
        match self.mode {
            EditMode::Creating => SaveAction::Create(self.form.clone()),
            EditMode::Editing(id) => SaveAction::Update(id, self.form.clone()),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn catalogue(id: i64, status: &str) -> Catalogue {
        Catalogue {
            id,
            name: format!("Catalogue {}", id),
            description: format!("Description {}", id),
            effective_from: "Mon, 01 Jan 2024 00:00:00 GMT".to_string(),
            effective_to: "2024-12-31".to_string(),
            status: status.to_string(),
        }
    }

    /// Ответ сервера: id 1..=n, старые первыми
    pub(crate) fn server_records(n: i64) -> Vec<Catalogue> {
        (1..=n)
            .map(|id| catalogue(id, if id % 2 == 0 { "inactive" } else { "active" }))
            .collect()
    }

    fn ids(rows: &[Catalogue]) -> Vec<i64> {
        rows.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_replace_all_is_newest_first() {
        let mut state = CataloguePanelState::default();
        state.replace_all(server_records(3));
        assert_eq!(ids(state.records()), vec![3, 2, 1]);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_seven_records_two_pages() {
        let mut state = CataloguePanelState::new(5);
        state.replace_all(server_records(7));

        assert_eq!(ids(&state.page_rows()), vec![7, 6, 5, 4, 3]);
        assert_eq!(state.page_label(), "Page 1 of 2");

        assert!(state.next_page());
        assert_eq!(ids(&state.page_rows()), vec![2, 1]);
        assert_eq!(state.page_label(), "Page 2 of 2");

        assert!(!state.next_page());
        assert_eq!(state.page(), 2);
        assert_eq!(ids(&state.page_rows()), vec![2, 1]);
    }

    #[test]
    fn test_paging_stays_in_bounds() {
        for page_size in 1..=6 {
            for n in 0..=13 {
                let mut state = CataloguePanelState::new(page_size);
                state.replace_all(server_records(n));
                let total = state.total_pages();

                assert!(!state.prev_page());
                for _ in 0..(total + 3) {
                    state.next_page();
                    assert!(state.page() >= 1);
                    assert!(state.page() <= total.max(1));
                }
                for _ in 0..(total + 3) {
                    state.prev_page();
                    assert!(state.page() >= 1);
                }
                assert_eq!(state.page(), 1);
            }
        }
    }

    #[test]
    fn test_pages_reproduce_view_in_order() {
        let mut state = CataloguePanelState::new(3);
        state.replace_all(server_records(11));
        let mut seen = state.page_rows();
        while state.next_page() {
            seen.extend(state.page_rows());
        }
        let expected: Vec<i64> = (1..=11).rev().collect();
        assert_eq!(ids(&seen), expected);
    }

    #[test]
    fn test_empty_view_renders_label() {
        let state = CataloguePanelState::default();
        assert_eq!(state.total_pages(), 0);
        assert!(state.page_rows().is_empty());
        assert_eq!(state.page_label(), "Page 1 of 0");
    }

    #[test]
    fn test_filter_by_status_keeps_cache() {
        let mut state = CataloguePanelState::new(2);
        state.replace_all(server_records(9));
        state.next_page();
        let before = state.records().to_vec();

        state.filter_by_status("inactive");
        assert_eq!(state.page(), 1);
        assert_eq!(state.records(), before.as_slice());

        let view: Vec<i64> = state.current_view().iter().map(|c| c.id).collect();
        assert_eq!(view, vec![8, 6, 4, 2]);
        assert!(state.current_view().iter().all(|c| c.status == "inactive"));

        // filtered view is paged on its own
        assert_eq!(state.total_pages(), 2);
        assert_eq!(ids(&state.page_rows()), vec![8, 6]);
        assert!(state.next_page());
        assert_eq!(ids(&state.page_rows()), vec![4, 2]);
        assert!(!state.next_page());
    }

    #[test]
    fn test_filter_is_exact_match() {
        let mut state = CataloguePanelState::default();
        state.replace_all(vec![
            catalogue(1, "active"),
            catalogue(2, "Active"),
            catalogue(3, "active "),
        ]);
        let matched: Vec<i64> = state.filtered("active").iter().map(|c| c.id).collect();
        assert_eq!(matched, vec![1]);
        assert!(state.filtered("archived").is_empty());
    }

    #[test]
    fn test_reload_drops_filter() {
        let mut state = CataloguePanelState::default();
        state.replace_all(server_records(4));
        state.filter_by_status("active");
        state.replace_all(server_records(4));
        assert_eq!(state.status_filter(), None);
        assert_eq!(state.current_view().len(), 4);
    }

    #[test]
    fn test_replace_with_single() {
        let mut state = CataloguePanelState::default();
        state.replace_all(server_records(8));
        state.next_page();
        state.replace_with_single(catalogue(42, "expired"));
        assert_eq!(ids(state.records()), vec![42]);
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_label(), "Page 1 of 1");
    }

    #[test]
    fn test_begin_edit_populates_form() {
        let mut state = CataloguePanelState::default();
        state.replace_all(server_records(3));

        state.begin_edit(2).unwrap();
        assert_eq!(state.mode(), EditMode::Editing(2));
        assert_eq!(state.section(), Section::Create);
        assert_eq!(
            *state.form(),
            CatalogueDto::new(
                "Catalogue 2",
                "Description 2",
                "2024-01-01",
                "2024-12-31",
                "inactive"
            )
        );
        assert_eq!(
            state.save_action(),
            SaveAction::Update(2, state.form().clone())
        );
    }

    #[test]
    fn test_begin_edit_finds_filtered_out_record() {
        let mut state = CataloguePanelState::default();
        state.replace_all(server_records(4));
        state.filter_by_status("active");
        assert!(state.begin_edit(4).is_ok());
        assert_eq!(state.form().status, "inactive");
    }

    #[test]
    fn test_begin_edit_unknown_id_leaves_form() {
        let mut state = CataloguePanelState::default();
        state.replace_all(server_records(3));
        state.form_mut().name = "draft".to_string();

        assert_eq!(state.begin_edit(99), Err(CatalogueError::NotFound));
        assert_eq!(state.form().name, "draft");
        assert_eq!(state.mode(), EditMode::Creating);
        assert_eq!(state.section(), Section::AllCatalogues);
    }

    #[test]
    fn test_reset_form_returns_to_create() {
        let mut state = CataloguePanelState::default();
        state.replace_all(server_records(2));
        state.begin_edit(1).unwrap();

        state.reset_form();
        assert_eq!(state.mode(), EditMode::Creating);
        assert_eq!(state.form(), &CatalogueDto::default());
        assert_eq!(
            state.save_action(),
            SaveAction::Create(CatalogueDto::default())
        );
    }

    #[test]
    fn test_show_create_starts_fresh_form() {
        let mut state = CataloguePanelState::default();
        state.replace_all(server_records(2));
        state.begin_edit(2).unwrap();

        state.show(Section::AllCatalogues);
        assert!(state.is_editing());

        state.show(Section::Create);
        assert!(!state.is_editing());
        assert_eq!(state.form(), &CatalogueDto::default());
    }

    fn failed_reload() -> Result<Vec<Catalogue>, CatalogueError> {
        Err(CatalogueError::Http(500))
    }

    #[test]
    fn test_failed_load_keeps_cache_page_and_filter() {
        let mut state = CataloguePanelState::new(2);
        assert_eq!(state.apply_load(Ok(server_records(9))), None);
        state.filter_by_status("active");
        state.next_page();
        let before = state.records().to_vec();

        let notice = state.apply_load(failed_reload());
        assert_eq!(notice, Some(Notice::LoadFailed("HTTP 500".to_string())));
        assert_eq!(state.records(), before.as_slice());
        assert_eq!(state.page(), 2);
        assert_eq!(state.status_filter(), Some("active"));
    }

    #[test]
    fn test_apply_search() {
        let mut state = CataloguePanelState::new(2);
        state.apply_load(Ok(server_records(6)));
        state.next_page();

        assert_eq!(state.apply_search(Ok(catalogue(4, "inactive"))), None);
        assert_eq!(ids(state.records()), vec![4]);
        assert_eq!(state.page(), 1);
        assert!(state.begin_edit(4).is_ok());

        state.apply_load(Ok(server_records(3)));
        assert_eq!(
            state.apply_search(Err(CatalogueError::NotFound)),
            Some(Notice::NotFound)
        );
        assert_eq!(
            state.apply_search(Err(CatalogueError::EmptyId)),
            Some(Notice::InvalidId)
        );
        assert_eq!(ids(state.records()), vec![3, 2, 1]);
    }

    #[test]
    fn test_successful_mutation_returns_to_list() {
        let mut state = CataloguePanelState::default();
        state.apply_load(Ok(server_records(3)));
        state.begin_edit(2).unwrap();
        state.form_mut().name = "Renamed".to_string();

        let notices = state.finish_mutation(MutationOutcome {
            notice: Notice::Updated,
            reload: Some(Ok(server_records(4))),
        });
        assert_eq!(notices, vec![Notice::Updated]);
        assert_eq!(state.section(), Section::AllCatalogues);
        assert_eq!(state.mode(), EditMode::Creating);
        assert_eq!(state.form(), &CatalogueDto::default());
        assert_eq!(ids(state.records()), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_mutation_with_failed_reload_keeps_old_cache() {
        let mut state = CataloguePanelState::default();
        state.apply_load(Ok(server_records(3)));
        state.show(Section::Create);

        let notices = state.finish_mutation(MutationOutcome {
            notice: Notice::Deleted,
            reload: Some(failed_reload()),
        });
        assert_eq!(
            notices,
            vec![Notice::Deleted, Notice::LoadFailed("HTTP 500".to_string())]
        );
        assert_eq!(state.section(), Section::AllCatalogues);
        assert_eq!(ids(state.records()), vec![3, 2, 1]);
    }

    #[test]
    fn test_failed_update_keeps_form_populated() {
        let mut state = CataloguePanelState::default();
        state.apply_load(Ok(server_records(3)));
        state.begin_edit(1).unwrap();
        state.form_mut().description = "edited".to_string();
        let edited = state.form().clone();

        let notices = state.finish_mutation(MutationOutcome {
            notice: Notice::UpdateFailed,
            reload: None,
        });
        assert_eq!(notices, vec![Notice::UpdateFailed]);
        assert_eq!(state.mode(), EditMode::Editing(1));
        assert_eq!(state.section(), Section::Create);
        assert_eq!(state.form(), &edited);
        assert_eq!(state.records().len(), 3);
    }
}
