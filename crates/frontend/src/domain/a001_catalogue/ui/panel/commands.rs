//! Асинхронные сценарии панели поверх любого [`CatalogueApi`]
//!
//! Команды не трогают состояние напрямую: возвращают данные и уведомление,
//! а view model применяет их к сигналам. После любой успешной мутации
//! коллекция перезагружается целиком.

use super::state::SaveAction;
use crate::domain::a001_catalogue::api::CatalogueApi;
use crate::domain::a001_catalogue::error::CatalogueError;
use contracts::domain::a001_catalogue::aggregate::Catalogue;

/// Текст модального уведомления
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Created,
    Updated,
    Deleted,
    CreateFailed,
    UpdateFailed,
    DeleteFailed,
    InvalidId,
    NotFound,
    SearchFailed,
    LoadFailed(String),
    LogoutFailed,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Created => "✅ Catalogue Created".to_string(),
            Notice::Updated => "✏️ Catalogue Updated".to_string(),
            Notice::Deleted => "🗑️ Catalogue Deleted".to_string(),
            Notice::CreateFailed => "❌ Failed to create catalogue".to_string(),
            Notice::UpdateFailed => "❌ Failed to update catalogue".to_string(),
            Notice::DeleteFailed => "❌ Failed to delete catalogue".to_string(),
            Notice::InvalidId => "❗Please enter a valid ID".to_string(),
            Notice::NotFound => "❌ Catalogue not found!".to_string(),
            Notice::SearchFailed => "❌ Error fetching catalogue by ID".to_string(),
            Notice::LoadFailed(reason) => format!("⚠️ Error: {}", reason),
            Notice::LogoutFailed => "❌ Failed to log out".to_string(),
        }
    }

    /// Уведомление для неудачного поиска по id
    pub fn for_search_error(err: &CatalogueError) -> Self {
        match err {
            e if e.is_validation() => Notice::InvalidId,
            CatalogueError::NotFound => Notice::NotFound,
            _ => Notice::SearchFailed,
        }
    }
}

/// Итог мутации: что показать пользователю и, если мутация прошла,
/// результат последующей полной перезагрузки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub notice: Notice,
    pub reload: Option<Result<Vec<Catalogue>, CatalogueError>>,
}

impl MutationOutcome {
    fn failed(notice: Notice) -> Self {
        Self {
            notice,
            reload: None,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.reload.is_some()
    }
}

/// Клиентская проверка id перед запросом
pub fn parse_id(raw: &str) -> Result<i64, CatalogueError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CatalogueError::EmptyId);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| CatalogueError::InvalidId(trimmed.to_string()))
}

pub async fn load_all<A: CatalogueApi>(api: &A) -> Result<Vec<Catalogue>, CatalogueError> {
    match api.fetch_all().await {
        Ok(records) => {
            log::info!("Loaded {} catalogues", records.len());
            Ok(records)
        }
        Err(e) => {
            log::error!("Failed to load catalogues: {}", e);
            Err(e)
        }
    }
}

/// Поиск по id; пустой или нечисловой id отклоняется без запроса
pub async fn load_by_id<A: CatalogueApi>(api: &A, raw_id: &str) -> Result<Catalogue, CatalogueError> {
    let id = parse_id(raw_id)?;
    let result = api.fetch_by_id(id).await;
    match &result {
        Ok(_) => log::info!("Catalogue {} found", id),
        Err(CatalogueError::NotFound) => log::warn!("No catalogue found with ID: {}", id),
        Err(e) => log::error!("Error fetching catalogue {}: {}", id, e),
    }
    result
}

pub async fn save<A: CatalogueApi>(api: &A, action: SaveAction) -> MutationOutcome {
    match action {
        SaveAction::Create(dto) => {
            log::debug!("Creating catalogue: {:?}", dto);
            match api.create(&dto).await {
                Ok(()) => reload_after(api, Notice::Created).await,
                Err(e) => {
                    log::error!("Failed to create catalogue: {}", e);
                    MutationOutcome::failed(Notice::CreateFailed)
                }
            }
        }
        SaveAction::Update(id, dto) => {
            log::debug!("Updating catalogue {}: {:?}", id, dto);
            match api.update(id, &dto).await {
                Ok(()) => reload_after(api, Notice::Updated).await,
                Err(e) => {
                    log::error!("Failed to update catalogue {}: {}", id, e);
                    MutationOutcome::failed(Notice::UpdateFailed)
                }
            }
        }
    }
}

/// Удаление; подтверждение запрашивает вызывающий
pub async fn remove<A: CatalogueApi>(api: &A, id: i64) -> MutationOutcome {
    log::debug!("Deleting catalogue {}", id);
    match api.delete(id).await {
        Ok(()) => reload_after(api, Notice::Deleted).await,
        Err(e) => {
            log::error!("Failed to delete catalogue {}: {}", id, e);
            MutationOutcome::failed(Notice::DeleteFailed)
        }
    }
}

async fn reload_after<A: CatalogueApi>(api: &A, notice: Notice) -> MutationOutcome {
    MutationOutcome {
        notice,
        reload: Some(load_all(api).await),
    }
}
