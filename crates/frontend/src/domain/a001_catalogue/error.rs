use thiserror::Error;

/// Ошибки операций с каталогами
///
/// UI различает только "не найдено", ошибки ввода id и всё остальное
/// ("операция не удалась"): `Http`, `Transport` и `Decode` обрабатываются одинаково.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    #[error("Please enter a valid ID")]
    EmptyId,

    #[error("Invalid catalogue ID: {0}")]
    InvalidId(String),

    #[error("Catalogue not found")]
    NotFound,

    #[error("HTTP {0}")]
    Http(u16),

    #[error("Failed to send request: {0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl CatalogueError {
    /// Ошибка обнаружена до отправки запроса
    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogueError::EmptyId | CatalogueError::InvalidId(_))
    }
}
