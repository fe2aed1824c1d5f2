use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Каталог в том виде, в котором его отдаёт сервер
///
/// Даты хранятся строками как пришли с сервера (ISO или HTTP-date),
/// форматирование выполняется на стороне UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    #[serde(rename = "catalogue_id")]
    pub id: i64,

    #[serde(rename = "catalogue_name")]
    pub name: String,

    #[serde(rename = "catalogue_description", default)]
    pub description: String,

    pub effective_from: String,
    pub effective_to: String,
    pub status: String,
}

// ============================================================================
// DTO
// ============================================================================

/// Тело запроса POST/PUT `/catalogues`, заодно модель формы
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueDto {
    #[serde(rename = "catalogue_name")]
    pub name: String,

    #[serde(rename = "catalogue_description")]
    pub description: String,

    pub effective_from: String,
    pub effective_to: String,
    pub status: String,
}

impl CatalogueDto {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        effective_from: impl Into<String>,
        effective_to: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            effective_from: effective_from.into(),
            effective_to: effective_to.into(),
            status: status.into(),
        }
    }

    /// Собрать запись с присвоенным сервером id
    pub fn into_catalogue(self, id: i64) -> Catalogue {
        Catalogue {
            id,
            name: self.name,
            description: self.description,
            effective_from: self.effective_from,
            effective_to: self.effective_to,
            status: self.status,
        }
    }
}
