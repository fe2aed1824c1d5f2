/// Известные статусы каталога
///
/// Сервер хранит статус свободной строкой, поэтому фильтрация в UI идёт
/// по точному совпадению строки, а этот enum задаёт только варианты выбора.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogueStatus {
    Active,
    Inactive,
    Upcoming,
    Expired,
}

impl CatalogueStatus {
    /// Код статуса, как он передаётся по сети
    pub fn code(&self) -> &'static str {
        match self {
            CatalogueStatus::Active => "active",
            CatalogueStatus::Inactive => "inactive",
            CatalogueStatus::Upcoming => "upcoming",
            CatalogueStatus::Expired => "expired",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CatalogueStatus::Active => "Active",
            CatalogueStatus::Inactive => "Inactive",
            CatalogueStatus::Upcoming => "Upcoming",
            CatalogueStatus::Expired => "Expired",
        }
    }

    pub fn all() -> Vec<CatalogueStatus> {
        vec![
            CatalogueStatus::Active,
            CatalogueStatus::Inactive,
            CatalogueStatus::Upcoming,
            CatalogueStatus::Expired,
        ]
    }
}
