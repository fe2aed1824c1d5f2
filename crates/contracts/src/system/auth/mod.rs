use serde::{Deserialize, Serialize};

/// Ответ `POST /logout`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoutResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl LogoutResponse {
    pub const DEFAULT_MESSAGE: &'static str = "Logged out";

    /// Сообщение сервера или стандартный текст, если сервер ничего не прислал
    pub fn message_or_default(&self) -> &str {
        match self.message.as_deref() {
            Some(m) if !m.trim().is_empty() => m,
            _ => Self::DEFAULT_MESSAGE,
        }
    }
}

/// Тело ошибки, которое сервер отдаёт вместо записи (`{"error": "..."}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}
