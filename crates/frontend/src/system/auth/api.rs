use contracts::system::auth::LogoutResponse;
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_url;

pub const LOGOUT_PATH: &str = "/logout";

/// Logout (terminate server session)
///
/// Любой HTTP-ответ считается завершением сессии; тело разбирается
/// по возможности, ошибкой считается только сбой транспорта.
pub async fn logout() -> Result<LogoutResponse, String> {
    let response = Request::post(&api_url(LOGOUT_PATH))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        log::warn!("Logout returned HTTP {}", response.status());
    }

    Ok(response.json::<LogoutResponse>().await.unwrap_or_default())
}
