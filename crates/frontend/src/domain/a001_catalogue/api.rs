//! Catalogue REST client
//!
//! `GET/POST /catalogues`, `GET/PUT/DELETE /catalogues/{id}`.
//! Все запросы идут с `credentials: include`, сессия живёт в cookie.

use super::error::CatalogueError;
use crate::shared::api_utils::{api_url, join_url};
use contracts::domain::a001_catalogue::aggregate::{Catalogue, CatalogueDto};
use contracts::system::auth::ApiErrorResponse;
use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::RequestCredentials;

pub const CATALOGUES_PATH: &str = "/catalogues";

/// Remote catalogue collection
#[allow(async_fn_in_trait)]
pub trait CatalogueApi {
    /// Whole collection in server order (oldest first)
    async fn fetch_all(&self) -> Result<Vec<Catalogue>, CatalogueError>;

    async fn fetch_by_id(&self, id: i64) -> Result<Catalogue, CatalogueError>;

    async fn create(&self, dto: &CatalogueDto) -> Result<(), CatalogueError>;

    async fn update(&self, id: i64, dto: &CatalogueDto) -> Result<(), CatalogueError>;

    async fn delete(&self, id: i64) -> Result<(), CatalogueError>;
}

#[derive(Debug, Clone)]
pub struct HttpCatalogueApi {
    collection_url: String,
}

impl HttpCatalogueApi {
    pub fn new() -> Self {
        Self {
            collection_url: api_url(CATALOGUES_PATH),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            collection_url: join_url(base_url, CATALOGUES_PATH),
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    pub fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.collection_url, id)
    }
}

impl Default for HttpCatalogueApi {
    fn default() -> Self {
        Self::new()
    }
}

fn with_session(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::Include)
}

fn transport(e: gloo_net::Error) -> CatalogueError {
    CatalogueError::Transport(e.to_string())
}

async fn read_body(response: Response) -> Result<(u16, String), CatalogueError> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    Ok((status, body))
}

impl CatalogueApi for HttpCatalogueApi {
    async fn fetch_all(&self) -> Result<Vec<Catalogue>, CatalogueError> {
        log::debug!("GET {}", self.collection_url);
        let response = with_session(Request::get(&self.collection_url))
            .send()
            .await
            .map_err(transport)?;
        let (status, body) = read_body(response).await?;
        parse_collection(status, &body)
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Catalogue, CatalogueError> {
        let url = self.item_url(id);
        log::debug!("GET {}", url);
        let response = with_session(Request::get(&url))
            .send()
            .await
            .map_err(transport)?;
        let (status, body) = read_body(response).await?;
        parse_single(status, &body)
    }

    async fn create(&self, dto: &CatalogueDto) -> Result<(), CatalogueError> {
        log::debug!("POST {}", self.collection_url);
        let request = with_session(Request::post(&self.collection_url))
            .json(dto)
            .map_err(|e| CatalogueError::Transport(format!("Failed to serialize request: {}", e)))?;
        let response = request.send().await.map_err(transport)?;
        check_status(response.status())
    }

    async fn update(&self, id: i64, dto: &CatalogueDto) -> Result<(), CatalogueError> {
        let url = self.item_url(id);
        log::debug!("PUT {}", url);
        let request = with_session(Request::put(&url))
            .json(dto)
            .map_err(|e| CatalogueError::Transport(format!("Failed to serialize request: {}", e)))?;
        let response = request.send().await.map_err(transport)?;
        check_status(response.status())
    }

    async fn delete(&self, id: i64) -> Result<(), CatalogueError> {
        let url = self.item_url(id);
        log::debug!("DELETE {}", url);
        let response = with_session(Request::delete(&url))
            .send()
            .await
            .map_err(transport)?;
        check_status(response.status())
    }
}

// ============================================================================
// Response interpretation
// ============================================================================

/// 2xx → Ok, всё остальное → `Http(status)`
pub fn check_status(status: u16) -> Result<(), CatalogueError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(CatalogueError::Http(status))
    }
}

pub fn parse_collection(status: u16, body: &str) -> Result<Vec<Catalogue>, CatalogueError> {
    check_status(status)?;
    serde_json::from_str(body).map_err(|e| CatalogueError::Decode(e.to_string()))
}

/// Одна запись: 404 или тело `{"error": ...}` означают "не найдено"
pub fn parse_single(status: u16, body: &str) -> Result<Catalogue, CatalogueError> {
    if status == 404 || serde_json::from_str::<ApiErrorResponse>(body).is_ok() {
        return Err(CatalogueError::NotFound);
    }
    check_status(status)?;
    serde_json::from_str(body).map_err(|e| CatalogueError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{"catalogue_id": 3, "catalogue_name": "Spring",
        "catalogue_description": "New arrivals", "effective_from": "2024-03-01",
        "effective_to": "2024-05-31", "status": "active"}"#;

    #[test]
    fn test_check_status() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(201), Ok(()));
        assert_eq!(check_status(401), Err(CatalogueError::Http(401)));
        assert_eq!(check_status(500), Err(CatalogueError::Http(500)));
    }

    #[test]
    fn test_parse_collection() {
        let body = format!("[{}]", RECORD);
        let records = parse_collection(200, &body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 3);

        assert_eq!(
            parse_collection(401, r#"{"error": "Unauthorized"}"#),
            Err(CatalogueError::Http(401))
        );
        assert!(matches!(
            parse_collection(200, "<html>"),
            Err(CatalogueError::Decode(_))
        ));
    }

    #[test]
    fn test_parse_single_record() {
        let c = parse_single(200, RECORD).unwrap();
        assert_eq!(c.name, "Spring");
        assert_eq!(c.status, "active");
    }

    #[test]
    fn test_parse_single_error_payload_is_not_found() {
        assert_eq!(
            parse_single(404, r#"{"error": "Catalogue not found"}"#),
            Err(CatalogueError::NotFound)
        );
        assert_eq!(
            parse_single(200, r#"{"error": "Catalogue not found"}"#),
            Err(CatalogueError::NotFound)
        );
        assert_eq!(parse_single(404, "Not Found"), Err(CatalogueError::NotFound));
    }

    #[test]
    fn test_parse_single_server_error() {
        assert_eq!(
            parse_single(500, "Internal Server Error"),
            Err(CatalogueError::Http(500))
        );
    }

    #[test]
    fn test_item_url() {
        let api = HttpCatalogueApi::with_base_url("http://localhost:5000/");
        assert_eq!(api.collection_url(), "http://localhost:5000/catalogues");
        assert_eq!(api.item_url(12), "http://localhost:5000/catalogues/12");
    }
}
