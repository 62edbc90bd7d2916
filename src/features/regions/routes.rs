use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/api/regions/provinces", get(handlers::list_provinces))
        .route(
            "/api/regions/provinces/{id}/regencies",
            get(handlers::list_regencies_by_province),
        )
        .route(
            "/api/regions/regencies/{id}/districts",
            get(handlers::list_districts_by_regency),
        )
        // Dataset lifecycle
        .route("/api/regions/dataset", get(handlers::get_dataset_status))
        .route("/api/regions/dataset/reload", post(handlers::reload_dataset))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{loaded_region_service, FailingSource};

    async fn server() -> TestServer {
        TestServer::new(routes(loaded_region_service().await)).unwrap()
    }

    #[tokio::test]
    async fn test_list_provinces() {
        let response = server().await.get("/api/regions/provinces").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["data"][0], json!({"id": 1, "name": "DKI Jakarta"}));
    }

    #[tokio::test]
    async fn test_list_regencies_by_province() {
        let server = server().await;

        let response = server.get("/api/regions/provinces/2/regencies").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["data"][0]["provinceId"], 2);

        let response = server
            .get("/api/regions/provinces/2/regencies")
            .add_query_param("search", "band")
            .await;
        let body: Value = response.json();
        assert_eq!(body["data"], json!([{"id": 12, "name": "Bandung", "provinceId": 2}]));
    }

    #[tokio::test]
    async fn test_unknown_or_malformed_parent_is_empty() {
        let server = server().await;

        for path in [
            "/api/regions/provinces/99/regencies",
            "/api/regions/provinces/abc/regencies",
            "/api/regions/regencies/12/districts",
        ] {
            let response = server.get(path).await;
            response.assert_status_ok();
            let body: Value = response.json();
            assert_eq!(body["data"], json!([]), "path {}", path);
        }
    }

    #[tokio::test]
    async fn test_list_districts_by_regency() {
        let response = server()
            .await
            .get("/api/regions/regencies/10/districts")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        let names: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Kebayoran Lama", "Kebayoran Baru"]);
    }

    #[tokio::test]
    async fn test_dataset_status_and_failed_reload() {
        let service = Arc::new(RegionService::new(Box::new(FailingSource)));
        let server = TestServer::new(routes(Arc::clone(&service))).unwrap();

        let response = server.get("/api/regions/dataset").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["loaded"], false);

        let response = server.post("/api/regions/dataset/reload").await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = server.get("/api/regions/dataset").await.json();
        assert_eq!(
            body["data"]["lastError"],
            "Failed to fetch dataset: host unreachable"
        );

        let response = server.get("/api/regions/provinces/abc/regencies").await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_reload_dataset() {
        let response = server().await.post("/api/regions/dataset/reload").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["message"], "Region dataset reloaded");
        assert_eq!(body["data"]["districts"], 3);
    }
}
