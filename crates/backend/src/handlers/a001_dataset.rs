use axum::extract::rejection::JsonRejection;
use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_dataset::aggregate::{Dataset, DatasetId};
use contracts::domain::common::AggregateId;
use contracts::shared::filters::{DatasetPage, DatasetQuery, FilterConfig};
use serde_json::json;

use crate::domain::a001_dataset;

/// GET /api/a001/datasets
pub async fn list_all() -> Result<Json<Vec<Dataset>>, StatusCode> {
    a001_dataset::service::list_all()
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Failed to list datasets: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// GET /api/a001/datasets/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Dataset>, StatusCode> {
    let dataset_id = DatasetId::from_string(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    a001_dataset::service::get_by_id(dataset_id.value())
        .await
        .map_err(|e| {
            tracing::error!("Failed to get dataset {}: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// POST /api/a001/datasets/query
///
/// A body that is not a valid `DatasetQuery` is answered with 400.
pub async fn query(
    payload: Result<Json<DatasetQuery>, JsonRejection>,
) -> Result<Json<DatasetPage>, StatusCode> {
    let Json(query) = payload.map_err(|rejection| {
        tracing::warn!("Malformed dataset query: {}", rejection.body_text());
        StatusCode::BAD_REQUEST
    })?;
    a001_dataset::service::query(query)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Failed to query datasets: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// GET /api/a001/datasets/filters
pub async fn filters() -> Json<Vec<FilterConfig>> {
    Json(a001_dataset::service::filters())
}

/// POST /api/a001/datasets/testdata
pub async fn insert_test_data() -> Result<Json<serde_json::Value>, StatusCode> {
    match a001_dataset::service::insert_test_data().await {
        Ok(inserted) => Ok(Json(json!({ "inserted": inserted }))),
        Err(e) => {
            tracing::error!("Failed to insert test datasets: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::initialize_database;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::Request;

    async fn query_request(body: &'static str) -> Result<Json<DatasetQuery>, JsonRejection> {
        let request = Request::builder()
            .method("POST")
            .uri("/api/a001/datasets/query")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        Json::<DatasetQuery>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn test_get_by_id_rejects_malformed_id() {
        let status = get_by_id(Path("not-a-uuid".to_string())).await.err();
        assert_eq!(status, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_get_by_id_missing_record_is_not_found() {
        let db_path = std::env::temp_dir().join(format!(
            "explore_data_handlers_{}.db",
            std::process::id()
        ));
        // Another test may have opened the shared connection already
        let _ = initialize_database(&db_path).await;

        let status = get_by_id(Path(uuid::Uuid::new_v4().to_string()))
            .await
            .err();
        assert_eq!(status, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_query_rejects_wrong_field_types() {
        let payload = query_request(r#"{"page":"x"}"#).await;
        assert!(payload.is_err());
        let status = query(payload).await.err();
        assert_eq!(status, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_query_rejects_invalid_json() {
        let status = query(query_request("{not json").await).await.err();
        assert_eq!(status, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_query_body_defaults() {
        let Json(parsed) = query_request(r#"{"search":"eels"}"#).await.unwrap();
        assert_eq!(parsed.search, "eels");
        assert_eq!(parsed.page, 0);
        assert_eq!(parsed.sort_field, "name");
    }
}
