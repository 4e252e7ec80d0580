use crate::shared::api_utils::api_url;
use contracts::domain::a001_dataset::aggregate::Dataset;
use contracts::shared::filters::{DatasetPage, DatasetQuery};
use gloo_net::http::{Request, Response};

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}

/// One page of datasets matching search, filters and sort
pub async fn query_datasets(query: &DatasetQuery) -> Result<DatasetPage, String> {
    let response = Request::post(&api_url("/api/a001/datasets/query"))
        .json(query)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn fetch_dataset(id: &str) -> Result<Dataset, String> {
    let response = Request::get(&api_url(&format!("/api/a001/datasets/{}", id)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}
