use super::{repository, test_data};
use contracts::domain::a001_dataset::aggregate::{Dataset, DatasetDto};
use contracts::domain::a001_dataset::filter_configs;
use contracts::shared::filters::{apply_query, DatasetPage, DatasetQuery, FilterConfig};
use uuid::Uuid;

/// Create a dataset from a DTO
pub async fn create(dto: DatasetDto) -> anyhow::Result<Uuid> {
    let aggregate = Dataset::new_for_insert(dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::insert(&aggregate).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Dataset>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Dataset>> {
    repository::list_all().await
}

/// Filter definitions the catalog understands
pub fn filters() -> Vec<FilterConfig> {
    filter_configs()
}

/// Search, filter, sort and paginate the catalog
pub async fn query(query: DatasetQuery) -> anyhow::Result<DatasetPage> {
    let records = repository::list_all().await?;
    let page = apply_query(records, &query, &filter_configs());
    tracing::debug!(
        "Dataset query search={:?} filters={} -> {} of {}",
        query.search,
        query.filters.active_count(),
        page.items.len(),
        page.total_count
    );
    Ok(page)
}

/// Insert the demo catalog
pub async fn insert_test_data() -> anyhow::Result<usize> {
    let data = test_data::demo_catalog();
    let total = data.len();
    for dto in data {
        create(dto).await?;
    }
    Ok(total)
}

/// Insert the demo catalog only when no datasets are stored yet
pub async fn seed_if_empty() -> anyhow::Result<()> {
    let existing = repository::count().await?;
    if existing > 0 {
        tracing::info!("Dataset catalog holds {} records, seeding skipped", existing);
        return Ok(());
    }
    let inserted = insert_test_data().await?;
    tracing::info!("Seeded dataset catalog with {} records", inserted);
    Ok(())
}
