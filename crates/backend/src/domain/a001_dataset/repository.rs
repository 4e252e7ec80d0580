use chrono::Utc;
use contracts::domain::a001_dataset::aggregate::{Dataset, DatasetId};
use contracts::domain::common::EntityMetadata;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_dataset")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: String,
    pub measurement_type: String,
    pub detector: String,
    pub voltage_kv: f64,
    pub file_size_mb: f64,
    pub sample: String,
    pub acquired_at: Option<chrono::DateTime<chrono::Utc>>,
    pub file_path: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Dataset {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| {
            tracing::warn!("Dataset row has malformed id {}", m.id);
            Uuid::nil()
        });

        Dataset {
            id: DatasetId(uuid),
            code: m.code,
            name: m.name,
            description: m.description,
            measurement_type: m.measurement_type,
            detector: m.detector,
            voltage_kv: m.voltage_kv,
            file_size_mb: m.file_size_mb,
            sample: m.sample,
            acquired_at: m.acquired_at,
            file_path: m.file_path,
            metadata,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Dataset>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::Name)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Dataset>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into).filter(|d: &Dataset| !d.metadata.is_deleted))
}

pub async fn count() -> anyhow::Result<u64> {
    let total = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?;
    Ok(total)
}

pub async fn insert(aggregate: &Dataset) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(aggregate.code.clone()),
        name: Set(aggregate.name.clone()),
        description: Set(aggregate.description.clone()),
        measurement_type: Set(aggregate.measurement_type.clone()),
        detector: Set(aggregate.detector.clone()),
        voltage_kv: Set(aggregate.voltage_kv),
        file_size_mb: Set(aggregate.file_size_mb),
        sample: Set(aggregate.sample.clone()),
        acquired_at: Set(aggregate.acquired_at),
        file_path: Set(aggregate.file_path.clone()),
        is_deleted: Set(aggregate.metadata.is_deleted),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}
