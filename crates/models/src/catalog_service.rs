//! Service catalog entity (`service` table).
use sea_orm::{entity::prelude::*, sea_query::OnConflict, ConnectionTrait, FromQueryResult, PaginatorTrait, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::service_request;

/// Default catalog, inserted in this order when the catalog is empty.
pub const SEED_SERVICES: [(&str, &str); 4] = [
    ("Web Hosting", "Managed hosting for websites and web applications"),
    ("File Cloud", "Secure cloud storage and file sharing"),
    ("Application Server", "Dedicated runtime environment for your applications"),
    ("CI / CD", "Automated build, test and deployment pipelines"),
];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { ServiceRequest }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::ServiceRequest => Entity::has_many(service_request::Entity).into() }
    }
}

impl Related<service_request::Entity> for Entity {
    fn to() -> RelationDef { Relation::ServiceRequest.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Public projection of a catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct ServiceListing {
    pub id: i32,
    pub name: String,
    pub description: String,
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, errors::ModelError> {
    Entity::find().count(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// All services, ordered by name ascending.
pub async fn list_by_name<C: ConnectionTrait>(db: &C) -> Result<Vec<ServiceListing>, errors::ModelError> {
    Entity::find()
        .select_only()
        .columns([Column::Id, Column::Name, Column::Description])
        .order_by_asc(Column::Name)
        .into_model::<ServiceListing>()
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, errors::ModelError> {
    let found = Entity::find_by_id(id).one(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(found.is_some())
}

/// Bulk insert of `entries` in one statement. Names that already exist are
/// skipped; returns the number of rows actually inserted.
pub async fn insert_many_ignoring_existing<C: ConnectionTrait>(db: &C, entries: &[(&str, &str)]) -> Result<u64, errors::ModelError> {
    if entries.is_empty() { return Ok(0); }
    let rows = entries.iter().map(|(name, description)| ActiveModel {
        name: Set((*name).to_owned()),
        description: Set((*description).to_owned()),
        ..Default::default()
    });
    Entity::insert_many(rows)
        .on_conflict(OnConflict::column(Column::Name).do_nothing().to_owned())
        .exec_without_returning(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
