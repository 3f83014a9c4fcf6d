use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::service_request;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub token: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ServiceRequest,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::ServiceRequest => Entity::has_many(service_request::Entity).into() }
    }
}

impl Related<service_request::Entity> for Entity {
    fn to() -> RelationDef { Relation::ServiceRequest.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    if !email.contains('@') { return Err(errors::ModelError::Validation("invalid email".into())); }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, email: &str, name: &str, token: &str) -> Result<Model, errors::ModelError> {
    validate_email(email)?;
    validate_name(name)?;
    if token.is_empty() { return Err(errors::ModelError::Validation("token required".into())); }
    let am = ActiveModel {
        email: Set(email.to_string()),
        name: Set(name.to_string()),
        token: Set(token.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Exact match on both id and token.
pub async fn find_by_credentials(db: &DatabaseConnection, id: i32, token: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Id.eq(id))
        .filter(Column::Token.eq(token))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
