//! `SeaORM` Entity for the grading_scales table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A named grading scale.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "grading_scales")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Scale name (e.g. "Standard Scale").
    pub scale_name: String,
    /// Scale description.
    pub description: String,
    /// Row creation time.
    pub created_at: DateTimeUtc,
    /// Last update time.
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::grade_boundaries::Entity")]
    GradeBoundaries,
}

impl Related<super::grade_boundaries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GradeBoundaries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
