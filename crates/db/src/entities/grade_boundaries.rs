//! `SeaORM` Entity for the grade_boundaries table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A grade boundary within a grading scale.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "grade_boundaries")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning grading scale.
    pub grading_scale_id: Uuid,
    /// Grade label (e.g. "A"); unique per scale.
    pub grade: String,
    /// Minimum score for this grade.
    pub lower_bound: i16,
    /// Maximum score for this grade.
    pub upper_bound: i16,
    /// Row creation time.
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::grading_scales::Entity",
        from = "Column::GradingScaleId",
        to = "super::grading_scales::Column::Id"
    )]
    GradingScales,
}

impl Related<super::grading_scales::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GradingScales.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
