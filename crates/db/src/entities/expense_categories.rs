//! `SeaORM` Entity for the expense_categories table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A category schools record expenses under.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "expense_categories")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning school.
    pub school_id: Uuid,
    /// Category name (e.g. "Salaries"); unique per school.
    pub name: String,
    /// Category description.
    pub description: String,
    /// Row creation time.
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::schools::Entity",
        from = "Column::SchoolId",
        to = "super::schools::Column::Id"
    )]
    Schools,
    #[sea_orm(has_many = "super::school_expenses::Entity")]
    SchoolExpenses,
}

impl Related<super::school_expenses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchoolExpenses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
