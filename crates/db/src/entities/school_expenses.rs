//! `SeaORM` Entity for the school_expenses table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An expense a school recorded. Amounts are kobo.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "school_expenses")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Spending school.
    pub school_id: Uuid,
    /// Expense category.
    pub category_id: Uuid,
    /// Details of the expense.
    pub description: String,
    /// Amount spent in kobo.
    pub amount_kobo: i64,
    /// Date the expense was incurred.
    pub date_incurred: Date,
    /// Generated receipt number (`EXP-` + 12 hex), unique.
    pub receipt_number: String,
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
    #[sea_orm(
        belongs_to = "super::expense_categories::Entity",
        from = "Column::CategoryId",
        to = "super::expense_categories::Column::Id"
    )]
    ExpenseCategories,
}

impl Related<super::schools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schools.def()
    }
}

impl Related<super::expense_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpenseCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
