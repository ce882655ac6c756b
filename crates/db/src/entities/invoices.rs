//! `SeaORM` Entity for the invoices table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::InvoiceStatus;

/// A school payment invoice. The generated invoice id is the primary key.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    /// Generated invoice id (`INV-YYYYMMDD-XXXXXX`).
    #[sea_orm(primary_key, auto_increment = false)]
    pub invoice_id: String,
    /// Billing school.
    pub school_id: Uuid,
    /// Billed student.
    pub student_id: Uuid,
    /// Level the invoice bills fees for.
    pub level: String,
    /// Date the invoice was created.
    pub invoice_date: Date,
    /// Date payment is due.
    pub due_date: Date,
    /// Total amount in kobo, recomputed from constituent fee lines.
    pub total_kobo: i64,
    /// Settlement status.
    pub status: InvoiceStatus,
    /// Row creation time.
    pub created_at: DateTimeUtc,
    /// Last update time.
    pub updated_at: DateTimeUtc,
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
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Students,
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
    #[sea_orm(has_many = "super::invoice_optional_fees::Entity")]
    InvoiceOptionalFees,
}

impl Related<super::schools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schools.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
