//! `SeaORM` Entity for the invoice_optional_fees join table.
//!
//! Records which optional fee lines a parent or guardian selected for an
//! invoice; totals are recomputed from these plus the non-optional fees.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Selection of an optional fee on an invoice.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "invoice_optional_fees")]
pub struct Model {
    /// Invoice the selection belongs to.
    #[sea_orm(primary_key, auto_increment = false)]
    pub invoice_id: String,
    /// Selected optional fee line.
    #[sea_orm(primary_key, auto_increment = false)]
    pub fee_structure_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::invoices::Entity",
        from = "Column::InvoiceId",
        to = "super::invoices::Column::InvoiceId"
    )]
    Invoices,
    #[sea_orm(
        belongs_to = "super::fee_structures::Entity",
        from = "Column::FeeStructureId",
        to = "super::fee_structures::Column::Id"
    )]
    FeeStructures,
}

impl Related<super::invoices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
