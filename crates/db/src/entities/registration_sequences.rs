//! `SeaORM` Entity for the registration_sequences counter table.
//!
//! One row per school type, incremented atomically inside the
//! school-create transaction. The three rows are seeded by the initial
//! migration.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-school-type registration number counter.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "registration_sequences")]
pub struct Model {
    /// School type key ("public", "private", "community").
    #[sea_orm(primary_key, auto_increment = false)]
    pub school_type: String,
    /// Last sequence value handed out.
    pub last_value: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
