//! String-backed enum columns shared by the entities.
//!
//! Stored values match the canonical strings of the corresponding
//! `samses-core` types; conversions to and from the core enums live here so
//! repositories can hand rows straight to the policy layer.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};

/// Type of school ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum SchoolType {
    /// State-run school.
    #[sea_orm(string_value = "public")]
    Public,
    /// Privately owned school.
    #[sea_orm(string_value = "private")]
    Private,
    /// Community-run school.
    #[sea_orm(string_value = "community")]
    Community,
}

/// Program coverage of a school or session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(12))")]
pub enum Program {
    /// Primary school only.
    #[sea_orm(string_value = "primary")]
    #[serde(rename = "primary")]
    Primary,
    /// Junior secondary only.
    #[sea_orm(string_value = "jss")]
    #[serde(rename = "jss")]
    Jss,
    /// Senior secondary only.
    #[sea_orm(string_value = "sss")]
    #[serde(rename = "sss")]
    Sss,
    /// Primary plus junior secondary.
    #[sea_orm(string_value = "primary+jss")]
    #[serde(rename = "primary+jss")]
    PrimaryJss,
    /// Junior plus senior secondary.
    #[sea_orm(string_value = "jss+sss")]
    #[serde(rename = "jss+sss")]
    JssSss,
    /// Every program level.
    #[sea_orm(string_value = "all")]
    #[serde(rename = "all")]
    All,
}

/// Which class of schools an academic session governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "lowercase")]
pub enum SessionScope {
    /// Every school.
    #[sea_orm(string_value = "all")]
    All,
    /// Public schools.
    #[sea_orm(string_value = "public")]
    Public,
    /// Private schools.
    #[sea_orm(string_value = "private")]
    Private,
    /// Community schools.
    #[sea_orm(string_value = "community")]
    Community,
    /// One explicitly referenced school.
    #[sea_orm(string_value = "individual")]
    Individual,
}

/// Lifecycle status of an academic session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Announced, not started.
    #[sea_orm(string_value = "upcoming")]
    Upcoming,
    /// Currently running.
    #[sea_orm(string_value = "ongoing")]
    Ongoing,
    /// Ended.
    #[sea_orm(string_value = "completed")]
    Completed,
}

/// Student gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum Gender {
    /// Male.
    #[sea_orm(string_value = "M")]
    #[serde(rename = "M")]
    Male,
    /// Female.
    #[sea_orm(string_value = "F")]
    #[serde(rename = "F")]
    Female,
}

/// How a student entered the school for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentMode {
    /// First enrollment.
    #[sea_orm(string_value = "fresh")]
    Fresh,
    /// Transferred in from another school.
    #[sea_orm(string_value = "transfer")]
    Transfer,
    /// Continuing from a previous session.
    #[sea_orm(string_value = "returning")]
    Returning,
}

/// Category of a ministry subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum SubjectCategory {
    /// Core curriculum subject.
    #[sea_orm(string_value = "core")]
    Core,
    /// Religious studies subject.
    #[sea_orm(string_value = "religious")]
    Religious,
    /// Vocational subject.
    #[sea_orm(string_value = "vocational")]
    Vocational,
    /// Local language subject.
    #[sea_orm(string_value = "local_language")]
    LocalLanguage,
}

/// Type of fee charged by a school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum FeeType {
    /// Tuition fee.
    #[sea_orm(string_value = "tuition")]
    Tuition,
    /// Registration fee.
    #[sea_orm(string_value = "registration")]
    Registration,
    /// Examination fee.
    #[sea_orm(string_value = "exam")]
    Exam,
    /// Data management fee.
    #[sea_orm(string_value = "data_management")]
    DataManagement,
    /// Sports fee.
    #[sea_orm(string_value = "sports")]
    Sports,
    /// Laboratory fee.
    #[sea_orm(string_value = "laboratory")]
    Laboratory,
    /// Extra lesson fee.
    #[sea_orm(string_value = "extra_lesson")]
    ExtraLesson,
    /// Field trip fee.
    #[sea_orm(string_value = "field_trip")]
    FieldTrip,
    /// Graduation fee.
    #[sea_orm(string_value = "graduation")]
    Graduation,
    /// Any other fee.
    #[sea_orm(string_value = "other")]
    Other,
}

/// Settlement status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// No payment received.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Paid in part.
    #[sea_orm(string_value = "partial")]
    Partial,
    /// Fully settled.
    #[sea_orm(string_value = "paid")]
    Paid,
    /// Unsettled past the due date.
    #[sea_orm(string_value = "overdue")]
    Overdue,
}

/// Payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(15))")]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash payment.
    #[sea_orm(string_value = "cash")]
    Cash,
    /// Bank check.
    #[sea_orm(string_value = "check")]
    Check,
    /// Online payment.
    #[sea_orm(string_value = "online")]
    Online,
    /// Bank transfer.
    #[sea_orm(string_value = "bank_transfer")]
    BankTransfer,
    /// Point-of-sale terminal.
    #[sea_orm(string_value = "pos")]
    Pos,
}

/// Accreditation state of a school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum AccreditationState {
    /// Awaiting accreditation.
    #[sea_orm(string_value = "awaiting")]
    Awaiting,
    /// Accredited.
    #[sea_orm(string_value = "accredited")]
    Accredited,
    /// Not accredited.
    #[sea_orm(string_value = "not_accredited")]
    NotAccredited,
    /// Accreditation cancelled.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// Kind of administrative stoppage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "lowercase")]
pub enum SuspensionKind {
    /// Temporary suspension.
    #[sea_orm(string_value = "suspension")]
    Suspension,
    /// Full closure.
    #[sea_orm(string_value = "closure")]
    Closure,
}

impl SuspensionKind {
    /// Display label used in school status strings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Suspension => "Suspension",
            Self::Closure => "Closure",
        }
    }
}

/// Type of laboratory facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(15))")]
#[serde(rename_all = "lowercase")]
pub enum LabType {
    /// Physics laboratory.
    #[sea_orm(string_value = "physics")]
    Physics,
    /// Chemistry laboratory.
    #[sea_orm(string_value = "chemistry")]
    Chemistry,
    /// Biology laboratory.
    #[sea_orm(string_value = "biology")]
    Biology,
    /// Robotics laboratory.
    #[sea_orm(string_value = "robotics")]
    Robotics,
}

// Conversions between column enums and the policy-layer types.

impl From<SchoolType> for samses_core::calendar::SchoolType {
    fn from(value: SchoolType) -> Self {
        match value {
            SchoolType::Public => Self::Public,
            SchoolType::Private => Self::Private,
            SchoolType::Community => Self::Community,
        }
    }
}

impl From<samses_core::calendar::SchoolType> for SchoolType {
    fn from(value: samses_core::calendar::SchoolType) -> Self {
        match value {
            samses_core::calendar::SchoolType::Public => Self::Public,
            samses_core::calendar::SchoolType::Private => Self::Private,
            samses_core::calendar::SchoolType::Community => Self::Community,
        }
    }
}

impl From<Program> for samses_core::calendar::Program {
    fn from(value: Program) -> Self {
        match value {
            Program::Primary => Self::Primary,
            Program::Jss => Self::Jss,
            Program::Sss => Self::Sss,
            Program::PrimaryJss => Self::PrimaryJss,
            Program::JssSss => Self::JssSss,
            Program::All => Self::All,
        }
    }
}

impl From<samses_core::calendar::Program> for Program {
    fn from(value: samses_core::calendar::Program) -> Self {
        match value {
            samses_core::calendar::Program::Primary => Self::Primary,
            samses_core::calendar::Program::Jss => Self::Jss,
            samses_core::calendar::Program::Sss => Self::Sss,
            samses_core::calendar::Program::PrimaryJss => Self::PrimaryJss,
            samses_core::calendar::Program::JssSss => Self::JssSss,
            samses_core::calendar::Program::All => Self::All,
        }
    }
}

impl From<SessionScope> for samses_core::calendar::SessionScope {
    fn from(value: SessionScope) -> Self {
        match value {
            SessionScope::All => Self::All,
            SessionScope::Public => Self::Public,
            SessionScope::Private => Self::Private,
            SessionScope::Community => Self::Community,
            SessionScope::Individual => Self::Individual,
        }
    }
}

impl From<samses_core::calendar::SessionScope> for SessionScope {
    fn from(value: samses_core::calendar::SessionScope) -> Self {
        match value {
            samses_core::calendar::SessionScope::All => Self::All,
            samses_core::calendar::SessionScope::Public => Self::Public,
            samses_core::calendar::SessionScope::Private => Self::Private,
            samses_core::calendar::SessionScope::Community => Self::Community,
            samses_core::calendar::SessionScope::Individual => Self::Individual,
        }
    }
}

impl From<SessionStatus> for samses_core::calendar::SessionStatus {
    fn from(value: SessionStatus) -> Self {
        match value {
            SessionStatus::Upcoming => Self::Upcoming,
            SessionStatus::Ongoing => Self::Ongoing,
            SessionStatus::Completed => Self::Completed,
        }
    }
}

impl From<samses_core::calendar::SessionStatus> for SessionStatus {
    fn from(value: samses_core::calendar::SessionStatus) -> Self {
        match value {
            samses_core::calendar::SessionStatus::Upcoming => Self::Upcoming,
            samses_core::calendar::SessionStatus::Ongoing => Self::Ongoing,
            samses_core::calendar::SessionStatus::Completed => Self::Completed,
        }
    }
}

impl From<InvoiceStatus> for samses_core::finance::InvoiceStatus {
    fn from(value: InvoiceStatus) -> Self {
        match value {
            InvoiceStatus::Pending => Self::Pending,
            InvoiceStatus::Partial => Self::Partial,
            InvoiceStatus::Paid => Self::Paid,
            InvoiceStatus::Overdue => Self::Overdue,
        }
    }
}

impl From<samses_core::finance::InvoiceStatus> for InvoiceStatus {
    fn from(value: samses_core::finance::InvoiceStatus) -> Self {
        match value {
            samses_core::finance::InvoiceStatus::Pending => Self::Pending,
            samses_core::finance::InvoiceStatus::Partial => Self::Partial,
            samses_core::finance::InvoiceStatus::Paid => Self::Paid,
            samses_core::finance::InvoiceStatus::Overdue => Self::Overdue,
        }
    }
}
