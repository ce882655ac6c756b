//! Initial database migration.
//!
//! Creates every table of the school records schema, the unique indexes
//! backing the identifier and unique-together invariants, and seeds the
//! registration number counters.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[allow(clippy::too_many_lines)]
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ============================================================
        // PART 1: SCHOOLS & REGISTRATION SEQUENCES
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Schools::Table)
                    .col(ColumnDef::new(Schools::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Schools::Name).string_len(255).not_null().unique_key())
                    .col(ColumnDef::new(Schools::Abbreviation).string_len(20))
                    .col(ColumnDef::new(Schools::Motto).string_len(255))
                    .col(ColumnDef::new(Schools::EstablishedDate).date())
                    .col(ColumnDef::new(Schools::SchoolType).string_len(20).not_null())
                    .col(ColumnDef::new(Schools::Program).string_len(12).not_null())
                    .col(ColumnDef::new(Schools::IsVocational).boolean().not_null().default(false))
                    .col(
                        ColumnDef::new(Schools::RegistrationNumber)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Schools::LogoPath).string())
                    .col(ColumnDef::new(Schools::Lga).string_len(50).not_null())
                    .col(ColumnDef::new(Schools::City).string_len(50))
                    .col(ColumnDef::new(Schools::Ward).string_len(50).not_null())
                    .col(ColumnDef::new(Schools::StreetAddress).text().not_null())
                    .col(ColumnDef::new(Schools::Phone).string_len(15).not_null())
                    .col(ColumnDef::new(Schools::Email).string_len(255))
                    .col(ColumnDef::new(Schools::Website).string_len(255))
                    .col(ColumnDef::new(Schools::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Schools::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RegistrationSequences::Table)
                    .col(
                        ColumnDef::new(RegistrationSequences::SchoolType)
                            .string_len(20)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RegistrationSequences::LastValue)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // PART 2: ACADEMIC CALENDAR
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(AcademicSessions::Table)
                    .col(ColumnDef::new(AcademicSessions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(AcademicSessions::Scope).string_len(10).not_null())
                    .col(ColumnDef::new(AcademicSessions::Program).string_len(12).not_null())
                    .col(ColumnDef::new(AcademicSessions::SchoolId).uuid())
                    .col(ColumnDef::new(AcademicSessions::SessionName).string_len(100).not_null())
                    .col(ColumnDef::new(AcademicSessions::Status).string_len(10).not_null())
                    .col(ColumnDef::new(AcademicSessions::StartDate).date().not_null())
                    .col(ColumnDef::new(AcademicSessions::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(AcademicSessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicSessions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_academic_sessions_school")
                            .from(AcademicSessions::Table, AcademicSessions::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_academic_sessions_identity")
                    .table(AcademicSessions::Table)
                    .col(AcademicSessions::SchoolId)
                    .col(AcademicSessions::SessionName)
                    .col(AcademicSessions::Program)
                    .col(AcademicSessions::Scope)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_academic_sessions_status")
                    .table(AcademicSessions::Table)
                    .col(AcademicSessions::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Terms::Table)
                    .col(ColumnDef::new(Terms::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Terms::AcademicSessionId).uuid().not_null())
                    .col(ColumnDef::new(Terms::TermNumber).small_integer().not_null())
                    .col(ColumnDef::new(Terms::StartDate).date().not_null())
                    .col(ColumnDef::new(Terms::EndDate).date().not_null())
                    .col(ColumnDef::new(Terms::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_terms_academic_session")
                            .from(Terms::Table, Terms::AcademicSessionId)
                            .to(AcademicSessions::Table, AcademicSessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_terms_session_number")
                    .table(Terms::Table)
                    .col(Terms::AcademicSessionId)
                    .col(Terms::TermNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // PART 3: OVERSIGHT
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(SuspensionClosures::Table)
                    .col(ColumnDef::new(SuspensionClosures::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(SuspensionClosures::SchoolId).uuid().not_null())
                    .col(
                        ColumnDef::new(SuspensionClosures::IsStatewide)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(SuspensionClosures::Kind).string_len(10).not_null())
                    .col(ColumnDef::new(SuspensionClosures::Reason).text().not_null())
                    .col(ColumnDef::new(SuspensionClosures::SuspendedFrom).date().not_null())
                    .col(ColumnDef::new(SuspensionClosures::SuspendedTo).date())
                    .col(
                        ColumnDef::new(SuspensionClosures::IsIndefinite)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(SuspensionClosures::IsDropped)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(SuspensionClosures::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SuspensionClosures::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_suspension_closures_school")
                            .from(SuspensionClosures::Table, SuspensionClosures::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AccreditationStatuses::Table)
                    .col(ColumnDef::new(AccreditationStatuses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(AccreditationStatuses::SchoolId).uuid().not_null())
                    .col(
                        ColumnDef::new(AccreditationStatuses::AccreditationNumber)
                            .string_len(15)
                            .unique_key(),
                    )
                    .col(ColumnDef::new(AccreditationStatuses::State).string_len(20).not_null())
                    .col(ColumnDef::new(AccreditationStatuses::ValidFrom).date())
                    .col(ColumnDef::new(AccreditationStatuses::ValidTo).date())
                    .col(
                        ColumnDef::new(AccreditationStatuses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accreditation_statuses_school")
                            .from(AccreditationStatuses::Table, AccreditationStatuses::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // PART 4: STUDENTS & ENROLLMENT
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .col(ColumnDef::new(Students::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Students::FirstName).string_len(25).not_null())
                    .col(ColumnDef::new(Students::LastName).string_len(25).not_null())
                    .col(
                        ColumnDef::new(Students::MiddleName)
                            .string_len(25)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Students::RegNum).string_len(11).not_null().unique_key())
                    .col(ColumnDef::new(Students::DateOfBirth).date().not_null())
                    .col(ColumnDef::new(Students::Gender).string_len(1).not_null())
                    .col(ColumnDef::new(Students::CountryOfBirth).string_len(25).not_null())
                    .col(ColumnDef::new(Students::StateOfOrigin).string_len(25).not_null())
                    .col(ColumnDef::new(Students::PlaceOfBirth).string_len(25).not_null())
                    .col(ColumnDef::new(Students::Address).text())
                    .col(ColumnDef::new(Students::Email).string_len(255))
                    .col(ColumnDef::new(Students::PhoneNumber).string_len(15))
                    .col(ColumnDef::new(Students::PassportPhotoPath).string())
                    .col(ColumnDef::new(Students::SchoolId).uuid())
                    .col(ColumnDef::new(Students::IsActive).boolean().not_null().default(true))
                    .col(ColumnDef::new(Students::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_school")
                            .from(Students::Table, Students::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_identity")
                    .table(Students::Table)
                    .col(Students::FirstName)
                    .col(Students::LastName)
                    .col(Students::DateOfBirth)
                    .col(Students::StateOfOrigin)
                    .col(Students::PlaceOfBirth)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_school")
                    .table(Students::Table)
                    .col(Students::SchoolId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AdmissionInfos::Table)
                    .col(ColumnDef::new(AdmissionInfos::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(AdmissionInfos::StudentId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(AdmissionInfos::SchoolId).uuid().not_null())
                    .col(
                        ColumnDef::new(AdmissionInfos::AdmissionNumber)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(AdmissionInfos::AdmissionDate).date().not_null())
                    .col(ColumnDef::new(AdmissionInfos::Level).string_len(50).not_null())
                    .col(
                        ColumnDef::new(AdmissionInfos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admission_infos_student")
                            .from(AdmissionInfos::Table, AdmissionInfos::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admission_infos_school")
                            .from(AdmissionInfos::Table, AdmissionInfos::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EnrollmentRecords::Table)
                    .col(ColumnDef::new(EnrollmentRecords::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(EnrollmentRecords::StudentId).uuid().not_null())
                    .col(ColumnDef::new(EnrollmentRecords::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(EnrollmentRecords::AcademicSessionId).uuid().not_null())
                    .col(ColumnDef::new(EnrollmentRecords::Level).string_len(50).not_null())
                    .col(ColumnDef::new(EnrollmentRecords::Stream).string_len(50))
                    .col(ColumnDef::new(EnrollmentRecords::Mode).string_len(10).not_null())
                    .col(ColumnDef::new(EnrollmentRecords::EnrollmentDate).date().not_null())
                    .col(
                        ColumnDef::new(EnrollmentRecords::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(EnrollmentRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_records_student")
                            .from(EnrollmentRecords::Table, EnrollmentRecords::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_records_school")
                            .from(EnrollmentRecords::Table, EnrollmentRecords::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_records_session")
                            .from(EnrollmentRecords::Table, EnrollmentRecords::AcademicSessionId)
                            .to(AcademicSessions::Table, AcademicSessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_enrollment_records_student_session")
                    .table(EnrollmentRecords::Table)
                    .col(EnrollmentRecords::StudentId)
                    .col(EnrollmentRecords::AcademicSessionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // PART 5: SUBJECT REPOSITORY
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .col(ColumnDef::new(Subjects::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Subjects::SubjectName).string_len(100).not_null())
                    .col(ColumnDef::new(Subjects::Category).string_len(20).not_null())
                    .col(ColumnDef::new(Subjects::Program).string_len(12).not_null())
                    .col(ColumnDef::new(Subjects::Description).text().not_null().default(""))
                    .col(ColumnDef::new(Subjects::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Subjects::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_subjects_name_program")
                    .table(Subjects::Table)
                    .col(Subjects::SubjectName)
                    .col(Subjects::Program)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SchoolSubjects::Table)
                    .col(ColumnDef::new(SchoolSubjects::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(SchoolSubjects::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(SchoolSubjects::SubjectId).uuid().not_null())
                    .col(
                        ColumnDef::new(SchoolSubjects::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(SchoolSubjects::IsCompulsory)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(SchoolSubjects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_subjects_school")
                            .from(SchoolSubjects::Table, SchoolSubjects::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_subjects_subject")
                            .from(SchoolSubjects::Table, SchoolSubjects::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_school_subjects_offering")
                    .table(SchoolSubjects::Table)
                    .col(SchoolSubjects::SchoolId)
                    .col(SchoolSubjects::SubjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // PART 6: GRADING
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(GradingScales::Table)
                    .col(ColumnDef::new(GradingScales::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(GradingScales::ScaleName)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(GradingScales::Description).text().not_null().default(""))
                    .col(
                        ColumnDef::new(GradingScales::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GradingScales::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GradeBoundaries::Table)
                    .col(ColumnDef::new(GradeBoundaries::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(GradeBoundaries::GradingScaleId).uuid().not_null())
                    .col(ColumnDef::new(GradeBoundaries::Grade).string_len(2).not_null())
                    .col(ColumnDef::new(GradeBoundaries::LowerBound).small_integer().not_null())
                    .col(ColumnDef::new(GradeBoundaries::UpperBound).small_integer().not_null())
                    .col(
                        ColumnDef::new(GradeBoundaries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grade_boundaries_scale")
                            .from(GradeBoundaries::Table, GradeBoundaries::GradingScaleId)
                            .to(GradingScales::Table, GradingScales::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_grade_boundaries_scale_grade")
                    .table(GradeBoundaries::Table)
                    .col(GradeBoundaries::GradingScaleId)
                    .col(GradeBoundaries::Grade)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // PART 7: FINANCE
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(FeeStructures::Table)
                    .col(ColumnDef::new(FeeStructures::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(FeeStructures::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(FeeStructures::Level).string_len(50).not_null())
                    .col(ColumnDef::new(FeeStructures::FeeType).string_len(20).not_null())
                    .col(
                        ColumnDef::new(FeeStructures::IsOptional)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(FeeStructures::AmountKobo).big_integer().not_null())
                    .col(ColumnDef::new(FeeStructures::Description).text().not_null().default(""))
                    .col(
                        ColumnDef::new(FeeStructures::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeeStructures::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fee_structures_school")
                            .from(FeeStructures::Table, FeeStructures::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_fee_structures_school_level_type")
                    .table(FeeStructures::Table)
                    .col(FeeStructures::SchoolId)
                    .col(FeeStructures::Level)
                    .col(FeeStructures::FeeType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Invoices::Table)
                    .col(
                        ColumnDef::new(Invoices::InvoiceId)
                            .string_len(20)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Invoices::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(Invoices::StudentId).uuid().not_null())
                    .col(ColumnDef::new(Invoices::Level).string_len(50).not_null())
                    .col(ColumnDef::new(Invoices::InvoiceDate).date().not_null())
                    .col(ColumnDef::new(Invoices::DueDate).date().not_null())
                    .col(ColumnDef::new(Invoices::TotalKobo).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Invoices::Status).string_len(10).not_null())
                    .col(ColumnDef::new(Invoices::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Invoices::UpdatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoices_school")
                            .from(Invoices::Table, Invoices::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoices_student")
                            .from(Invoices::Table, Invoices::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InvoiceOptionalFees::Table)
                    .col(ColumnDef::new(InvoiceOptionalFees::InvoiceId).string_len(20).not_null())
                    .col(ColumnDef::new(InvoiceOptionalFees::FeeStructureId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(InvoiceOptionalFees::InvoiceId)
                            .col(InvoiceOptionalFees::FeeStructureId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_optional_fees_invoice")
                            .from(InvoiceOptionalFees::Table, InvoiceOptionalFees::InvoiceId)
                            .to(Invoices::Table, Invoices::InvoiceId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_optional_fees_fee")
                            .from(InvoiceOptionalFees::Table, InvoiceOptionalFees::FeeStructureId)
                            .to(FeeStructures::Table, FeeStructures::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .col(ColumnDef::new(Payments::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Payments::InvoiceId).string_len(20).not_null())
                    .col(ColumnDef::new(Payments::AmountKobo).big_integer().not_null())
                    .col(ColumnDef::new(Payments::Method).string_len(15).not_null())
                    .col(ColumnDef::new(Payments::PaymentDate).date().not_null())
                    .col(
                        ColumnDef::new(Payments::ReceiptNumber)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Payments::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_invoice")
                            .from(Payments::Table, Payments::InvoiceId)
                            .to(Invoices::Table, Invoices::InvoiceId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExpenseCategories::Table)
                    .col(ColumnDef::new(ExpenseCategories::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(ExpenseCategories::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(ExpenseCategories::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(ExpenseCategories::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(ExpenseCategories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expense_categories_school")
                            .from(ExpenseCategories::Table, ExpenseCategories::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_expense_categories_school_name")
                    .table(ExpenseCategories::Table)
                    .col(ExpenseCategories::SchoolId)
                    .col(ExpenseCategories::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SchoolExpenses::Table)
                    .col(ColumnDef::new(SchoolExpenses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(SchoolExpenses::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(SchoolExpenses::CategoryId).uuid().not_null())
                    .col(ColumnDef::new(SchoolExpenses::Description).text().not_null())
                    .col(ColumnDef::new(SchoolExpenses::AmountKobo).big_integer().not_null())
                    .col(ColumnDef::new(SchoolExpenses::DateIncurred).date().not_null())
                    .col(
                        ColumnDef::new(SchoolExpenses::ReceiptNumber)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(SchoolExpenses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_expenses_school")
                            .from(SchoolExpenses::Table, SchoolExpenses::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_expenses_category")
                            .from(SchoolExpenses::Table, SchoolExpenses::CategoryId)
                            .to(ExpenseCategories::Table, ExpenseCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // PART 8: INFRASTRUCTURE INVENTORIES
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Classrooms::Table)
                    .col(ColumnDef::new(Classrooms::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Classrooms::SchoolId).uuid().not_null().unique_key())
                    .col(
                        ColumnDef::new(Classrooms::NumberOfClassrooms)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Classrooms::AvailabilityNotes)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Classrooms::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Classrooms::UpdatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classrooms_school")
                            .from(Classrooms::Table, Classrooms::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Libraries::Table)
                    .col(ColumnDef::new(Libraries::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Libraries::SchoolId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Libraries::BookCount).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Libraries::DigitalAccess)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Libraries::StudySpaceCapacity).integer())
                    .col(
                        ColumnDef::new(Libraries::AvailabilityNotes)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Libraries::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Libraries::UpdatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_libraries_school")
                            .from(Libraries::Table, Libraries::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Laboratories::Table)
                    .col(ColumnDef::new(Laboratories::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Laboratories::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(Laboratories::LabType).string_len(15).not_null())
                    .col(
                        ColumnDef::new(Laboratories::EquipmentNotes)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Laboratories::AvailabilityNotes)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Laboratories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Laboratories::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_laboratories_school")
                            .from(Laboratories::Table, Laboratories::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_laboratories_school_type")
                    .table(Laboratories::Table)
                    .col(Laboratories::SchoolId)
                    .col(Laboratories::LabType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // PART 9: SEED DATA - registration number counters
        // ============================================================
        let seed = Query::insert()
            .into_table(RegistrationSequences::Table)
            .columns([RegistrationSequences::SchoolType, RegistrationSequences::LastValue])
            .values(["public".into(), 0i64.into()])
            .map_err(|e| DbErr::Migration(e.to_string()))?
            .values(["private".into(), 0i64.into()])
            .map_err(|e| DbErr::Migration(e.to_string()))?
            .values(["community".into(), 0i64.into()])
            .map_err(|e| DbErr::Migration(e.to_string()))?
            .to_owned();
        manager.exec_stmt(seed).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children first, parents last.
        manager.drop_table(Table::drop().table(Laboratories::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(Libraries::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(Classrooms::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(SchoolExpenses::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(ExpenseCategories::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(Payments::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(InvoiceOptionalFees::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(Invoices::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(FeeStructures::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(GradeBoundaries::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(GradingScales::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(SchoolSubjects::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(Subjects::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(EnrollmentRecords::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(AdmissionInfos::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(Students::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(AccreditationStatuses::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(SuspensionClosures::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(Terms::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(AcademicSessions::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(RegistrationSequences::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(Schools::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
    Name,
    Abbreviation,
    Motto,
    EstablishedDate,
    SchoolType,
    Program,
    IsVocational,
    RegistrationNumber,
    LogoPath,
    Lga,
    City,
    Ward,
    StreetAddress,
    Phone,
    Email,
    Website,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum RegistrationSequences {
    Table,
    SchoolType,
    LastValue,
}

#[derive(DeriveIden)]
enum AcademicSessions {
    Table,
    Id,
    Scope,
    Program,
    SchoolId,
    SessionName,
    Status,
    StartDate,
    EndDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Terms {
    Table,
    Id,
    AcademicSessionId,
    TermNumber,
    StartDate,
    EndDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SuspensionClosures {
    Table,
    Id,
    SchoolId,
    IsStatewide,
    Kind,
    Reason,
    SuspendedFrom,
    SuspendedTo,
    IsIndefinite,
    IsDropped,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AccreditationStatuses {
    Table,
    Id,
    SchoolId,
    AccreditationNumber,
    State,
    ValidFrom,
    ValidTo,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    FirstName,
    LastName,
    MiddleName,
    RegNum,
    DateOfBirth,
    Gender,
    CountryOfBirth,
    StateOfOrigin,
    PlaceOfBirth,
    Address,
    Email,
    PhoneNumber,
    PassportPhotoPath,
    SchoolId,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AdmissionInfos {
    Table,
    Id,
    StudentId,
    SchoolId,
    AdmissionNumber,
    AdmissionDate,
    Level,
    CreatedAt,
}

#[derive(DeriveIden)]
enum EnrollmentRecords {
    Table,
    Id,
    StudentId,
    SchoolId,
    AcademicSessionId,
    Level,
    Stream,
    Mode,
    EnrollmentDate,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Subjects {
    Table,
    Id,
    SubjectName,
    Category,
    Program,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SchoolSubjects {
    Table,
    Id,
    SchoolId,
    SubjectId,
    IsActive,
    IsCompulsory,
    CreatedAt,
}

#[derive(DeriveIden)]
enum GradingScales {
    Table,
    Id,
    ScaleName,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum GradeBoundaries {
    Table,
    Id,
    GradingScaleId,
    Grade,
    LowerBound,
    UpperBound,
    CreatedAt,
}

#[derive(DeriveIden)]
enum FeeStructures {
    Table,
    Id,
    SchoolId,
    Level,
    FeeType,
    IsOptional,
    AmountKobo,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Invoices {
    Table,
    InvoiceId,
    SchoolId,
    StudentId,
    Level,
    InvoiceDate,
    DueDate,
    TotalKobo,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum InvoiceOptionalFees {
    Table,
    InvoiceId,
    FeeStructureId,
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    Id,
    InvoiceId,
    AmountKobo,
    Method,
    PaymentDate,
    ReceiptNumber,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ExpenseCategories {
    Table,
    Id,
    SchoolId,
    Name,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SchoolExpenses {
    Table,
    Id,
    SchoolId,
    CategoryId,
    Description,
    AmountKobo,
    DateIncurred,
    ReceiptNumber,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Classrooms {
    Table,
    Id,
    SchoolId,
    NumberOfClassrooms,
    AvailabilityNotes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Libraries {
    Table,
    Id,
    SchoolId,
    BookCount,
    DigitalAccess,
    StudySpaceCapacity,
    AvailabilityNotes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Laboratories {
    Table,
    Id,
    SchoolId,
    LabType,
    EquipmentNotes,
    AvailabilityNotes,
    CreatedAt,
    UpdatedAt,
}
