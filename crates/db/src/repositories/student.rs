//! Student repository: registration, admission, and enrollment records.
//!
//! Registration and admission numbers are random-suffix identifiers: the
//! repository draws a candidate, lets the unique index catch collisions,
//! and retries with a fresh candidate a bounded number of times.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, SqlErr,
};
use uuid::Uuid;

use samses_core::enrollment::{
    validate_date_of_birth, validate_optional_name, validate_person_name, validate_phone_number,
    EnrollmentError,
};
use samses_core::identity;
use samses_shared::types::{PageRequest, PageResponse};

use crate::entities::{
    admission_infos,
    enums::{EnrollmentMode, Gender},
    enrollment_records, students,
};
use crate::repositories::MAX_ID_ATTEMPTS;

/// Error types for student operations.
#[derive(Debug, thiserror::Error)]
pub enum StudentError {
    /// Student not found.
    #[error("Student not found: {0}")]
    NotFound(Uuid),

    /// A student with the same identity tuple already exists.
    #[error("A student with the same name, date of birth, and origin already exists")]
    DuplicateStudent,

    /// The student already has admission info.
    #[error("Student {0} already has an admission record")]
    AlreadyAdmitted(Uuid),

    /// The student is already enrolled for the session.
    #[error("Student {0} is already enrolled for this academic session")]
    AlreadyEnrolled(Uuid),

    /// A field-scoped validation rule failed.
    #[error(transparent)]
    Validation(#[from] EnrollmentError),

    /// Could not find an unused identifier within the retry budget.
    #[error("Could not allocate a unique {0} after repeated attempts")]
    IdentifierExhausted(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for registering a student.
#[derive(Debug, Clone)]
pub struct CreateStudentInput {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Middle name, may be empty.
    pub middle_name: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Gender.
    pub gender: Gender,
    /// Country of birth.
    pub country_of_birth: String,
    /// State of origin.
    pub state_of_origin: String,
    /// Place (LGA) of birth.
    pub place_of_birth: String,
    /// Home address.
    pub address: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone_number: Option<String>,
    /// Stored path of the passport photograph, if any.
    pub passport_photo_path: Option<String>,
    /// School the student registers to.
    pub school_id: Option<Uuid>,
}

/// Input for recording admission info.
#[derive(Debug, Clone)]
pub struct CreateAdmissionInput {
    /// Admitted student.
    pub student_id: Uuid,
    /// Admitting school.
    pub school_id: Uuid,
    /// Date of admission.
    pub admission_date: NaiveDate,
    /// Level the student was admitted into.
    pub level: String,
}

/// Input for enrolling a student into a session.
#[derive(Debug, Clone)]
pub struct CreateEnrollmentInput {
    /// Enrolled student.
    pub student_id: Uuid,
    /// School the student is enrolled in.
    pub school_id: Uuid,
    /// Session the enrollment is for.
    pub academic_session_id: Uuid,
    /// Level the student is enrolled into.
    pub level: String,
    /// Stream, if the level is streamed.
    pub stream: Option<String>,
    /// How the student entered the school.
    pub mode: EnrollmentMode,
    /// Date of enrollment.
    pub enrollment_date: NaiveDate,
}

/// Student repository for registration, admission, and enrollment.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    db: DatabaseConnection,
}

impl StudentRepository {
    /// Creates a new student repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a student, validating fields and assigning the 11-digit
    /// registration number.
    ///
    /// # Errors
    ///
    /// Returns a field-scoped validation error for bad names, phone
    /// numbers, or under-age students; a duplicate error when the identity
    /// tuple is taken; or a database error.
    pub async fn create(&self, input: CreateStudentInput) -> Result<students::Model, StudentError> {
        validate_person_name("first_name", &input.first_name)?;
        validate_person_name("last_name", &input.last_name)?;
        validate_optional_name("middle_name", &input.middle_name)?;
        validate_person_name("country_of_birth", &input.country_of_birth)?;
        validate_person_name("state_of_origin", &input.state_of_origin)?;
        validate_person_name("place_of_birth", &input.place_of_birth)?;
        if let Some(phone) = &input.phone_number {
            validate_phone_number(phone)?;
        }
        validate_date_of_birth(input.date_of_birth, Utc::now().date_naive())?;

        if self.identity_tuple_exists(&input).await? {
            return Err(StudentError::DuplicateStudent);
        }

        for _ in 0..MAX_ID_ATTEMPTS {
            let reg_num = identity::student_reg_candidate();
            let now = Utc::now();
            let student = students::ActiveModel {
                id: Set(Uuid::new_v4()),
                first_name: Set(input.first_name.clone()),
                last_name: Set(input.last_name.clone()),
                middle_name: Set(input.middle_name.clone()),
                reg_num: Set(reg_num.clone()),
                date_of_birth: Set(input.date_of_birth),
                gender: Set(input.gender),
                country_of_birth: Set(input.country_of_birth.clone()),
                state_of_origin: Set(input.state_of_origin.clone()),
                place_of_birth: Set(input.place_of_birth.clone()),
                address: Set(input.address.clone()),
                email: Set(input.email.clone()),
                phone_number: Set(input.phone_number.clone()),
                passport_photo_path: Set(input.passport_photo_path.clone()),
                school_id: Set(input.school_id),
                is_active: Set(true),
                created_at: Set(now),
                updated_at: Set(now),
            };

            match student.insert(&self.db).await {
                Ok(student) => return Ok(student),
                Err(e) => match e.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => {
                        // Disambiguate: a clash on the registration number
                        // retries with a fresh candidate; anything else is
                        // the identity tuple.
                        if self.reg_num_exists(&reg_num).await? {
                            continue;
                        }
                        return Err(StudentError::DuplicateStudent);
                    }
                    _ => return Err(StudentError::Database(e)),
                },
            }
        }

        Err(StudentError::IdentifierExhausted("registration number"))
    }

    /// Finds a student by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<students::Model>, DbErr> {
        students::Entity::find_by_id(id).one(&self.db).await
    }

    /// Finds a student by registration number.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_reg_num(&self, reg_num: &str) -> Result<Option<students::Model>, DbErr> {
        students::Entity::find()
            .filter(students::Column::RegNum.eq(reg_num))
            .one(&self.db)
            .await
    }

    /// Lists students ordered by last then first name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, page: &PageRequest) -> Result<PageResponse<students::Model>, DbErr> {
        let total = students::Entity::find().count(&self.db).await?;
        let data = students::Entity::find()
            .order_by_asc(students::Column::LastName)
            .order_by_asc(students::Column::FirstName)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok(PageResponse::new(data, page.page, page.per_page, total))
    }

    /// Records admission info and assigns the Luhn-checked admission
    /// number.
    ///
    /// # Errors
    ///
    /// Returns an error if the student is missing or already admitted, or
    /// on database failure.
    pub async fn create_admission(
        &self,
        input: CreateAdmissionInput,
    ) -> Result<admission_infos::Model, StudentError> {
        self.find_by_id(input.student_id)
            .await?
            .ok_or(StudentError::NotFound(input.student_id))?;

        for _ in 0..MAX_ID_ATTEMPTS {
            let admission_number = identity::admission_candidate();
            let admission = admission_infos::ActiveModel {
                id: Set(Uuid::new_v4()),
                student_id: Set(input.student_id),
                school_id: Set(input.school_id),
                admission_number: Set(admission_number.clone()),
                admission_date: Set(input.admission_date),
                level: Set(input.level.clone()),
                created_at: Set(Utc::now()),
            };

            match admission.insert(&self.db).await {
                Ok(admission) => return Ok(admission),
                Err(e) => match e.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => {
                        let clash = admission_infos::Entity::find()
                            .filter(admission_infos::Column::AdmissionNumber.eq(admission_number))
                            .count(&self.db)
                            .await?;
                        if clash > 0 {
                            continue;
                        }
                        return Err(StudentError::AlreadyAdmitted(input.student_id));
                    }
                    _ => return Err(StudentError::Database(e)),
                },
            }
        }

        Err(StudentError::IdentifierExhausted("admission number"))
    }

    /// Finds a student's admission info.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_admission(
        &self,
        student_id: Uuid,
    ) -> Result<Option<admission_infos::Model>, DbErr> {
        admission_infos::Entity::find()
            .filter(admission_infos::Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
    }

    /// Enrolls a student for an academic session; one enrollment per
    /// student per session.
    ///
    /// # Errors
    ///
    /// Returns an error if the student is missing, already enrolled for
    /// the session, or on database failure.
    pub async fn create_enrollment(
        &self,
        input: CreateEnrollmentInput,
    ) -> Result<enrollment_records::Model, StudentError> {
        self.find_by_id(input.student_id)
            .await?
            .ok_or(StudentError::NotFound(input.student_id))?;

        let enrollment = enrollment_records::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(input.student_id),
            school_id: Set(input.school_id),
            academic_session_id: Set(input.academic_session_id),
            level: Set(input.level),
            stream: Set(input.stream),
            mode: Set(input.mode),
            enrollment_date: Set(input.enrollment_date),
            is_active: Set(true),
            created_at: Set(Utc::now()),
        };

        match enrollment.insert(&self.db).await {
            Ok(enrollment) => Ok(enrollment),
            Err(e) => Err(match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    StudentError::AlreadyEnrolled(input.student_id)
                }
                _ => StudentError::Database(e),
            }),
        }
    }

    /// Lists a student's enrollment records, most recent session first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_enrollments(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<enrollment_records::Model>, DbErr> {
        enrollment_records::Entity::find()
            .filter(enrollment_records::Column::StudentId.eq(student_id))
            .order_by_desc(enrollment_records::Column::EnrollmentDate)
            .all(&self.db)
            .await
    }

    async fn identity_tuple_exists(&self, input: &CreateStudentInput) -> Result<bool, DbErr> {
        let count = students::Entity::find()
            .filter(students::Column::FirstName.eq(input.first_name.clone()))
            .filter(students::Column::LastName.eq(input.last_name.clone()))
            .filter(students::Column::DateOfBirth.eq(input.date_of_birth))
            .filter(students::Column::StateOfOrigin.eq(input.state_of_origin.clone()))
            .filter(students::Column::PlaceOfBirth.eq(input.place_of_birth.clone()))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn reg_num_exists(&self, reg_num: &str) -> Result<bool, DbErr> {
        let count = students::Entity::find()
            .filter(students::Column::RegNum.eq(reg_num))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }
}
