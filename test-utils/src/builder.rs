use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Person, University};
///
/// let test = TestBuilder::new()
///     .with_table(University)
///     .with_table(Person)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed during `build()`, in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables must be added in dependency order because foreign keys are
    /// enforced (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables behind every person role.
    ///
    /// Adds in dependency order:
    /// - University
    /// - Person
    /// - User
    /// - Student
    /// - Applicant
    pub fn with_person_tables(self) -> Self {
        self.with_table(University)
            .with_table(Person)
            .with_table(User)
            .with_table(Student)
            .with_table(Applicant)
    }

    /// Adds person tables plus competitions and applications.
    ///
    /// Use this when testing applicant flows that touch applications (listing with
    /// applications, merge, deletion guards, statistics).
    pub fn with_admission_tables(self) -> Self {
        self.with_person_tables()
            .with_table(Competition)
            .with_table(Application)
    }

    /// Adds person tables plus the academic hierarchy and student records.
    ///
    /// Adds programs, specializations, semesters, teaching units, courses, registrations,
    /// grades, semester and annual results, and student cards.
    pub fn with_academic_tables(self) -> Self {
        self.with_person_tables().with_academic_only()
    }

    /// Adds every table in the schema.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_all_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_all_tables(self) -> Self {
        self.with_admission_tables()
            .with_academic_only()
            .with_table(News)
    }

    fn with_academic_only(self) -> Self {
        self.with_table(Program)
            .with_table(Specialization)
            .with_table(Semester)
            .with_table(TeachingUnit)
            .with_table(Course)
            .with_table(StudentRegistration)
            .with_table(Grade)
            .with_table(SemesterResult)
            .with_table(AnnualResult)
            .with_table(StudentCard)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
