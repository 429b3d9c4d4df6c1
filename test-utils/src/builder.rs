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
/// use entity::prelude::{Organization, User};
///
/// let test = TestBuilder::new()
///     .with_table(Organization)
///     .with_table(User)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign keys
    /// after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed to authenticate users: organizations, users, and roles.
    pub fn with_user_tables(self) -> Self {
        self.with_table(Organization)
            .with_table(User)
            .with_table(UserRole)
    }

    /// Adds every table a feedback record depends on or owns.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Organization, User, UserRole
    /// - FeedbackCycle
    /// - Feedback, FeedbackContent
    /// - Comment, Rating, Goal
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_feedback_tables(self) -> Self {
        self.with_user_tables()
            .with_table(FeedbackCycle)
            .with_table(Feedback)
            .with_table(FeedbackContent)
            .with_table(Comment)
            .with_table(Rating)
            .with_table(Goal)
    }

    /// Adds the tables needed for reporting-line queries.
    pub fn with_hierarchy_tables(self) -> Self {
        self.with_user_tables().with_table(OrganizationalHierarchy)
    }

    /// Adds every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_feedback_tables()
            .with_table(OrganizationalHierarchy)
            .with_table(ReviewTemplate)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
