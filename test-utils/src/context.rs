use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// A private in-memory SQLite database for one test.
///
/// Built by [`crate::builder::TestBuilder`]. Every context opens its own
/// `sqlite::memory:` database, so tests never see each other's rows.
pub struct TestContext {
    /// Connection to the test database.
    ///
    /// `Some` after construction. Tests that need an owned connection can
    /// `take()` or `clone()` it.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Opens a fresh in-memory database and creates `tables` in order.
    ///
    /// # Arguments
    /// - `tables` - CREATE TABLE statements, parents before children
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database ready with every table created
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn with_schema(tables: &[TableCreateStatement]) -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        for table in tables {
            db.execute(table).await?;
        }

        Ok(Self { db: Some(db) })
    }
}
