use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    /// Connects and applies pending migrations.
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options.sqlx_logging(false);

        let db = Database::connect(options).await?;

        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await?;

        info!("Database connected and migrations applied");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}

#[cfg(test)]
mod tests {
    const SCHEMA: &str = include_str!("../../../migrations/20250601000000_create_haccp_tables.sql");

    fn column_type(table: &str, column: &str) -> String {
        let start = SCHEMA
            .find(&format!("CREATE TABLE IF NOT EXISTS {table} ("))
            .expect("table present");
        let body = &SCHEMA[start..];
        let body = &body[..body.find(");").expect("table closed")];

        body.lines()
            .map(str::trim)
            .find_map(|line| line.strip_prefix(&format!("{column} ")))
            .expect("column present")
            .to_string()
    }

    #[test]
    fn test_request_derived_columns_are_unbounded() {
        for column in ["location_id", "location_name", "verified_by"] {
            assert!(
                column_type("haccp_plans", column).starts_with("TEXT"),
                "haccp_plans.{column}"
            );
        }
        for column in ["location_id", "staff_id", "staff_name", "staff_email"] {
            assert!(
                column_type("operation_reports", column).starts_with("TEXT"),
                "operation_reports.{column}"
            );
        }
    }
}
