use crate::config::AppConfig;
use sqlx::{
    ConnectOptions, PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use std::str::FromStr;

pub async fn init_pool(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(config.database_url())?;
    if !config.is_development() {
        options = options.disable_statement_logging();
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections())
        .acquire_timeout(config.database_connect_timeout())
        .connect_with(options)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
