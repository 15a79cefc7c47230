use crate::domain::errors::DomainError;

const CNT_API_LOG_PK: &str = "api_logs_pkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.constraint() == Some(CNT_API_LOG_PK) {
                return DomainError::Persistence("api log id already exists".into());
            }

            if let Some(code) = db_err.code() {
                return DomainError::Persistence(format!(
                    "database error {code}: {}",
                    db_err.message()
                ));
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut => {
            DomainError::Persistence("timed out waiting for a database connection".into())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
