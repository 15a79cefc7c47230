use anyhow::Result;
use api_log_ingest::presentation::http::openapi::{DEFAULT_SNAPSHOT_PATH, write_openapi_snapshot};
use std::{env, path::PathBuf};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = env::var("OPENAPI_SNAPSHOT_PATH")
        .map_or_else(|_| PathBuf::from(DEFAULT_SNAPSHOT_PATH), PathBuf::from);
    write_openapi_snapshot(&output_path)?;
    println!("OpenAPI snapshot written to {}", output_path.display());
    Ok(())
}
