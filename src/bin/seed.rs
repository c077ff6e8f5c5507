//! Loads students from a JSON file into the store.
//!
//! Usage: `seed <students.json>`. The file holds an array of
//! `{ studentId, name, password, payment: { amountToBePaid, paidAmount } }`.

use anyhow::Context;
use studentportal::{
    config::DatabaseConfig,
    store::PgStudentStore,
    students::{dto::NewStudent, services::register_students},
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing("studentportal=info,seed=info");

    let path = std::env::args()
        .nth(1)
        .context("usage: seed <students.json>")?;
    let raw = std::fs::read_to_string(&path).with_context(|| format!("read {path}"))?;
    let seeds: Vec<NewStudent> =
        serde_json::from_str(&raw).with_context(|| format!("parse {path}"))?;

    let store = PgStudentStore::connect(&DatabaseConfig::from_env()?).await?;
    store.migrate().await?;
    let inserted = register_students(&store, seeds)
        .await
        .context("register students")?;

    tracing::info!(inserted, file = %path, "seed complete");
    Ok(())
}
