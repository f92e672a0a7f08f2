use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::domain::hue::entities::HueRecord;
use crate::domain::hue::errors::HueError;
use crate::domain::hue::ports::HueRecordRepository;
use crate::domain::hue::value_objects::RecordRange;

/// Database row structure for the hue_records table
#[derive(Debug, FromRow)]
struct HueRecordRow {
  name: String,
  choices: Json<BTreeMap<String, String>>,
}

impl HueRecordRow {
  fn into_entity(self) -> Result<HueRecord, HueError> {
    HueRecord::from_raw(self.name, self.choices.0)
  }
}

/// PostgreSQL implementation of the HueRecordRepository trait
pub struct PostgresHueRecordRepository {
  pool: PgPool,
}

impl PostgresHueRecordRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl HueRecordRepository for PostgresHueRecordRepository {
  async fn save(&self, record: &HueRecord) -> Result<(), HueError> {
    sqlx::query(
      r#"
            INSERT INTO hue_records (id, name, choices, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
    )
    .bind(Uuid::new_v4())
    .bind(record.name().as_str())
    .bind(Json(record.choices().to_map()))
    .bind(Utc::now())
    .execute(&self.pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to save hue record: {}", e);
      HueError::from(e)
    })?;

    Ok(())
  }

  /// The inclusive index pair maps straight onto LIMIT/OFFSET over the
  /// reverse-chronological order.
  async fn list(&self, range: &RecordRange) -> Result<Vec<HueRecord>, HueError> {
    let rows = sqlx::query_as::<_, HueRecordRow>(
      r#"
            SELECT name, choices
            FROM hue_records
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
    )
    .bind(range.limit())
    .bind(range.offset())
    .fetch_all(&self.pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to list hue records: {}", e);
      HueError::from(e)
    })?;

    rows.into_iter().map(HueRecordRow::into_entity).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::postgres::testing::setup_test_db;

  fn record(name: &str) -> HueRecord {
    HueRecord::from_raw(name, [("calm".to_string(), "blue".to_string())]).unwrap()
  }

  #[tokio::test]
  #[ignore = "needs a Docker daemon"]
  async fn save_then_list_newest_first() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresHueRecordRepository::new(pool);

    for name in ["first", "second", "third"] {
      repo.save(&record(name)).await.unwrap();
      // created_at granularity; keep insert order observable
      tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let page = repo.list(&RecordRange::new(0, 1).unwrap()).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].name().as_str(), "third");
    assert_eq!(page[1].name().as_str(), "second");

    let rest = repo.list(&RecordRange::new(2, 9).unwrap()).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].name().as_str(), "first");
  }

  #[tokio::test]
  #[ignore = "needs a Docker daemon"]
  async fn out_of_bounds_page_is_empty() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresHueRecordRepository::new(pool);

    repo.save(&record("only")).await.unwrap();

    let page = repo.list(&RecordRange::new(5, 9).unwrap()).await.unwrap();
    assert!(page.is_empty());
  }
}
