//! SQLite-backed stop store.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::domain::{Latitude, Longitude, NonBlank, StopId, StopPatch, StopRecord, Timestamp};

use super::{StopStore, StoreError};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS stops (
        stop_id INTEGER PRIMARY KEY,
        name TEXT,
        latitude REAL,
        longitude REAL,
        last_updated TEXT,
        next_departure TEXT
    )
"#;

const SELECT_ONE: &str = r#"
    SELECT stop_id, name, latitude, longitude, last_updated, next_departure
    FROM stops
    WHERE stop_id = ?
"#;

/// Internal struct for database row
#[derive(Debug, FromRow)]
struct StopRow {
    stop_id: i64,
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    last_updated: Option<String>,
    next_departure: Option<String>,
}

impl TryFrom<StopRow> for StopRecord {
    type Error = StoreError;

    fn try_from(row: StopRow) -> Result<Self, Self::Error> {
        let stop_id = row.stop_id;
        let corrupt = move |reason: String| StoreError::Corrupt { stop_id, reason };

        let latitude = row
            .latitude
            .map(Latitude::new)
            .transpose()
            .map_err(|e| corrupt(e.to_string()))?
            .unwrap_or_default();
        let longitude = row
            .longitude
            .map(Longitude::new)
            .transpose()
            .map_err(|e| corrupt(e.to_string()))?
            .unwrap_or_default();
        let last_updated = row
            .last_updated
            .as_deref()
            .ok_or_else(|| corrupt("missing last_updated".to_string()))
            .and_then(|raw| {
                Timestamp::parse(raw).map_err(|e| corrupt(format!("last_updated {raw:?}: {e}")))
            })?;

        Ok(StopRecord {
            stop_id: StopId::new(row.stop_id),
            name: row.name,
            latitude,
            longitude,
            last_updated,
            next_departure: row.next_departure,
        })
    }
}

/// Stop store on a SQLite connection pool.
#[derive(Debug, Clone)]
pub struct SqliteStopStore {
    pool: SqlitePool,
}

impl SqliteStopStore {
    /// Open (creating if needed) the database at `url` and ensure the
    /// `stops` table exists.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::with_pool(pool).await
    }

    /// A private in-memory database.
    ///
    /// Every SQLite in-memory connection is its own database, so the pool
    /// holds exactly one connection and never recycles it.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Self::with_pool(pool).await
    }

    /// Use an existing pool.
    pub async fn with_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Close all pooled connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl StopStore for SqliteStopStore {
    async fn upsert(&self, stop: &StopRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO stops (stop_id, name, latitude, longitude, last_updated, next_departure)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(stop_id) DO UPDATE SET
                name = excluded.name,
                latitude = excluded.latitude,
                longitude = excluded.longitude,
                last_updated = excluded.last_updated,
                next_departure = excluded.next_departure
            "#,
        )
        .bind(stop.stop_id.get())
        .bind(stop.name.as_deref())
        .bind(stop.latitude.get())
        .bind(stop.longitude.get())
        .bind(stop.last_updated.to_string())
        .bind(stop.next_departure.as_deref())
        .execute(&self.pool)
        .await?;

        debug!(stop_id = %stop.stop_id, "Upserted stop");
        Ok(())
    }

    async fn get(&self, id: StopId) -> Result<StopRecord, StoreError> {
        let row: Option<StopRow> = sqlx::query_as(SELECT_ONE)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        row.ok_or(StoreError::NotFound(id))?.try_into()
    }

    async fn patch(&self, id: StopId, patch: &StopPatch) -> Result<StopRecord, StoreError> {
        // One statement, so concurrent writers queue on the busy timeout
        // instead of failing a lock upgrade.
        let row: Option<StopRow> = sqlx::query_as(
            r#"
            UPDATE stops SET
                name = COALESCE(?, name),
                latitude = COALESCE(?, latitude),
                longitude = COALESCE(?, longitude),
                next_departure = COALESCE(?, next_departure),
                last_updated = ?
            WHERE stop_id = ?
            RETURNING stop_id, name, latitude, longitude, last_updated, next_departure
            "#,
        )
        .bind(patch.name.as_ref().map(NonBlank::as_str))
        .bind(patch.latitude.map(Latitude::get))
        .bind(patch.longitude.map(Longitude::get))
        .bind(patch.next_departure.as_ref().map(NonBlank::as_str))
        .bind(patch.last_updated.unwrap_or_else(Timestamp::now).to_string())
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        let stop = StopRecord::try_from(row.ok_or(StoreError::NotFound(id))?)?;

        debug!(stop_id = %id, last_updated = %stop.last_updated, "Patched stop");
        Ok(stop)
    }

    async fn delete(&self, id: StopId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM stops WHERE stop_id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StopRecord>, StoreError> {
        let rows: Vec<StopRow> = sqlx::query_as(
            r#"
            SELECT stop_id, name, latitude, longitude, last_updated, next_departure
            FROM stops
            ORDER BY stop_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(StopRecord::try_from).collect()
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stops")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as usize)
    }
}
