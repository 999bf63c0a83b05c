use async_trait::async_trait;
use chrono::{DateTime, Utc};
use killswitch_application::ports::{ClientMetadataMap, ClientMetadataRepository};
use killswitch_domain::{canonical_mac, ClientMetadata, ClientMetadataUpdate, DomainError};
use sqlx::SqlitePool;
use std::collections::BTreeMap;
use tracing::{debug, error, instrument, warn};

type ClientRow = (
    String,
    String,
    bool,
    bool,
    Option<String>,
    Option<String>,
    String,
    String,
);

const SELECT_COLUMNS: &str =
    "SELECT mac, tags, hidden, blocked, last_blocked_at, name, created_at, updated_at FROM clients";

pub struct SqliteClientMetadataRepository {
    pool: SqlitePool,
}

impl SqliteClientMetadataRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: ClientRow) -> ClientMetadata {
        let (mac, tags_json, hidden, blocked, last_blocked_at, name, created_at, updated_at) = row;
        let tags: Vec<String> = serde_json::from_str(&tags_json).unwrap_or_else(|e| {
            warn!(mac = %mac, error = %e, "Malformed tags column, reading as empty");
            Vec::new()
        });
        let last_blocked_at = last_blocked_at
            .as_deref()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map(|ts| ts.with_timezone(&Utc));

        ClientMetadata {
            mac,
            tags,
            hidden,
            blocked,
            last_blocked_at,
            name,
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        }
    }

    async fn fetch_flags(&self, column: &str) -> Result<BTreeMap<String, bool>, DomainError> {
        let sql = format!("SELECT mac, {} FROM clients ORDER BY mac", column);
        let rows = sqlx::query_as::<_, (String, bool)>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, column, "Failed to query client flags");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().collect())
    }
}

#[async_trait]
impl ClientMetadataRepository for SqliteClientMetadataRepository {
    #[instrument(skip(self))]
    async fn get(&self, mac: &str) -> Result<Option<ClientMetadata>, DomainError> {
        let sql = format!("{} WHERE mac = ?", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, ClientRow>(&sql)
            .bind(canonical_mac(mac))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query client metadata");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(Self::row_to_entity))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<ClientMetadataMap, DomainError> {
        let sql = format!("{} ORDER BY mac", SELECT_COLUMNS);
        let rows = sqlx::query_as::<_, ClientRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query all client metadata");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows
            .into_iter()
            .map(Self::row_to_entity)
            .map(|record| (record.mac.clone(), record))
            .collect())
    }

    #[instrument(skip(self, update))]
    async fn upsert(
        &self,
        mac: &str,
        update: &ClientMetadataUpdate,
    ) -> Result<ClientMetadata, DomainError> {
        let mac = canonical_mac(mac);
        let now = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        // Values used when the row does not exist yet.
        let mut fresh = ClientMetadata::new(&mac);
        update.apply_to(&mut fresh);
        let tags_json = serde_json::to_string(&fresh.tags)
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        sqlx::query(
            "INSERT INTO clients (mac, tags, hidden, blocked, last_blocked_at, name, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(mac) DO UPDATE SET
                tags = CASE WHEN ? THEN excluded.tags ELSE clients.tags END,
                hidden = CASE WHEN ? THEN excluded.hidden ELSE clients.hidden END,
                blocked = CASE WHEN ? THEN excluded.blocked ELSE clients.blocked END,
                last_blocked_at = CASE WHEN ? THEN excluded.last_blocked_at ELSE clients.last_blocked_at END,
                name = CASE WHEN ? THEN excluded.name ELSE clients.name END,
                updated_at = excluded.updated_at",
        )
        .bind(&mac)
        .bind(&tags_json)
        .bind(fresh.hidden)
        .bind(fresh.blocked)
        .bind(fresh.last_blocked_at.map(|ts| ts.to_rfc3339()))
        .bind(&fresh.name)
        .bind(&now)
        .bind(&now)
        .bind(update.tags.is_some())
        .bind(update.hidden.is_some())
        .bind(update.blocked.is_some())
        .bind(update.last_blocked_at.is_some())
        .bind(update.name.is_some())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, mac = %mac, "Failed to upsert client metadata");
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!(mac = %mac, "Client metadata upserted");

        self.get(&mac)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("client metadata for {}", mac)))
    }

    #[instrument(skip(self))]
    async fn find_by_tag(&self, tag: &str) -> Result<Vec<ClientMetadata>, DomainError> {
        let sql = format!(
            "{} WHERE EXISTS (SELECT 1 FROM json_each(clients.tags) WHERE json_each.value = ?)
             ORDER BY mac",
            SELECT_COLUMNS
        );
        let rows = sqlx::query_as::<_, ClientRow>(&sql)
            .bind(tag)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, tag, "Failed to query clients by tag");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(Self::row_to_entity).collect())
    }

    #[instrument(skip(self))]
    async fn get_hidden_states(&self) -> Result<BTreeMap<String, bool>, DomainError> {
        self.fetch_flags("hidden").await
    }

    #[instrument(skip(self))]
    async fn get_blocked_states(&self) -> Result<BTreeMap<String, bool>, DomainError> {
        self.fetch_flags("blocked").await
    }
}
