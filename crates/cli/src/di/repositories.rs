use killswitch_infrastructure::repositories::SqliteClientMetadataRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub client_metadata: Arc<SqliteClientMetadataRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            client_metadata: Arc::new(SqliteClientMetadataRepository::new(pool)),
        }
    }
}
