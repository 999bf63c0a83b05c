use chrono::{Duration, Utc};
use killswitch_application::ports::ClientMetadataRepository;
use killswitch_domain::config::DatabaseConfig;
use killswitch_domain::ClientMetadataUpdate;
use killswitch_infrastructure::database::{create_pool, run_migrations};
use killswitch_infrastructure::repositories::SqliteClientMetadataRepository;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    run_migrations(&pool).await.unwrap();
    pool
}

async fn create_repo() -> SqliteClientMetadataRepository {
    SqliteClientMetadataRepository::new(create_test_db().await)
}

// ============================================================================
// Upsert
// ============================================================================

#[tokio::test]
async fn test_upsert_unseen_mac_creates_defaults() {
    let repo = create_repo().await;

    let record = repo
        .upsert("aa:bb:cc:dd:ee:ff", &ClientMetadataUpdate::default())
        .await
        .unwrap();

    assert_eq!(record.mac, "aa:bb:cc:dd:ee:ff");
    assert!(record.tags.is_empty());
    assert!(!record.hidden);
    assert!(!record.blocked);
    assert!(record.last_blocked_at.is_none());
    assert!(record.name.is_none());
    assert!(record.created_at.is_some());
}

#[tokio::test]
async fn test_upsert_only_overwrites_provided_fields() {
    let repo = create_repo().await;
    let mac = "aa:bb:cc:dd:ee:ff";

    repo.upsert(
        mac,
        &ClientMetadataUpdate::tags(vec!["kids".to_string(), "tablet".to_string()]),
    )
    .await
    .unwrap();
    repo.upsert(mac, &ClientMetadataUpdate::hidden(true))
        .await
        .unwrap();

    let record = repo.get(mac).await.unwrap().unwrap();
    assert_eq!(record.tags, vec!["kids".to_string(), "tablet".to_string()]);
    assert!(record.hidden);
    assert!(!record.blocked);
}

#[tokio::test]
async fn test_tag_order_is_preserved() {
    let repo = create_repo().await;
    let tags = vec!["zeta".to_string(), "alpha".to_string(), "mid".to_string()];

    repo.upsert("aa:bb:cc:dd:ee:ff", &ClientMetadataUpdate::tags(tags.clone()))
        .await
        .unwrap();

    let record = repo.get("aa:bb:cc:dd:ee:ff").await.unwrap().unwrap();
    assert_eq!(record.tags, tags);
}

#[tokio::test]
async fn test_blocked_update_stamps_and_clears_last_blocked_at() {
    let repo = create_repo().await;
    let mac = "aa:bb:cc:dd:ee:ff";
    let at = Utc::now() - Duration::minutes(5);

    let blocked = repo
        .upsert(mac, &ClientMetadataUpdate::blocked(true, at))
        .await
        .unwrap();
    assert!(blocked.blocked);
    let stamped = blocked.last_blocked_at.unwrap();
    assert_eq!(stamped.timestamp(), at.timestamp());

    let unblocked = repo
        .upsert(mac, &ClientMetadataUpdate::blocked(false, Utc::now()))
        .await
        .unwrap();
    assert!(!unblocked.blocked);
    assert!(unblocked.last_blocked_at.is_none());
}

#[tokio::test]
async fn test_explicit_null_name_clears_override() {
    let repo = create_repo().await;
    let mac = "aa:bb:cc:dd:ee:ff";

    repo.upsert(
        mac,
        &ClientMetadataUpdate {
            name: Some(Some("Living room TV".to_string())),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let untouched = repo
        .upsert(mac, &ClientMetadataUpdate::hidden(true))
        .await
        .unwrap();
    assert_eq!(untouched.name.as_deref(), Some("Living room TV"));

    let cleared = repo
        .upsert(
            mac,
            &ClientMetadataUpdate {
                name: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(cleared.name.is_none());
    assert!(cleared.hidden);
}

#[tokio::test]
async fn test_mac_keys_are_case_insensitive() {
    let repo = create_repo().await;

    repo.upsert("AA:BB:CC:DD:EE:FF", &ClientMetadataUpdate::hidden(true))
        .await
        .unwrap();
    repo.upsert(
        "aa:bb:cc:dd:ee:ff",
        &ClientMetadataUpdate::tags(vec!["tv".to_string()]),
    )
    .await
    .unwrap();

    let all = repo.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    let record = &all["aa:bb:cc:dd:ee:ff"];
    assert!(record.hidden);
    assert_eq!(record.tags, vec!["tv".to_string()]);
}

// ============================================================================
// Reads
// ============================================================================

#[tokio::test]
async fn test_get_missing_returns_none() {
    let repo = create_repo().await;
    assert!(repo.get("00:00:00:00:00:00").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_tag_matches_whole_tags_in_mac_order() {
    let repo = create_repo().await;

    repo.upsert(
        "cc:cc:cc:cc:cc:cc",
        &ClientMetadataUpdate::tags(vec!["kids".to_string()]),
    )
    .await
    .unwrap();
    repo.upsert(
        "aa:aa:aa:aa:aa:aa",
        &ClientMetadataUpdate::tags(vec!["tv".to_string(), "kids".to_string()]),
    )
    .await
    .unwrap();
    repo.upsert(
        "bb:bb:bb:bb:bb:bb",
        &ClientMetadataUpdate::tags(vec!["kidsroom".to_string()]),
    )
    .await
    .unwrap();

    let found = repo.find_by_tag("kids").await.unwrap();
    let macs: Vec<&str> = found.iter().map(|r| r.mac.as_str()).collect();

    assert_eq!(macs, vec!["aa:aa:aa:aa:aa:aa", "cc:cc:cc:cc:cc:cc"]);
}

#[tokio::test]
async fn test_hidden_and_blocked_state_maps() {
    let repo = create_repo().await;

    repo.upsert("aa:aa:aa:aa:aa:aa", &ClientMetadataUpdate::hidden(true))
        .await
        .unwrap();
    repo.upsert(
        "bb:bb:bb:bb:bb:bb",
        &ClientMetadataUpdate::blocked(true, Utc::now()),
    )
    .await
    .unwrap();

    let hidden = repo.get_hidden_states().await.unwrap();
    let blocked = repo.get_blocked_states().await.unwrap();

    assert_eq!(hidden.len(), 2);
    assert!(hidden["aa:aa:aa:aa:aa:aa"]);
    assert!(!hidden["bb:bb:bb:bb:bb:bb"]);
    assert!(!blocked["aa:aa:aa:aa:aa:aa"]);
    assert!(blocked["bb:bb:bb:bb:bb:bb"]);
}

#[tokio::test]
async fn test_malformed_tags_column_reads_as_empty() {
    let pool = create_test_db().await;
    sqlx::query(
        "INSERT INTO clients (mac, tags, created_at, updated_at)
         VALUES ('aa:aa:aa:aa:aa:aa', 'not-json', '2024-01-01 00:00:00', '2024-01-01 00:00:00')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let repo = SqliteClientMetadataRepository::new(pool);
    let record = repo.get("aa:aa:aa:aa:aa:aa").await.unwrap().unwrap();
    assert!(record.tags.is_empty());

    repo.upsert("bb:bb:bb:bb:bb:bb", &ClientMetadataUpdate::tags(vec!["kids".to_string()]))
        .await
        .unwrap();
    let all = repo.get_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all["aa:aa:aa:aa:aa:aa"].tags.is_empty());
    assert_eq!(all["bb:bb:bb:bb:bb:bb"].tags, vec!["kids".to_string()]);

    let saved = repo
        .upsert("aa:aa:aa:aa:aa:aa", &ClientMetadataUpdate::tags(vec!["tv".to_string()]))
        .await
        .unwrap();
    assert_eq!(saved.tags, vec!["tv".to_string()]);
}

// ============================================================================
// Pool bootstrap
// ============================================================================

#[tokio::test]
async fn test_create_pool_creates_file_and_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("killswitch.db");
    let config = DatabaseConfig {
        path: path.to_string_lossy().to_string(),
        max_connections: 2,
    };

    let pool = create_pool(&config).await.unwrap();
    let repo = SqliteClientMetadataRepository::new(pool);
    repo.upsert("aa:aa:aa:aa:aa:aa", &ClientMetadataUpdate::hidden(true))
        .await
        .unwrap();

    assert!(path.exists());
    assert_eq!(repo.get_all().await.unwrap().len(), 1);
}
