use goalgate_application::ports::BlockConfigRepository;
use goalgate_domain::BlockConfig;
use goalgate_infrastructure::config_store::JsonBlockConfigRepository;
use tempfile::TempDir;

fn sample() -> BlockConfig {
    BlockConfig::new(
        vec!["Steam".to_string(), "Discord".to_string()],
        vec!["youtube.com".to_string()],
    )
}

#[tokio::test]
async fn test_open_creates_empty_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("frontend").join("blocked_config.json");

    let repo = JsonBlockConfigRepository::open(&path).await.unwrap();

    assert!(path.exists());
    assert_eq!(repo.load().await, BlockConfig::empty());
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw, serde_json::json!({"apps": [], "sites": []}));
}

#[tokio::test]
async fn test_open_keeps_existing_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blocked_config.json");
    std::fs::write(&path, r#"{"apps": ["Steam"], "sites": ["reddit.com"]}"#).unwrap();

    let repo = JsonBlockConfigRepository::open(&path).await.unwrap();
    let config = repo.load().await;

    assert_eq!(config.apps, vec!["Steam"]);
    assert_eq!(config.sites, vec!["reddit.com"]);
}

#[tokio::test]
async fn test_update_then_load() {
    let dir = TempDir::new().unwrap();
    let repo = JsonBlockConfigRepository::open(dir.path().join("blocked_config.json"))
        .await
        .unwrap();

    repo.update(&sample()).await.unwrap();

    assert_eq!(repo.load().await, sample());
}

#[tokio::test]
async fn test_update_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let repo = JsonBlockConfigRepository::open(dir.path().join("blocked_config.json"))
        .await
        .unwrap();

    repo.update(&sample()).await.unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["blocked_config.json"]);
}

#[tokio::test]
async fn test_load_malformed_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blocked_config.json");
    std::fs::write(&path, "{not json").unwrap();

    let repo = JsonBlockConfigRepository::open(&path).await.unwrap();

    assert!(repo.load().await.is_empty());
}

#[tokio::test]
async fn test_load_missing_key_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blocked_config.json");
    std::fs::write(&path, r#"{"sites": ["x.com"]}"#).unwrap();

    let repo = JsonBlockConfigRepository::open(&path).await.unwrap();
    let config = repo.load().await;

    assert!(config.apps.is_empty());
    assert_eq!(config.sites, vec!["x.com"]);
}

#[tokio::test]
async fn test_load_after_file_removed_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blocked_config.json");
    let repo = JsonBlockConfigRepository::open(&path).await.unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(repo.load().await.is_empty());
}
