use std::path::PathBuf;

use weblab::serve::StaticServer;

/// Creates a fresh scratch directory for one test.
fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("weblab-serve-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[tokio::test]
async fn serves_index_for_the_root_path() {
    let dir = scratch_dir();
    std::fs::write(dir.join("index.html"), "<html><body>hello</body></html>").unwrap();

    let server = StaticServer::start(dir.clone()).await.unwrap();
    let response = reqwest::get(server.url_for("")).await.unwrap();

    assert!(response.status().is_success());
    assert!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .starts_with("text/html")
    );
    assert!(response.text().await.unwrap().contains("hello"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn missing_files_are_not_found() {
    let dir = scratch_dir();
    let server = StaticServer::start(dir.clone()).await.unwrap();

    let response = reqwest::get(server.url_for("styles.css")).await.unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn concurrent_servers_bind_distinct_ports() {
    let dir = scratch_dir();
    let first = StaticServer::start(dir.clone()).await.unwrap();
    let second = StaticServer::start(dir.clone()).await.unwrap();

    assert_ne!(first.port(), second.port());

    let _ = std::fs::remove_dir_all(&dir);
}
