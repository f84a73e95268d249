//! Static host tests
//!
//! Drives the router with `oneshot` against a temporary dist directory.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use folio_web::{HostConfig, HostError, create_router};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const INDEX: &str = "<!DOCTYPE html><html><body>folio</body></html>";

/// Test helper: a dist directory with an index and one asset
fn dist_fixture() -> Result<TempDir, std::io::Error> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("index.html"), INDEX)?;
    std::fs::write(dir.path().join("app.js"), "console.log('folio');".repeat(200))?;
    Ok(dir)
}

fn router_for(dir: &TempDir) -> Result<Router, HostError> {
    create_router(&HostConfig {
        dist_dir: dir.path().to_path_buf(),
        ..HostConfig::default()
    })
}

async fn get(router: Router, request: Request<Body>) -> Result<(StatusCode, String), Box<dyn std::error::Error>> {
    let response = router.oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok((status, String::from_utf8_lossy(&bytes).into_owned()))
}

#[tokio::test]
async fn test_health_returns_ok() -> TestResult {
    // Given: a built UI
    let dir = dist_fixture()?;
    // When: /health is requested
    let (status, body) = get(router_for(&dir)?, Request::get("/health").body(Body::empty())?).await?;
    // Then: the host answers OK
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
    Ok(())
}

#[tokio::test]
async fn test_root_serves_index() -> TestResult {
    let dir = dist_fixture()?;
    let (status, body) = get(router_for(&dir)?, Request::get("/").body(Body::empty())?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
    Ok(())
}

#[tokio::test]
async fn test_client_route_falls_back_to_index() -> TestResult {
    // Given: a deep link handled by the client-side router
    let dir = dist_fixture()?;
    // When: the browser loads it directly
    let (status, body) = get(router_for(&dir)?, Request::get("/projects").body(Body::empty())?).await?;
    // Then: the host serves the app shell instead of 404
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
    Ok(())
}

#[tokio::test]
async fn test_assets_are_served_as_is() -> TestResult {
    let dir = dist_fixture()?;
    let (status, body) = get(router_for(&dir)?, Request::get("/app.js").body(Body::empty())?).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("console.log('folio');"));
    Ok(())
}

#[tokio::test]
async fn test_gzip_when_accepted() -> TestResult {
    let dir = dist_fixture()?;
    let request = Request::get("/app.js")
        .header(header::ACCEPT_ENCODING, "gzip")
        .body(Body::empty())?;
    let response = router_for(&dir)?.oneshot(request).await?;
    assert_eq!(
        response.headers().get(header::CONTENT_ENCODING).map(|v| v.as_bytes()),
        Some(&b"gzip"[..])
    );
    Ok(())
}

#[tokio::test]
async fn test_compression_can_be_disabled() -> TestResult {
    let dir = dist_fixture()?;
    let router = create_router(&HostConfig {
        dist_dir: dir.path().to_path_buf(),
        compression: false,
        ..HostConfig::default()
    })?;
    let request = Request::get("/app.js")
        .header(header::ACCEPT_ENCODING, "gzip")
        .body(Body::empty())?;
    let response = router.oneshot(request).await?;
    assert!(response.headers().get(header::CONTENT_ENCODING).is_none());
    Ok(())
}

#[test]
fn test_host_table_parses_with_defaults() -> TestResult {
    #[derive(serde::Deserialize)]
    struct File {
        host: HostConfig,
    }

    let file: File = toml::from_str("[host]\nbind_address = \"0.0.0.0:3000\"\n")?;
    assert_eq!(file.host.bind_address, "0.0.0.0:3000");
    assert!(file.host.compression);
    assert_eq!(file.host.dist_dir, HostConfig::default().dist_dir);
    Ok(())
}
