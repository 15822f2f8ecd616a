// Static asset rewriter unit tests
// Rewrites use real files so the cache buster reflects a genuine mtime

use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use imgproxy_bridge::{ImgproxyConfig, StaticAssetRewriter};
use tempfile::TempDir;

const SOURCE_URL: &str = "https://example.com/_static/pkg/images/logo.png";
const SOURCE_B64: &str = "aHR0cHM6Ly9leGFtcGxlLmNvbS9fc3RhdGljL3BrZy9pbWFnZXMvbG9nby5wbmc";

// Makes bypass decisions visible with RUST_LOG=debug when a test fails
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn config() -> ImgproxyConfig {
    let mut config = ImgproxyConfig {
        imgproxy_url: "http://localhost:8084".to_string(),
        ..ImgproxyConfig::default()
    };
    config.static_resources.enabled = true;
    config
}

fn write_asset(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, b"not really image data").expect("Failed to write test asset");
    path
}

fn mtime_secs(path: &Path) -> u64 {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .expect("Failed to stat test asset")
        .duration_since(UNIX_EPOCH)
        .expect("mtime before epoch")
        .as_secs()
}

#[test]
fn test_rewrites_asset_with_quality_and_cache_buster() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_asset(&dir, "logo.png");
    let rewriter = StaticAssetRewriter::new(config()).unwrap();

    let url = rewriter
        .rewrite(SOURCE_URL, &path)
        .expect("Asset should be rewritten");

    let expected = format!(
        "http://localhost:8084/insecure/q:80/cb:{}/{}",
        mtime_secs(&path),
        SOURCE_B64
    );
    assert_eq!(url, expected);
}

#[test]
fn test_uses_format_quality_when_configured() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_asset(&dir, "logo.png");

    let mut config = config();
    config.format_quality = "jpeg=80,webp=70".to_string();
    let rewriter = StaticAssetRewriter::new(config).unwrap();

    let url = rewriter
        .rewrite(SOURCE_URL, &path)
        .expect("Asset should be rewritten");
    assert!(url.contains("/fq:jpeg=80,webp=70/cb:"));
    assert!(!url.contains("/q:80/"));
}

#[test]
fn test_ignore_pattern_skips_matching_urls() {
    init_tracing();

    let dir = TempDir::new().expect("Failed to create temp dir");
    let icon = write_asset(&dir, "icon.png");
    let logo = write_asset(&dir, "logo.png");

    let mut config = config();
    config.static_resources.ignore_pattern = "/icons/".to_string();
    let rewriter = StaticAssetRewriter::new(config).unwrap();

    let ignored = rewriter.rewrite("https://example.com/_static/pkg/icons/icon.png", &icon);
    assert!(ignored.is_none(), "Ignored path should keep original URL");

    let rewritten = rewriter.rewrite(SOURCE_URL, &logo);
    assert!(rewritten.is_some(), "Non-ignored path should be rewritten");
}

#[test]
fn test_unknown_media_type_keeps_original_url() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_asset(&dir, "app.css");
    let rewriter = StaticAssetRewriter::new(config()).unwrap();

    let result = rewriter.rewrite("https://example.com/_static/pkg/css/app.css", &path);
    assert!(result.is_none());
}

#[test]
fn test_disabled_media_type_keeps_original_url() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_asset(&dir, "logo.png");

    let mut config = config();
    config.media_types.remove("image/png");
    let rewriter = StaticAssetRewriter::new(config).unwrap();

    let result = rewriter.rewrite(SOURCE_URL, &path);
    assert!(result.is_none());
}

#[test]
fn test_missing_file_keeps_original_url() {
    init_tracing();

    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("gone.png");
    let rewriter = StaticAssetRewriter::new(config()).unwrap();

    let result = rewriter.rewrite(SOURCE_URL, &missing);
    assert!(result.is_none());
}

#[test]
fn test_disabled_feature_keeps_original_url() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_asset(&dir, "logo.png");

    let mut config = config();
    config.static_resources.enabled = false;
    let rewriter = StaticAssetRewriter::new(config).unwrap();

    assert!(rewriter.rewrite(SOURCE_URL, &path).is_none());
}

#[test]
fn test_empty_base_url_keeps_original_url() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_asset(&dir, "logo.png");

    let mut config = config();
    config.imgproxy_url = String::new();
    let rewriter = StaticAssetRewriter::new(config).unwrap();

    assert!(rewriter.rewrite(SOURCE_URL, &path).is_none());
}
