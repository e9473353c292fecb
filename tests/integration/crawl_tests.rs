//! Integration tests for the harvester
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! fetch → extract → download cycle end-to-end against a temp directory.

use std::path::Path;
use sumi_harvest::config::Config;
use sumi_harvest::crawler::{crawl, Coordinator};
use sumi_harvest::extract::{ExtractorKind, FileKind};
use sumi_harvest::HarvestError;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration writing into `destination`
fn create_test_config(destination: &Path, parallelism: usize, kinds: Vec<FileKind>) -> Config {
    let mut config = Config::default();
    config.harvest.destination = destination.to_path_buf();
    config.harvest.parallelism = parallelism;
    config.harvest.file_kinds = kinds;
    config.user_agent.crawler_name = "TestBot".to_string();
    config.user_agent.crawler_version = "1.0.0".to_string();
    config
}

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn mount_file(server: &MockServer, route: &str, body: Vec<u8>) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_relative_links() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/a/",
        r#"<html><body><img src="pic.png"><a href="doc.pdf">doc</a></body></html>"#,
    )
    .await;
    mount_file(&mock_server, "/a/pic.png", vec![1u8; 100]).await;
    mount_file(&mock_server, "/a/doc.pdf", vec![2u8; 300]).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path(), 2, vec![FileKind::Png, FileKind::Pdf]);

    let report = crawl(config, &format!("{}/a/", mock_server.uri()))
        .await
        .expect("Crawl failed");

    assert_eq!(report.files, 2);
    assert_eq!(report.attempted, 2);
    assert_eq!(report.total_bytes, 400);
    assert!(report.failures.is_empty());
    assert_eq!(std::fs::read(dir.path().join("pic.png")).unwrap().len(), 100);
    assert_eq!(std::fs::read(dir.path().join("doc.pdf")).unwrap().len(), 300);
}

#[tokio::test]
async fn test_partial_failure_report() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        "<a href=\"missing.pdf\">gone</a>\n<a href=\"big.pdf\">big</a>\n",
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/missing.pdf"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_file(&mock_server, "/big.pdf", vec![0u8; 1_048_576]).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path(), 2, vec![FileKind::Pdf]);

    let report = crawl(config, &format!("{}/", mock_server.uri()))
        .await
        .expect("Crawl failed");

    assert_eq!(report.files, 1);
    assert_eq!(report.attempted, 2);
    assert_eq!(format!("{:.2}", report.megabytes()), "1.00");
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].url.ends_with("/missing.pdf"));
    assert!(!dir.path().join("missing.pdf").exists());
}

#[tokio::test]
async fn test_seed_server_error_aborts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path().join("out").as_path(), 1, vec![]);

    let result = crawl(config, &format!("{}/", mock_server.uri())).await;

    assert!(matches!(
        result,
        Err(HarvestError::SeedStatus { status: 500, .. })
    ));
    // Nothing was dispatched, so the destination was never created
    assert!(!dir.path().join("out").exists());
}

#[tokio::test]
async fn test_duplicates_are_downloaded_each_time() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        "<img src=\"same.jpg\">\n<img src=\"same.jpg\">\n<img src=\"same.jpg\">\n",
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/same.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![9u8; 10]))
        .expect(3)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path(), 3, vec![FileKind::Jpg]);

    let report = crawl(config, &format!("{}/", mock_server.uri()))
        .await
        .expect("Crawl failed");

    assert_eq!(report.files, 3);
    assert_eq!(report.total_bytes, 30);
    // Wiremock verifies the expect(3) when mock_server drops
}

#[tokio::test]
async fn test_outcome_count_independent_of_parallelism() {
    let mock_server = MockServer::start().await;

    let mut page = String::new();
    for i in 0..10 {
        page.push_str(&format!("<a href=\"files/f{}.mp3\">track</a>\n", i));
    }
    mount_page(&mock_server, "/", &page).await;
    for i in 0..10 {
        if i % 3 == 0 {
            Mock::given(method("GET"))
                .and(path(format!("/files/f{}.mp3", i)))
                .respond_with(ResponseTemplate::new(503))
                .mount(&mock_server)
                .await;
        } else {
            mount_file(&mock_server, &format!("/files/f{}.mp3", i), vec![5u8; 1000]).await;
        }
    }

    for parallelism in [1, 4, 32] {
        let dir = TempDir::new().unwrap();
        let config = create_test_config(dir.path(), parallelism, vec![FileKind::Mp3]);

        let report = crawl(config, &format!("{}/", mock_server.uri()))
            .await
            .expect("Crawl failed");

        assert_eq!(report.attempted, 10, "parallelism {}", parallelism);
        assert_eq!(report.files, 6, "parallelism {}", parallelism);
        assert_eq!(report.failures.len(), 4, "parallelism {}", parallelism);
        assert_eq!(report.total_bytes, 6000, "parallelism {}", parallelism);
    }
}

#[tokio::test]
async fn test_absolute_links_to_other_host() {
    let page_server = MockServer::start().await;
    let file_server = MockServer::start().await;

    mount_page(
        &page_server,
        "/gallery",
        &format!(r#"<img src="{}/cdn/photo.jpg">"#, file_server.uri()),
    )
    .await;
    mount_file(&file_server, "/cdn/photo.jpg", vec![3u8; 64]).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path(), 1, vec![FileKind::Jpg]);

    let report = crawl(config, &format!("{}/gallery", page_server.uri()))
        .await
        .expect("Crawl failed");

    assert_eq!(report.files, 1);
    assert!(dir.path().join("photo.jpg").exists());
}

#[tokio::test]
async fn test_page_without_links() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", "<html><body><p>Nothing here</p></body></html>").await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path(), 4, vec![]);

    let report = crawl(config, &format!("{}/", mock_server.uri()))
        .await
        .expect("Crawl failed");

    assert_eq!(report.files, 0);
    assert_eq!(report.attempted, 0);
    assert_eq!(report.total_bytes, 0);
}

#[tokio::test]
async fn test_markup_extractor_crawl() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><p><img src="a.png"><img src="b.png"></p></body></html>"#,
    )
    .await;
    mount_file(&mock_server, "/a.png", vec![1u8; 10]).await;
    mount_file(&mock_server, "/b.png", vec![1u8; 20]).await;

    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(dir.path(), 2, vec![FileKind::Png]);
    config.harvest.extractor = ExtractorKind::Markup;

    let coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let report = coordinator
        .crawl(&format!("{}/", mock_server.uri()))
        .await
        .expect("Crawl failed");

    assert_eq!(report.files, 2);
    assert_eq!(report.total_bytes, 30);
}
