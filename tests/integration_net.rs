// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the built-in downloader using wiremock.
//!
//! Covers file downloads, HTTP error statuses, missing parameters and
//! custom headers.

use ccs_deps::error::{DepsError, NetworkError};
use ccs_deps::net::Downloader;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

// =============================================================================
// download (file) tests
// =============================================================================

#[tokio::test]
async fn test_download_archive_success() {
    let mock_server = MockServer::start().await;
    let body: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();

    Mock::given(method("GET"))
        .and(path("/hdf5-1.14.4.3.tar.gz"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .mount(&mock_server)
        .await;

    let temp_dir = temp_dir();
    let output_file = temp_dir.path().join("hdf5.tar.gz");

    let url = format!("{}/hdf5-1.14.4.3.tar.gz", mock_server.uri());
    let result = Downloader::new()
        .url(&url)
        .file(&output_file)
        .silent()
        .download()
        .await;

    assert!(result.is_ok(), "Download failed: {:?}", result.err());
    assert_eq!(std::fs::read(&output_file).unwrap(), body);
}

#[tokio::test]
async fn test_download_file_creates_parent_dirs() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("nested content"))
        .mount(&mock_server)
        .await;

    let temp_dir = temp_dir();
    let output_file = temp_dir.path().join("build").join("hdf5").join("data.txt");
    assert!(!output_file.parent().unwrap().exists());

    let url = format!("{}/data.txt", mock_server.uri());
    let result = Downloader::new()
        .url(&url)
        .file(&output_file)
        .silent()
        .download()
        .await;

    assert!(result.is_ok(), "Download failed: {:?}", result.err());
    assert_eq!(
        std::fs::read_to_string(&output_file).unwrap(),
        "nested content"
    );
}

#[tokio::test]
async fn test_download_file_http_errors() {
    for (status, file) in [(404, "missing.tar.gz"), (500, "error.tar.gz")] {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/{file}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&mock_server)
            .await;

        let temp_dir = temp_dir();
        let output_file = temp_dir.path().join(file);

        let url = format!("{}/{file}", mock_server.uri());
        let result = Downloader::new()
            .url(&url)
            .file(&output_file)
            .silent()
            .download()
            .await;

        match result.unwrap_err() {
            DepsError::Network(boxed) => match *boxed {
                NetworkError::HttpStatus {
                    status: actual_status,
                    ..
                } => assert_eq!(actual_status, status),
                other => panic!("Expected NetworkError::HttpStatus for {status}, got {other:?}"),
            },
            other => panic!("Expected DepsError::Network for {status}, got {other:?}"),
        }
        assert!(!output_file.exists(), "no file should be left for {status}");
    }
}

#[tokio::test]
async fn test_download_without_url_fails() {
    let temp_dir = temp_dir();
    let result = Downloader::new()
        .file(temp_dir.path().join("out"))
        .silent()
        .download()
        .await;

    assert!(matches!(
        result,
        Err(DepsError::Network(ref boxed))
            if matches!(**boxed, NetworkError::DownloadFailed { .. })
    ));
}

#[tokio::test]
async fn test_download_without_file_fails() {
    let result = Downloader::new()
        .url("http://127.0.0.1:9/never")
        .silent()
        .download()
        .await;

    assert!(matches!(
        result,
        Err(DepsError::Network(ref boxed))
            if matches!(**boxed, NetworkError::DownloadFailed { .. })
    ));
}

// =============================================================================
// Headers
// =============================================================================

#[tokio::test]
async fn test_custom_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let temp_dir = temp_dir();
    let output_file = temp_dir.path().join("auth.txt");

    let url = format!("{}/auth", mock_server.uri());
    Downloader::new()
        .url(&url)
        .file(&output_file)
        .header("Authorization", "Bearer secret-token")
        .silent()
        .download()
        .await
        .unwrap();

    assert_eq!(std::fs::read_to_string(&output_file).unwrap(), "ok");
}

#[tokio::test]
async fn test_default_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ua"))
        .and(header(
            "User-Agent",
            format!("ccs-deps/{}", env!("CARGO_PKG_VERSION")).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("ua"))
        .mount(&mock_server)
        .await;

    let temp_dir = temp_dir();
    let output_file = temp_dir.path().join("ua.txt");

    let url = format!("{}/ua", mock_server.uri());
    Downloader::new()
        .url(&url)
        .file(&output_file)
        .silent()
        .download()
        .await
        .unwrap();

    assert_eq!(std::fs::read_to_string(&output_file).unwrap(), "ua");
}
