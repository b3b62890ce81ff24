// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::archive::{extract_tar_gz, strip_top_level};
use super::*;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a `.tar.gz` whose entries live under a single `pkg-1.0/` directory.
fn tarball(files: &[(&str, &str)]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (name, content) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, format!("pkg-1.0/{name}"), content.as_bytes())
            .unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap()
}

#[test]
fn test_source_spec_supports() {
    let git_only = SourceSpec::git("https://example.com/a.git");
    assert!(git_only.supports(RetrievalMethod::Git));
    assert!(!git_only.supports(RetrievalMethod::Curl));

    let archive_only = SourceSpec::archive_only("https://example.com/a.tar.gz");
    assert!(!archive_only.supports(RetrievalMethod::Git));
    for method in [RetrievalMethod::Wget, RetrievalMethod::Curl, RetrievalMethod::Builtin] {
        assert!(archive_only.supports(method));
    }
}

#[test]
fn test_source_spec_git_tool_branch_and_depth() {
    let spec = SourceSpec::git("https://github.com/HDFGroup/hdf5.git")
        .branch("hdf5_1.14.4.3")
        .depth(1);

    let args = spec.git_tool(Path::new("/b/hdf5")).unwrap().clone_args().unwrap();
    assert_eq!(
        args,
        [
            "clone",
            "--depth",
            "1",
            "--branch",
            "hdf5_1.14.4.3",
            "https://github.com/HDFGroup/hdf5.git",
            "/b/hdf5"
        ]
    );
}

#[test]
fn test_source_spec_commit_checks_out() {
    let spec = SourceSpec::git("https://github.com/KarypisLab/GKlib.git").commit("8bd6bad750b2b0d908");
    let tool = spec.git_tool(Path::new("/b/gklib")).unwrap();

    assert_eq!(
        tool.checkout_args().unwrap(),
        Some(vec![
            "-C".to_string(),
            "/b/gklib".to_string(),
            "checkout".to_string(),
            "8bd6bad750b2b0d908".to_string()
        ])
    );
    assert!(SourceSpec::archive_only("x").git_tool(Path::new("/b")).is_none());
}

#[test]
fn test_archive_path_is_sibling() {
    assert_eq!(
        archive_path(Path::new("/tmp/build/hdf5")),
        Path::new("/tmp/build/hdf5.tar.gz")
    );
}

#[test]
fn test_download_args() {
    let out = Path::new("/tmp/x.tar.gz");
    assert_eq!(
        download_args(RetrievalMethod::Wget, "https://h/x", out),
        ["-O", "/tmp/x.tar.gz", "https://h/x"]
    );
    assert_eq!(
        download_args(RetrievalMethod::Curl, "https://h/x", out),
        ["-fL", "-o", "/tmp/x.tar.gz", "https://h/x"]
    );
}

#[test]
fn test_retrieval_method_display() {
    let names: Vec<_> = RetrievalMethod::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["git", "wget", "curl", "built-in download"]);
}

#[test]
fn test_strip_top_level() {
    assert_eq!(strip_top_level(Path::new("pkg/src/a.c")), Some("src/a.c".into()));
    assert_eq!(strip_top_level(Path::new("pkg/")), None);
    assert_eq!(strip_top_level(Path::new("pkg/../../etc/passwd")), None);
}

#[tokio::test]
async fn test_extract_tar_gz_strips_top_level() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("pkg.tar.gz");
    std::fs::write(
        &archive,
        tarball(&[("configure", "#!/bin/sh\n"), ("src/main.c", "int main;\n")]),
    )
    .unwrap();
    let dest = dir.path().join("pkg");

    let count = extract_tar_gz(&archive, &dest).await.unwrap();

    assert_eq!(count, 2);
    assert_eq!(std::fs::read_to_string(dest.join("configure")).unwrap(), "#!/bin/sh\n");
    assert_eq!(
        std::fs::read_to_string(dest.join("src/main.c")).unwrap(),
        "int main;\n"
    );
}

#[tokio::test]
async fn test_extract_tar_gz_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("bad.tar.gz");
    std::fs::write(&archive, b"not a tarball").unwrap();

    assert!(extract_tar_gz(&archive, &dir.path().join("out")).await.is_err());
}

#[tokio::test]
async fn test_retrieve_archive_replaces_stale_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pkg-1.0.tar.gz"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(tarball(&[("README", "hello\n")])))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("pkg");
    std::fs::create_dir_all(&dest).unwrap();
    std::fs::write(dest.join("stale.txt"), "old").unwrap();

    let spec = SourceSpec::archive_only(format!("{}/pkg-1.0.tar.gz", server.uri()));
    let used = retrieve("pkg", &spec, &dest).await.unwrap();

    assert_ne!(used, RetrievalMethod::Git);
    assert_eq!(std::fs::read_to_string(dest.join("README")).unwrap(), "hello\n");
    assert!(!dest.join("stale.txt").exists());
    assert!(!archive_path(&dest).exists());
}

#[tokio::test]
async fn test_retrieve_reports_every_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let spec = SourceSpec::archive_only(format!("{}/missing.tar.gz", server.uri()));

    let err = retrieve("missing", &spec, &dir.path().join("missing"))
        .await
        .unwrap_err();

    match err.downcast_ref::<InstallError>() {
        Some(InstallError::RetrievalFailed { name, attempts }) => {
            assert_eq!(name, "missing");
            assert_eq!(attempts.len(), 3);
            assert!(attempts[0].starts_with("wget: "));
            assert!(attempts[1].starts_with("curl: "));
            assert!(attempts[2].starts_with("built-in download: "));
        }
        other => panic!("expected RetrievalFailed, got {other:?}"),
    }
}
