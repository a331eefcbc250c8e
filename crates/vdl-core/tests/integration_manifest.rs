//! Integration test: manifest runs against a local scripted server.

mod common;

use common::scripted_server::{self, Reply};
use std::fs;
use tempfile::tempdir;
use vdl_core::manifest::{self, EntryDefaults};
use vdl_core::{CurlTransport, DigestAlgorithm, Downloader, ErrorClass};

const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";
const HELLO_SHA1: &str = "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d";

const DEFAULTS: EntryDefaults = EntryDefaults {
    algorithm: DigestAlgorithm::Sha256,
    retries: 0,
};

#[test]
fn manifest_downloads_every_entry_in_order() {
    let server = scripted_server::serve(b"hello");
    let dir = tempdir().unwrap();
    let manifest_path = dir.path().join("downloads.toml");
    fs::write(
        &manifest_path,
        format!(
            r#"
            [[download]]
            url = "{url}a"
            destination = "vendor/a.txt"
            checksum = "{HELLO_SHA256}"

            [[download]]
            url = "{url}b"
            destination = "vendor/b.txt"
            checksum = "{HELLO_SHA1}"
            algorithm = "sha1"
            "#,
            url = server.url
        ),
    )
    .unwrap();

    let m = manifest::load(&manifest_path).unwrap();
    let verified = manifest::run(&m, &Downloader::new(CurlTransport::default()), DEFAULTS).unwrap();

    assert_eq!(verified.len(), 2);
    assert_eq!(verified[1].digest, HELLO_SHA1);
    assert_eq!(fs::read(dir.path().join("vendor/a.txt")).unwrap(), b"hello");
    assert_eq!(fs::read(dir.path().join("vendor/b.txt")).unwrap(), b"hello");
    assert_eq!(server.hits(), 2);
}

#[test]
fn manifest_stops_at_first_failure() {
    let server = scripted_server::start(
        vec![Reply::Ok(b"hello".to_vec()), Reply::Status(500)],
        Reply::Ok(b"hello".to_vec()),
    );
    let dir = tempdir().unwrap();
    let manifest_path = dir.path().join("downloads.toml");
    fs::write(
        &manifest_path,
        format!(
            r#"
            [[download]]
            url = "{url}one"
            destination = "one.txt"
            checksum = "{HELLO_SHA256}"

            [[download]]
            url = "{url}two"
            destination = "two.txt"
            checksum = "{HELLO_SHA256}"

            [[download]]
            url = "{url}three"
            destination = "three.txt"
            checksum = "{HELLO_SHA256}"
            "#,
            url = server.url
        ),
    )
    .unwrap();

    let m = manifest::load(&manifest_path).unwrap();
    let err = manifest::run(&m, &Downloader::new(CurlTransport::default()), DEFAULTS).unwrap_err();

    assert_eq!(err.index, 1);
    assert_eq!(err.source.class(), ErrorClass::Transport);
    assert!(dir.path().join("one.txt").exists());
    assert!(!dir.path().join("two.txt").exists());
    assert!(!dir.path().join("three.txt").exists());
    assert_eq!(server.hits(), 2);
}
