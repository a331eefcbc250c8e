//! Tests for the get subcommand.

use super::parse;
use crate::cli::commands::GetArgs;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;
use vdl_core::config::VdlConfig;
use vdl_core::DigestAlgorithm;

#[test]
fn cli_parse_get_minimal() {
    match parse(&[
        "vdl",
        "get",
        "https://example.com/node.tar.gz",
        "/tmp/node.tar.gz",
        "--checksum",
        "abc123",
    ]) {
        CliCommand::Get {
            url,
            dest,
            checksum,
            algorithm,
            retries,
        } => {
            assert_eq!(url, "https://example.com/node.tar.gz");
            assert_eq!(dest, Path::new("/tmp/node.tar.gz"));
            assert_eq!(checksum, "abc123");
            assert!(algorithm.is_none());
            assert!(retries.is_none());
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_get_algorithm_and_retries() {
    match parse(&[
        "vdl", "get", "https://x/y", "y", "-c", "ff", "-a", "SHA-512", "-r", "4",
    ]) {
        CliCommand::Get {
            algorithm, retries, ..
        } => {
            assert_eq!(algorithm, Some(DigestAlgorithm::Sha512));
            assert_eq!(retries, Some(4));
        }
        _ => panic!("expected Get with options"),
    }
}

#[test]
fn cli_parse_get_requires_checksum() {
    assert!(Cli::try_parse_from(["vdl", "get", "https://x/y", "y"]).is_err());
}

#[test]
fn cli_parse_get_rejects_unknown_algorithm() {
    assert!(
        Cli::try_parse_from(["vdl", "get", "https://x/y", "y", "-c", "ff", "-a", "md5"]).is_err()
    );
}

#[test]
fn get_args_fall_back_to_config() {
    let cfg = VdlConfig {
        default_algorithm: DigestAlgorithm::Sha1,
        retries: 7,
        ..VdlConfig::default()
    };
    let args = GetArgs {
        url: "https://x/y".into(),
        dest: "y".into(),
        checksum: "ff".into(),
        algorithm: None,
        retries: None,
    };
    let req = args.into_request(&cfg);
    assert_eq!(req.algorithm(), DigestAlgorithm::Sha1);
    assert_eq!(req.retries(), 7);

    let args = GetArgs {
        url: "https://x/y".into(),
        dest: "y".into(),
        checksum: "ff".into(),
        algorithm: Some(DigestAlgorithm::Sha384),
        retries: Some(0),
    };
    let req = args.into_request(&cfg);
    assert_eq!(req.algorithm(), DigestAlgorithm::Sha384);
    assert_eq!(req.retries(), 0);
}
