//! Integration tests for argument parsing.
//!
//! These tests go through the public `Cli` and `Config` API the binary uses.

use std::time::Duration;

use clap::Parser;
use retrieve_secret::cli::Cli;
use retrieve_secret::config::{DEFAULT_REGION, DEFAULT_SESSION_NAME, DEFAULT_TIMEOUT_MS};
use retrieve_secret::error::EXIT_FAILURE;
use retrieve_secret::{Config, RetrieveError};

fn parse(args: &[&str]) -> Result<Config, RetrieveError> {
    let cli = Cli::try_parse_from(std::iter::once("retrieve-secret").chain(args.iter().copied()))
        .expect("flags should parse");
    Config::try_from(cli)
}

/// Same path as the binary: flag parse errors and validation errors both
/// become `RetrieveError`.
fn parse_flags(args: &[&str]) -> Result<Config, RetrieveError> {
    let cli = Cli::try_parse_from(std::iter::once("retrieve-secret").chain(args.iter().copied()))?;
    Config::try_from(cli)
}

#[test]
fn test_defaults_applied() {
    let config = parse(&["-s", "prod/db"]).unwrap();

    assert_eq!(config.region(), DEFAULT_REGION);
    assert_eq!(config.secret_ids(), ["prod/db"]);
    assert_eq!(config.role_arn(), None);
    assert_eq!(config.timeout(), Duration::from_millis(DEFAULT_TIMEOUT_MS));
    assert_eq!(config.session_name(), DEFAULT_SESSION_NAME);
}

#[test]
fn test_all_flags() {
    let config = parse(&[
        "-r",
        "eu-west-1",
        "-s",
        "one,two,three",
        "-a",
        "arn:aws:iam::123456789012:role/reader",
        "-t",
        "250",
        "-n",
        "ci-run",
    ])
    .unwrap();

    assert_eq!(config.region(), "eu-west-1");
    assert_eq!(config.secret_ids(), ["one", "two", "three"]);
    assert_eq!(
        config.role_arn(),
        Some("arn:aws:iam::123456789012:role/reader")
    );
    assert_eq!(config.timeout(), Duration::from_millis(250));
    assert_eq!(config.session_name(), "ci-run");
}

#[test]
fn test_missing_secret_ids_fails() {
    let err = parse(&["-r", "us-east-1"]).unwrap_err();
    assert!(err.is_usage());
}

#[test]
fn test_empty_secret_ids_fails() {
    let err = parse(&["-s", ""]).unwrap_err();
    assert!(err.is_usage());
}

#[test]
fn test_empty_region_fails() {
    let err = parse(&["-r", "", "-s", "prod/db"]).unwrap_err();
    assert!(err.is_usage());
}

#[test]
fn test_secret_ids_set_twice_fails() {
    for args in [
        ["-s", "a", "-s", "b"],
        ["-s", "a,b", "-s", "a,b"],
        ["-s", "", "-s", ""],
    ] {
        let err = parse(&args).unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("already set"), "{err}");
    }
}

#[test]
fn test_empty_role_arn_means_no_role() {
    let config = parse(&["-s", "prod/db", "-a", ""]).unwrap();
    assert_eq!(config.role_arn(), None);
}

#[test]
fn test_zero_timeout_accepted() {
    let config = parse(&["-s", "prod/db", "-t", "0"]).unwrap();
    assert_eq!(config.timeout(), Duration::ZERO);
}

#[test]
fn test_non_numeric_timeout_rejected_by_parser() {
    assert!(Cli::try_parse_from(["retrieve-secret", "-s", "x", "-t", "soon"]).is_err());
}

#[test]
fn test_flag_errors_exit_like_validation_errors() {
    let bad_timeout = parse_flags(&["-s", "x", "-t", "soon"]).unwrap_err();
    let unknown_flag = parse_flags(&["-s", "x", "-z"]).unwrap_err();
    let repeated_ids = parse_flags(&["-s", "a", "-s", "b"]).unwrap_err();
    let empty_region = parse_flags(&["-r", "", "-s", "x"]).unwrap_err();

    for err in [&bad_timeout, &unknown_flag, &repeated_ids, &empty_region] {
        assert!(err.is_usage(), "{err:?}");
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }
    assert!(bad_timeout.to_string().contains("-t"), "{bad_timeout}");
    assert!(!bad_timeout.to_string().starts_with("error:"));
}
