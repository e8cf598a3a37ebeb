//! Tests for the resolve and slug subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_resolve_defaults() {
    match parse(&["shipdex", "resolve"]) {
        CliCommand::Resolve { output, jobs } => {
            assert!(output.is_none());
            assert!(jobs.is_none());
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_output_and_jobs() {
    match parse(&["shipdex", "resolve", "-o", "public/images.json", "--jobs", "4"]) {
        CliCommand::Resolve { output, jobs } => {
            assert_eq!(output.as_deref(), Some(Path::new("public/images.json")));
            assert_eq!(jobs, Some(4));
        }
        _ => panic!("expected Resolve with output and jobs"),
    }
}

#[test]
fn cli_parse_resolve_rejects_bad_jobs() {
    assert!(Cli::try_parse_from(["shipdex", "resolve", "--jobs", "many"]).is_err());
}

#[test]
fn cli_parse_slug() {
    match parse(&["shipdex", "slug", "TIE Advanced x1"]) {
        CliCommand::Slug { name } => assert_eq!(name, "TIE Advanced x1"),
        _ => panic!("expected Slug"),
    }
}
