//! CLI for the telescope output-path tool.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::cache;
use crate::config::{self, OutputConfig};
use crate::outfile::{build_filename, OutputFile};

/// Top-level CLI for building output paths and probing the result cache.
#[derive(Debug, Parser)]
#[command(name = "telescope-output")]
#[command(about = "Builds sanitized output paths for measurement result files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build the output path for a result file and print it.
    BuildPath {
        #[command(flatten)]
        fields: FieldArgs,

        /// Directory the file will be written to (defaults to the configured output_dir).
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Create the output directory (and missing parents) if absent.
        #[arg(long)]
        ensure_dir: bool,
    },

    /// Report whether a cached result already exists at the given path.
    CacheStatus {
        /// Path to the cache file.
        path: PathBuf,

        /// Manifest path (accepted for compatibility; not yet consulted).
        #[arg(long, value_name = "PATH")]
        manifest: Option<PathBuf>,
    },
}

/// Semantic fields of the output filename, as flags.
#[derive(Debug, Args)]
pub struct FieldArgs {
    /// Start of the data window (e.g. 20200101).
    #[arg(long)]
    pub date: String,

    /// Duration of the data window (e.g. 1d).
    #[arg(long)]
    pub duration: String,

    /// Site the data was collected from (e.g. lga01).
    #[arg(long, default_value = "")]
    pub site: String,

    /// Client provider associated with the test results.
    #[arg(long, default_value = "")]
    pub client_provider: String,

    /// Client country associated with the test results.
    #[arg(long, default_value = "")]
    pub client_country: String,

    /// Metric the data represents (e.g. download_throughput).
    #[arg(long)]
    pub metric: String,

    /// Mark the results as affected.
    #[arg(long)]
    pub affected: bool,

    /// Suffix appended to the filename (defaults to the configured default_suffix).
    #[arg(long, allow_hyphen_values = true)]
    pub suffix: Option<String>,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::BuildPath {
                fields,
                out_dir,
                ensure_dir,
            } => run_build_path(&cfg, &fields, out_dir.as_deref(), ensure_dir)?,
            CliCommand::CacheStatus { path, manifest } => {
                run_cache_status(&path, manifest.as_deref())
            }
        }

        Ok(())
    }
}

fn run_build_path(
    cfg: &OutputConfig,
    fields: &FieldArgs,
    out_dir: Option<&Path>,
    ensure_dir: bool,
) -> Result<()> {
    let out_dir = out_dir.unwrap_or(&cfg.output_dir);
    if ensure_dir {
        cache::ensure_directory(out_dir)?;
    }
    let suffix = fields.suffix.as_deref().unwrap_or(&cfg.default_suffix);
    let path = build_filename(
        out_dir,
        &OutputFile {
            date: &fields.date,
            duration: &fields.duration,
            site: &fields.site,
            client_provider: &fields.client_provider,
            client_country: &fields.client_country,
            metric: &fields.metric,
            is_affected: fields.affected,
            suffix,
        },
    );
    println!("{}", path.display());
    Ok(())
}

fn run_cache_status(path: &Path, manifest: Option<&Path>) {
    if cache::has_cached_result(path, manifest) {
        println!("cached  {}", path.display());
    } else {
        println!("missing {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> CliCommand {
        Cli::try_parse_from(args).expect("parse").command
    }

    #[test]
    fn cli_parse_build_path() {
        match parse(&[
            "telescope-output",
            "build-path",
            "--date",
            "20200101",
            "--duration",
            "1d",
            "--site",
            "lga01",
            "--metric",
            "download_throughput",
            "--affected",
        ]) {
            CliCommand::BuildPath {
                fields,
                out_dir,
                ensure_dir,
            } => {
                assert_eq!(fields.date, "20200101");
                assert_eq!(fields.duration, "1d");
                assert_eq!(fields.site, "lga01");
                assert_eq!(fields.client_provider, "");
                assert_eq!(fields.client_country, "");
                assert_eq!(fields.metric, "download_throughput");
                assert!(fields.affected);
                assert!(fields.suffix.is_none());
                assert!(out_dir.is_none());
                assert!(!ensure_dir);
            }
            _ => panic!("expected BuildPath"),
        }
    }

    #[test]
    fn cli_parse_build_path_out_dir_and_suffix() {
        match parse(&[
            "telescope-output",
            "build-path",
            "--date",
            "20200101",
            "--duration",
            "30d",
            "--metric",
            "minimum_rtt",
            "--suffix",
            "-bigquery.sql",
            "--out-dir",
            "/tmp/results",
            "--ensure-dir",
        ]) {
            CliCommand::BuildPath {
                fields,
                out_dir,
                ensure_dir,
            } => {
                assert_eq!(fields.suffix.as_deref(), Some("-bigquery.sql"));
                assert_eq!(out_dir.as_deref(), Some(Path::new("/tmp/results")));
                assert!(ensure_dir);
                assert!(!fields.affected);
            }
            _ => panic!("expected BuildPath with --out-dir"),
        }
    }

    #[test]
    fn cli_parse_cache_status() {
        match parse(&["telescope-output", "cache-status", "/out/results.csv"]) {
            CliCommand::CacheStatus { path, manifest } => {
                assert_eq!(path, PathBuf::from("/out/results.csv"));
                assert!(manifest.is_none());
            }
            _ => panic!("expected CacheStatus"),
        }
    }

    #[test]
    fn cli_parse_cache_status_manifest() {
        match parse(&[
            "telescope-output",
            "cache-status",
            "/out/results.csv",
            "--manifest",
            "/out/manifest.json",
        ]) {
            CliCommand::CacheStatus { path, manifest } => {
                assert_eq!(path, PathBuf::from("/out/results.csv"));
                assert_eq!(manifest.as_deref(), Some(Path::new("/out/manifest.json")));
            }
            _ => panic!("expected CacheStatus with --manifest"),
        }
    }

    #[test]
    fn cli_parse_missing_required_field_fails() {
        assert!(Cli::try_parse_from(["telescope-output", "build-path", "--date", "20200101"])
            .is_err());
    }
}
