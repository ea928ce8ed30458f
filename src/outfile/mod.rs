//! Output filename construction for measurement result files.
//!
//! Composes a deterministic, sanitized filename from the semantic fields of a
//! data window and joins it onto the output directory.

mod sanitize;

pub use sanitize::strip_special_chars;

use std::path::{Path, PathBuf};

/// Filename label for results flagged as affected.
const AFFECTED: &str = "affected";
/// Filename label for unflagged results.
const NOT_AFFECTED: &str = "not_affected";

/// Semantic fields describing one output file.
///
/// Empty `site`, `client_provider`, and `client_country` values are treated
/// as absent and omitted from the filename.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputFile<'a> {
    /// Start of the data window (e.g. "20200101").
    pub date: &'a str,
    /// Duration of the data window (e.g. "1d").
    pub duration: &'a str,
    /// Site the data was collected from (e.g. "lga01").
    pub site: &'a str,
    /// Client provider associated with the test results.
    pub client_provider: &'a str,
    /// Client country associated with the test results.
    pub client_country: &'a str,
    /// Metric the data represents (e.g. "download_throughput").
    pub metric: &'a str,
    /// Whether the test is marked as affected.
    pub is_affected: bool,
    /// Trailing note or extension (e.g. ".csv" or "-bigquery.sql").
    pub suffix: &'a str,
}

/// Builds the full output path for a result file.
///
/// The filename renders as
/// `{date}+{duration}_{joined_properties}_{metric}-{affected_label}{suffix}`,
/// where `joined_properties` is the non-empty values among site, client
/// country, and client provider joined with `_`. Shell special characters are
/// stripped from the filename only; the directory portion is joined as-is
/// with exactly one separator.
///
/// Deterministic, with no filesystem access. When all three property fields
/// are empty the joined segment is empty and the filename keeps a double
/// underscore; existing result sets were written with those names, so the
/// double underscore is not collapsed.
pub fn build_filename(outpath: &Path, file: &OutputFile) -> PathBuf {
    let affected_label = if file.is_affected { AFFECTED } else { NOT_AFFECTED };
    let filename = format!(
        "{}+{}_{}_{}-{}{}",
        file.date,
        file.duration,
        joined_properties(file),
        file.metric,
        affected_label,
        file.suffix
    );
    outpath.join(strip_special_chars(&filename))
}

/// Joins the non-empty property fields with `_`: site, then country, then
/// provider. Skipped fields leave no empty segment behind.
fn joined_properties(file: &OutputFile) -> String {
    [file.site, file.client_country, file.client_provider]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("_")
}
