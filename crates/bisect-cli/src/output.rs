//! Rendering command results as text or JSON

use crate::error::CliError;
use bisect_core::{Probe, SearchError, SearchOutcome, SearchTrace};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write as _};

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Human-readable sentences
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Result of one search, ready to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SearchReport {
    pub(crate) target: String,
    pub(crate) outcome: SearchOutcome,
    /// Index, or `-1` when not found
    pub(crate) index: i64,
    pub(crate) comparisons: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) probes: Option<Vec<Probe>>,
}

impl SearchReport {
    /// Build a report; probes are kept only when `with_probes` is set
    pub(crate) fn new(
        target: &impl Display,
        outcome: SearchOutcome,
        trace: SearchTrace,
        with_probes: bool,
    ) -> Self {
        Self {
            target: target.to_string(),
            outcome,
            index: outcome.sentinel(),
            comparisons: trace.comparisons(),
            probes: with_probes.then(|| trace.probes().to_vec()),
        }
    }
}

/// Result of a sortedness check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CheckReport {
    pub(crate) sorted: bool,
    pub(crate) len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) first_descent: Option<usize>,
}

impl CheckReport {
    pub(crate) fn new(len: usize, result: &Result<(), SearchError>) -> Self {
        let first_descent = result.as_ref().err().and_then(SearchError::unsorted_at);
        Self {
            sorted: first_descent.is_none(),
            len,
            first_descent,
        }
    }
}

/// Render a search report
///
/// # Errors
/// Returns [`CliError::Render`] if JSON encoding fails
pub(crate) fn render_search(report: &SearchReport, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let mut out = String::new();
            if let Some(probes) = &report.probes {
                for (step, probe) in probes.iter().enumerate() {
                    // Writing to a String cannot fail
                    let _ = writeln!(out, "probe {}: {probe}", step + 1);
                }
            }
            match report.outcome {
                SearchOutcome::Found(index) => {
                    let _ = write!(out, "element {} is at index {index}", report.target);
                }
                SearchOutcome::NotFound => {
                    let _ = write!(out, "element {} is not in the array", report.target);
                }
            }
            if report.probes.is_some() {
                let _ = write!(out, " ({} comparisons)", report.comparisons);
            }
            Ok(out)
        }
    }
}

/// Render a check report
///
/// # Errors
/// Returns [`CliError::Render`] if JSON encoding fails
pub(crate) fn render_check(report: &CheckReport, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(match report.first_descent {
            None => format!("sorted ({} elements)", report.len),
            Some(index) => format!(
                "not sorted: element at index {index} is smaller than its predecessor ({} elements)",
                report.len
            ),
        }),
    }
}
