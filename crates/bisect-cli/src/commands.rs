//! Command implementations
//!
//! Each command returns its rendered output and a [`Status`]; printing and
//! exiting happen in `main`.

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{self, ValueKind, Values};
use crate::output::{self, CheckReport, OutputFormat, SearchReport};
use bisect_core::{check_sorted, search_traced, SearchOutcome};
use std::fmt::Display;
use std::path::PathBuf;

/// Values searched by `bisect demo`
///
/// Mirrors `bisect_test_utils::DEMO_VALUES`, which is only a dev-dependency
/// here; `demo_matches_shared_fixture` keeps the two equal.
pub(crate) const DEMO_VALUES: [i64; 5] = [2, 3, 4, 10, 40];

/// Target searched by `bisect demo` unless overridden
pub(crate) const DEMO_TARGET: i64 = 10;

/// Whether a command found what it looked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    /// Target found, or sequence sorted
    Success,
    /// Target absent, or sequence unsorted
    Negative,
}

impl Status {
    pub(crate) fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Negative => 1,
        }
    }
}

/// Rendered output plus status
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Completed {
    pub(crate) output: String,
    pub(crate) status: Status,
}

/// Where a list comes from
#[derive(Debug, Clone, Default)]
pub(crate) struct ListSource {
    pub(crate) values: Option<String>,
    pub(crate) file: Option<PathBuf>,
    pub(crate) text: bool,
}

impl ListSource {
    fn load(&self) -> Result<Values, CliError> {
        input::load(
            self.values.as_deref(),
            self.file.as_deref(),
            ValueKind::from_text_flag(self.text),
        )
    }
}

/// Options for `bisect search`, after merging flags over config
#[derive(Debug, Clone)]
pub(crate) struct SearchRequest {
    pub(crate) target: String,
    pub(crate) source: ListSource,
    pub(crate) checked: bool,
    pub(crate) trace: bool,
    pub(crate) format: OutputFormat,
}

impl SearchRequest {
    /// Merge command-line choices over config defaults
    ///
    /// `None` means the flag was not given either way; the config decides.
    pub(crate) fn new(
        target: String,
        source: ListSource,
        checked: Option<bool>,
        trace: Option<bool>,
        format: Option<OutputFormat>,
        config: &CliConfig,
    ) -> Self {
        Self {
            target,
            source,
            checked: checked.unwrap_or(config.checked),
            trace: trace.unwrap_or(config.trace),
            format: format.unwrap_or(config.format),
        }
    }
}

/// Run `bisect search`
///
/// # Errors
/// Returns error on unreadable or unparsable input, or unsorted input
/// when `checked` is set
pub(crate) fn search(request: &SearchRequest) -> Result<Completed, CliError> {
    let report = match request.source.load()? {
        Values::Integers(values) => {
            let target = input::parse_integer_target(&request.target)?;
            build_report(&values, &target, request.checked, request.trace)?
        }
        Values::Text(values) => {
            let target = request.target.trim().to_string();
            build_report(&values, &target, request.checked, request.trace)?
        }
    };

    finish_search(&report, request.format)
}

/// Run `bisect demo`
///
/// # Errors
/// Returns error only if rendering fails
pub(crate) fn demo(target: Option<i64>, trace: bool, format: OutputFormat) -> Result<Completed, CliError> {
    let target = target.unwrap_or(DEMO_TARGET);
    let report = build_report(&DEMO_VALUES, &target, false, trace)?;
    finish_search(&report, format)
}

/// Run `bisect check`
///
/// # Errors
/// Returns error on unreadable or unparsable input
pub(crate) fn check(source: &ListSource, format: OutputFormat) -> Result<Completed, CliError> {
    let report = match source.load()? {
        Values::Integers(values) => CheckReport::new(values.len(), &check_sorted(&values)),
        Values::Text(values) => CheckReport::new(values.len(), &check_sorted(&values)),
    };

    if let Some(index) = report.first_descent {
        tracing::warn!(index, "sequence is not sorted");
    }

    let status = if report.sorted {
        Status::Success
    } else {
        Status::Negative
    };

    Ok(Completed {
        output: output::render_check(&report, format)?,
        status,
    })
}

fn build_report<T: Ord + Display>(
    values: &[T],
    target: &T,
    checked: bool,
    with_probes: bool,
) -> Result<SearchReport, CliError> {
    if checked {
        check_sorted(values)?;
    }

    let (outcome, trace) = search_traced(values, target);
    tracing::info!(
        %target,
        len = values.len(),
        %outcome,
        comparisons = trace.comparisons(),
        "search finished"
    );

    Ok(SearchReport::new(target, outcome, trace, with_probes))
}

fn finish_search(report: &SearchReport, format: OutputFormat) -> Result<Completed, CliError> {
    let status = match report.outcome {
        SearchOutcome::Found(_) => Status::Success,
        SearchOutcome::NotFound => Status::Negative,
    };

    Ok(Completed {
        output: output::render_search(report, format)?,
        status,
    })
}
