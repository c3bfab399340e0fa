//! Output formatting for burnish commands.
//!
//! This module provides utilities to format command results for
//! human-readable or JSON output. Human output stays machine-pasteable:
//! the args command prints one token per line with nothing interleaved,
//! so commentary such as the rerun report goes to stderr instead.

use burnish::fingerprint::PublicationDigest;
use burnish::publish::RemotePublishPlan;
use burnish::rerun::up_to_date_when;
use serde::Serialize;

/// JSON-serialisable view of an assembled argument vector.
#[derive(Debug, Serialize)]
pub struct ArgumentsView {
    /// The `-D` tokens in provider order.
    pub arguments: Vec<String>,
    /// Whether the test task is forced to rerun.
    pub rerun: bool,
    /// The value handed to the host engine's up-to-date check.
    pub up_to_date_when: bool,
}

impl ArgumentsView {
    /// Build a view from the assembled tokens and the resolved rerun flag.
    #[must_use]
    pub fn new(arguments: Vec<String>, rerun: bool) -> Self {
        Self {
            arguments,
            rerun,
            up_to_date_when: up_to_date_when(rerun),
        }
    }
}

/// JSON-serialisable view of a remote publish plan.
#[derive(Debug, Serialize)]
pub struct PlanView {
    /// Target repository URL.
    pub url: String,
    /// Whether the publish would run.
    pub enabled: bool,
}

impl From<&RemotePublishPlan> for PlanView {
    fn from(plan: &RemotePublishPlan) -> Self {
        Self {
            url: plan.url.clone(),
            enabled: plan.enabled,
        }
    }
}

/// JSON-serialisable view of a publication fingerprint.
#[derive(Debug, Serialize)]
pub struct FingerprintView {
    /// Lowercase hex SHA-256 digest of the module's descriptor set.
    pub fingerprint: String,
}

impl From<&PublicationDigest> for FingerprintView {
    fn from(digest: &PublicationDigest) -> Self {
        Self {
            fingerprint: digest.as_ref().to_owned(),
        }
    }
}

/// Format an argument vector for human-readable output, one token per line.
#[must_use]
pub fn format_arguments_human(arguments: &[String]) -> String {
    arguments.join("\n")
}

/// One-line rerun summary for the stderr channel.
#[must_use]
pub fn rerun_report(rerun: bool) -> String {
    if rerun {
        "rerun forced; up-to-date check disabled".to_owned()
    } else {
        "rerun not forced; up-to-date check active".to_owned()
    }
}

/// Format a remote publish plan for human-readable output.
#[must_use]
pub fn format_plan_human(plan: &RemotePublishPlan) -> String {
    let uploads = if plan.enabled { "enabled" } else { "disabled" };
    format!("Remote repository: {}\nUploads: {uploads}", plan.url)
}

/// Format any view as pretty-printed JSON.
#[must_use]
pub fn format_json<T: Serialize>(view: &T) -> String {
    // Use pretty printing for readability
    serde_json::to_string_pretty(view).unwrap_or_else(|_| "{}".to_owned())
}
