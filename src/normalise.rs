//! Publication metadata normalisation.
//!
//! Generated descriptors embed a publish timestamp and per-file checksums,
//! so two otherwise identical publishes never compare equal. Normalisation
//! rewrites those fields to fixed placeholders by exact text substitution —
//! never by parse-and-re-serialise — so unrelated formatting survives and
//! repeated output is byte-for-byte comparable.
//!
//! Every step is idempotent: a second run over normalised files finds the
//! placeholders already in place and leaves the bytes untouched.

use camino::Utf8Path;
use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{BurnishError, Result};
use crate::walk::files_under;

/// File name of the per-module versions descriptor.
pub const MAVEN_METADATA_FILE: &str = "maven-metadata.xml";

static LAST_UPDATED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<lastUpdated>\d+</lastUpdated>").expect("literal pattern"));

static SIZE_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""size":\s+\d+"#).expect("literal pattern"));

static HASH_FIELDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""(sha512|sha1|sha256|md5)":\s+"\w+""#).expect("literal pattern"));

/// The placeholder timestamp: midnight, Jan 1 of `year`.
///
/// # Examples
///
/// ```
/// use burnish::normalise::normalised_timestamp;
///
/// assert_eq!(normalised_timestamp(2024), "20240101000000");
/// ```
#[must_use]
pub fn normalised_timestamp(year: i32) -> String {
    format!("{year}0101000000")
}

/// Rewrite every `<lastUpdated>` element to the placeholder for `year`.
///
/// Content without the element passes through unchanged.
///
/// # Examples
///
/// ```
/// use burnish::normalise::patch_last_updated;
///
/// let patched = patch_last_updated("<lastUpdated>20230615120000</lastUpdated>", 2024);
/// assert_eq!(patched, "<lastUpdated>20240101000000</lastUpdated>");
/// ```
#[must_use]
pub fn patch_last_updated(content: &str, year: i32) -> String {
    let replacement = format!("<lastUpdated>{}</lastUpdated>", normalised_timestamp(year));
    LAST_UPDATED
        .replace_all(content, replacement.as_str())
        .into_owned()
}

/// Scrub the volatile fields of a module descriptor.
///
/// `"size"` values become `0`; `"sha512"`, `"sha1"`, `"sha256"`, and
/// `"md5"` values become empty strings. Fields absent from the content are
/// simply not rewritten.
#[must_use]
pub fn scrub_volatile_fields(content: &str) -> String {
    let scrubbed = SIZE_FIELD.replace_all(content, r#""size": 0"#);
    HASH_FIELDS
        .replace_all(&scrubbed, r#""${1}": """#)
        .into_owned()
}

/// Normalise a published module directory in place, using the current year
/// for the timestamp placeholder.
///
/// # Errors
///
/// Fails when the maven-metadata descriptor is missing or a file cannot be
/// read or written. See [`normalise_publication_at`].
pub fn normalise_publication(module_dir: &Utf8Path) -> Result<()> {
    normalise_publication_at(module_dir, chrono::Utc::now().year())
}

/// Normalise a published module directory in place with an explicit year.
///
/// Rewrites the `maven-metadata.xml` at the directory root first, then
/// scrubs every `.module` descriptor beneath it. Files whose patched
/// content is unchanged are not rewritten on disk.
///
/// # Errors
///
/// Returns [`BurnishError::DescriptorMissing`] when the maven-metadata
/// descriptor is absent, and read/write errors for files that cannot be
/// rewritten.
pub fn normalise_publication_at(module_dir: &Utf8Path, year: i32) -> Result<()> {
    rewrite_maven_metadata(module_dir, year)?;
    scrub_module_descriptors(module_dir)
}

fn rewrite_maven_metadata(module_dir: &Utf8Path, year: i32) -> Result<()> {
    let metadata = module_dir.join(MAVEN_METADATA_FILE);
    if !metadata.is_file() {
        return Err(BurnishError::DescriptorMissing { path: metadata });
    }
    rewrite_file(&metadata, |content| patch_last_updated(content, year))
}

fn scrub_module_descriptors(module_dir: &Utf8Path) -> Result<()> {
    for file in files_under(module_dir)? {
        if file.extension().is_some_and(|extension| extension == "module") {
            rewrite_file(&file, scrub_volatile_fields)?;
        }
    }
    Ok(())
}

fn rewrite_file<F>(path: &Utf8Path, transform: F) -> Result<()>
where
    F: FnOnce(&str) -> String,
{
    let content = std::fs::read_to_string(path).map_err(|source| BurnishError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let patched = transform(&content);
    if patched == content {
        log::trace!("{path} already normalised");
        return Ok(());
    }
    std::fs::write(path, &patched).map_err(|source| BurnishError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    log::trace!("normalised {path}");
    Ok(())
}
