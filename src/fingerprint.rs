//! Publication fingerprinting for cross-run comparison.
//!
//! Normalisation makes repeated publishes byte-for-byte comparable; the
//! fingerprint is the check. It hashes a module's descriptor files — the
//! normalised set, not the jars — in sorted relative-path order, so two
//! publishes of the same input yield the same digest and any descriptor
//! drift changes it.

use std::fmt;

use camino::Utf8Path;
use sha2::{Digest, Sha256};

use crate::error::{BurnishError, Result};
use crate::walk::files_under;

/// Expected length of a hex-encoded SHA-256 digest.
const DIGEST_HEX_LEN: usize = 64;

/// Descriptor extensions included in the fingerprint.
const FINGERPRINT_EXTENSIONS: &[&str] = &["module", "pom", "xml", "metadata"];

/// A validated hex-encoded SHA-256 digest of a publication's descriptors.
///
/// # Examples
///
/// ```
/// use burnish::fingerprint::PublicationDigest;
///
/// let hex = "a".repeat(64);
/// let digest = PublicationDigest::try_from(hex.as_str()).expect("well-formed");
/// assert_eq!(digest.as_str().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicationDigest(String);

impl PublicationDigest {
    /// Return the digest as a hex string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for PublicationDigest {
    type Error = BurnishError;

    fn try_from(value: &str) -> Result<Self> {
        validate_digest(value)?;
        Ok(Self(value.to_owned()))
    }
}

impl TryFrom<String> for PublicationDigest {
    type Error = BurnishError;

    fn try_from(value: String) -> Result<Self> {
        validate_digest(&value)?;
        Ok(Self(value))
    }
}

impl AsRef<str> for PublicationDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublicationDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn validate_digest(value: &str) -> Result<()> {
    if value.len() != DIGEST_HEX_LEN {
        return Err(BurnishError::InvalidDigest {
            reason: format!(
                "expected {DIGEST_HEX_LEN} hex characters, got {}",
                value.len()
            ),
        });
    }
    if let Some(bad) = value
        .chars()
        .find(|c| !c.is_ascii_hexdigit() || c.is_ascii_uppercase())
    {
        return Err(BurnishError::InvalidDigest {
            reason: format!("unexpected character '{bad}'"),
        });
    }
    Ok(())
}

/// Hash the module's descriptor files into one digest.
///
/// Files are visited in sorted relative-path order; each contributes its
/// relative path, a separator, its length, and its contents, so renames and
/// content edits are both detected. Jars and other non-descriptor files are
/// excluded — after normalisation only the descriptors are expected to be
/// byte-stable.
///
/// # Errors
///
/// Returns scan or read errors when the tree cannot be traversed or a
/// descriptor cannot be read.
pub fn publication_fingerprint(module_dir: &Utf8Path) -> Result<PublicationDigest> {
    let mut hasher = Sha256::new();
    for file in files_under(module_dir)? {
        let is_descriptor = file
            .extension()
            .is_some_and(|extension| FINGERPRINT_EXTENSIONS.contains(&extension));
        if !is_descriptor {
            continue;
        }
        let relative = file.strip_prefix(module_dir).unwrap_or(file.as_path());
        let contents = std::fs::read(&file).map_err(|source| BurnishError::ReadFailed {
            path: file.to_path_buf(),
            source,
        })?;
        hasher.update(relative.as_str().as_bytes());
        hasher.update([0u8]);
        hasher.update(u64::try_from(contents.len()).unwrap_or(u64::MAX).to_be_bytes());
        hasher.update(&contents);
    }
    Ok(PublicationDigest(format!("{:x}", hasher.finalize())))
}
