//! Local publish pipeline and remote publish preflight.
//!
//! The local pipeline wraps an injected publish step: the module directory
//! is cleaned first, the step writes into the repository root, and the
//! freshly written descriptors are normalised. The remote side never
//! uploads from here — it resolves the target URL, applies the no-upload
//! gate, and fails fast on missing credentials.

use std::fmt;

use camino::Utf8Path;

use crate::credentials::PublishCredentials;
use crate::error::Result;
use crate::normalise::normalise_publication;
use crate::repository::{LocalRepository, ModuleCoordinates};

/// Default base URL of the remote artifact repository.
pub const DEFAULT_REMOTE_BASE: &str = "https://repo.gradle.org/gradle";

/// Run a local publish for one module with cleanup and normalisation.
///
/// The module's directory is deleted first so no stale artifacts survive,
/// `publish` then writes into the repository root (the transport is the
/// caller's concern), and on success the module's descriptors are
/// normalised in place.
///
/// # Errors
///
/// Propagates cleanup failures, any error from `publish`, and
/// normalisation failures — including a missing maven-metadata descriptor
/// when the step wrote nothing.
pub fn publish_locally<F>(
    repository: &LocalRepository,
    coordinates: &ModuleCoordinates,
    publish: F,
) -> Result<()>
where
    F: FnOnce(&Utf8Path) -> Result<()>,
{
    repository.clean_module(coordinates)?;
    publish(repository.root())?;
    normalise_publication(&repository.module_dir(coordinates))
}

/// A build version with its snapshot classification.
///
/// # Examples
///
/// ```
/// use burnish::publish::BuildVersion;
///
/// assert!(BuildVersion::parse("8.1-SNAPSHOT").is_snapshot());
/// assert!(!BuildVersion::parse("8.1").is_snapshot());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildVersion {
    version: String,
    snapshot: bool,
}

impl BuildVersion {
    /// Build a version with an explicit snapshot flag.
    #[must_use]
    pub fn new(version: impl Into<String>, snapshot: bool) -> Self {
        Self {
            version: version.into(),
            snapshot,
        }
    }

    /// Classify a version string by its `-SNAPSHOT` suffix,
    /// case-insensitively.
    #[must_use]
    pub fn parse(version: impl Into<String>) -> Self {
        let version = version.into();
        let snapshot = version.to_ascii_lowercase().ends_with("-snapshot");
        Self { version, snapshot }
    }

    /// The version string.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether this build publishes to the snapshots repository.
    #[must_use]
    pub fn is_snapshot(&self) -> bool {
        self.snapshot
    }
}

impl fmt::Display for BuildVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)
    }
}

/// The remote repository URL for `version` under `base`.
///
/// Snapshot builds target `libs-snapshots-local`, releases
/// `libs-releases-local`.
#[must_use]
pub fn remote_repository_url(base: &str, version: &BuildVersion) -> String {
    let libs_type = if version.is_snapshot() {
        "snapshots"
    } else {
        "releases"
    };
    format!("{}/libs-{libs_type}-local", base.trim_end_matches('/'))
}

/// A resolved remote publish: where it would go and whether it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePublishPlan {
    /// Target repository URL.
    pub url: String,
    /// False when the no-upload gate suppresses the publish.
    pub enabled: bool,
}

/// Resolve the remote publish target and apply the no-upload gate.
#[must_use]
pub fn plan_remote_publish(base: &str, version: &BuildVersion, no_upload: bool) -> RemotePublishPlan {
    let url = remote_repository_url(base, version);
    log::debug!(
        "remote publish target {url} ({})",
        if no_upload { "uploads disabled" } else { "enabled" }
    );
    RemotePublishPlan {
        url,
        enabled: !no_upload,
    }
}

/// Fail fast when a scheduled remote publish lacks credentials.
///
/// A disabled plan needs no credentials; an enabled one requires both
/// values before any network I/O would begin.
///
/// # Errors
///
/// Returns [`crate::error::BurnishError::MissingCredential`] naming the
/// absent value.
pub fn ensure_credentials(plan: &RemotePublishPlan, credentials: &PublishCredentials) -> Result<()> {
    if plan.enabled {
        credentials.ensure_present()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BurnishError;
    use crate::normalise::MAVEN_METADATA_FILE;
    use chrono::Datelike;
    use rstest::rstest;
    use tempfile::TempDir;

    fn utf8_root(temp: &TempDir) -> &Utf8Path {
        Utf8Path::from_path(temp.path()).expect("temp dir should be UTF-8")
    }

    fn coordinates() -> ModuleCoordinates {
        ModuleCoordinates::new("org.gradle", "gradle-core").expect("valid coordinates")
    }

    fn write_publication(root: &Utf8Path) {
        let module_dir = root.join("org/gradle/gradle-core");
        std::fs::create_dir_all(module_dir.join("8.0")).expect("create module dir");
        std::fs::write(
            module_dir.join(MAVEN_METADATA_FILE),
            "<versioning><lastUpdated>20230615120000</lastUpdated></versioning>",
        )
        .expect("write metadata");
        std::fs::write(
            module_dir.join("8.0/gradle-core-8.0.module"),
            r#"{"size": 4523517, "sha1": "abc123"}"#,
        )
        .expect("write descriptor");
    }

    // -----------------------------------------------------------------
    // Local pipeline
    // -----------------------------------------------------------------

    #[test]
    fn publish_cleans_writes_and_normalises() {
        let temp = TempDir::new().expect("temp dir");
        let repository = LocalRepository::new(utf8_root(&temp));
        let coordinates = coordinates();

        // Stale content from a previous layout.
        let module_dir = repository.module_dir(&coordinates);
        std::fs::create_dir_all(&module_dir).expect("create stale dir");
        std::fs::write(module_dir.join("old-scheme.jar"), b"stale").expect("write stale");

        publish_locally(&repository, &coordinates, |root| {
            assert!(
                !root.join("org/gradle/gradle-core").exists(),
                "cleanup must run before the publish step"
            );
            write_publication(root);
            Ok(())
        })
        .expect("publish");

        assert!(!module_dir.join("old-scheme.jar").exists());

        let metadata =
            std::fs::read_to_string(module_dir.join(MAVEN_METADATA_FILE)).expect("read metadata");
        let expected = format!("<lastUpdated>{}0101000000</lastUpdated>", chrono::Utc::now().year());
        assert!(metadata.contains(&expected));

        let descriptor = std::fs::read_to_string(module_dir.join("8.0/gradle-core-8.0.module"))
            .expect("read descriptor");
        assert_eq!(descriptor, r#"{"size": 0, "sha1": ""}"#);
    }

    #[test]
    fn failing_publish_step_skips_normalisation() {
        let temp = TempDir::new().expect("temp dir");
        let repository = LocalRepository::new(utf8_root(&temp));
        let coordinates = coordinates();

        let err = publish_locally(&repository, &coordinates, |root| {
            write_publication(root);
            Err(BurnishError::PublishFailed {
                reason: "exit status 1".to_owned(),
            })
        })
        .expect_err("step failed");
        assert!(matches!(err, BurnishError::PublishFailed { .. }));

        let metadata = std::fs::read_to_string(
            repository.module_dir(&coordinates).join(MAVEN_METADATA_FILE),
        )
        .expect("read metadata");
        assert!(metadata.contains("20230615120000"), "must not be normalised");
    }

    #[test]
    fn publish_that_writes_no_descriptor_is_fatal() {
        let temp = TempDir::new().expect("temp dir");
        let repository = LocalRepository::new(utf8_root(&temp));

        let err = publish_locally(&repository, &coordinates(), |_| Ok(()))
            .expect_err("nothing was published");
        assert!(matches!(err, BurnishError::DescriptorMissing { .. }));
    }

    // -----------------------------------------------------------------
    // Remote plan
    // -----------------------------------------------------------------

    #[rstest]
    #[case::snapshot("8.1-SNAPSHOT", "https://repo.gradle.org/gradle/libs-snapshots-local")]
    #[case::lowercase_snapshot("8.1-snapshot", "https://repo.gradle.org/gradle/libs-snapshots-local")]
    #[case::release("8.1", "https://repo.gradle.org/gradle/libs-releases-local")]
    #[case::release_candidate("8.1-rc-1", "https://repo.gradle.org/gradle/libs-releases-local")]
    fn url_follows_the_snapshot_classification(#[case] version: &str, #[case] expected: &str) {
        let version = BuildVersion::parse(version);
        assert_eq!(remote_repository_url(DEFAULT_REMOTE_BASE, &version), expected);
    }

    #[test]
    fn trailing_slash_in_the_base_is_tolerated() {
        let version = BuildVersion::parse("8.1");
        assert_eq!(
            remote_repository_url("https://repo.example.com/gradle/", &version),
            "https://repo.example.com/gradle/libs-releases-local"
        );
    }

    #[test]
    fn no_upload_disables_the_plan() {
        let plan = plan_remote_publish(DEFAULT_REMOTE_BASE, &BuildVersion::parse("8.1"), true);
        assert!(!plan.enabled);
    }

    #[test]
    fn disabled_plan_needs_no_credentials() {
        let plan = RemotePublishPlan {
            url: "https://repo.example.com/libs-releases-local".to_owned(),
            enabled: false,
        };
        assert!(ensure_credentials(&plan, &PublishCredentials::default()).is_ok());
    }

    #[test]
    fn enabled_plan_fails_fast_without_credentials() {
        let plan = plan_remote_publish(DEFAULT_REMOTE_BASE, &BuildVersion::parse("8.1"), false);
        let err = ensure_credentials(&plan, &PublishCredentials::default())
            .expect_err("no credentials configured");
        assert_eq!(err.to_string(), "artifactoryUserName is not set!");
    }

    #[test]
    fn explicit_snapshot_flag_overrides_the_suffix() {
        let version = BuildVersion::new("8.1", true);
        assert!(version.is_snapshot());
        assert_eq!(
            remote_repository_url(DEFAULT_REMOTE_BASE, &version),
            "https://repo.gradle.org/gradle/libs-snapshots-local"
        );
    }
}
