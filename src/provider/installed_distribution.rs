//! Argument provider for the installed distribution under test.
//!
//! The distribution name keys the per-distribution user home so parallel
//! test runs against different distributions never share caches. The name
//! comes from the directory layout: a complete installation names itself via
//! its grandparent directory, while a libs-only wiring falls back to the
//! runtime API info jar three levels below the distribution root.

use camino::{Utf8Path, Utf8PathBuf};

use crate::collection::FileCollection;
use crate::error::{BurnishError, Result};
use crate::paths::absolute_utf8;
use crate::provider::ArgumentProvider;
use crate::sysprop::PropertyMap;

/// File-name prefix of the jar used for fallback name derivation.
pub const RUNTIME_API_INFO_PREFIX: &str = "gradle-runtime-api-info";

/// Provides the installed-distribution properties for a test process.
///
/// Emits `integTest.gradleHomeDir` (only when a complete installation
/// directory is wired), `integTest.gradleUserHomeDir`,
/// `integTest.samplesdir`, and `org.gradle.integtest.daemon.registry`, in
/// that order.
#[derive(Debug, Clone)]
pub struct GradleInstallationProvider {
    gradle_home: FileCollection,
    user_home_root: Utf8PathBuf,
    snippets_dir: Utf8PathBuf,
    daemon_registry: Utf8PathBuf,
}

impl GradleInstallationProvider {
    /// Build the provider from its four inputs.
    ///
    /// `gradle_home` holds either the single installation directory or the
    /// loose jar files the fallback derivation searches; `user_home_root` is
    /// the base under which each distribution gets its own user home.
    #[must_use]
    pub fn new(
        gradle_home: FileCollection,
        user_home_root: impl Into<Utf8PathBuf>,
        snippets_dir: impl Into<Utf8PathBuf>,
        daemon_registry: impl Into<Utf8PathBuf>,
    ) -> Self {
        Self {
            gradle_home,
            user_home_root: user_home_root.into(),
            snippets_dir: snippets_dir.into(),
            daemon_registry: daemon_registry.into(),
        }
    }

    /// The complete installation directory, when exactly one is wired.
    #[must_use]
    pub fn distribution_dir(&self) -> Option<&Utf8Path> {
        self.gradle_home.single_match().found()
    }

    /// Derive the distribution name from the directory layout.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when neither a single installation
    /// directory nor a unique runtime API info jar is present, or when the
    /// matched path has too few ancestors to name a distribution.
    pub fn distribution_name(&self) -> Result<String> {
        if let Some(dir) = self.distribution_dir() {
            return ancestor_name(dir, 2);
        }
        let runtime_info = self.gradle_home.filter(|path| {
            path.file_name()
                .is_some_and(|name| name.starts_with(RUNTIME_API_INFO_PREFIX))
        });
        let jar = runtime_info.single_match().into_required(self.name())?;
        ancestor_name(jar, 3)
    }
}

impl ArgumentProvider for GradleInstallationProvider {
    fn name(&self) -> &'static str {
        "gradleInstallationForTest"
    }

    fn properties(&self) -> Result<PropertyMap> {
        let distribution_name = self.distribution_name()?;
        log::debug!("derived distribution name {distribution_name}");

        let mut properties = PropertyMap::new();
        if let Some(dir) = self.distribution_dir() {
            properties.insert("integTest.gradleHomeDir", dir.as_str())?;
        }
        properties.insert(
            "integTest.gradleUserHomeDir",
            absolute_utf8(&self.user_home_root.join(&distribution_name))?,
        )?;
        properties.insert("integTest.samplesdir", absolute_utf8(&self.snippets_dir)?)?;
        properties.insert(
            "org.gradle.integtest.daemon.registry",
            absolute_utf8(&self.daemon_registry)?,
        )?;
        Ok(properties)
    }
}

/// Name of the ancestor `levels` directories above `path`.
fn ancestor_name(path: &Utf8Path, levels: usize) -> Result<String> {
    let mut ancestor = path;
    for _ in 0..levels {
        ancestor = ancestor
            .parent()
            .ok_or_else(|| BurnishError::NameNotDerivable {
                path: path.to_path_buf(),
            })?;
    }
    ancestor
        .file_name()
        .map(str::to_owned)
        .ok_or_else(|| BurnishError::NameNotDerivable {
            path: path.to_path_buf(),
        })
}
