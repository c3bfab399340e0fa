//! Local repository layout and pre-publish cleanup.
//!
//! Module artifacts live under `<root>/<group-as-path>/<module-name>/` and
//! are owned by the publish pipeline as a unit: the whole directory is
//! deleted before each local publish so stale artifacts from earlier
//! coordinate layouts never survive a rebuild.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{BurnishError, Result};

/// Validated group and module identifiers for one publication.
///
/// The group's dot-separated segments become directory segments, so both
/// parts are rejected when empty or when they contain path separators or
/// parent references.
///
/// # Examples
///
/// ```
/// use burnish::repository::ModuleCoordinates;
///
/// let coordinates = ModuleCoordinates::new("org.gradle", "gradle-core").expect("valid");
/// assert_eq!(coordinates.relative_dir().as_str(), "org/gradle/gradle-core");
/// assert_eq!(coordinates.to_string(), "org.gradle:gradle-core");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCoordinates {
    group: String,
    name: String,
}

impl ModuleCoordinates {
    /// Validate and build coordinates from a group and module name.
    ///
    /// # Errors
    ///
    /// Returns [`BurnishError::InvalidCoordinates`] when either part is
    /// empty, contains a path separator, or would escape the repository
    /// root.
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let group = group.into();
        let name = name.into();

        if group.is_empty() {
            return Err(invalid(&group, "group must not be empty"));
        }
        for segment in group.split('.') {
            validate_segment(&group, segment)?;
        }
        validate_segment(&name, &name)?;

        Ok(Self { group, name })
    }

    /// The dotted group identifier.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// The module (artifact base) name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The module's directory relative to the repository root.
    #[must_use]
    pub fn relative_dir(&self) -> Utf8PathBuf {
        let mut dir: Utf8PathBuf = self.group.split('.').collect();
        dir.push(&self.name);
        dir
    }
}

impl fmt::Display for ModuleCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}

fn validate_segment(value: &str, segment: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(invalid(value, "segments must not be empty"));
    }
    if segment == "." || segment == ".." {
        return Err(invalid(value, "segments must not reference parent directories"));
    }
    if segment.contains('/') || segment.contains('\\') {
        return Err(invalid(value, "segments must not contain path separators"));
    }
    Ok(())
}

fn invalid(value: &str, reason: &str) -> BurnishError {
    BurnishError::InvalidCoordinates {
        value: value.to_owned(),
        reason: reason.to_owned(),
    }
}

/// A filesystem-backed artifact repository for same-machine consumption.
#[derive(Debug, Clone)]
pub struct LocalRepository {
    root: Utf8PathBuf,
}

impl LocalRepository {
    /// Open a repository at `root`; the directory need not exist yet.
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The repository root directory.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// The directory owned by `coordinates` within this repository.
    #[must_use]
    pub fn module_dir(&self, coordinates: &ModuleCoordinates) -> Utf8PathBuf {
        self.root.join(coordinates.relative_dir())
    }

    /// Delete the module's directory recursively so artifacts do not pile
    /// up across publishes.
    ///
    /// Returns whether anything was deleted; a missing directory is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`BurnishError::CleanFailed`] when the directory exists but
    /// cannot be removed.
    pub fn clean_module(&self, coordinates: &ModuleCoordinates) -> Result<bool> {
        let module_dir = self.module_dir(coordinates);
        if !module_dir.exists() {
            return Ok(false);
        }
        std::fs::remove_dir_all(&module_dir).map_err(|source| BurnishError::CleanFailed {
            path: module_dir.clone(),
            source,
        })?;
        log::debug!("deleted stale module directory {module_dir}");
        Ok(true)
    }
}
