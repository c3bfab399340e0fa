//! Project configuration loaded from `burnish.toml`.
//!
//! All settings are optional: a missing file, a missing table, or a
//! missing key falls back to the documented default, so a conventional
//! checkout needs no configuration at all. Unknown keys are rejected so
//! typos surface as errors instead of silently reverting to defaults.

use camino::Utf8Path;
use serde::Deserialize;

use crate::error::{BurnishError, Result};
use crate::publish::DEFAULT_REMOTE_BASE;

/// File name the command-line interface looks for in the project root.
pub const CONFIG_FILE: &str = "burnish.toml";

/// Default group identifier for published modules.
pub const DEFAULT_GROUP: &str = "org.gradle";

/// Default local repository root, relative to the project root.
pub const DEFAULT_REPOSITORY_ROOT: &str = "build/repo";

/// Root of the `burnish.toml` schema.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BurnishConfig {
    /// Coordinates of the module being published.
    pub module: ModuleConfig,
    /// Local repository settings.
    pub repository: RepositoryConfig,
    /// Remote repository settings.
    pub remote: RemoteConfig,
}

impl BurnishConfig {
    /// Load configuration from the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`BurnishError::ReadFailed`] when the file cannot be read
    /// and [`BurnishError::InvalidConfig`] when it does not parse.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| BurnishError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|error| BurnishError::InvalidConfig {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })
    }

    /// Load configuration from `path` when the file exists, falling back
    /// to defaults when it does not.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::load`] failures for a file that exists but is
    /// unreadable or malformed.
    pub fn load_or_default(path: &Utf8Path) -> Result<Self> {
        if path.is_file() {
            Self::load(path)
        } else {
            log::debug!("no {path}; using default configuration");
            Ok(Self::default())
        }
    }
}

/// The `[module]` table: coordinates of the published module.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ModuleConfig {
    /// Dotted group identifier.
    #[serde(default = "ModuleConfig::default_group")]
    pub group: String,
    /// Module name; commands that need one fail when it is absent here
    /// and on the command line.
    pub name: Option<String>,
}

impl ModuleConfig {
    fn default_group() -> String {
        DEFAULT_GROUP.to_owned()
    }
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            group: Self::default_group(),
            name: None,
        }
    }
}

/// The `[repository]` table: where local publishes land.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepositoryConfig {
    /// Repository root directory, relative paths resolved against the
    /// working directory.
    #[serde(default = "RepositoryConfig::default_root")]
    pub root: String,
}

impl RepositoryConfig {
    fn default_root() -> String {
        DEFAULT_REPOSITORY_ROOT.to_owned()
    }

    /// The configured root as a typed path.
    #[must_use]
    pub fn root_dir(&self) -> &Utf8Path {
        Utf8Path::new(&self.root)
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
        }
    }
}

/// The `[remote]` table: where remote publishes would go.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteConfig {
    /// Base URL the snapshots or releases repository name is appended to.
    #[serde(default = "RemoteConfig::default_base_url")]
    pub base_url: String,
}

impl RemoteConfig {
    fn default_base_url() -> String {
        DEFAULT_REMOTE_BASE.to_owned()
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
        }
    }
}
