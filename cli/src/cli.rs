//! CLI argument definitions for burnish.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the main entrypoint to keep the binary small and focused on
//! orchestration.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Assemble Gradle test-environment arguments and keep local publications
/// comparable.
#[derive(Parser, Debug)]
#[command(name = "burnish")]
#[command(version, about)]
#[command(long_about = concat!(
    "Assemble Gradle test-environment arguments and keep local publications ",
    "comparable.\n\n",
    "Integration tests of a Gradle distribution need to be told where the ",
    "locally built distribution, binary archive, and dependency-metadata ",
    "repository live; `burnish args` derives that `-D` argument vector from ",
    "the build layout. The publish commands wrap a local Maven-layout ",
    "publish: the module directory is cleaned first and the generated ",
    "metadata is normalised afterwards, so repeated publishes of identical ",
    "inputs are byte-for-byte comparable.\n\n",
    "Module coordinates and the repository root can be given as flags or in ",
    "a burnish.toml file; flags win.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Assemble the test-process argument vector:\n",
    "    $ burnish args --gradle-home build/bin-distribution/gradle-8.1/lib \\\n",
    "        --user-home intTestHomeDir --snippets subprojects/docs/src/snippets \\\n",
    "        --daemon-registry build/daemon\n\n",
    "  Publish locally through the cleanup-and-normalise pipeline:\n",
    "    $ burnish publish --module gradle-tooling-api -- \\\n",
    "        ./gradlew publishLocalPublicationToLocalRepository\n\n",
    "  Re-normalise a module directory in place:\n",
    "    $ burnish normalise build/repo/org/gradle/gradle-tooling-api\n\n",
    "  Resolve the remote target without uploading:\n",
    "    $ burnish remote-plan 8.1-SNAPSHOT --no-upload\n",
))]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, value_name = "FILE", default_value = burnish::config::CONFIG_FILE)]
    pub config: Utf8PathBuf,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Assemble and print the test-process argument vector.
    Args(AssembleArgs),

    /// Delete a module's directory under the local repository.
    Clean(CleanArgs),

    /// Run a publish command wrapped in cleanup and normalisation.
    Publish(PublishArgs),

    /// Normalise a published module directory in place.
    Normalise(NormaliseArgs),

    /// Print the publication fingerprint of a module directory.
    Fingerprint(FingerprintArgs),

    /// Resolve the remote publish target and check credentials.
    RemotePlan(RemotePlanArgs),
}

/// Arguments for the args command.
#[derive(Parser, Debug, Clone)]
pub struct AssembleArgs {
    /// Candidate binary distribution archive (repeatable).
    #[arg(long = "bin-zip", value_name = "PATH")]
    pub bin_zip: Vec<Utf8PathBuf>,

    /// Installed distribution directory or fallback jar (repeatable).
    #[arg(long = "gradle-home", value_name = "PATH")]
    pub gradle_home: Vec<Utf8PathBuf>,

    /// Dependency-metadata repository directory.
    #[arg(long = "libs-repo", value_name = "DIR")]
    pub libs_repo: Option<Utf8PathBuf>,

    /// Root under which each distribution gets its Gradle user home.
    #[arg(long = "user-home", value_name = "DIR")]
    pub user_home: Utf8PathBuf,

    /// Documentation snippets directory advertised to tests.
    #[arg(long, value_name = "DIR")]
    pub snippets: Utf8PathBuf,

    /// Daemon registry directory.
    #[arg(long = "daemon-registry", value_name = "DIR")]
    pub daemon_registry: Utf8PathBuf,

    /// Force the test task to rerun even when up to date.
    #[arg(long, conflicts_with = "no_rerun")]
    pub rerun: bool,

    /// Only rerun the test task when necessary.
    #[arg(long = "no-rerun")]
    pub no_rerun: bool,

    /// Output as JSON for scripting.
    #[arg(long)]
    pub json: bool,
}

/// Module coordinates and repository root, overriding `burnish.toml`.
#[derive(Parser, Debug, Clone, Default)]
pub struct ModuleOpts {
    /// Module group [default: from burnish.toml, then org.gradle].
    #[arg(long, value_name = "GROUP")]
    pub group: Option<String>,

    /// Module name [default: from burnish.toml].
    #[arg(long = "module", value_name = "NAME")]
    pub module: Option<String>,

    /// Local repository root [default: from burnish.toml, then build/repo].
    #[arg(long = "repo", value_name = "DIR")]
    pub repo: Option<Utf8PathBuf>,
}

/// Arguments for the clean command.
#[derive(Parser, Debug, Clone, Default)]
pub struct CleanArgs {
    /// Coordinates of the module to clean.
    #[command(flatten)]
    pub module: ModuleOpts,
}

/// Arguments for the publish command.
#[derive(Parser, Debug, Clone)]
pub struct PublishArgs {
    /// Coordinates of the module being published.
    #[command(flatten)]
    pub module: ModuleOpts,

    /// Publish command to run, given after `--`.
    #[arg(last = true, required = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Arguments for the normalise command.
#[derive(Parser, Debug, Clone)]
pub struct NormaliseArgs {
    /// Module directory to normalise.
    #[arg(value_name = "DIR")]
    pub dir: Utf8PathBuf,
}

/// Arguments for the fingerprint command.
#[derive(Parser, Debug, Clone)]
pub struct FingerprintArgs {
    /// Module directory to fingerprint.
    #[arg(value_name = "DIR")]
    pub dir: Utf8PathBuf,

    /// Output as JSON for scripting.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the remote-plan command.
#[derive(Parser, Debug, Clone)]
pub struct RemotePlanArgs {
    /// Build version; a `-SNAPSHOT` suffix selects the snapshots repository.
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Base URL of the remote repository [default: from burnish.toml].
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Skip the upload: print the plan but require no credentials.
    #[arg(long = "no-upload")]
    pub no_upload: bool,

    /// Output as JSON for scripting.
    #[arg(long)]
    pub json: bool,
}

impl Default for AssembleArgs {
    /// Creates an `AssembleArgs` instance with no inputs and empty paths.
    ///
    /// This is useful for testing or programmatic construction where only
    /// specific fields need to be set.
    fn default() -> Self {
        Self {
            bin_zip: Vec::new(),
            gradle_home: Vec::new(),
            libs_repo: None,
            user_home: Utf8PathBuf::new(),
            snippets: Utf8PathBuf::new(),
            daemon_registry: Utf8PathBuf::new(),
            rerun: false,
            no_rerun: false,
            json: false,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
