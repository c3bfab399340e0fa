//! Command handlers for the burnish CLI.
//!
//! Each subcommand gets a `run_*` handler that writes its deliverable to
//! the supplied stdout writer; progress and commentary go to stderr.
//! Handlers with environment- or process-touching behaviour have `_with`
//! variants that accept the dependency for testability.

use std::io::Write;

use burnish::collection::FileCollection;
use burnish::config::BurnishConfig;
use burnish::credentials::PublishCredentials;
use burnish::error::{BurnishError, Result};
use burnish::fingerprint::publication_fingerprint;
use burnish::normalise::normalise_publication;
use burnish::provider::{
    BinaryDistributionsProvider, GradleInstallationProvider, LibsRepositoryProvider,
    TestEnvironment,
};
use burnish::publish::{BuildVersion, ensure_credentials, plan_remote_publish, publish_locally};
use burnish::repository::{LocalRepository, ModuleCoordinates};
use burnish::rerun::{default_rerun, resolve_rerun};
use camino::Utf8Path;

use crate::cli::{
    AssembleArgs, CleanArgs, FingerprintArgs, ModuleOpts, NormaliseArgs, PublishArgs,
    RemotePlanArgs,
};
use crate::output::{
    ArgumentsView, FingerprintView, PlanView, format_arguments_human, format_json,
    format_plan_human, rerun_report,
};
use crate::runner::{CommandRunner, SystemCommandRunner};

/// Module coordinates and repository resolved from flags and configuration.
#[derive(Debug)]
struct ResolvedModule {
    repository: LocalRepository,
    coordinates: ModuleCoordinates,
}

fn resolve_module(
    opts: &ModuleOpts,
    config: &BurnishConfig,
    config_path: &Utf8Path,
) -> Result<ResolvedModule> {
    let group = opts.group.as_deref().unwrap_or(&config.module.group);
    let name = opts
        .module
        .as_deref()
        .or(config.module.name.as_deref())
        .ok_or_else(|| BurnishError::InvalidConfig {
            path: config_path.to_path_buf(),
            reason: "no module name; pass --module or set [module] name".to_owned(),
        })?;
    let root = opts
        .repo
        .as_deref()
        .unwrap_or_else(|| config.repository.root_dir());

    Ok(ResolvedModule {
        repository: LocalRepository::new(root),
        coordinates: ModuleCoordinates::new(group, name)?,
    })
}

/// Assembles and prints the test-process argument vector.
///
/// Tokens go to stdout one per line (or as one JSON document with
/// `--json`); the resolved rerun state is reported on stderr in human
/// mode and embedded in the document in JSON mode.
///
/// # Errors
///
/// Returns configuration errors from the providers and write failures on
/// the stdout stream.
pub fn run_args(args: &AssembleArgs, stdout: &mut dyn Write, stderr: &mut dyn Write) -> Result<()> {
    run_args_with(args, stdout, stderr, default_rerun())
}

/// Internal implementation with an injectable rerun default for testability.
fn run_args_with(
    args: &AssembleArgs,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
    rerun_default: bool,
) -> Result<()> {
    let environment = TestEnvironment {
        binary_distributions: BinaryDistributionsProvider::from_paths(args.bin_zip.clone()),
        installation: GradleInstallationProvider::new(
            FileCollection::from_paths("gradleInstallationForTest", args.gradle_home.clone()),
            args.user_home.clone(),
            args.snippets.clone(),
            args.daemon_registry.clone(),
        ),
        libs_repository: match &args.libs_repo {
            Some(root) => LibsRepositoryProvider::from_root(root.clone()),
            None => LibsRepositoryProvider::new(FileCollection::new("libsRepository")),
        },
    };

    let arguments = environment.arguments()?;
    let rerun = resolve_rerun(args.rerun, args.no_rerun, rerun_default);

    if args.json {
        writeln!(stdout, "{}", format_json(&ArgumentsView::new(arguments, rerun)))?;
    } else {
        let rendered = format_arguments_human(&arguments);
        if !rendered.is_empty() {
            writeln!(stdout, "{rendered}")?;
        }
        write_progress(stderr, rerun_report(rerun));
    }
    Ok(())
}

/// Deletes a module's directory under the local repository.
///
/// # Errors
///
/// Returns configuration errors from coordinate resolution and cleanup
/// failures; a missing module directory is a reported no-op.
pub fn run_clean(
    args: &CleanArgs,
    config: &BurnishConfig,
    config_path: &Utf8Path,
    stderr: &mut dyn Write,
) -> Result<()> {
    let module = resolve_module(&args.module, config, config_path)?;
    let module_dir = module.repository.module_dir(&module.coordinates);

    if module.repository.clean_module(&module.coordinates)? {
        write_progress(stderr, format!("Deleted {module_dir}"));
    } else {
        write_progress(stderr, format!("Nothing to delete at {module_dir}"));
    }
    Ok(())
}

/// Runs an external publish command wrapped in cleanup and normalisation.
///
/// # Errors
///
/// Returns configuration errors from coordinate resolution, a publish
/// failure when the command cannot be spawned or exits non-zero, and
/// normalisation failures afterwards.
pub fn run_publish(
    args: &PublishArgs,
    config: &BurnishConfig,
    config_path: &Utf8Path,
    stderr: &mut dyn Write,
) -> Result<()> {
    run_publish_with(args, config, config_path, &SystemCommandRunner, stderr)
}

/// Internal implementation with an injectable command runner for testability.
fn run_publish_with(
    args: &PublishArgs,
    config: &BurnishConfig,
    config_path: &Utf8Path,
    runner: &dyn CommandRunner,
    stderr: &mut dyn Write,
) -> Result<()> {
    let module = resolve_module(&args.module, config, config_path)?;
    let Some((program, program_args)) = args.command.split_first() else {
        return Err(BurnishError::PublishFailed {
            reason: "no publish command given".to_owned(),
        });
    };

    write_progress(
        stderr,
        format!("Publishing {} via {program}...", module.coordinates),
    );
    publish_locally(&module.repository, &module.coordinates, |_root| {
        run_publish_command(runner, program, program_args)
    })?;
    write_progress(
        stderr,
        format!(
            "Normalised {}",
            module.repository.module_dir(&module.coordinates)
        ),
    );
    Ok(())
}

fn run_publish_command(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[String],
) -> Result<()> {
    let output = runner
        .run(program, args)
        .map_err(|error| BurnishError::PublishFailed {
            reason: format!("failed to run {program}: {error}"),
        })?;
    if !output.status.success() {
        let command_stderr = String::from_utf8_lossy(&output.stderr);
        return Err(BurnishError::PublishFailed {
            reason: format!(
                "{program} exited with {}: {}",
                output.status,
                command_stderr.trim()
            ),
        });
    }
    Ok(())
}

/// Normalises a published module directory in place.
///
/// # Errors
///
/// Returns a configuration error when the maven-metadata descriptor is
/// missing and read/write failures for files that cannot be rewritten.
pub fn run_normalise(args: &NormaliseArgs, stderr: &mut dyn Write) -> Result<()> {
    normalise_publication(&args.dir)?;
    write_progress(stderr, format!("Normalised {}", args.dir));
    Ok(())
}

/// Prints the publication fingerprint of a module directory.
///
/// # Errors
///
/// Returns scan and read failures, and write failures on the stdout
/// stream.
pub fn run_fingerprint(args: &FingerprintArgs, stdout: &mut dyn Write) -> Result<()> {
    let digest = publication_fingerprint(&args.dir)?;
    if args.json {
        writeln!(stdout, "{}", format_json(&FingerprintView::from(&digest)))?;
    } else {
        writeln!(stdout, "{digest}")?;
    }
    Ok(())
}

/// Resolves the remote publish target, checks credentials, and prints the
/// plan.
///
/// # Errors
///
/// Returns a credential error when the plan is enabled and a credential
/// value is absent, and write failures on the stdout stream.
pub fn run_remote_plan(
    args: &RemotePlanArgs,
    config: &BurnishConfig,
    stdout: &mut dyn Write,
) -> Result<()> {
    run_remote_plan_with(args, config, stdout, &PublishCredentials::from_env())
}

/// Internal implementation with injectable credentials for testability.
fn run_remote_plan_with(
    args: &RemotePlanArgs,
    config: &BurnishConfig,
    stdout: &mut dyn Write,
    credentials: &PublishCredentials,
) -> Result<()> {
    let base = args.base_url.as_deref().unwrap_or(&config.remote.base_url);
    let version = BuildVersion::parse(args.version.as_str());
    let plan = plan_remote_publish(base, &version, args.no_upload);
    ensure_credentials(&plan, credentials)?;

    if args.json {
        writeln!(stdout, "{}", format_json(&PlanView::from(&plan)))?;
    } else {
        writeln!(stdout, "{}", format_plan_human(&plan))?;
    }
    Ok(())
}

fn write_progress(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}
