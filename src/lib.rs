//! Burnish build-support library.
//!
//! This crate assembles the JVM system-property arguments an integration
//! test run needs to find locally built Gradle distributions, and keeps a
//! local Maven-layout repository publishable: module directories are
//! cleaned before each publish and the generated metadata is normalised so
//! repeated publishes of identical inputs are byte-for-byte comparable. It
//! is used by the `burnish` CLI binary and can be consumed programmatically
//! from build tooling.
//!
//! # Modules
//!
//! - [`collection`] - Named, ordered file collections with singleton matching
//! - [`config`] - `burnish.toml` schema and loader
//! - [`credentials`] - Remote publish credentials and their eager check
//! - [`error`] - Semantic error types with recovery hints
//! - [`fingerprint`] - Content fingerprint over a module's descriptors
//! - [`normalise`] - In-place normalisation of publication metadata
//! - [`paths`] - UTF-8 path absolutisation
//! - [`provider`] - Test-environment argument providers
//! - [`publish`] - Local publish pipeline and remote publish preflight
//! - [`repository`] - Local repository layout and pre-publish cleanup
//! - [`rerun`] - Rerun toggle resolution for test tasks
//! - [`sysprop`] - Ordered system-property maps rendered as `-D` arguments
//! - [`walk`] - Recursive file traversal

pub mod collection;
pub mod config;
pub mod credentials;
pub mod error;
pub mod fingerprint;
pub mod normalise;
pub mod paths;
pub mod provider;
pub mod publish;
pub mod repository;
pub mod rerun;
pub mod sysprop;
pub mod walk;
