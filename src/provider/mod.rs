//! Environment argument providers for spawned test processes.
//!
//! Each provider turns one family of filesystem inputs into JVM system
//! properties, re-evaluated on every call so collections may change between
//! invocations. The three families are independent; [`TestEnvironment`]
//! composes them in the canonical order binary distribution, installed
//! distribution, metadata repository.

pub mod bin_distribution;
pub mod installed_distribution;
pub mod libs_repository;

pub use bin_distribution::BinaryDistributionsProvider;
pub use installed_distribution::GradleInstallationProvider;
pub use libs_repository::LibsRepositoryProvider;

use crate::error::Result;
use crate::sysprop::PropertyMap;

/// A named source of JVM system properties for one input family.
pub trait ArgumentProvider {
    /// Logical name of the input family, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Build the family's properties from current filesystem state.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the family's cardinality
    /// preconditions are violated.
    fn properties(&self) -> Result<PropertyMap>;

    /// Render the family's properties as `-Dkey=value` tokens.
    ///
    /// # Errors
    ///
    /// Propagates any failure from [`Self::properties`].
    fn arguments(&self) -> Result<Vec<String>> {
        Ok(self.properties()?.into_arguments())
    }
}

/// Concatenate the arguments of several providers in slice order.
///
/// The providers' maps are merged first so a key collision across families
/// surfaces as a duplicate-property error instead of a repeated token.
///
/// # Errors
///
/// Propagates the first provider failure or cross-family duplicate key.
pub fn assemble_arguments(providers: &[&dyn ArgumentProvider]) -> Result<Vec<String>> {
    let mut merged = PropertyMap::new();
    for provider in providers {
        merged.merge(provider.properties()?)?;
    }
    Ok(merged.into_arguments())
}

/// The three providers a distribution test process is launched with.
#[derive(Debug, Clone)]
pub struct TestEnvironment {
    /// Provider for the binary distribution archive.
    pub binary_distributions: BinaryDistributionsProvider,
    /// Provider for the installed distribution under test.
    pub installation: GradleInstallationProvider,
    /// Provider for the dependency-metadata repository.
    pub libs_repository: LibsRepositoryProvider,
}

impl TestEnvironment {
    /// Assemble the full argument vector in the canonical provider order.
    ///
    /// # Errors
    ///
    /// Propagates the first provider failure.
    pub fn arguments(&self) -> Result<Vec<String>> {
        assemble_arguments(&[
            &self.binary_distributions,
            &self.installation,
            &self.libs_repository,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::FileCollection;
    use crate::error::BurnishError;

    struct FixedProvider {
        name: &'static str,
        key: &'static str,
        value: &'static str,
    }

    impl ArgumentProvider for FixedProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        fn properties(&self) -> Result<PropertyMap> {
            let mut properties = PropertyMap::new();
            properties.insert(self.key, self.value)?;
            Ok(properties)
        }
    }

    #[test]
    fn assemble_concatenates_in_slice_order() {
        let first = FixedProvider {
            name: "first",
            key: "integTest.binDistribution",
            value: "dist.zip",
        };
        let second = FixedProvider {
            name: "second",
            key: "integTest.libsRepo",
            value: "build/repo",
        };
        let arguments = assemble_arguments(&[&first, &second]).expect("disjoint keys");
        assert_eq!(
            arguments,
            vec![
                "-DintegTest.binDistribution=dist.zip",
                "-DintegTest.libsRepo=build/repo",
            ]
        );
    }

    #[test]
    fn assemble_rejects_cross_family_collisions() {
        let first = FixedProvider {
            name: "first",
            key: "integTest.libsRepo",
            value: "one",
        };
        let second = FixedProvider {
            name: "second",
            key: "integTest.libsRepo",
            value: "two",
        };
        let err = assemble_arguments(&[&first, &second]).expect_err("colliding keys");
        assert!(matches!(err, BurnishError::DuplicateProperty { .. }));
    }

    #[test]
    fn environment_orders_binary_installed_libs() {
        let environment = TestEnvironment {
            binary_distributions: BinaryDistributionsProvider::from_paths(["/dist/gradle-bin.zip"]),
            installation: GradleInstallationProvider::new(
                FileCollection::from_paths(
                    "gradleInstallationForTest",
                    ["/work/gradle-8.0-bin/distributions/gradle-8.0"],
                ),
                "/work/user-home",
                "/work/snippets",
                "/work/daemon",
            ),
            libs_repository: LibsRepositoryProvider::from_root("/work/repo"),
        };

        let arguments = environment.arguments().expect("well-formed inputs");
        assert_eq!(
            arguments.first().map(String::as_str),
            Some("-DintegTest.binDistribution=/dist/gradle-bin.zip")
        );
        assert_eq!(
            arguments.last().map(String::as_str),
            Some("-DintegTest.libsRepo=/work/repo")
        );
        assert_eq!(arguments.len(), 6);
    }
}
