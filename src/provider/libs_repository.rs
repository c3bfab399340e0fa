//! Argument provider for the dependency-metadata repository.
//!
//! Tests resolve dependencies from a local filesystem repository instead of
//! a network one. Beyond the `integTest.libsRepo` argument, the repository
//! exposes its archive and descriptor files as sorted sets so the host's
//! input tracking sees a stable enumeration.

use std::collections::BTreeSet;

use camino::Utf8PathBuf;

use crate::collection::FileCollection;
use crate::error::Result;
use crate::provider::ArgumentProvider;
use crate::sysprop::PropertyMap;
use crate::walk::files_under;

/// Descriptor extensions tracked alongside the repository's jars.
const DESCRIPTOR_EXTENSIONS: &[&str] = &["pom", "xml", "metadata"];

/// Provides `integTest.libsRepo` plus the repository's tracked file sets.
#[derive(Debug, Clone)]
pub struct LibsRepositoryProvider {
    dir: FileCollection,
}

impl LibsRepositoryProvider {
    /// Wrap an existing repository collection.
    #[must_use]
    pub fn new(dir: FileCollection) -> Self {
        Self { dir }
    }

    /// Build the provider for a single repository root.
    #[must_use]
    pub fn from_root(root: impl Into<Utf8PathBuf>) -> Self {
        Self::new(FileCollection::from_paths("libsRepository", [root.into()]))
    }

    /// The configured repository roots.
    #[must_use]
    pub fn dir(&self) -> &FileCollection {
        &self.dir
    }

    /// Every `.jar` under the repository, sorted and deduplicated.
    ///
    /// # Errors
    ///
    /// Returns a scan error when the tree cannot be traversed.
    pub fn jars(&self) -> Result<BTreeSet<Utf8PathBuf>> {
        self.files_matching(|extension| extension == "jar")
    }

    /// Every `.pom`, `.xml`, and `.metadata` file under the repository,
    /// sorted and deduplicated.
    ///
    /// # Errors
    ///
    /// Returns a scan error when the tree cannot be traversed.
    pub fn descriptors(&self) -> Result<BTreeSet<Utf8PathBuf>> {
        self.files_matching(|extension| DESCRIPTOR_EXTENSIONS.contains(&extension))
    }

    fn files_matching<F>(&self, keep: F) -> Result<BTreeSet<Utf8PathBuf>>
    where
        F: Fn(&str) -> bool,
    {
        let mut matched = BTreeSet::new();
        for root in self.dir.iter() {
            for file in files_under(root)? {
                if file.extension().is_some_and(|extension| keep(extension)) {
                    matched.insert(file);
                }
            }
        }
        Ok(matched)
    }
}

impl ArgumentProvider for LibsRepositoryProvider {
    fn name(&self) -> &'static str {
        "libsRepository"
    }

    fn properties(&self) -> Result<PropertyMap> {
        let mut properties = PropertyMap::new();
        if self.dir.is_empty() {
            log::debug!("no libs repository configured; emitting nothing");
            return Ok(properties);
        }
        let root = self.dir.require_single()?;
        properties.insert("integTest.libsRepo", root.as_str())?;
        Ok(properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8Path;
    use tempfile::TempDir;

    fn utf8_root(temp: &TempDir) -> &Utf8Path {
        Utf8Path::from_path(temp.path()).expect("temp dir should be UTF-8")
    }

    fn seed_repository(root: &Utf8Path) {
        let module = root.join("org/gradle/gradle-core/8.0");
        std::fs::create_dir_all(&module).expect("create module dir");
        // Created in non-sorted order on purpose.
        std::fs::write(module.join("gradle-core-8.0.pom"), b"pom").expect("write pom");
        std::fs::write(module.join("gradle-core-8.0.jar"), b"jar").expect("write jar");
        std::fs::write(module.join("gradle-core-8.0.module"), b"module").expect("write module");
        std::fs::write(
            root.join("org/gradle/gradle-core/maven-metadata.xml"),
            b"xml",
        )
        .expect("write metadata");
        std::fs::write(module.join("gradle-core-8.0-sources.jar"), b"jar").expect("write jar");
    }

    #[test]
    fn empty_family_emits_no_arguments() {
        let provider = LibsRepositoryProvider::new(FileCollection::new("libsRepository"));
        let arguments = provider.arguments().expect("empty family is valid");
        assert!(arguments.is_empty());
    }

    #[test]
    fn configured_repository_emits_its_root() {
        let provider = LibsRepositoryProvider::from_root("build/repo");
        let arguments = provider.arguments().expect("singleton family");
        assert_eq!(arguments, vec!["-DintegTest.libsRepo=build/repo"]);
    }

    #[test]
    fn two_roots_fail_naming_the_family() {
        let provider = LibsRepositoryProvider::new(FileCollection::from_paths(
            "libsRepository",
            ["build/repo", "build/other-repo"],
        ));
        let err = provider.arguments().expect_err("ambiguous family");
        assert!(err.to_string().contains("libsRepository"));
    }

    #[test]
    fn jars_are_sorted_and_exclude_descriptors() {
        let temp = TempDir::new().expect("temp dir");
        let root = utf8_root(&temp);
        seed_repository(root);

        let provider = LibsRepositoryProvider::from_root(root);
        let jars = provider.jars().expect("scan");
        let names: Vec<&str> = jars
            .iter()
            .map(|path| path.file_name().expect("file name"))
            .collect();
        assert_eq!(
            names,
            vec!["gradle-core-8.0-sources.jar", "gradle-core-8.0.jar"]
        );
    }

    #[test]
    fn descriptors_cover_pom_xml_and_metadata() {
        let temp = TempDir::new().expect("temp dir");
        let root = utf8_root(&temp);
        seed_repository(root);

        let provider = LibsRepositoryProvider::from_root(root);
        let descriptors = provider.descriptors().expect("scan");
        let names: Vec<&str> = descriptors
            .iter()
            .map(|path| path.file_name().expect("file name"))
            .collect();
        // Full-path ordering puts the 8.0/ subdirectory before the root file.
        assert_eq!(names, vec!["gradle-core-8.0.pom", "maven-metadata.xml"]);
    }

    #[test]
    fn missing_repository_scans_as_empty() {
        let provider = LibsRepositoryProvider::from_root("/nonexistent/repo");
        assert!(provider.jars().expect("missing root is fine").is_empty());
    }
}
