//! Argument provider for the binary distribution archive.

use camino::Utf8PathBuf;

use crate::collection::{FileCollection, SingletonMatch};
use crate::error::Result;
use crate::provider::ArgumentProvider;
use crate::sysprop::PropertyMap;

/// Provides `integTest.binDistribution` when a distribution archive is wired.
///
/// The family expects zero or one archive: nothing configured means no
/// argument, while more than one archive is a configuration fault.
#[derive(Debug, Clone)]
pub struct BinaryDistributionsProvider {
    distributions: FileCollection,
}

impl BinaryDistributionsProvider {
    /// Wrap an existing collection of distribution archives.
    #[must_use]
    pub fn new(distributions: FileCollection) -> Self {
        Self { distributions }
    }

    /// Build the provider from archive paths, naming the collection after
    /// the family.
    #[must_use]
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        Self::new(FileCollection::from_paths("binaryDistributions", paths))
    }

    /// The configured distribution archives.
    #[must_use]
    pub fn distributions(&self) -> &FileCollection {
        &self.distributions
    }
}

impl ArgumentProvider for BinaryDistributionsProvider {
    fn name(&self) -> &'static str {
        "binaryDistributions"
    }

    fn properties(&self) -> Result<PropertyMap> {
        let mut properties = PropertyMap::new();
        match self.distributions.single_match() {
            SingletonMatch::NotFound => {
                log::debug!("no binary distribution configured; emitting nothing");
            }
            matched => {
                let path = matched.into_required(self.name())?;
                properties.insert("integTest.binDistribution", path.as_str())?;
            }
        }
        Ok(properties)
    }
}
