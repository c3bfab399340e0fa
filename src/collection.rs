//! Named, ordered collections of filesystem paths.
//!
//! Argument providers receive their inputs as loosely-structured path
//! collections whose cardinality drives the emitted arguments: an empty
//! collection produces nothing, a singleton is used directly, and anything
//! else is a configuration fault. [`SingletonMatch`] makes that three-way
//! outcome explicit so callers must handle each case.

use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexSet;

use crate::error::{BurnishError, Result};

/// An immutable set of paths with a logical family name.
///
/// Paths keep their first-insertion order and duplicates are dropped
/// silently, mirroring how the host build tool materialises file
/// collections.
///
/// # Examples
///
/// ```
/// use burnish::collection::FileCollection;
///
/// let zips = FileCollection::from_paths(
///     "binaryDistributions",
///     ["build/distributions/gradle-8.0-bin.zip"],
/// );
/// assert_eq!(zips.len(), 1);
/// assert!(zips.require_single().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCollection {
    name: String,
    paths: IndexSet<Utf8PathBuf>,
}

impl FileCollection {
    /// Create an empty collection with the given family name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            paths: IndexSet::new(),
        }
    }

    /// Create a collection from an iterator of paths.
    #[must_use]
    pub fn from_paths<I, P>(name: impl Into<String>, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        let mut collection = Self::new(name);
        for path in paths {
            collection.push(path);
        }
        collection
    }

    /// Add a path, keeping the first occurrence when it is already present.
    pub fn push(&mut self, path: impl Into<Utf8PathBuf>) {
        self.paths.insert(path.into());
    }

    /// The logical family name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true when the collection holds no paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of distinct paths in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Iterate over the paths in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Utf8Path> {
        self.paths.iter().map(Utf8PathBuf::as_path)
    }

    /// A new collection, with the same name, of the paths matching `predicate`.
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&Utf8Path) -> bool,
    {
        Self {
            name: self.name.clone(),
            paths: self
                .paths
                .iter()
                .filter(|path| predicate(path.as_path()))
                .cloned()
                .collect(),
        }
    }

    /// Classify the collection's cardinality.
    #[must_use]
    pub fn single_match(&self) -> SingletonMatch<'_> {
        let mut iter = self.paths.iter();
        match (iter.next(), iter.next()) {
            (None, _) => SingletonMatch::NotFound,
            (Some(only), None) => SingletonMatch::Found(only.as_path()),
            (Some(_), Some(_)) => {
                SingletonMatch::Ambiguous(self.paths.iter().map(Utf8PathBuf::as_path).collect())
            }
        }
    }

    /// The collection's only path.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming this family when the collection
    /// is empty or holds more than one path.
    pub fn require_single(&self) -> Result<&Utf8Path> {
        self.single_match().into_required(&self.name)
    }
}

/// Outcome of asserting that a collection holds exactly one path.
///
/// Modelling the three cases explicitly forces callers to decide what an
/// empty or ambiguous collection means for their input family instead of
/// relying on an unchecked failure inside an accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingletonMatch<'a> {
    /// Exactly one path matched.
    Found(&'a Utf8Path),
    /// No path matched.
    NotFound,
    /// More than one path matched.
    Ambiguous(Vec<&'a Utf8Path>),
}

impl<'a> SingletonMatch<'a> {
    /// Convert the match into a required singleton.
    ///
    /// # Errors
    ///
    /// Returns [`BurnishError::MissingSingleton`] when nothing matched and
    /// [`BurnishError::AmbiguousSingleton`] when several paths did, naming
    /// `family` in either message.
    pub fn into_required(self, family: &str) -> Result<&'a Utf8Path> {
        match self {
            SingletonMatch::Found(path) => Ok(path),
            SingletonMatch::NotFound => Err(BurnishError::MissingSingleton {
                family: family.to_owned(),
            }),
            SingletonMatch::Ambiguous(paths) => Err(BurnishError::AmbiguousSingleton {
                family: family.to_owned(),
                candidates: paths.into_iter().map(Utf8Path::to_path_buf).collect(),
            }),
        }
    }

    /// The matched path when exactly one was found.
    #[must_use]
    pub fn found(&self) -> Option<&'a Utf8Path> {
        match self {
            SingletonMatch::Found(path) => Some(path),
            SingletonMatch::NotFound | SingletonMatch::Ambiguous(_) => None,
        }
    }
}
