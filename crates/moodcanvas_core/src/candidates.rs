//! Ordered, deduplicated image model candidates.

use serde::Serialize;

/// Image models to try, highest priority first.
///
/// No identifier appears twice and blank identifiers are dropped. The list is
/// immutable once built.
///
/// # Examples
///
/// ```
/// use moodcanvas_core::ImageCandidateList;
///
/// let fallbacks = ["a/sd-1-5", "b/sd-1-4", "c/openjourney"];
/// let list = ImageCandidateList::with_preferred("b/sd-1-4", fallbacks);
///
/// assert_eq!(list.as_slice(), ["b/sd-1-4", "a/sd-1-5", "c/openjourney"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ImageCandidateList {
    models: Vec<String>,
}

impl ImageCandidateList {
    /// Builds a list from `models`, keeping the first occurrence of each id.
    pub fn from_models<I, S>(models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for model in models {
            list.push_unique(model.as_ref());
        }
        list
    }

    /// Pins `preferred` at index 0 and appends `fallbacks` without duplicates.
    pub fn with_preferred<I, S>(preferred: &str, fallbacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        list.push_unique(preferred);
        for model in fallbacks {
            list.push_unique(model.as_ref());
        }
        list
    }

    fn push_unique(&mut self, model: &str) {
        let model = model.trim();
        if model.is_empty() || self.models.iter().any(|m| m == model) {
            return;
        }
        self.models.push(model.to_string());
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// True when there is nothing to try.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// The highest-priority candidate.
    pub fn preferred(&self) -> Option<&str> {
        self.models.first().map(String::as_str)
    }

    /// Candidates in trial order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(String::as_str)
    }

    /// Candidates as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.models
    }
}

impl<'a> IntoIterator for &'a ImageCandidateList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}
