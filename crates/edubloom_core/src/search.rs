//! crates/edubloom_core/src/search.rs
//!
//! Narrowing enriched collections by user-entered criteria.
//!
//! Each criteria struct combines a free-text search (case-insensitive
//! substring over a fixed set of fields, any field may match) with selector
//! filters (exact equality, or [`Selection::All`] to switch the filter off).
//! Every active filter must pass. Results keep the input order and are
//! recomputed from the full set each time.

use serde::{Deserialize, Deserializer};
use std::str::FromStr;

use crate::domain::{Course, CourseFormat, CourseLevel};
use crate::enrich::EnrichedCourse;
use crate::matching::NearbyUser;

/// The selector value that disables a filter.
pub const ALL: &str = "all";

/// Default distance threshold for nearby matching, in miles.
pub const DEFAULT_MAX_DISTANCE_MILES: f64 = 50.0;

/// A selector: either everything, or exactly one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

impl<'de, T: FromStr> Deserialize<'de> for Selection<T>
where
    T::Err: std::fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Case-insensitive substring test. An empty needle matches anything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// A predicate over one kind of view record.
pub trait Criteria<T> {
    fn matches(&self, item: &T) -> bool;

    /// The matching items, in their original order.
    fn apply(&self, items: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        items.iter().filter(|i| self.matches(i)).cloned().collect()
    }
}

//=========================================================================================
// Course catalog
//=========================================================================================

/// Catalog page filters. Search covers title, instructor name and category name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CourseCriteria {
    pub search: String,
    pub category: Selection<String>,
    pub level: Selection<CourseLevel>,
    pub format: Selection<CourseFormat>,
}

impl Criteria<EnrichedCourse> for CourseCriteria {
    fn matches(&self, item: &EnrichedCourse) -> bool {
        let matches_search = contains_ci(&item.course.title, &self.search)
            || contains_ci(&item.instructor_name, &self.search)
            || contains_ci(&item.category_name, &self.search);

        matches_search
            && self.category.admits(&item.category_name)
            && self.level.admits(&item.course.level)
            && self.format.admits(&item.course.format)
    }
}

//=========================================================================================
// Admin course list
//=========================================================================================

/// Admin list filters. Search covers title and description; category is by id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdminCourseCriteria {
    pub search: String,
    pub category_id: Selection<String>,
    pub level: Selection<CourseLevel>,
}

impl Criteria<Course> for AdminCourseCriteria {
    fn matches(&self, course: &Course) -> bool {
        let matches_search = contains_ci(&course.title, &self.search)
            || contains_ci(&course.description, &self.search);

        matches_search
            && self.category_id.admits(&course.category_id)
            && self.level.admits(&course.level)
    }
}

//=========================================================================================
// Nearby matching
//=========================================================================================

/// Location page filters. Search covers name and city; the subject must be
/// one of the candidate's tags; distance passes when `<=` the threshold.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NearbyCriteria {
    pub search: String,
    pub subject: Selection<String>,
    pub max_distance: f64,
}

impl Default for NearbyCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            subject: Selection::All,
            max_distance: DEFAULT_MAX_DISTANCE_MILES,
        }
    }
}

impl Criteria<NearbyUser> for NearbyCriteria {
    fn matches(&self, user: &NearbyUser) -> bool {
        let matches_search =
            contains_ci(&user.name, &self.search) || contains_ci(&user.city, &self.search);
        let matches_subject = match &self.subject {
            Selection::All => true,
            Selection::Only(subject) => user.subjects.iter().any(|s| s == subject),
        };

        matches_search && matches_subject && user.distance <= self.max_distance
    }
}
