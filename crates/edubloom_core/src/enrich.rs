//! crates/edubloom_core/src/enrich.rs
//!
//! Resolves id references into view-ready aggregates.
//!
//! A [`JoinIndex`] is built once per batch (id → record maps for users,
//! tutors, locations and categories), so enriching `m` courses costs `m`
//! map lookups per reference instead of `m` linear scans. A dangling
//! reference never fails the aggregate: it resolves to placeholder values.

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::{Category, Course, Location, Tutor, User};
use crate::store::{Entity, EntityStore};

/// Shown wherever a reference could not be resolved.
pub const PLACEHOLDER: &str = "N/A";
/// Avatar used when the instructor cannot be resolved.
pub const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/40";

//=========================================================================================
// Aggregates
//=========================================================================================

/// A course flattened together with its instructor, location and category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCourse {
    #[serde(flatten)]
    pub course: Course,
    pub instructor_name: String,
    pub instructor_avatar: String,
    pub instructor_title: String,
    pub instructor_hourly_rate: Option<f64>,
    pub location_city: String,
    pub category_name: String,
}

/// A tutor with its location and user nested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TutorWithLocation {
    #[serde(flatten)]
    pub tutor: Tutor,
    pub location: Option<Location>,
    pub user: Option<User>,
}

impl TutorWithLocation {
    /// True when both the user and the location resolved.
    pub fn is_complete(&self) -> bool {
        self.location.is_some() && self.user.is_some()
    }
}

/// Everything the course detail view shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseDetail {
    pub course: EnrichedCourse,
    pub instructor: Option<TutorWithLocation>,
}

//=========================================================================================
// Join index
//=========================================================================================

fn index_by_id<T: Entity>(records: &[T]) -> HashMap<&str, &T> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        // First record wins, mirroring `get_by_id`.
        index.entry(record.id()).or_insert(record);
    }
    index
}

/// Borrowed id → record maps over one snapshot of the store.
pub struct JoinIndex<'a> {
    users: HashMap<&'a str, &'a User>,
    tutors: HashMap<&'a str, &'a Tutor>,
    locations: HashMap<&'a str, &'a Location>,
    categories: HashMap<&'a str, &'a Category>,
}

impl<'a> JoinIndex<'a> {
    pub fn build(store: &'a EntityStore) -> Self {
        Self {
            users: index_by_id(store.all::<User>()),
            tutors: index_by_id(store.all::<Tutor>()),
            locations: index_by_id(store.all::<Location>()),
            categories: index_by_id(store.all::<Category>()),
        }
    }

    pub fn user(&self, id: &str) -> Option<&'a User> {
        self.users.get(id).copied()
    }

    pub fn tutor(&self, id: &str) -> Option<&'a Tutor> {
        self.tutors.get(id).copied()
    }

    pub fn location(&self, id: &str) -> Option<&'a Location> {
        self.locations.get(id).copied()
    }

    pub fn category(&self, id: &str) -> Option<&'a Category> {
        self.categories.get(id).copied()
    }

    /// Course → tutor → (user, location), plus course → category.
    pub fn enrich_course(&self, course: &Course) -> EnrichedCourse {
        let tutor = self.tutor(&course.instructor_id);
        let user = tutor.and_then(|t| self.user(&t.user_id));
        let location = tutor.and_then(|t| self.location(&t.location_id));
        let category = self.category(&course.category_id);

        EnrichedCourse {
            course: course.clone(),
            instructor_name: user.map_or_else(|| PLACEHOLDER.to_string(), |u| u.name.clone()),
            instructor_avatar: user
                .and_then(|u| u.avatar.clone())
                .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string()),
            instructor_title: tutor.map_or_else(|| PLACEHOLDER.to_string(), |t| t.title.clone()),
            instructor_hourly_rate: tutor.map(|t| t.hourly_rate),
            location_city: location.map_or_else(|| PLACEHOLDER.to_string(), |l| l.city.clone()),
            category_name: category.map_or_else(|| PLACEHOLDER.to_string(), |c| c.name.clone()),
        }
    }

    pub fn tutor_with_location(&self, tutor: &Tutor) -> TutorWithLocation {
        TutorWithLocation {
            tutor: tutor.clone(),
            location: self.location(&tutor.location_id).cloned(),
            user: self.user(&tutor.user_id).cloned(),
        }
    }
}

//=========================================================================================
// Batch helpers
//=========================================================================================

/// Enriches `courses` in order against one index over `store`.
pub fn enrich_courses(store: &EntityStore, courses: &[Course]) -> Vec<EnrichedCourse> {
    let index = JoinIndex::build(store);
    courses.iter().map(|c| index.enrich_course(c)).collect()
}

/// Attaches location and user to every tutor, in order.
pub fn tutors_with_location(store: &EntityStore, tutors: &[Tutor]) -> Vec<TutorWithLocation> {
    let index = JoinIndex::build(store);
    tutors.iter().map(|t| index.tutor_with_location(t)).collect()
}

/// The enriched course plus its instructor, or `None` when the course is missing.
pub fn course_detail(store: &EntityStore, course_id: &str) -> Option<CourseDetail> {
    let course = store.get_course_by_id(course_id)?;
    let index = JoinIndex::build(store);
    let instructor = index
        .tutor(&course.instructor_id)
        .map(|t| index.tutor_with_location(t));

    Some(CourseDetail {
        course: index.enrich_course(&course),
        instructor,
    })
}
