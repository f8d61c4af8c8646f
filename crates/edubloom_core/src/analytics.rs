//! crates/edubloom_core/src/analytics.rs
//!
//! Platform-wide figures for the admin dashboard, computed on demand from the store.

use serde::Serialize;

use crate::domain::{Course, Tutor, User};
use crate::enrich::JoinIndex;
use crate::store::EntityStore;

/// How many categories the dashboard ranks.
pub const TOP_CATEGORY_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformAnalytics {
    pub total_users: usize,
    pub total_courses: usize,
    /// Σ price × current students.
    pub total_revenue: f64,
    /// Mean course rating, 0 with no courses.
    pub average_rating: f64,
    /// Σ current students.
    pub total_enrollments: u64,
    pub active_tutors: usize,
    pub top_categories: Vec<CategoryCount>,
}

impl PlatformAnalytics {
    pub fn compute(store: &EntityStore) -> Self {
        let courses = store.all::<Course>();

        let total_revenue = courses
            .iter()
            .map(|c| c.price * f64::from(c.current_students))
            .sum();
        let average_rating = if courses.is_empty() {
            0.0
        } else {
            courses.iter().map(|c| c.rating).sum::<f64>() / courses.len() as f64
        };
        let total_enrollments = courses.iter().map(|c| u64::from(c.current_students)).sum();

        Self {
            total_users: store.len::<User>(),
            total_courses: courses.len(),
            total_revenue,
            average_rating,
            total_enrollments,
            active_tutors: store.len::<Tutor>(),
            top_categories: top_categories(store, courses),
        }
    }
}

/// Courses per resolved category name, most first. Ties keep first-seen order
/// and courses whose category is missing are not counted.
fn top_categories(store: &EntityStore, courses: &[Course]) -> Vec<CategoryCount> {
    let index = JoinIndex::build(store);
    let mut counts: Vec<CategoryCount> = Vec::new();

    for category in courses.iter().filter_map(|c| index.category(&c.category_id)) {
        match counts.iter_mut().find(|entry| entry.name == category.name) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                name: category.name.clone(),
                count: 1,
            }),
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_CATEGORY_LIMIT);
    counts
}
