//! crates/edubloom_core/src/patch.rs
//!
//! Partial updates, one per entity kind. Only the fields that are `Some`
//! are written; kinds that carry an `updated_at` timestamp have it refreshed.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{
    CartItem, Category, Coordinates, Course, CourseFormat, CourseLevel, CourseStatus, Enrollment,
    EnrollmentStatus, Location, LocationType, Preferences, Role, Tutor, TutorStatus, User,
};

/// Merges a set of optional fields into a record of type `T`.
pub trait Patch<T> {
    fn apply_to(self, record: &mut T, now: DateTime<Utc>);
}

fn set<V>(field: &mut V, value: Option<V>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn set_opt<V>(field: &mut Option<V>, value: Option<V>) {
    if value.is_some() {
        *field = value;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub preferences: Option<Preferences>,
}

impl Patch<User> for UserPatch {
    fn apply_to(self, user: &mut User, now: DateTime<Utc>) {
        set(&mut user.email, self.email);
        set(&mut user.name, self.name);
        set(&mut user.role, self.role);
        set_opt(&mut user.avatar, self.avatar);
        set_opt(&mut user.phone, self.phone);
        set_opt(&mut user.address, self.address);
        set_opt(&mut user.city, self.city);
        set_opt(&mut user.state, self.state);
        set_opt(&mut user.zip_code, self.zip_code);
        set_opt(&mut user.country, self.country);
        set(&mut user.preferences, self.preferences);
        user.updated_at = now;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorPatch {
    pub title: Option<String>,
    pub experience: Option<String>,
    pub bio: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub hourly_rate: Option<f64>,
    pub availability: Option<Vec<String>>,
    pub education: Option<Vec<String>>,
    pub certifications: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub teaching_style: Option<String>,
    pub specializations: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub total_students: Option<u32>,
    pub total_reviews: Option<u32>,
    pub status: Option<TutorStatus>,
    pub location_id: Option<String>,
}

impl Patch<Tutor> for TutorPatch {
    fn apply_to(self, tutor: &mut Tutor, now: DateTime<Utc>) {
        set(&mut tutor.title, self.title);
        set(&mut tutor.experience, self.experience);
        set(&mut tutor.bio, self.bio);
        set(&mut tutor.subjects, self.subjects);
        set(&mut tutor.hourly_rate, self.hourly_rate);
        set(&mut tutor.availability, self.availability);
        set(&mut tutor.education, self.education);
        set(&mut tutor.certifications, self.certifications);
        set(&mut tutor.languages, self.languages);
        set(&mut tutor.teaching_style, self.teaching_style);
        set(&mut tutor.specializations, self.specializations);
        set(&mut tutor.rating, self.rating);
        set(&mut tutor.total_students, self.total_students);
        set(&mut tutor.total_reviews, self.total_reviews);
        set(&mut tutor.status, self.status);
        set(&mut tutor.location_id, self.location_id);
        tutor.updated_at = now;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructor_id: Option<String>,
    pub category_id: Option<String>,
    pub level: Option<CourseLevel>,
    pub duration: Option<u32>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub image: Option<String>,
    pub video_url: Option<String>,
    pub topics: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
    pub outcomes: Option<Vec<String>>,
    pub schedule: Option<Vec<String>>,
    pub format: Option<CourseFormat>,
    pub max_students: Option<u32>,
    pub current_students: Option<u32>,
    pub rating: Option<f64>,
    pub total_reviews: Option<u32>,
    pub status: Option<CourseStatus>,
}

impl Patch<Course> for CoursePatch {
    fn apply_to(self, course: &mut Course, now: DateTime<Utc>) {
        set(&mut course.title, self.title);
        set(&mut course.description, self.description);
        set(&mut course.instructor_id, self.instructor_id);
        set(&mut course.category_id, self.category_id);
        set(&mut course.level, self.level);
        set(&mut course.duration, self.duration);
        set(&mut course.price, self.price);
        set(&mut course.original_price, self.original_price);
        set(&mut course.image, self.image);
        set_opt(&mut course.video_url, self.video_url);
        set(&mut course.topics, self.topics);
        set(&mut course.requirements, self.requirements);
        set(&mut course.outcomes, self.outcomes);
        set(&mut course.schedule, self.schedule);
        set(&mut course.format, self.format);
        set(&mut course.max_students, self.max_students);
        set(&mut course.current_students, self.current_students);
        set(&mut course.rating, self.rating);
        set(&mut course.total_reviews, self.total_reviews);
        set(&mut course.status, self.status);
        course.updated_at = now;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPatch {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub coordinates: Option<Coordinates>,
    #[serde(rename = "type")]
    pub location_type: Option<LocationType>,
    pub description: Option<String>,
}

impl Patch<Location> for LocationPatch {
    fn apply_to(self, location: &mut Location, now: DateTime<Utc>) {
        set(&mut location.address, self.address);
        set(&mut location.city, self.city);
        set(&mut location.state, self.state);
        set(&mut location.zip_code, self.zip_code);
        set(&mut location.country, self.country);
        set(&mut location.coordinates, self.coordinates);
        set(&mut location.location_type, self.location_type);
        set_opt(&mut location.description, self.description);
        location.updated_at = now;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub parent_id: Option<String>,
    pub is_active: Option<bool>,
}

impl Patch<Category> for CategoryPatch {
    fn apply_to(self, category: &mut Category, now: DateTime<Utc>) {
        set(&mut category.name, self.name);
        set(&mut category.description, self.description);
        set(&mut category.icon, self.icon);
        set(&mut category.color, self.color);
        set_opt(&mut category.parent_id, self.parent_id);
        set(&mut category.is_active, self.is_active);
        category.updated_at = now;
    }
}

/// Enrollments carry no `updated_at`; `now` is unused.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentPatch {
    pub status: Option<EnrollmentStatus>,
    pub completed_at: Option<DateTime<Utc>>,
    pub progress: Option<u8>,
    pub certificate_url: Option<String>,
}

impl Patch<Enrollment> for EnrollmentPatch {
    fn apply_to(self, enrollment: &mut Enrollment, _now: DateTime<Utc>) {
        set(&mut enrollment.status, self.status);
        set_opt(&mut enrollment.completed_at, self.completed_at);
        set(&mut enrollment.progress, self.progress.map(|p| p.min(100)));
        set_opt(&mut enrollment.certificate_url, self.certificate_url);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemPatch {
    pub course_id: Option<String>,
}

impl Patch<CartItem> for CartItemPatch {
    fn apply_to(self, item: &mut CartItem, _now: DateTime<Utc>) {
        set(&mut item.course_id, self.course_id);
    }
}
