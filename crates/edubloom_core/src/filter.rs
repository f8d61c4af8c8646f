//! crates/edubloom_core/src/filter.rs
//!
//! Exact-match filters, one per entity kind.
//!
//! Every field is optional. An unset field places no constraint; a set field
//! requires the record's field to be equal to it (no partial, range or
//! case-insensitive matching). All set fields are combined with AND.

use crate::domain::{
    CartItem, Category, Course, CourseFormat, CourseLevel, CourseStatus, Enrollment,
    EnrollmentStatus, Location, LocationType, Role, Tutor, TutorStatus, User,
};

/// An exact-match predicate over records of type `T`.
pub trait Filter<T>: Default {
    /// A filter constraining only the id.
    fn with_id(id: impl Into<String>) -> Self;

    fn matches(&self, record: &T) -> bool;
}

fn eq<V: PartialEq>(wanted: &Option<V>, actual: &V) -> bool {
    match wanted {
        None => true,
        Some(value) => value == actual,
    }
}

fn eq_opt<V: PartialEq>(wanted: &Option<V>, actual: &Option<V>) -> bool {
    match wanted {
        None => true,
        Some(value) => actual.as_ref() == Some(value),
    }
}

macro_rules! setters {
    ($($name:ident: $ty:ty),+ $(,)?) => {
        $(
            pub fn $name(mut self, value: impl Into<$ty>) -> Self {
                self.$name = Some(value.into());
                self
            }
        )+
    };
}

//=========================================================================================
// Users
//=========================================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

impl UserFilter {
    pub fn new() -> Self {
        Self::default()
    }

    setters!(
        id: String,
        email: String,
        name: String,
        role: Role,
        city: String,
        state: String,
        zip_code: String,
        country: String,
    );
}

impl Filter<User> for UserFilter {
    fn with_id(id: impl Into<String>) -> Self {
        Self::new().id(id)
    }

    fn matches(&self, user: &User) -> bool {
        eq(&self.id, &user.id)
            && eq(&self.email, &user.email)
            && eq(&self.name, &user.name)
            && eq(&self.role, &user.role)
            && eq_opt(&self.city, &user.city)
            && eq_opt(&self.state, &user.state)
            && eq_opt(&self.zip_code, &user.zip_code)
            && eq_opt(&self.country, &user.country)
    }
}

//=========================================================================================
// Tutors
//=========================================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TutorFilter {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub status: Option<TutorStatus>,
    pub location_id: Option<String>,
}

impl TutorFilter {
    pub fn new() -> Self {
        Self::default()
    }

    setters!(
        id: String,
        user_id: String,
        title: String,
        status: TutorStatus,
        location_id: String,
    );
}

impl Filter<Tutor> for TutorFilter {
    fn with_id(id: impl Into<String>) -> Self {
        Self::new().id(id)
    }

    fn matches(&self, tutor: &Tutor) -> bool {
        eq(&self.id, &tutor.id)
            && eq(&self.user_id, &tutor.user_id)
            && eq(&self.title, &tutor.title)
            && eq(&self.status, &tutor.status)
            && eq(&self.location_id, &tutor.location_id)
    }
}

//=========================================================================================
// Courses
//=========================================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    pub id: Option<String>,
    pub title: Option<String>,
    pub instructor_id: Option<String>,
    pub category_id: Option<String>,
    pub level: Option<CourseLevel>,
    pub format: Option<CourseFormat>,
    pub status: Option<CourseStatus>,
}

impl CourseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    setters!(
        id: String,
        title: String,
        instructor_id: String,
        category_id: String,
        level: CourseLevel,
        format: CourseFormat,
        status: CourseStatus,
    );
}

impl Filter<Course> for CourseFilter {
    fn with_id(id: impl Into<String>) -> Self {
        Self::new().id(id)
    }

    fn matches(&self, course: &Course) -> bool {
        eq(&self.id, &course.id)
            && eq(&self.title, &course.title)
            && eq(&self.instructor_id, &course.instructor_id)
            && eq(&self.category_id, &course.category_id)
            && eq(&self.level, &course.level)
            && eq(&self.format, &course.format)
            && eq(&self.status, &course.status)
    }
}

//=========================================================================================
// Locations
//=========================================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationFilter {
    pub id: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub location_type: Option<LocationType>,
}

impl LocationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    setters!(
        id: String,
        city: String,
        state: String,
        zip_code: String,
        country: String,
        location_type: LocationType,
    );
}

impl Filter<Location> for LocationFilter {
    fn with_id(id: impl Into<String>) -> Self {
        Self::new().id(id)
    }

    fn matches(&self, location: &Location) -> bool {
        eq(&self.id, &location.id)
            && eq(&self.city, &location.city)
            && eq(&self.state, &location.state)
            && eq(&self.zip_code, &location.zip_code)
            && eq(&self.country, &location.country)
            && eq(&self.location_type, &location.location_type)
    }
}

//=========================================================================================
// Categories
//=========================================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFilter {
    pub id: Option<String>,
    pub name: Option<String>,
    pub parent_id: Option<String>,
    pub is_active: Option<bool>,
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    setters!(id: String, name: String, parent_id: String, is_active: bool);
}

impl Filter<Category> for CategoryFilter {
    fn with_id(id: impl Into<String>) -> Self {
        Self::new().id(id)
    }

    fn matches(&self, category: &Category) -> bool {
        eq(&self.id, &category.id)
            && eq(&self.name, &category.name)
            && eq_opt(&self.parent_id, &category.parent_id)
            && eq(&self.is_active, &category.is_active)
    }
}

//=========================================================================================
// Enrollments and cart items
//=========================================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentFilter {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub course_id: Option<String>,
    pub status: Option<EnrollmentStatus>,
}

impl EnrollmentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    setters!(
        id: String,
        user_id: String,
        course_id: String,
        status: EnrollmentStatus,
    );
}

impl Filter<Enrollment> for EnrollmentFilter {
    fn with_id(id: impl Into<String>) -> Self {
        Self::new().id(id)
    }

    fn matches(&self, enrollment: &Enrollment) -> bool {
        eq(&self.id, &enrollment.id)
            && eq(&self.user_id, &enrollment.user_id)
            && eq(&self.course_id, &enrollment.course_id)
            && eq(&self.status, &enrollment.status)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartItemFilter {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub course_id: Option<String>,
}

impl CartItemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    setters!(id: String, user_id: String, course_id: String);
}

impl Filter<CartItem> for CartItemFilter {
    fn with_id(id: impl Into<String>) -> Self {
        Self::new().id(id)
    }

    fn matches(&self, item: &CartItem) -> bool {
        eq(&self.id, &item.id)
            && eq(&self.user_id, &item.user_id)
            && eq(&self.course_id, &item.course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(city: Option<&str>) -> User {
        let now = Utc::now();
        User {
            id: "u1".to_string(),
            email: "a@b.c".to_string(),
            name: "Ada".to_string(),
            role: Role::Student,
            avatar: None,
            phone: None,
            address: None,
            city: city.map(str::to_string),
            state: None,
            zip_code: None,
            country: None,
            preferences: Default::default(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(UserFilter::new().matches(&user(None)));
    }

    #[test]
    fn string_fields_are_case_sensitive() {
        let record = user(Some("Boston"));
        assert!(UserFilter::new().city("Boston").matches(&record));
        assert!(!UserFilter::new().city("boston").matches(&record));
    }

    #[test]
    fn optional_record_field_never_matches_a_set_filter_when_absent() {
        assert!(!UserFilter::new().city("Boston").matches(&user(None)));
    }

    #[test]
    fn all_fields_must_match() {
        let record = user(Some("Boston"));
        assert!(UserFilter::new()
            .role(Role::Student)
            .city("Boston")
            .matches(&record));
        assert!(!UserFilter::new()
            .role(Role::Tutor)
            .city("Boston")
            .matches(&record));
    }
}
